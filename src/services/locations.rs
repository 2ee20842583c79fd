//! Location list filtering.

use serde::Deserialize;

use crate::models::location::Location;
use crate::services::contains_ci;

/// Filters for listing locations. Unknown query parameters are ignored.
/// All three are case-insensitive substring matches.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct LocationFilters {
    pub name: Option<String>,
    pub territory: Option<String>,
    pub region: Option<String>,
}

pub fn apply(filters: &LocationFilters, items: Vec<Location>) -> Vec<Location> {
    items
        .into_iter()
        .filter(|location| {
            filters
                .name
                .as_deref()
                .map_or(true, |name| contains_ci(Some(location.name.as_str()), name))
                && filters
                    .territory
                    .as_deref()
                    .map_or(true, |territory| {
                        contains_ci(location.territory.as_deref(), territory)
                    })
                && filters
                    .region
                    .as_deref()
                    .map_or(true, |region| contains_ci(location.region.as_deref(), region))
        })
        .collect()
}
