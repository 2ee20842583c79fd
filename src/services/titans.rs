//! Titan list filtering.

use serde::Deserialize;

use crate::models::titan::Titan;
use crate::services::{contains_ci, eq_ci};

/// Filters for listing titans. Unknown query parameters are ignored.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct TitanFilters {
    /// Substring match, case-insensitive.
    pub name: Option<String>,
    /// Exact match, case-insensitive.
    pub allegiance: Option<String>,
}

pub fn apply(filters: &TitanFilters, items: Vec<Titan>) -> Vec<Titan> {
    items
        .into_iter()
        .filter(|titan| {
            filters
                .name
                .as_deref()
                .map_or(true, |name| contains_ci(Some(titan.name.as_str()), name))
                && filters.allegiance.as_deref().map_or(true, |allegiance| {
                    eq_ci(titan.allegiance.as_deref(), allegiance)
                })
        })
        .collect()
}
