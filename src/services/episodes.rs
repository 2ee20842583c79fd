//! Episode list filtering.

use serde::Deserialize;

use crate::models::episode::Episode;
use crate::services::contains_ci;

/// Filters for listing episodes. Unknown query parameters are ignored.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct EpisodeFilters {
    /// Substring match, case-insensitive.
    pub name: Option<String>,
    /// Substring match on the episode code (e.g. "S1"), case-insensitive.
    pub episode: Option<String>,
}

pub fn apply(filters: &EpisodeFilters, items: Vec<Episode>) -> Vec<Episode> {
    items
        .into_iter()
        .filter(|ep| {
            filters
                .name
                .as_deref()
                .map_or(true, |name| contains_ci(Some(ep.name.as_str()), name))
                && filters
                    .episode
                    .as_deref()
                    .map_or(true, |code| contains_ci(Some(ep.episode.as_str()), code))
        })
        .collect()
}
