//! Character list filtering.

use serde::Deserialize;

use crate::models::character::Character;
use crate::services::{contains_ci, eq_ci};

/// Filters for listing characters. Unknown query parameters are ignored.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CharacterFilters {
    /// Substring match, case-insensitive.
    pub name: Option<String>,
    /// Exact match, case-insensitive.
    pub gender: Option<String>,
    /// Exact match, case-insensitive.
    pub status: Option<String>,
    /// Exact match, case-insensitive.
    pub occupation: Option<String>,
}

pub fn apply(filters: &CharacterFilters, items: Vec<Character>) -> Vec<Character> {
    items
        .into_iter()
        .filter(|character| {
            filters
                .name
                .as_deref()
                .map_or(true, |name| contains_ci(Some(character.name.as_str()), name))
                && filters
                    .gender
                    .as_deref()
                    .map_or(true, |gender| eq_ci(character.gender.as_deref(), gender))
                && filters
                    .status
                    .as_deref()
                    .map_or(true, |status| eq_ci(character.status.as_deref(), status))
                && filters
                    .occupation
                    .as_deref()
                    .map_or(true, |occupation| eq_ci(character.occupation.as_deref(), occupation))
        })
        .collect()
}
