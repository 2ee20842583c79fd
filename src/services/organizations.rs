//! Organization list filtering.

use serde::Deserialize;

use crate::models::organization::Organization;
use crate::services::contains_ci;

/// Filters for listing organizations. Unknown query parameters are ignored.
/// Both are case-insensitive substring matches.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct OrganizationFilters {
    pub name: Option<String>,
    pub affiliation: Option<String>,
}

pub fn apply(filters: &OrganizationFilters, items: Vec<Organization>) -> Vec<Organization> {
    items
        .into_iter()
        .filter(|org| {
            filters
                .name
                .as_deref()
                .map_or(true, |name| contains_ci(Some(org.name.as_str()), name))
                && filters.affiliation.as_deref().map_or(true, |affiliation| {
                    contains_ci(org.affiliation.as_deref(), affiliation)
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn organization(id: i64, name: &str, affiliation: Option<&str>) -> Organization {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "name": name,
            "affiliation": affiliation,
        }))
        .unwrap()
    }

    #[test]
    fn affiliation_filter_is_substring() {
        let items = vec![
            organization(1, "Survey Corps", Some("Eldia")),
            organization(2, "Warrior Unit", Some("Marley")),
            organization(3, "Anti-Marleyan Volunteers", None),
        ];
        let filters = OrganizationFilters {
            affiliation: Some("marley".to_string()),
            ..Default::default()
        };
        let matched = apply(&filters, items);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, 2);
    }
}
