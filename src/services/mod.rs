//! Response-narrowing logic: per-resource field filters and ID lookup.

pub mod characters;
pub mod episodes;
pub mod locations;
pub mod lookup;
pub mod organizations;
pub mod titans;

/// Case-insensitive substring match. An absent field never matches.
pub(crate) fn contains_ci(field: Option<&str>, needle: &str) -> bool {
    field
        .map(|value| value.to_lowercase().contains(&needle.to_lowercase()))
        .unwrap_or(false)
}

/// Case-insensitive equality. An absent field never matches.
pub(crate) fn eq_ci(field: Option<&str>, expected: &str) -> bool {
    field
        .map(|value| value.to_lowercase() == expected.to_lowercase())
        .unwrap_or(false)
}
