//! Route handlers, one module per resource.

pub mod characters;
pub mod episodes;
pub mod health;
pub mod locations;
pub mod organizations;
pub mod root;
pub mod titans;

use serde::Serialize;

use crate::errors::AppError;

/// Shape the ID-lookup response: a single JSON object when exactly one
/// entity matched, otherwise a JSON array (possibly empty). Zero matches
/// are still HTTP 200.
pub(crate) fn one_or_many<T: Serialize>(mut matched: Vec<T>) -> Result<serde_json::Value, AppError> {
    let value = if matched.len() == 1 {
        serde_json::to_value(matched.remove(0))
    } else {
        serde_json::to_value(matched)
    };
    value.map_err(|e| AppError::Internal(format!("Failed to serialize response: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_match_is_an_object() {
        let value = one_or_many(vec![serde_json::json!({"id": 1})]).unwrap();
        assert!(value.is_object());
    }

    #[test]
    fn zero_or_many_matches_are_arrays() {
        assert!(one_or_many(Vec::<serde_json::Value>::new()).unwrap().is_array());
        let value =
            one_or_many(vec![serde_json::json!({"id": 1}), serde_json::json!({"id": 2})]).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
    }
}
