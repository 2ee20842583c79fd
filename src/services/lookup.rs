//! Multi-ID lookup shared by all `/<resource>/{ids}` endpoints.

use crate::models::Identified;

/// Subset of `items` whose id matches any of the comma-separated tokens in
/// `ids`.
///
/// Collection order is preserved regardless of the order the ids were
/// requested in. Tokens that fail to parse match nothing, and duplicate
/// tokens do not duplicate matches. No match yields an empty vec, never an
/// error.
pub fn filter_by_ids<T: Identified>(items: Vec<T>, ids: &str) -> Vec<T> {
    let requested: Vec<i64> = ids
        .split(',')
        .filter_map(|token| token.trim().parse().ok())
        .collect();

    items
        .into_iter()
        .filter(|item| requested.contains(&item.id()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Record(i64);

    impl Identified for Record {
        fn id(&self) -> i64 {
            self.0
        }
    }

    fn records() -> Vec<Record> {
        vec![Record(1), Record(3), Record(5), Record(7)]
    }

    fn ids_of(items: &[Record]) -> Vec<i64> {
        items.iter().map(|r| r.0).collect()
    }

    #[test]
    fn preserves_collection_order() {
        let matched = filter_by_ids(records(), "7,3");
        assert_eq!(ids_of(&matched), vec![3, 7]);
    }

    #[test]
    fn duplicate_ids_do_not_duplicate_matches() {
        let matched = filter_by_ids(records(), "5,5,5");
        assert_eq!(ids_of(&matched), vec![5]);
    }

    #[test]
    fn unparsable_tokens_match_nothing() {
        let matched = filter_by_ids(records(), "abc,3");
        assert_eq!(ids_of(&matched), vec![3]);
        assert!(filter_by_ids(records(), "abc").is_empty());
    }

    #[test]
    fn unknown_ids_yield_empty_result() {
        assert!(filter_by_ids(records(), "999").is_empty());
    }
}
