use std::collections::BTreeMap;

use proptest::prelude::*;
use qparams::{OperatorSet, tokenize, tokenize_items};

fn symbol_ops() -> OperatorSet {
    OperatorSet::new([">=", "==", "!=", ">", "<", "-like-"])
}

/// Whether `item` contains any of [`symbol_ops`]; `>=` is covered by `>`.
fn has_operator(item: &str) -> bool {
    [">", "<", "==", "!=", "-like-"]
        .iter()
        .any(|op| item.contains(op))
}

fn entry() -> impl Strategy<Value = (String, &'static str, String)> {
    (
        "[a-z]{1,6}",
        prop::sample::select(vec!["==", "!=", "<", ">", "-like-"]),
        "[a-z0-9]{0,6}",
    )
}

proptest! {
    /// Serializing entries and tokenizing them back yields the same entries,
    /// with later duplicates replacing earlier ones.
    #[test]
    fn entries_round_trip(entries in prop::collection::vec(entry(), 0..12)) {
        let raw = entries
            .iter()
            .map(|(f, op, v)| format!("{f}{op}{v}"))
            .collect::<Vec<_>>()
            .join(",");

        let mut expected = BTreeMap::new();
        for (f, op, v) in &entries {
            expected.insert(format!("{f} {op}"), v.clone());
        }

        let ops = OperatorSet::new(["==", "!=", "<", ">", "-like-"]);
        let got: BTreeMap<String, String> = tokenize(&raw, ",", &ops)
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        prop_assert_eq!(got, expected);
    }

    /// Re-tokenizing the serialized form of a map reproduces the map.
    #[test]
    fn tokenizing_is_idempotent(raw in "[a-z0-9<>=!,-]{0,40}") {
        let ops = symbol_ops();
        let first = tokenize(&raw, ",", &ops);
        let second = tokenize(&first.to_filter_string(","), ",", &ops);
        prop_assert_eq!(first, second);
    }

    /// Items carrying a declared operator become entries; all others are
    /// reported as unmatched.
    #[test]
    fn every_item_is_accounted_for(raw in "[a-z0-9<>=!,-]{0,40}") {
        let out = tokenize_items(&raw, ",", &symbol_ops());
        let items: Vec<&str> = raw.split(',').filter(|i| !i.is_empty()).collect();
        let matched = items.iter().filter(|i| has_operator(i)).count();

        prop_assert_eq!(out.unmatched.len(), items.len() - matched);
        prop_assert!(out.filters.len() <= matched);
        for item in &out.unmatched {
            prop_assert!(!has_operator(item), "unmatched item {:?} has an operator", item);
        }
    }

    /// Arbitrary input, separators and operators never panic.
    #[test]
    fn never_panics(
        raw in ".{0,40}",
        sep in ".{0,3}",
        ops in prop::collection::vec(".{0,7}", 0..6),
    ) {
        let ops = OperatorSet::new(ops);
        let _ = tokenize_items(&raw, &sep, &ops);
    }

    /// Fields come out lower-cased; values are untouched.
    #[test]
    fn fields_lowercased_values_verbatim(
        field in "[A-Za-z]{1,8}",
        value in "[A-Za-z0-9]{0,8}",
    ) {
        let map = tokenize(&format!("{field}=={value}"), ",", &symbol_ops());
        let key = format!("{} ==", field.to_lowercase());
        prop_assert_eq!(map.get(&key), Some(value.as_str()));
    }
}
