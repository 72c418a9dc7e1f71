//! Splits filter strings into normalized `field operator value` entries.

use super::map::{FilterEntry, FilterMap};
use super::ops::OperatorSet;

/// Result of tokenizing a filter string, including items that held no
/// recognized operator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokenized {
    pub filters: FilterMap,
    pub unmatched: Vec<String>,
}

/// Scan one item for its first operator occurrence.
fn split_item(item: &str, operators: &OperatorSet) -> Option<FilterEntry> {
    for (i, _) in item.char_indices() {
        let rest = &item[i..];
        if let Some(op) = operators.match_prefix(rest) {
            return Some(FilterEntry {
                field: item[..i].to_lowercase(),
                operator: op.to_string(),
                value: rest[op.len()..].to_string(),
            });
        }
    }
    None
}

/// Tokenize `raw` and report items without a recognized operator.
pub fn tokenize_items(raw: &str, separator: &str, operators: &OperatorSet) -> Tokenized {
    let mut out = Tokenized::default();

    if raw.is_empty() {
        return out;
    }
    if separator.is_empty() {
        out.unmatched.push(raw.to_string());
        return out;
    }

    for item in raw.split(separator).filter(|item| !item.is_empty()) {
        match split_item(item, operators) {
            Some(entry) => {
                out.filters.insert(entry);
            }
            None => out.unmatched.push(item.to_string()),
        }
    }

    out
}

/// Tokenize a filter string into a [`FilterMap`].
///
/// Never fails: items without a recognized operator are dropped.
pub fn tokenize(raw: &str, separator: &str, operators: &OperatorSet) -> FilterMap {
    tokenize_items(raw, separator, operators).filters
}
