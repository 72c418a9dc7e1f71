//! Normalized filter maps.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// One `field operator value` constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterEntry {
    pub field: String,
    pub operator: String,
    pub value: String,
}

impl FilterEntry {
    /// Map key for this entry: `"<field> <operator>"`.
    pub fn key(&self) -> String {
        compose_key(&self.field, &self.operator)
    }
}

/// Source form, e.g. `age>=7`.
impl fmt::Display for FilterEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.field, self.operator, self.value)
    }
}

fn compose_key(field: &str, operator: &str) -> String {
    format!("{} {}", field, operator)
}

/// Mapping from `"<field> <operator>"` to value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterMap {
    entries: BTreeMap<String, FilterEntry>,
}

impl FilterMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, replacing any previous entry with the same key.
    pub fn insert(&mut self, entry: FilterEntry) -> Option<FilterEntry> {
        self.entries.insert(entry.key(), entry)
    }

    /// Look up a value by composed key, e.g. `"age >="`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|e| e.value.as_str())
    }

    /// Look up a value by field and operator. The field is matched lower-cased.
    pub fn get_op(&self, field: &str, operator: &str) -> Option<&str> {
        self.get(&compose_key(&field.to_lowercase(), operator))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(k, e)| (k.as_str(), e.value.as_str()))
    }

    pub fn entries(&self) -> impl Iterator<Item = &FilterEntry> {
        self.entries.values()
    }

    /// Entries whose field matches `field`.
    pub fn for_field<'a>(&'a self, field: &str) -> impl Iterator<Item = &'a FilterEntry> {
        let field = field.to_lowercase();
        self.entries.values().filter(move |e| e.field == field)
    }

    /// Re-serialize into filter-string form joined by `separator`.
    pub fn to_filter_string(&self, separator: &str) -> String {
        self.entries
            .values()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(separator)
    }
}

impl FromIterator<FilterEntry> for FilterMap {
    fn from_iter<T: IntoIterator<Item = FilterEntry>>(iter: T) -> Self {
        let mut map = FilterMap::new();
        for entry in iter {
            map.insert(entry);
        }
        map
    }
}

impl Serialize for FilterMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(field: &str, operator: &str, value: &str) -> FilterEntry {
        FilterEntry {
            field: field.into(),
            operator: operator.into(),
            value: value.into(),
        }
    }

    #[test]
    fn last_write_wins() {
        let mut map = FilterMap::new();
        map.insert(entry("age", ">", "7"));
        let previous = map.insert(entry("age", ">", "9"));

        assert_eq!(previous.map(|e| e.value), Some("7".to_string()));
        assert_eq!(map.get("age >"), Some("9"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn lookup_by_parts() {
        let map: FilterMap = [entry("first name", "==", "Jo")].into_iter().collect();
        assert_eq!(map.get_op("First Name", "=="), Some("Jo"));
        assert_eq!(map.get("first name =="), Some("Jo"));
        assert_eq!(map.for_field("FIRST NAME").count(), 1);
    }

    #[test]
    fn serializes_as_flat_map() {
        let map: FilterMap = [entry("age", ">=", "7"), entry("gender", "==", "0")]
            .into_iter()
            .collect();
        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(json, serde_json::json!({"age >=": "7", "gender ==": "0"}));
    }

    #[test]
    fn filter_string_uses_source_form() {
        let map: FilterMap = [entry("age", ">=", "7"), entry("name", "-like-", "Doe")]
            .into_iter()
            .collect();
        assert_eq!(map.to_filter_string("|"), "age>=7|name-like-Doe");
    }
}
