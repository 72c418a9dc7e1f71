//! Field descriptor tables for decode destinations.
//!
//! A table is built once per destination and describes, for every field, the
//! query parameter it binds to and how its value is converted.

mod dynamic;
mod tags;
mod typed;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::DecoderConfig;

pub use dynamic::{FieldConfig, RecordSchema, SchemaFile};
pub use tags::FieldOptions;
pub use typed::{Accessor, QueryRecord, Schema, SchemaBuilder};

/// Closed set of conversion targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    #[serde(alias = "integer")]
    Int,
    Float,
    #[serde(alias = "str")]
    String,
    #[serde(alias = "slice")]
    List,
    #[serde(alias = "map")]
    Filter,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Int => write!(f, "int"),
            FieldKind::Float => write!(f, "float"),
            FieldKind::String => write!(f, "string"),
            FieldKind::List => write!(f, "list"),
            FieldKind::Filter => write!(f, "filter"),
        }
    }
}

/// Resolved description of one destination field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Internal field name, used in error messages.
    pub name: String,
    /// Query parameter the field binds to.
    pub display: String,
    /// Item separator override; the decoder default applies when unset.
    pub separator: Option<String>,
    pub operators: crate::filter::OperatorSet,
    pub kind: FieldKind,
}

impl FieldSpec {
    /// Resolve a field from its name, kind and option string.
    pub fn new(
        name: impl Into<String>,
        kind: FieldKind,
        tag: &str,
        config: &DecoderConfig,
    ) -> Self {
        let name = name.into();
        let options = FieldOptions::parse(tag);

        let operators = match kind {
            FieldKind::Filter => options.operators(&config.operator_separator),
            _ => Default::default(),
        };

        Self {
            display: options.name.unwrap_or_else(|| name.to_lowercase()),
            separator: options.sep,
            operators,
            kind,
            name,
        }
    }

    pub fn separator<'a>(&'a self, default: &'a str) -> &'a str {
        self.separator.as_deref().unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_defaults_to_lowercased_name() {
        let spec = FieldSpec::new("Embed", FieldKind::List, "", &DecoderConfig::default());
        assert_eq!(spec.display, "embed");
        assert_eq!(spec.separator(","), ",");
        assert!(spec.operators.is_empty());
    }

    #[test]
    fn options_override_defaults() {
        let spec = FieldSpec::new(
            "Filter",
            FieldKind::Filter,
            "name:where sep:| ops:>,==",
            &DecoderConfig::default(),
        );
        assert_eq!(spec.display, "where");
        assert_eq!(spec.separator(","), "|");
        assert_eq!(spec.operators.len(), 2);
    }

    #[test]
    fn operators_only_resolved_for_filters() {
        let spec = FieldSpec::new("Ids", FieldKind::List, "ops:>", &DecoderConfig::default());
        assert!(spec.operators.is_empty());
    }
}
