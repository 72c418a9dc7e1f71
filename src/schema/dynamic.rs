//! Descriptor tables loaded from schema files.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{FieldKind, FieldSpec};
use crate::config::DecoderConfig;
use crate::error::Error;

/// Raw field entry from a schema file (before resolution).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FieldConfig {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    /// Option string, e.g. `sep:| ops:>=,==`.
    #[serde(default)]
    pub tag: String,
}

/// Raw schema file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SchemaFile {
    pub fields: Vec<FieldConfig>,
}

/// Descriptor table for records decoded into JSON objects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSchema {
    fields: Vec<FieldSpec>,
}

impl RecordSchema {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    /// Resolve every field of a schema file.
    pub fn compile(file: &SchemaFile, config: &DecoderConfig) -> Self {
        let fields = file
            .fields
            .iter()
            .map(|field| FieldSpec::new(field.name.clone(), field.kind, &field.tag, config))
            .collect();
        Self { fields }
    }

    /// Load and resolve a schema file (YAML, JSON or TOML by extension).
    pub fn load(path: &Path, config: &DecoderConfig) -> Result<Self, Error> {
        let settings = ::config::Config::builder()
            .add_source(::config::File::from(path))
            .build()?;
        let file: SchemaFile = settings.try_deserialize()?;
        Ok(Self::compile(&file, config))
    }

    pub fn fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
