//! Decoding driver: binds query values to destination fields.

mod value;

use serde_json::Value;

use crate::config::DecoderConfig;
use crate::error::{ConversionError, ConversionErrors, ConversionKind, Error};
use crate::filter::tokenize_items;
use crate::query::QueryValues;
use crate::schema::{Accessor, FieldKind, FieldSpec, QueryRecord, RecordSchema, Schema};
use crate::values::Slice;

pub use value::FieldValue;

/// Decodes query parameters into records described by a field table.
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    config: DecoderConfig,
}

impl Decoder {
    pub fn new(config: DecoderConfig) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode into a struct using its own descriptor table.
    pub fn decode<R: QueryRecord>(&self, dest: &mut R, source: &QueryValues) -> Result<(), Error> {
        self.decode_with(R::schema(), dest, source)
    }

    /// Decode the query of an absolute URL into a struct.
    pub fn decode_url<R: QueryRecord>(&self, dest: &mut R, url: &str) -> Result<(), Error> {
        let source = QueryValues::from_url_str(url)?;
        self.decode(dest, &source)
    }

    /// Decode into a struct with an explicit descriptor table.
    pub fn decode_with<R>(
        &self,
        schema: &Schema<R>,
        dest: &mut R,
        source: &QueryValues,
    ) -> Result<(), Error> {
        let mut errors = Vec::new();

        for (spec, accessor) in schema.fields() {
            let Some(raw) = lookup(spec, source) else {
                continue;
            };
            if let Some(value) = self.convert(spec, raw, &mut errors) {
                assign(accessor, dest, value);
            }
        }

        finish(errors)
    }

    /// Decode into a JSON object. Any other destination is rejected before
    /// anything is written.
    pub fn decode_value(
        &self,
        schema: &RecordSchema,
        dest: &mut Value,
        source: &QueryValues,
    ) -> Result<(), Error> {
        let Value::Object(record) = dest else {
            return Err(Error::WrongDestType);
        };

        let mut errors = Vec::new();

        for spec in schema.fields() {
            let Some(raw) = lookup(spec, source) else {
                continue;
            };
            if let Some(value) = self.convert(spec, raw, &mut errors) {
                record.insert(spec.name.clone(), value.into_json());
            }
        }

        finish(errors)
    }

    /// Convert one raw value per its field kind. Failures are pushed onto
    /// `errors`; `None` means nothing should be assigned.
    pub fn convert(
        &self,
        spec: &FieldSpec,
        raw: &str,
        errors: &mut Vec<ConversionError>,
    ) -> Option<FieldValue> {
        tracing::trace!("Decode: field {} ({}) <- '{}'", spec.name, spec.kind, raw);

        match spec.kind {
            FieldKind::Filter => {
                let separator = spec.separator(&self.config.item_separator);
                let out = tokenize_items(raw, separator, &spec.operators);
                for item in out.unmatched {
                    tracing::debug!(
                        "Decode: field {} has no recognized operator in '{}'",
                        spec.name,
                        item
                    );
                    if self.config.strict_filters {
                        errors.push(conversion_error(spec, ConversionKind::Filter, &item));
                    }
                }
                Some(FieldValue::Filter(out.filters))
            }
            FieldKind::List => {
                let separator = spec.separator(&self.config.item_separator);
                Some(FieldValue::List(split_list(raw, separator)))
            }
            FieldKind::Int => match raw.parse::<i64>() {
                Ok(v) => Some(FieldValue::Int(v)),
                Err(e) => {
                    tracing::debug!("Decode: field {} integer parse failed: {}", spec.name, e);
                    errors.push(conversion_error(spec, ConversionKind::Integer, raw));
                    None
                }
            },
            FieldKind::Float => match raw.parse::<f64>() {
                Ok(v) => Some(FieldValue::Float(v)),
                Err(e) => {
                    tracing::debug!("Decode: field {} float parse failed: {}", spec.name, e);
                    errors.push(conversion_error(spec, ConversionKind::Float, raw));
                    None
                }
            },
            FieldKind::String => Some(FieldValue::String(raw.to_string())),
        }
    }
}

/// Query value bound to `spec`; empty values count as absent.
fn lookup<'a>(spec: &FieldSpec, source: &'a QueryValues) -> Option<&'a str> {
    source.get(&spec.display).filter(|raw| !raw.is_empty())
}

/// Split on `separator`, lower-case members and drop empty ones.
pub fn split_list(raw: &str, separator: &str) -> Slice {
    if separator.is_empty() {
        return Slice::new(vec![raw.to_lowercase()]);
    }
    raw.split(separator)
        .filter(|member| !member.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .into()
}

fn conversion_error(spec: &FieldSpec, kind: ConversionKind, text: &str) -> ConversionError {
    ConversionError {
        field: spec.name.clone(),
        kind,
        text: text.to_string(),
    }
}

fn assign<R>(accessor: &Accessor<R>, dest: &mut R, value: FieldValue) {
    match (accessor, value) {
        (Accessor::Int(get), FieldValue::Int(v)) => *get(dest) = v,
        (Accessor::Float(get), FieldValue::Float(v)) => *get(dest) = v,
        (Accessor::String(get), FieldValue::String(v)) => *get(dest) = v,
        (Accessor::List(get), FieldValue::List(v)) => *get(dest) = v,
        (Accessor::Filter(get), FieldValue::Filter(v)) => *get(dest) = v,
        (accessor, value) => tracing::warn!(
            "Decode: {} value does not fit {} field",
            value.kind(),
            accessor.kind()
        ),
    }
}

fn finish(errors: Vec<ConversionError>) -> Result<(), Error> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(Error::Conversion(ConversionErrors(errors)))
    }
}
