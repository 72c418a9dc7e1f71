//! Descriptor tables for Rust structs.

use super::{FieldKind, FieldSpec};
use crate::config::DecoderConfig;
use crate::filter::FilterMap;
use crate::values::Slice;

/// Field accessor, fixed to one conversion target.
pub enum Accessor<R> {
    Int(fn(&mut R) -> &mut i64),
    Float(fn(&mut R) -> &mut f64),
    String(fn(&mut R) -> &mut String),
    List(fn(&mut R) -> &mut Slice),
    Filter(fn(&mut R) -> &mut FilterMap),
}

impl<R> Accessor<R> {
    pub fn kind(&self) -> FieldKind {
        match self {
            Accessor::Int(_) => FieldKind::Int,
            Accessor::Float(_) => FieldKind::Float,
            Accessor::String(_) => FieldKind::String,
            Accessor::List(_) => FieldKind::List,
            Accessor::Filter(_) => FieldKind::Filter,
        }
    }
}

impl<R> Clone for Accessor<R> {
    fn clone(&self) -> Self {
        match self {
            Accessor::Int(f) => Accessor::Int(*f),
            Accessor::Float(f) => Accessor::Float(*f),
            Accessor::String(f) => Accessor::String(*f),
            Accessor::List(f) => Accessor::List(*f),
            Accessor::Filter(f) => Accessor::Filter(*f),
        }
    }
}

/// Descriptor table for the struct `R`.
pub struct Schema<R> {
    fields: Vec<(FieldSpec, Accessor<R>)>,
}

impl<R> Schema<R> {
    pub fn builder() -> SchemaBuilder<R> {
        SchemaBuilder::new(DecoderConfig::default())
    }

    /// Builder that splits `ops:` lists with `config.operator_separator`.
    pub fn builder_with(config: &DecoderConfig) -> SchemaBuilder<R> {
        SchemaBuilder::new(config.clone())
    }

    pub fn fields(&self) -> impl Iterator<Item = (&FieldSpec, &Accessor<R>)> {
        self.fields.iter().map(|(spec, accessor)| (spec, accessor))
    }

    pub fn specs(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().map(|(spec, _)| spec)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

pub struct SchemaBuilder<R> {
    config: DecoderConfig,
    fields: Vec<(FieldSpec, Accessor<R>)>,
}

impl<R> SchemaBuilder<R> {
    fn new(config: DecoderConfig) -> Self {
        Self {
            config,
            fields: Vec::new(),
        }
    }

    /// Add a field with an explicit accessor.
    pub fn field(mut self, name: &str, tag: &str, accessor: Accessor<R>) -> Self {
        let spec = FieldSpec::new(name, accessor.kind(), tag, &self.config);
        self.fields.push((spec, accessor));
        self
    }

    pub fn int(self, name: &str, tag: &str, get: fn(&mut R) -> &mut i64) -> Self {
        self.field(name, tag, Accessor::Int(get))
    }

    pub fn float(self, name: &str, tag: &str, get: fn(&mut R) -> &mut f64) -> Self {
        self.field(name, tag, Accessor::Float(get))
    }

    pub fn string(self, name: &str, tag: &str, get: fn(&mut R) -> &mut String) -> Self {
        self.field(name, tag, Accessor::String(get))
    }

    pub fn list(self, name: &str, tag: &str, get: fn(&mut R) -> &mut Slice) -> Self {
        self.field(name, tag, Accessor::List(get))
    }

    pub fn filter(self, name: &str, tag: &str, get: fn(&mut R) -> &mut FilterMap) -> Self {
        self.field(name, tag, Accessor::Filter(get))
    }

    pub fn build(self) -> Schema<R> {
        Schema {
            fields: self.fields,
        }
    }
}

/// A struct that can be decoded from query parameters.
///
/// Implementors keep their table in a `OnceLock` so it is built once:
///
/// ```
/// use std::sync::OnceLock;
/// use qparams::{FilterMap, QueryRecord, Schema};
///
/// #[derive(Default)]
/// struct Opts {
///     limit: i64,
///     filter: FilterMap,
/// }
///
/// impl QueryRecord for Opts {
///     fn schema() -> &'static Schema<Self> {
///         static SCHEMA: OnceLock<Schema<Opts>> = OnceLock::new();
///         SCHEMA.get_or_init(|| {
///             Schema::<Opts>::builder()
///                 .int("Limit", "", |o| &mut o.limit)
///                 .filter("Filter", "ops:>=,==,<", |o| &mut o.filter)
///                 .build()
///         })
///     }
/// }
/// ```
pub trait QueryRecord: Sized + 'static {
    fn schema() -> &'static Schema<Self>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Opts {
        limit: i64,
        embed: Slice,
    }

    #[test]
    fn kinds_follow_accessors() {
        let schema = Schema::<Opts>::builder()
            .int("Limit", "", |o| &mut o.limit)
            .list("Embed", "sep:|", |o| &mut o.embed)
            .build();

        let kinds: Vec<_> = schema.specs().map(|s| (s.display.as_str(), s.kind)).collect();
        assert_eq!(kinds, vec![("limit", FieldKind::Int), ("embed", FieldKind::List)]);
    }

    #[test]
    fn accessor_reaches_field() {
        let mut opts = Opts::default();
        let accessor = Accessor::<Opts>::Int(|o| &mut o.limit);
        if let Accessor::Int(get) = accessor.clone() {
            *get(&mut opts) = 5;
        }
        assert_eq!(opts.limit, 5);
    }
}
