use serde_json::{Map, Number, Value};

use crate::filter::FilterMap;
use crate::schema::FieldKind;
use crate::values::Slice;

/// A converted query value, ready to be assigned.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Int(i64),
    Float(f64),
    String(String),
    List(Slice),
    Filter(FilterMap),
}

impl FieldValue {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Int(_) => FieldKind::Int,
            FieldValue::Float(_) => FieldKind::Float,
            FieldValue::String(_) => FieldKind::String,
            FieldValue::List(_) => FieldKind::List,
            FieldValue::Filter(_) => FieldKind::Filter,
        }
    }

    /// JSON form. Non-finite floats become `null`.
    pub fn into_json(self) -> Value {
        match self {
            FieldValue::Int(v) => Value::from(v),
            FieldValue::Float(v) => Number::from_f64(v).map(Value::Number).unwrap_or(Value::Null),
            FieldValue::String(v) => Value::String(v),
            FieldValue::List(v) => {
                Value::Array(v.into_vec().into_iter().map(Value::String).collect())
            }
            FieldValue::Filter(v) => Value::Object(
                v.iter()
                    .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
                    .collect::<Map<_, _>>(),
            ),
        }
    }
}
