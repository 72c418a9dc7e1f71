//! Decode URL query parameters into typed records.
//!
//! Each destination field is described once by a [`FieldSpec`]: the query
//! parameter it binds to, its item separator and, for filter fields, the
//! operators it recognizes. Filter fields run through the tokenizer in
//! [`filter`], turning `age>=7,gender==0` into `{"age >=": "7", "gender ==": "0"}`.

pub mod config;
pub mod decode;
pub mod error;
pub mod filter;
pub mod query;
pub mod schema;
pub mod values;

pub use config::DecoderConfig;
pub use decode::{Decoder, FieldValue};
pub use error::{ConversionError, ConversionErrors, ConversionKind, Error};
pub use filter::{FilterEntry, FilterMap, OperatorSet, Tokenized, tokenize, tokenize_items};
pub use query::QueryValues;
pub use schema::{FieldKind, FieldSpec, QueryRecord, RecordSchema, Schema, SchemaBuilder};
pub use values::{Slice, SliceConversionError};
