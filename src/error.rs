//! Error types for query decoding.

use std::fmt;
use thiserror::Error;

/// Target a value failed to convert into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionKind {
    Integer,
    Float,
    Filter,
}

impl fmt::Display for ConversionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionKind::Integer => write!(f, "integer"),
            ConversionKind::Float => write!(f, "float"),
            ConversionKind::Filter => write!(f, "filter"),
        }
    }
}

/// A single field whose query value could not be converted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Field {field} does not contain a valid {kind} ({text})")]
pub struct ConversionError {
    pub field: String,
    pub kind: ConversionKind,
    pub text: String,
}

/// Every conversion failure from one decode call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionErrors(pub Vec<ConversionError>);

impl ConversionErrors {
    pub fn iter(&self) -> impl Iterator<Item = &ConversionError> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ConversionErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for err in &self.0 {
            writeln!(f, "{}", err)?;
        }
        Ok(())
    }
}

impl std::error::Error for ConversionErrors {}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Destination must be a record (JSON object)")]
    WrongDestType,

    #[error("{0}")]
    Conversion(ConversionErrors),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Decoder configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}

impl Error {
    /// Per-field conversion errors, if this is an aggregate error.
    pub fn conversion_errors(&self) -> Option<&ConversionErrors> {
        match self {
            Error::Conversion(errs) => Some(errs),
            _ => None,
        }
    }
}
