use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Error;

pub const DEFAULT_ITEM_SEPARATOR: &str = ",";
pub const DEFAULT_OPERATOR_SEPARATOR: &str = ",";

/// Decoder-wide defaults, threaded into [`crate::Decoder::new`].
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DecoderConfig {
    /// Item separator for list and filter fields without a `sep:` option.
    pub item_separator: String,
    /// Separator for the operator list in `ops:` options.
    pub operator_separator: String,
    /// Report filter items without a recognized operator as conversion errors.
    pub strict_filters: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            item_separator: DEFAULT_ITEM_SEPARATOR.to_string(),
            operator_separator: DEFAULT_OPERATOR_SEPARATOR.to_string(),
            strict_filters: false,
        }
    }
}

impl DecoderConfig {
    /// Load from an optional file, then `QPARAMS_*` environment variables.
    pub fn load(path: Option<&Path>) -> Result<Self, Error> {
        let mut builder = ::config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(::config::File::from(path));
        }
        let settings = builder
            .add_source(::config::Environment::with_prefix("QPARAMS"))
            .build()?;
        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.item_separator.is_empty() {
            return Err(Error::Config("item_separator must not be empty".into()));
        }
        if self.operator_separator.is_empty() {
            return Err(Error::Config("operator_separator must not be empty".into()));
        }
        Ok(())
    }
}
