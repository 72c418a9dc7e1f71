use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use qparams::{Decoder, DecoderConfig, Error, QueryValues, RecordSchema};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// URL or query string to decode (a leading `?` is optional)
    pub query: String,

    /// Schema file describing the record fields (YAML)
    #[arg(short, long)]
    pub schema: PathBuf,

    /// Decoder configuration file (YAML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Report filter items without a recognized operator as errors
    #[arg(long)]
    pub strict_filters: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum OutputFormat {
    #[value(name = "json")]
    Json,
    #[value(name = "yaml", alias = "yml")]
    Yaml,
}

pub fn output_format_label(format: &OutputFormat) -> &'static str {
    match format {
        OutputFormat::Json => "json",
        OutputFormat::Yaml => "yaml",
    }
}

/// Query parameters from a full URL, a scheme-less `host/path?query`, or a
/// bare query component.
pub fn query_values(input: &str) -> QueryValues {
    if let Ok(url) = url::Url::parse(input) {
        return QueryValues::from_url(&url);
    }
    if let Some(query) = input.strip_prefix('?') {
        return QueryValues::parse(query);
    }
    match input.split_once('?') {
        Some((head, query)) if !head.contains(['=', '&']) => QueryValues::parse(query),
        _ => QueryValues::parse(input),
    }
}

pub fn load_config(cli: &Cli) -> Result<DecoderConfig> {
    let mut config = DecoderConfig::load(cli.config.as_deref())
        .context("Config: Failed to load decoder configuration")?;
    if cli.strict_filters {
        config.strict_filters = true;
    }
    Ok(config)
}

pub fn render(record: &serde_json::Value, format: &OutputFormat) -> Result<String> {
    let out = match format {
        OutputFormat::Json => serde_json::to_string_pretty(record)?,
        OutputFormat::Yaml => serde_yaml::to_string(record)?,
    };
    Ok(out)
}

/// Decode `cli.query` and print the record. Conversion errors are logged
/// after the record is printed and returned as the final error.
pub fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let schema = RecordSchema::load(&cli.schema, &config)
        .with_context(|| format!("Schema: Failed to load {:?}", cli.schema))?;
    tracing::info!("Schema: {} fields from {:?}", schema.len(), cli.schema);

    let source = query_values(&cli.query);
    tracing::info!("Query: {} parameters", source.len());

    let decoder = Decoder::new(config)?;
    let mut record = serde_json::Value::Object(serde_json::Map::new());
    let result = decoder.decode_value(&schema, &mut record, &source);

    tracing::info!("Output: {}", output_format_label(&cli.format));
    println!("{}", render(&record, &cli.format)?.trim_end());

    match result {
        Ok(()) => Ok(()),
        Err(Error::Conversion(errors)) => {
            for err in errors.iter() {
                tracing::warn!("{}", err);
            }
            anyhow::bail!("Decode: {} field(s) could not be converted", errors.len())
        }
        Err(e) => Err(e).context("Decode: Failed"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_from_full_url() {
        let q = query_values("https://foobar.com/items?limit=7&Embed=a,b");
        assert_eq!(q.get("limit"), Some("7"));
        assert_eq!(q.get("embed"), Some("a,b"));
    }

    #[test]
    fn query_from_relative_url_or_bare_query() {
        assert_eq!(query_values("foobar.com?limit=7").get("limit"), Some("7"));
        assert_eq!(query_values("?limit=7").get("limit"), Some("7"));
        assert_eq!(query_values("limit=7").get("limit"), Some("7"));
    }

    #[test]
    fn bare_query_keeps_literal_question_marks() {
        let q = query_values("name=what?&limit=1");
        assert_eq!(q.get("name"), Some("what?"));
        assert_eq!(q.get("limit"), Some("1"));

        let q = query_values("?q=a?b");
        assert_eq!(q.get("q"), Some("a?b"));

        let q = query_values("foobar.com/users?q=a?b");
        assert_eq!(q.get("q"), Some("a?b"));
    }

    #[test]
    fn renders_yaml() {
        let record = serde_json::json!({"Limit": 7});
        assert_eq!(render(&record, &OutputFormat::Yaml).unwrap(), "Limit: 7\n");
    }
}
