use anyhow::{Context, Result};
use serde_json::Value;

use crate::domain::{FormSchema, validate};

use super::DocumentFormat;

/// Parse structured data in any supported format into a `serde_json::Value`.
pub fn parse_document_str(contents: &str, format: DocumentFormat) -> Result<Value> {
    match format {
        DocumentFormat::Json => {
            serde_json::from_str::<Value>(contents).with_context(|| "failed to parse JSON document")
        }
        #[cfg(feature = "yaml")]
        DocumentFormat::Yaml => {
            serde_yaml::from_str::<Value>(contents).with_context(|| "failed to parse YAML document")
        }
        #[cfg(feature = "toml")]
        DocumentFormat::Toml => contents
            .parse::<toml::Value>()
            .with_context(|| "failed to parse TOML document")
            .and_then(|value| {
                serde_json::to_value(value).context("failed to convert TOML to JSON")
            }),
    }
}

/// Load a form schema from a document, trying the other enabled formats
/// when `format` does not parse.
pub fn load_schema_str(contents: &str, format: DocumentFormat) -> Result<FormSchema> {
    let value = match parse_document_str(contents, format) {
        Ok(value) => value,
        Err(primary) => DocumentFormat::available_formats()
            .into_iter()
            .filter(|candidate| *candidate != format)
            .find_map(|candidate| parse_document_str(contents, candidate).ok())
            .ok_or(primary)?,
    };
    validate(&value).context("document is not a form schema")
}
