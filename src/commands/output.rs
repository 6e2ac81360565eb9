//! Rendering parsed results.

use crate::config::OutputFormat;
use crate::error::{DiffscanError, Result};
use serde::Serialize;
use std::io::Write;

/// Serialize a value in the requested format.
pub(super) fn render<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)
            .map(|mut text| {
                text.push('\n');
                text
            })
            .map_err(|e| DiffscanError::OutputError(format!("failed to render JSON: {}", e))),
        OutputFormat::Yaml => serde_yaml::to_string(value)
            .map_err(|e| DiffscanError::OutputError(format!("failed to render YAML: {}", e))),
    }
}

pub(super) fn write_stdout(text: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(text.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(|e| DiffscanError::OutputError(format!("failed to write output: {}", e)))
}
