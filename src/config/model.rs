//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for diffscan.
///
/// This struct represents the contents of `.diffscan.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output format used when a command doesn't pass `--format`.
    #[serde(default)]
    pub format: OutputFormat,

    /// Keep verbatim input text on parsed diffs.
    #[serde(default)]
    pub include_raw_content: bool,

    /// Repository path stamped on name-status and apply-summary records.
    #[serde(default = "default_repo_path")]
    pub repo_path: String,

    /// Globs a file path must match to be reported (empty reports everything).
    #[serde(default)]
    pub include: Vec<String>,

    /// Globs that drop a file from the report; checked before `include`.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            include_raw_content: false,
            repo_path: default_repo_path(),
            include: Vec::new(),
            exclude: Vec::new(),
        }
    }
}
