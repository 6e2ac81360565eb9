//! Config loading, validation, and utility operations.

use super::filter::PathFilter;
use super::model::Config;
use super::types::CONFIG_FILE_NAME;
use crate::error::{DiffscanError, Result};
use log::debug;
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(DiffscanError::ConfigError)` - Read error, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            DiffscanError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        debug!("loaded config from {}", path.display());
        Self::from_yaml(&content)
    }

    /// Load `.diffscan.yaml` from `dir` if present, otherwise use defaults.
    pub fn discover<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let candidate = dir.as_ref().join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            Self::load(candidate)
        } else {
            debug!("no {} in {}, using defaults", CONFIG_FILE_NAME, dir.as_ref().display());
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes to unit, not a mapping.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml).map_err(|e| {
            DiffscanError::ConfigError(format!("failed to parse config YAML: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            DiffscanError::ConfigError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `repo_path` must be non-empty
    /// - every `include`/`exclude` entry must be a valid glob
    pub fn validate(&self) -> Result<()> {
        if self.repo_path.trim().is_empty() {
            return Err(DiffscanError::ConfigError(
                "repo_path must not be empty".to_string(),
            ));
        }

        self.path_filter().map(|_| ())
    }

    /// Compile the include/exclude globs.
    pub fn path_filter(&self) -> Result<PathFilter> {
        PathFilter::new(&self.include, &self.exclude)
    }
}
