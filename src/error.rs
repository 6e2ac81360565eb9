//! Error types for diffscan.
//!
//! The parsers themselves never fail on malformed content; these errors cover
//! the surrounding CLI: reading input, loading config, and writing output.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for diffscan operations.
#[derive(Error, Debug)]
pub enum DiffscanError {
    /// User provided invalid arguments or unreadable input.
    #[error("{0}")]
    UserError(String),

    /// Config file could not be read, parsed, or validated.
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// The parsed result could not be serialized or written.
    #[error("Output failed: {0}")]
    OutputError(String),

    /// Underlying I/O failure while reading input.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl DiffscanError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            DiffscanError::UserError(_) => exit_codes::USER_ERROR,
            DiffscanError::IoError(_) => exit_codes::USER_ERROR,
            DiffscanError::ConfigError(_) => exit_codes::CONFIG_ERROR,
            DiffscanError::OutputError(_) => exit_codes::OUTPUT_ERROR,
        }
    }
}

/// Result type alias for diffscan operations.
pub type Result<T> = std::result::Result<T, DiffscanError>;
