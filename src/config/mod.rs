//! Configuration for diffscan.
//!
//! This module defines the Config struct that represents `.diffscan.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! sensible defaults for every field, and validation of path globs.

mod filter;
mod model;
mod operations;
pub mod types;


// Re-export public API
pub use filter::PathFilter;
pub use model::Config;
pub use types::{OutputFormat, CONFIG_FILE_NAME};
