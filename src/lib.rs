//! Diffscan: parsers for git's diff and change-summary output.
//!
//! The [`diff`] module holds the parsing engine: pure functions that take the
//! text git prints and return structured values. The remaining modules make
//! up the `diffscan` command-line front end.

pub mod cli;
pub mod commands;
pub mod config;
pub mod diff;
pub mod error;
pub mod exit_codes;

#[cfg(test)]
pub(crate) mod test_support;
