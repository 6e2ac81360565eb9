//! Diff parsing primitives for diffscan.
//!
//! This module turns git's textual output into structured values:
//! - Multi-file unified diffs from `git diff` (per-file sections and hunks)
//! - Per-line added/removed/changed/unchanged state with current-file line numbers
//! - Name-status records from `git diff --name-status -z`
//! - Numstat plus summary output from `git apply --numstat --summary -z`
//! - Aggregate counts from `git diff --shortstat`
//!
//! Every parser is a pure function over a string. Malformed pieces of input
//! are skipped rather than reported as errors.

mod apply_summary;
mod helpers;
mod hunks;
mod model;
mod name_status;
mod parser;
mod short_stat;


// Re-export public API
pub use apply_summary::parse_apply_summary;
pub(crate) use helpers::normalize_path;
pub use hunks::parse_file_diff;
pub use model::{
    AddedLine, FileChangeRecord, FileDiff, FileStats, FileStatus, Hunk, HunkLine, HunkRange,
    LineState, ParsedDiff, ParsedHunks, ShortStat,
};
pub use name_status::parse_name_status;
pub use parser::parse_diff;
pub use short_stat::parse_short_stat;
