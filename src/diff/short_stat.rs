//! `git diff --shortstat` parsing.

use log::debug;
use regex::{Captures, Regex};
use std::sync::LazyLock;

use super::model::ShortStat;

static SHORT_STAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(\d+)\s+files? changed(?:,\s+(\d+)\s+insertions?\(\+\))?(?:,\s+(\d+)\s+deletions?\(-\))?",
    )
    .expect("valid shortstat regex")
});

/// Parse a summary such as `3 files changed, 10 insertions(+), 2 deletions(-)`.
///
/// The insertion and deletion clauses are optional and count as 0 when absent.
/// Returns None for empty input or text without a "files changed" clause.
pub fn parse_short_stat(data: &str) -> Option<ShortStat> {
    if data.is_empty() {
        debug!("parse_short_stat: no data");
        return None;
    }

    let captures = SHORT_STAT.captures(data)?;
    let stat = ShortStat {
        files: group(&captures, 1),
        additions: group(&captures, 2),
        deletions: group(&captures, 3),
    };

    debug!(
        "parse_short_stat: parsed {} files, +{} -{}",
        stat.files, stat.additions, stat.deletions
    );

    Some(stat)
}

fn group(captures: &Captures<'_>, index: usize) -> u64 {
    captures
        .get(index)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}
