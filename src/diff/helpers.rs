//! Helper functions for diff parsing.

use regex::Regex;
use std::sync::LazyLock;

use super::model::HunkRange;

/// `diff --git a/<path> b/<path>`. The first capture is greedy, so a path
/// containing " b/" splits on the last occurrence.
static DIFF_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^diff --git a/(.*) b/(.*)$").expect("valid diff header regex"));

/// `@@ -start[,count] +start[,count] @@`, with optional trailing context.
static HUNK_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^@@ -(\d+)(?:,(\d+))? \+(\d+)(?:,(\d+))? @@").expect("valid hunk header regex")
});

/// Parse a "diff --git" line into its (a-side, b-side) paths.
///
/// Handles:
/// - "diff --git a/path/to/file b/path/to/file" (normal)
/// - "diff --git a/path/to/file b/path/to/renamed" (rename)
/// - paths containing spaces
///
/// Returns None if the line doesn't have the `a/... b/...` shape.
pub(super) fn parse_diff_git_line(line: &str) -> Option<(String, String)> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let captures = DIFF_HEADER.captures(line)?;
    Some((captures[1].to_string(), captures[2].to_string()))
}

/// Parse a hunk header line into its (previous, current) ranges.
///
/// Format: "@@ -old_start,old_len +new_start,new_len @@" or "@@ -old_start +new_start @@"
/// Also handles: "@@ -old_start,old_len +new_start,new_len @@ context info"
///
/// A missing length means a one-line range.
pub(super) fn parse_hunk_header(line: &str) -> Option<(HunkRange, HunkRange)> {
    let captures = HUNK_HEADER.captures(line)?;

    let previous = parse_range(captures.get(1)?.as_str(), captures.get(2).map(|m| m.as_str()))?;
    let current = parse_range(captures.get(3)?.as_str(), captures.get(4).map(|m| m.as_str()))?;

    Some((previous, current))
}

/// Build a range from its textual start and optional count.
fn parse_range(start: &str, count: Option<&str>) -> Option<HunkRange> {
    let start = start.parse().ok()?;
    let count = match count {
        Some(count) => count.parse().ok()?,
        None => 1,
    };
    HunkRange::new(start, count)
}

/// Parse a numeric stat field, treating anything non-numeric as zero.
///
/// `git --numstat` prints `-` for binary files.
pub(super) fn parse_count(field: &str) -> u64 {
    field.trim().parse().unwrap_or(0)
}

/// Normalize a file path to use forward slashes.
///
/// Also collapses repeated separators and drops a leading `./` and trailing
/// `/`, so paths built by joining fragments compare equal to git's own.
pub(crate) fn normalize_path(path: &str) -> String {
    let path = path.replace('\\', "/");
    let mut normalized = String::with_capacity(path.len());
    let mut last_was_slash = false;
    for ch in path.chars() {
        if ch == '/' {
            if last_was_slash {
                continue;
            }
            last_was_slash = true;
        } else {
            last_was_slash = false;
        }
        normalized.push(ch);
    }

    let trimmed = normalized.strip_prefix("./").unwrap_or(&normalized);
    let trimmed = if trimmed.len() > 1 {
        trimmed.strip_suffix('/').unwrap_or(trimmed)
    } else {
        trimmed
    };
    trimmed.to_string()
}

/// Join a directory prefix and a relative path with a single `/`.
pub(super) fn join_paths(root: &str, path: &str) -> String {
    if root.is_empty() {
        return path.to_string();
    }
    if path.is_empty() {
        return root.to_string();
    }
    format!(
        "{}/{}",
        root.trim_end_matches(['/', '\\']),
        path.trim_start_matches(['/', '\\'])
    )
}
