//! Multi-file unified diff parsing.

use log::debug;

use super::helpers::parse_diff_git_line;
use super::hunks::parse_file_diff;
use super::model::{FileDiff, FileStatus, ParsedDiff};

const FILE_MARKER: &str = "diff --git ";

/// Parse the output of `git diff` into per-file sections.
///
/// Sections whose `diff --git` line doesn't have the `a/... b/...` shape,
/// and sections without any hunk (binary files, mode-only changes), are left
/// out of the result. Nothing in the input is treated as an error.
///
/// # Arguments
///
/// * `data` - Raw unified diff output, possibly covering many files
/// * `include_raw_content` - Keep verbatim copies of the input on the result
pub fn parse_diff(data: &str, include_raw_content: bool) -> ParsedDiff {
    let mut parsed = ParsedDiff {
        files: Vec::new(),
        raw_content: include_raw_content.then(|| data.to_string()),
    };

    for section in split_file_sections(data) {
        if let Some(file) = parse_file_section(section, include_raw_content) {
            parsed.files.push(file);
        }
    }

    debug!("parse_diff: parsed {} files", parsed.files.len());

    parsed
}

/// Split the diff at every line that starts with `diff --git `.
///
/// The marker itself is removed from each section; empty sections are dropped.
fn split_file_sections(data: &str) -> Vec<&str> {
    let mut sections = Vec::new();
    let mut section_start = 0;

    for (idx, _) in data.match_indices(FILE_MARKER) {
        if idx != 0 && data.as_bytes()[idx - 1] != b'\n' {
            continue;
        }
        sections.push(&data[section_start..idx]);
        section_start = idx + FILE_MARKER.len();
    }
    sections.push(&data[section_start..]);

    sections.retain(|section| !section.is_empty());
    sections
}

fn parse_file_section(section: &str, include_raw_content: bool) -> Option<FileDiff> {
    let first_line = section.split('\n').next().unwrap_or_default();

    let Some((original_path, path)) = parse_diff_git_line(&format!("{FILE_MARKER}{first_line}"))
    else {
        debug!("parse_diff: skipping section with unrecognized header {:?}", first_line);
        return None;
    };

    let Some(hunk_start) = section.find("\n@@ -") else {
        debug!("parse_diff: skipping {} (no hunks)", path);
        return None;
    };

    let header = format!("{FILE_MARKER}{}", &section[..hunk_start]);
    let content = &section[hunk_start + 1..];
    let renamed = path != original_path;

    Some(FileDiff {
        status: if renamed {
            FileStatus::Renamed
        } else {
            FileStatus::Modified
        },
        original_path: renamed.then_some(original_path),
        path,
        header,
        raw_content: include_raw_content.then(|| content.to_string()),
        hunks: parse_file_diff(content, include_raw_content)
            .map(|parsed| parsed.hunks)
            .unwrap_or_default(),
    })
}
