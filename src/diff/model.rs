//! Structured values produced by the diff parsers.
//!
//! Everything here is built in a single parsing pass and handed back as a
//! plain value. The query helpers only read.

use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Git's single-letter file status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileStatus {
    Added,
    Copied,
    Deleted,
    Modified,
    Renamed,
    TypeChanged,
    Unmerged,
    /// Anything git reports that we don't model (`.`, `X`, `B`, ...), shown as `?`.
    Unknown,
}

impl FileStatus {
    /// Map a status letter to a status. Unrecognized letters become `Unknown`.
    pub fn from_code(code: char) -> Self {
        match code {
            'A' => Self::Added,
            'C' => Self::Copied,
            'D' => Self::Deleted,
            'M' => Self::Modified,
            'R' => Self::Renamed,
            'T' => Self::TypeChanged,
            'U' => Self::Unmerged,
            _ => Self::Unknown,
        }
    }

    /// The single-letter code git uses for this status.
    pub fn code(self) -> char {
        match self {
            Self::Added => 'A',
            Self::Copied => 'C',
            Self::Deleted => 'D',
            Self::Modified => 'M',
            Self::Renamed => 'R',
            Self::TypeChanged => 'T',
            Self::Unmerged => 'U',
            Self::Unknown => '?',
        }
    }

    /// Statuses whose records carry both an original and a new path.
    pub fn has_original_path(self) -> bool {
        matches!(self, Self::Renamed | Self::Copied)
    }
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl Serialize for FileStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Classification of one line inside a hunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineState {
    Added,
    Removed,
    Changed,
    Unchanged,
}

impl LineState {
    /// True for states that put text into the current version.
    pub fn is_addition(self) -> bool {
        matches!(self, Self::Added | Self::Changed)
    }

    /// True for states that take text out of the previous version.
    pub fn is_deletion(self) -> bool {
        matches!(self, Self::Removed | Self::Changed)
    }
}

/// A single line of a hunk with its previous and current text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HunkLine {
    pub previous: Option<String>,
    pub current: Option<String>,
    pub state: LineState,
}

impl HunkLine {
    pub(crate) fn added(text: &str) -> Self {
        Self {
            previous: None,
            current: Some(text.to_string()),
            state: LineState::Added,
        }
    }

    pub(crate) fn removed(text: &str) -> Self {
        Self {
            previous: Some(text.to_string()),
            current: None,
            state: LineState::Removed,
        }
    }

    pub(crate) fn unchanged(text: &str) -> Self {
        Self {
            previous: Some(text.to_string()),
            current: Some(text.to_string()),
            state: LineState::Unchanged,
        }
    }
}

/// One side of a hunk header: `start,count` plus the derived last line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HunkRange {
    pub start: usize,
    pub count: usize,
    /// `start + count - 1`, saturating at 0 for an empty range at line 0.
    pub end: usize,
}

impl HunkRange {
    /// `None` when `start + count` does not fit in a `usize`.
    pub fn new(start: usize, count: usize) -> Option<Self> {
        let past_end = start.checked_add(count)?;
        Some(Self {
            start,
            count,
            end: past_end.saturating_sub(1),
        })
    }
}

/// A contiguous region of change inside one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hunk {
    /// The verbatim `@@ ... @@` line.
    pub header: String,
    /// The verbatim body lines following the header.
    pub content: String,
    pub previous: HunkRange,
    pub current: HunkRange,
    /// Lines keyed by current-file line number (1-based).
    pub lines: BTreeMap<usize, HunkLine>,
}

impl Hunk {
    /// Number of lines in the given state.
    pub fn count(&self, state: LineState) -> usize {
        self.lines.values().filter(|line| line.state == state).count()
    }

    /// Lines that exist in the previous version of the file.
    pub fn previous_line_count(&self) -> usize {
        self.lines
            .values()
            .filter(|line| line.state == LineState::Unchanged || line.state.is_deletion())
            .count()
    }

    /// Lines that exist in the current version of the file.
    pub fn current_line_count(&self) -> usize {
        self.lines
            .values()
            .filter(|line| line.state == LineState::Unchanged || line.state.is_addition())
            .count()
    }
}

/// Result of parsing a single file's hunk body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedHunks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_content: Option<String>,
    pub hunks: Vec<Hunk>,
}

/// One file section of a multi-file diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileDiff {
    pub path: String,
    /// Set only when the file was renamed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_path: Option<String>,
    /// `Modified` or `Renamed`.
    pub status: FileStatus,
    /// Everything from `diff --git` up to the first hunk.
    pub header: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_content: Option<String>,
    pub hunks: Vec<Hunk>,
}

impl FileDiff {
    /// Lines that put text into the current version (added or changed).
    pub fn additions(&self) -> usize {
        self.hunks
            .iter()
            .flat_map(|hunk| hunk.lines.values())
            .filter(|line| line.state.is_addition())
            .count()
    }

    /// Lines that took text out of the previous version (removed or changed).
    pub fn deletions(&self) -> usize {
        self.hunks
            .iter()
            .flat_map(|hunk| hunk.lines.values())
            .filter(|line| line.state.is_deletion())
            .count()
    }
}

/// A parsed multi-file diff.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedDiff {
    pub files: Vec<FileDiff>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_content: Option<String>,
}

/// A single line present in the current version of a file, flattened out of
/// its hunk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddedLine {
    /// Repository-relative file path (forward slashes).
    pub file_path: String,
    /// Line number in the new file (1-based).
    pub line_number: usize,
    /// The content of the added line (without leading '+').
    pub content: String,
}

impl ParsedDiff {
    /// Look a file up by its current path, falling back to its pre-rename path.
    pub fn file(&self, path: &str) -> Option<&FileDiff> {
        self.files
            .iter()
            .find(|file| file.path == path)
            .or_else(|| {
                self.files
                    .iter()
                    .find(|file| file.original_path.as_deref() == Some(path))
            })
    }

    /// Every added or changed line, in file order then line order.
    pub fn added_lines(&self) -> Vec<AddedLine> {
        let mut result = Vec::new();
        for file in &self.files {
            for hunk in &file.hunks {
                for (&line_number, line) in &hunk.lines {
                    if !line.state.is_addition() {
                        continue;
                    }
                    if let Some(content) = &line.current {
                        result.push(AddedLine {
                            file_path: file.path.clone(),
                            line_number,
                            content: content.clone(),
                        });
                    }
                }
            }
        }
        result
    }

    /// Aggregate counts derived from line states.
    ///
    /// A changed line counts as one insertion and one deletion, which is how
    /// `git diff --shortstat` reports a rewritten line.
    pub fn short_stat(&self) -> ShortStat {
        self.files.iter().fold(ShortStat::default(), |acc, file| ShortStat {
            files: acc.files + 1,
            additions: acc.additions + file.additions() as u64,
            deletions: acc.deletions + file.deletions() as u64,
        })
    }
}

/// Per-file numeric stats from `--numstat`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FileStats {
    pub changes: u64,
    pub additions: u64,
    pub deletions: u64,
}

/// A file-level change from name-status or apply-summary output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileChangeRecord {
    pub status: FileStatus,
    pub path: String,
    /// Set for renames and copies only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_path: Option<String>,
    pub repo_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<FileStats>,
}

/// Aggregate files/insertions/deletions from a `--shortstat` sentence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ShortStat {
    pub files: u64,
    pub additions: u64,
    pub deletions: u64,
}
