//! `git apply --numstat --summary -z` parsing.
//!
//! The numstat table gives every touched file as Modified with its counts.
//! The trailing summary block then upgrades individual files to Renamed,
//! Added or Deleted. Both passes key records by the same normalized path.

use log::{debug, warn};
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

use super::helpers::{join_paths, normalize_path, parse_count};
use super::model::{FileChangeRecord, FileStats, FileStatus};

/// `rename <paths> (<pct>%)`, the similarity suffix being optional.
static RENAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^rename (.+?)(?: \(\d+%\))?$").expect("valid rename regex"));

/// `create mode 100644 <path>` / `delete mode 100644 <path>`.
static CREATE_OR_DELETE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(create|delete) mode \d+ (.+)$").expect("valid create/delete regex")
});

/// `<root>{<old> => <new>}<suffix>`, git's compact rename notation.
static BRACED_RENAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.*?)\{(.*?) => (.*?)\}(.*)$").expect("valid braced rename regex")
});

/// Parse combined numstat and summary output into file change records.
///
/// Summary declarations that refer to a path missing from the numstat table
/// are dropped rather than turned into records without stats.
///
/// # Arguments
///
/// * `data` - NUL-separated numstat lines followed by the newline-separated summary
/// * `repo_path` - Repository the records belong to
///
/// # Returns
///
/// Records in order of first appearance in the numstat table; empty for empty input.
pub fn parse_apply_summary(data: &str, repo_path: &str) -> Vec<FileChangeRecord> {
    if data.is_empty() {
        debug!("parse_apply_summary: no data");
        return Vec::new();
    }

    let mut fields: Vec<&str> = data.split('\0').collect();
    // The summary is whatever follows the final NUL.
    let summary = fields.pop().unwrap_or_default();

    let mut table = RecordTable::default();
    read_numstat(&fields, repo_path, &mut table);
    apply_summary(summary, &mut table);

    debug!("parse_apply_summary: parsed {} files", table.records.len());

    table.records
}

fn read_numstat(fields: &[&str], repo_path: &str, table: &mut RecordTable) {
    let mut i = 0;
    while i < fields.len() {
        let line = fields[i].trim();
        i += 1;
        if line.is_empty() {
            continue;
        }

        let mut parts = line.splitn(3, '\t');
        let (Some(insertions), Some(deletions)) = (parts.next(), parts.next()) else {
            debug!("parse_apply_summary: skipping numstat line {:?}", line);
            continue;
        };
        let stats = FileStats {
            changes: 0,
            additions: parse_count(insertions),
            deletions: parse_count(deletions),
        };

        let path = match parts.next().filter(|path| !path.is_empty()) {
            Some(path) => path.to_string(),
            None => {
                // With -z a rename's old and new paths follow as their own fields.
                let (Some(_old), Some(new)) = (fields.get(i), fields.get(i + 1)) else {
                    debug!("parse_apply_summary: numstat rename is missing its paths");
                    break;
                };
                i += 2;
                new.to_string()
            }
        };

        let key = numstat_key(&path);
        table.insert(
            key,
            FileChangeRecord {
                status: FileStatus::Modified,
                path,
                original_path: None,
                repo_path: repo_path.to_string(),
                stats: Some(stats),
            },
        );
    }
}

fn apply_summary(summary: &str, table: &mut RecordTable) {
    for line in summary.split('\n') {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(captures) = CREATE_OR_DELETE.captures(line) {
            let status = if &captures[1] == "create" {
                FileStatus::Added
            } else {
                FileStatus::Deleted
            };
            let key = normalize_path(&captures[2]);
            let Some(existing) = table.get(&key) else {
                warn!("apply summary declares {} for unknown path {}", status, &captures[2]);
                continue;
            };
            let record = FileChangeRecord {
                status,
                original_path: None,
                ..existing.clone()
            };
            table.insert(key, record);
        } else if let Some(captures) = RENAME.captures(line) {
            let Some((original_path, path)) = split_rename(&captures[1]) else {
                debug!("parse_apply_summary: unrecognized rename {:?}", line);
                continue;
            };
            let Some(existing) = table.get(&path) else {
                warn!("apply summary renames unknown path {}", path);
                continue;
            };
            let record = FileChangeRecord {
                status: FileStatus::Renamed,
                path: path.clone(),
                original_path: Some(original_path),
                repo_path: existing.repo_path.clone(),
                stats: existing.stats,
            };
            table.insert(path, record);
        }
    }
}

/// Split a rename notation into normalized (original, new) paths.
///
/// Accepts `src/{old => new}/file.rs` and the brace-less `old => new`.
fn split_rename(notation: &str) -> Option<(String, String)> {
    if let Some(captures) = BRACED_RENAME.captures(notation) {
        let root = &captures[1];
        let suffix = &captures[4];
        let original = join_paths(root, &format!("{}{}", &captures[2], suffix));
        let renamed = join_paths(root, &format!("{}{}", &captures[3], suffix));
        return Some((normalize_path(&original), normalize_path(&renamed)));
    }

    let (original, renamed) = notation.split_once(" => ")?;
    Some((normalize_path(original), normalize_path(renamed)))
}

/// Key for a numstat path. Renames written in arrow notation key by their
/// new path, matching what the summary pass derives.
fn numstat_key(path: &str) -> String {
    match split_rename(path) {
        Some((_, renamed)) => renamed,
        None => normalize_path(path),
    }
}

/// Records in first-seen order with a path index for in-place replacement.
#[derive(Default)]
struct RecordTable {
    records: Vec<FileChangeRecord>,
    index: HashMap<String, usize>,
}

impl RecordTable {
    fn get(&self, key: &str) -> Option<&FileChangeRecord> {
        self.index.get(key).map(|&slot| &self.records[slot])
    }

    fn insert(&mut self, key: String, record: FileChangeRecord) {
        match self.index.get(&key) {
            Some(&slot) => self.records[slot] = record,
            None => {
                self.index.insert(key, self.records.len());
                self.records.push(record);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(additions: u64, deletions: u64) -> Option<FileStats> {
        Some(FileStats {
            changes: 0,
            additions,
            deletions,
        })
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_apply_summary("", "/repo").is_empty());
    }

    #[test]
    fn test_numstat_only() {
        let files = parse_apply_summary("3\t1\tsrc/lib.rs\0", "/repo");

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].status, FileStatus::Modified);
        assert_eq!(files[0].path, "src/lib.rs");
        assert_eq!(files[0].repo_path, "/repo");
        assert_eq!(files[0].stats, stats(3, 1));
    }

    #[test]
    fn test_create_and_delete() {
        let data = "5\t0\tsrc/new.rs\0\
                    0\t7\tsrc/old.rs\0\
                    2\t2\tsrc/lib.rs\0\
                    \x20create mode 100644 src/new.rs\n delete mode 100644 src/old.rs\n";
        let files = parse_apply_summary(data, "/repo");

        assert_eq!(files.len(), 3);
        assert_eq!(files[0].status, FileStatus::Added);
        assert_eq!(files[0].path, "src/new.rs");
        assert_eq!(files[0].stats, stats(5, 0));
        assert_eq!(files[1].status, FileStatus::Deleted);
        assert_eq!(files[1].stats, stats(0, 7));
        assert_eq!(files[2].status, FileStatus::Modified);
    }

    #[test]
    fn test_braced_rename() {
        let data = "1\t1\tsrc/{old => new}/mod.rs\0 rename src/{old => new}/mod.rs (90%)\n";
        let files = parse_apply_summary(data, "/repo");

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].status, FileStatus::Renamed);
        assert_eq!(files[0].path, "src/new/mod.rs");
        assert_eq!(files[0].original_path.as_deref(), Some("src/old/mod.rs"));
        assert_eq!(files[0].stats, stats(1, 1));
    }

    #[test]
    fn test_rename_with_empty_side() {
        let data = "0\t0\tsrc/{ => nested}/file.rs\0 rename src/{ => nested}/file.rs (100%)\n";
        let files = parse_apply_summary(data, "/repo");

        assert_eq!(files[0].path, "src/nested/file.rs");
        assert_eq!(files[0].original_path.as_deref(), Some("src/file.rs"));
    }

    #[test]
    fn test_plain_rename() {
        let data = "0\t0\ta.txt => b.txt\0 rename a.txt => b.txt (100%)\n";
        let files = parse_apply_summary(data, "/repo");

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].status, FileStatus::Renamed);
        assert_eq!(files[0].path, "b.txt");
        assert_eq!(files[0].original_path.as_deref(), Some("a.txt"));
    }

    #[test]
    fn test_nul_separated_rename_paths() {
        let data = "4\t2\t\0docs/old.md\0docs/new.md\0 rename docs/{old.md => new.md} (75%)\n";
        let files = parse_apply_summary(data, "/repo");

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].status, FileStatus::Renamed);
        assert_eq!(files[0].path, "docs/new.md");
        assert_eq!(files[0].original_path.as_deref(), Some("docs/old.md"));
        assert_eq!(files[0].stats, stats(4, 2));
    }

    #[test]
    fn test_unmatched_declarations_are_dropped() {
        let data = "1\t0\tsrc/a.rs\0 create mode 100644 src/missing.rs\n rename x/{p => q}.rs (50%)\n";
        let files = parse_apply_summary(data, "/repo");

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, "src/a.rs");
        assert_eq!(files[0].status, FileStatus::Modified);
    }

    #[test]
    fn test_binary_counts_are_zero() {
        let files = parse_apply_summary("-\t-\tassets/logo.png\0", "/repo");

        assert_eq!(files[0].stats, stats(0, 0));
    }

    #[test]
    fn test_backslash_paths_reconcile() {
        let data = "2\t0\tsrc\\win.rs\0 create mode 100644 src/win.rs\n";
        let files = parse_apply_summary(data, "/repo");

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].status, FileStatus::Added);
        // Keeps the numstat spelling of the path.
        assert_eq!(files[0].path, "src\\win.rs");
    }

    #[test]
    fn test_mode_change_lines_are_ignored() {
        let data = "0\t0\tscript.sh\0 mode change 100644 => 100755 script.sh\n";
        let files = parse_apply_summary(data, "/repo");

        assert_eq!(files[0].status, FileStatus::Modified);
    }

    #[test]
    fn test_split_rename() {
        assert_eq!(
            split_rename("src/{a => b}/c.rs"),
            Some(("src/a/c.rs".to_string(), "src/b/c.rs".to_string()))
        );
        assert_eq!(
            split_rename("{old => new}.rs"),
            Some(("old.rs".to_string(), "new.rs".to_string()))
        );
        assert_eq!(split_rename("plain.rs"), None);
    }
}
