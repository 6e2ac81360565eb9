//! `git diff --name-status -z` parsing.

use log::debug;

use super::model::{FileChangeRecord, FileStatus};

/// Parse NUL-delimited name-status records.
///
/// Records look like `<status>\0<path>\0`, or `<status>\0<old>\0<new>\0` for
/// renames and copies. Only the first character of the status token matters,
/// so `R100` reads as a rename.
///
/// # Returns
///
/// * `Some(records)` - One record per status token, in input order
/// * `None` - `data` was empty
pub fn parse_name_status(data: &str, repo_path: &str) -> Option<Vec<FileChangeRecord>> {
    if data.is_empty() {
        debug!("parse_name_status: no data");
        return None;
    }

    let fields: Vec<&str> = data.split('\0').collect();
    // The last field is whatever follows the final NUL, normally empty.
    let last = fields.len() - 1;

    let mut files = Vec::new();
    let mut i = 0;
    while i < last {
        let token = fields[i];
        i += 1;

        let Some(code) = token.chars().next() else {
            continue;
        };
        let status = FileStatus::from_code(code);

        let original_path = if status.has_original_path() {
            let original = fields.get(i).copied();
            i += 1;
            original
        } else {
            None
        };

        let Some(path) = fields.get(i).copied() else {
            debug!("parse_name_status: record {:?} is missing its path", token);
            break;
        };
        i += 1;

        files.push(FileChangeRecord {
            status,
            path: path.to_string(),
            original_path: original_path.map(str::to_string),
            repo_path: repo_path.to_string(),
            stats: None,
        });
    }

    debug!("parse_name_status: parsed {} files", files.len());

    Some(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_none() {
        assert!(parse_name_status("", "/repo").is_none());
    }

    #[test]
    fn test_rename_record() {
        let files = parse_name_status("R\0old.txt\0new.txt\0", "/repo").unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].status, FileStatus::Renamed);
        assert_eq!(files[0].status.code(), 'R');
        assert_eq!(files[0].path, "new.txt");
        assert_eq!(files[0].original_path.as_deref(), Some("old.txt"));
        assert_eq!(files[0].repo_path, "/repo");
        assert!(files[0].stats.is_none());
    }

    #[test]
    fn test_mixed_records() {
        let data = "M\0src/lib.rs\0A\0src/new.rs\0R087\0src/a.rs\0src/b.rs\0C100\0x.rs\0y.rs\0D\0gone.rs\0";
        let files = parse_name_status(data, "/repo").unwrap();

        let summary: Vec<(char, &str, Option<&str>)> = files
            .iter()
            .map(|f| (f.status.code(), f.path.as_str(), f.original_path.as_deref()))
            .collect();
        assert_eq!(
            summary,
            vec![
                ('M', "src/lib.rs", None),
                ('A', "src/new.rs", None),
                ('R', "src/b.rs", Some("src/a.rs")),
                ('C', "y.rs", Some("x.rs")),
                ('D', "gone.rs", None),
            ]
        );
    }

    #[test]
    fn test_unknown_statuses_normalize() {
        let files = parse_name_status(".\0weird.rs\0X\0other.rs\0", "/repo").unwrap();

        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| f.status == FileStatus::Unknown));
        assert_eq!(files[0].status.to_string(), "?");
    }

    #[test]
    fn test_truncated_record_is_dropped() {
        let files = parse_name_status("M\0a.rs\0R\0old.rs", "/repo").unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, "a.rs");
    }

    #[test]
    fn test_only_terminator() {
        let files = parse_name_status("\0", "/repo").unwrap();
        assert!(files.is_empty());
    }
}
