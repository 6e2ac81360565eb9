//! Hunk body parsing and per-line state reconstruction.
//!
//! Deleted lines are first recorded as `Removed` at provisional line numbers.
//! When an addition run follows, additions are laid over those same numbers
//! and a line that lands on a provisional deletion becomes `Changed`. Pairing
//! is by position within the two runs, not by content.
//!
//! After a change block the counter resumes past the addition run. When the
//! deletion run was longer, following lines overwrite the stranded removals.

use log::debug;
use std::collections::BTreeMap;

use super::helpers::parse_hunk_header;
use super::model::{Hunk, HunkLine, LineState, ParsedHunks};

/// Parse the hunks of a single file.
///
/// `data` is everything from the file's first `@@` line onward. Text before
/// the first hunk header is ignored.
///
/// # Returns
///
/// * `Some(ParsedHunks)` - Hunks in file order (possibly none)
/// * `None` - `data` was empty
pub fn parse_file_diff(data: &str, include_raw_content: bool) -> Option<ParsedHunks> {
    if data.is_empty() {
        debug!("parse_file_diff: no data");
        return None;
    }

    let lines: Vec<&str> = data.split('\n').collect();
    let mut hunks = Vec::new();

    // Skip header
    let mut i = lines
        .iter()
        .position(|line| is_hunk_header(line))
        .unwrap_or(lines.len());

    while i < lines.len() {
        let header = lines[i];
        let body_start = i + 1;
        let body_end = lines[body_start..]
            .iter()
            .position(|line| is_hunk_header(line))
            .map_or(lines.len(), |offset| body_start + offset);
        i = body_end;

        let Some((previous, current)) = parse_hunk_header(header) else {
            debug!("parse_file_diff: skipping malformed hunk header {:?}", header);
            continue;
        };

        let body = &lines[body_start..body_end];
        let mut builder = HunkLineMap::new(current.start);
        if builder.consume(body).is_none() {
            debug!("parse_file_diff: line numbers overflow in hunk {:?}", header);
            continue;
        }

        hunks.push(Hunk {
            header: header.to_string(),
            content: body.join("\n"),
            previous,
            current,
            lines: builder.finish(),
        });
    }

    debug!("parse_file_diff: parsed {} hunks", hunks.len());

    Some(ParsedHunks {
        raw_content: include_raw_content.then(|| data.to_string()),
        hunks,
    })
}

fn is_hunk_header(line: &str) -> bool {
    line.starts_with("@@")
}

/// Working line map for one hunk, keyed by current-file line number.
struct HunkLineMap {
    lines: BTreeMap<usize, HunkLine>,
    /// Next current-file line number to assign.
    line_number: usize,
}

impl HunkLineMap {
    fn new(start: usize) -> Self {
        Self {
            lines: BTreeMap::new(),
            line_number: start,
        }
    }

    /// Classify every body line of the hunk.
    ///
    /// Returns `None` if a line number would overflow.
    fn consume(&mut self, body: &[&str]) -> Option<()> {
        let mut i = 0;
        while i < body.len() {
            let line = body[i];
            match line.as_bytes().first().copied() {
                Some(b'-') => {
                    let removed = take_run(&body[i..], b'-');
                    i += removed.len();
                    let added = take_run(&body[i..], b'+');
                    i += added.len();
                    self.change_block(&removed, &added)?;
                }
                Some(b'+') => {
                    self.push(HunkLine::added(&line[1..]))?;
                    i += 1;
                }
                Some(b' ') => {
                    self.push(HunkLine::unchanged(&line[1..]))?;
                    i += 1;
                }
                // "\ No newline at end of file", blank trailing lines
                _ => i += 1,
            }
        }
        Some(())
    }

    fn push(&mut self, line: HunkLine) -> Option<()> {
        let next = self.line_number.checked_add(1)?;
        self.lines.insert(self.line_number, line);
        self.line_number = next;
        Some(())
    }

    /// Record a deletion run and the addition run right after it (possibly empty).
    fn change_block(&mut self, removed: &[&str], added: &[&str]) -> Option<()> {
        let start = self.line_number;

        for (offset, text) in removed.iter().enumerate() {
            self.lines.insert(start.checked_add(offset)?, HunkLine::removed(text));
        }

        if added.is_empty() {
            self.line_number = start.checked_add(removed.len())?;
            return Some(());
        }

        for (offset, text) in added.iter().enumerate() {
            let key = start.checked_add(offset)?;
            if let Some(line) = self
                .lines
                .get_mut(&key)
                .filter(|line| line.previous.is_some())
            {
                line.current = Some(text.to_string());
                line.state = LineState::Changed;
                continue;
            }
            self.lines.insert(key, HunkLine::added(text));
        }
        self.line_number = start.checked_add(added.len())?;
        Some(())
    }

    fn finish(self) -> BTreeMap<usize, HunkLine> {
        self.lines
    }
}

/// Consecutive lines starting with `marker`, with the marker stripped.
fn take_run<'a>(lines: &[&'a str], marker: u8) -> Vec<&'a str> {
    lines
        .iter()
        .take_while(|line| line.as_bytes().first() == Some(&marker))
        .map(|line| &line[1..])
        .collect()
}
