//! Reading and writing the line-oriented URL list format.
//!
//! A list is a sequence of priority groups: a line holding a number sets the
//! priority for every URL line after it until the next number. Blank lines
//! may appear anywhere and are ignored.
//!
//! ```text
//! 0.9
//! https://example.com/
//!
//! 0.8
//! https://example.com/ca.html
//! https://example.com/es.html
//! ```
//!
//! The first non-blank line must be a priority; a URL with no priority in
//! effect is a format error.

use crate::types::{Priority, SitemapEntry, UrlRecord};
use crate::{Error, Result};
use std::io::BufRead;
use tracing::debug;

/// Options controlling how text lists are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextOptions {
    /// Reject priorities outside `0.0..=1.0`.
    pub strict_priority: bool,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            strict_priority: true,
        }
    }
}

/// Lazy reader turning a line stream into [`UrlRecord`]s.
///
/// The iterator stops for good after yielding its first error.
pub struct RecordReader<R> {
    lines: std::io::Lines<R>,
    options: TextOptions,
    current: Option<Priority>,
    line_no: usize,
    priority_seen: bool,
    failed: bool,
}

impl<R: BufRead> RecordReader<R> {
    /// Wrap a buffered reader.
    pub fn new(reader: R, options: TextOptions) -> Self {
        Self {
            lines: reader.lines(),
            options,
            current: None,
            line_no: 0,
            priority_seen: false,
            failed: false,
        }
    }

    /// Whether any priority line has been read so far.
    pub const fn priority_seen(&self) -> bool {
        self.priority_seen
    }

    fn next_record(&mut self) -> Option<Result<UrlRecord>> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(Error::Io(e))),
            };
            self.line_no += 1;

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            if let Some(priority) = Priority::parse_line(trimmed) {
                if !priority.is_finite() {
                    return Some(Err(Error::Format(format!(
                        "line {}: priority {} is not a finite number",
                        self.line_no, priority
                    ))));
                }
                if self.options.strict_priority && !priority.in_range() {
                    return Some(Err(Error::Format(format!(
                        "line {}: priority {} is outside 0.0..=1.0",
                        self.line_no, priority
                    ))));
                }
                debug!(line = self.line_no, priority = %priority, "priority changed");
                self.current = Some(priority);
                self.priority_seen = true;
                continue;
            }

            let Some(priority) = self.current.clone() else {
                return Some(Err(Error::Format(format!(
                    "line {}: expected a priority before the first URL, found '{trimmed}'",
                    self.line_no
                ))));
            };

            return Some(Ok(UrlRecord {
                priority,
                location: trimmed.to_string(),
            }));
        }
    }
}

impl<R: BufRead> Iterator for RecordReader<R> {
    type Item = Result<UrlRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let item = self.next_record();
        if matches!(item, Some(Err(_))) {
            self.failed = true;
        }
        item
    }
}

/// Read every record from a text list.
///
/// Fails if any line is rejected, or if the input never sets a priority
/// (an empty or blank-only list).
pub fn read_records<R: BufRead>(reader: R, options: TextOptions) -> Result<Vec<UrlRecord>> {
    let mut records = RecordReader::new(reader, options);
    let collected = records.by_ref().collect::<Result<Vec<_>>>()?;
    if !records.priority_seen() {
        return Err(Error::Format(
            "input contains no priority line; a list must start with one".to_string(),
        ));
    }
    Ok(collected)
}

/// Render sitemap entries as a text list.
///
/// A priority line is written only when an entry's priority text differs
/// from the previous one written, so consecutive runs collapse into one group
/// while the entry order is kept exactly.
pub fn render_text(entries: &[SitemapEntry]) -> String {
    let mut out = String::new();
    let mut last: Option<&str> = None;
    for entry in entries {
        if last != Some(entry.priority.as_str()) {
            out.push_str(&entry.priority);
            out.push('\n');
            last = Some(entry.priority.as_str());
        }
        out.push_str(&entry.loc);
        out.push('\n');
    }
    out
}
