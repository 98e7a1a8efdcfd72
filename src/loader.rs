//! Line-oriented record loading.
//!
//! Each non-blank line holds `title,author`. Lines are trimmed, split on every comma, and
//! each field is trimmed again. A line is accepted when it yields exactly two fields; empty
//! fields are allowed through as empty strings. Anything else is rejected, logged, and
//! skipped. Nothing in here aborts a load.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::core::Record;
use crate::error::{Error, Result};

pub const FIELD_DELIMITER: char = ',';

/// What a single input line turned into.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineOutcome {
    /// Empty after trimming; skipped silently.
    Blank,
    Record(Record),
    /// Split into this many fields instead of two.
    Malformed(usize),
}

/// Why a line was not loaded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RejectReason {
    FieldCount(usize),
    InvalidUtf8,
}

/// A rejected input line. `line_number` is 1-based.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rejected {
    pub line_number: usize,
    pub raw: String,
    pub reason: RejectReason,
}

/// Outcome of a load: accepted records in input order plus everything that was skipped.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub records: Vec<Record>,
    pub rejected: Vec<Rejected>,
    /// Set when the source itself could not be read; `records` is then empty.
    pub source_error: Option<Error>,
}

impl LoadReport {
    fn push_line(&mut self, line_number: usize, raw: &str) {
        let raw = raw.trim_end_matches(['\r', '\n']);
        match parse_line(raw) {
            LineOutcome::Blank => {}
            LineOutcome::Record(record) => self.records.push(record),
            LineOutcome::Malformed(fields) => {
                tracing::warn!(line_number, raw, fields, "skipping malformed row");
                self.rejected.push(Rejected {
                    line_number,
                    raw: raw.to_string(),
                    reason: RejectReason::FieldCount(fields),
                });
            }
        }
    }
}

/// Parses one raw line.
///
/// ```
/// use shelfsort::loader::{parse_line, LineOutcome};
///
/// assert!(matches!(parse_line("  Dune , Frank Herbert "), LineOutcome::Record(_)));
/// assert_eq!(parse_line("   "), LineOutcome::Blank);
/// assert_eq!(parse_line("OnlyOneField"), LineOutcome::Malformed(1));
/// ```
pub fn parse_line(raw: &str) -> LineOutcome {
    let line = raw.trim();
    if line.is_empty() {
        return LineOutcome::Blank;
    }

    let mut fields = line.split(FIELD_DELIMITER).map(str::trim);
    match (fields.next(), fields.next(), fields.next()) {
        (Some(title), Some(author), None) => LineOutcome::Record(Record::new(title, author)),
        (Some(_), Some(_), Some(_)) => LineOutcome::Malformed(3 + fields.count()),
        _ => LineOutcome::Malformed(1),
    }
}

/// Loads records from in-memory lines.
pub fn load_lines<I>(lines: I) -> LoadReport
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut report = LoadReport::default();
    for (index, line) in lines.into_iter().enumerate() {
        report.push_line(index + 1, line.as_ref());
    }
    report
}

/// Loads records from a byte stream.
///
/// A line that is not valid UTF-8 is rejected on its own. A read error ends the load; the
/// lines read so far are kept and the error is recorded in [`LoadReport::source_error`].
pub fn load_reader<R: BufRead>(mut reader: R) -> LoadReport {
    let mut report = LoadReport::default();
    let mut buf = Vec::new();
    let mut line_number = 0;

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {}
            Err(source) => {
                tracing::warn!(error = %source, line_number, "source read failed mid-stream");
                report.source_error = Some(Error::Read { source });
                break;
            }
        }
        line_number += 1;

        match std::str::from_utf8(&buf) {
            Ok(line) => report.push_line(line_number, line),
            Err(_) => {
                let raw = String::from_utf8_lossy(&buf).trim_end().to_string();
                tracing::warn!(line_number, raw = %raw, "skipping row with invalid UTF-8");
                report.rejected.push(Rejected {
                    line_number,
                    raw,
                    reason: RejectReason::InvalidUtf8,
                });
            }
        }
    }

    report
}

/// Opens `path` for reading.
pub fn open_source(path: &Path) -> Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })
}

/// Loads records from a file.
///
/// A missing or unreadable file is not fatal: the report comes back empty with
/// [`LoadReport::source_error`] set.
pub fn load_path(path: &Path) -> LoadReport {
    match open_source(path) {
        Ok(reader) => {
            let mut report = load_reader(reader);
            report.source_error = report.source_error.take().map(|err| match err {
                Error::Read { source } => Error::Io {
                    path: path.to_path_buf(),
                    source,
                },
                other => other,
            });
            report
        }
        Err(err) => {
            tracing::warn!(
                path = %path.display(),
                error = %err,
                "catalog source unavailable, loading empty catalog"
            );
            LoadReport {
                source_error: Some(err),
                ..LoadReport::default()
            }
        }
    }
}
