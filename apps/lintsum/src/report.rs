//! Report printer: read a JSON lint report and print files with problems.
//!
//! The whole document is parsed up front, so malformed JSON fails before
//! anything is printed. Entries are then decoded one at a time; a bad entry
//! stops the run after the entries before it were already written.
//! Only the counters of a clean file are read, so its other fields may be
//! anything. A file with problems is decoded whole before its header is
//! written, so a bad finding inside it suppresses that file's header too.

use crate::error::{json_kind, ReportError};
use crate::models::{FileCounts, FileReport, Summary};
use crate::output;
use serde::Deserialize;
use serde_json::Value as Json;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Default report name, resolved against the working directory.
pub const DEFAULT_REPORT: &str = "final_lint.json";

/// Read the report and return its top-level entries undecoded.
pub fn load_entries(path: &Path) -> Result<Vec<Json>, ReportError> {
    let data = fs::read_to_string(path).map_err(|source| ReportError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    match serde_json::from_str::<Json>(&data)? {
        Json::Array(entries) => Ok(entries),
        other => Err(ReportError::NotAnArray {
            found: json_kind(&other),
        }),
    }
}

/// Print every file whose error or warning count is positive, in input order.
pub fn print_report<W: Write>(path: &Path, out: &mut W) -> Result<Summary, ReportError> {
    let entries = load_entries(path)?;
    let mut summary = Summary::default();
    for (index, entry) in entries.into_iter().enumerate() {
        let counts = FileCounts::deserialize(&entry)
            .map_err(|source| ReportError::Entry { index, source })?;
        summary.entries += 1;
        if !counts.has_problems() {
            continue;
        }
        let fr: FileReport = serde_json::from_value(entry)
            .map_err(|source| ReportError::Entry { index, source })?;
        summary.findings += output::write_file_report(out, &fr).map_err(ReportError::Write)?;
        summary.files += 1;
    }
    Ok(summary)
}

/// Run the printer behind a single failure boundary.
///
/// On failure the `Error:` line is written to `out` after whatever partial
/// output was already produced, and the error is handed back for exit-code
/// and diagnostic purposes.
pub fn run<W: Write>(path: &Path, out: &mut W) -> Result<Summary, ReportError> {
    match print_report(path, out) {
        Ok(summary) => Ok(summary),
        Err(err) => {
            // Output stream gone: nowhere left to report to.
            let _ = output::write_error(out, &err);
            Err(err)
        }
    }
}
