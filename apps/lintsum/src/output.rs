//! Line rendering for the report summary.
//!
//! The shapes are fixed and consumed by other tooling, so they carry no
//! color and no alignment:
//! - `File: <filePath>`
//! - `  Line <line>:<column> - <ruleId> - <message>`
//! - `Error: <description>`

use crate::error::ReportError;
use crate::models::{FileReport, Finding};
use std::io::{self, Write};

pub fn header_line(fr: &FileReport) -> String {
    format!("File: {}", fr.file_path)
}

pub fn finding_line(f: &Finding) -> String {
    format!(
        "  Line {}:{} - {} - {}",
        f.line,
        f.column,
        f.rule_label(),
        f.message
    )
}

/// Write one file block (header plus its findings in input order).
/// Returns the number of finding lines written.
pub fn write_file_report<W: Write>(out: &mut W, fr: &FileReport) -> io::Result<usize> {
    writeln!(out, "{}", header_line(fr))?;
    for f in &fr.messages {
        writeln!(out, "{}", finding_line(f))?;
    }
    Ok(fr.messages.len())
}

/// Write the single failure line.
pub fn write_error<W: Write>(out: &mut W, err: &ReportError) -> io::Result<()> {
    writeln!(out, "Error: {}", err)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finding(line: u64, column: u64, rule: Option<&str>, message: &str) -> Finding {
        Finding {
            line,
            column,
            rule_id: rule.map(str::to_string),
            message: message.into(),
        }
    }

    #[test]
    fn test_line_shapes() {
        let fr = FileReport {
            file_path: "src/a.js".into(),
            error_count: 1,
            warning_count: 0,
            messages: vec![finding(3, 5, Some("no-unused-vars"), "x is unused")],
        };
        assert_eq!(header_line(&fr), "File: src/a.js");
        assert_eq!(
            finding_line(&fr.messages[0]),
            "  Line 3:5 - no-unused-vars - x is unused"
        );
    }

    #[test]
    fn test_null_rule_renders_null() {
        let f = finding(1, 1, None, "Parsing error: Unexpected token");
        assert_eq!(
            finding_line(&f),
            "  Line 1:1 - null - Parsing error: Unexpected token"
        );
    }

    #[test]
    fn test_write_file_report_keeps_message_order() {
        let fr = FileReport {
            file_path: "b.ts".into(),
            error_count: 0,
            warning_count: 2,
            messages: vec![
                finding(9, 1, Some("eqeqeq"), "second in source, first in report"),
                finding(2, 4, Some("semi"), "Missing semicolon."),
            ],
        };
        let mut buf = Vec::new();
        let n = write_file_report(&mut buf, &fr).unwrap();
        assert_eq!(n, 2);
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "File: b.ts\n  Line 9:1 - eqeqeq - second in source, first in report\n  Line 2:4 - semi - Missing semicolon.\n"
        );
    }

    #[test]
    fn test_write_error_single_line() {
        let mut buf = Vec::new();
        write_error(&mut buf, &ReportError::NotAnArray { found: "string" }).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Error: expected a JSON array at the top level, found string\n"
        );
    }
}
