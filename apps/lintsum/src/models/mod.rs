//! Report data models decoded from ESLint-style JSON output.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
/// Per-file entry of the report: counts plus the findings for that file.
pub struct FileReport {
    #[serde(rename = "filePath")]
    pub file_path: String,
    #[serde(rename = "errorCount")]
    pub error_count: u64,
    #[serde(rename = "warningCount")]
    pub warning_count: u64,
    pub messages: Vec<Finding>,
}

#[derive(Debug, Deserialize)]
/// The two counters of a file entry, read before anything else so clean
/// files are skipped without touching their other fields.
pub struct FileCounts {
    #[serde(rename = "errorCount")]
    pub error_count: u64,
    #[serde(rename = "warningCount")]
    pub warning_count: u64,
}

impl FileCounts {
    /// True when the file carries at least one error or warning.
    pub fn has_problems(&self) -> bool {
        self.error_count > 0 || self.warning_count > 0
    }
}

#[derive(Debug, Deserialize)]
/// A single diagnostic at a line/column.
pub struct Finding {
    pub line: u64,
    pub column: u64,
    #[serde(rename = "ruleId", default)]
    pub rule_id: Option<String>, // null for parse errors
    pub message: String,
}

impl Finding {
    /// Rule identifier as printed; a missing rule renders as `null`.
    pub fn rule_label(&self) -> &str {
        self.rule_id.as_deref().unwrap_or("null")
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// Counters collected while printing; reported only in verbose mode.
pub struct Summary {
    pub entries: usize,
    pub files: usize,
    pub findings: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_ignores_extra_eslint_keys() {
        let v = json!({
            "filePath": "/src/a.js",
            "errorCount": 1,
            "warningCount": 0,
            "fixableErrorCount": 0,
            "source": "var x;",
            "messages": [{
                "line": 1, "column": 5, "ruleId": "no-unused-vars",
                "message": "x is unused", "severity": 2, "nodeType": "Identifier"
            }]
        });
        let counts = FileCounts::deserialize(&v).unwrap();
        assert!(counts.has_problems());
        let fr: FileReport = serde_json::from_value(v).unwrap();
        assert_eq!(fr.file_path, "/src/a.js");
        assert_eq!(fr.messages[0].rule_label(), "no-unused-vars");
    }

    #[test]
    fn test_null_and_absent_rule_id() {
        let null_rule: Finding = serde_json::from_value(
            json!({"line": 1, "column": 1, "ruleId": null, "message": "Parsing error"}),
        )
        .unwrap();
        let absent_rule: Finding =
            serde_json::from_value(json!({"line": 2, "column": 3, "message": "m"})).unwrap();
        assert_eq!(null_rule.rule_label(), "null");
        assert_eq!(absent_rule.rule_label(), "null");
    }

    #[test]
    fn test_counts_ignore_malformed_messages() {
        let v = json!({
            "filePath": 7, "errorCount": 0, "warningCount": 0,
            "messages": [{"message": "File ignored"}]
        });
        let counts = FileCounts::deserialize(&v).unwrap();
        assert!(!counts.has_problems());
    }

    #[test]
    fn test_negative_count_is_rejected() {
        let res = serde_json::from_value::<FileReport>(json!({
            "filePath": "a.js", "errorCount": -1, "warningCount": 0, "messages": []
        }));
        assert!(res.is_err());
    }
}
