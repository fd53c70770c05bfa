//! Failure kinds for a report run.
//!
//! Every variant ends up as the same single `Error: <message>` line; the
//! variants only exist so callers and tests can tell the causes apart.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    /// Report file missing, unreadable, or not permitted.
    #[error("{}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Report content is not JSON.
    #[error(transparent)]
    Decode(#[from] serde_json::Error),
    /// Report decoded, but the top-level value is not an array.
    #[error("expected a JSON array at the top level, found {found}")]
    NotAnArray { found: &'static str },
    /// A top-level entry does not match the file report shape.
    #[error("entry {index}: {source}")]
    Entry {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
    /// Writing to the output stream failed.
    #[error("write failed: {0}")]
    Write(#[source] io::Error),
}

/// Human name of a JSON value's kind, as used in `NotAnArray`.
pub fn json_kind(v: &serde_json::Value) -> &'static str {
    match v {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
