//! lintsum core library.
//!
//! Reads an ESLint-style JSON report and prints the files that carry errors
//! or warnings, one line per finding.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `error`: Failure kinds behind the single `Error:` line.
//! - `models`: Report records (`FileReport`, `Finding`) and run summary.
//! - `output`: Exact line shapes for headers, findings and failures.
//! - `report`: The read-filter-print pass.
//! - `utils`: Stderr diagnostic prefixes.
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod report;
pub mod utils;
