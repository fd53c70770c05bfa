//! lintsum CLI binary entry point.
//! Resolves settings, runs the report printer, and maps the outcome to an exit status.

use clap::Parser;
use lintsum::cli::Cli;
use lintsum::config::{self, Loaded};
use lintsum::report;
use lintsum::utils::{error_prefix, info_prefix, note_prefix};
use std::error::Error as _;
use std::io::{self, BufWriter, Write};

fn main() {
    let cli = Cli::parse();
    let eff = config::resolve_effective(
        cli.repo_root.as_deref(),
        cli.report.as_deref(),
        if cli.fail_on_error { Some(true) } else { None },
    );

    if cli.verbose {
        match &eff.loaded {
            Loaded::Found(p, _) => {
                eprintln!("{} using config {}", info_prefix(), p.display());
            }
            Loaded::Invalid(p, e) => {
                eprintln!("{} ignoring invalid config {}: {}", note_prefix(), p.display(), e);
            }
            Loaded::Missing => {
                eprintln!("{} No lintsum.toml found; using defaults.", note_prefix());
            }
        }
        eprintln!("{} reading {}", info_prefix(), eff.report.display());
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let outcome = report::run(&eff.report, &mut out);
    // Nothing useful can be said if stdout itself is closed.
    let _ = out.flush();
    drop(out);

    match outcome {
        Ok(summary) => {
            if cli.verbose {
                eprintln!(
                    "{} entries={} files={} findings={}",
                    info_prefix(),
                    summary.entries,
                    summary.files,
                    summary.findings
                );
            }
        }
        Err(err) => {
            if cli.verbose {
                let mut cause = err.source();
                while let Some(c) = cause {
                    eprintln!("{} caused by: {}", error_prefix(), c);
                    cause = c.source();
                }
            }
            if eff.fail_on_error {
                std::process::exit(1);
            }
        }
    }
}
