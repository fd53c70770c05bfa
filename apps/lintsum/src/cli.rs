//! CLI argument parsing via `clap`.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "lintsum",
    version,
    about = "Summarize an ESLint JSON report",
    long_about = "lintsum — print the files of a JSON lint report that have errors or warnings, one line per finding.\n\nConfiguration precedence: CLI > lintsum.toml > defaults.",
    after_help = "Examples:\n  lintsum\n  lintsum reports/eslint.json\n  lintsum --fail-on-error --verbose build/final_lint.json"
)]
/// Top-level CLI options.
pub struct Cli {
    #[arg(help = "Path to the JSON lint report (default: final_lint.json)")]
    pub report: Option<String>,
    #[arg(long, help = "Start directory for lintsum.toml discovery (default: current dir)")]
    pub repo_root: Option<String>,
    #[arg(long, action = clap::ArgAction::SetTrue, help = "Exit with status 1 when the report cannot be printed")]
    pub fail_on_error: bool,
    #[arg(short, long, action = clap::ArgAction::SetTrue, help = "Print diagnostics to stderr")]
    pub verbose: bool,
}
