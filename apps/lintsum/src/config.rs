//! Configuration discovery and effective settings resolution.
//!
//! lintsum reads `lintsum.toml|yaml|yml` from the start directory (or closest
//! ancestor) and merges it with CLI flags to produce an `Effective` config.
//! Defaults:
//! - `report`: `final_lint.json` (relative to the working directory)
//! - `failOnError`: false
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::report::DEFAULT_REPORT;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_NAMES: [&str; 3] = ["lintsum.toml", "lintsum.yaml", "lintsum.yml"];

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `lintsum.toml|yaml`.
pub struct LintsumConfig {
    /// Report path relative to the directory holding the config file.
    pub report: Option<String>,
    #[serde(rename = "failOnError")]
    pub fail_on_error: Option<bool>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by the binary after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub report: PathBuf,
    pub fail_on_error: bool,
    /// What config discovery found at `repo_root`.
    pub loaded: Loaded,
}

impl Effective {
    /// Config file that contributed settings, if any.
    pub fn config_path(&self) -> Option<&Path> {
        match &self.loaded {
            Loaded::Found(p, _) => Some(p.as_path()),
            Loaded::Invalid(..) | Loaded::Missing => None,
        }
    }
}

#[derive(Debug, Clone)]
/// Outcome of looking for a config file in a directory.
pub enum Loaded {
    Found(PathBuf, LintsumConfig),
    Invalid(PathBuf, String),
    Missing,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a `lintsum.toml|yaml|yml` or a `.git` directory is found.
/// A relative `start` is resolved against the working directory first so
/// the walk can climb past it.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let start = absolute_start(start);
    let mut cur = start.as_path();
    loop {
        if CONFIG_NAMES.iter().any(|n| cur.join(n).exists()) || cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start,
        }
    }
}

fn absolute_start(start: &Path) -> PathBuf {
    if start.is_absolute() {
        return start.to_path_buf();
    }
    match std::env::current_dir() {
        Ok(cwd) if start == Path::new(".") => cwd,
        Ok(cwd) => cwd.join(start),
        Err(_) => start.to_path_buf(),
    }
}

/// Load `LintsumConfig` from `lintsum.toml` or `lintsum.yaml|yml` if present.
pub fn load_config(root: &Path) -> Loaded {
    let Some(path) = CONFIG_NAMES
        .iter()
        .map(|n| root.join(n))
        .find(|p| p.is_file())
    else {
        return Loaded::Missing;
    };
    let s = match fs::read_to_string(&path) {
        Ok(s) => s,
        Err(e) => return Loaded::Invalid(path, e.to_string()),
    };
    let parsed = if path.extension().is_some_and(|e| e == "toml") {
        toml::from_str::<LintsumConfig>(&s).map_err(|e| e.to_string())
    } else {
        serde_yaml::from_str::<LintsumConfig>(&s).map_err(|e| e.to_string())
    };
    match parsed {
        Ok(cfg) => Loaded::Found(path, cfg),
        Err(e) => Loaded::Invalid(path, e),
    }
}

/// Resolve `Effective` by merging CLI flags, a discovered config, and defaults.
///
/// An invalid config is treated like a missing one for settings; the
/// discovery outcome stays on `Effective::loaded` for diagnostics.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_report: Option<&str>,
    cli_fail_on_error: Option<bool>,
) -> Effective {
    let start = PathBuf::from(cli_repo_root.unwrap_or("."));
    let repo_root = detect_repo_root(&start);
    let loaded = load_config(&repo_root);
    let cfg = match &loaded {
        Loaded::Found(_, cfg) => cfg.clone(),
        Loaded::Invalid(..) | Loaded::Missing => LintsumConfig::default(),
    };

    let report = match (cli_report, cfg.report.as_deref()) {
        (Some(p), _) => PathBuf::from(p),
        (None, Some(p)) => repo_root.join(p),
        (None, None) => PathBuf::from(DEFAULT_REPORT),
    };
    let fail_on_error = cli_fail_on_error.or(cfg.fail_on_error).unwrap_or(false);

    Effective {
        repo_root,
        report,
        fail_on_error,
        loaded,
    }
}
