//! Locations of filmdeck's files.
//!
//! Everything lives in one directory: `--dir` when given, else
//! `$HOME/.config/filmdeck`. It holds `config.toml` and, while the
//! browser runs, `filmdeck.log`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Config file name inside the filmdeck directory.
const CONFIG_FILE: &str = "config.toml";

/// Log file written by `browse`, which owns the terminal.
const LOG_FILE: &str = "filmdeck.log";

/// Returns the filmdeck directory.
///
/// # Errors
///
/// Returns an error if `dir` is `None` and `HOME` is not set.
fn filmdeck_dir(dir: Option<&PathBuf>) -> Result<PathBuf> {
    if let Some(d) = dir {
        return Ok(d.clone());
    }
    let home = std::env::var("HOME").context("HOME environment variable is not set")?;
    Ok(Path::new(&home).join(".config").join("filmdeck"))
}

/// Resolves `config.toml`. The file itself is optional.
///
/// # Errors
///
/// Returns an error if `dir` is `None` and `HOME` is not set.
pub fn resolve_config_path(dir: Option<&PathBuf>) -> Result<PathBuf> {
    Ok(filmdeck_dir(dir)?.join(CONFIG_FILE))
}

/// Resolves `filmdeck.log`.
///
/// # Errors
///
/// Returns an error if `dir` is `None` and `HOME` is not set.
pub fn resolve_log_path(dir: Option<&PathBuf>) -> Result<PathBuf> {
    Ok(filmdeck_dir(dir)?.join(LOG_FILE))
}
