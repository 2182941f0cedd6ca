//! Where todolist keeps its files on disk
//!
//! ```text
//! <config dir>/todolist/
//! ├── config.yaml
//! └── logs/
//!     └── todolist.log.YYYY-MM-DD
//! ```
//!
//! `<config dir>` is `$XDG_CONFIG_HOME` (or `~/.config`) on Unix and macOS,
//! and `%APPDATA%` on Windows.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

const APP_DIR: &str = "todolist";
const CONFIG_FILE: &str = "config.yaml";
const LOGS_DIR: &str = "logs";

/// File name prefix of the rolling log files
pub const LOG_FILE_PREFIX: &str = "todolist.log";

/// Base directory holding the config file and the logs
pub fn config_dir() -> Option<PathBuf> {
    let base = if cfg!(target_os = "windows") {
        std::env::var_os("APPDATA").map(PathBuf::from)
    } else {
        std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
    };
    base.map(|base| base.join(APP_DIR))
}

/// Default location of `config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}

pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(LOGS_DIR))
}

/// The log file the current session writes to
///
/// Falls back to the undated prefix when no log has been written yet.
pub fn log_file() -> Option<PathBuf> {
    let dir = logs_dir()?;
    Some(latest_log_in(&dir).unwrap_or_else(|| dir.join(LOG_FILE_PREFIX)))
}

/// Newest rolling log file in `dir`
///
/// Daily rotation appends a `YYYY-MM-DD` suffix, so the greatest name is the
/// newest file.
pub fn latest_log_in(dir: &Path) -> Option<PathBuf> {
    std::fs::read_dir(dir)
        .ok()?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with(LOG_FILE_PREFIX))
        })
        .max()
}

/// Create the logs directory if needed and return it
pub fn ensure_logs_dir() -> Result<PathBuf> {
    let dir = logs_dir().context("No config directory available")?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    Ok(dir)
}
