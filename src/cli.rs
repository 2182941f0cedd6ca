//! Command-line argument parsing
//!
//! Supports:
//! - Choosing the id generator
//! - Disabling haptic output
//! - Trimming input before validation
//! - Running a script of shell commands instead of reading stdin
//! - Writing the effective configuration back to disk

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use crate::config::AppConfig;
use crate::model::IdStrategy;

/// A single-screen to-do list
#[derive(Parser, Debug)]
#[command(name = "todolist", version, about = "A single-screen to-do list")]
pub struct CliArgs {
    /// Read commands from this file instead of stdin
    #[arg(short = 's', long, value_name = "FILE")]
    pub script: Option<PathBuf>,

    /// Load configuration from this file instead of the default location
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Id generator for new items (sequential or uuid)
    #[arg(long, value_name = "STRATEGY")]
    pub ids: Option<IdStrategy>,

    /// Do not print haptic feedback
    #[arg(long)]
    pub no_haptics: bool,

    /// Treat whitespace-only input as empty
    #[arg(long)]
    pub trim: bool,

    /// Disable the rolling log file
    #[arg(long)]
    pub no_log_file: bool,

    /// Write the effective configuration to the config file and exit
    #[arg(long)]
    pub write_config: bool,
}

/// Where the shell reads its commands from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    Script(PathBuf),
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub input: InputSource,
    pub config: AppConfig,
    /// Explicit `--config` path, if any
    pub config_path: Option<PathBuf>,
    pub write_config: bool,
}

impl StartupConfig {
    /// Save the effective config to `--config` or the default location
    ///
    /// Returns the path written.
    pub fn write_config(&self) -> Result<PathBuf> {
        let path = match &self.config_path {
            Some(path) => path.clone(),
            None => crate::config_paths::config_file().context("No config directory available")?,
        };
        self.config.save_to(&path)?;
        Ok(path)
    }
}

impl CliArgs {
    /// Load the config file (or defaults) and apply CLI overrides on top
    pub fn into_config(self) -> StartupConfig {
        let base = match &self.config {
            Some(path) => AppConfig::load_or_default(path),
            None => AppConfig::load(),
        };
        self.apply(base)
    }

    /// Apply CLI overrides to an already-loaded config
    pub fn apply(self, mut config: AppConfig) -> StartupConfig {
        if let Some(ids) = self.ids {
            config.id_strategy = ids;
        }
        if self.no_haptics {
            config.haptics = false;
        }
        if self.trim {
            config.trim_input = true;
        }
        if self.no_log_file {
            config.file_logging = false;
        }

        let input = match self.script {
            Some(path) => InputSource::Script(path),
            None => InputSource::Stdin,
        };

        StartupConfig {
            input,
            config,
            config_path: self.config,
            write_config: self.write_config,
        }
    }
}
