//! Application configuration
//!
//! Stores user preferences in `~/.config/todolist/config.yaml`

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::IdStrategy;

/// Configuration loaded at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// How new item ids are generated ("sequential" or "uuid")
    #[serde(default)]
    pub id_strategy: IdStrategy,
    /// Play tactile feedback after adds and deletes
    #[serde(default = "default_true")]
    pub haptics: bool,
    /// Treat whitespace-only input as empty and store trimmed text
    #[serde(default)]
    pub trim_input: bool,
    /// Write debug logs to `~/.config/todolist/logs/`
    #[serde(default = "default_true")]
    pub file_logging: bool,
}

fn default_true() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            id_strategy: IdStrategy::default(),
            haptics: true,
            trim_input: false,
            file_logging: true,
        }
    }
}

impl AppConfig {
    /// Load config from the default location, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_or_default(&path)
    }

    /// Load config from `path`, falling back to defaults on any problem
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{:#}", e);
                Self::default()
            }
        }
    }

    /// Load config from `path`
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))
    }

    /// Save config to `path`
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }

        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: AppConfig = serde_yaml::from_str("trim_input: true\n").unwrap();
        assert!(config.trim_input);
        assert!(config.haptics);
        assert!(config.file_logging);
        assert_eq!(config.id_strategy, IdStrategy::Sequential);
    }

    #[test]
    fn test_id_strategy_lowercase_in_yaml() {
        let config: AppConfig = serde_yaml::from_str("id_strategy: uuid\n").unwrap();
        assert_eq!(config.id_strategy, IdStrategy::Uuid);
    }

    #[test]
    fn test_unknown_strategy_is_an_error() {
        assert!(serde_yaml::from_str::<AppConfig>("id_strategy: dice\n").is_err());
    }
}
