//! # Configuration Persistence
//!
//! Save and load portal settings to/from disk.

use std::fs;
use std::path::{Path, PathBuf};

use denta_router::HistoryMode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine config directory")]
    NoConfigDir,

    /// Reading or writing the config file failed.
    #[error("config io error: {0}")]
    Io(#[from] std::io::Error),

    /// The config could not be serialized.
    #[error("config serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Navigation mode the router is built with.
    #[serde(default)]
    pub history_mode: HistoryMode,
}

impl AppConfig {
    /// Returns the config file path.
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("denta").join("config.json"))
    }

    /// Loads configuration from disk, or returns defaults if not found.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            tracing::warn!("could not determine config directory, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Loads configuration from a specific path, with the same fallback
    /// policy as [`AppConfig::load`]: any failure means defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(?path, "config file not found, using defaults");
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    tracing::info!(?path, "loaded configuration");
                    config
                }
                Err(e) => {
                    tracing::warn!(?path, error = %e, "failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(?path, error = %e, "failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Saves configuration to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::config_path().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)
    }

    /// Saves configuration to a specific path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;

        tracing::info!(?path, "saved configuration");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_browser_history() {
        let config = AppConfig::default();
        assert_eq!(config.history_mode, HistoryMode::Browser);
    }

    #[test]
    fn round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("denta").join("config.json");

        let config = AppConfig {
            history_mode: HistoryMode::Hash,
        };
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path);
        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");

        assert_eq!(AppConfig::load_from(&path), AppConfig::default());
    }

    #[test]
    fn corrupt_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        assert_eq!(AppConfig::load_from(&path), AppConfig::default());
    }

    #[test]
    fn unknown_fields_do_not_break_loading() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"history_mode":"hash","theme":"dark"}"#).unwrap();

        let loaded = AppConfig::load_from(&path);
        assert_eq!(loaded.history_mode, HistoryMode::Hash);
    }
}
