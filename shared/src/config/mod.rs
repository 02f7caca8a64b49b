//! Configuration management for the Newsdesk client
//!
//! Handles loading and saving the application configuration file. A missing
//! file is not an error: the manager falls back to defaults, so a fresh
//! installation starts without any setup step.

pub mod app_config;

pub use app_config::{AppConfig, ServerConfig};

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::SharedResult;

/// Configuration manager for the desktop application
#[derive(Debug)]
pub struct ConfigManager {
    path: PathBuf,
    config: AppConfig,
    loaded: bool,
}

impl ConfigManager {
    /// Create a manager backed by an explicit config file path.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            config: AppConfig::default(),
            loaded: false,
        }
    }

    /// Manager rooted at the default config file location.
    pub fn default_location() -> Self {
        Self::new(paths::config_file())
    }

    /// Load configuration from file. A missing file yields the defaults.
    /// Safe to call multiple times.
    pub fn load(&mut self) -> SharedResult<()> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => {
                self.config = serde_yaml::from_str(&raw)?;
                debug!(path = %self.path.display(), "configuration loaded");
            }
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                self.config = AppConfig::default();
                debug!(path = %self.path.display(), "no configuration file, using defaults");
            }
            Err(error) => return Err(error.into()),
        }
        self.loaded = true;
        Ok(())
    }

    /// Save the current configuration to file.
    pub fn save(&self) -> SharedResult<()> {
        let raw = serde_yaml::to_string(&self.config)?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, raw)?;
        Ok(())
    }

    /// Get immutable reference to the configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get mutable reference to the configuration.
    pub fn config_mut(&mut self) -> &mut AppConfig {
        &mut self.config
    }

    /// Whether `load` has run.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Default file locations for the current platform
pub mod paths {
    use std::path::PathBuf;

    /// Application config directory (`~/.config/newsdesk` on Linux).
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("newsdesk")
    }

    /// Default application config file path.
    pub fn config_file() -> PathBuf {
        config_dir().join(crate::constants::CONFIG_FILE_NAME)
    }

    /// Fixed location of the persisted authentication token.
    pub fn token_file() -> PathBuf {
        config_dir().join(crate::constants::TOKEN_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_without_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let mut manager = ConfigManager::new(dir.path().join("config.yml"));
        assert!(!manager.is_loaded());

        manager.load().unwrap();
        assert!(manager.is_loaded());
        assert_eq!(manager.config(), &AppConfig::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yml");

        let mut manager = ConfigManager::new(&path);
        manager.load().unwrap();
        manager.config_mut().server.base_url = "https://news.example.com".to_string();
        manager.config_mut().server.timeout_seconds = 5;
        manager.save().unwrap();

        let mut reloaded = ConfigManager::new(&path);
        reloaded.load().unwrap();
        assert_eq!(reloaded.config().server.base_url, "https://news.example.com");
        assert_eq!(reloaded.config().server.timeout_seconds, 5);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yml");
        fs::write(&path, "server: [not, a, mapping]").unwrap();

        let mut manager = ConfigManager::new(&path);
        assert!(manager.load().is_err());
        assert!(!manager.is_loaded());
    }

    #[test]
    fn default_paths_are_rooted_in_the_app_directory() {
        assert!(paths::config_file().ends_with("newsdesk/config.yml"));
        assert!(paths::token_file().ends_with("newsdesk/token"));
    }
}
