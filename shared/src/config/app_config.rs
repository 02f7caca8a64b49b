//! Application configuration for the Newsdesk client
//!
//! Settings a desktop installation can change without rebuilding: which
//! server to talk to and how long to wait for it. Everything defaults to a
//! local development server so a missing config file still produces a
//! usable client.

use serde::{Deserialize, Serialize};

use crate::error::{SharedError, SharedResult};

/// Main application configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Backend service settings
    pub server: ServerConfig,
}

/// Backend service configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Base URL of the backend service
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: crate::constants::DEFAULT_SERVER_URL.to_string(),
            timeout_seconds: 30,
        }
    }
}

impl AppConfig {
    /// Reject configurations the client cannot start with.
    pub fn validate(&self) -> SharedResult<()> {
        let url = self.server.base_url.trim();
        if url.is_empty() {
            return Err(SharedError::Config {
                message: "server.base_url must not be empty".to_string(),
            });
        }
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(SharedError::Config {
                message: format!("server.base_url must be an http(s) URL, got '{url}'"),
            });
        }
        if self.server.timeout_seconds == 0 {
            return Err(SharedError::Config {
                message: "server.timeout_seconds must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.server.base_url, "http://localhost:8080");
        assert_eq!(config.server.timeout_seconds, 30);
    }

    #[test]
    fn empty_base_url_is_rejected() {
        let mut config = AppConfig::default();
        config.server.base_url = String::new();
        assert_matches!(config.validate(), Err(SharedError::Config { .. }));
    }

    #[test]
    fn non_http_base_url_is_rejected() {
        let mut config = AppConfig::default();
        config.server.base_url = "ftp://example.com".to_string();
        assert_matches!(config.validate(), Err(SharedError::Config { .. }));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let mut config = AppConfig::default();
        config.server.timeout_seconds = 0;
        assert_matches!(config.validate(), Err(SharedError::Config { .. }));
    }

    #[test]
    fn partial_yaml_fills_in_defaults() {
        let config: AppConfig =
            serde_yaml::from_str("server:\n  base_url: \"https://news.example.com\"\n").unwrap();
        assert_eq!(config.server.base_url, "https://news.example.com");
        assert_eq!(config.server.timeout_seconds, 30);
    }
}
