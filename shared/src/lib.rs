//! Newsdesk Shared Library
//!
//! This crate contains the shared data models, API client, and common
//! functionality used by the Newsdesk desktop client. It provides a
//! consistent interface for talking to the backend service, persisting the
//! authentication token, and loading application configuration.
//!
//! # Features
//!
//! - **Data Models**: Wire-facing structures for credentials and search results
//! - **API Client**: HTTP client for the backend with shared bearer-token state
//! - **Token Store**: On-disk persistence for the authentication token
//! - **Configuration**: Application settings with file persistence
//! - **Utilities**: Form validation and snippet text extraction
//!
//! # Usage
//!
//! ```rust,no_run
//! use newsdesk_shared::{ApiClient, Credentials};
//!
//! # async fn example() -> Result<(), newsdesk_shared::ApiError> {
//! let client = ApiClient::new("http://localhost:8080");
//! let credentials = Credentials::new("reader", "secret");
//!
//! // A successful login installs the token for every later request.
//! let token = client.login(&credentials).await?;
//! client.authorize(token);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod models;
pub mod snippet;
pub mod token;
pub mod validation;

// Re-export commonly used types for convenience
pub use api::{ApiClient, ApiError, ApiResult};
pub use config::{AppConfig, ConfigManager, ServerConfig};
pub use models::{Credentials, LoginResponse, SearchHit, SearchRequest, SearchResponse};
pub use token::TokenStore;
pub use validation::{credentials_complete, validate_credentials};

/// Current library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Error types used throughout the library
pub mod error {
    use thiserror::Error;

    /// Common error type for shared library operations
    #[derive(Error, Debug)]
    pub enum SharedError {
        #[error("Validation error: {message}")]
        Validation { message: String },

        #[error("Serialization error: {message}")]
        Serialization { message: String },

        #[error("Configuration error: {message}")]
        Config { message: String },

        #[error("IO error: {0}")]
        Io(#[from] std::io::Error),
    }

    impl From<serde_yaml::Error> for SharedError {
        fn from(error: serde_yaml::Error) -> Self {
            SharedError::Serialization {
                message: error.to_string(),
            }
        }
    }

    /// Result type alias for shared library operations
    pub type SharedResult<T> = Result<T, SharedError>;
}

pub use error::{SharedError, SharedResult};

/// Library configuration and constants
pub mod constants {
    /// Fixed number of ranked matches requested per search
    pub const DEFAULT_TOP_K: u32 = 10;

    /// File name of the persisted authentication token, relative to the
    /// application config directory
    pub const TOKEN_FILE_NAME: &str = "token";

    /// File name of the application configuration file
    pub const CONFIG_FILE_NAME: &str = "config.yml";

    /// Server base URL used when no configuration is present
    pub const DEFAULT_SERVER_URL: &str = "http://localhost:8080";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_version() {
        assert!(VERSION.starts_with(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_credentials_creation() {
        let credentials = Credentials::new("reader", "secret");
        assert_eq!(credentials.username, "reader");
        assert_eq!(credentials.password, "secret");
    }

    #[test]
    fn test_constants() {
        assert_eq!(constants::DEFAULT_TOP_K, 10);
        assert!(constants::DEFAULT_SERVER_URL.starts_with("http://"));
        assert!(constants::CONFIG_FILE_NAME.ends_with(".yml"));
    }
}
