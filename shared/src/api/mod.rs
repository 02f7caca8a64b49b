//! HTTP API client for the Newsdesk backend service
//!
//! One client instance is shared by every view. The bearer token installed by
//! a successful login lives inside the client and is attached to every
//! request issued afterwards, mirroring a default-header on the transport.
//!
//! The client is deliberately thin: it does not retry, it does not refresh
//! tokens, and it reports any non-2xx status as a plain failure. Callers
//! decide what, if anything, to tell the user.

use std::fmt;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;
use tracing::debug;

use crate::models::{Credentials, LoginResponse, SearchHit, SearchRequest, SearchResponse};

/// Path of the authentication endpoint
pub const LOGIN_PATH: &str = "/api/auth/login";

/// Path of the semantic search endpoint
pub const SEARCH_PATH: &str = "/api/search/semantic";

/// Maximum time to wait for any single request when the configuration does
/// not say otherwise
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors produced by API calls
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never completed (connection refused, DNS, timeout, or a
    /// malformed response body)
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("server returned {0}")]
    Status(StatusCode),
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Shared HTTP client for the backend service.
///
/// Cheap to clone; clones share the underlying connection pool and the
/// bearer-token state.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: reqwest::Client,
    base_url: String,
    bearer: RwLock<Option<String>>,
}

impl ApiClient {
    /// Create a client with the default request timeout.
    pub fn new<S: Into<String>>(base_url: S) -> Self {
        Self::with_timeout(base_url, DEFAULT_REQUEST_TIMEOUT)
    }

    /// Create a client with an explicit request timeout.
    pub fn with_timeout<S: Into<String>>(base_url: S, timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(format!("newsdesk/{}", crate::VERSION))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            inner: Arc::new(ClientInner {
                http,
                base_url,
                bearer: RwLock::new(None),
            }),
        }
    }

    /// The server base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Install `token` as the default bearer credential for every request
    /// issued from now on. A later login overwrites it; nothing clears it.
    pub fn authorize<S: Into<String>>(&self, token: S) {
        let mut bearer = self
            .inner
            .bearer
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *bearer = Some(token.into());
    }

    /// Whether a bearer token is currently installed.
    pub fn is_authorized(&self) -> bool {
        self.bearer_token().is_some()
    }

    /// Current bearer token, if any.
    pub fn bearer_token(&self) -> Option<String> {
        self.inner
            .bearer
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Submit the login request. Any non-2xx status is a failure; the caller
    /// is responsible for installing the returned token via [`authorize`].
    ///
    /// [`authorize`]: ApiClient::authorize
    pub async fn login(&self, credentials: &Credentials) -> ApiResult<String> {
        debug!(username = %credentials.username, "submitting login request");

        let response = self.post(LOGIN_PATH).json(credentials).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }

        let body: LoginResponse = response.json().await?;
        Ok(body.token)
    }

    /// Submit a semantic search request and return the ranked matches, in
    /// server order. A response without a `results` field yields an empty
    /// list.
    pub async fn search(&self, request: &SearchRequest) -> ApiResult<Vec<SearchHit>> {
        debug!(query = %request.query, top_k = request.top_k, "submitting semantic search");

        let response = self.post(SEARCH_PATH).json(request).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }

        let body: SearchResponse = response.json().await?;
        Ok(body.results)
    }

    /// Build a POST request for `path`, attaching the bearer token when one
    /// is installed.
    fn post(&self, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.inner.base_url, path);
        let mut builder = self.inner.http.post(url);
        if let Some(token) = self.bearer_token() {
            builder = builder.bearer_auth(token);
        }
        builder
    }
}

// Manual impl so the bearer token stays out of debug output.
impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.inner.base_url)
            .field("authorized", &self.is_authorized())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn base_url_is_normalized() {
        let client = ApiClient::new("http://localhost:8080/");
        assert_eq!(client.base_url(), "http://localhost:8080");

        let client = ApiClient::new("http://localhost:8080");
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn authorize_installs_and_overwrites_token() {
        let client = ApiClient::new("http://localhost:8080");
        assert!(!client.is_authorized());

        client.authorize("first");
        assert_eq!(client.bearer_token().as_deref(), Some("first"));

        client.authorize("second");
        assert_eq!(client.bearer_token().as_deref(), Some("second"));
    }

    #[test]
    fn clones_share_bearer_state() {
        let client = ApiClient::new("http://localhost:8080");
        let clone = client.clone();

        client.authorize("shared");
        assert_eq!(clone.bearer_token().as_deref(), Some("shared"));
    }

    #[tokio::test]
    async fn login_against_unreachable_server_is_a_transport_error() {
        // Port 1 is never listening; the connection is refused immediately.
        let client = ApiClient::new("http://127.0.0.1:1");
        let credentials = Credentials::new("reader", "secret");

        let result = client.login(&credentials).await;
        assert_matches!(result, Err(ApiError::Transport(_)));
    }

    #[tokio::test]
    async fn search_against_unreachable_server_is_a_transport_error() {
        let client = ApiClient::new("http://127.0.0.1:1");
        let request = SearchRequest::new("anything");

        let result = client.search(&request).await;
        assert_matches!(result, Err(ApiError::Transport(_)));
    }
}
