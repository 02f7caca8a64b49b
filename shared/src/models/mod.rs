//! Data models for the Newsdesk client
//!
//! Wire-facing types exchanged with the backend service, plus the small
//! client-local types built from form input. All of these are transient:
//! they live for one request/response cycle, and nothing here is persisted
//! except the token (see [`crate::token`]).

use serde::{Deserialize, Deserializer, Serialize};

/// Login form input, serialized verbatim as the body of the authentication
/// request. Never persisted beyond the outgoing request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new<U: Into<String>, P: Into<String>>(username: U, password: P) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Successful authentication response. The token is opaque to the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Body of a semantic search request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    pub top_k: u32,
}

impl SearchRequest {
    /// Build a request with the fixed result budget used by the search view.
    pub fn new<S: Into<String>>(query: S) -> Self {
        Self {
            query: query.into(),
            top_k: crate::constants::DEFAULT_TOP_K,
        }
    }
}

/// A single ranked match returned by the search endpoint.
///
/// `snippet` arrives as an HTML fragment with highlight markup and must be
/// reduced to plain text before display (see [`crate::snippet`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub source: String,
    pub score: f64,
    #[serde(default)]
    pub snippet: String,
}

impl SearchHit {
    /// Score formatted the way the result list displays it.
    pub fn score_display(&self) -> String {
        format!("{:.3}", self.score)
    }
}

/// Response envelope for the search endpoint. The `results` field may be
/// absent entirely, which counts as an empty result set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchHit>,
}

/// The backend emits numeric ids for some document stores and string ids for
/// others; normalize both to a string.
fn de_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IdRepr {
        Text(String),
        Number(i64),
    }

    Ok(match IdRepr::deserialize(deserializer)? {
        IdRepr::Text(text) => text,
        IdRepr::Number(number) => number.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_serialize_with_expected_keys() {
        let credentials = Credentials::new("reader", "secret");
        let json = serde_json::to_value(&credentials).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"username": "reader", "password": "secret"})
        );
    }

    #[test]
    fn search_request_uses_fixed_top_k() {
        let request = SearchRequest::new("rust async");
        assert_eq!(request.top_k, 10);

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"query": "rust async", "top_k": 10})
        );
    }

    #[test]
    fn search_response_parses_full_hit() {
        let raw = r#"{"results":[{"id":1,"title":"A","source":"doc1","score":0.842,"snippet":"<b>hi</b>"}]}"#;
        let response: SearchResponse = serde_json::from_str(raw).unwrap();

        assert_eq!(response.results.len(), 1);
        let hit = &response.results[0];
        assert_eq!(hit.id, "1");
        assert_eq!(hit.title, "A");
        assert_eq!(hit.source, "doc1");
        assert_eq!(hit.score_display(), "0.842");
        assert_eq!(hit.snippet, "<b>hi</b>");
    }

    #[test]
    fn search_response_accepts_string_ids() {
        let raw = r#"{"results":[{"id":"doc-17","title":"B","source":"feed","score":0.5,"snippet":""}]}"#;
        let response: SearchResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.results[0].id, "doc-17");
    }

    #[test]
    fn search_response_without_results_field_is_empty() {
        let response: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(response.results.is_empty());
    }

    #[test]
    fn score_display_rounds_to_three_places() {
        let mut hit = SearchHit {
            id: "1".to_string(),
            title: String::new(),
            source: String::new(),
            score: 0.8421,
            snippet: String::new(),
        };
        assert_eq!(hit.score_display(), "0.842");

        hit.score = 1.0;
        assert_eq!(hit.score_display(), "1.000");
    }
}
