//! Typed client for the evently backend REST API.
//!
//! Wraps the `/api/v1` HTTP surface (authentication, events CRUD, favorites,
//! statistics, file upload). Every response is an [`Envelope`]: any non-2xx
//! status or `type == "error"` body becomes an [`ApiError`] carrying the
//! server message when one is available.
//!
//! # Usage
//!
//! ```rust,ignore
//! use client::ApiClient;
//!
//! let api = ApiClient::new("http://localhost:5000");
//!
//! let auth = api.login("me@example.com", "secret").await?;
//! let mine = api.my_events(&auth.token).await?;
//! println!("you own {} events", mine.len());
//! ```
//!
//! The client holds no session state; the caller passes the bearer token to
//! each authenticated method. Compiles for native targets (tests run against
//! a mock server) and for `wasm32`, where `reqwest` rides on `fetch`.

pub use error::ApiError;

use contracts::Envelope;
use serde::de::DeserializeOwned;

pub mod error;

mod auth;
mod events;
mod stats;
mod uploads;

/// Client for the evently backend. Cheap to clone; clones share the
/// underlying connection pool.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the backend at `base_url` (origin only, e.g.
    /// `http://localhost:5000` — the `/api/v1` prefix is added internally).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/api/v1{}", self.base_url, path)
    }

    /// Send a request and unwrap the `data` field of a success envelope.
    pub(crate) async fn expect_data<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Unreachable(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Unreachable(e.to_string()))?;

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized {
                message: rejection_message(&body, fallback),
            });
        }

        if !status.is_success() {
            return Err(ApiError::Rejected(rejection_message(&body, fallback)));
        }

        let envelope: Envelope<T> = serde_json::from_str(&body)
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        if envelope.is_error() {
            return Err(ApiError::Rejected(envelope.message_or(fallback)));
        }

        envelope
            .data
            .ok_or_else(|| ApiError::Parse("success envelope without data".to_string()))
    }

    /// Send a request where only acknowledgement matters (delete, favorite
    /// toggles). Accepts empty bodies and envelopes without `data`.
    pub(crate) async fn expect_ack(
        &self,
        request: reqwest::RequestBuilder,
        fallback: &str,
    ) -> Result<(), ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Unreachable(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Unreachable(e.to_string()))?;

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized {
                message: rejection_message(&body, fallback),
            });
        }

        if !status.is_success() {
            return Err(ApiError::Rejected(rejection_message(&body, fallback)));
        }

        if let Ok(envelope) = serde_json::from_str::<Envelope<serde_json::Value>>(&body) {
            if envelope.is_error() {
                return Err(ApiError::Rejected(envelope.message_or(fallback)));
            }
        }

        Ok(())
    }
}

/// Best-effort extraction of the server message from an error body.
fn rejection_message(body: &str, fallback: &str) -> String {
    serde_json::from_str::<Envelope<serde_json::Value>>(body)
        .ok()
        .and_then(|envelope| envelope.message)
        .unwrap_or_else(|| fallback.to_string())
}

pub(crate) fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_api_prefix() {
        let api = ApiClient::new("http://localhost:5000/");
        assert_eq!(
            api.url("/events/my-events"),
            "http://localhost:5000/api/v1/events/my-events"
        );
    }

    #[test]
    fn test_rejection_message_prefers_server_text() {
        let body = r#"{"type":"error","message":"Token expired"}"#;
        assert_eq!(rejection_message(body, "fallback"), "Token expired");
        assert_eq!(rejection_message("not json", "fallback"), "fallback");
    }
}
