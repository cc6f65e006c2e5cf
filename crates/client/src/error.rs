//! Error types for backend API interactions.

use thiserror::Error;

/// Errors that can occur while talking to the backend REST API.
///
/// `Display` produces the single human-readable message that the UI state
/// layer stores and renders; callers that need more structure can match on
/// the variants.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never produced an HTTP response (DNS failure, connection
    /// refused, timeout, ...).
    #[error("The communication with the backend failed: {0}")]
    Unreachable(String),
    /// The backend answered 401 Unauthorized: wrong credentials, or a
    /// missing/expired/revoked session token.
    #[error("{message}")]
    Unauthorized {
        /// Server-provided reason, or a generic fallback.
        message: String,
    },
    /// The backend rejected the request: a non-2xx status or an error
    /// envelope. Carries the server-provided message when one was present,
    /// otherwise a generic fallback for the failed operation.
    #[error("{0}")]
    Rejected(String),
    /// The response body did not match the expected shape.
    #[error("Could not parse the backend response: {0}")]
    Parse(String),
}
