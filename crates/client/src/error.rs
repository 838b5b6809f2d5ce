//! Error type for the Biblio API client.
//!
//! `Http` carries the raw response body text: the server answers non-2xx
//! with a plain-text message, and callers surface it verbatim.

use thiserror::Error;

/// Errors returned by [`crate::ApiClient`] operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The request never produced a response (connection, DNS, ...).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Decode(String),

    /// The payload was rejected before any request was made.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
