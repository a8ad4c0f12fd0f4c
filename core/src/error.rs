//! Error types for the todo API client.
//!
//! `NotFound` and `Validation` get dedicated variants because they are the two
//! client errors the server reports. Any other unexpected status lands in
//! `Http` with the raw body for debugging.

use thiserror::Error;

/// Errors returned by `TodoClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404: the referenced todo does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned 422 with this `detail` message.
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(#[source] serde_json::Error),

    #[error("serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),
}
