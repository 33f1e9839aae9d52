//! Error types for the to-do API client.
//!
//! # Design
//! `EmptyName` is the only validation error and is raised before any request
//! exists. `NotFound`, `HttpError` and `Transport` together form the network
//! family: the remote refused the call or could not be reached. `NotFound`
//! gets a dedicated variant because callers often need to tell "the item is
//! gone" apart from other non-2xx responses.

use thiserror::Error;

/// Errors returned by `TodoClient`, `Transport` implementations and
/// `TodoService`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A to-do name was empty or whitespace only. No request was made.
    #[error("to-do name must not be empty")]
    EmptyName,

    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The request never produced a response.
    #[error("transport failed: {0}")]
    Transport(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}

impl ApiError {
    /// True for failures reported by, or on the way to, the remote service.
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            ApiError::NotFound | ApiError::HttpError { .. } | ApiError::Transport(_)
        )
    }
}
