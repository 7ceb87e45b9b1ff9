//! Error types for the backend boundary.

use thiserror::Error;

/// Errors from the sales backend boundary.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// The request never produced a response (DNS, refused connection,
    /// timeout).
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("Server error: {status} - {body}")]
    Server { status: u16, body: String },

    /// The backend answered success with nothing in the body.
    #[error("Empty response from server")]
    EmptyResponse,

    /// The body arrived but does not match the expected shape.
    #[error("Malformed response: {0}")]
    Decode(String),

    /// The connection settings are unusable.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl ApiError {
    /// Whether substituting fallback data is a reasonable recovery.
    ///
    /// Transport problems and server-side failures leave the client with
    /// nothing to show, so the fixed sample set steps in. A response that
    /// arrives but fails to parse points at a contract mismatch between
    /// client and backend and is propagated instead of being papered over.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Network(_) | Self::Server { .. } | Self::EmptyResponse
        )
    }
}
