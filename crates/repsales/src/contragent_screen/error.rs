//! Error types for the contragent screen.

use crate::api::ApiError;
use thiserror::Error;

/// Errors that can occur while driving the contragent directory.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ContragentScreenError {
    /// A bulk read failed and the fetch policy said not to recover.
    #[error("Contragent fetch failed: {0}")]
    Fetch(ApiError),

    /// An error occurred while communicating with the screen actor.
    #[error("Screen communication error: {0}")]
    ScreenCommunication(String),
}

impl From<String> for ContragentScreenError {
    fn from(msg: String) -> Self {
        ContragentScreenError::ScreenCommunication(msg)
    }
}
