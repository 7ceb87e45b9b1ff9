//! Error types for the deal screen.

use crate::api::ApiError;
use thiserror::Error;

/// Errors that can occur while driving the deal screen.
///
/// Order submission failures are not errors at this level: they resolve the
/// [`Submission`](crate::submission::Submission) machine and stay on display
/// for the user instead.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DealScreenError {
    /// A bulk read failed and the fetch policy said not to recover.
    #[error("Product fetch failed: {0}")]
    Fetch(ApiError),

    /// An error occurred while communicating with the screen actor.
    #[error("Screen communication error: {0}")]
    ScreenCommunication(String),
}

impl From<String> for DealScreenError {
    fn from(msg: String) -> Self {
        DealScreenError::ScreenCommunication(msg)
    }
}
