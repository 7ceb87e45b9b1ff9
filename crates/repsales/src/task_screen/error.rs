//! Error types for the task screen.

use crate::api::ApiError;
use thiserror::Error;

/// Errors that can occur while driving the task screen.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TaskScreenError {
    /// A bulk read failed and the fetch policy said not to recover.
    #[error("Task fetch failed: {0}")]
    Fetch(ApiError),

    /// An error occurred while communicating with the screen actor.
    #[error("Screen communication error: {0}")]
    ScreenCommunication(String),
}

impl From<String> for TaskScreenError {
    fn from(msg: String) -> Self {
        TaskScreenError::ScreenCommunication(msg)
    }
}
