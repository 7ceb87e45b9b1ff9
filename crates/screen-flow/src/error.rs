//! # Framework Errors
//!
//! This module defines the common error types used throughout the screen-flow
//! framework. By centralizing error definitions, we ensure consistent error
//! handling across all screen actors and clients.

/// Errors that can occur within the screen-flow framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    #[error("Screen actor closed")]
    ActorClosed,
    #[error("Screen actor dropped response channel")]
    ActorDropped,
    #[error("Store error: {0}")]
    Store(Box<dyn std::error::Error + Send + Sync>),
}
