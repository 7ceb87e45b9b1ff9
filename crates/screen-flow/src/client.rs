//! # Generic Client
//!
//! This module defines the generic client for communicating with screen actors.

use crate::error::FlowError;
use crate::message::ScreenRequest;
use crate::store::ScreenStore;
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for interacting with a `ScreenActor`.
///
/// The `ScreenClient<S>` provides an async API for driving one screen's state.
/// It forwards requests over a Tokio mpsc channel and receives results via
/// oneshot channels. The client is cheap to clone and can be shared across
/// tasks.
///
/// * **Cloneable** - holds only a sender, so cloning is inexpensive.
/// * **Async API** - all methods resolve to `Result<…, FlowError>`.
/// * **Generic** - works with any state type that implements `ScreenStore`.
pub struct ScreenClient<S: ScreenStore> {
    sender: mpsc::Sender<ScreenRequest<S>>,
}

// Manual impl: the store itself is never cloned, only the sender.
impl<S: ScreenStore> Clone for ScreenClient<S> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<S: ScreenStore> ScreenClient<S> {
    pub fn new(sender: mpsc::Sender<ScreenRequest<S>>) -> Self {
        Self { sender }
    }

    /// Asks the actor to (re)load the base collection, returning the snapshot
    /// derived from the result.
    pub async fn load(&self) -> Result<S::Snapshot, FlowError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ScreenRequest::Load { respond_to })
            .await
            .map_err(|_| FlowError::ActorClosed)?;
        response.await.map_err(|_| FlowError::ActorDropped)?
    }

    /// Applies one synchronous mutation and returns the snapshot derived from
    /// the updated state.
    pub async fn apply(&self, command: S::Command) -> Result<S::Snapshot, FlowError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ScreenRequest::Apply {
                command,
                respond_to,
            })
            .await
            .map_err(|_| FlowError::ActorClosed)?;
        response.await.map_err(|_| FlowError::ActorDropped)?
    }

    /// Runs the screen's create round trip.
    pub async fn submit(&self, request: S::SubmitRequest) -> Result<S::SubmitOutcome, FlowError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ScreenRequest::Submit {
                request,
                respond_to,
            })
            .await
            .map_err(|_| FlowError::ActorClosed)?;
        response.await.map_err(|_| FlowError::ActorDropped)?
    }

    /// Reads the current snapshot without mutating anything.
    pub async fn snapshot(&self) -> Result<S::Snapshot, FlowError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ScreenRequest::Snapshot { respond_to })
            .await
            .map_err(|_| FlowError::ActorClosed)?;
        response.await.map_err(|_| FlowError::ActorDropped)?
    }
}
