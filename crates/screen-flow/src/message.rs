//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! the `ScreenClient` and `ScreenActor`.

use crate::error::FlowError;
use crate::store::ScreenStore;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by screen actors.
pub type Response<T> = oneshot::Sender<Result<T, FlowError>>;

/// Internal message type sent to a screen actor to request operations.
///
/// # One Screen, Four Verbs
/// Every screen in the application reduces to the same small set of
/// operations, so the request enum is defined once and parameterized by the
/// store type:
///
/// - **Load**: replace the base collection from the backend and hand back the
///   freshly derived snapshot.
/// - **Apply**: run one synchronous mutation and hand back the freshly
///   derived snapshot. Because every mutation answers with a recomputation,
///   there is exactly one place where criteria, cart, and base data are
///   combined into a view.
/// - **Submit**: perform the screen's create round trip.
/// - **Snapshot**: read the current view without mutating anything.
///
/// # Store Interaction
/// The variants use the associated types of [`ScreenStore`], which guarantees
/// at compile time that a command for one screen cannot be sent to another.
#[derive(Debug)]
pub enum ScreenRequest<S: ScreenStore> {
    Load {
        respond_to: Response<S::Snapshot>,
    },
    Apply {
        command: S::Command,
        respond_to: Response<S::Snapshot>,
    },
    Submit {
        request: S::SubmitRequest,
        respond_to: Response<S::SubmitOutcome>,
    },
    Snapshot {
        respond_to: Response<S::Snapshot>,
    },
}
