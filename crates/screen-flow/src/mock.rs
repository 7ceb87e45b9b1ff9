//! # Mock Framework & Testing Guide
//!
//! The `MockScreen<S>` type stands in for a running [`ScreenActor`]: it hands
//! out a real `ScreenClient<S>` whose requests are answered from a queue of
//! expectations instead of a live store. This enables fast, deterministic
//! testing of client-wrapper logic without spawning any actors.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockScreen | Real Actor |
//! |---------|------------|------------|
//! | **Speed** | Instant (in-memory) | Fast (but involves tokio spawn) |
//! | **Determinism** | 100% Deterministic | Subject to scheduler |
//! | **State** | No real state (expectations) | Real state management |
//! | **Use Case** | Unit testing logic *around* the client | Testing the store itself or full flows |
//! | **Error Injection** | Easy (`return_err`) | Hard (requires specific state) |
//!
//! ## Testing Strategies
//!
//! Three patterns cover the needs of this framework's consumers:
//!
//! - **Client logic (pure mock)**: wrap `MockScreen::client()` in your typed
//!   screen client and test its orchestration and error mapping with queued
//!   responses. No actors involved.
//! - **Single store (real actor)**: spawn `ScreenActor::new` with a real
//!   store and a stubbed context, then drive it through the client. This is
//!   the sweet spot for testing store semantics (filtering, cart bounds,
//!   submission guards).
//! - **Full flow (integration)**: spawn every screen with a shared fake
//!   backend and walk an end-to-end scenario.
//!
//! ## Testing Failure Scenarios
//!
//! The biggest advantage of `MockScreen` is simulating failures that are hard
//! to reproduce with real actors:
//!
//! ```rust
//! use screen_flow::mock::MockScreen;
//! use screen_flow::{FlowError, ScreenStore};
//! use async_trait::async_trait;
//!
//! #[derive(Default)] struct Board;
//! #[derive(Debug)] enum BoardCommand {}
//! #[derive(Debug, thiserror::Error)] #[error("board error")] struct BoardError;
//!
//! #[async_trait]
//! impl ScreenStore for Board {
//!     type Command = BoardCommand;
//!     type Snapshot = Vec<String>;
//!     type SubmitRequest = ();
//!     type SubmitOutcome = ();
//!     type Context = ();
//!     type Error = BoardError;
//!
//!     async fn load(&mut self, _: &()) -> Result<(), BoardError> { Ok(()) }
//!     fn apply(&mut self, _: BoardCommand) -> Result<(), BoardError> { Ok(()) }
//!     async fn submit(&mut self, _: (), _: &()) -> Result<(), BoardError> { Ok(()) }
//!     fn snapshot(&self) -> Vec<String> { Vec::new() }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockScreen::<Board>::new();
//!     let client = mock.client();
//!
//!     // Simulate a dead screen actor
//!     mock.expect_load().return_err(FlowError::ActorClosed);
//!
//!     // Verify your code handles it gracefully
//!     let result = client.load().await;
//!     assert!(matches!(result, Err(FlowError::ActorClosed)));
//! }
//! ```
//!
//! ## Mocking Utilities
//!
//! Use [`create_mock_client`] to get a client and a raw request receiver, or
//! use the fluent [`MockScreen`] API.
//!
//! [`ScreenActor`]: crate::actor::ScreenActor

use crate::client::ScreenClient;
use crate::error::FlowError;
use crate::message::ScreenRequest;
use crate::store::ScreenStore;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// Represents an expected request to the mock screen.
///
/// Used internally by `MockScreen` to track what requests are expected and
/// what responses should be returned.
enum Expectation<S: ScreenStore> {
    Load {
        response: Result<S::Snapshot, FlowError>,
    },
    Apply {
        response: Result<S::Snapshot, FlowError>,
    },
    Submit {
        response: Result<S::SubmitOutcome, FlowError>,
    },
    Snapshot {
        response: Result<S::Snapshot, FlowError>,
    },
}

/// A mock screen with expectation tracking for fluent testing.
///
/// # Example
/// ```ignore
/// let mut mock = MockScreen::<DealStore>::new();
/// mock.expect_load().return_ok(snapshot.clone());
///
/// let client = mock.client();
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockScreen<S: ScreenStore> {
    client: ScreenClient<S>,
    expectations: Arc<Mutex<VecDeque<Expectation<S>>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<S: ScreenStore> Default for MockScreen<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ScreenStore> MockScreen<S> {
    /// Creates a new mock screen with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ScreenRequest<S>>(100);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        // Spawn background task to handle requests
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let mut exps = expectations_clone.lock().unwrap();
                let expectation = exps.pop_front();
                drop(exps); // Release lock before async operations

                match (request, expectation) {
                    (
                        ScreenRequest::Load { respond_to },
                        Some(Expectation::Load { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ScreenRequest::Apply {
                            command: _,
                            respond_to,
                        },
                        Some(Expectation::Apply { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ScreenRequest::Submit {
                            request: _,
                            respond_to,
                        },
                        Some(Expectation::Submit { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ScreenRequest::Snapshot { respond_to },
                        Some(Expectation::Snapshot { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: ScreenClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ScreenClient<S> {
        self.client.clone()
    }

    /// Expects a `load` operation.
    pub fn expect_load(&mut self) -> LoadExpectationBuilder<S> {
        LoadExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `apply` operation.
    pub fn expect_apply(&mut self) -> ApplyExpectationBuilder<S> {
        ApplyExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `submit` operation.
    pub fn expect_submit(&mut self) -> SubmitExpectationBuilder<S> {
        SubmitExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `snapshot` operation.
    pub fn expect_snapshot(&mut self) -> SnapshotExpectationBuilder<S> {
        SnapshotExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder for `load` expectations.
pub struct LoadExpectationBuilder<S: ScreenStore> {
    expectations: Arc<Mutex<VecDeque<Expectation<S>>>>,
}

impl<S: ScreenStore> LoadExpectationBuilder<S> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, snapshot: S::Snapshot) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Load {
            response: Ok(snapshot),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FlowError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Load {
            response: Err(error),
        });
    }
}

/// Builder for `apply` expectations.
pub struct ApplyExpectationBuilder<S: ScreenStore> {
    expectations: Arc<Mutex<VecDeque<Expectation<S>>>>,
}

impl<S: ScreenStore> ApplyExpectationBuilder<S> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, snapshot: S::Snapshot) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Apply {
            response: Ok(snapshot),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FlowError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Apply {
            response: Err(error),
        });
    }
}

/// Builder for `submit` expectations.
pub struct SubmitExpectationBuilder<S: ScreenStore> {
    expectations: Arc<Mutex<VecDeque<Expectation<S>>>>,
}

impl<S: ScreenStore> SubmitExpectationBuilder<S> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, outcome: S::SubmitOutcome) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Submit {
            response: Ok(outcome),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FlowError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Submit {
            response: Err(error),
        });
    }
}

/// Builder for `snapshot` expectations.
pub struct SnapshotExpectationBuilder<S: ScreenStore> {
    expectations: Arc<Mutex<VecDeque<Expectation<S>>>>,
}

impl<S: ScreenStore> SnapshotExpectationBuilder<S> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, snapshot: S::Snapshot) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Snapshot {
            response: Ok(snapshot),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FlowError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Snapshot {
            response: Err(error),
        });
    }
}

// =============================================================================
// LOW-LEVEL HELPERS
// =============================================================================

/// Creates a mock client and a receiver for asserting requests.
///
/// # Testing Strategy
/// In unit/integration tests, we don't want to spin up a full `ScreenActor`
/// if we are just testing the *client* logic (e.g., `DealScreen`).
///
/// Instead, we create a "mock client" whose messages arrive on a channel we
/// control (`receiver`). We can then inspect the messages on that channel and
/// assert they are correct, responding with whatever snapshot or error the
/// test calls for.
///
/// **Note**: Consider using [`MockScreen`] for a more fluent API.
pub fn create_mock_client<S: ScreenStore>(
    buffer_size: usize,
) -> (ScreenClient<S>, mpsc::Receiver<ScreenRequest<S>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ScreenClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Load request
pub async fn expect_load<S: ScreenStore>(
    receiver: &mut mpsc::Receiver<ScreenRequest<S>>,
) -> Option<tokio::sync::oneshot::Sender<Result<S::Snapshot, FlowError>>> {
    match receiver.recv().await {
        Some(ScreenRequest::Load { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is an Apply request
pub async fn expect_apply<S: ScreenStore>(
    receiver: &mut mpsc::Receiver<ScreenRequest<S>>,
) -> Option<(
    S::Command,
    tokio::sync::oneshot::Sender<Result<S::Snapshot, FlowError>>,
)> {
    match receiver.recv().await {
        Some(ScreenRequest::Apply {
            command,
            respond_to,
        }) => Some((command, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Submit request
pub async fn expect_submit<S: ScreenStore>(
    receiver: &mut mpsc::Receiver<ScreenRequest<S>>,
) -> Option<(
    S::SubmitRequest,
    tokio::sync::oneshot::Sender<Result<S::SubmitOutcome, FlowError>>,
)> {
    match receiver.recv().await {
        Some(ScreenRequest::Submit {
            request,
            respond_to,
        }) => Some((request, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ScreenStore;
    use async_trait::async_trait;

    #[derive(Default)]
    struct Tally {
        hits: u32,
    }

    #[derive(Debug)]
    enum TallyCommand {
        Hit,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("Tally error")]
    struct TallyError;

    #[async_trait]
    impl ScreenStore for Tally {
        type Command = TallyCommand;
        type Snapshot = u32;
        type SubmitRequest = ();
        type SubmitOutcome = bool;
        type Context = ();
        type Error = TallyError;

        async fn load(&mut self, _ctx: &()) -> Result<(), TallyError> {
            self.hits = 0;
            Ok(())
        }

        fn apply(&mut self, command: TallyCommand) -> Result<(), TallyError> {
            match command {
                TallyCommand::Hit => self.hits += 1,
            }
            Ok(())
        }

        async fn submit(&mut self, _request: (), _ctx: &()) -> Result<bool, TallyError> {
            Ok(true)
        }

        fn snapshot(&self) -> u32 {
            self.hits
        }
    }

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<Tally>(10);

        // Test Apply
        let apply_task = tokio::spawn(async move { client.apply(TallyCommand::Hit).await });

        let (command, responder) = expect_apply(&mut receiver)
            .await
            .expect("Expected Apply request");
        assert!(matches!(command, TallyCommand::Hit));
        responder.send(Ok(1)).unwrap();

        let result = apply_task.await.unwrap();
        assert!(matches!(result, Ok(1)));
    }

    #[tokio::test]
    async fn test_mock_screen_with_expectations() {
        // Create mock with fluent expectation API
        let mut mock = MockScreen::<Tally>::new();

        // Set up expectations
        mock.expect_load().return_ok(0);
        mock.expect_apply().return_ok(1);
        mock.expect_submit().return_ok(true);

        let client = mock.client();

        // Execute operations
        assert_eq!(client.load().await.unwrap(), 0);
        assert_eq!(client.apply(TallyCommand::Hit).await.unwrap(), 1);
        assert!(client.submit(()).await.unwrap());

        // Verify all expectations were met
        mock.verify();
    }
}
