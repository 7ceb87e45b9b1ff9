//! # Generic Screen Actor
//!
//! This module defines the `ScreenActor`, the component that owns one screen's
//! state and processes every request against it sequentially. It implements
//! the "server" side of the model, guaranteeing exclusive access to the store.

use crate::client::ScreenClient;
use crate::error::FlowError;
use crate::message::ScreenRequest;
use crate::store::ScreenStore;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The actor that owns one screen session's state.
///
/// # Architecture Note
/// This struct is the "server" half of a screen. It owns the state and the
/// receiver end of the channel.
///
/// **Concurrency Model**:
/// Each `ScreenActor` processes its own messages *sequentially* in a loop, so
/// no `Mutex` or `RwLock` is needed for the store. The loop suspends only
/// inside the store's `load`/`submit` hooks, which means a fetch completion
/// and a command can never interleave: the displayed snapshot is always
/// derived from a fully applied sequence of inputs, and a stale intermediate
/// state is never observable.
///
/// At most one request per screen is in flight at a time. If a second load is
/// requested while the first is still running, it simply queues behind it and
/// its result replaces the earlier one (last writer wins).
///
/// # Usage Pattern
///
/// 1. **Create**: `ScreenActor::new(buffer)` yields the actor and its
///    [`ScreenClient`].
/// 2. **Wire**: pass collaborators (API handle, policies) into
///    `actor.run(context)`.
/// 3. **Run**: spawn the run loop in a background task.
///
/// ```rust
/// use screen_flow::{ScreenActor, ScreenStore};
/// use async_trait::async_trait;
///
/// // Minimal store definition
/// #[derive(Default)] struct Notes { entries: Vec<String> }
/// #[derive(Debug)] enum NoteCommand { Push(String) }
/// #[derive(Debug, thiserror::Error)] #[error("note error")] struct NoteError;
///
/// #[async_trait]
/// impl ScreenStore for Notes {
///     type Command = NoteCommand;
///     type Snapshot = Vec<String>;
///     type SubmitRequest = ();
///     type SubmitOutcome = ();
///     type Context = ();
///     type Error = NoteError;
///
///     async fn load(&mut self, _: &()) -> Result<(), NoteError> { Ok(()) }
///     fn apply(&mut self, cmd: NoteCommand) -> Result<(), NoteError> {
///         match cmd { NoteCommand::Push(s) => self.entries.push(s) }
///         Ok(())
///     }
///     async fn submit(&mut self, _: (), _: &()) -> Result<(), NoteError> { Ok(()) }
///     fn snapshot(&self) -> Vec<String> { self.entries.clone() }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     // 1. Create
///     let (actor, client) = ScreenActor::<Notes>::new(10);
///
///     // 2. Wire & Run
///     tokio::spawn(actor.run(()));
///
///     // 3. Use
///     let view = client.apply(NoteCommand::Push("hello".into())).await.unwrap();
///     assert_eq!(view, vec!["hello".to_string()]);
/// }
/// ```
pub struct ScreenActor<S: ScreenStore> {
    receiver: mpsc::Receiver<ScreenRequest<S>>,
    state: S,
}

impl<S: ScreenStore> ScreenActor<S> {
    /// Creates a new `ScreenActor` and its associated `ScreenClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is
    ///   full, calls on the client wait until there is space.
    ///
    /// # Returns
    ///
    /// A tuple containing:
    /// 1. The `ScreenActor` instance (the server), which must be run via `.run()`.
    /// 2. The `ScreenClient` instance, which can be cloned and shared to send requests.
    pub fn new(buffer_size: usize) -> (Self, ScreenClient<S>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            state: S::default(),
        };
        let client = ScreenClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// # Context Injection
    /// The `context` argument is injected into the store's async hooks. This
    /// allows stores to reach collaborators (the backend API, fetch policy)
    /// that were created *after* the actor was instantiated but *before* the
    /// loop started.
    pub async fn run(mut self, context: S::Context) {
        // Extract just the type name (e.g., "DealStore" instead of "repsales::screens::deal::DealStore")
        let screen = std::any::type_name::<S>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(screen, "Screen actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ScreenRequest::Load { respond_to } => {
                    debug!(screen, "Load");
                    match self.state.load(&context).await {
                        Ok(()) => {
                            info!(screen, "Loaded");
                            let _ = respond_to.send(Ok(self.state.snapshot()));
                        }
                        Err(e) => {
                            warn!(screen, error = %e, "Load failed");
                            let _ = respond_to.send(Err(FlowError::Store(Box::new(e))));
                        }
                    }
                }
                ScreenRequest::Apply {
                    command,
                    respond_to,
                } => {
                    debug!(screen, ?command, "Apply");
                    match self.state.apply(command) {
                        Ok(()) => {
                            let _ = respond_to.send(Ok(self.state.snapshot()));
                        }
                        Err(e) => {
                            warn!(screen, error = %e, "Apply failed");
                            let _ = respond_to.send(Err(FlowError::Store(Box::new(e))));
                        }
                    }
                }
                ScreenRequest::Submit {
                    request,
                    respond_to,
                } => {
                    debug!(screen, ?request, "Submit");
                    let result = self
                        .state
                        .submit(request, &context)
                        .await
                        .map_err(|e| FlowError::Store(Box::new(e)));
                    match &result {
                        Ok(_) => info!(screen, "Submit handled"),
                        Err(e) => warn!(screen, error = %e, "Submit failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ScreenRequest::Snapshot { respond_to } => {
                    debug!(screen, "Snapshot");
                    let _ = respond_to.send(Ok(self.state.snapshot()));
                }
            }
        }

        info!(screen, "Shutdown");
    }
}
