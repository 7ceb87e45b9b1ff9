//! # ScreenStore Trait
//!
//! The `ScreenStore` trait defines the contract that every screen's state type
//! (task list, contragent directory, deal workspace, …) must implement to be
//! hosted by the generic [`ScreenActor`](crate::actor::ScreenActor). It
//! specifies associated types for commands, snapshots, submissions, context,
//! and errors, and the four operations the actor drives: `load`, `apply`,
//! `submit`, and `snapshot`.
//!
//! # Architecture Note
//! Why do we need this trait?
//! By defining a contract (`ScreenStore`) that all our screen state types must
//! satisfy, we write the `ScreenActor` loop *once* and reuse it for every
//! screen. Associated types enforce safety: a deal screen accepts deal
//! commands only, and the compiler rejects a task command sent to it.
//!
//! The split between the operations mirrors how a screen actually behaves:
//!
//! - `load` is the one async read that replaces the screen's base collection
//!   from the backend. Recovery policy (fall back to a sample set, or raise)
//!   lives inside the store, fed by the injected context.
//! - `apply` covers every synchronous, in-memory mutation: search queries,
//!   filter and sort changes, cart operations. These never suspend and never
//!   touch the network.
//! - `submit` is the single round-trip create operation a screen may offer
//!   (placing an order, creating a task). Screens without one use `()`.
//! - `snapshot` derives the observable view from the current state. It is a
//!   pure function, so the view a caller sees is always consistent with the
//!   most recent combination of base data and criteria.

use async_trait::async_trait;
use std::fmt::Debug;

/// Contract implemented by a screen's state type so a [`ScreenActor`] can host it.
///
/// # Context Injection
/// The `Context` associated type carries the store's collaborators (typically
/// a backend API handle plus a fetch policy). It is injected into `load` and
/// `submit` at runtime via [`ScreenActor::run`], which keeps store
/// construction dependency-free.
///
/// [`ScreenActor`]: crate::actor::ScreenActor
/// [`ScreenActor::run`]: crate::actor::ScreenActor::run
#[async_trait]
pub trait ScreenStore: Default + Send + 'static {
    /// A synchronous, in-memory mutation (criteria change, cart operation, …).
    type Command: Send + Debug + 'static;

    /// The derived view of the current state, recomputed on demand.
    type Snapshot: Send + Debug + 'static;

    /// Payload of the screen's create operation. Use `()` for screens
    /// without one.
    type SubmitRequest: Send + Debug + 'static;

    /// The result a submission resolves to.
    type SubmitOutcome: Send + Debug + 'static;

    /// The runtime collaborators (backend handle, policies) injected into the
    /// async operations.
    type Context: Send + Sync;

    /// The error type for this store.
    ///
    /// # Design Note: Error Granularity
    /// One error enum per screen, not per operation. A store with ten commands
    /// does not need ten error types; callers match on a single enum. The
    /// trade-off is that the enum is the union of everything the screen can
    /// fail with, which in practice stays small because in-memory commands
    /// are designed not to fail at all.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Replaces the base collection from the backend.
    ///
    /// Called while the actor is suspended on this request, so the completion
    /// can never interleave with a command: callers always observe either the
    /// state before the load or the state after it.
    async fn load(&mut self, ctx: &Self::Context) -> Result<(), Self::Error>;

    /// Applies a synchronous mutation to the state.
    ///
    /// Stores are expected to clamp or ignore out-of-range requests rather
    /// than fail; returning an error is reserved for genuinely broken input.
    fn apply(&mut self, command: Self::Command) -> Result<(), Self::Error>;

    /// Performs the screen's create round trip against the backend.
    async fn submit(
        &mut self,
        request: Self::SubmitRequest,
        ctx: &Self::Context,
    ) -> Result<Self::SubmitOutcome, Self::Error>;

    /// Derives the observable view from the current state.
    ///
    /// Must be pure: same state, same snapshot, and the base collections are
    /// never mutated by it.
    fn snapshot(&self) -> Self::Snapshot;
}
