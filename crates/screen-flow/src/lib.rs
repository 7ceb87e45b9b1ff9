//! # Screen Flow
//!
//! This crate provides the foundational building blocks for screen-session
//! state management in the actor style. Each screen of an application gets a
//! single state holder that owns its data outright and processes every
//! request sequentially, which makes the reactive parts of a client app
//! (search criteria, filters, a shopping cart) safe without any locking.
//!
//! ## Why One Actor Per Screen?
//!
//! A screen's state has three kinds of inputs that are easy to get wrong when
//! they race: the base collection arriving from a fetch, synchronous user
//! mutations (typing a query, changing a filter, editing a cart), and the
//! outcome of a submission round trip. Funnelling all three through one
//! sequentially processed mailbox gives:
//!
//! - **Isolation**: state is owned by the actor task; no shared memory, no
//!   locks.
//! - **Ordering**: a fetch completion can never interleave with a command, so
//!   the snapshot handed back after any request reflects the most recent
//!   combination of inputs, never a half-applied one.
//! - **A single recomputation point**: every mutation answers with a freshly
//!   derived snapshot, so there is exactly one place where base data and
//!   criteria combine into a view.
//!
//! ## Architecture Overview
//!
//! The framework separates concerns into three layers:
//!
//! 1. **Store Layer** ([`ScreenStore`]) - Your screen state and domain logic
//! 2. **Runtime Layer** ([`ScreenActor`]) - Message processing and concurrency
//! 3. **Interface Layer** ([`ScreenClient`]) - Type-safe communication
//!
//! You write the screen's semantics once in the store trait, and the
//! framework handles all the async message passing, error propagation, and
//! snapshot plumbing.
//!
//! ## Core Abstractions
//!
//! ### [`ScreenStore`] - The Screen Semantics
//!
//! Define what your screen holds and how it reacts:
//!
//! ```rust
//! use screen_flow::{ScreenActor, ScreenStore};
//! use async_trait::async_trait;
//!
//! // 1. Define the store
//! #[derive(Default)]
//! struct Bookmarks {
//!     urls: Vec<String>,
//! }
//!
//! #[derive(Debug)]
//! enum BookmarkCommand {
//!     Add(String),
//!     Clear,
//! }
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("bookmark error")]
//! struct BookmarkError;
//!
//! #[async_trait]
//! impl ScreenStore for Bookmarks {
//!     type Command = BookmarkCommand;
//!     type Snapshot = Vec<String>;
//!     type SubmitRequest = ();
//!     type SubmitOutcome = ();
//!     type Context = ();
//!     type Error = BookmarkError;
//!
//!     async fn load(&mut self, _ctx: &()) -> Result<(), BookmarkError> {
//!         Ok(())
//!     }
//!
//!     fn apply(&mut self, command: BookmarkCommand) -> Result<(), BookmarkError> {
//!         match command {
//!             BookmarkCommand::Add(url) => self.urls.push(url),
//!             BookmarkCommand::Clear => self.urls.clear(),
//!         }
//!         Ok(())
//!     }
//!
//!     async fn submit(&mut self, _req: (), _ctx: &()) -> Result<(), BookmarkError> {
//!         Ok(())
//!     }
//!
//!     fn snapshot(&self) -> Vec<String> {
//!         self.urls.clone()
//!     }
//! }
//!
//! // 2. Use the actor
//! #[tokio::main]
//! async fn main() {
//!     // Create actor and client
//!     let (actor, client) = ScreenActor::<Bookmarks>::new(10);
//!
//!     // Spawn the actor
//!     tokio::spawn(actor.run(()));
//!
//!     // Use the client
//!     let view = client.apply(BookmarkCommand::Add("https://example.com".into())).await.unwrap();
//!     assert_eq!(view.len(), 1);
//! }
//! ```
//!
//! ## Context Injection Pattern
//!
//! Collaborators are injected at **runtime** via the `run()` method, not at
//! construction time. A store that needs a backend handle declares it in its
//! `Context` type, and the orchestrator passes it when spawning:
//!
//! ```rust,ignore
//! let (actor, client) = ScreenActor::<DealStore>::new(32);
//! tokio::spawn(actor.run(DealContext { api: api.clone(), policy: FetchPolicy::Fallback }));
//! ```
//!
//! This "late binding" keeps store types constructible with `Default` and
//! lets tests swap in a fake backend without touching the store.
//!
//! ## Concurrency Model
//!
//! - Each screen actor runs in its own Tokio task
//! - Messages are processed **sequentially** within an actor (no locks needed!)
//! - Multiple screens run in **parallel** (true concurrency)
//! - Suspension happens only inside `load`/`submit`, at the network boundary
//!
//! ## Testing
//!
//! The framework provides a **MockScreen** type that hands out the same
//! `ScreenClient<S>` API as a real actor but answers from an expectation
//! queue, entirely in-memory. See the [`mock`] module for the full API and
//! usage patterns.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod error;
pub mod message;
pub mod mock;
pub mod store;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ScreenActor;
pub use client::ScreenClient;
pub use client_trait::ScreenHandle;
pub use error::FlowError;
pub use message::{Response, ScreenRequest};
pub use store::ScreenStore;
