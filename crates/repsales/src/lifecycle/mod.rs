//! # Application Lifecycle & Orchestration
//!
//! This module manages the runtime lifecycle of the client: creating every
//! screen actor, wiring them to the shared backend, and shutting the whole
//! application down cleanly.
//!
//! ## The Orchestration Pattern
//!
//! Individual screen actors are simple; the coordination lives here.
//!
//! **Key responsibilities:**
//! 1. **Actor creation** - Instantiate every screen actor and its client
//! 2. **Dependency injection** - Hand each actor the shared [`Backend`](crate::context::Backend)
//! 3. **Graceful shutdown** - Coordinate clean termination of all actors
//!
//! ## Graceful Shutdown
//!
//! The shutdown pattern follows these steps:
//!
//! 1. **Drop all clients** - Closes the sender side of every channel
//! 2. **Actors detect closure** - `receiver.recv()` returns `None`
//! 3. **Actors clean up** - Process remaining messages, log final state
//! 4. **Await completion** - Wait for every actor task to finish
//!
//! No messages are lost and every actor terminates cleanly; the screens are
//! independent, so shutdown order between them does not matter.
//!
//! ## Observability
//!
//! Call [`setup_tracing`] once at startup; `RUST_LOG` controls verbosity:
//!
//! ```bash
//! RUST_LOG=info cargo run      # Compact logs
//! RUST_LOG=debug cargo run     # Full payloads
//! ```

pub mod app;

pub use app::*;
pub use screen_flow::tracing::setup_tracing;
