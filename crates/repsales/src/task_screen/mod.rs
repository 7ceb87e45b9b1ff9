//! # Task Screen
//!
//! State holder for the task list: bulk load with sample-data fallback and
//! the create-task round trip.
//!
//! ## Overview
//!
//! Tasks are owned by the backend. This screen fetches the whole list, shows
//! it, and after a successful create fetches the whole list again instead of
//! patching it locally. A failed create is kept on display verbatim until
//! the user dismisses it.
//!
//! ## Structure
//!
//! - [`store`] - [`ScreenStore`](screen_flow::ScreenStore) implementation for [`TaskStore`]
//! - [`command`] - [`TaskCommand`] mutations
//! - [`error`] - [`TaskScreenError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client

pub mod command;
pub mod error;
pub mod store;

pub use command::*;
pub use error::*;
pub use store::{TaskSnapshot, TaskStore};

use screen_flow::{ScreenActor, ScreenClient};

/// Creates a new task screen actor and its client.
pub fn new() -> (ScreenActor<TaskStore>, ScreenClient<TaskStore>) {
    ScreenActor::new(32)
}
