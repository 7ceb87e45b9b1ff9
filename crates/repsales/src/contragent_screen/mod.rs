//! # Contragent Screen
//!
//! State holder for the counterparty directory: bulk load with sample-data
//! fallback, free-text search, categorical filters, and sorting.
//!
//! ## Structure
//!
//! - [`store`] - [`ScreenStore`](screen_flow::ScreenStore) implementation for [`ContragentStore`]
//! - [`command`] - [`ContragentCommand`] mutations
//! - [`error`] - [`ContragentScreenError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client

pub mod command;
pub mod error;
pub mod store;

pub use command::*;
pub use error::*;
pub use store::{ContragentSnapshot, ContragentStore};

use screen_flow::{ScreenActor, ScreenClient};

/// Creates a new contragent screen actor and its client.
pub fn new() -> (ScreenActor<ContragentStore>, ScreenClient<ContragentStore>) {
    ScreenActor::new(32)
}
