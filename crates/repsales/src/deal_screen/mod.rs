//! # Deal Screen
//!
//! State holder for the deal workspace: the product catalog, the shopping
//! cart, and the order checkout.
//!
//! ## Overview
//!
//! This is the busiest screen in the application. The catalog half mirrors
//! the directory screen (bulk load, search, category filter); the cart half
//! holds quantity state bounded by per-product stock; the checkout half runs
//! the create-order round trip through a [`Submission`](crate::submission::Submission)
//! state machine.
//!
//! ## Checkout Rules
//!
//! - An empty cart resolves to a failure immediately, without touching the
//!   backend.
//! - A successful order clears the cart and the comment and carries the
//!   server-assigned id in its message.
//! - A failed order leaves the cart intact so the user can retry by hand;
//!   nothing retries automatically.
//!
//! ## Structure
//!
//! - [`store`] - [`ScreenStore`](screen_flow::ScreenStore) implementation for [`DealStore`]
//! - [`command`] - [`DealCommand`] mutations and the [`PlaceOrder`] request
//! - [`error`] - [`DealScreenError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client

pub mod command;
pub mod error;
pub mod store;

pub use command::*;
pub use error::*;
pub use store::{DealSnapshot, DealStore, EMPTY_CART_MESSAGE};

use screen_flow::{ScreenActor, ScreenClient};

/// Creates a new deal screen actor and its client.
pub fn new() -> (ScreenActor<DealStore>, ScreenClient<DealStore>) {
    ScreenActor::new(32)
}
