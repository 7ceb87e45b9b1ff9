//! # Repsales Client Core
//!
//! The headless engine of a small sales/CRM client: a task list, a
//! contragent (counterparty) directory, a product catalog with a shopping
//! cart, and order placement against a JSON-over-HTTP backend.
//!
//! ## Core Components
//!
//! - **[model]**: Pure data structures mirroring the backend's wire format.
//! - **[view]**: Pure filter/sort/facet functions deriving each screen's
//!   visible collection from its base collection and criteria.
//! - **[cart]**: The shopping cart with stock-bounded quantities and totals.
//! - **[submission]**: The tri-state order submission machine.
//! - **[api]**: The backend contract, its reqwest implementation, and the
//!   test mock.
//! - **[task_screen] / [contragent_screen] / [deal_screen]**: One
//!   [`ScreenStore`](screen_flow::ScreenStore) per screen session, hosted by
//!   `screen-flow` actors.
//! - **[clients]**: Type-safe wrappers (e.g., [`DealClient`](clients::DealClient))
//!   that hide the message passing.
//! - **[lifecycle]**: The [`SalesApp`](lifecycle::SalesApp) orchestrator.
//!
//! ## Quick Start
//!
//! The demo entry point is in `main.rs`, which:
//! 1. Sets up tracing and builds an [`HttpSalesApi`](api::HttpSalesApi) from
//!    environment configuration.
//! 2. Loads every screen (an unreachable backend serves the built-in sample
//!    sets instead of failing).
//! 3. Walks a deal: search the catalog, fill the cart, place the order.
//!
//! ## Testing
//!
//! See [`api::MockApi`] for scripting the backend and `screen_flow::mock`
//! for testing the typed clients without spawning actors.

pub mod api;
pub mod cart;
pub mod clients;
pub mod config;
pub mod context;
pub mod contragent_screen;
pub mod dates;
pub mod deal_screen;
pub mod fetch;
pub mod lifecycle;
pub mod model;
pub mod samples;
pub mod submission;
pub mod task_screen;
pub mod view;
