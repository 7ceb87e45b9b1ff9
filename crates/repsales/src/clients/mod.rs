//! Type-safe wrappers around [`ScreenClient`](screen_flow::ScreenClient).

pub mod contragent_client;
pub mod deal_client;
pub mod task_client;

pub use contragent_client::*;
pub use deal_client::*;
pub use task_client::*;
