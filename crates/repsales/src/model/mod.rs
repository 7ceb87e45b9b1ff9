//! Pure data structures mirroring the backend's wire format.

pub mod contragent;
pub mod order;
pub mod product;
pub mod task;

pub use contragent::*;
pub use order::*;
pub use product::*;
pub use task::*;
