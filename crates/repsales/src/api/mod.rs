//! # Backend API
//!
//! The remote sales backend, as the rest of the crate sees it: one trait with
//! bulk reads and single-round-trip creates, a reqwest implementation, and an
//! in-memory mock for tests.

pub mod error;
pub mod http;
pub mod mock;

pub use error::ApiError;
pub use http::HttpSalesApi;
pub use mock::MockApi;

use crate::model::{
    Contragent, CreateOrderResponse, CreateTaskRequest, CreateTaskResponse, Order, Product, Task,
};
use async_trait::async_trait;

/// The remote sales backend.
///
/// Bulk reads return whole collections (the backend does not paginate) and
/// the client filters locally. Create operations are single round trips.
/// Implementations map transport and protocol problems to [`ApiError`];
/// recovery policy belongs to the callers, not to this boundary.
#[async_trait]
pub trait SalesApi: Send + Sync {
    async fn get_tasks(&self) -> Result<Vec<Task>, ApiError>;

    async fn get_contragents(&self) -> Result<Vec<Contragent>, ApiError>;

    async fn get_products(&self) -> Result<Vec<Product>, ApiError>;

    async fn create_task(
        &self,
        request: &CreateTaskRequest,
    ) -> Result<CreateTaskResponse, ApiError>;

    async fn create_order(&self, order: &Order) -> Result<CreateOrderResponse, ApiError>;
}
