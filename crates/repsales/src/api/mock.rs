//! In-memory [`SalesApi`] for deterministic tests.
//!
//! Follows the expectation-queue idea from `screen_flow::mock`, applied to
//! the backend boundary: each endpoint has a queue of canned results consumed
//! in order, plus call counters so tests can assert that an operation was
//! never attempted (the empty-cart guard, for example, must not reach the
//! backend at all).

use crate::api::{ApiError, SalesApi};
use crate::model::{
    Contragent, CreateOrderResponse, CreateTaskRequest, CreateTaskResponse, Order, Product, Task,
};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// A scripted backend: answers each call from a per-endpoint queue.
///
/// # Example
/// ```ignore
/// let api = MockApi::new();
/// api.queue_products(Ok(products.clone()));
/// api.queue_order_create(Ok(CreateOrderResponse { success: true, .. }));
/// ```
#[derive(Default)]
pub struct MockApi {
    tasks: Mutex<VecDeque<Result<Vec<Task>, ApiError>>>,
    contragents: Mutex<VecDeque<Result<Vec<Contragent>, ApiError>>>,
    products: Mutex<VecDeque<Result<Vec<Product>, ApiError>>>,
    task_creates: Mutex<VecDeque<Result<CreateTaskResponse, ApiError>>>,
    order_creates: Mutex<VecDeque<Result<CreateOrderResponse, ApiError>>>,
    submitted_orders: Mutex<Vec<Order>>,
    order_calls: AtomicUsize,
    task_create_calls: AtomicUsize,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue_tasks(&self, result: Result<Vec<Task>, ApiError>) {
        self.tasks.lock().unwrap().push_back(result);
    }

    pub fn queue_contragents(&self, result: Result<Vec<Contragent>, ApiError>) {
        self.contragents.lock().unwrap().push_back(result);
    }

    pub fn queue_products(&self, result: Result<Vec<Product>, ApiError>) {
        self.products.lock().unwrap().push_back(result);
    }

    pub fn queue_task_create(&self, result: Result<CreateTaskResponse, ApiError>) {
        self.task_creates.lock().unwrap().push_back(result);
    }

    pub fn queue_order_create(&self, result: Result<CreateOrderResponse, ApiError>) {
        self.order_creates.lock().unwrap().push_back(result);
    }

    /// Number of create-order round trips attempted.
    pub fn order_calls(&self) -> usize {
        self.order_calls.load(Ordering::SeqCst)
    }

    /// Number of create-task round trips attempted.
    pub fn task_create_calls(&self) -> usize {
        self.task_create_calls.load(Ordering::SeqCst)
    }

    /// The most recently submitted order payload, if any.
    pub fn last_order(&self) -> Option<Order> {
        self.submitted_orders.lock().unwrap().last().cloned()
    }

    fn next<T>(queue: &Mutex<VecDeque<Result<T, ApiError>>>, endpoint: &str) -> Result<T, ApiError> {
        queue
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("MockApi: no response queued for {endpoint}"))
    }
}

#[async_trait]
impl SalesApi for MockApi {
    async fn get_tasks(&self) -> Result<Vec<Task>, ApiError> {
        Self::next(&self.tasks, "getTasks")
    }

    async fn get_contragents(&self) -> Result<Vec<Contragent>, ApiError> {
        Self::next(&self.contragents, "getContragents")
    }

    async fn get_products(&self) -> Result<Vec<Product>, ApiError> {
        Self::next(&self.products, "getProductV2")
    }

    async fn create_task(
        &self,
        _request: &CreateTaskRequest,
    ) -> Result<CreateTaskResponse, ApiError> {
        self.task_create_calls.fetch_add(1, Ordering::SeqCst);
        Self::next(&self.task_creates, "setTask")
    }

    async fn create_order(&self, order: &Order) -> Result<CreateOrderResponse, ApiError> {
        self.order_calls.fetch_add(1, Ordering::SeqCst);
        self.submitted_orders.lock().unwrap().push(order.clone());
        Self::next(&self.order_creates, "createOrder")
    }
}
