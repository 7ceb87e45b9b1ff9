//! Store implementation for the deal workspace screen.

use super::command::{DealCommand, PlaceOrder};
use super::error::DealScreenError;
use crate::cart::Cart;
use crate::context::Backend;
use crate::fetch;
use crate::model::{Order, Product};
use crate::samples;
use crate::submission::Submission;
use crate::view::products::{self, ProductCriteria};
use async_trait::async_trait;
use screen_flow::ScreenStore;

/// Failure message for a checkout attempted with nothing in the cart.
pub const EMPTY_CART_MESSAGE: &str = "Cart is empty";

/// State of the deal workspace screen.
#[derive(Default)]
pub struct DealStore {
    products: Vec<Product>,
    loaded: bool,
    notice: Option<String>,
    criteria: ProductCriteria,
    cart: Cart,
    comment: String,
    client_id: Option<String>,
    submission: Submission,
}

/// What the deal screen renders.
#[derive(Debug, Clone, PartialEq)]
pub struct DealSnapshot {
    /// The filtered catalog.
    pub products: Vec<Product>,
    /// Distinct non-blank categories in the full catalog, for the filter panel.
    pub categories: Vec<String>,
    /// The criteria the catalog view was derived from.
    pub criteria: ProductCriteria,
    pub cart: Cart,
    /// Sum of all cart line totals.
    pub cart_total: f64,
    /// Total quantity across all cart lines.
    pub cart_item_count: u32,
    pub comment: String,
    pub client_id: Option<String>,
    pub submission: Submission,
    /// False until the first load completes.
    pub loaded: bool,
    /// Non-fatal banner text when sample data is being shown.
    pub notice: Option<String>,
}

#[async_trait]
impl ScreenStore for DealStore {
    type Command = DealCommand;
    type Snapshot = DealSnapshot;
    type SubmitRequest = PlaceOrder;
    type SubmitOutcome = Submission;
    type Context = Backend;
    type Error = DealScreenError;

    async fn load(&mut self, ctx: &Backend) -> Result<(), DealScreenError> {
        let loaded = fetch::resolve(
            "products",
            ctx.api.get_products().await,
            ctx.fetch_policy,
            samples::products,
        )
        .map_err(DealScreenError::Fetch)?;
        self.products = loaded.records;
        self.notice = loaded.notice;
        self.loaded = true;
        Ok(())
    }

    fn apply(&mut self, command: DealCommand) -> Result<(), DealScreenError> {
        match command {
            DealCommand::SetQuery(query) => self.criteria.query = query,
            DealCommand::SetCategory(category) => self.criteria.category = category,
            DealCommand::ClearFilters => self.criteria.clear_filters(),

            DealCommand::AddToCart { product_id } => {
                // A stale id (product gone after a reload) falls through silently
                let product = self
                    .products
                    .iter()
                    .find(|p| p.product_id == product_id)
                    .cloned();
                if let Some(product) = product {
                    self.cart.add(&product);
                }
            }
            DealCommand::RemoveFromCart { product_id } => self.cart.remove(&product_id),
            DealCommand::SetQuantity {
                product_id,
                quantity,
            } => self.cart.set_quantity(&product_id, quantity),
            DealCommand::IncreaseQuantity { product_id } => self.cart.increase(&product_id),
            DealCommand::DecreaseQuantity { product_id } => self.cart.decrease(&product_id),
            DealCommand::ClearCart => self.cart.clear(),

            DealCommand::SetComment(comment) => self.comment = comment,
            DealCommand::SetClient(client_id) => self.client_id = client_id,
            DealCommand::DismissOrderStatus => self.submission.dismiss(),
        }
        Ok(())
    }

    async fn submit(
        &mut self,
        _request: PlaceOrder,
        ctx: &Backend,
    ) -> Result<Submission, DealScreenError> {
        if self.cart.is_empty() {
            // Refused before any request goes out
            self.submission.resolve_failure(EMPTY_CART_MESSAGE);
            return Ok(self.submission.clone());
        }
        if !self.submission.begin() {
            return Ok(self.submission.clone());
        }

        let order = Order::from_cart(&self.cart, self.client_id.clone(), &self.comment);
        match ctx.api.create_order(&order).await {
            Ok(response) if response.success => {
                let order_id = response.order_id.unwrap_or_default();
                self.submission
                    .resolve_success(format!("Order created. ID: {order_id}"));
                // A placed order consumes the cart and the comment; the
                // client id is kept for the next order to the same customer.
                self.cart.clear();
                self.comment.clear();
            }
            Ok(response) => {
                self.submission.resolve_failure(
                    response
                        .error
                        .unwrap_or_else(|| "Unknown error".to_string()),
                );
            }
            Err(e) => {
                self.submission.resolve_failure(e.to_string());
            }
        }

        Ok(self.submission.clone())
    }

    fn snapshot(&self) -> DealSnapshot {
        DealSnapshot {
            products: products::compute_view(&self.products, &self.criteria),
            categories: products::categories(&self.products),
            criteria: self.criteria.clone(),
            cart: self.cart.clone(),
            cart_total: self.cart.total(),
            cart_item_count: self.cart.item_count(),
            comment: self.comment.clone(),
            client_id: self.client_id.clone(),
            submission: self.submission.clone(),
            loaded: self.loaded,
            notice: self.notice.clone(),
        }
    }
}
