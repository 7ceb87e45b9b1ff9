//! # Deal Client
//!
//! Provides a high-level API for interacting with the deal screen actor.
//! It wraps a `ScreenClient<DealStore>` and exposes domain-specific methods
//! for the catalog, the cart, and the checkout.

use crate::deal_screen::{DealCommand, DealScreenError, DealSnapshot, DealStore, PlaceOrder};
use crate::submission::Submission;
use crate::view::products::CategoryFilter;
use async_trait::async_trait;
use screen_flow::{FlowError, ScreenClient, ScreenHandle};
use tracing::{debug, instrument};

/// Client for interacting with the deal screen actor.
#[derive(Clone)]
pub struct DealClient {
    inner: ScreenClient<DealStore>,
}

impl DealClient {
    pub fn new(inner: ScreenClient<DealStore>) -> Self {
        Self { inner }
    }

    async fn apply(&self, command: DealCommand) -> Result<DealSnapshot, DealScreenError> {
        self.inner
            .apply(command)
            .await
            .map_err(<Self as ScreenHandle<DealStore>>::map_error)
    }

    // --- Catalog ---

    /// Updates the free-text query over name and article.
    #[instrument(skip(self, query))]
    pub async fn search(
        &self,
        query: impl Into<String>,
    ) -> Result<DealSnapshot, DealScreenError> {
        debug!("Updating catalog query");
        self.apply(DealCommand::SetQuery(query.into())).await
    }

    /// Restricts the catalog to one category; `None` lifts the restriction.
    #[instrument(skip(self))]
    pub async fn select_category(
        &self,
        category: Option<CategoryFilter>,
    ) -> Result<DealSnapshot, DealScreenError> {
        self.apply(DealCommand::SetCategory(category)).await
    }

    /// Clears the query and the category restriction.
    #[instrument(skip(self))]
    pub async fn clear_filters(&self) -> Result<DealSnapshot, DealScreenError> {
        self.apply(DealCommand::ClearFilters).await
    }

    // --- Cart ---

    /// Adds one unit of a product to the cart, capped at its stock.
    #[instrument(skip(self))]
    pub async fn add_to_cart(
        &self,
        product_id: impl Into<String> + std::fmt::Debug,
    ) -> Result<DealSnapshot, DealScreenError> {
        debug!("Adding product to cart");
        self.apply(DealCommand::AddToCart {
            product_id: product_id.into(),
        })
        .await
    }

    /// Removes a product's line from the cart.
    #[instrument(skip(self))]
    pub async fn remove_from_cart(
        &self,
        product_id: impl Into<String> + std::fmt::Debug,
    ) -> Result<DealSnapshot, DealScreenError> {
        self.apply(DealCommand::RemoveFromCart {
            product_id: product_id.into(),
        })
        .await
    }

    /// Sets a cart line's quantity; zero removes it, excess clamps to stock.
    #[instrument(skip(self))]
    pub async fn set_quantity(
        &self,
        product_id: impl Into<String> + std::fmt::Debug,
        quantity: u32,
    ) -> Result<DealSnapshot, DealScreenError> {
        self.apply(DealCommand::SetQuantity {
            product_id: product_id.into(),
            quantity,
        })
        .await
    }

    /// Adds one unit to an existing cart line.
    #[instrument(skip(self))]
    pub async fn increase_quantity(
        &self,
        product_id: impl Into<String> + std::fmt::Debug,
    ) -> Result<DealSnapshot, DealScreenError> {
        self.apply(DealCommand::IncreaseQuantity {
            product_id: product_id.into(),
        })
        .await
    }

    /// Removes one unit from an existing cart line; dropping below one
    /// removes the line.
    #[instrument(skip(self))]
    pub async fn decrease_quantity(
        &self,
        product_id: impl Into<String> + std::fmt::Debug,
    ) -> Result<DealSnapshot, DealScreenError> {
        self.apply(DealCommand::DecreaseQuantity {
            product_id: product_id.into(),
        })
        .await
    }

    /// Empties the cart.
    #[instrument(skip(self))]
    pub async fn clear_cart(&self) -> Result<DealSnapshot, DealScreenError> {
        self.apply(DealCommand::ClearCart).await
    }

    // --- Checkout ---

    /// Updates the order comment.
    #[instrument(skip(self, comment))]
    pub async fn set_comment(
        &self,
        comment: impl Into<String>,
    ) -> Result<DealSnapshot, DealScreenError> {
        self.apply(DealCommand::SetComment(comment.into())).await
    }

    /// Binds the order to a contragent; `None` makes it anonymous.
    #[instrument(skip(self))]
    pub async fn set_client(
        &self,
        client_id: Option<String>,
    ) -> Result<DealSnapshot, DealScreenError> {
        self.apply(DealCommand::SetClient(client_id)).await
    }

    /// Places the current cart as an order and returns the resolved
    /// submission state.
    #[instrument(skip(self))]
    pub async fn place_order(&self) -> Result<Submission, DealScreenError> {
        debug!("Sending place_order to screen actor");
        self.inner
            .submit(PlaceOrder)
            .await
            .map_err(<Self as ScreenHandle<DealStore>>::map_error)
    }

    /// Clears the resolved submission outcome from the view.
    #[instrument(skip(self))]
    pub async fn dismiss_order_status(&self) -> Result<DealSnapshot, DealScreenError> {
        self.apply(DealCommand::DismissOrderStatus).await
    }
}

#[async_trait]
impl ScreenHandle<DealStore> for DealClient {
    type Error = DealScreenError;

    fn inner(&self) -> &ScreenClient<DealStore> {
        &self.inner
    }

    fn map_error(e: FlowError) -> Self::Error {
        DealScreenError::ScreenCommunication(e.to_string())
    }
}
