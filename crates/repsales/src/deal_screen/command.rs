//! Synchronous mutations for the deal workspace.

use crate::view::products::CategoryFilter;

/// Mutations the deal screen accepts; each one triggers a view recomputation.
///
/// Cart commands address products by id. An id that no longer resolves
/// against the loaded catalog (stale after a reload) makes the command a
/// silent no-op rather than an error.
#[derive(Debug, Clone)]
pub enum DealCommand {
    // Catalog criteria
    SetQuery(String),
    SetCategory(Option<CategoryFilter>),
    ClearFilters,

    // Cart
    AddToCart { product_id: String },
    RemoveFromCart { product_id: String },
    SetQuantity { product_id: String, quantity: u32 },
    IncreaseQuantity { product_id: String },
    DecreaseQuantity { product_id: String },
    ClearCart,

    // Checkout form
    SetComment(String),
    SetClient(Option<String>),
    /// Clears the resolved submission outcome from the view.
    DismissOrderStatus,
}

/// Request to place the current cart as an order.
///
/// Carries no data of its own: the order payload is assembled from the
/// screen's current cart, comment, and client id at submit time.
#[derive(Debug, Clone, Copy)]
pub struct PlaceOrder;
