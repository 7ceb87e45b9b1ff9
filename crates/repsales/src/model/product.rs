//! Product catalog records.

use serde::{Deserialize, Serialize};

/// A catalog product.
///
/// Read-only; `product_id` is the stable key. The stock count caps how many
/// units a cart may hold, and a missing price means "price not set" rather
/// than zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "product")]
    pub name: String,

    #[serde(rename = "count")]
    pub stock_count: u32,

    #[serde(rename = "price")]
    pub price: Option<f64>,

    #[serde(rename = "priceWholesale")]
    pub price_wholesale: Option<f64>,

    /// Article/SKU string.
    #[serde(rename = "article")]
    pub article: String,

    #[serde(rename = "productID")]
    pub product_id: String,

    /// May be blank, which the catalog treats as "uncategorized".
    #[serde(rename = "category", default)]
    pub category: String,
}

impl Product {
    /// Whether the product has no category assigned.
    pub fn is_uncategorized(&self) -> bool {
        self.category.trim().is_empty()
    }
}
