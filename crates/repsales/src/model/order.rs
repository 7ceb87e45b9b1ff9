//! Order payloads and the create-order exchange.

use crate::cart::Cart;
use serde::{Deserialize, Serialize};

/// A submission-time snapshot of the cart.
///
/// Built once when the user checks out and never modified afterwards; it
/// exists only for the duration of the submission attempt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    #[serde(rename = "Клиент", skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,

    #[serde(rename = "Комментарий", skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    #[serde(rename = "Товары")]
    pub products: Vec<OrderProduct>,
}

impl Order {
    /// Derives the order entries 1:1 from the current cart.
    pub fn from_cart(cart: &Cart, client_id: Option<String>, comment: &str) -> Self {
        let products = cart
            .items()
            .iter()
            .map(|item| OrderProduct {
                product_id: item.product().product_id.clone(),
                quantity: item.quantity(),
                price: item.unit_price(),
                total: item.line_total(),
            })
            .collect();
        Self {
            client_id,
            comment: Some(comment.to_string()),
            products,
        }
    }
}

/// One order line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderProduct {
    #[serde(rename = "Товар")]
    pub product_id: String,

    #[serde(rename = "Количество")]
    pub quantity: u32,

    #[serde(rename = "Цена")]
    pub price: f64,

    #[serde(rename = "Сумма")]
    pub total: f64,
}

/// Backend reply to a create-order request.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateOrderResponse {
    pub success: bool,

    #[serde(rename = "id", default)]
    pub order_id: Option<String>,

    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub error: Option<String>,
}
