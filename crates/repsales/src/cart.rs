//! # Shopping Cart
//!
//! In-memory cart state: the chosen quantity per product plus derived totals.
//!
//! The cart never fails: every out-of-range request is clamped or ignored,
//! so the quantity of each line always stays within `1..=stock_count` of its
//! product and there is at most one line per product id.

use crate::model::Product;

/// One chosen product in the cart.
///
/// Items are value snapshots: the owning [`Cart`] replaces the whole entry on
/// every quantity change instead of mutating it in place, so an item handed
/// out through [`Cart::items`] never changes behind the caller's back. The
/// unit price is captured when the product is first added and stays fixed
/// even if the catalog price changes later.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    product: Product,
    quantity: u32,
    unit_price: f64,
}

impl CartItem {
    fn new(product: Product) -> Self {
        let unit_price = product.price.unwrap_or(0.0);
        Self {
            product,
            quantity: 1,
            unit_price,
        }
    }

    fn with_quantity(&self, quantity: u32) -> Self {
        Self {
            quantity,
            ..self.clone()
        }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    /// Line total: quantity times the captured unit price.
    pub fn line_total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }

    /// Whether one more unit fits within the product's stock.
    pub fn can_increase(&self) -> bool {
        self.quantity < self.product.stock_count
    }

    /// Whether one unit can be removed without emptying the line.
    pub fn can_decrease(&self) -> bool {
        self.quantity > 1
    }
}

/// The cart: at most one [`CartItem`] per product id, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    fn position(&self, product_id: &str) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.product.product_id == product_id)
    }

    /// Adds one unit of a product.
    ///
    /// An existing line grows by one while stock allows; at the stock cap the
    /// call does nothing. A new line starts at quantity 1 with the current
    /// catalog price captured (0 when the price is not set). A product with
    /// no stock never enters the cart.
    pub fn add(&mut self, product: &Product) {
        match self.position(&product.product_id) {
            Some(idx) => {
                if self.items[idx].can_increase() {
                    self.items[idx] = self.items[idx].with_quantity(self.items[idx].quantity + 1);
                }
            }
            None => {
                if product.stock_count > 0 {
                    self.items.push(CartItem::new(product.clone()));
                }
            }
        }
    }

    /// Sets a line's quantity outright.
    ///
    /// Zero removes the line; anything above stock clamps to stock; an
    /// unknown product id does nothing.
    pub fn set_quantity(&mut self, product_id: &str, quantity: u32) {
        if quantity < 1 {
            self.remove(product_id);
            return;
        }
        if let Some(idx) = self.position(product_id) {
            let clamped = quantity.min(self.items[idx].product.stock_count);
            self.items[idx] = self.items[idx].with_quantity(clamped);
        }
    }

    /// Adds one unit to an existing line, capped at stock.
    pub fn increase(&mut self, product_id: &str) {
        if let Some(idx) = self.position(product_id) {
            if self.items[idx].can_increase() {
                self.items[idx] = self.items[idx].with_quantity(self.items[idx].quantity + 1);
            }
        }
    }

    /// Removes one unit from an existing line; dropping below one removes
    /// the line itself.
    pub fn decrease(&mut self, product_id: &str) {
        if let Some(idx) = self.position(product_id) {
            if self.items[idx].can_decrease() {
                self.items[idx] = self.items[idx].with_quantity(self.items[idx].quantity - 1);
            } else {
                self.items.remove(idx);
            }
        }
    }

    /// Removes a line entirely. Removing an absent line is not an error.
    pub fn remove(&mut self, product_id: &str) {
        self.items
            .retain(|item| item.product.product_id != product_id);
    }

    /// Empties the cart unconditionally.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct products.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Total quantity across all lines (distinct from the number of lines).
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Sum of all line totals.
    pub fn total(&self) -> f64 {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Quantity currently chosen for a product; zero when absent.
    pub fn quantity_of(&self, product_id: &str) -> u32 {
        self.position(product_id)
            .map(|idx| self.items[idx].quantity)
            .unwrap_or(0)
    }

    /// Whether a product has a line in the cart.
    pub fn contains(&self, product_id: &str) -> bool {
        self.position(product_id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, stock: u32, price: Option<f64>) -> Product {
        Product {
            name: format!("Product {id}"),
            stock_count: stock,
            price,
            price_wholesale: None,
            article: format!("A-{id}"),
            product_id: id.to_string(),
            category: "Instruments".to_string(),
        }
    }

    #[test]
    fn add_caps_at_stock_count() {
        let p = product("p1", 3, Some(100.0));
        let mut cart = Cart::default();

        for _ in 0..4 {
            cart.add(&p);
        }

        assert_eq!(cart.quantity_of("p1"), 3);
        assert_eq!(cart.unique_item_count(), 1);
    }

    #[test]
    fn add_without_price_captures_zero() {
        let p = product("p1", 5, None);
        let mut cart = Cart::default();

        cart.add(&p);

        assert_eq!(cart.items()[0].unit_price(), 0.0);
        assert_eq!(cart.total(), 0.0);
    }

    #[test]
    fn add_zero_stock_product_is_a_no_op() {
        let p = product("p1", 0, Some(10.0));
        let mut cart = Cart::default();

        cart.add(&p);

        assert!(cart.is_empty());
    }

    #[test]
    fn unit_price_is_captured_at_add_time() {
        let mut p = product("p1", 5, Some(100.0));
        let mut cart = Cart::default();
        cart.add(&p);

        // A later catalog price change does not touch the captured price
        p.price = Some(250.0);
        cart.add(&p);

        assert_eq!(cart.items()[0].unit_price(), 100.0);
        assert_eq!(cart.total(), 200.0);
    }

    #[test]
    fn set_quantity_zero_removes_the_line() {
        let p = product("p1", 3, Some(100.0));
        let mut cart = Cart::default();
        cart.add(&p);

        cart.set_quantity("p1", 0);

        assert!(!cart.contains("p1"));
        assert!(cart.is_empty());
    }

    #[test]
    fn set_quantity_clamps_to_stock() {
        let p = product("p1", 3, Some(100.0));
        let mut cart = Cart::default();
        cart.add(&p);

        cart.set_quantity("p1", 10);

        assert_eq!(cart.quantity_of("p1"), 3);
    }

    #[test]
    fn set_quantity_on_unknown_id_is_a_no_op() {
        let p = product("p1", 3, Some(100.0));
        let mut cart = Cart::default();
        cart.add(&p);

        cart.set_quantity("gone", 2);

        assert_eq!(cart.quantity_of("p1"), 1);
        assert_eq!(cart.unique_item_count(), 1);
    }

    #[test]
    fn decrease_below_one_removes_the_line() {
        let p = product("p1", 3, Some(100.0));
        let mut cart = Cart::default();
        cart.add(&p);
        cart.increase("p1");

        cart.decrease("p1");
        assert_eq!(cart.quantity_of("p1"), 1);

        cart.decrease("p1");
        assert!(!cart.contains("p1"));
    }

    #[test]
    fn remove_is_idempotent() {
        let p = product("p1", 3, Some(100.0));
        let mut cart = Cart::default();
        cart.add(&p);

        cart.remove("p1");
        cart.remove("p1");

        assert!(cart.is_empty());
    }

    #[test]
    fn totals_track_arbitrary_operation_sequences() {
        let a = product("a", 10, Some(24719.0));
        let b = product("b", 2, Some(16473.0));
        let mut cart = Cart::default();

        cart.add(&a);
        cart.add(&a);
        cart.add(&b);
        cart.set_quantity("a", 5);
        cart.increase("b");
        cart.increase("b"); // capped at stock 2
        cart.decrease("a");

        let expected: f64 = cart
            .items()
            .iter()
            .map(|item| f64::from(item.quantity()) * item.unit_price())
            .sum();
        assert_eq!(cart.total(), expected);
        assert_eq!(cart.item_count(), 6);
        assert_eq!(cart.unique_item_count(), 2);

        cart.clear();
        assert_eq!(cart.total(), 0.0);
        assert_eq!(cart.item_count(), 0);
    }
}
