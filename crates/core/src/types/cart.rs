//! The cart state machine.
//!
//! A [`Cart`] is an insertion-ordered list of lines, at most one per
//! product id, every line with quantity >= 1. All mutation goes through
//! the methods here so those invariants cannot be violated from outside.
//! Persistence and rendering live elsewhere; this module is pure state.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::id::ProductId;
use crate::types::product::Product;

/// One product/quantity pairing in the cart.
///
/// The product is embedded flattened, matching the stored wire format
/// (product fields plus `quantity` in one object).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(flatten)]
    pub product: Product,
    /// Always >= 1; a line that would reach 0 is removed instead.
    pub quantity: u32,
}

impl CartLine {
    /// Price x quantity for this line.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

/// Error returned by [`Cart::checkout`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// Checkout on an empty cart changes nothing.
    #[error("your cart is empty")]
    EmptyCart,
}

/// Outcome of a successful (simulated) checkout.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutReceipt {
    /// Cart total at checkout time, rounded to 2 decimal places.
    pub total: Decimal,
    /// Number of items (sum of quantities) that were checked out.
    pub item_count: u32,
}

/// The active shopping cart: an insertion-ordered sequence of lines.
///
/// Serializes as a bare JSON array, which is also the durable storage
/// format (a single serialized list, restored wholesale at startup).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// The cart lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines (not the item count).
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    fn find_mut(&mut self, id: &ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| &line.product.id == id)
    }

    /// Add one unit of `product`.
    ///
    /// Increments the existing line's quantity if the product is already
    /// in the cart, otherwise appends a new line with quantity 1.
    pub fn add_item(&mut self, product: Product) {
        if let Some(line) = self.find_mut(&product.id) {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine {
                product,
                quantity: 1,
            });
        }
    }

    /// Remove the line matching `id`. Returns whether a line was removed.
    pub fn remove_item(&mut self, id: &ProductId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| &line.product.id != id);
        self.lines.len() != before
    }

    /// Set the quantity of the line matching `id`.
    ///
    /// A quantity of 0 removes the line, exactly like [`Self::remove_item`].
    /// No-op if the product is not in the cart. No upper bound is
    /// enforced and stock is not checked.
    pub fn set_quantity(&mut self, id: &ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove_item(id);
        } else if let Some(line) = self.find_mut(id) {
            line.quantity = quantity;
        }
    }

    /// Empty the cart unconditionally.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of quantities across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Sum of price x quantity across all lines, rounded to 2 decimal
    /// places for display.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.lines
            .iter()
            .map(CartLine::line_total)
            .sum::<Decimal>()
            .round_dp(2)
    }

    /// Derived `(item_count, subtotal)` pair.
    #[must_use]
    pub fn totals(&self) -> (u32, Decimal) {
        (self.item_count(), self.subtotal())
    }

    /// Complete the simulated checkout: report the total, then clear.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] without changing state if
    /// the cart is empty.
    pub fn checkout(&mut self) -> Result<CheckoutReceipt, CheckoutError> {
        if self.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        let receipt = CheckoutReceipt {
            total: self.subtotal(),
            item_count: self.item_count(),
        };
        self.clear();
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price: i64) -> Product {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "name": format!("Product {id}"),
            "price": price,
            "image": "https://example.com/p.jpg",
            "category": "electronics",
            "rating": 4.5,
            "reviews": 10,
            "description": "A test product."
        }))
        .expect("valid product json")
    }

    #[test]
    fn test_add_same_product_twice_merges_lines() {
        let mut cart = Cart::new();
        cart.add_item(product("1", 299));
        cart.add_item(product("1", 299));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.totals(), (2, Decimal::from(598)));
    }

    #[test]
    fn test_set_quantity_zero_equals_remove() {
        let mut by_zero = Cart::new();
        by_zero.add_item(product("1", 100));
        by_zero.add_item(product("2", 50));
        by_zero.set_quantity(&ProductId::new("1"), 0);

        let mut by_remove = Cart::new();
        by_remove.add_item(product("1", 100));
        by_remove.add_item(product("2", 50));
        by_remove.remove_item(&ProductId::new("1"));

        assert_eq!(by_zero, by_remove);
        assert_eq!(by_zero.len(), 1);
    }

    #[test]
    fn test_set_quantity_absent_id_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(product("1", 100));
        let before = cart.clone();
        cart.set_quantity(&ProductId::new("missing"), 5);
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(product("1", 100));
        assert!(!cart.remove_item(&ProductId::new("missing")));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_invariants_hold_over_mixed_sequence() {
        let mut cart = Cart::new();
        cart.add_item(product("1", 299));
        cart.add_item(product("2", 249));
        cart.add_item(product("1", 299));
        cart.set_quantity(&ProductId::new("2"), 7);
        cart.add_item(product("3", 79));
        cart.set_quantity(&ProductId::new("3"), 0);
        cart.remove_item(&ProductId::new("missing"));
        cart.add_item(product("2", 249));

        let mut seen = std::collections::HashSet::new();
        for line in cart.lines() {
            assert!(line.quantity >= 1);
            assert!(seen.insert(line.product.id.clone()), "duplicate line");
        }
        assert_eq!(cart.item_count(), 2 + 8);
    }

    #[test]
    fn test_totals_match_derived_sums() {
        let mut cart = Cart::new();
        cart.add_item(product("1", 299));
        cart.add_item(product("2", 249));
        cart.set_quantity(&ProductId::new("2"), 3);

        let expected_total: Decimal = cart.lines().iter().map(CartLine::line_total).sum();
        let expected_count: u32 = cart.lines().iter().map(|l| l.quantity).sum();
        assert_eq!(cart.totals(), (expected_count, expected_total.round_dp(2)));
    }

    #[test]
    fn test_totals_scenario_from_catalog_price_299() {
        let mut cart = Cart::new();
        cart.add_item(product("1", 299));
        cart.add_item(product("1", 299));

        let (count, total) = cart.totals();
        assert_eq!(count, 2);
        assert_eq!(crate::types::price::format_usd(total), "$598.00");
    }

    #[test]
    fn test_serde_round_trip_preserves_structure() {
        let mut cart = Cart::new();
        cart.add_item(product("1", 299));
        cart.add_item(product("2", 249));
        cart.set_quantity(&ProductId::new("1"), 4);

        let json = serde_json::to_string(&cart).expect("serialize");
        let restored: Cart = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(restored, cart);
    }

    #[test]
    fn test_cart_serializes_as_array() {
        let mut cart = Cart::new();
        cart.add_item(product("1", 10));
        let value = serde_json::to_value(&cart).expect("serialize");
        assert!(value.is_array());
        assert_eq!(value.as_array().map(Vec::len), Some(1));
        let first = &value.as_array().expect("array")[0];
        assert_eq!(first.get("quantity"), Some(&serde_json::json!(1)));
        assert!(first.get("name").is_some(), "product fields are flattened");
    }

    #[test]
    fn test_checkout_empty_cart_is_error_and_noop() {
        let mut cart = Cart::new();
        assert_eq!(cart.checkout(), Err(CheckoutError::EmptyCart));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_checkout_reports_total_then_clears() {
        let mut cart = Cart::new();
        cart.add_item(product("1", 299));
        cart.add_item(product("1", 299));

        let receipt = cart.checkout().expect("non-empty checkout succeeds");
        assert_eq!(receipt.total, Decimal::from(598));
        assert_eq!(receipt.item_count, 2);
        assert!(cart.is_empty());
    }
}
