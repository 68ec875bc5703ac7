//! Stateless view projections for templates.
//!
//! Everything here is a pure function from domain state to display
//! data: products and the cart become plain structs of pre-formatted
//! strings, which keeps the templates free of logic and makes the
//! rendering rules (stars, currency, conditional badge/discount)
//! testable without a server.

use elite_store_core::{Cart, CartLine, Product, price::format_usd};

/// Star rating markup: `floor(rating)` full stars, one half-star
/// indicator iff the rating is non-integral, remainder empty. Always 5
/// glyphs total.
#[must_use]
pub fn stars_markup(rating: f64) -> String {
    let rating = rating.clamp(0.0, 5.0);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let full = rating.floor() as usize;
    let half = usize::from(rating.fract() != 0.0);
    let empty = 5usize.saturating_sub(full + half);

    let mut markup = String::new();
    for _ in 0..full {
        markup.push_str("<span class=\"star\">\u{2605}</span>");
    }
    for _ in 0..half {
        markup.push_str("<span class=\"star star-half\">\u{2606}</span>");
    }
    for _ in 0..empty {
        markup.push_str("<span class=\"star star-empty\">\u{2605}</span>");
    }
    markup
}

/// Product display data for grid cards.
#[derive(Clone)]
pub struct ProductCardView {
    pub id: String,
    pub name: String,
    pub category: String,
    pub image: String,
    pub stars: String,
    pub reviews: u32,
    pub price: String,
    pub original_price: Option<String>,
    pub badge: Option<String>,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            category: product.category.clone(),
            image: product.image.clone(),
            stars: stars_markup(product.rating),
            reviews: product.reviews,
            price: format_usd(product.price),
            original_price: product.original_price.map(format_usd),
            badge: product.badge.clone(),
        }
    }
}

/// Product display data for the detail fragment (modal body).
#[derive(Clone)]
pub struct ProductDetailView {
    pub id: String,
    pub name: String,
    pub image: String,
    pub stars: String,
    pub reviews: u32,
    pub price: String,
    pub original_price: Option<String>,
    pub description: String,
    pub features: Vec<String>,
    pub in_stock: bool,
}

impl From<&Product> for ProductDetailView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            image: product.image.clone(),
            stars: stars_markup(product.rating),
            reviews: product.reviews,
            price: format_usd(product.price),
            original_price: product.original_price.map(format_usd),
            description: product.description.clone(),
            features: product.features.clone(),
            in_stock: product.in_stock,
        }
    }
}

/// Cart line display data for templates.
#[derive(Clone)]
pub struct CartLineView {
    pub id: String,
    pub name: String,
    pub image: String,
    pub price: String,
    pub line_total: String,
    pub quantity: u32,
}

impl From<&CartLine> for CartLineView {
    fn from(line: &CartLine) -> Self {
        Self {
            id: line.product.id.to_string(),
            name: line.product.name.clone(),
            image: line.product.image.clone(),
            price: format_usd(line.product.price),
            line_total: format_usd(line.line_total()),
            quantity: line.quantity,
        }
    }
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartLineView>,
    pub subtotal: String,
    pub item_count: u32,
}

impl CartView {
    /// Create an empty cart view.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            subtotal: "$0.00".to_string(),
            item_count: 0,
        }
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.lines().iter().map(CartLineView::from).collect(),
            subtotal: format_usd(cart.subtotal()),
            item_count: cart.item_count(),
        }
    }
}
