//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /health                 - Health check
//!
//! # Products
//! GET  /products               - Product listing (category/q/sort params)
//! GET  /products/grid          - Product grid fragment (HTMX)
//! GET  /products/{id}          - Product detail fragment (modal body)
//!
//! # Cart (HTMX fragments)
//! GET  /cart                   - Cart page
//! POST /cart/add               - Add item (returns count badge, triggers cart-updated)
//! POST /cart/update            - Set quantity (returns cart_items fragment)
//! POST /cart/remove            - Remove line (returns cart_items fragment)
//! POST /cart/clear             - Clear cart (returns cart_items fragment)
//! POST /cart/checkout          - Simulated checkout (returns items + notice)
//! GET  /cart/count             - Cart count badge (fragment)
//!
//! # Pages
//! GET  /about                  - About page with stat counters
//! GET  /contact                - Contact page
//!
//! # JSON API
//! GET  /api/products           - The loaded catalog as JSON
//! POST /api/contact            - Contact form submission
//! ```

pub mod about;
pub mod api;
pub mod cart;
pub mod contact;
pub mod home;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/grid", get(products::grid))
        .route("/{id}", get(products::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
        .route("/checkout", post(cart::checkout))
        .route("/count", get(cart::count))
}

/// Create the JSON API routes router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(api::products))
        .route("/contact", post(contact::submit))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Product routes
        .nest("/products", product_routes())
        // Cart routes
        .nest("/cart", cart_routes())
        // Static pages
        .route("/about", get(about::show))
        .route("/contact", get(contact::show))
        // JSON API
        .nest("/api", api_routes())
}
