//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page
//! reloads. Every mutation persists the cart before responding and sets
//! an `HX-Trigger: cart-updated` header so dependent fragments (the
//! count badge) refresh themselves.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{AppendHeaders, Html, IntoResponse, Response},
};
use elite_store_core::{CheckoutError, ProductId, price::format_usd};
use serde::Deserialize;
use tracing::instrument;

use crate::filters;
use crate::state::AppState;
use crate::views::CartView;

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: String,
}

/// Update cart form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub product_id: String,
    pub quantity: u32,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub product_id: String,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
}

/// Cart items fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

/// Checkout result fragment: a notice above the refreshed cart items.
#[derive(Template, WebTemplate)]
#[template(path = "partials/checkout_result.html")]
pub struct CheckoutResultTemplate {
    pub cart: CartView,
    pub success: bool,
    pub message: String,
}

const CART_UPDATED: [(&str, &str); 1] = [("HX-Trigger", "cart-updated")];

/// Display the cart page.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> impl IntoResponse {
    CartShowTemplate {
        cart: CartView::from(&state.cart().snapshot()),
    }
}

/// Add an item to the cart (HTMX).
///
/// Looks the product up in the catalog; an unknown id gets a non-fatal
/// notice instead of a new line. Returns the refreshed count badge.
#[instrument(skip(state))]
pub async fn add(State(state): State<AppState>, Form(form): Form<AddToCartForm>) -> Response {
    let id = ProductId::from(form.product_id);
    let Some(product) = state.catalog().get(&id) else {
        tracing::warn!(%id, "Add to cart for unknown product");
        return (
            StatusCode::NOT_FOUND,
            Html("<div class=\"toast error\">Product not found</div>"),
        )
            .into_response();
    };

    let cart = state.cart().add_item(product.clone());
    (
        AppendHeaders(CART_UPDATED),
        CartCountTemplate {
            count: cart.item_count(),
        },
    )
        .into_response()
}

/// Set a line's quantity (HTMX). A quantity of 0 removes the line.
#[instrument(skip(state))]
pub async fn update(
    State(state): State<AppState>,
    Form(form): Form<UpdateCartForm>,
) -> impl IntoResponse {
    let id = ProductId::from(form.product_id);
    let cart = state.cart().set_quantity(&id, form.quantity);

    (
        AppendHeaders(CART_UPDATED),
        CartItemsTemplate {
            cart: CartView::from(&cart),
        },
    )
}

/// Remove a line from the cart (HTMX).
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Form(form): Form<RemoveFromCartForm>,
) -> impl IntoResponse {
    let id = ProductId::from(form.product_id);
    let cart = state.cart().remove_item(&id);

    (
        AppendHeaders(CART_UPDATED),
        CartItemsTemplate {
            cart: CartView::from(&cart),
        },
    )
}

/// Empty the cart (HTMX).
#[instrument(skip(state))]
pub async fn clear(State(state): State<AppState>) -> impl IntoResponse {
    let cart = state.cart().clear();

    (
        AppendHeaders(CART_UPDATED),
        CartItemsTemplate {
            cart: CartView::from(&cart),
        },
    )
}

/// Complete the simulated checkout (HTMX).
///
/// An empty cart yields a failure notice and no state change; otherwise
/// the cart empties and the notice reports the total. Both outcomes are
/// 200s: checkout failure is a notice, not an error.
#[instrument(skip(state))]
pub async fn checkout(State(state): State<AppState>) -> impl IntoResponse {
    let (success, message) = match state.cart().checkout() {
        Ok(receipt) => (
            true,
            format!("Checkout completed! Total: {}", format_usd(receipt.total)),
        ),
        Err(CheckoutError::EmptyCart) => (false, "Your cart is empty".to_string()),
    };

    (
        AppendHeaders(CART_UPDATED),
        CheckoutResultTemplate {
            cart: CartView::from(&state.cart().snapshot()),
            success,
            message,
        },
    )
}

/// Get the cart count badge (HTMX).
#[instrument(skip(state))]
pub async fn count(State(state): State<AppState>) -> impl IntoResponse {
    CartCountTemplate {
        count: state.cart().snapshot().item_count(),
    }
}
