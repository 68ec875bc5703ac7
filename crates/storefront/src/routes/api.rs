//! JSON API route handlers.

use axum::{Json, extract::State, response::IntoResponse};
use elite_store_core::Product;
use tracing::instrument;

use crate::state::AppState;

/// The loaded catalog as JSON, the same schema the catalog endpoint
/// serves.
///
/// GET /api/products
#[instrument(skip(state))]
pub async fn products(State(state): State<AppState>) -> impl IntoResponse {
    let products: Vec<Product> = state.catalog().products().to_vec();
    Json(products)
}
