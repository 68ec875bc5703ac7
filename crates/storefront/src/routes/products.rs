//! Product route handlers.
//!
//! The listing page re-renders fully on navigation; the grid fragment
//! serves HTMX re-filtering as the user types or changes a dropdown.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
};
use elite_store_core::ProductId;
use serde::Deserialize;
use tracing::instrument;

use crate::engine::{self, FilterState, SortMode};
use crate::error::AppError;
use crate::filters;
use crate::state::AppState;
use crate::views::{ProductCardView, ProductDetailView};

/// Listing query parameters, all optional.
#[derive(Debug, Deserialize)]
pub struct ProductListQuery {
    pub category: Option<String>,
    pub q: Option<String>,
    pub sort: Option<SortMode>,
}

impl ProductListQuery {
    fn into_filter(self) -> FilterState {
        FilterState::new(self.category, self.q, self.sort)
    }
}

/// Product listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub products: Vec<ProductCardView>,
    pub categories: Vec<String>,
    pub category: String,
    pub q: String,
    pub sort: &'static str,
}

/// Product grid fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/product_grid.html")]
pub struct ProductGridTemplate {
    pub products: Vec<ProductCardView>,
}

/// Product detail fragment template (modal body).
#[derive(Template, WebTemplate)]
#[template(path = "partials/product_detail.html")]
pub struct ProductDetailTemplate {
    pub product: ProductDetailView,
}

fn filtered_cards(state: &AppState, filter: &FilterState) -> Vec<ProductCardView> {
    engine::apply(state.catalog().products(), filter)
        .into_iter()
        .map(ProductCardView::from)
        .collect()
}

/// Display the product listing page.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ProductListQuery>,
) -> impl IntoResponse {
    let filter = query.into_filter();
    let products = filtered_cards(&state, &filter);

    ProductsIndexTemplate {
        products,
        categories: state.catalog().categories(),
        category: filter.category.unwrap_or_else(|| "all".to_string()),
        q: filter.search,
        sort: filter.sort.as_str(),
    }
}

/// Display the product grid fragment (HTMX re-filter).
#[instrument(skip(state))]
pub async fn grid(
    State(state): State<AppState>,
    Query(query): Query<ProductListQuery>,
) -> impl IntoResponse {
    let filter = query.into_filter();
    ProductGridTemplate {
        products: filtered_cards(&state, &filter),
    }
}

/// Display the product detail fragment.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ProductDetailTemplate, AppError> {
    let id = ProductId::from(id);
    let product = state
        .catalog()
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    Ok(ProductDetailTemplate {
        product: ProductDetailView::from(product),
    })
}
