//! Product catalog: remote fetch, boundary validation, and fallback.
//!
//! The catalog is loaded once at startup from a remote endpoint that
//! returns a JSON array of product records. Entries are validated
//! individually at the boundary; malformed records are dropped with a
//! warning instead of propagating undefined fields into rendering. Any
//! fetch failure substitutes the built-in sample catalog, so the user
//! never sees a catalog error.

mod samples;

use std::collections::HashMap;

use elite_store_core::{Product, ProductId};
use thiserror::Error;
use tracing::{debug, instrument, warn};

pub use samples::sample_products;

/// Errors that can occur when fetching the remote catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed or returned a non-success status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not a JSON array.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Every fetched entry was rejected by validation.
    #[error("catalog contained no valid products")]
    Empty,
}

/// Client for the remote catalog endpoint.
#[derive(Clone)]
pub struct CatalogClient {
    client: reqwest::Client,
    endpoint: String,
}

impl CatalogClient {
    /// Create a new catalog client for `endpoint`.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Fetch and validate the product list.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the request fails, the body is not
    /// a JSON array, or no entry survives validation.
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    pub async fn fetch(&self) -> Result<Vec<Product>, CatalogError> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await?
            .error_for_status()?;

        let entries: Vec<serde_json::Value> = response.json().await?;
        debug!(count = entries.len(), "Fetched catalog entries");

        let products = validate_entries(entries);
        if products.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(products)
    }
}

/// Validate raw catalog entries, dropping the malformed ones.
///
/// An entry is rejected if it fails to deserialize, has an empty id or
/// name, a negative price, or repeats an id seen earlier in the list.
/// Out-of-range ratings are clamped into 0-5 rather than rejected.
#[must_use]
pub fn validate_entries(entries: Vec<serde_json::Value>) -> Vec<Product> {
    let mut products: Vec<Product> = Vec::with_capacity(entries.len());

    for (index, entry) in entries.into_iter().enumerate() {
        let mut product: Product = match serde_json::from_value(entry) {
            Ok(product) => product,
            Err(error) => {
                warn!(index, %error, "Dropping malformed catalog entry");
                continue;
            }
        };

        if product.id.as_str().is_empty() || product.name.trim().is_empty() {
            warn!(index, "Dropping catalog entry with empty id or name");
            continue;
        }

        if product.price.is_sign_negative() {
            warn!(index, id = %product.id, "Dropping catalog entry with negative price");
            continue;
        }

        if products.iter().any(|existing| existing.id == product.id) {
            warn!(index, id = %product.id, "Dropping catalog entry with duplicate id");
            continue;
        }

        if !(0.0..=5.0).contains(&product.rating) {
            warn!(index, id = %product.id, rating = product.rating, "Clamping out-of-range rating");
            product.rating = product.rating.clamp(0.0, 5.0);
        }

        products.push(product);
    }

    products
}

/// The full set of purchasable products, immutable after startup.
#[derive(Clone)]
pub struct Catalog {
    products: Vec<Product>,
    by_id: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Build a catalog from an already-validated product list.
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        let by_id = products
            .iter()
            .enumerate()
            .map(|(index, product)| (product.id.clone(), index))
            .collect();
        Self { products, by_id }
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.by_id.get(id).and_then(|&index| self.products.get(index))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Distinct categories in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for product in &self.products {
            if !categories.contains(&product.category) {
                categories.push(product.category.clone());
            }
        }
        categories
    }
}

/// Load the catalog from `catalog_url`, falling back to the sample
/// products on any failure or when no URL is configured.
pub async fn load(catalog_url: Option<&str>) -> Catalog {
    let products = match catalog_url {
        Some(url) => match CatalogClient::new(url).fetch().await {
            Ok(products) => {
                tracing::info!(count = products.len(), "Loaded remote catalog");
                products
            }
            Err(error) => {
                warn!(%error, "Catalog fetch failed, using sample catalog");
                sample_products()
            }
        },
        None => {
            tracing::info!("No catalog URL configured, using sample catalog");
            sample_products()
        }
    };

    Catalog::new(products)
}
