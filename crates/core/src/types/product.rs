//! Catalog product record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::id::ProductId;

/// A purchasable product as loaded from the catalog endpoint.
///
/// Field names follow the wire schema (`originalPrice`, `inStock`).
/// Products are immutable once the catalog is loaded; the cart embeds a
/// copy of the product it was added from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier within the catalog.
    pub id: ProductId,
    pub name: String,
    /// Unit price in dollars. Non-negative.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Pre-discount price, shown struck through when present.
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub original_price: Option<Decimal>,
    pub image: String,
    /// Enum-like category string, e.g. `electronics` or `fashion`.
    pub category: String,
    /// Average review rating on a 0-5 scale.
    #[serde(default)]
    pub rating: f64,
    /// Number of reviews behind the rating.
    #[serde(default)]
    pub reviews: u32,
    pub description: String,
    /// Ordered feature bullet points.
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    /// Optional merchandising label, e.g. `Best Seller`.
    #[serde(default)]
    pub badge: Option<String>,
}

const fn default_in_stock() -> bool {
    true
}

impl Product {
    /// Whether the product name or description contains `needle`,
    /// case-insensitively. An empty needle matches everything.
    #[must_use]
    pub fn matches_search(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        let needle = needle.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
    }

    /// Whether a pre-discount price is present.
    #[must_use]
    pub const fn has_discount(&self) -> bool {
        self.original_price.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> serde_json::Value {
        serde_json::json!({
            "id": "1",
            "name": "Premium Wireless Headphones",
            "price": 299,
            "originalPrice": 399,
            "image": "https://example.com/headphones.jpg",
            "category": "electronics",
            "rating": 4.8,
            "reviews": 247,
            "description": "Crystal-clear audio with active noise cancellation.",
            "features": ["Active Noise Cancellation", "30-hour Battery"],
            "inStock": true,
            "badge": "Best Seller"
        })
    }

    #[test]
    fn test_deserialize_wire_schema() {
        let product: Product = serde_json::from_value(sample_json()).expect("deserialize");
        assert_eq!(product.id, ProductId::new("1"));
        assert_eq!(product.price, Decimal::from(299));
        assert_eq!(product.original_price, Some(Decimal::from(399)));
        assert!(product.in_stock);
        assert_eq!(product.badge.as_deref(), Some("Best Seller"));
        assert_eq!(product.features.len(), 2);
    }

    #[test]
    fn test_optional_fields_default() {
        let json = serde_json::json!({
            "id": "2",
            "name": "Smart Fitness Watch",
            "price": 249,
            "image": "https://example.com/watch.jpg",
            "category": "electronics",
            "description": "Track your fitness goals."
        });
        let product: Product = serde_json::from_value(json).expect("deserialize");
        assert_eq!(product.original_price, None);
        assert_eq!(product.badge, None);
        assert!(product.features.is_empty());
        assert!(product.in_stock);
        assert_eq!(product.reviews, 0);
    }

    #[test]
    fn test_serialize_uses_camel_case() {
        let product: Product = serde_json::from_value(sample_json()).expect("deserialize");
        let value = serde_json::to_value(&product).expect("serialize");
        assert!(value.get("originalPrice").is_some());
        assert!(value.get("inStock").is_some());
        assert!(value.get("original_price").is_none());
    }

    #[test]
    fn test_matches_search_case_insensitive() {
        let product: Product = serde_json::from_value(sample_json()).expect("deserialize");
        assert!(product.matches_search("HEADPHONES"));
        assert!(product.matches_search("noise cancellation"));
        assert!(product.matches_search(""));
        assert!(!product.matches_search("watch"));
    }
}
