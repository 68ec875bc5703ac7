//! Filter and sort engine for the product listing.
//!
//! A pure function of `(catalog, filter state)`: filter by category and
//! search term, then stable-sort per the selected mode. Re-run on every
//! listing request; no hidden state.

use elite_store_core::Product;
use serde::Deserialize;

/// Sort modes offered by the listing. Wire names match the sort
/// dropdown values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum SortMode {
    /// Catalog order restricted to the current filter.
    #[default]
    #[serde(rename = "default")]
    Default,
    #[serde(rename = "price-low")]
    PriceAscending,
    #[serde(rename = "price-high")]
    PriceDescending,
    /// Highest rating first, ties broken by catalog order.
    #[serde(rename = "rating")]
    RatingDescending,
}

impl SortMode {
    /// The wire name, for re-rendering the sort dropdown.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::PriceAscending => "price-low",
            Self::PriceDescending => "price-high",
            Self::RatingDescending => "rating",
        }
    }
}

/// The user's current category/search/sort selection. Not persisted;
/// derived from request query parameters on every listing request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Selected category; `None` means all categories.
    pub category: Option<String>,
    /// Free-text search over name and description.
    pub search: String,
    pub sort: SortMode,
}

impl FilterState {
    /// Build a filter state from raw query parameters.
    ///
    /// An absent, empty, or literal `all` category means no category
    /// restriction; the search term is trimmed.
    #[must_use]
    pub fn new(category: Option<String>, search: Option<String>, sort: Option<SortMode>) -> Self {
        let category = category.filter(|c| !c.is_empty() && c != "all");
        let search = search.map(|s| s.trim().to_owned()).unwrap_or_default();
        Self {
            category,
            search,
            sort: sort.unwrap_or_default(),
        }
    }

    fn matches(&self, product: &Product) -> bool {
        let category_ok = self
            .category
            .as_deref()
            .is_none_or(|category| product.category == category);
        category_ok && product.matches_search(&self.search)
    }
}

/// Apply `filter` to `catalog`, returning the filtered, sorted view.
///
/// All sorts are stable, so products that compare equal keep their
/// catalog order.
#[must_use]
pub fn apply<'a>(catalog: &'a [Product], filter: &FilterState) -> Vec<&'a Product> {
    let mut products: Vec<&Product> = catalog
        .iter()
        .filter(|product| filter.matches(product))
        .collect();

    match filter.sort {
        SortMode::Default => {}
        SortMode::PriceAscending => products.sort_by(|a, b| a.price.cmp(&b.price)),
        SortMode::PriceDescending => products.sort_by(|a, b| b.price.cmp(&a.price)),
        SortMode::RatingDescending => products.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
    }

    products
}
