//! Integration tests for the cart flow over the sample catalog.
//!
//! Exercises the same path the route handlers take: look a product up
//! in the catalog, mutate the cart store, and check the derived totals
//! and the persisted slot.

use std::path::PathBuf;

use elite_store_core::{CheckoutError, ProductId, price::format_usd};
use elite_store_storefront::catalog::{Catalog, sample_products};
use elite_store_storefront::engine::{self, FilterState, SortMode};
use elite_store_storefront::store::CartStore;
use elite_store_storefront::views::CartView;

fn temp_cart_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "elitestore-flow-{}-{name}.json",
        std::process::id()
    ))
}

fn catalog() -> Catalog {
    Catalog::new(sample_products())
}

#[test]
fn add_twice_then_checkout_reports_the_documented_totals() {
    let path = temp_cart_path("add-twice");
    let _ = std::fs::remove_file(&path);

    let catalog = catalog();
    let store = CartStore::open(&path);
    let headphones = catalog.get(&ProductId::new("1")).expect("sample id 1");

    store.add_item(headphones.clone());
    let cart = store.add_item(headphones.clone());

    assert_eq!(cart.len(), 1);
    assert_eq!(cart.totals().0, 2);
    assert_eq!(format_usd(cart.totals().1), "$598.00");

    let receipt = store.checkout().expect("non-empty checkout");
    assert_eq!(format_usd(receipt.total), "$598.00");
    assert!(store.snapshot().is_empty());

    // A second checkout fails without touching state.
    assert_eq!(store.checkout(), Err(CheckoutError::EmptyCart));

    let _ = std::fs::remove_file(&path);
}

#[test]
fn cart_survives_restart_with_identical_structure() {
    let path = temp_cart_path("restart");
    let _ = std::fs::remove_file(&path);

    let catalog = catalog();
    {
        let store = CartStore::open(&path);
        for id in ["1", "3", "1", "6"] {
            let product = catalog.get(&ProductId::new(id)).expect("sample product");
            store.add_item(product.clone());
        }
        store.set_quantity(&ProductId::new("6"), 5);
    }

    let restored = CartStore::open(&path).snapshot();
    assert_eq!(restored.len(), 3);
    assert_eq!(restored.item_count(), 2 + 1 + 5);

    // Insertion order is preserved across the restart.
    let ids: Vec<&str> = restored
        .lines()
        .iter()
        .map(|line| line.product.id.as_str())
        .collect();
    assert_eq!(ids, vec!["1", "3", "6"]);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn unknown_product_never_reaches_the_cart() {
    let path = temp_cart_path("unknown");
    let _ = std::fs::remove_file(&path);

    let catalog = catalog();
    assert!(catalog.get(&ProductId::new("999")).is_none());

    // The handler refuses before the store is touched; removing or
    // resizing an absent line is a no-op too.
    let store = CartStore::open(&path);
    store.remove_item(&ProductId::new("999"));
    store.set_quantity(&ProductId::new("999"), 4);
    assert!(store.snapshot().is_empty());

    let _ = std::fs::remove_file(&path);
}

#[test]
fn filtered_grid_and_cart_views_agree_with_state() {
    let path = temp_cart_path("views");
    let _ = std::fs::remove_file(&path);

    let catalog = catalog();
    let filter = FilterState::new(
        Some("electronics".to_string()),
        Some("watch".to_string()),
        Some(SortMode::PriceAscending),
    );
    let matches = engine::apply(catalog.products(), &filter);
    assert_eq!(matches.len(), 1);
    let watch = matches.first().copied().expect("one match");
    assert_eq!(watch.name, "Smart Fitness Watch");

    let store = CartStore::open(&path);
    store.add_item(watch.clone());
    store.add_item(watch.clone());
    store.add_item(watch.clone());

    let view = CartView::from(&store.snapshot());
    assert_eq!(view.item_count, 3);
    assert_eq!(view.subtotal, "$747.00");
    assert_eq!(view.items.first().map(|i| i.quantity), Some(3));

    let _ = std::fs::remove_file(&path);
}
