//! Cart store: the owned cart plus its durable slot.
//!
//! The store wraps the [`Cart`] state machine behind one mutex and
//! serializes the full cart to a single JSON file immediately after
//! every mutation. The in-memory cart is the source of truth between
//! operations; the file exists only so the cart survives a restart.
//!
//! Read failures (absent or corrupted file) restore an empty cart and
//! surface no error. Write failures are logged and never fatal.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use elite_store_core::{Cart, CheckoutError, CheckoutReceipt, Product, ProductId};
use tracing::{debug, warn};

/// Owner of the authoritative cart, shared across handlers.
pub struct CartStore {
    path: PathBuf,
    cart: Mutex<Cart>,
}

impl CartStore {
    /// Open the store, restoring the cart from `path` if possible.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let cart = restore(&path);
        Self {
            path,
            cart: Mutex::new(cart),
        }
    }

    /// A clone of the current cart.
    #[must_use]
    pub fn snapshot(&self) -> Cart {
        self.lock().clone()
    }

    /// Add one unit of `product`, persist, and return the new cart.
    pub fn add_item(&self, product: Product) -> Cart {
        self.mutate(|cart| cart.add_item(product))
    }

    /// Remove the line for `id`, persist, and return the new cart.
    pub fn remove_item(&self, id: &ProductId) -> Cart {
        self.mutate(|cart| {
            cart.remove_item(id);
        })
    }

    /// Set the quantity for `id` (0 removes), persist, and return the
    /// new cart.
    pub fn set_quantity(&self, id: &ProductId, quantity: u32) -> Cart {
        self.mutate(|cart| cart.set_quantity(id, quantity))
    }

    /// Empty the cart, persist, and return the new cart.
    pub fn clear(&self) -> Cart {
        self.mutate(Cart::clear)
    }

    /// Complete the simulated checkout.
    ///
    /// On success the emptied cart is persisted. On failure (empty
    /// cart) nothing changes and nothing is written.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] if the cart is empty.
    pub fn checkout(&self) -> Result<CheckoutReceipt, CheckoutError> {
        let mut cart = self.lock();
        let receipt = cart.checkout()?;
        persist(&self.path, &cart);
        Ok(receipt)
    }

    fn mutate(&self, apply: impl FnOnce(&mut Cart)) -> Cart {
        let mut cart = self.lock();
        apply(&mut cart);
        persist(&self.path, &cart);
        cart.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Cart> {
        self.cart.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Read the cart back from its slot; any failure means an empty cart.
fn restore(path: &Path) -> Cart {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(error) => {
            debug!(path = %path.display(), %error, "No stored cart, starting empty");
            return Cart::new();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(cart) => cart,
        Err(error) => {
            warn!(path = %path.display(), %error, "Stored cart is corrupted, starting empty");
            Cart::new()
        }
    }
}

/// Write the full cart to its slot. Failures are logged, not surfaced.
fn persist(path: &Path, cart: &Cart) {
    let json = match serde_json::to_string(cart) {
        Ok(json) => json,
        Err(error) => {
            warn!(%error, "Failed to serialize cart");
            return;
        }
    };

    if let Err(error) = std::fs::write(path, json) {
        warn!(path = %path.display(), %error, "Failed to persist cart");
    }
}
