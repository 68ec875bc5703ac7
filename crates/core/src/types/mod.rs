//! Core types for EliteStore.
//!
//! This module provides the domain model: products as loaded from the
//! catalog endpoint, the cart state machine, and supporting value types.

pub mod cart;
pub mod email;
pub mod id;
pub mod price;
pub mod product;

pub use cart::{Cart, CartLine, CheckoutError, CheckoutReceipt};
pub use email::{Email, EmailError};
pub use id::*;
pub use product::Product;
