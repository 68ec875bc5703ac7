//! EliteStore Core - Shared domain types.
//!
//! This crate provides the domain model shared by all EliteStore
//! components:
//! - `storefront` - Server-rendered storefront binary
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! HTTP clients, no templates. The cart state machine lives here so its
//! invariants can be tested without standing up a server.
//!
//! # Modules
//!
//! - [`types`] - Products, the cart, prices, IDs, and email validation

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
