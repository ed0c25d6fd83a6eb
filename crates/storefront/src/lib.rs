//! TechStore Storefront library.
//!
//! This crate provides the storefront engines as a library, allowing them
//! to be tested and embedded behind any rendering layer.
//!
//! # Components
//!
//! - [`cart`] - The persistent cart store and its mutation operations
//! - [`catalog`] - Catalog filtering, sorting, and pagination
//! - [`checkout`] - Field validation, order totals, and the payment flow
//! - [`storage`] - The key-value persistence collaborator
//! - [`state`] - The per-session composition root

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod state;
pub mod storage;

pub use cart::{CartError, CartLine, CartStore};
pub use catalog::{Catalog, CatalogQuery, PriceBand, QueryResult, SortKey};
pub use checkout::{CheckoutError, CheckoutFlow, OrderConfirmation, Totals};
pub use config::StoreConfig;
pub use error::StoreError;
pub use state::StorefrontSession;
pub use storage::{MemoryStorage, Storage};
