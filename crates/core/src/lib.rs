//! TechStore Core - Shared types library.
//!
//! This crate provides common types used across all TechStore components:
//! - `storefront` - Cart, catalog-query, and checkout engines
//!
//! # Architecture
//!
//! The core crate contains only types and helpers - no I/O, no storage
//! access. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, the product model, and money display helpers

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
