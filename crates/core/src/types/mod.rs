//! Core types for TechStore.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod money;
pub mod product;

pub use id::*;
pub use money::{display_usd, round_to_cents};
pub use product::{Category, CategoryError, Product};
