//! The product model and its category enumeration.

use core::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// A purchasable product supplied by the catalog at startup.
///
/// Products are immutable for the duration of a session. The cart snapshots
/// the name/price/image at add-time rather than referencing these fields
/// live, so a catalog reload never rewrites an existing cart line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique positive identifier. Higher ids are newer products.
    pub id: ProductId,
    pub name: String,
    /// Unit price in USD. Never negative.
    pub price: Decimal,
    pub category: Category,
    /// Average review rating, 0.0 to 5.0.
    pub rating: f32,
    /// Number of reviews behind the rating.
    pub reviews: u32,
    pub description: String,
    /// Image URL for display.
    pub image: String,
}

/// Product categories available in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Electronics,
    Accessories,
    Gaming,
}

impl Category {
    /// Returns the lowercase code used in serialized queries and URLs.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Electronics => "electronics",
            Self::Accessories => "accessories",
            Self::Gaming => "gaming",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a [`Category`] from a string.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct CategoryError(pub String);

impl FromStr for Category {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "electronics" => Ok(Self::Electronics),
            "accessories" => Ok(Self::Accessories),
            "gaming" => Ok(Self::Gaming),
            other => Err(CategoryError(other.to_owned())),
        }
    }
}
