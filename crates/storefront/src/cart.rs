//! The persistent cart store.
//!
//! The cart is the one piece of state that outlives a page load. A
//! [`CartStore`] owns the authoritative in-memory line list and writes the
//! whole list back to its [`Storage`] key after every successful mutation,
//! so the persisted payload is never ahead of or behind what the renderer
//! sees. Restoring tolerates anything: an absent or unparseable payload
//! becomes an empty cart rather than a failed session start.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use techstore_core::ProductId;

use crate::catalog::Catalog;
use crate::storage::Storage;

/// Errors from cart mutation operations.
///
/// Both variants mean "the id you referenced isn't there"; neither mutates
/// or persists anything, and existing cart state stays intact.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CartError {
    /// `add_item` referenced a product the catalog doesn't carry.
    #[error("product {0} not found in catalog")]
    ProductNotInCatalog(ProductId),

    /// `update_quantity` referenced a product with no line in the cart.
    #[error("product {0} is not in the cart")]
    LineNotFound(ProductId),
}

/// One line of the cart: a product snapshot plus a quantity.
///
/// Name, price, and image are copied from the catalog at add-time. A later
/// catalog price change intentionally does not rewrite lines already in the
/// cart. Serialized field names match the persisted wire format
/// (`productId`, `name`, `price`, `image`, `quantity`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub image: String,
    /// Always positive; a line that would reach zero is removed instead.
    pub quantity: u32,
}

/// The authoritative cart for one session.
///
/// Lines keep insertion order, which is also display order, and `product_id`
/// is unique across lines: adding the same product twice bumps the existing
/// line's quantity instead of appending a duplicate.
#[derive(Debug)]
pub struct CartStore<S: Storage> {
    lines: Vec<CartLine>,
    storage: S,
    key: String,
}

impl<S: Storage> CartStore<S> {
    /// Restore the cart persisted under `key`, or start empty.
    ///
    /// An absent payload is a normal first visit. A corrupt payload is
    /// logged and replaced with an empty cart; it never fails the session.
    pub fn restore(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let lines = match storage.get(&key) {
            None => Vec::new(),
            Some(raw) => match serde_json::from_str::<Vec<CartLine>>(&raw) {
                Ok(lines) => sanitize(lines),
                Err(err) => {
                    warn!(error = %err, "stored cart is corrupt, starting empty");
                    Vec::new()
                }
            },
        };

        Self {
            lines,
            storage,
            key,
        }
    }

    /// Add one unit of a product to the cart.
    ///
    /// Snapshots name/price/image from the catalog for a new line, or bumps
    /// the quantity of the existing line for that product. Persists on
    /// success.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ProductNotInCatalog`] if the catalog has no
    /// product with this id. Nothing is mutated or persisted in that case.
    pub fn add_item(&mut self, product_id: ProductId, catalog: &Catalog) -> Result<(), CartError> {
        let product = catalog
            .get(product_id)
            .ok_or(CartError::ProductNotInCatalog(product_id))?;

        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine {
                product_id: product.id,
                name: product.name.clone(),
                price: product.price,
                image: product.image.clone(),
                quantity: 1,
            });
        }

        self.persist();
        Ok(())
    }

    /// Remove the line for a product, if present.
    ///
    /// Removing an absent product is a no-op, not an error. Persists either
    /// way.
    pub fn remove_item(&mut self, product_id: ProductId) {
        self.lines.retain(|l| l.product_id != product_id);
        self.persist();
    }

    /// Adjust a line's quantity by `delta` (typically +1 or -1).
    ///
    /// If the new quantity would be zero or negative the line is removed
    /// entirely, same as [`remove_item`](Self::remove_item). Persists on
    /// success.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::LineNotFound`] if no line exists for this
    /// product.
    pub fn update_quantity(&mut self, product_id: ProductId, delta: i64) -> Result<(), CartError> {
        let index = self
            .lines
            .iter()
            .position(|l| l.product_id == product_id)
            .ok_or(CartError::LineNotFound(product_id))?;

        let new_quantity = i64::from(self.lines[index].quantity) + delta;
        if new_quantity <= 0 {
            self.lines.remove(index);
        } else {
            // Positive and bounded by the old quantity plus delta; the cast
            // is only lossy past u32::MAX units of one product.
            self.lines[index].quantity = u32::try_from(new_quantity).unwrap_or(u32::MAX);
        }

        self.persist();
        Ok(())
    }

    /// Empty the cart and persist the empty state.
    ///
    /// Called after checkout completes.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.persist();
    }

    /// Read-only view of the current lines, in insertion order.
    #[must_use]
    pub fn snapshot(&self) -> &[CartLine] {
        &self.lines
    }

    /// Total number of units across all lines (the header badge count).
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The storage backend this cart persists through.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Write the whole line list to storage as a JSON array.
    ///
    /// The storage interface is infallible; a serialization failure (which
    /// these types cannot produce in practice) is logged and skipped rather
    /// than surfaced, mirroring how a browser host treats a full store.
    fn persist(&mut self) {
        match serde_json::to_string(&self.lines) {
            Ok(payload) => self.storage.set(&self.key, &payload),
            Err(err) => error!(error = %err, "failed to serialize cart"),
        }
    }
}

/// Drop restored lines that violate the cart invariants.
///
/// Payloads written by older sessions (or edited by hand) may carry
/// non-positive quantities or duplicate product ids; the first line for a
/// product wins.
fn sanitize(lines: Vec<CartLine>) -> Vec<CartLine> {
    let mut seen = Vec::with_capacity(lines.len());
    let mut kept: Vec<CartLine> = Vec::with_capacity(lines.len());

    for line in lines {
        if line.quantity == 0 || seen.contains(&line.product_id) {
            warn!(product_id = %line.product_id, "dropping invalid stored cart line");
            continue;
        }
        seen.push(line.product_id);
        kept.push(line);
    }

    kept
}
