//! Per-session composition root.
//!
//! One [`StorefrontSession`] is constructed when the page loads and passed
//! to every consumer; there are no ambient globals. It owns the catalog,
//! the restored cart, and the checkout flow, and exposes the operations the
//! rendering layer drives in response to user input.

use techstore_core::ProductId;

use crate::cart::CartStore;
use crate::catalog::{Catalog, CatalogQuery, QueryResult};
use crate::checkout::{CheckoutFlow, CheckoutForm, OrderConfirmation, PaymentProcessor, Totals};
use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::storage::Storage;

/// Everything one storefront session needs, wired together once.
#[derive(Debug)]
pub struct StorefrontSession<S: Storage> {
    config: StoreConfig,
    catalog: Catalog,
    cart: CartStore<S>,
    checkout: CheckoutFlow,
}

impl<S: Storage> StorefrontSession<S> {
    /// Create a session: restores the cart persisted in `storage` (empty on
    /// first visit or corruption) and wires the checkout flow to the
    /// configured payment delay.
    #[must_use]
    pub fn new(catalog: Catalog, storage: S, config: StoreConfig) -> Self {
        let cart = CartStore::restore(storage, config.cart_storage_key.clone());
        let checkout = CheckoutFlow::new(PaymentProcessor::new(config.payment_delay));

        Self {
            config,
            catalog,
            cart,
            checkout,
        }
    }

    /// The session configuration.
    #[must_use]
    pub const fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// The static product catalog.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The cart store.
    #[must_use]
    pub const fn cart(&self) -> &CartStore<S> {
        &self.cart
    }

    /// The checkout flow (e.g., to poll `is_in_flight`).
    #[must_use]
    pub const fn checkout_flow(&self) -> &CheckoutFlow {
        &self.checkout
    }

    /// Evaluate a product-grid query against the catalog.
    #[must_use]
    pub fn browse(&self, query: &CatalogQuery) -> QueryResult {
        self.catalog.evaluate(query)
    }

    /// Totals for the current cart snapshot.
    #[must_use]
    pub fn totals(&self) -> Totals {
        Totals::compute(self.cart.snapshot(), &self.config)
    }

    /// Add one unit of a product to the cart.
    ///
    /// # Errors
    ///
    /// Fails if the product is not in the catalog.
    pub fn add_to_cart(&mut self, product_id: ProductId) -> Result<(), StoreError> {
        self.cart.add_item(product_id, &self.catalog)?;
        Ok(())
    }

    /// Remove a product's line from the cart; no-op when absent.
    pub fn remove_from_cart(&mut self, product_id: ProductId) {
        self.cart.remove_item(product_id);
    }

    /// Adjust a line's quantity; reaching zero removes the line.
    ///
    /// # Errors
    ///
    /// Fails if the product has no line in the cart.
    pub fn change_quantity(&mut self, product_id: ProductId, delta: i64) -> Result<(), StoreError> {
        self.cart.update_quantity(product_id, delta)?;
        Ok(())
    }

    /// Submit the checkout form; on success the cart is cleared.
    ///
    /// # Errors
    ///
    /// Fails on invalid fields, an empty cart, or a submission already in
    /// flight.
    pub async fn checkout(&mut self, form: &CheckoutForm) -> Result<OrderConfirmation, StoreError> {
        let confirmation = self
            .checkout
            .submit(form, &mut self.cart, &self.config)
            .await?;
        Ok(confirmation)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::tests::sample_catalog;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_session_restores_previous_cart() {
        let payload = r#"[{"productId":2,"name":"iPhone 15 Pro","price":"999","image":"x.jpg","quantity":1}]"#;
        let storage = MemoryStorage::with_entry("cart", payload);

        let session =
            StorefrontSession::new(sample_catalog(), storage, StoreConfig::default());
        assert_eq!(session.cart().item_count(), 1);
    }

    #[test]
    fn test_add_and_totals_agree() {
        let mut session = StorefrontSession::new(
            sample_catalog(),
            MemoryStorage::new(),
            StoreConfig::default(),
        );

        session.add_to_cart(ProductId::new(3)).unwrap();
        session.add_to_cart(ProductId::new(3)).unwrap();

        // 2 x $399
        assert_eq!(session.totals().subtotal, rust_decimal::Decimal::new(798, 0));
    }

    #[test]
    fn test_unknown_product_surfaces_cart_error() {
        let mut session = StorefrontSession::new(
            sample_catalog(),
            MemoryStorage::new(),
            StoreConfig::default(),
        );

        let err = session.add_to_cart(ProductId::new(999)).unwrap_err();
        assert!(matches!(err, StoreError::Cart(_)));
    }
}
