//! Storefront configuration.
//!
//! The engines are embedded in a rendering host rather than deployed as a
//! service, so configuration is a plain value handed to
//! [`StorefrontSession::new`](crate::state::StorefrontSession::new) instead
//! of being read from the environment. The defaults carry the store's fixed
//! pricing constants.

use std::time::Duration;

use rust_decimal::Decimal;

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Flat shipping charge applied to every order.
    pub shipping_flat: Decimal,
    /// Sales tax rate applied to the order subtotal.
    pub tax_rate: Decimal,
    /// Storage key the serialized cart is persisted under.
    pub cart_storage_key: String,
    /// How long the simulated payment gateway takes to settle.
    pub payment_delay: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            // $9.99 flat shipping, 8% tax
            shipping_flat: Decimal::new(999, 2),
            tax_rate: Decimal::new(8, 2),
            cart_storage_key: "cart".to_owned(),
            payment_delay: Duration::from_secs(3),
        }
    }
}

impl StoreConfig {
    /// Configuration with no payment delay, for tests and previews.
    #[must_use]
    pub fn with_instant_payment(mut self) -> Self {
        self.payment_delay = Duration::ZERO;
        self
    }
}
