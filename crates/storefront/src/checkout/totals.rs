//! Derived order totals.
//!
//! Pure and stateless: a cart snapshot plus the store's pricing constants
//! in, four amounts out. Shared by the mini-cart sidebar and the checkout
//! order summary so the two can never disagree.

use rust_decimal::Decimal;

use techstore_core::display_usd;

use crate::cart::CartLine;
use crate::config::StoreConfig;

/// Subtotal, shipping, tax, and grand total for a cart snapshot.
///
/// Amounts are exact decimals; rounding to cents happens only in the
/// `*_display` accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Totals {
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

impl Totals {
    /// Compute totals from cart lines and the store's pricing constants.
    #[must_use]
    pub fn compute(lines: &[CartLine], config: &StoreConfig) -> Self {
        let subtotal: Decimal = lines
            .iter()
            .map(|line| line.price * Decimal::from(line.quantity))
            .sum();
        let shipping = config.shipping_flat;
        let tax = subtotal * config.tax_rate;

        Self {
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax,
        }
    }

    /// Subtotal formatted for display ("$25.00").
    #[must_use]
    pub fn subtotal_display(&self) -> String {
        display_usd(self.subtotal)
    }

    /// Shipping formatted for display.
    #[must_use]
    pub fn shipping_display(&self) -> String {
        display_usd(self.shipping)
    }

    /// Tax formatted for display.
    #[must_use]
    pub fn tax_display(&self) -> String {
        display_usd(self.tax)
    }

    /// Grand total formatted for display.
    #[must_use]
    pub fn total_display(&self) -> String {
        display_usd(self.total)
    }
}
