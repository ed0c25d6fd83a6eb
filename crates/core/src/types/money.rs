//! Money display helpers using decimal arithmetic.
//!
//! Monetary amounts are carried as [`Decimal`] end to end and only rounded
//! here, at presentation time. Rounding during accumulation would compound
//! per-line error across a cart.

use rust_decimal::{Decimal, RoundingStrategy};

/// Round an amount to whole cents.
#[must_use]
pub fn round_to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Format an amount for display (e.g., "$19.99").
#[must_use]
pub fn display_usd(amount: Decimal) -> String {
    format!("${:.2}", round_to_cents(amount))
}
