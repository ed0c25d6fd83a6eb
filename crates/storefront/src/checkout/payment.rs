//! Simulated payment gateway.
//!
//! Checkout charges through a deferred task that settles after a fixed
//! delay and always succeeds. There is no cancellation path: once a charge
//! starts it resolves. A real gateway would replace [`PaymentProcessor`]
//! behind the same call shape, return a `Result`, and add cancellation for
//! navigation-away.

use std::time::Duration;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

/// The simulated payment gateway.
#[derive(Debug, Clone)]
pub struct PaymentProcessor {
    delay: Duration,
}

impl PaymentProcessor {
    /// Create a processor that settles after `delay`.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Charge `amount` and wait for settlement.
    ///
    /// The simulated gateway never declines.
    pub async fn charge(&self, amount: Decimal) -> PaymentReceipt {
        tokio::time::sleep(self.delay).await;

        PaymentReceipt {
            transaction_id: Uuid::new_v4(),
            amount,
            processed_at: Utc::now(),
        }
    }
}

/// Proof of a settled charge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentReceipt {
    pub transaction_id: Uuid,
    pub amount: Decimal,
    pub processed_at: DateTime<Utc>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_charge_settles_with_receipt() {
        let processor = PaymentProcessor::new(Duration::ZERO);
        let receipt = processor.charge(Decimal::new(3699, 2)).await;

        assert_eq!(receipt.amount, Decimal::new(3699, 2));
        assert!(!receipt.transaction_id.is_nil());
    }

    #[tokio::test]
    async fn test_charges_get_distinct_transaction_ids() {
        let processor = PaymentProcessor::new(Duration::ZERO);
        let a = processor.charge(Decimal::ONE).await;
        let b = processor.charge(Decimal::ONE).await;

        assert_ne!(a.transaction_id, b.transaction_id);
    }

    #[tokio::test(start_paused = true)]
    async fn test_charge_waits_for_the_configured_delay() {
        let processor = PaymentProcessor::new(Duration::from_secs(3));
        let before = tokio::time::Instant::now();
        processor.charge(Decimal::ONE).await;

        assert!(before.elapsed() >= Duration::from_secs(3));
    }
}
