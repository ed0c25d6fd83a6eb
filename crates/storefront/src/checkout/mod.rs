//! The checkout flow: validation, totals, payment, and order completion.
//!
//! Submission is all-or-nothing from the cart's point of view: the cart is
//! only cleared after the (simulated) charge settles, and any earlier
//! failure leaves it untouched. While a charge is pending the flow refuses
//! a second submission, which is what keeps a double-clicked submit button
//! from placing two orders.

pub mod payment;
pub mod totals;
pub mod validator;

use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{DateTime, Utc};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::cart::CartStore;
use crate::config::StoreConfig;
use crate::storage::Storage;

pub use payment::{PaymentProcessor, PaymentReceipt};
pub use totals::Totals;
pub use validator::{
    CheckoutForm, Field, FieldError, FieldIssue, FieldKind, validate_field, validate_form,
};

/// Errors from submitting the checkout form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckoutError {
    /// One or more field rules failed; every failure is listed.
    #[error("checkout form has {} invalid field(s)", .0.len())]
    Validation(Vec<FieldIssue>),

    /// There is nothing to order.
    #[error("cannot check out an empty cart")]
    EmptyCart,

    /// A previous submission is still waiting on the payment gateway.
    #[error("a checkout attempt is already in flight")]
    AlreadySubmitting,
}

/// A completed order.
#[derive(Debug, Clone)]
pub struct OrderConfirmation {
    pub order_id: Uuid,
    pub placed_at: DateTime<Utc>,
    pub totals: Totals,
    pub receipt: PaymentReceipt,
}

/// The checkout submission flow for one form instance.
///
/// At most one submission can be in flight at a time; the guard is held
/// across the payment await and released on every exit path.
#[derive(Debug)]
pub struct CheckoutFlow {
    processor: PaymentProcessor,
    in_flight: AtomicBool,
}

impl CheckoutFlow {
    /// Create a flow backed by the given payment processor.
    #[must_use]
    pub const fn new(processor: PaymentProcessor) -> Self {
        Self {
            processor,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Whether a submission is currently waiting on the gateway.
    ///
    /// The renderer uses this to disable the submit control.
    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Submit the checkout form.
    ///
    /// Validates the form, charges the order total, clears the cart, and
    /// returns the confirmation. The cart is untouched unless the charge
    /// settles.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::Validation`] with every failed field.
    /// - [`CheckoutError::EmptyCart`] if there is nothing to order.
    /// - [`CheckoutError::AlreadySubmitting`] while a charge is pending.
    #[instrument(skip_all, fields(items = cart.item_count()))]
    pub async fn submit<S: Storage>(
        &self,
        form: &CheckoutForm,
        cart: &mut CartStore<S>,
        config: &StoreConfig,
    ) -> Result<OrderConfirmation, CheckoutError> {
        let issues = validate_form(form);
        if !issues.is_empty() {
            return Err(CheckoutError::Validation(issues));
        }
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let _guard = self.begin()?;

        let totals = Totals::compute(cart.snapshot(), config);
        let receipt = self.processor.charge(totals.total).await;
        cart.clear();

        let confirmation = OrderConfirmation {
            order_id: Uuid::new_v4(),
            placed_at: Utc::now(),
            totals,
            receipt,
        };
        info!(order_id = %confirmation.order_id, "order placed");
        Ok(confirmation)
    }

    /// Claim the in-flight slot, failing if it is already taken.
    fn begin(&self) -> Result<InFlightGuard<'_>, CheckoutError> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| CheckoutError::AlreadySubmitting)?;
        Ok(InFlightGuard {
            flag: &self.in_flight,
        })
    }
}

/// Releases the in-flight slot on drop, including on early exits.
#[derive(Debug)]
struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
