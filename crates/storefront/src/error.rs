//! Unified error handling for the session surface.
//!
//! Every engine reports failures as structured results for the rendering
//! collaborator to display; nothing here terminates the session. Storage
//! corruption never appears at all - it is recovered locally with an empty
//! cart at restore time.

use thiserror::Error;

use crate::cart::CartError;
use crate::checkout::CheckoutError;

/// Top-level error type returned by [`StorefrontSession`] operations.
///
/// [`StorefrontSession`]: crate::state::StorefrontSession
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A cart mutation referenced a missing product.
    #[error(transparent)]
    Cart(#[from] CartError),

    /// Checkout submission failed.
    #[error(transparent)]
    Checkout(#[from] CheckoutError),
}
