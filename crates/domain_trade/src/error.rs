//! Trade domain errors

use thiserror::Error;

use core_kernel::Money;

/// Errors that can occur in the trade domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TradeError {
    /// Payment amount is zero or negative
    #[error("Invalid payment amount: {0}")]
    InvalidAmount(Money),

    /// Payment would push the paid total past the owed amount.
    ///
    /// Carries the computed pending balance so callers can show the
    /// figure behind the rejection. Never auto-corrected.
    #[error("Payment of {attempted} exceeds pending balance of {pending}")]
    Overpayment { pending: Money, attempted: Money },

    /// A bill view was requested for an empty transaction group
    #[error("Bill has no transaction rows")]
    EmptyBill,

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}
