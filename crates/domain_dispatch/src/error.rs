//! Dispatch domain errors

use thiserror::Error;

use core_kernel::Money;

/// Errors that can occur in the dispatch ledger
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    /// The edited payments and deductions would exceed the gross freight.
    ///
    /// Carries the balance still owed so callers can show the figure
    /// behind the rejection. The stored record is left unchanged; the
    /// edit is never clamped.
    #[error("Freight payment of {attempted} exceeds balance owed of {balance}")]
    Overpayment { balance: Money, attempted: Money },

    /// A negative figure was entered for a payment or deduction field
    #[error("Invalid freight amount: {0}")]
    InvalidAmount(Money),
}
