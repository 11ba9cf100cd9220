//! Dispatch Domain - Transporter Freight Ledger
//!
//! Tracks the freight owed to a transporter for a bulk sale's
//! delivery, separate from the buyer's bill. Enforces that recorded
//! payments and deductions never exceed the gross freight.

pub mod error;
pub mod ledger;

pub use error::DispatchError;
pub use ledger::{
    apply_payment, reconcile, DispatchBalance, DispatchField, DispatchRecord, DispatchStatus,
};
