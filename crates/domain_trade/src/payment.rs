//! Payment history records
//!
//! One record per payment action, immutable once created. The running
//! `amount_paid` on a transaction is the sum of its records; write-time
//! guards keep that sum from passing the effective bill total.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{Money, TransactionId};

/// A single payment against a transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    /// Transaction being paid
    pub transaction_id: TransactionId,
    /// Amount paid; always positive
    pub amount: Money,
    /// When the payment was taken
    pub date: DateTime<Utc>,
    /// Free-text notes
    pub notes: Option<String>,
}

impl PaymentRecord {
    /// Creates a new payment record dated now
    pub fn new(transaction_id: TransactionId, amount: Money) -> Self {
        Self {
            transaction_id,
            amount,
            date: Utc::now(),
            notes: None,
        }
    }

    /// Sets the payment date
    pub fn dated(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    /// Sets free-text notes
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Sums a transaction's payment records
pub fn payments_total(records: &[PaymentRecord]) -> Money {
    records.iter().map(|p| p.amount).sum()
}
