//! Settlement calculation
//!
//! A sale's payable amount is adjusted after delivery for shortage and
//! deductions; a purchase is owed at face value. All paid/pending
//! classification runs through [`settle`] so every screen and report
//! shows the same figures.
//!
//! Paid status tolerates a one-rupee balance
//! ([`Money::SETTLEMENT_TOLERANCE`]): repeated partial payments rounded
//! to the rupee must still close a bill.

use serde::{Deserialize, Serialize};

use core_kernel::{Money, Quintal};

use crate::error::TradeError;
use crate::payment::PaymentRecord;
use crate::transaction::{Transaction, TransactionType};

/// Payment state of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    /// Effective total covered within tolerance
    Paid,
    /// Something paid, balance outstanding
    Partial,
    /// Nothing paid
    Pending,
}

impl PaymentStatus {
    /// Returns the label shown in lists and exports
    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Partial => "Partial",
            PaymentStatus::Pending => "Pending",
        }
    }
}

/// The settled position of one transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    /// What the party actually owes after adjustments
    pub effective_total: Money,
    /// `effective_total - paid`
    pub pending: Money,
    /// Paid/Partial/Pending classification
    pub status: PaymentStatus,
}

/// Computes the settled position of a transaction.
///
/// For a sale the effective total nets out shortage and deduction:
/// `total - shortage_qty * rate - deduction`. A purchase has no
/// settlement concept and is owed at `total_amount`.
///
/// Pure: identical inputs give identical results.
pub fn settle(trx: &Transaction, payments_sum: Money) -> Settlement {
    classify(effective_total(trx), payments_sum)
}

/// Classifies a paid amount against an effective total.
///
/// An effective total driven negative by adjustments counts as settled
/// even with nothing paid.
pub fn classify(effective_total: Money, payments_sum: Money) -> Settlement {
    let pending = effective_total - payments_sum;

    let status = if payments_sum.covers(effective_total) {
        PaymentStatus::Paid
    } else if payments_sum.is_positive() {
        PaymentStatus::Partial
    } else {
        PaymentStatus::Pending
    };

    Settlement {
        effective_total,
        pending,
        status,
    }
}

/// The post-adjustment amount the party owes
pub fn effective_total(trx: &Transaction) -> Money {
    match trx.transaction_type {
        TransactionType::Purchase => trx.total_amount,
        TransactionType::Sale => {
            let shortage_value = trx.shortage_quantity.amount_at(trx.rate_per_quintal);
            trx.total_amount - shortage_value - trx.deduction_amount
        }
    }
}

/// Validates a payment against the pending balance and returns the new
/// cumulative paid amount.
///
/// # Errors
///
/// - [`TradeError::InvalidAmount`] when `amount <= 0`
/// - [`TradeError::Overpayment`] when `amount` exceeds the pending
///   balance by more than the settlement tolerance; the error carries
///   the pending figure
pub fn record_payment(trx: &Transaction, amount: Money) -> Result<Money, TradeError> {
    if !amount.is_positive() {
        return Err(TradeError::InvalidAmount(amount));
    }

    let settlement = settle(trx, trx.amount_paid);
    if amount.amount() > settlement.pending.amount() + Money::SETTLEMENT_TOLERANCE {
        return Err(TradeError::Overpayment {
            pending: settlement.pending,
            attempted: amount,
        });
    }

    Ok(trx.amount_paid + amount)
}

/// A settlement edit: new shortage/deduction figures for a sale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettlementEdit {
    /// Quantity lost or disputed
    pub shortage_quantity: Quintal,
    /// Flat monetary deduction
    pub deduction_amount: Money,
    /// Reason recorded for the deduction
    pub deduction_note: Option<String>,
}

/// The result of a settlement edit.
///
/// The caller persists `transaction` (and `closing_payment`, when
/// present) as one external write; the engine never posts anything
/// itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettlementOutcome {
    /// Updated transaction snapshot
    pub transaction: Transaction,
    /// Recomputed settlement for the updated snapshot
    pub settlement: Settlement,
    /// Exact pending balance posted as payment when the edit closes the bill
    pub closing_payment: Option<PaymentRecord>,
}

/// Applies a settlement edit to a sale, optionally closing the bill.
///
/// Recomputes the effective total from the edited figures. With
/// `mark_paid`, the exact pending balance becomes a closing
/// [`PaymentRecord`] and the snapshot's `amount_paid` is advanced to
/// match — edit and closure form one atomic business operation, so any
/// rejection happens before a payment exists.
///
/// # Errors
///
/// - [`TradeError::InvalidOperation`] for purchases or negative
///   shortage/deduction figures
pub fn apply_settlement_edit(
    trx: &Transaction,
    edit: SettlementEdit,
    mark_paid: bool,
) -> Result<SettlementOutcome, TradeError> {
    if trx.transaction_type != TransactionType::Sale {
        return Err(TradeError::InvalidOperation(format!(
            "settlement edit on purchase {}",
            trx.id
        )));
    }
    if edit.shortage_quantity.value().is_sign_negative() {
        return Err(TradeError::InvalidOperation(
            "negative shortage quantity".to_string(),
        ));
    }
    if edit.deduction_amount.is_negative() {
        return Err(TradeError::InvalidOperation(
            "negative deduction amount".to_string(),
        ));
    }

    let mut updated = trx.clone();
    updated.shortage_quantity = edit.shortage_quantity;
    updated.deduction_amount = edit.deduction_amount;
    updated.deduction_note = edit.deduction_note;

    let mut settlement = settle(&updated, updated.amount_paid);

    let closing_payment = if mark_paid && settlement.pending.is_positive() {
        let payment = PaymentRecord::new(updated.id, settlement.pending)
            .with_notes("Settlement closure");
        updated.amount_paid += settlement.pending;
        settlement = settle(&updated, updated.amount_paid);
        Some(payment)
    } else {
        None
    };

    Ok(SettlementOutcome {
        transaction: updated,
        settlement,
        closing_payment,
    })
}
