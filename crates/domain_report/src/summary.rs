//! Dashboard summary
//!
//! The three headline figures: what buyers still owe (net of
//! settlement adjustments), what suppliers are still owed, and what
//! the stock on hand is worth at average purchase price.

use serde::{Deserialize, Serialize};

use core_kernel::Money;
use domain_trade::{settle, Transaction, TransactionType};

use crate::inventory::stock_positions;
use crate::lookups::Lookups;

/// Headline receivable/payable/stock-value figures
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct DashboardSummary {
    /// Outstanding balances owed by buyers
    pub total_receivable: Money,
    /// Outstanding balances owed to suppliers
    pub total_payable: Money,
    /// Stock on hand valued at average purchase price
    pub total_inventory_value: Money,
}

/// Computes the dashboard summary from the full transaction history
pub fn dashboard_summary(transactions: &[Transaction], lookups: &Lookups) -> DashboardSummary {
    let mut summary = DashboardSummary::default();

    for trx in transactions {
        let pending = settle(trx, trx.amount_paid).pending;
        if !pending.is_positive() {
            continue;
        }
        match trx.transaction_type {
            TransactionType::Sale => summary.total_receivable += pending,
            TransactionType::Purchase => summary.total_payable += pending,
        }
    }

    for position in stock_positions(transactions, lookups) {
        if position.total_quantity.is_positive() {
            summary.total_inventory_value +=
                position.total_quantity.amount_at(position.average_price);
        }
    }

    summary
}
