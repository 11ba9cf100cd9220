//! Cost breakdown and realized margin
//!
//! Internal expenses (labour, transport, mandi) and settlement
//! adjustments come off the gross sale value to give the net realized
//! amount; acquisition cost then gives the margin. These figures are
//! privileged: invoice-facing structures never carry them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::Money;

use crate::transaction::{Transaction, TransactionType};

/// Itemized costs against one transaction's gross value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Gross grain value `quantity * rate`
    pub base_amount: Money,
    /// `shortage_quantity * rate`
    pub shortage_cost: Money,
    /// Flat settlement deduction
    pub deduction_cost: Money,
    /// `bags * labour_cost_per_bag`
    pub labour_cost_total: Money,
    /// `quantity * transport_cost_per_qtl`
    pub transport_cost_total: Money,
    /// Flat market-yard fee
    pub mandi_cost: Money,
    /// Base minus every cost above
    pub net_realized: Money,
}

/// Itemizes the costs against a transaction's gross value
pub fn cost_breakdown(trx: &Transaction) -> CostBreakdown {
    let base_amount = trx.base_amount();
    let shortage_cost = trx.shortage_quantity.amount_at(trx.rate_per_quintal);
    let deduction_cost = trx.deduction_amount;
    let labour_cost_total = trx
        .labour_cost_per_bag
        .multiply(Decimal::from(trx.number_of_bags));
    let transport_cost_total = trx.quantity.amount_at(trx.transport_cost_per_qtl);
    let mandi_cost = trx.mandi_cost;

    let net_realized = base_amount
        - shortage_cost
        - deduction_cost
        - labour_cost_total
        - transport_cost_total
        - mandi_cost;

    CostBreakdown {
        base_amount,
        shortage_cost,
        deduction_cost,
        labour_cost_total,
        transport_cost_total,
        mandi_cost,
        net_realized,
    }
}

/// What the sold stock cost to acquire: `cost_price_per_quintal * quantity`
pub fn acquisition_cost(trx: &Transaction) -> Money {
    trx.quantity.amount_at(trx.cost_price_per_quintal)
}

/// Realized margin on a sale: net realized minus acquisition cost.
///
/// Purchases are cost events, not margin events; they return zero.
pub fn profit(trx: &Transaction) -> Money {
    if trx.transaction_type != TransactionType::Sale {
        return Money::zero();
    }
    cost_breakdown(trx).net_realized - acquisition_cost(trx)
}
