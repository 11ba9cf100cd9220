//! Bulk sale planning
//!
//! A bulk sale draws stock from several warehouses onto one vehicle and
//! one bill: one transaction row per warehouse allocation, all sharing
//! a sale group, a single invoice number, and the same buyer, rate and
//! dispatch details. The acquisition cost snapshotted onto each row is
//! the quantity-weighted average over the grain's purchase history.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{ContactId, GrainId, Money, Rate, SaleGroupId, TransactionId, WarehouseId};

use crate::transaction::{Transaction, TransactionType};

/// Bags drawn from one warehouse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarehouseAllocation {
    /// Warehouse the bags come from
    pub warehouse_id: WarehouseId,
    /// Number of bags
    pub bags: u32,
}

/// A bulk sale to be planned into transaction rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkSaleOrder {
    /// Buyer
    pub contact_id: ContactId,
    /// Grain sold
    pub grain_id: GrainId,
    /// Price per quintal
    pub rate_per_quintal: Money,
    /// Kg per bag for this load
    pub bharti_kg: Decimal,
    /// GST rate on the bill
    pub tax_percent: Rate,
    /// Stock drawn per warehouse
    pub allocations: Vec<WarehouseAllocation>,
    /// Transporter carrying the delivery
    pub transporter_name: Option<String>,
    /// Delivery destination
    pub destination: Option<String>,
    /// Driver name
    pub driver_name: Option<String>,
    /// Vehicle registration
    pub vehicle_number: Option<String>,
}

/// Quantity-weighted average purchase price for a grain.
///
/// Gross grain value (`quantity * rate`) over purchased quantity;
/// zero when the grain has no purchase history.
pub fn average_purchase_cost(transactions: &[Transaction], grain_id: GrainId) -> Money {
    let purchases = transactions
        .iter()
        .filter(|t| t.transaction_type == TransactionType::Purchase && t.grain_id == grain_id);

    let mut total_value = Money::zero();
    let mut total_qty = Decimal::ZERO;
    for p in purchases {
        total_value += p.base_amount();
        total_qty += p.quantity.value();
    }

    if total_qty.is_zero() {
        Money::zero()
    } else {
        total_value / total_qty
    }
}

/// Next sequential invoice number for a transaction type
pub fn next_invoice_number(transactions: &[Transaction], transaction_type: TransactionType) -> u32 {
    transactions
        .iter()
        .filter(|t| t.transaction_type == transaction_type)
        .filter_map(|t| t.invoice_number)
        .max()
        .unwrap_or(0)
        + 1
}

/// Plans a bulk sale into one transaction row per warehouse allocation.
///
/// Every row carries the shared invoice number, a fresh sale group id,
/// the buyer's dispatch details, and `avg_cost` as its acquisition
/// cost. Row ids are unassigned until the store inserts them.
pub fn plan_bulk_sale(
    order: &BulkSaleOrder,
    date: DateTime<Utc>,
    avg_cost: Money,
    invoice_number: u32,
) -> Vec<Transaction> {
    let group = SaleGroupId::generate();

    order
        .allocations
        .iter()
        .map(|alloc| {
            Transaction::sale(
                TransactionId::unassigned(),
                date,
                order.grain_id,
                order.contact_id,
                alloc.warehouse_id,
                alloc.bags,
                order.bharti_kg,
                order.rate_per_quintal,
            )
            .with_invoice_number(invoice_number)
            .with_tax_percent(order.tax_percent)
            .with_cost_price(avg_cost)
            .with_sale_group(group)
            .with_dispatch_details(
                order.transporter_name.clone(),
                order.vehicle_number.clone(),
                order.driver_name.clone(),
                order.destination.clone(),
            )
            .with_notes(format!("Bulk Sale: {} bags", alloc.bags))
        })
        .collect()
}
