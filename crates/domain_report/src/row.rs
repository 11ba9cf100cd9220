//! Report row variants
//!
//! The shape of a report row depends on the view: detailed listing,
//! grouped roll-up, or transport ledger. The variants form a tagged
//! union so consumers match exhaustively instead of probing optional
//! fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{DispatchId, Money, Quintal, TransactionId};
use domain_dispatch::DispatchStatus;
use domain_trade::{CostBreakdown, Settlement, TransactionType};

/// One enriched transaction in a detailed report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailRow {
    /// Source transaction
    pub transaction_id: TransactionId,
    /// Transaction date
    pub date: DateTime<Utc>,
    /// Purchase or sale
    pub transaction_type: TransactionType,
    /// Bill number
    pub invoice_number: Option<u32>,
    /// Counterparty name ("Unknown" when master data is stale)
    pub contact_name: String,
    /// Grain name
    pub grain_name: String,
    /// Warehouse name
    pub warehouse_name: String,
    /// Bag count
    pub bags: u32,
    /// Quantity in quintals
    pub quantity: Quintal,
    /// Price per quintal
    pub rate_per_quintal: Money,
    /// Itemized costs down to net realized
    pub costs: CostBreakdown,
    /// Effective total, pending balance, and status
    pub settlement: Settlement,
    /// Cumulative amount paid
    pub paid_amount: Money,
    /// Acquisition cost per quintal (zero for purchases)
    pub cost_price_per_quintal: Money,
    /// Realized margin (zero for purchases)
    pub profit: Money,
}

/// One aggregate per distinct grouping key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupRow {
    /// Grouping key: grain, party, or warehouse name
    pub key: String,
    /// Transactions in the group
    pub count: usize,
    /// Total quantity
    pub quantity: Quintal,
    /// Total net realized
    pub amount: Money,
    /// Total paid
    pub paid: Money,
    /// Total pending
    pub pending: Money,
    /// Total profit
    pub profit: Money,
}

/// One dispatch in the transport ledger report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportRow {
    /// Source dispatch record
    pub dispatch_id: DispatchId,
    /// Date of the sale group's lead transaction
    pub date: DateTime<Utc>,
    /// Bill number of the sale group
    pub invoice_number: Option<u32>,
    /// Transporter owed the freight
    pub transporter_name: String,
    /// Vehicle registration
    pub vehicle_number: Option<String>,
    /// Load weight
    pub total_weight: Quintal,
    /// Freight rate per quintal
    pub rate: Money,
    /// Gross freight
    pub gross_freight: Money,
    /// Advance handed over at loading
    pub advance_paid: Money,
    /// Paid on delivery confirmation
    pub delivery_paid: Money,
    /// Withheld for transit shortage
    pub shortage_deduction: Money,
    /// Other withholding
    pub other_deduction: Money,
    /// Sum of the two deductions
    pub total_deduction: Money,
    /// Freight still owed
    pub balance_pending: Money,
    /// Paid/Pending classification
    pub status: DispatchStatus,
}

/// A row in any report view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ReportRow {
    /// Detailed listing row
    Detail(DetailRow),
    /// Grouped roll-up row
    Group(GroupRow),
    /// Transport ledger row
    Transport(TransportRow),
}
