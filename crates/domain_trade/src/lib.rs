//! Trade Domain - Transactions, Settlement, and Profit
//!
//! This crate holds the trading records and the business rules that
//! derive money figures from them:
//!
//! - purchase/sale transactions with their bill-total invariants
//! - settlement: effective totals, payment guards, paid/partial/pending
//! - cost breakdown and realized margin
//! - bulk-sale planning across warehouses
//! - invoice view assembly for bill renderers
//!
//! Everything operates on immutable snapshots and returns derived
//! values; persisting the results is the caller's concern.

pub mod bulk;
pub mod error;
pub mod invoice;
pub mod party;
pub mod payment;
pub mod profit;
pub mod settlement;
pub mod transaction;
pub mod words;

pub use bulk::{average_purchase_cost, next_invoice_number, plan_bulk_sale, BulkSaleOrder, WarehouseAllocation};
pub use error::TradeError;
pub use invoice::{InvoiceLine, InvoiceView, PaymentLine};
pub use party::{Contact, Grain, PartyType, Warehouse};
pub use payment::{payments_total, PaymentRecord};
pub use profit::{acquisition_cost, cost_breakdown, profit, CostBreakdown};
pub use settlement::{
    apply_settlement_edit, classify, effective_total, record_payment, settle, PaymentStatus,
    Settlement, SettlementEdit, SettlementOutcome,
};
pub use transaction::{Transaction, TransactionType};
pub use words::amount_in_words;
