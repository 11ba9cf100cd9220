//! Report aggregation
//!
//! Filters a transaction snapshot, enriches each survivor with its cost
//! breakdown and settled position, optionally collapses rows into
//! per-key aggregates, and totals the lot. Totals always cover the full
//! filtered set, so grouped and ungrouped runs of the same query agree.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::{Money, Quintal};
use domain_trade::{cost_breakdown, profit, settle, PaymentStatus, Transaction, TransactionType};

use crate::lookups::Lookups;
use crate::row::{DetailRow, GroupRow, ReportRow};

/// Which report is being run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    /// Margin analysis; restricted to sales
    Profit,
    /// Purchase listing
    Purchase,
    /// Sale listing
    Sale,
}

/// Transaction-type filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeFilter {
    /// Both purchases and sales
    All,
    /// Purchases only
    Purchase,
    /// Sales only
    Sale,
}

/// Payment-status filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    /// Any status
    All,
    /// Fully paid only
    Paid,
    /// Partially paid only
    Partial,
    /// Nothing paid only
    Pending,
}

impl StatusFilter {
    fn matches(&self, status: PaymentStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Paid => status == PaymentStatus::Paid,
            StatusFilter::Partial => status == PaymentStatus::Partial,
            StatusFilter::Pending => status == PaymentStatus::Pending,
        }
    }
}

/// Grouping dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupBy {
    /// Detailed per-transaction rows
    None,
    /// One aggregate per grain
    Grain,
    /// One aggregate per counterparty
    Party,
    /// One aggregate per warehouse
    Warehouse,
}

/// List ordering, toggled in the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Invoice number ascending
    InvoiceAsc,
    /// Invoice number descending
    InvoiceDesc,
}

/// A report request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportQuery {
    /// Which report to run
    pub report_type: ReportType,
    /// Transaction-type filter, applied before the report-type filter
    pub type_filter: TypeFilter,
    /// Range start, inclusive from 00:00
    pub start_date: Option<NaiveDate>,
    /// Range end, inclusive to 23:59:59
    pub end_date: Option<NaiveDate>,
    /// Case-insensitive substring over contact name and invoice number
    pub search: Option<String>,
    /// Payment-status filter
    pub status: StatusFilter,
    /// Grouping dimension
    pub group_by: GroupBy,
    /// List ordering
    pub sort: SortOrder,
}

impl ReportQuery {
    /// A profit report over everything, ungrouped, newest bill first
    pub fn profit() -> Self {
        Self {
            report_type: ReportType::Profit,
            type_filter: TypeFilter::All,
            start_date: None,
            end_date: None,
            search: None,
            status: StatusFilter::All,
            group_by: GroupBy::None,
            sort: SortOrder::InvoiceDesc,
        }
    }

    /// Same defaults for another report type
    pub fn of_type(report_type: ReportType) -> Self {
        Self {
            report_type,
            ..Self::profit()
        }
    }
}

/// Elementwise sums over the full filtered set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Totals {
    /// Transactions covered
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

/// The result of a report query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Enriched per-transaction rows, sorted per the query
    pub rows: Vec<DetailRow>,
    /// Per-key aggregates when a grouping dimension is active
    pub groups: Option<Vec<GroupRow>>,
    /// Sums over the full filtered set
    pub totals: Totals,
}

impl Report {
    /// The rows a list view renders: group aggregates when a grouping
    /// dimension was active, detail rows otherwise
    pub fn view_rows(&self) -> Vec<ReportRow> {
        match &self.groups {
            Some(groups) => groups.iter().cloned().map(ReportRow::Group).collect(),
            None => self.rows.iter().cloned().map(ReportRow::Detail).collect(),
        }
    }
}

/// Runs a report query over a transaction snapshot.
///
/// Filters apply in order: transaction type, report-type restriction
/// (profit implies sales), date range (both bounds inclusive, either
/// may be absent), free-text search, payment status. Each surviving
/// transaction is enriched independently; a malformed transaction
/// degrades to its own row and never aborts the batch.
pub fn run_report(transactions: &[Transaction], lookups: &Lookups, query: &ReportQuery) -> Report {
    let filtered: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| passes_filters(t, lookups, query))
        .collect();

    let mut rows: Vec<DetailRow> = filtered.iter().map(|t| enrich(t, lookups)).collect();

    // Stable sort: rows sharing an invoice number keep their input order
    rows.sort_by(|a, b| {
        let ka = a.invoice_number.unwrap_or(0);
        let kb = b.invoice_number.unwrap_or(0);
        match query.sort {
            SortOrder::InvoiceAsc => ka.cmp(&kb),
            SortOrder::InvoiceDesc => kb.cmp(&ka),
        }
    });

    let totals = totals_of(&rows);

    let groups = match query.group_by {
        GroupBy::None => None,
        dimension => Some(group_rows(&rows, dimension)),
    };

    Report {
        rows,
        groups,
        totals,
    }
}

fn passes_filters(trx: &Transaction, lookups: &Lookups, query: &ReportQuery) -> bool {
    match query.type_filter {
        TypeFilter::All => {}
        TypeFilter::Purchase => {
            if trx.transaction_type != TransactionType::Purchase {
                return false;
            }
        }
        TypeFilter::Sale => {
            if trx.transaction_type != TransactionType::Sale {
                return false;
            }
        }
    }

    let required = match query.report_type {
        ReportType::Profit | ReportType::Sale => TransactionType::Sale,
        ReportType::Purchase => TransactionType::Purchase,
    };
    if trx.transaction_type != required {
        return false;
    }

    let day = trx.date.date_naive();
    if let Some(start) = query.start_date {
        if day < start {
            return false;
        }
    }
    if let Some(end) = query.end_date {
        if day > end {
            return false;
        }
    }

    if let Some(needle) = query.search.as_deref() {
        let needle = needle.to_lowercase();
        if !needle.is_empty() {
            let contact = lookups
                .contact_name_opt(trx.contact_id)
                .unwrap_or_default()
                .to_lowercase();
            let invoice = trx
                .invoice_number
                .map(|n| n.to_string())
                .unwrap_or_default();
            if !contact.contains(&needle) && !invoice.contains(&needle) {
                return false;
            }
        }
    }

    let status = settle(trx, trx.amount_paid).status;
    query.status.matches(status)
}

fn enrich(trx: &Transaction, lookups: &Lookups) -> DetailRow {
    let costs = cost_breakdown(trx);
    let settlement = settle(trx, trx.amount_paid);

    DetailRow {
        transaction_id: trx.id,
        date: trx.date,
        transaction_type: trx.transaction_type,
        invoice_number: trx.invoice_number,
        contact_name: lookups.contact_name(trx.contact_id),
        grain_name: lookups.grain_name(trx.grain_id),
        warehouse_name: lookups.warehouse_name(trx.warehouse_id),
        bags: trx.number_of_bags,
        quantity: trx.quantity,
        rate_per_quintal: trx.rate_per_quintal,
        costs,
        settlement,
        paid_amount: trx.amount_paid,
        cost_price_per_quintal: trx.cost_price_per_quintal,
        profit: profit(trx),
    }
}

fn totals_of(rows: &[DetailRow]) -> Totals {
    let mut totals = Totals::default();
    for row in rows {
        totals.count += 1;
        totals.quantity += row.quantity;
        totals.amount += row.costs.net_realized;
        totals.paid += row.paid_amount;
        totals.pending += row.settlement.pending;
        totals.profit += row.profit;
    }
    totals
}

fn group_rows(rows: &[DetailRow], dimension: GroupBy) -> Vec<GroupRow> {
    let mut groups: BTreeMap<String, GroupRow> = BTreeMap::new();

    for row in rows {
        let key = match dimension {
            GroupBy::Grain => row.grain_name.clone(),
            GroupBy::Party => row.contact_name.clone(),
            GroupBy::Warehouse => row.warehouse_name.clone(),
            GroupBy::None => "All".to_string(),
        };

        let entry = groups.entry(key.clone()).or_insert_with(|| GroupRow {
            key,
            count: 0,
            quantity: Quintal::zero(),
            amount: Money::zero(),
            paid: Money::zero(),
            pending: Money::zero(),
            profit: Money::zero(),
        });

        entry.count += 1;
        entry.quantity += row.quantity;
        entry.amount += row.costs.net_realized;
        entry.paid += row.paid_amount;
        entry.pending += row.settlement.pending;
        entry.profit += row.profit;
    }

    groups.into_values().collect()
}
