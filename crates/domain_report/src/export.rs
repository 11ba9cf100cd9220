//! Format-agnostic export tables
//!
//! Reports export as a plain `{headers, rows, totals}` table of
//! strings; CSV and PDF renderers consume it verbatim and never
//! recompute a business number. Numeric values are rounded to two
//! decimal places here, at the boundary.
//!
//! Profit and acquisition-cost columns are privileged: they appear
//! only when the caller's role grants them, passed explicitly rather
//! than read from ambient state.

use serde::{Deserialize, Serialize};

use core_kernel::{Money, Quintal};

use crate::aggregator::Report;
use crate::error::ReportError;
use crate::row::{GroupRow, TransportRow};

/// Who is looking at the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Sees internal margin figures
    Admin,
    /// Operates day-to-day entry; margin columns withheld
    Worker,
}

/// Which privileged columns a report surface may carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSet {
    /// Include profit and acquisition-cost columns
    pub profit_columns: bool,
}

impl FieldSet {
    /// The columns visible to a role
    pub fn for_role(role: Role) -> Self {
        Self {
            profit_columns: role == Role::Admin,
        }
    }
}

/// A rendered table: headers, one row of cells per record, and a
/// totals row summing every numeric column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportTable {
    /// Column headers
    pub headers: Vec<String>,
    /// Data rows
    pub rows: Vec<Vec<String>>,
    /// Elementwise totals row
    pub totals: Vec<String>,
}

fn money(m: Money) -> String {
    format!("{:.2}", m.amount())
}

fn qty(q: Quintal) -> String {
    format!("{:.2}", q.value())
}

/// Builds the export table for a report: grouped when a grouping
/// dimension was active, detailed otherwise
pub fn to_table(report: &Report, fields: &FieldSet) -> ExportTable {
    match &report.groups {
        Some(groups) => group_table(groups, report, fields),
        None => detail_table(report, fields),
    }
}

fn detail_table(report: &Report, fields: &FieldSet) -> ExportTable {
    let mut headers: Vec<String> = [
        "Date",
        "Invoice",
        "Party",
        "Grain",
        "Bags",
        "Qty",
        "Rate",
        "Gross",
        "Shortage",
        "Deduction",
        "Labour",
        "Transport",
        "Mandi",
        "Net Realized",
        "Paid",
        "Pending",
        "Status",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    if fields.profit_columns {
        headers.push("Avg Cost".to_string());
        headers.push("Profit".to_string());
    }

    let rows: Vec<Vec<String>> = report
        .rows
        .iter()
        .map(|r| {
            let mut cells = vec![
                r.date.format("%Y-%m-%d").to_string(),
                r.invoice_number.map(|n| n.to_string()).unwrap_or_else(|| "-".to_string()),
                r.contact_name.clone(),
                r.grain_name.clone(),
                r.bags.to_string(),
                qty(r.quantity),
                money(r.rate_per_quintal),
                money(r.costs.base_amount),
                money(r.costs.shortage_cost),
                money(r.costs.deduction_cost),
                money(r.costs.labour_cost_total),
                money(r.costs.transport_cost_total),
                money(r.costs.mandi_cost),
                money(r.costs.net_realized),
                money(r.paid_amount),
                money(r.settlement.pending),
                r.settlement.status.label().to_string(),
            ];
            if fields.profit_columns {
                cells.push(money(r.cost_price_per_quintal));
                cells.push(money(r.profit));
            }
            cells
        })
        .collect();

    let mut bags_total: u64 = 0;
    let mut gross = Money::zero();
    let mut shortage = Money::zero();
    let mut deduction = Money::zero();
    let mut labour = Money::zero();
    let mut transport = Money::zero();
    let mut mandi = Money::zero();
    for r in &report.rows {
        bags_total += u64::from(r.bags);
        gross += r.costs.base_amount;
        shortage += r.costs.shortage_cost;
        deduction += r.costs.deduction_cost;
        labour += r.costs.labour_cost_total;
        transport += r.costs.transport_cost_total;
        mandi += r.costs.mandi_cost;
    }

    let mut totals = vec![
        "TOTAL".to_string(),
        String::new(),
        String::new(),
        String::new(),
        bags_total.to_string(),
        qty(report.totals.quantity),
        String::new(),
        money(gross),
        money(shortage),
        money(deduction),
        money(labour),
        money(transport),
        money(mandi),
        money(report.totals.amount),
        money(report.totals.paid),
        money(report.totals.pending),
        String::new(),
    ];
    if fields.profit_columns {
        totals.push(String::new());
        totals.push(money(report.totals.profit));
    }

    ExportTable {
        headers,
        rows,
        totals,
    }
}

fn group_table(groups: &[GroupRow], report: &Report, fields: &FieldSet) -> ExportTable {
    let mut headers: Vec<String> = [
        "Group Name",
        "Count",
        "Total Qty",
        "Total Amount",
        "Paid",
        "Pending",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    if fields.profit_columns {
        headers.push("Total Profit".to_string());
    }

    let rows: Vec<Vec<String>> = groups
        .iter()
        .map(|g| {
            let mut cells = vec![
                g.key.clone(),
                g.count.to_string(),
                qty(g.quantity),
                money(g.amount),
                money(g.paid),
                money(g.pending),
            ];
            if fields.profit_columns {
                cells.push(money(g.profit));
            }
            cells
        })
        .collect();

    let mut totals = vec![
        "TOTAL".to_string(),
        report.totals.count.to_string(),
        qty(report.totals.quantity),
        money(report.totals.amount),
        money(report.totals.paid),
        money(report.totals.pending),
    ];
    if fields.profit_columns {
        totals.push(money(report.totals.profit));
    }

    ExportTable {
        headers,
        rows,
        totals,
    }
}

/// Builds the export table for the transport ledger
pub fn transport_table(rows: &[TransportRow]) -> ExportTable {
    let headers: Vec<String> = [
        "Date",
        "Invoice",
        "Transporter",
        "Vehicle",
        "Weight",
        "Rate",
        "Gross Freight",
        "Advance",
        "Delivery",
        "Shortage Ded",
        "Other Ded",
        "Total Ded",
        "Balance",
        "Status",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|r| {
            vec![
                r.date.format("%Y-%m-%d").to_string(),
                r.invoice_number.map(|n| n.to_string()).unwrap_or_else(|| "-".to_string()),
                r.transporter_name.clone(),
                r.vehicle_number.clone().unwrap_or_else(|| "-".to_string()),
                qty(r.total_weight),
                money(r.rate),
                money(r.gross_freight),
                money(r.advance_paid),
                money(r.delivery_paid),
                money(r.shortage_deduction),
                money(r.other_deduction),
                money(r.total_deduction),
                money(r.balance_pending),
                r.status.label().to_string(),
            ]
        })
        .collect();

    let mut weight = Quintal::zero();
    let mut gross = Money::zero();
    let mut advance = Money::zero();
    let mut delivery = Money::zero();
    let mut shortage = Money::zero();
    let mut other = Money::zero();
    let mut total_ded = Money::zero();
    let mut balance = Money::zero();
    for r in rows {
        weight += r.total_weight;
        gross += r.gross_freight;
        advance += r.advance_paid;
        delivery += r.delivery_paid;
        shortage += r.shortage_deduction;
        other += r.other_deduction;
        total_ded += r.total_deduction;
        balance += r.balance_pending;
    }

    let totals = vec![
        "TOTAL".to_string(),
        String::new(),
        String::new(),
        String::new(),
        qty(weight),
        String::new(),
        money(gross),
        money(advance),
        money(delivery),
        money(shortage),
        money(other),
        money(total_ded),
        money(balance),
        String::new(),
    ];

    ExportTable {
        headers,
        rows: cells,
        totals,
    }
}

/// Renders an export table as CSV text.
///
/// File writing and sharing stay with the caller; the engine only
/// produces the text.
pub fn render_csv(table: &ExportTable) -> Result<String, ReportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(&table.headers)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer.write_record(&table.totals)?;

    let bytes = writer
        .into_inner()
        .map_err(|e| ReportError::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ReportError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::Totals;

    fn empty_report(groups: Option<Vec<GroupRow>>) -> Report {
        Report {
            rows: Vec::new(),
            groups,
            totals: Totals::default(),
        }
    }

    #[test]
    fn test_field_set_for_roles() {
        assert!(FieldSet::for_role(Role::Admin).profit_columns);
        assert!(!FieldSet::for_role(Role::Worker).profit_columns);
    }

    #[test]
    fn test_worker_detail_table_hides_profit_columns() {
        let table = to_table(&empty_report(None), &FieldSet::for_role(Role::Worker));
        assert!(!table.headers.iter().any(|h| h == "Profit"));
        assert!(!table.headers.iter().any(|h| h == "Avg Cost"));
    }

    #[test]
    fn test_admin_detail_table_shows_profit_columns() {
        let table = to_table(&empty_report(None), &FieldSet::for_role(Role::Admin));
        assert_eq!(table.headers.last().map(String::as_str), Some("Profit"));
        assert_eq!(table.headers.len(), table.totals.len());
    }

    #[test]
    fn test_grouped_report_renders_group_table() {
        let table = to_table(
            &empty_report(Some(Vec::new())),
            &FieldSet::for_role(Role::Admin),
        );
        assert_eq!(table.headers[0], "Group Name");
    }

    #[test]
    fn test_render_csv_shape() {
        let table = ExportTable {
            headers: vec!["A".to_string(), "B".to_string()],
            rows: vec![vec!["1".to_string(), "x,y".to_string()]],
            totals: vec!["TOTAL".to_string(), "1".to_string()],
        };

        let csv_text = render_csv(&table).unwrap();
        let lines: Vec<&str> = csv_text.trim_end().lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "A,B");
        // Embedded comma is quoted, values untouched
        assert_eq!(lines[1], "1,\"x,y\"");
    }
}
