//! Transport ledger report
//!
//! Joins each dispatch record to its sale group's lead transaction for
//! date and bill context, then reconciles the freight position. An
//! orphan dispatch (no transactions in its sale group) loses its row,
//! not the report.

use tracing::warn;

use domain_dispatch::{reconcile, DispatchRecord};
use domain_trade::Transaction;

use crate::error::ReportError;
use crate::row::TransportRow;

/// Builds the transport report, newest dispatch first
pub fn transport_report(
    dispatches: &[DispatchRecord],
    transactions: &[Transaction],
) -> Vec<TransportRow> {
    let mut rows: Vec<TransportRow> = dispatches
        .iter()
        .filter_map(|d| match transport_row(d, transactions) {
            Ok(row) => Some(row),
            Err(err) => {
                warn!(dispatch_id = d.id.value(), %err, "skipping dispatch row");
                None
            }
        })
        .collect();

    rows.sort_by(|a, b| b.date.cmp(&a.date));
    rows
}

fn transport_row(
    dispatch: &DispatchRecord,
    transactions: &[Transaction],
) -> Result<TransportRow, ReportError> {
    let lead = transactions
        .iter()
        .find(|t| t.sale_group_id == Some(dispatch.sale_group_id))
        .ok_or(ReportError::OrphanDispatch(dispatch.id))?;

    let balance = reconcile(dispatch);

    Ok(TransportRow {
        dispatch_id: dispatch.id,
        date: lead.date,
        invoice_number: lead.invoice_number,
        transporter_name: dispatch.transporter_name.clone(),
        vehicle_number: dispatch.vehicle_number.clone(),
        total_weight: dispatch.total_weight,
        rate: dispatch.rate,
        gross_freight: dispatch.gross_freight,
        advance_paid: dispatch.advance_paid,
        delivery_paid: dispatch.delivery_paid,
        shortage_deduction: dispatch.shortage_deduction,
        other_deduction: dispatch.other_deduction,
        total_deduction: dispatch.total_deduction(),
        balance_pending: balance.balance_pending,
        status: balance.status,
    })
}
