//! Invoice view assembly
//!
//! Builds the data a bill renderer needs for one transaction group:
//! line items, the GST split, the settlement summary, payment history,
//! and the amount in words. Acquisition cost and profit are privileged
//! figures and have no field here; renderers cannot leak what they
//! never receive.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{Money, Quintal};
use domain_tax::{compute_tax, StateCode, TaxComputation};

use crate::error::TradeError;
use crate::party::{Contact, Grain};
use crate::payment::PaymentRecord;
use crate::settlement::{classify, Settlement};
use crate::transaction::{Transaction, TransactionType};
use crate::words::amount_in_words;

/// One line item on a bill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceLine {
    /// Row number on the bill
    pub serial: u32,
    /// Grain label, e.g. "Wheat (Gehu)"
    pub description: String,
    /// Bag count
    pub bags: u32,
    /// Kg per bag, recovered from quantity and bags; None shows a dash
    pub bharti_kg: Option<Decimal>,
    /// Quantity in quintals
    pub quantity: Quintal,
    /// Price per quintal
    pub rate_per_quintal: Money,
    /// Line value `quantity * rate`
    pub amount: Money,
}

/// One payment history row on a bill
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaymentLine {
    /// When the payment was taken
    pub date: DateTime<Utc>,
    /// Amount paid
    pub amount: Money,
}

/// Everything a bill renderer needs for one transaction group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceView {
    /// Bill number
    pub invoice_number: Option<u32>,
    /// Bill date (the group's lead row)
    pub date: DateTime<Utc>,
    /// Purchase or sale
    pub transaction_type: TransactionType,
    /// Counterparty name
    pub party_name: String,
    /// Counterparty GSTIN, when registered
    pub party_gstin: Option<String>,
    /// Counterparty state
    pub party_state: StateCode,
    /// Business registration state
    pub home_state: StateCode,
    /// Line items, one per warehouse row
    pub lines: Vec<InvoiceLine>,
    /// Total quantity across the group
    pub total_quantity: Quintal,
    /// Tax-inclusive bill total across the group
    pub grand_total: Money,
    /// Taxable base and GST lines for the grand total
    pub tax: TaxComputation,
    /// Settled position of the bill
    pub settlement: Settlement,
    /// Shortage recorded against the bill
    pub shortage_quantity: Quintal,
    /// Shortage valued at the bill rate
    pub shortage_value: Money,
    /// Flat deduction recorded against the bill
    pub deduction_amount: Money,
    /// Reason recorded for the deduction
    pub deduction_note: Option<String>,
    /// Payment history rows
    pub payments: Vec<PaymentLine>,
    /// Grand total spelled out, Indian numbering
    pub amount_in_words: String,
}

impl InvoiceView {
    /// Assembles the bill view for one transaction group.
    ///
    /// `rows` are the group's transaction rows (a single-row slice for
    /// plain transactions). Settlement adjustments ride on the group's
    /// lead row. For purchases the party state is the home state
    /// (self-supply); for sales it resolves from the buyer's GSTIN.
    ///
    /// # Errors
    ///
    /// Returns [`TradeError::EmptyBill`] when `rows` is empty.
    pub fn build(
        rows: &[Transaction],
        contact: &Contact,
        grain: &Grain,
        payments: &[PaymentRecord],
        home_state: StateCode,
    ) -> Result<Self, TradeError> {
        let main = rows.first().ok_or(TradeError::EmptyBill)?;
        let is_purchase = main.transaction_type == TransactionType::Purchase;

        let party_state = if is_purchase {
            home_state
        } else {
            StateCode::from_gstin(contact.gst_number.as_deref(), home_state)
        };

        let lines: Vec<InvoiceLine> = rows
            .iter()
            .enumerate()
            .map(|(i, row)| InvoiceLine {
                serial: i as u32 + 1,
                description: grain.bill_label(),
                bags: row.number_of_bags,
                bharti_kg: row.quantity.bharti_for(row.number_of_bags),
                quantity: row.quantity,
                rate_per_quintal: row.rate_per_quintal,
                amount: row.base_amount(),
            })
            .collect();

        let grand_total: Money = rows.iter().map(|r| r.total_amount).sum();
        let total_quantity: Quintal = rows.iter().map(|r| r.quantity).sum();

        let tax = compute_tax(grand_total, main.tax_percent, home_state, party_state);

        let shortage_value = main.shortage_quantity.amount_at(main.rate_per_quintal);
        let effective_total = if is_purchase {
            grand_total
        } else {
            grand_total - shortage_value - main.deduction_amount
        };
        let settlement = classify(effective_total, main.amount_paid);

        Ok(Self {
            invoice_number: main.invoice_number,
            date: main.date,
            transaction_type: main.transaction_type,
            party_name: contact.name.clone(),
            party_gstin: contact.gst_number.clone(),
            party_state,
            home_state,
            lines,
            total_quantity,
            grand_total,
            tax,
            settlement,
            shortage_quantity: main.shortage_quantity,
            shortage_value,
            deduction_amount: main.deduction_amount,
            deduction_note: main.deduction_note.clone(),
            payments: payments
                .iter()
                .map(|p| PaymentLine {
                    date: p.date,
                    amount: p.amount,
                })
                .collect(),
            amount_in_words: amount_in_words(grand_total),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::party::PartyType;
    use core_kernel::{ContactId, GrainId, SaleGroupId, TransactionId, WarehouseId};
    use domain_tax::TaxLevy;
    use rust_decimal_macros::dec;

    fn home() -> StateCode {
        StateCode::from("23")
    }

    fn grain() -> Grain {
        Grain::new(GrainId::new(1), "Wheat").with_hindi_name("Gehu")
    }

    fn buyer() -> Contact {
        Contact::new(ContactId::new(1), "Sharma Traders", PartyType::Buyer)
            .with_gst_number("23ABCDE1234F1Z5")
    }

    fn group_rows() -> Vec<Transaction> {
        let group = SaleGroupId::generate();
        let date = Utc::now();
        let sale = |id: i64, warehouse: i64, bags: u32| {
            Transaction::sale(
                TransactionId::new(id),
                date,
                GrainId::new(1),
                ContactId::new(1),
                WarehouseId::new(warehouse),
                bags,
                dec!(50),
                Money::new(dec!(2000)),
            )
            .with_invoice_number(7)
            .with_tax_percent(core_kernel::Rate::from_percentage(dec!(5)))
            .with_sale_group(group)
        };
        vec![sale(1, 1, 120), sale(2, 2, 80)]
    }

    #[test]
    fn test_empty_bill_is_rejected() {
        let result = InvoiceView::build(&[], &buyer(), &grain(), &[], home());
        assert_eq!(result.unwrap_err(), TradeError::EmptyBill);
    }

    #[test]
    fn test_group_bill_totals() {
        let rows = group_rows();
        let view = InvoiceView::build(&rows, &buyer(), &grain(), &[], home()).unwrap();

        // 120 + 80 bags at 50 kg = 100 Qtl at 2000 = 200000
        assert_eq!(view.lines.len(), 2);
        assert_eq!(view.total_quantity.value(), dec!(100));
        assert_eq!(view.grand_total.amount(), dec!(200000));
        assert_eq!(view.invoice_number, Some(7));
        assert_eq!(view.amount_in_words, "Two Lakh");
    }

    #[test]
    fn test_intra_state_buyer_gets_cgst_sgst() {
        let rows = group_rows();
        let view = InvoiceView::build(&rows, &buyer(), &grain(), &[], home()).unwrap();

        assert_eq!(view.tax.lines.len(), 2);
        assert_eq!(view.tax.lines[0].levy, TaxLevy::Cgst);
        assert_eq!(
            view.tax.taxable_amount.round_display().amount(),
            dec!(190476.19)
        );
    }

    #[test]
    fn test_line_items_carry_bharti() {
        let rows = group_rows();
        let view = InvoiceView::build(&rows, &buyer(), &grain(), &[], home()).unwrap();

        assert_eq!(view.lines[0].description, "Wheat (Gehu)");
        assert_eq!(view.lines[0].bharti_kg, Some(dec!(50)));
        assert_eq!(view.lines[0].serial, 1);
        assert_eq!(view.lines[1].serial, 2);
    }

    #[test]
    fn test_view_serializes_without_cost_fields() {
        let mut rows = group_rows();
        rows[0].cost_price_per_quintal = Money::new(dec!(1800));

        let view = InvoiceView::build(&rows, &buyer(), &grain(), &[], home()).unwrap();
        let json = serde_json::to_string(&view).unwrap();

        assert!(!json.contains("cost_price"));
        assert!(!json.contains("profit"));
    }
}
