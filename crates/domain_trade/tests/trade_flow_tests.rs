//! End-to-end trade flow: bulk sale → settlement edit → bill view

use chrono::Utc;
use rust_decimal_macros::dec;

use core_kernel::{ContactId, GrainId, Money, Quintal, Rate, TransactionId, WarehouseId};
use domain_tax::StateCode;
use domain_trade::{
    apply_settlement_edit, average_purchase_cost, next_invoice_number, plan_bulk_sale,
    BulkSaleOrder, Contact, Grain, InvoiceView, PartyType, PaymentStatus, SettlementEdit,
    Transaction, TransactionType, WarehouseAllocation,
};

fn purchase_history() -> Vec<Transaction> {
    let mut first = Transaction::purchase(
        TransactionId::new(1),
        Utc::now(),
        GrainId::new(1),
        ContactId::new(2),
        WarehouseId::new(1),
        200,
        dec!(100),
        Money::new(dec!(2000)),
        Money::new(dec!(3)),
    );
    first.invoice_number = Some(11);

    let mut second = Transaction::purchase(
        TransactionId::new(2),
        Utc::now(),
        GrainId::new(1),
        ContactId::new(3),
        WarehouseId::new(2),
        200,
        dec!(100),
        Money::new(dec!(2400)),
        Money::new(dec!(3)),
    );
    second.invoice_number = Some(12);

    vec![first, second]
}

#[test]
fn bulk_sale_rows_carry_weighted_cost_and_one_bill() {
    let history = purchase_history();

    // 200 Qtl at 2000 + 200 Qtl at 2400 → 2200 weighted
    let avg_cost = average_purchase_cost(&history, GrainId::new(1));
    assert_eq!(avg_cost.amount(), dec!(2200));

    let order = BulkSaleOrder {
        contact_id: ContactId::new(9),
        grain_id: GrainId::new(1),
        rate_per_quintal: Money::new(dec!(2500)),
        bharti_kg: dec!(50),
        tax_percent: Rate::zero(),
        allocations: vec![
            WarehouseAllocation {
                warehouse_id: WarehouseId::new(1),
                bags: 120,
            },
            WarehouseAllocation {
                warehouse_id: WarehouseId::new(2),
                bags: 80,
            },
        ],
        transporter_name: Some("Verma Roadlines".to_string()),
        destination: Some("Indore".to_string()),
        driver_name: Some("Ram Singh".to_string()),
        vehicle_number: Some("MP-21-AB-1234".to_string()),
    };

    let invoice_number = next_invoice_number(&history, TransactionType::Sale);
    assert_eq!(invoice_number, 1);

    let rows = plan_bulk_sale(&order, Utc::now(), avg_cost, invoice_number);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].sale_group_id, rows[1].sale_group_id);

    let group_total: Money = rows.iter().map(|r| r.total_amount).sum();
    // 100 Qtl at 2500
    assert_eq!(group_total.amount(), dec!(250000));
}

#[test]
fn settlement_edit_then_bill_view_agree() {
    let history = purchase_history();
    let avg_cost = average_purchase_cost(&history, GrainId::new(1));

    let order = BulkSaleOrder {
        contact_id: ContactId::new(9),
        grain_id: GrainId::new(1),
        rate_per_quintal: Money::new(dec!(2500)),
        bharti_kg: dec!(50),
        tax_percent: Rate::from_percentage(dec!(5)),
        allocations: vec![WarehouseAllocation {
            warehouse_id: WarehouseId::new(1),
            bags: 200,
        }],
        transporter_name: None,
        destination: None,
        driver_name: None,
        vehicle_number: None,
    };

    let mut rows = plan_bulk_sale(&order, Utc::now(), avg_cost, 1);

    // Post-delivery: 1 Qtl short, ₹1000 quality cut, close the bill
    let edit = SettlementEdit {
        shortage_quantity: Quintal::new(dec!(1)),
        deduction_amount: Money::new(dec!(1000)),
        deduction_note: Some("Moisture cut".to_string()),
    };
    let outcome = apply_settlement_edit(&rows[0], edit, true).unwrap();

    // 250000 - 2500 - 1000 = 246500, all posted as the closing payment
    let payment = outcome.closing_payment.clone().unwrap();
    assert_eq!(payment.amount.amount(), dec!(246500));
    assert_eq!(outcome.settlement.status, PaymentStatus::Paid);

    rows[0] = outcome.transaction;

    let buyer = Contact::new(ContactId::new(9), "Sharma Traders", PartyType::Buyer)
        .with_gst_number("23ABCDE1234F1Z5");
    let grain = Grain::new(GrainId::new(1), "Wheat").with_hindi_name("Gehu");

    let view = InvoiceView::build(
        &rows,
        &buyer,
        &grain,
        &[payment],
        StateCode::from("23"),
    )
    .unwrap();

    assert_eq!(view.grand_total.amount(), dec!(250000));
    assert_eq!(view.settlement.effective_total.amount(), dec!(246500));
    assert_eq!(view.settlement.status, PaymentStatus::Paid);
    assert_eq!(view.payments.len(), 1);
    assert_eq!(view.amount_in_words, "Two Lakh Fifty Thousand");
    assert_eq!(view.tax.lines.len(), 2);
}
