//! Settlement scenarios and properties

use chrono::Utc;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{ContactId, GrainId, Money, Quintal, TransactionId, WarehouseId};
use domain_trade::{
    record_payment, settle, PaymentStatus, Transaction, TradeError,
};

fn sale_200k() -> Transaction {
    // 200 bags at 50 kg = 100 Qtl at ₹2000 = ₹200000
    Transaction::sale(
        TransactionId::new(1),
        Utc::now(),
        GrainId::new(1),
        ContactId::new(1),
        WarehouseId::new(1),
        200,
        dec!(50),
        Money::new(dec!(2000)),
    )
}

#[test]
fn settled_sale_with_shortage_and_deduction() {
    let mut trx = sale_200k();
    trx.shortage_quantity = Quintal::new(dec!(2));
    trx.deduction_amount = Money::new(dec!(500));

    // 200000 - 4000 - 500 = 195500
    let fully_paid = settle(&trx, Money::new(dec!(195500)));
    assert_eq!(fully_paid.effective_total.amount(), dec!(195500));
    assert_eq!(fully_paid.status, PaymentStatus::Paid);
    assert!(fully_paid.pending.is_zero());

    let partial = settle(&trx, Money::new(dec!(100000)));
    assert_eq!(partial.status, PaymentStatus::Partial);
    assert_eq!(partial.pending.amount(), dec!(95500));

    let untouched = settle(&trx, Money::zero());
    assert_eq!(untouched.status, PaymentStatus::Pending);
}

#[test]
fn paid_within_one_rupee_counts_as_paid() {
    let trx = sale_200k();

    assert_eq!(
        settle(&trx, Money::new(dec!(199999))).status,
        PaymentStatus::Paid
    );
    assert_eq!(
        settle(&trx, Money::new(dec!(199998.99))).status,
        PaymentStatus::Partial
    );
}

#[test]
fn negative_effective_total_is_settled_without_payment() {
    let mut trx = sale_200k();
    trx.deduction_amount = Money::new(dec!(250000));

    let settlement = settle(&trx, Money::zero());
    assert!(settlement.effective_total.is_negative());
    assert_eq!(settlement.status, PaymentStatus::Paid);
}

#[test]
fn second_overpayment_fails_after_a_recorded_payment() {
    let mut trx = sale_200k();

    let new_paid = record_payment(&trx, Money::new(dec!(120000))).unwrap();
    trx.amount_paid = new_paid;

    let pending = settle(&trx, trx.amount_paid).pending;
    assert_eq!(pending.amount(), dec!(80000));

    let attempted = Money::new(dec!(80002));
    match record_payment(&trx, attempted) {
        Err(TradeError::Overpayment { pending: p, .. }) => {
            assert_eq!(p.amount(), dec!(80000));
        }
        other => panic!("expected overpayment, got {other:?}"),
    }
}

proptest! {
    // After a successful payment, pending shrinks by exactly that amount.
    #[test]
    fn payment_monotonicity(
        total_rupees in 1_000i64..10_000_000i64,
        paid_rupees in 0i64..10_000_000i64,
        amount_rupees in 1i64..10_000_000i64
    ) {
        let mut trx = sale_200k();
        trx.total_amount = Money::new(Decimal::from(total_rupees));
        trx.amount_paid = Money::new(Decimal::from(paid_rupees));

        let before = settle(&trx, trx.amount_paid);
        let amount = Money::new(Decimal::from(amount_rupees));

        if let Ok(new_paid) = record_payment(&trx, amount) {
            prop_assert_eq!(new_paid, trx.amount_paid + amount);

            let after = settle(&trx, new_paid);
            prop_assert_eq!(after.pending, before.pending - amount);

            // Anything past the new pending plus tolerance must fail
            let mut paid_up = trx.clone();
            paid_up.amount_paid = new_paid;
            let too_much = after.pending + Money::new(dec!(1.01));
            if too_much.is_positive() {
                prop_assert!(record_payment(&paid_up, too_much).is_err());
            }
        } else {
            // Rejected payments must exceed pending plus tolerance
            prop_assert!(amount.amount() > before.pending.amount() + Money::SETTLEMENT_TOLERANCE);
        }
    }

    // settle is a pure function: same inputs, same outputs.
    #[test]
    fn settlement_idempotence(
        total_rupees in 0i64..10_000_000i64,
        paid_rupees in 0i64..10_000_000i64
    ) {
        let mut trx = sale_200k();
        trx.total_amount = Money::new(Decimal::from(total_rupees));
        let paid = Money::new(Decimal::from(paid_rupees));

        prop_assert_eq!(settle(&trx, paid), settle(&trx, paid));
    }
}
