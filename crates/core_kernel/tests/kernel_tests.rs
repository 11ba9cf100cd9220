//! Kernel value-type behavior across module boundaries

use rust_decimal_macros::dec;

use core_kernel::{GrainId, Money, Quintal, Rate, SaleGroupId, TransactionId};

#[test]
fn money_keeps_precision_until_display() {
    // 200000 / 1.05 has a long tail; nothing rounds until display
    let gross = Money::new(dec!(200000));
    let taxable = gross / dec!(1.05);
    let tax = gross - taxable;

    assert_eq!(taxable + tax, gross);
    assert_eq!(taxable.round_display().amount(), dec!(190476.19));
}

#[test]
fn repeated_partial_payments_close_within_tolerance() {
    let owed = Money::new(dec!(99999.80));

    let mut paid = Money::zero();
    for _ in 0..3 {
        paid += Money::new(dec!(33333));
    }

    // 99999 paid against 99999.80: within the one-rupee tolerance
    assert!(paid.covers(owed));
    assert!(!Money::new(dec!(99998)).covers(owed));
}

#[test]
fn rate_halving_splits_a_levy() {
    let gst = Rate::from_percentage(dec!(5));
    let half = gst.half();

    assert_eq!(half.as_percentage(), dec!(2.5));
    assert_eq!(
        half.apply(&Money::new(dec!(1000))) + half.apply(&Money::new(dec!(1000))),
        gst.apply(&Money::new(dec!(1000)))
    );
}

#[test]
fn bag_arithmetic_round_trips_through_quintals() {
    // 350 bags at 58.5 kg plus 45 kg loose
    let qty = Quintal::from_bags_and_loose(350, dec!(58.5), dec!(45));

    assert_eq!(qty.to_kg(), dec!(20520));
    assert_eq!(qty.value(), dec!(205.20));
    assert_eq!(qty.amount_at(Money::new(dec!(2000))).amount(), dec!(410400));
}

#[test]
fn identifiers_display_with_prefixes() {
    assert_eq!(GrainId::new(3).to_string(), "GRN-3");
    assert_eq!(TransactionId::unassigned().value(), 0);

    let group = SaleGroupId::generate();
    let parsed: SaleGroupId = group.to_string().parse().unwrap();
    assert_eq!(group, parsed);
}
