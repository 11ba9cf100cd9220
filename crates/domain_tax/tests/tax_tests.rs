//! Scenario tests for GST computation

use rust_decimal_macros::dec;

use core_kernel::{Money, Rate};
use domain_tax::{compute_tax, StateCode, TaxLevy};

fn home() -> StateCode {
    StateCode::from("23")
}

#[test]
fn intra_state_sale_at_five_percent() {
    // 100 Qtl at ₹2000/Qtl, 5% GST, buyer registered in the home state
    let result = compute_tax(
        Money::new(dec!(200000)),
        Rate::from_percentage(dec!(5)),
        home(),
        StateCode::from_gstin(Some("23BEKPN1849B1ZQ"), home()),
    );

    assert_eq!(result.taxable_amount.round_display().amount(), dec!(190476.19));

    assert_eq!(result.lines.len(), 2);
    assert_eq!(result.lines[0].levy, TaxLevy::Cgst);
    assert_eq!(result.lines[1].levy, TaxLevy::Sgst);
    assert_eq!(result.lines[0].amount.round_display().amount(), dec!(4761.90));
    assert_eq!(result.lines[1].amount.round_display().amount(), dec!(4761.90));

    // Base and levies reassemble the gross exactly before rounding
    assert_eq!(
        result.taxable_amount + result.lines[0].amount + result.lines[1].amount,
        Money::new(dec!(200000))
    );
}

#[test]
fn inter_state_sale_charges_single_igst_line() {
    let result = compute_tax(
        Money::new(dec!(200000)),
        Rate::from_percentage(dec!(5)),
        home(),
        StateCode::from_gstin(Some("27AAACM1234A1Z5"), home()),
    );

    assert_eq!(result.lines.len(), 1);
    assert_eq!(result.lines[0].levy, TaxLevy::Igst);
    assert_eq!(result.lines[0].rate.as_percentage(), dec!(5));
    assert_eq!(result.lines[0].amount.round_display().amount(), dec!(9523.81));
}

#[test]
fn unregistered_buyer_is_treated_as_intra_state() {
    let result = compute_tax(
        Money::new(dec!(100000)),
        Rate::from_percentage(dec!(5)),
        home(),
        StateCode::from_gstin(None, home()),
    );

    assert_eq!(result.lines.len(), 2);
}

#[test]
fn exempt_grain_produces_no_tax_lines() {
    let result = compute_tax(Money::new(dec!(75000)), Rate::zero(), home(), home());

    assert!(result.is_exempt());
    assert_eq!(result.taxable_amount, Money::new(dec!(75000)));
}
