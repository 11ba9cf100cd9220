//! Custom Test Assertions
//!
//! Assertion helpers for domain types that give more meaningful error
//! messages than standard assertions.

use rust_decimal::Decimal;

use core_kernel::Money;

/// Asserts that two Money values are equal within a tolerance
///
/// # Panics
///
/// Panics if the amounts differ by more than `tolerance`
pub fn assert_money_approx_eq(actual: Money, expected: Money, tolerance: Decimal) {
    let diff = (actual.amount() - expected.amount()).abs();
    assert!(
        diff <= tolerance,
        "Money amounts differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual.amount(),
        expected.amount(),
        diff,
        tolerance
    );
}

/// Asserts that a Money value is strictly positive
pub fn assert_money_positive(money: Money) {
    assert!(money.is_positive(), "Expected positive money, got {money}");
}

/// Asserts that a Money value is zero
pub fn assert_money_zero(money: Money) {
    assert!(money.is_zero(), "Expected zero money, got {money}");
}
