//! Money types with precise decimal arithmetic
//!
//! Every amount in the grain ledger is a rupee value backed by
//! rust_decimal, so settlement math repeated over many partial payments
//! never accumulates floating-point error. Rounding to two decimal
//! places happens at the display boundary only.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// A rupee amount.
///
/// Money is a thin wrapper over `Decimal`. Arithmetic keeps full
/// precision; [`Money::round_display`] produces the 2-decimal figure
/// shown on bills and exports.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Rounding slack absorbed by paid/overpaid checks, in rupees.
    ///
    /// A balance within one rupee of zero counts as cleared. Downstream
    /// status labels depend on this exact width; do not tighten it.
    pub const SETTLEMENT_TOLERANCE: Decimal = dec!(1);

    /// Creates a new amount
    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// The zero amount
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Returns the raw decimal amount
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the amount is strictly positive
    pub fn is_positive(&self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    /// Returns true if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Returns the absolute value
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Rounds to the 2 decimal places used at presentation boundaries
    pub fn round_display(&self) -> Self {
        Self(self.0.round_dp(2))
    }

    /// Multiplies by a scalar (rates, quantities)
    pub fn multiply(&self, factor: Decimal) -> Self {
        Self(self.0 * factor)
    }

    /// True when this amount covers `target` within the settlement tolerance
    pub fn covers(&self, target: Money) -> bool {
        self.0 >= target.0 - Self::SETTLEMENT_TOLERANCE
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₹ {:.2}", self.0)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Mul<Decimal> for Money {
    type Output = Self;

    fn mul(self, factor: Decimal) -> Self {
        self.multiply(factor)
    }
}

impl Div<Decimal> for Money {
    type Output = Self;

    fn div(self, divisor: Decimal) -> Self {
        Self(self.0 / divisor)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

/// A percentage rate (e.g. a GST rate)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Rate {
    /// The rate as a decimal fraction (0.05 for 5%)
    value: Decimal,
}

impl Rate {
    /// Creates a rate from a decimal fraction (0.05 for 5%)
    pub fn new(value: Decimal) -> Self {
        Self { value }
    }

    /// Creates a rate from a percentage figure (5.0 for 5%)
    pub fn from_percentage(percentage: Decimal) -> Self {
        Self {
            value: percentage / dec!(100),
        }
    }

    /// The zero rate
    pub fn zero() -> Self {
        Self {
            value: Decimal::ZERO,
        }
    }

    /// Returns the rate as a decimal fraction
    pub fn as_decimal(&self) -> Decimal {
        self.value
    }

    /// Returns the rate as a percentage figure
    pub fn as_percentage(&self) -> Decimal {
        self.value * dec!(100)
    }

    /// Returns true for the zero rate
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Splits the rate in two, as for the CGST/SGST halves of a GST levy
    pub fn half(&self) -> Self {
        Self {
            value: self.value / dec!(2),
        }
    }

    /// Applies this rate to an amount
    pub fn apply(&self, money: &Money) -> Money {
        money.multiply(self.value)
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_percentage().normalize())
    }
}
