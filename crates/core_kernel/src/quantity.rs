//! Grain quantities in quintals
//!
//! The quintal (100 kg) is the canonical unit throughout the ledger.
//! Stock arrives counted in bags; the bharti (kg packed per bag)
//! converts bag counts to weight, with any loose grain added directly
//! in kilograms.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use crate::money::Money;

/// Kilograms per quintal
pub const KG_PER_QUINTAL: Decimal = dec!(100);

/// A quantity of grain in quintals (1 quintal = 100 kg)
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Quintal(Decimal);

impl Quintal {
    /// Creates a quantity from a quintal figure
    pub fn new(quintals: Decimal) -> Self {
        Self(quintals)
    }

    /// The zero quantity
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Converts a bag count to quintals via the bharti (kg per bag)
    pub fn from_bags(bags: u32, bharti_kg: Decimal) -> Self {
        Self(Decimal::from(bags) * bharti_kg / KG_PER_QUINTAL)
    }

    /// Converts bags plus loose grain (kg outside any bag) to quintals
    pub fn from_bags_and_loose(bags: u32, bharti_kg: Decimal, loose_kg: Decimal) -> Self {
        Self::from_bags(bags, bharti_kg) + Self::from_kg(loose_kg)
    }

    /// Converts a kilogram figure to quintals
    pub fn from_kg(kg: Decimal) -> Self {
        Self(kg / KG_PER_QUINTAL)
    }

    /// Returns the quantity as a decimal quintal figure
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Returns the quantity in kilograms
    pub fn to_kg(&self) -> Decimal {
        self.0 * KG_PER_QUINTAL
    }

    /// Returns true if the quantity is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the quantity is strictly positive
    pub fn is_positive(&self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    /// Values this quantity at a per-quintal rate
    pub fn amount_at(&self, rate_per_quintal: Money) -> Money {
        rate_per_quintal.multiply(self.0)
    }

    /// Recovers the bharti (kg per bag) implied by a bag count.
    ///
    /// Returns `None` for a zero bag count; bills show a dash there.
    pub fn bharti_for(&self, bags: u32) -> Option<Decimal> {
        if bags == 0 {
            return None;
        }
        Some(self.to_kg() / Decimal::from(bags))
    }
}

impl fmt::Display for Quintal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} Qtl", self.0)
    }
}

impl Add for Quintal {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Quintal {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Quintal {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Quintal {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Quintal {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Sum for Quintal {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Quintal::zero(), |acc, q| acc + q)
    }
}

impl From<Decimal> for Quintal {
    fn from(quintals: Decimal) -> Self {
        Self(quintals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bags() {
        // 500 bags at 60 kg each = 30,000 kg = 300 quintals
        let q = Quintal::from_bags(500, dec!(60));
        assert_eq!(q.value(), dec!(300));
        assert_eq!(q.to_kg(), dec!(30000));
    }

    #[test]
    fn test_from_bags_and_loose() {
        let q = Quintal::from_bags_and_loose(10, dec!(50), dec!(35));
        assert_eq!(q.value(), dec!(5.35));
    }

    #[test]
    fn test_amount_at_rate() {
        let q = Quintal::new(dec!(100));
        let amount = q.amount_at(Money::new(dec!(2000)));
        assert_eq!(amount.amount(), dec!(200000));
    }

    #[test]
    fn test_bharti_round_trip() {
        let q = Quintal::from_bags(40, dec!(55.5));
        assert_eq!(q.bharti_for(40), Some(dec!(55.5)));
    }

    #[test]
    fn test_bharti_zero_bags() {
        assert_eq!(Quintal::new(dec!(12)).bharti_for(0), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Quintal::new(dec!(12.5)).to_string(), "12.50 Qtl");
    }
}
