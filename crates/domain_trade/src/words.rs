//! Rupee amounts in words, Indian numbering
//!
//! Bills print the grand total as words: crores, lakhs, thousands,
//! hundreds. Only the whole-rupee part is spelled out.

use rust_decimal::prelude::ToPrimitive;

use core_kernel::Money;

const UNITS: [&str; 20] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Eleven",
    "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen", "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

fn under_thousand(num: u64) -> String {
    let mut parts = Vec::new();
    let mut n = num;

    if n > 99 {
        parts.push(format!("{} Hundred", UNITS[(n / 100) as usize]));
        n %= 100;
    }
    if n > 0 {
        if n < 20 {
            parts.push(UNITS[n as usize].to_string());
        } else {
            let tens = TENS[(n / 10) as usize];
            if n % 10 > 0 {
                parts.push(format!("{} {}", tens, UNITS[(n % 10) as usize]));
            } else {
                parts.push(tens.to_string());
            }
        }
    }

    parts.join(" ")
}

/// Spells out the whole-rupee part of an amount in the Indian system.
///
/// Non-positive amounts read "Zero"; paise are dropped (the numeric
/// figure beside the words carries them).
pub fn amount_in_words(amount: Money) -> String {
    let rounded = amount.round_display().amount();
    if rounded.is_sign_negative() || rounded.is_zero() {
        return "Zero".to_string();
    }

    let mut whole = rounded.trunc().to_u64().unwrap_or(0);
    if whole == 0 {
        return "Zero".to_string();
    }

    let mut parts = Vec::new();

    if whole >= 10_000_000 {
        parts.push(format!("{} Crore", under_thousand(whole / 10_000_000)));
        whole %= 10_000_000;
    }
    if whole >= 100_000 {
        parts.push(format!("{} Lakh", under_thousand(whole / 100_000)));
        whole %= 100_000;
    }
    if whole >= 1_000 {
        parts.push(format!("{} Thousand", under_thousand(whole / 1_000)));
        whole %= 1_000;
    }
    if whole > 0 {
        parts.push(under_thousand(whole));
    }

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn words(n: rust_decimal::Decimal) -> String {
        amount_in_words(Money::new(n))
    }

    #[test]
    fn test_small_numbers() {
        assert_eq!(words(dec!(0)), "Zero");
        assert_eq!(words(dec!(7)), "Seven");
        assert_eq!(words(dec!(13)), "Thirteen");
        assert_eq!(words(dec!(42)), "Forty Two");
        assert_eq!(words(dec!(90)), "Ninety");
    }

    #[test]
    fn test_hundreds() {
        assert_eq!(words(dec!(100)), "One Hundred");
        assert_eq!(words(dec!(365)), "Three Hundred Sixty Five");
    }

    #[test]
    fn test_indian_grouping() {
        assert_eq!(words(dec!(1000)), "One Thousand");
        assert_eq!(words(dec!(200000)), "Two Lakh");
        assert_eq!(
            words(dec!(195500)),
            "One Lakh Ninety Five Thousand Five Hundred"
        );
        assert_eq!(words(dec!(10000000)), "One Crore");
        assert_eq!(
            words(dec!(12345678)),
            "One Crore Twenty Three Lakh Forty Five Thousand Six Hundred Seventy Eight"
        );
    }

    #[test]
    fn test_paise_are_dropped() {
        assert_eq!(words(dec!(2500.75)), "Two Thousand Five Hundred");
    }

    #[test]
    fn test_negative_reads_zero() {
        assert_eq!(words(dec!(-150)), "Zero");
    }
}
