//! GST computation
//!
//! Invoice totals are stored tax-inclusive, so the taxable base is
//! back-derived from the gross: `taxable = gross / (1 + rate/100)`.
//! Intra-state supply splits the levy into equal CGST and SGST halves;
//! inter-state supply charges IGST at the full rate.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::{Money, Rate};

use crate::state::StateCode;

/// The GST levies that can appear on a bill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaxLevy {
    /// Central GST (half rate, intra-state)
    Cgst,
    /// State GST (half rate, intra-state)
    Sgst,
    /// Integrated GST (full rate, inter-state)
    Igst,
}

impl TaxLevy {
    /// Returns the label printed on bills
    pub fn label(&self) -> &'static str {
        match self {
            TaxLevy::Cgst => "CGST",
            TaxLevy::Sgst => "SGST",
            TaxLevy::Igst => "IGST",
        }
    }
}

/// One tax line on a bill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxLine {
    /// Which levy this line charges
    pub levy: TaxLevy,
    /// The levy's rate
    pub rate: Rate,
    /// The levy's amount
    pub amount: Money,
}

/// The tax split for one bill
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxComputation {
    /// Gross amount before back-deriving tax
    pub grand_total: Money,
    /// Taxable base: `grand_total / (1 + rate/100)`
    pub taxable_amount: Money,
    /// Total tax: `grand_total - taxable_amount`
    pub total_tax: Money,
    /// Tax lines; empty when the rate is zero
    pub lines: Vec<TaxLine>,
}

impl TaxComputation {
    /// Returns true when the bill carries no tax line
    pub fn is_exempt(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Computes the tax split for a tax-inclusive gross total.
///
/// No rounding is applied here; `taxable_amount + total_tax` equals
/// `grand_total` exactly. Display code rounds each figure to 2 decimal
/// places independently.
///
/// # Arguments
///
/// * `grand_total` - The tax-inclusive bill total
/// * `tax_percent` - The GST rate
/// * `home` - The business's registration state
/// * `party` - The counterparty's state (see [`StateCode::from_gstin`])
pub fn compute_tax(
    grand_total: Money,
    tax_percent: Rate,
    home: StateCode,
    party: StateCode,
) -> TaxComputation {
    let divisor = Decimal::ONE + tax_percent.as_decimal();
    let taxable_amount = grand_total / divisor;
    let total_tax = grand_total - taxable_amount;

    let lines = if tax_percent.is_zero() {
        Vec::new()
    } else if party == home {
        let half_rate = tax_percent.half();
        let half_tax = total_tax / dec!(2);
        vec![
            TaxLine {
                levy: TaxLevy::Cgst,
                rate: half_rate,
                amount: half_tax,
            },
            TaxLine {
                levy: TaxLevy::Sgst,
                rate: half_rate,
                amount: half_tax,
            },
        ]
    } else {
        vec![TaxLine {
            levy: TaxLevy::Igst,
            rate: tax_percent,
            amount: total_tax,
        }]
    };

    TaxComputation {
        grand_total,
        taxable_amount,
        total_tax,
        lines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn home() -> StateCode {
        StateCode::from("23")
    }

    #[test]
    fn test_zero_rate_has_no_lines() {
        let result = compute_tax(Money::new(dec!(50000)), Rate::zero(), home(), home());

        assert!(result.is_exempt());
        assert_eq!(result.taxable_amount, Money::new(dec!(50000)));
        assert!(result.total_tax.is_zero());
    }

    #[test]
    fn test_intra_state_splits_into_halves() {
        let result = compute_tax(
            Money::new(dec!(200000)),
            Rate::from_percentage(dec!(5)),
            home(),
            home(),
        );

        assert_eq!(result.lines.len(), 2);
        assert_eq!(result.lines[0].levy, TaxLevy::Cgst);
        assert_eq!(result.lines[1].levy, TaxLevy::Sgst);
        assert_eq!(result.lines[0].rate.as_percentage(), dec!(2.5));
        assert_eq!(result.lines[0].amount, result.lines[1].amount);
        assert_eq!(
            result.lines[0].amount + result.lines[1].amount,
            result.total_tax
        );
    }

    #[test]
    fn test_inter_state_charges_igst() {
        let result = compute_tax(
            Money::new(dec!(200000)),
            Rate::from_percentage(dec!(5)),
            home(),
            StateCode::from("27"),
        );

        assert_eq!(result.lines.len(), 1);
        assert_eq!(result.lines[0].levy, TaxLevy::Igst);
        assert_eq!(result.lines[0].rate.as_percentage(), dec!(5));
        assert_eq!(result.lines[0].amount, result.total_tax);
    }

    #[test]
    fn test_taxable_plus_tax_equals_gross() {
        let gross = Money::new(dec!(123456.78));
        let result = compute_tax(gross, Rate::from_percentage(dec!(18)), home(), home());

        assert_eq!(result.taxable_amount + result.total_tax, gross);
    }
}
