//! Transporter freight ledger
//!
//! One dispatch record per bulk-sale group tracks what the transporter
//! is owed. Gross freight is fixed when the dispatch is created
//! (`total_weight * rate`); later edits touch only the two payment and
//! two deduction fields, and their sum can never pass the gross
//! freight beyond the one-rupee tolerance.

use serde::{Deserialize, Serialize};

use core_kernel::{DispatchId, Money, Quintal, SaleGroupId};

use crate::error::DispatchError;

/// Settlement state of a dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DispatchStatus {
    /// Balance cleared within tolerance
    Paid,
    /// Balance outstanding
    Pending,
}

impl DispatchStatus {
    /// Returns the label shown in lists and exports
    pub fn label(&self) -> &'static str {
        match self {
            DispatchStatus::Paid => "Paid",
            DispatchStatus::Pending => "Pending",
        }
    }
}

/// The four editable fields of a dispatch record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchField {
    /// Advance handed over at loading
    AdvancePaid,
    /// Paid on delivery confirmation
    DeliveryPaid,
    /// Withheld for weight shortage in transit
    ShortageDeduction,
    /// Other withholding
    OtherDeduction,
}

/// Freight owed to a transporter for one bulk-sale delivery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispatchRecord {
    /// Unique identifier
    pub id: DispatchId,
    /// Bulk-sale group this delivery belongs to
    pub sale_group_id: SaleGroupId,
    /// Transporter owed the freight
    pub transporter_name: String,
    /// Vehicle registration
    pub vehicle_number: Option<String>,
    /// Driver name
    pub driver_name: Option<String>,
    /// Load weight in quintals
    pub total_weight: Quintal,
    /// Freight rate per quintal
    pub rate: Money,
    /// `total_weight * rate`, fixed at creation
    pub gross_freight: Money,
    /// Advance handed over at loading
    pub advance_paid: Money,
    /// Paid on delivery confirmation
    pub delivery_paid: Money,
    /// Withheld for weight shortage in transit
    pub shortage_deduction: Money,
    /// Other withholding
    pub other_deduction: Money,
    /// Reason recorded for deductions
    pub deduction_note: Option<String>,
}

impl DispatchRecord {
    /// Creates a dispatch record, deriving the gross freight
    pub fn new(
        id: DispatchId,
        sale_group_id: SaleGroupId,
        transporter_name: impl Into<String>,
        total_weight: Quintal,
        rate: Money,
    ) -> Self {
        Self {
            id,
            sale_group_id,
            transporter_name: transporter_name.into(),
            vehicle_number: None,
            driver_name: None,
            total_weight,
            rate,
            gross_freight: total_weight.amount_at(rate),
            advance_paid: Money::zero(),
            delivery_paid: Money::zero(),
            shortage_deduction: Money::zero(),
            other_deduction: Money::zero(),
            deduction_note: None,
        }
    }

    /// Sets the vehicle registration
    pub fn with_vehicle(mut self, vehicle: impl Into<String>) -> Self {
        self.vehicle_number = Some(vehicle.into());
        self
    }

    /// Sets the driver name
    pub fn with_driver(mut self, driver: impl Into<String>) -> Self {
        self.driver_name = Some(driver.into());
        self
    }

    /// Sum of the two payments and two deductions
    pub fn total_settled(&self) -> Money {
        self.advance_paid + self.delivery_paid + self.shortage_deduction + self.other_deduction
    }

    /// Sum of the two deductions
    pub fn total_deduction(&self) -> Money {
        self.shortage_deduction + self.other_deduction
    }
}

/// The reconciled position of a dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchBalance {
    /// Freight still owed to the transporter
    pub balance_pending: Money,
    /// Paid/Pending classification
    pub status: DispatchStatus,
}

/// Reconciles a dispatch record against its freight obligation.
///
/// `balance = gross - advance - delivery - shortage_ded - other_ded`;
/// a balance within one rupee counts as paid.
pub fn reconcile(record: &DispatchRecord) -> DispatchBalance {
    let balance_pending = record.gross_freight - record.total_settled();

    let status = if balance_pending.amount() <= Money::SETTLEMENT_TOLERANCE {
        DispatchStatus::Paid
    } else {
        DispatchStatus::Pending
    };

    DispatchBalance {
        balance_pending,
        status,
    }
}

/// Sets one payment/deduction field to a new value, validating the
/// whole record.
///
/// Returns the updated copy; the input record is untouched either way.
///
/// # Errors
///
/// - [`DispatchError::InvalidAmount`] for a negative value
/// - [`DispatchError::Overpayment`] when the four fields would sum
///   past `gross_freight` beyond the one-rupee tolerance; the error
///   carries the balance still owed
pub fn apply_payment(
    record: &DispatchRecord,
    field: DispatchField,
    new_value: Money,
) -> Result<DispatchRecord, DispatchError> {
    if new_value.is_negative() {
        return Err(DispatchError::InvalidAmount(new_value));
    }

    let mut updated = record.clone();
    match field {
        DispatchField::AdvancePaid => updated.advance_paid = new_value,
        DispatchField::DeliveryPaid => updated.delivery_paid = new_value,
        DispatchField::ShortageDeduction => updated.shortage_deduction = new_value,
        DispatchField::OtherDeduction => updated.other_deduction = new_value,
    }

    let settled = updated.total_settled();
    if settled.amount() > updated.gross_freight.amount() + Money::SETTLEMENT_TOLERANCE {
        return Err(DispatchError::Overpayment {
            balance: reconcile(record).balance_pending,
            attempted: new_value,
        });
    }

    Ok(updated)
}
