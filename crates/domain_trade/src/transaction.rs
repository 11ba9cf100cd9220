//! Purchase and sale transactions
//!
//! One `Transaction` records one stock movement. The party-facing
//! `total_amount` is fixed by construction:
//!
//! - sale: `quantity * rate` — internal expenses (labour, transport,
//!   mandi) never reduce the buyer's bill, only computed profit
//! - purchase: `quantity * rate - bags * labour_cost_per_bag` — the
//!   palledari deduction comes off the supplier payout

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{ContactId, GrainId, Money, Quintal, Rate, SaleGroupId, TransactionId, WarehouseId};

/// Purchase or sale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Stock bought from a supplier
    Purchase,
    /// Stock sold to a buyer
    Sale,
}

/// One purchase or sale event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,
    /// Transaction date
    pub date: DateTime<Utc>,
    /// Purchase or sale
    pub transaction_type: TransactionType,
    /// Bill number, sequential per type
    pub invoice_number: Option<u32>,
    /// Grain traded
    pub grain_id: GrainId,
    /// Counterparty
    pub contact_id: ContactId,
    /// Storage location (one row per warehouse for bulk sales)
    pub warehouse_id: WarehouseId,
    /// Quantity in quintals
    pub quantity: Quintal,
    /// Bag count
    pub number_of_bags: u32,
    /// Price per quintal
    pub rate_per_quintal: Money,
    /// Party-facing bill amount; see the module invariants
    pub total_amount: Money,
    /// GST rate on the bill
    pub tax_percent: Rate,
    /// Acquisition cost per quintal, for internal margin only
    pub cost_price_per_quintal: Money,
    /// Cumulative amount paid against this transaction
    pub amount_paid: Money,
    /// Free-text notes
    pub notes: Option<String>,

    // Sale dispatch metadata
    /// Transporter carrying the delivery
    pub transporter_name: Option<String>,
    /// Delivery destination
    pub destination: Option<String>,
    /// Driver name
    pub driver_name: Option<String>,
    /// Vehicle registration
    pub vehicle_number: Option<String>,
    /// Links the warehouse rows of one bulk sale to one bill and dispatch
    pub sale_group_id: Option<SaleGroupId>,

    // Settlement adjustments (sale only)
    /// Quantity lost or disputed after delivery
    pub shortage_quantity: Quintal,
    /// Flat monetary deduction (quality claims etc.)
    pub deduction_amount: Money,
    /// Reason recorded for the deduction
    pub deduction_note: Option<String>,

    // Internal expense rates
    /// Palledari charged per bag
    pub labour_cost_per_bag: Money,
    /// Transport expense per quintal
    pub transport_cost_per_qtl: Money,
    /// Flat market-yard fee
    pub mandi_cost: Money,
}

impl Transaction {
    /// Creates a purchase.
    ///
    /// Quantity is derived from the bag count and bharti;
    /// `total_amount` is the supplier payout:
    /// `quantity * rate - bags * labour_cost_per_bag`.
    pub fn purchase(
        id: TransactionId,
        date: DateTime<Utc>,
        grain_id: GrainId,
        contact_id: ContactId,
        warehouse_id: WarehouseId,
        bags: u32,
        bharti_kg: Decimal,
        rate_per_quintal: Money,
        labour_cost_per_bag: Money,
    ) -> Self {
        let quantity = Quintal::from_bags(bags, bharti_kg);
        let mut trx = Self::bare(
            id,
            date,
            TransactionType::Purchase,
            grain_id,
            contact_id,
            warehouse_id,
            quantity,
            bags,
            rate_per_quintal,
        );
        trx.labour_cost_per_bag = labour_cost_per_bag;
        trx.recompute_purchase_total();
        trx
    }

    /// Creates one sale row.
    ///
    /// `total_amount` is the gross bill value `quantity * rate`,
    /// tax-inclusive; the tax engine back-derives the split.
    pub fn sale(
        id: TransactionId,
        date: DateTime<Utc>,
        grain_id: GrainId,
        contact_id: ContactId,
        warehouse_id: WarehouseId,
        bags: u32,
        bharti_kg: Decimal,
        rate_per_quintal: Money,
    ) -> Self {
        let quantity = Quintal::from_bags(bags, bharti_kg);
        let mut trx = Self::bare(
            id,
            date,
            TransactionType::Sale,
            grain_id,
            contact_id,
            warehouse_id,
            quantity,
            bags,
            rate_per_quintal,
        );
        trx.total_amount = quantity.amount_at(rate_per_quintal);
        trx
    }

    fn bare(
        id: TransactionId,
        date: DateTime<Utc>,
        transaction_type: TransactionType,
        grain_id: GrainId,
        contact_id: ContactId,
        warehouse_id: WarehouseId,
        quantity: Quintal,
        bags: u32,
        rate_per_quintal: Money,
    ) -> Self {
        Self {
            id,
            date,
            transaction_type,
            invoice_number: None,
            grain_id,
            contact_id,
            warehouse_id,
            quantity,
            number_of_bags: bags,
            rate_per_quintal,
            total_amount: Money::zero(),
            tax_percent: Rate::zero(),
            cost_price_per_quintal: Money::zero(),
            amount_paid: Money::zero(),
            notes: None,
            transporter_name: None,
            destination: None,
            driver_name: None,
            vehicle_number: None,
            sale_group_id: None,
            shortage_quantity: Quintal::zero(),
            deduction_amount: Money::zero(),
            deduction_note: None,
            labour_cost_per_bag: Money::zero(),
            transport_cost_per_qtl: Money::zero(),
            mandi_cost: Money::zero(),
        }
    }

    /// Adds loose grain (kg outside any bag) to a purchase and
    /// recomputes the payout
    pub fn with_loose_kg(mut self, loose_kg: Decimal) -> Self {
        self.quantity += Quintal::from_kg(loose_kg);
        if self.transaction_type == TransactionType::Purchase {
            self.recompute_purchase_total();
        } else {
            self.total_amount = self.quantity.amount_at(self.rate_per_quintal);
        }
        self
    }

    /// Sets the bill number
    pub fn with_invoice_number(mut self, number: u32) -> Self {
        self.invoice_number = Some(number);
        self
    }

    /// Sets the GST rate
    pub fn with_tax_percent(mut self, rate: Rate) -> Self {
        self.tax_percent = rate;
        self
    }

    /// Sets the acquisition cost used for internal margin
    pub fn with_cost_price(mut self, cost_per_quintal: Money) -> Self {
        self.cost_price_per_quintal = cost_per_quintal;
        self
    }

    /// Sets the internal expense rates
    pub fn with_expenses(mut self, transport_per_qtl: Money, mandi_cost: Money) -> Self {
        self.transport_cost_per_qtl = transport_per_qtl;
        self.mandi_cost = mandi_cost;
        self
    }

    /// Sets the sale dispatch metadata
    pub fn with_dispatch_details(
        mut self,
        transporter: Option<String>,
        vehicle: Option<String>,
        driver: Option<String>,
        destination: Option<String>,
    ) -> Self {
        self.transporter_name = transporter;
        self.vehicle_number = vehicle;
        self.driver_name = driver;
        self.destination = destination;
        self
    }

    /// Links this row into a bulk-sale group
    pub fn with_sale_group(mut self, group: SaleGroupId) -> Self {
        self.sale_group_id = Some(group);
        self
    }

    /// Sets free-text notes
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Gross grain value `quantity * rate`, before any deduction
    pub fn base_amount(&self) -> Money {
        self.quantity.amount_at(self.rate_per_quintal)
    }

    /// True for sales
    pub fn is_sale(&self) -> bool {
        self.transaction_type == TransactionType::Sale
    }

    fn recompute_purchase_total(&mut self) {
        let labour = self
            .labour_cost_per_bag
            .multiply(Decimal::from(self.number_of_bags));
        self.total_amount = self.base_amount() - labour;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn ids() -> (TransactionId, GrainId, ContactId, WarehouseId) {
        (
            TransactionId::new(1),
            GrainId::new(1),
            ContactId::new(1),
            WarehouseId::new(1),
        )
    }

    #[test]
    fn test_purchase_total_deducts_labour() {
        let (id, g, c, w) = ids();
        // 500 bags at 60 kg = 300 Qtl; 300 * 2200 = 660000; labour 500 * 3 = 1500
        let trx = Transaction::purchase(
            id,
            Utc::now(),
            g,
            c,
            w,
            500,
            dec!(60),
            Money::new(dec!(2200)),
            Money::new(dec!(3)),
        );

        assert_eq!(trx.quantity.value(), dec!(300));
        assert_eq!(trx.base_amount().amount(), dec!(660000));
        assert_eq!(trx.total_amount.amount(), dec!(658500));
    }

    #[test]
    fn test_purchase_with_loose_kg() {
        let (id, g, c, w) = ids();
        let trx = Transaction::purchase(
            id,
            Utc::now(),
            g,
            c,
            w,
            10,
            dec!(50),
            Money::new(dec!(2000)),
            Money::new(dec!(3)),
        )
        .with_loose_kg(dec!(40));

        // 10 * 50 / 100 + 40 / 100 = 5.4 Qtl; 5.4 * 2000 - 10 * 3 = 10770
        assert_eq!(trx.quantity.value(), dec!(5.4));
        assert_eq!(trx.total_amount.amount(), dec!(10770));
    }

    #[test]
    fn test_sale_total_is_gross() {
        let (id, g, c, w) = ids();
        // 200 bags at 50 kg = 100 Qtl at 2000 = 200000; labour untouched
        let trx = Transaction::sale(id, Utc::now(), g, c, w, 200, dec!(50), Money::new(dec!(2000)));

        assert_eq!(trx.quantity.value(), dec!(100));
        assert_eq!(trx.total_amount.amount(), dec!(200000));
        assert_eq!(trx.total_amount, trx.base_amount());
    }

    #[test]
    fn test_builders_do_not_touch_total() {
        let (id, g, c, w) = ids();
        let trx = Transaction::sale(id, Utc::now(), g, c, w, 200, dec!(50), Money::new(dec!(2000)))
            .with_tax_percent(Rate::from_percentage(dec!(5)))
            .with_expenses(Money::new(dec!(10)), Money::new(dec!(500)))
            .with_cost_price(Money::new(dec!(1800)));

        assert_eq!(trx.total_amount.amount(), dec!(200000));
    }
}
