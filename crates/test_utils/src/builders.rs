//! Test Data Builders
//!
//! Builder patterns for constructing test data with sensible defaults,
//! so tests specify only the fields they care about.

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{
    ContactId, DispatchId, GrainId, Money, Quintal, Rate, SaleGroupId, TransactionId, WarehouseId,
};
use domain_dispatch::DispatchRecord;
use domain_trade::{Transaction, TransactionType};

/// Builder for test transactions
pub struct TransactionBuilder {
    id: TransactionId,
    date: DateTime<Utc>,
    transaction_type: TransactionType,
    grain_id: GrainId,
    contact_id: ContactId,
    warehouse_id: WarehouseId,
    bags: u32,
    bharti_kg: Decimal,
    rate_per_quintal: Money,
    labour_cost_per_bag: Money,
    invoice_number: Option<u32>,
    tax_percent: Rate,
    cost_price_per_quintal: Money,
    amount_paid: Money,
    shortage_quantity: Quintal,
    deduction_amount: Money,
    transport_cost_per_qtl: Money,
    mandi_cost: Money,
    sale_group_id: Option<SaleGroupId>,
}

impl Default for TransactionBuilder {
    fn default() -> Self {
        Self::sale()
    }
}

impl TransactionBuilder {
    /// A sale: 200 bags at 50 kg (100 Qtl) at ₹2000/Qtl
    pub fn sale() -> Self {
        Self {
            id: TransactionId::new(1),
            date: Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap(),
            transaction_type: TransactionType::Sale,
            grain_id: GrainId::new(1),
            contact_id: ContactId::new(1),
            warehouse_id: WarehouseId::new(1),
            bags: 200,
            bharti_kg: dec!(50),
            rate_per_quintal: Money::new(dec!(2000)),
            labour_cost_per_bag: Money::zero(),
            invoice_number: Some(1),
            tax_percent: Rate::zero(),
            cost_price_per_quintal: Money::zero(),
            amount_paid: Money::zero(),
            shortage_quantity: Quintal::zero(),
            deduction_amount: Money::zero(),
            transport_cost_per_qtl: Money::zero(),
            mandi_cost: Money::zero(),
            sale_group_id: None,
        }
    }

    /// A purchase: 200 bags at 50 kg (100 Qtl) at ₹2000/Qtl, ₹3/bag labour
    pub fn purchase() -> Self {
        Self {
            transaction_type: TransactionType::Purchase,
            labour_cost_per_bag: Money::new(dec!(3)),
            ..Self::sale()
        }
    }

    /// Sets the identifier
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = TransactionId::new(id);
        self
    }

    /// Sets the transaction date
    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    /// Sets the grain
    pub fn with_grain(mut self, id: i64) -> Self {
        self.grain_id = GrainId::new(id);
        self
    }

    /// Sets the counterparty
    pub fn with_contact(mut self, id: i64) -> Self {
        self.contact_id = ContactId::new(id);
        self
    }

    /// Sets the warehouse
    pub fn with_warehouse(mut self, id: i64) -> Self {
        self.warehouse_id = WarehouseId::new(id);
        self
    }

    /// Sets bags and bharti
    pub fn with_bags(mut self, bags: u32, bharti_kg: Decimal) -> Self {
        self.bags = bags;
        self.bharti_kg = bharti_kg;
        self
    }

    /// Sets the rate per quintal
    pub fn with_rate(mut self, rate: Decimal) -> Self {
        self.rate_per_quintal = Money::new(rate);
        self
    }

    /// Sets the labour cost per bag
    pub fn with_labour_cost(mut self, per_bag: Decimal) -> Self {
        self.labour_cost_per_bag = Money::new(per_bag);
        self
    }

    /// Sets the bill number
    pub fn with_invoice_number(mut self, number: u32) -> Self {
        self.invoice_number = Some(number);
        self
    }

    /// Sets the GST rate
    pub fn with_tax_percent(mut self, percent: Decimal) -> Self {
        self.tax_percent = Rate::from_percentage(percent);
        self
    }

    /// Sets the acquisition cost per quintal
    pub fn with_cost_price(mut self, per_quintal: Decimal) -> Self {
        self.cost_price_per_quintal = Money::new(per_quintal);
        self
    }

    /// Sets the cumulative paid amount
    pub fn with_amount_paid(mut self, amount: Decimal) -> Self {
        self.amount_paid = Money::new(amount);
        self
    }

    /// Sets the settlement adjustments
    pub fn with_settlement(mut self, shortage_qtl: Decimal, deduction: Decimal) -> Self {
        self.shortage_quantity = Quintal::new(shortage_qtl);
        self.deduction_amount = Money::new(deduction);
        self
    }

    /// Sets the internal expense figures
    pub fn with_expenses(mut self, transport_per_qtl: Decimal, mandi: Decimal) -> Self {
        self.transport_cost_per_qtl = Money::new(transport_per_qtl);
        self.mandi_cost = Money::new(mandi);
        self
    }

    /// Links the row into a bulk-sale group
    pub fn with_sale_group(mut self, group: SaleGroupId) -> Self {
        self.sale_group_id = Some(group);
        self
    }

    /// Builds the transaction
    pub fn build(self) -> Transaction {
        let mut trx = match self.transaction_type {
            TransactionType::Purchase => Transaction::purchase(
                self.id,
                self.date,
                self.grain_id,
                self.contact_id,
                self.warehouse_id,
                self.bags,
                self.bharti_kg,
                self.rate_per_quintal,
                self.labour_cost_per_bag,
            ),
            TransactionType::Sale => {
                let mut sale = Transaction::sale(
                    self.id,
                    self.date,
                    self.grain_id,
                    self.contact_id,
                    self.warehouse_id,
                    self.bags,
                    self.bharti_kg,
                    self.rate_per_quintal,
                );
                sale.labour_cost_per_bag = self.labour_cost_per_bag;
                sale
            }
        };

        if let Some(number) = self.invoice_number {
            trx.invoice_number = Some(number);
        }
        trx.tax_percent = self.tax_percent;
        trx.cost_price_per_quintal = self.cost_price_per_quintal;
        trx.amount_paid = self.amount_paid;
        trx.shortage_quantity = self.shortage_quantity;
        trx.deduction_amount = self.deduction_amount;
        trx.transport_cost_per_qtl = self.transport_cost_per_qtl;
        trx.mandi_cost = self.mandi_cost;
        trx.sale_group_id = self.sale_group_id;
        trx
    }
}

/// Builder for test dispatch records
pub struct DispatchRecordBuilder {
    id: DispatchId,
    sale_group_id: SaleGroupId,
    transporter_name: String,
    total_weight: Quintal,
    rate: Money,
    vehicle_number: Option<String>,
}

impl Default for DispatchRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DispatchRecordBuilder {
    /// A dispatch of 500 Qtl at ₹100/Qtl freight (₹50000 gross)
    pub fn new() -> Self {
        Self {
            id: DispatchId::new(1),
            sale_group_id: SaleGroupId::generate(),
            transporter_name: "Verma Roadlines".to_string(),
            total_weight: Quintal::new(dec!(500)),
            rate: Money::new(dec!(100)),
            vehicle_number: None,
        }
    }

    /// Sets the identifier
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = DispatchId::new(id);
        self
    }

    /// Sets the sale group
    pub fn with_sale_group(mut self, group: SaleGroupId) -> Self {
        self.sale_group_id = group;
        self
    }

    /// Sets the transporter
    pub fn with_transporter(mut self, name: impl Into<String>) -> Self {
        self.transporter_name = name.into();
        self
    }

    /// Sets weight and freight rate
    pub fn with_load(mut self, weight_qtl: Decimal, rate: Decimal) -> Self {
        self.total_weight = Quintal::new(weight_qtl);
        self.rate = Money::new(rate);
        self
    }

    /// Sets the vehicle registration
    pub fn with_vehicle(mut self, vehicle: impl Into<String>) -> Self {
        self.vehicle_number = Some(vehicle.into());
        self
    }

    /// Builds the dispatch record
    pub fn build(self) -> DispatchRecord {
        let mut record = DispatchRecord::new(
            self.id,
            self.sale_group_id,
            self.transporter_name,
            self.total_weight,
            self.rate,
        );
        record.vehicle_number = self.vehicle_number;
        record
    }
}
