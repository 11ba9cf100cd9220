//! Stock positions
//!
//! Nets purchases against sales per grain and per warehouse, and
//! carries the quantity-weighted average purchase price (gross grain
//! value over purchased quantity) used to cost sales.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use core_kernel::{GrainId, Money, Quintal, WarehouseId};
use domain_trade::{Transaction, TransactionType};

use crate::lookups::Lookups;

/// Stock held at one warehouse
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarehouseStock {
    /// Warehouse
    pub warehouse_id: WarehouseId,
    /// Warehouse name
    pub warehouse_name: String,
    /// Net bags (can run negative on miscounted stock)
    pub bags: i64,
    /// Net quantity
    pub quantity: Quintal,
}

/// Net stock position for one grain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockPosition {
    /// Grain
    pub grain_id: GrainId,
    /// Grain name
    pub grain_name: String,
    /// Net bags across all warehouses
    pub total_bags: i64,
    /// Net quantity across all warehouses
    pub total_quantity: Quintal,
    /// Quantity-weighted average purchase price per quintal
    pub average_price: Money,
    /// Per-warehouse breakdown, warehouses with no stock omitted
    pub warehouses: Vec<WarehouseStock>,
}

struct Accumulator {
    total_bags: i64,
    total_quantity: Quintal,
    purchased_value: Money,
    purchased_quantity: Quintal,
    warehouses: BTreeMap<WarehouseId, (i64, Quintal)>,
}

/// Computes the stock position per grain from the full transaction
/// history, ordered by grain id
pub fn stock_positions(transactions: &[Transaction], lookups: &Lookups) -> Vec<StockPosition> {
    let mut by_grain: BTreeMap<GrainId, Accumulator> = BTreeMap::new();

    for trx in transactions {
        let acc = by_grain.entry(trx.grain_id).or_insert_with(|| Accumulator {
            total_bags: 0,
            total_quantity: Quintal::zero(),
            purchased_value: Money::zero(),
            purchased_quantity: Quintal::zero(),
            warehouses: BTreeMap::new(),
        });

        let bags = i64::from(trx.number_of_bags);
        let wh = acc
            .warehouses
            .entry(trx.warehouse_id)
            .or_insert((0, Quintal::zero()));

        match trx.transaction_type {
            TransactionType::Purchase => {
                acc.total_bags += bags;
                acc.total_quantity += trx.quantity;
                wh.0 += bags;
                wh.1 += trx.quantity;
                // Cost to company is the gross grain value, before the
                // labour deduction in total_amount
                acc.purchased_value += trx.base_amount();
                acc.purchased_quantity += trx.quantity;
            }
            TransactionType::Sale => {
                acc.total_bags -= bags;
                acc.total_quantity -= trx.quantity;
                wh.0 -= bags;
                wh.1 -= trx.quantity;
            }
        }
    }

    by_grain
        .into_iter()
        .map(|(grain_id, acc)| {
            let average_price = if acc.purchased_quantity.is_positive() {
                acc.purchased_value / acc.purchased_quantity.value()
            } else {
                Money::zero()
            };

            let warehouses = acc
                .warehouses
                .into_iter()
                .filter(|(_, (bags, qty))| *bags != 0 || !qty.is_zero())
                .map(|(warehouse_id, (bags, quantity))| WarehouseStock {
                    warehouse_id,
                    warehouse_name: lookups.warehouse_name(warehouse_id),
                    bags,
                    quantity,
                })
                .collect();

            StockPosition {
                grain_id,
                grain_name: lookups.grain_name(grain_id),
                total_bags: acc.total_bags,
                total_quantity: acc.total_quantity,
                average_price,
                warehouses,
            }
        })
        .collect()
}
