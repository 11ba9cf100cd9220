//! Core Kernel - Foundational types for the grain ledger
//!
//! This crate provides the building blocks used across all domain modules:
//! - Money and Rate types with precise decimal arithmetic
//! - Quantity types in quintals with bag/bharti conversion
//! - Strongly-typed identifiers

pub mod identifiers;
pub mod money;
pub mod quantity;

pub use identifiers::{ContactId, DispatchId, GrainId, SaleGroupId, TransactionId, WarehouseId};
pub use money::{Money, Rate};
pub use quantity::{Quintal, KG_PER_QUINTAL};
