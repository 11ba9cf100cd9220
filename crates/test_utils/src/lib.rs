//! Shared test utilities for the grain ledger test suite
//!
//! Builders with sensible defaults, standard master-data fixtures, and
//! assertion helpers.

pub mod assertions;
pub mod builders;
pub mod fixtures;

pub use assertions::{assert_money_approx_eq, assert_money_positive, assert_money_zero};
pub use builders::{DispatchRecordBuilder, TransactionBuilder};
pub use fixtures::{standard_contacts, standard_grains, standard_warehouses};
