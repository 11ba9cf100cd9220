//! Strongly-typed identifiers for domain entities
//!
//! Newtype wrappers around the backing store's integer keys prevent
//! accidental mixing of different identifier types. Bulk-sale grouping
//! uses a UUID since a group spans rows created in one action.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a store key
            pub fn new(id: i64) -> Self {
                Self(id)
            }

            /// Returns the underlying key
            pub fn value(&self) -> i64 {
                self.0
            }

            /// Returns the identifier prefix for display
            pub fn prefix() -> &'static str {
                $prefix
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}-{}", $prefix, self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> i64 {
                id.0
            }
        }
    };
}

// Master-data identifiers
define_id!(GrainId, "GRN");
define_id!(ContactId, "CNT");
define_id!(WarehouseId, "WH");

// Trade identifiers
define_id!(TransactionId, "TRX");
define_id!(DispatchId, "DSP");

impl TransactionId {
    /// Placeholder for rows planned in memory; the store overwrites it
    /// with the real key on insert.
    pub fn unassigned() -> Self {
        Self(0)
    }
}

/// Groups the warehouse-allocation rows of one bulk sale under a single bill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SaleGroupId(Uuid);

impl SaleGroupId {
    /// Creates a fresh group identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wraps an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for SaleGroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SaleGroupId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        assert_eq!(GrainId::new(7).to_string(), "GRN-7");
        assert_eq!(TransactionId::new(42).to_string(), "TRX-42");
    }

    #[test]
    fn test_id_conversion() {
        let id = WarehouseId::from(3);
        let raw: i64 = id.into();
        assert_eq!(raw, 3);
    }

    #[test]
    fn test_sale_group_id_parsing() {
        let original = SaleGroupId::generate();
        let parsed: SaleGroupId = original.to_string().parse().unwrap();
        assert_eq!(original, parsed);
    }
}
