//! Master-data entities: contacts, grains, warehouses
//!
//! These are lookup entities referenced by id from transactions. The
//! engine reads their names (and a contact's GSTIN) but performs no
//! further computation on them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{ContactId, GrainId, WarehouseId};

/// Which side of the trade a contact sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartyType {
    /// Sells grain to the business
    Supplier,
    /// Buys grain from the business
    Buyer,
}

/// A trading counterparty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Unique identifier
    pub id: ContactId,
    /// Display name
    pub name: String,
    /// Supplier or buyer
    pub party_type: PartyType,
    /// Phone number
    pub phone: Option<String>,
    /// GSTIN; the first two characters encode the registration state
    pub gst_number: Option<String>,
}

impl Contact {
    /// Creates a new contact
    pub fn new(id: ContactId, name: impl Into<String>, party_type: PartyType) -> Self {
        Self {
            id,
            name: name.into(),
            party_type,
            phone: None,
            gst_number: None,
        }
    }

    /// Sets the GSTIN
    pub fn with_gst_number(mut self, gstin: impl Into<String>) -> Self {
        self.gst_number = Some(gstin.into());
        self
    }

    /// Sets the phone number
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }
}

/// A grain variety
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grain {
    /// Unique identifier
    pub id: GrainId,
    /// English name (Wheat, Gram, ...)
    pub name: String,
    /// Hindi name shown alongside on bills
    pub hindi_name: Option<String>,
    /// Customary kg per bag for this grain
    pub standard_bharti: Decimal,
}

impl Grain {
    /// Creates a new grain with the customary 60 kg bharti
    pub fn new(id: GrainId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            hindi_name: None,
            standard_bharti: Decimal::from(60),
        }
    }

    /// Sets the Hindi name
    pub fn with_hindi_name(mut self, name: impl Into<String>) -> Self {
        self.hindi_name = Some(name.into());
        self
    }

    /// Sets the customary bharti
    pub fn with_standard_bharti(mut self, bharti_kg: Decimal) -> Self {
        self.standard_bharti = bharti_kg;
        self
    }

    /// The label printed on bills: "Wheat (Gehu)" when a Hindi name exists
    pub fn bill_label(&self) -> String {
        match &self.hindi_name {
            Some(hindi) => format!("{} ({})", self.name, hindi),
            None => self.name.clone(),
        }
    }
}

/// A storage location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warehouse {
    /// Unique identifier
    pub id: WarehouseId,
    /// Display name
    pub name: String,
    /// Free-text location
    pub location: Option<String>,
}

impl Warehouse {
    /// Creates a new warehouse
    pub fn new(id: WarehouseId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            location: None,
        }
    }
}
