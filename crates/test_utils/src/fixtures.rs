//! Shared test fixtures

use rust_decimal_macros::dec;

use core_kernel::{ContactId, GrainId, WarehouseId};
use domain_trade::{Contact, Grain, PartyType, Warehouse};

/// The standard grain master used across tests
pub fn standard_grains() -> Vec<Grain> {
    vec![
        Grain::new(GrainId::new(1), "Wheat")
            .with_hindi_name("Gehu")
            .with_standard_bharti(dec!(60)),
        Grain::new(GrainId::new(2), "Gram").with_hindi_name("Chana"),
        Grain::new(GrainId::new(3), "Soybean"),
    ]
}

/// The standard contact master used across tests
pub fn standard_contacts() -> Vec<Contact> {
    vec![
        Contact::new(ContactId::new(1), "Sharma Traders", PartyType::Buyer)
            .with_gst_number("23BEKPN1849B1ZQ"),
        Contact::new(ContactId::new(2), "Patel Agro", PartyType::Buyer)
            .with_gst_number("27AAACM1234A1Z5"),
        Contact::new(ContactId::new(3), "Gupta and Sons", PartyType::Supplier),
    ]
}

/// The standard warehouse master used across tests
pub fn standard_warehouses() -> Vec<Warehouse> {
    vec![
        Warehouse::new(WarehouseId::new(1), "Godown A"),
        Warehouse::new(WarehouseId::new(2), "Godown B"),
    ]
}
