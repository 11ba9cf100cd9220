//! Master-data lookup maps
//!
//! Reports resolve grain/contact/warehouse ids to names through these
//! maps. A missing entry degrades to "Unknown" with a warning rather
//! than failing the report; stale master data must not make history
//! unviewable.

use std::collections::HashMap;

use tracing::warn;

use core_kernel::{ContactId, GrainId, WarehouseId};
use domain_trade::{Contact, Grain, Warehouse};

/// Placeholder label for ids with no lookup entry
pub const UNKNOWN: &str = "Unknown";

/// `{id → name}` maps for the three master-data entities
#[derive(Debug, Clone, Default)]
pub struct Lookups {
    grains: HashMap<GrainId, String>,
    contacts: HashMap<ContactId, String>,
    warehouses: HashMap<WarehouseId, String>,
}

impl Lookups {
    /// Creates lookups from prepared name maps
    pub fn new(
        grains: HashMap<GrainId, String>,
        contacts: HashMap<ContactId, String>,
        warehouses: HashMap<WarehouseId, String>,
    ) -> Self {
        Self {
            grains,
            contacts,
            warehouses,
        }
    }

    /// Creates lookups from master-data entity slices
    pub fn from_entities(grains: &[Grain], contacts: &[Contact], warehouses: &[Warehouse]) -> Self {
        Self {
            grains: grains.iter().map(|g| (g.id, g.name.clone())).collect(),
            contacts: contacts.iter().map(|c| (c.id, c.name.clone())).collect(),
            warehouses: warehouses.iter().map(|w| (w.id, w.name.clone())).collect(),
        }
    }

    /// Resolves a grain name, degrading to "Unknown"
    pub fn grain_name(&self, id: GrainId) -> String {
        match self.grains.get(&id) {
            Some(name) => name.clone(),
            None => {
                warn!(grain_id = id.value(), "unknown grain reference in report");
                UNKNOWN.to_string()
            }
        }
    }

    /// Resolves a contact name, degrading to "Unknown"
    pub fn contact_name(&self, id: ContactId) -> String {
        match self.contacts.get(&id) {
            Some(name) => name.clone(),
            None => {
                warn!(contact_id = id.value(), "unknown contact reference in report");
                UNKNOWN.to_string()
            }
        }
    }

    /// Resolves a warehouse name, degrading to "Unknown"
    pub fn warehouse_name(&self, id: WarehouseId) -> String {
        match self.warehouses.get(&id) {
            Some(name) => name.clone(),
            None => {
                warn!(
                    warehouse_id = id.value(),
                    "unknown warehouse reference in report"
                );
                UNKNOWN.to_string()
            }
        }
    }

    /// Contact name without the degradation warning, for search filters
    pub fn contact_name_opt(&self, id: ContactId) -> Option<&str> {
        self.contacts.get(&id).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_trade::PartyType;

    #[test]
    fn test_known_ids_resolve() {
        let lookups = Lookups::from_entities(
            &[Grain::new(GrainId::new(1), "Wheat")],
            &[Contact::new(
                ContactId::new(2),
                "Sharma Traders",
                PartyType::Buyer,
            )],
            &[Warehouse::new(WarehouseId::new(3), "Mandi Godown")],
        );

        assert_eq!(lookups.grain_name(GrainId::new(1)), "Wheat");
        assert_eq!(lookups.contact_name(ContactId::new(2)), "Sharma Traders");
        assert_eq!(lookups.warehouse_name(WarehouseId::new(3)), "Mandi Godown");
    }

    #[test]
    fn test_missing_ids_degrade_to_unknown() {
        let lookups = Lookups::default();

        assert_eq!(lookups.grain_name(GrainId::new(9)), UNKNOWN);
        assert_eq!(lookups.contact_name(ContactId::new(9)), UNKNOWN);
        assert_eq!(lookups.warehouse_name(WarehouseId::new(9)), UNKNOWN);
    }
}
