pub mod delivery_charge;
pub mod delivery_time;
pub mod price_composer;
pub mod warehouse_assignment;

// Common algorithm traits
use crate::models::{Rupees, WarehouseConfig};

/// Trait for turning a distance into a delivery charge
pub trait DeliveryPricer {
    /// Charge for shipping `distance_km` from the given warehouse.
    ///
    /// Never fails: malformed input degrades to the minimum charge.
    fn charge(&self, distance_km: f64, warehouse: &WarehouseConfig) -> Rupees;
}
