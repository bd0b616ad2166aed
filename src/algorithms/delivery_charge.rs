use tracing::warn;

use crate::algorithms::DeliveryPricer;
use crate::models::{Rupees, WarehouseConfig, FLOOR_CHARGE};
use crate::utils::config::PricingConfig;

/// Per-km rate with a minimum charge.
///
/// `charge = max(floor, round(distance_km * rate_per_km))`. The computed amount is
/// rounded to whole rupees before it is compared against the floor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlooredRatePricer {
    floor_charge: Rupees,
}

impl FlooredRatePricer {
    pub fn new(config: &PricingConfig) -> Self {
        Self {
            floor_charge: config.floor_charge,
        }
    }

    /// Lowest charge this pricer ever returns
    pub fn floor_charge(&self) -> Rupees {
        self.floor_charge
    }
}

impl Default for FlooredRatePricer {
    fn default() -> Self {
        Self {
            floor_charge: FLOOR_CHARGE,
        }
    }
}

impl DeliveryPricer for FlooredRatePricer {
    fn charge(&self, distance_km: f64, warehouse: &WarehouseConfig) -> Rupees {
        if !(distance_km.is_finite() && distance_km >= 0.0) {
            warn!(
                distance_km,
                warehouse = %warehouse.name,
                "malformed distance, charging floor"
            );
            return self.floor_charge;
        }

        let computed = distance_km * warehouse.rate_per_km;
        if !computed.is_finite() {
            warn!(
                distance_km,
                rate_per_km = warehouse.rate_per_km,
                warehouse = %warehouse.name,
                "delivery charge overflowed, charging floor"
            );
            return self.floor_charge;
        }

        computed.round().max(self.floor_charge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinate;

    fn warehouse(rate_per_km: f64) -> WarehouseConfig {
        WarehouseConfig::new("Depot", Coordinate::new(17.3850, 78.4867), rate_per_km).unwrap()
    }

    #[test]
    fn test_charge_above_floor() {
        let pricer = FlooredRatePricer::default();
        assert_eq!(pricer.charge(12.5, &warehouse(8.0)), 100.0);
    }

    #[test]
    fn test_floor_applies_after_rounding() {
        let pricer = FlooredRatePricer::default();
        // 1.2 * 8 = 9.6 -> 10 -> floor 50
        assert_eq!(pricer.charge(1.2, &warehouse(8.0)), 50.0);
        assert_eq!(pricer.charge(0.0, &warehouse(8.0)), 50.0);
    }

    #[test]
    fn test_half_rupee_rounds_up() {
        let pricer = FlooredRatePricer::default();
        // 10.5 * 10 = 105 exactly; 6.25 * 10 = 62.5 -> 63
        assert_eq!(pricer.charge(10.5, &warehouse(10.0)), 105.0);
        assert_eq!(pricer.charge(6.25, &warehouse(10.0)), 63.0);
    }

    #[test]
    fn test_rounding_happens_before_floor() {
        // 5.02 * 10 = 50.2 rounds to 50, then the 50.4 floor wins.
        // Flooring first would give max(50.4, 50.2) = 50.4 -> 50.
        let pricer = FlooredRatePricer::new(&PricingConfig::new(50.4).unwrap());
        assert_eq!(pricer.charge(5.02, &warehouse(10.0)), 50.4);
    }

    #[test]
    fn test_malformed_distance_falls_back_to_floor() {
        let pricer = FlooredRatePricer::default();
        assert_eq!(pricer.charge(f64::NAN, &warehouse(8.0)), 50.0);
        assert_eq!(pricer.charge(-4.0, &warehouse(8.0)), 50.0);
        assert_eq!(pricer.charge(f64::INFINITY, &warehouse(8.0)), 50.0);
        assert_eq!(pricer.charge(f64::MAX, &warehouse(8.0)), 50.0);
    }

    #[test]
    fn test_custom_floor() {
        let pricer = FlooredRatePricer::new(&PricingConfig::new(80.0).unwrap());
        assert_eq!(pricer.floor_charge(), 80.0);
        assert_eq!(pricer.charge(5.0, &warehouse(8.0)), 80.0);
        assert_eq!(pricer.charge(20.0, &warehouse(8.0)), 160.0);
    }

    #[test]
    fn test_configured_floor_never_undercuts_default() {
        for floor in [50.0, 50.4, 75.0] {
            let pricer = FlooredRatePricer::new(&PricingConfig::new(floor).unwrap());
            for distance in [0.0, 1.2, 6.15, 12.5, 250.0] {
                assert!(pricer.charge(distance, &warehouse(8.0)) >= FLOOR_CHARGE);
            }
        }
    }
}
