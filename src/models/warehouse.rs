// Warehouse model: one fixed fulfilment point per product category

use crate::error::ConfigError;
use crate::models::{Coordinate, ProductCategory};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Fulfilment point and delivery rate for a product category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarehouseConfig {
    /// Name shown to the customer
    pub name: String,

    /// Geographic location of the warehouse
    pub location: Coordinate,

    /// Delivery rate in rupees per kilometre
    pub rate_per_km: f64,
}

impl WarehouseConfig {
    /// Creates a warehouse config, rejecting non-positive rates and bad coordinates
    pub fn new<S: Into<String>>(
        name: S,
        location: Coordinate,
        rate_per_km: f64,
    ) -> Result<Self, ConfigError> {
        let name = name.into();

        if !(rate_per_km.is_finite() && rate_per_km > 0.0) {
            return Err(ConfigError::InvalidRate {
                name,
                rate: rate_per_km,
            });
        }

        let location = match location.validated() {
            Ok(location) => location,
            Err(source) => return Err(ConfigError::InvalidLocation { name, source }),
        };

        Ok(Self {
            name,
            location,
            rate_per_km,
        })
    }
}

/// Static mapping from category to its warehouse.
///
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct WarehouseRegistry {
    warehouses: BTreeMap<ProductCategory, WarehouseConfig>,
}

impl WarehouseRegistry {
    /// Builds a registry from already validated configs.
    ///
    /// A category listed twice keeps its last config.
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (ProductCategory, WarehouseConfig)>,
    {
        Self {
            warehouses: entries.into_iter().collect(),
        }
    }

    /// Gets the warehouse serving a category, if the category is registered
    pub fn get(&self, category: ProductCategory) -> Option<&WarehouseConfig> {
        self.warehouses.get(&category)
    }

    /// Checks if a category has a warehouse
    pub fn contains(&self, category: ProductCategory) -> bool {
        self.warehouses.contains_key(&category)
    }

    /// Iterates categories and warehouses in category order
    pub fn iter(&self) -> impl Iterator<Item = (ProductCategory, &WarehouseConfig)> {
        self.warehouses.iter().map(|(category, config)| (*category, config))
    }

    pub fn len(&self) -> usize {
        self.warehouses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.warehouses.is_empty()
    }
}

impl Default for WarehouseRegistry {
    /// Hyderabad-area warehouses used by the storefront
    fn default() -> Self {
        let warehouses = [
            (
                ProductCategory::Cement,
                "Kukatpally Cement Depot",
                Coordinate::new(17.4948, 78.3996),
                8.0,
            ),
            (
                ProductCategory::Steel,
                "Medchal Steel Yard",
                Coordinate::new(17.6297, 78.4814),
                10.0,
            ),
            (
                ProductCategory::ConcreteMix,
                "Shamshabad RMC Plant",
                Coordinate::new(17.2403, 78.4294),
                12.0,
            ),
            (
                ProductCategory::Bricks,
                "Ghatkesar Brick Works",
                Coordinate::new(17.4500, 78.6850),
                9.0,
            ),
            (
                ProductCategory::Sand,
                "Patancheru Sand Yard",
                Coordinate::new(17.5326, 78.2645),
                7.0,
            ),
            (
                ProductCategory::Aggregates,
                "Shadnagar Stone Crusher",
                Coordinate::new(17.0716, 78.2037),
                7.5,
            ),
        ];

        Self::new(
            warehouses
                .into_iter()
                .map(|(category, name, location, rate_per_km)| {
                    (
                        category,
                        WarehouseConfig {
                            name: name.to_string(),
                            location,
                            rate_per_km,
                        },
                    )
                }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_positive_rate() {
        let location = Coordinate::new(17.3850, 78.4867);
        assert!(matches!(
            WarehouseConfig::new("Depot", location, 0.0),
            Err(ConfigError::InvalidRate { .. })
        ));
        assert!(matches!(
            WarehouseConfig::new("Depot", location, -3.0),
            Err(ConfigError::InvalidRate { .. })
        ));
        assert!(matches!(
            WarehouseConfig::new("Depot", location, f64::NAN),
            Err(ConfigError::InvalidRate { .. })
        ));
    }

    #[test]
    fn test_rejects_invalid_location() {
        let result = WarehouseConfig::new("Depot", Coordinate::new(95.0, 78.0), 8.0);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidLocation { name, .. }) if name == "Depot"
        ));
    }

    #[test]
    fn test_default_registry_covers_all_categories() {
        let registry = WarehouseRegistry::default();
        assert_eq!(registry.len(), ProductCategory::ALL.len());

        for (category, config) in registry.iter() {
            assert!(registry.contains(category));
            assert!(config.rate_per_km > 0.0);
            assert!(config.location.is_valid());
        }
    }

    #[test]
    fn test_missing_category_lookup() {
        let cement = WarehouseConfig::new("Depot", Coordinate::new(17.0, 78.0), 8.0).unwrap();
        let registry = WarehouseRegistry::new([(ProductCategory::Cement, cement)]);

        assert!(registry.get(ProductCategory::Cement).is_some());
        assert!(registry.get(ProductCategory::Steel).is_none());
        assert!(!registry.is_empty());
    }
}
