// Loading of warehouse registry and pricing settings from JSON

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::ConfigError;
use crate::models::{
    Coordinate, ProductCategory, Rupees, WarehouseConfig, WarehouseRegistry, FLOOR_CHARGE,
};

/// Tunable pricing settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Minimum delivery charge applied to every category, never below [`FLOOR_CHARGE`]
    pub floor_charge: Rupees,
}

impl PricingConfig {
    pub fn new(floor_charge: Rupees) -> Result<Self, ConfigError> {
        let config = Self { floor_charge };
        config.validate()?;
        Ok(config)
    }

    /// The floor may be raised but never lowered below [`FLOOR_CHARGE`]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.floor_charge.is_finite() && self.floor_charge >= FLOOR_CHARGE {
            Ok(())
        } else {
            Err(ConfigError::InvalidFloorCharge(self.floor_charge))
        }
    }

    /// Parses pricing settings from a JSON string, missing fields take defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a pricing settings file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_json_str(&json)?;
        info!(
            path = %path.display(),
            floor_charge = config.floor_charge,
            "loaded pricing config"
        );
        Ok(config)
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            floor_charge: FLOOR_CHARGE,
        }
    }
}

// On-disk layout of the registry file
#[derive(Debug, Deserialize)]
struct RegistryFile {
    warehouses: Vec<WarehouseEntry>,
}

#[derive(Debug, Deserialize)]
struct WarehouseEntry {
    category: String,
    name: String,
    location: Coordinate,
    rate_per_km: f64,
}

impl WarehouseRegistry {
    /// Parses a registry from JSON.
    ///
    /// Unknown categories, non-positive rates and bad coordinates fail the whole load.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let file: RegistryFile = serde_json::from_str(json)?;

        let entries = file
            .warehouses
            .into_iter()
            .map(|entry| -> Result<(ProductCategory, WarehouseConfig), ConfigError> {
                let category = entry.category.parse()?;
                let config = WarehouseConfig::new(entry.name, entry.location, entry.rate_per_km)?;
                Ok((category, config))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(entries))
    }

    /// Reads and parses a registry file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let registry = Self::from_json_str(&json)?;
        info!(
            path = %path.display(),
            warehouses = registry.len(),
            "loaded warehouse registry"
        );
        Ok(registry)
    }
}
