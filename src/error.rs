// Error types for the delivery pricing core

use std::path::PathBuf;
use thiserror::Error;

/// A coordinate could not be used for a distance calculation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DistanceCalculationError {
    #[error("invalid coordinate ({latitude}, {longitude})")]
    InvalidCoordinate { latitude: f64, longitude: f64 },
}

/// Failure reported by the external geocoding collaborator.
///
/// The core never retries or reinterprets these, it hands them back to the caller as-is.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeocodingError {
    #[error("no location found for pincode {0}")]
    NotFound(String),

    #[error("geocoding request failed: {0}")]
    Network(String),
}

/// Why delivery info for a single category could not be computed
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ComputationError {
    #[error("distance calculation failed: {0}")]
    Distance(#[from] DistanceCalculationError),
}

/// A category name that matches none of the known product categories
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown product category {0:?}")]
pub struct UnknownCategory(pub String);

/// User supplied location data that does not pass validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("pincode must be 6 digits not starting with 0, got {0:?}")]
    InvalidPincode(String),
}

/// Problems loading the static warehouse or pricing configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    UnknownCategory(#[from] UnknownCategory),

    #[error("warehouse {name} must have a positive rate per km, got {rate}")]
    InvalidRate { name: String, rate: f64 },

    #[error("warehouse {name} has an invalid location: {source}")]
    InvalidLocation {
        name: String,
        #[source]
        source: DistanceCalculationError,
    },

    #[error("floor charge must be at least 50, got {0}")]
    InvalidFloorCharge(f64),
}

/// Persistence failures for the saved user location
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("location store I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("location store contains malformed data: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Errors surfaced by [`crate::service::DeliveryService`]
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Location(#[from] LocationError),

    #[error(transparent)]
    Geocoding(#[from] GeocodingError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
