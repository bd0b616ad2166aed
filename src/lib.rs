// Public modules
pub mod algorithms;
pub mod error;
pub mod models;
pub mod service;
pub mod utils;

// Re-exports for convenience
pub use algorithms::delivery_charge::FlooredRatePricer;
pub use algorithms::DeliveryPricer;
pub use error::{
    ComputationError, ConfigError, DistanceCalculationError, GeocodingError, LocationError,
    ServiceError, StoreError, UnknownCategory,
};
pub use models::{
    CartLine, CartQuote, CategoryDeliveryInfo, Coordinate, DeliveryTimeEstimate, Pincode,
    ProductCategory, UserLocation, WarehouseConfig, WarehouseRegistry,
};
pub use service::{DeliveryInfoCache, DeliveryService, DeliverySnapshot};
