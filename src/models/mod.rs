// Models module - exports all model types

mod cart;
mod category;
mod coordinate;
mod delivery_info;
mod user_location;
mod warehouse;

// Re-export model types
pub use self::cart::{CartLine, CartQuote, LineQuote};
pub use self::category::ProductCategory;
pub use self::coordinate::Coordinate;
pub use self::delivery_info::{CategoryDeliveryInfo, DeliveryTimeEstimate};
pub use self::user_location::{GeocodedLocation, Pincode, UserLocation};
pub use self::warehouse::{WarehouseConfig, WarehouseRegistry};

/// Currency amount in rupees
pub type Rupees = f64;

/// Minimum delivery fee collected on any order
pub const FLOOR_CHARGE: Rupees = 50.0;
