pub mod cache;
mod delivery_service;

pub use self::cache::{CacheState, DeliveryInfoCache, DeliverySnapshot};
pub use self::delivery_service::DeliveryService;
