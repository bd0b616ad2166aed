pub mod config;
pub mod distance;
pub mod geocoder;
pub mod location_store;
