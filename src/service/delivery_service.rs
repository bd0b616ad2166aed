use std::sync::Arc;
use tracing::{debug, info};

use crate::algorithms::delivery_charge::FlooredRatePricer;
use crate::algorithms::warehouse_assignment::nearest_warehouse;
use crate::algorithms::DeliveryPricer;
use crate::error::{GeocodingError, ServiceError};
use crate::models::{
    CartLine, CartQuote, CategoryDeliveryInfo, LineQuote, Pincode, ProductCategory, Rupees,
    UserLocation, WarehouseConfig, WarehouseRegistry,
};
use crate::service::cache::{DeliveryInfoCache, DeliverySnapshot};
use crate::utils::geocoder::Geocoder;
use crate::utils::location_store::LocationStore;

/// Ties the geocoder, location persistence and delivery info cache together.
///
/// This is the state container the storefront talks to: it owns the single
/// current snapshot and is the only thing that replaces it.
pub struct DeliveryService<G, S, P = FlooredRatePricer> {
    geocoder: G,
    store: S,
    registry: WarehouseRegistry,
    pricer: P,
    cache: DeliveryInfoCache,
}

impl<G: Geocoder, S: LocationStore> DeliveryService<G, S> {
    /// Service with the default floored per-km pricer
    pub fn new(geocoder: G, store: S, registry: WarehouseRegistry) -> Self {
        Self::with_pricer(geocoder, store, registry, FlooredRatePricer::default())
    }
}

impl<G: Geocoder, S: LocationStore, P: DeliveryPricer> DeliveryService<G, S, P> {
    pub fn with_pricer(geocoder: G, store: S, registry: WarehouseRegistry, pricer: P) -> Self {
        Self {
            geocoder,
            store,
            registry,
            pricer,
            cache: DeliveryInfoCache::new(),
        }
    }

    pub fn registry(&self) -> &WarehouseRegistry {
        &self.registry
    }

    pub fn cache(&self) -> &DeliveryInfoCache {
        &self.cache
    }

    /// Current location, if one has been set or restored
    pub fn location(&self) -> Option<UserLocation> {
        self.cache
            .snapshot()
            .map(|snapshot| snapshot.location().clone())
    }

    /// Loads the persisted location, if any, and computes delivery info for it
    pub fn restore(&mut self) -> Result<Option<Arc<DeliverySnapshot>>, ServiceError> {
        match self.store.load()? {
            Some(location) => {
                debug!(pincode = %location.pincode, "restoring saved location");
                Ok(Some(self.recompute(location)))
            }
            None => Ok(None),
        }
    }

    /// Geocodes a new pincode, saves the resulting location and recomputes.
    ///
    /// Geocoding errors are returned unchanged and leave the current snapshot in place.
    pub fn change_pincode(
        &mut self,
        pincode: &str,
    ) -> Result<Arc<DeliverySnapshot>, ServiceError> {
        let pincode = Pincode::new(pincode)?;
        let geocoded = self.geocoder.geocode(&pincode)?;

        let location = UserLocation::from_geocoded(pincode.clone(), geocoded)
            .ok_or_else(|| GeocodingError::NotFound(pincode.to_string()))?;

        info!(pincode = %location.pincode, city = ?location.city, "delivery location changed");
        self.set_location(location)
    }

    /// Saves an already resolved location and recomputes.
    ///
    /// A failed save is returned as [`ServiceError::Store`] and the current snapshot stays.
    pub fn set_location(
        &mut self,
        location: UserLocation,
    ) -> Result<Arc<DeliverySnapshot>, ServiceError> {
        self.store.save(&location)?;
        Ok(self.recompute(location))
    }

    /// Forgets the saved location and returns to the uninitialized state
    pub fn clear_location(&mut self) -> Result<(), ServiceError> {
        self.store.clear()?;
        self.cache.reset();
        Ok(())
    }

    fn recompute(&mut self, location: UserLocation) -> Arc<DeliverySnapshot> {
        self.cache.recompute(location, &self.registry, &self.pricer)
    }

    /// Delivery info for a catalogue category name.
    ///
    /// `None` for unknown categories, categories without a warehouse, failed
    /// computations, or before any location is set.
    pub fn delivery_info_for_category(&self, category: &str) -> Option<CategoryDeliveryInfo> {
        let category = ProductCategory::parse(category)?;
        self.cache.get(category).cloned()
    }

    /// `base_price * quantity` plus the category's delivery charge when known
    pub fn calculate_product_price(
        &self,
        base_price: Rupees,
        category: &str,
        quantity: u32,
    ) -> Rupees {
        self.cache
            .product_price(base_price, ProductCategory::parse(category), quantity)
    }

    /// Warehouse closest to the current location
    pub fn nearest_warehouse(&self) -> Option<(ProductCategory, &WarehouseConfig, f64)> {
        let snapshot = self.cache.snapshot()?;
        nearest_warehouse(&self.registry, &snapshot.location().coordinate)
    }

    /// Prices every cart line against the current snapshot.
    ///
    /// Each line carries its own category's delivery charge.
    pub fn quote_cart(&self, lines: &[CartLine]) -> CartQuote {
        let snapshot = self.cache.snapshot();

        lines.iter().fold(CartQuote::default(), |mut quote, line| {
            let category = line.product_category();
            let info = snapshot
                .as_deref()
                .zip(category)
                .and_then(|(snapshot, category)| snapshot.get(category));
            let delivery_charge = info.map_or(0.0, |info| info.delivery_charge);

            quote.push(LineQuote {
                product_name: line.product_name.clone(),
                category,
                subtotal: line.subtotal(),
                delivery_charge,
                delivery_available: info.is_some(),
                total: self.cache.product_price(line.base_price, category, line.quantity),
            });
            quote
        })
    }
}
