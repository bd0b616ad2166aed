// Per-session delivery info, replaced wholesale on every location change

use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, warn};

use crate::algorithms::price_composer::total_price;
use crate::algorithms::warehouse_assignment::compute_all;
use crate::algorithms::DeliveryPricer;
use crate::error::ComputationError;
use crate::models::{
    CategoryDeliveryInfo, ProductCategory, Rupees, UserLocation, WarehouseRegistry,
};

/// Immutable result of one full recompute
#[derive(Debug, Clone, PartialEq)]
pub struct DeliverySnapshot {
    location: UserLocation,
    entries: BTreeMap<ProductCategory, CategoryDeliveryInfo>,
    omitted: Vec<ProductCategory>,
}

impl DeliverySnapshot {
    /// Collects per-category results, keeping successes and dropping failures.
    ///
    /// Failed categories are logged and listed in [`DeliverySnapshot::omitted`]; queries
    /// for them behave like an unknown category.
    pub fn from_results<I>(location: UserLocation, results: I) -> Self
    where
        I: IntoIterator<Item = (ProductCategory, Result<CategoryDeliveryInfo, ComputationError>)>,
    {
        let mut entries = BTreeMap::new();
        let mut omitted = Vec::new();

        for (category, result) in results {
            match result {
                Ok(info) => {
                    entries.insert(category, info);
                }
                Err(e) => {
                    warn!(%category, error = %e, "omitting category from delivery info");
                    omitted.push(category);
                }
            }
        }

        Self {
            location,
            entries,
            omitted,
        }
    }

    /// Location this snapshot was computed for
    pub fn location(&self) -> &UserLocation {
        &self.location
    }

    pub fn get(&self, category: ProductCategory) -> Option<&CategoryDeliveryInfo> {
        self.entries.get(&category)
    }

    /// Categories whose computation failed
    pub fn omitted(&self) -> &[ProductCategory] {
        &self.omitted
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryDeliveryInfo> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Delivery charge for a category, zero when no info is available
    pub fn delivery_charge(&self, category: Option<ProductCategory>) -> Rupees {
        category
            .and_then(|category| self.get(category))
            .map_or(0.0, |info| info.delivery_charge)
    }

    /// Unit price times quantity plus the category's delivery charge
    pub fn product_price(
        &self,
        base_price: Rupees,
        category: Option<ProductCategory>,
        quantity: u32,
    ) -> Rupees {
        total_price(base_price, self.delivery_charge(category), quantity)
    }
}

/// Cache lifecycle. There is no error state: failures only shrink the snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CacheState {
    #[default]
    Uninitialized,
    Computed(Arc<DeliverySnapshot>),
}

/// Owns the current [`DeliverySnapshot`].
///
/// A recompute builds a complete new snapshot and swaps it in with one assignment.
/// Readers holding an `Arc` from [`DeliveryInfoCache::snapshot`] keep the old view.
#[derive(Debug, Clone, Default)]
pub struct DeliveryInfoCache {
    state: CacheState,
}

impl DeliveryInfoCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &CacheState {
        &self.state
    }

    pub fn is_computed(&self) -> bool {
        matches!(self.state, CacheState::Computed(_))
    }

    /// Current snapshot, `None` before the first location is set
    pub fn snapshot(&self) -> Option<Arc<DeliverySnapshot>> {
        match &self.state {
            CacheState::Uninitialized => None,
            CacheState::Computed(snapshot) => Some(Arc::clone(snapshot)),
        }
    }

    /// Recomputes every registered category for `location` and replaces the snapshot
    pub fn recompute<P: DeliveryPricer + ?Sized>(
        &mut self,
        location: UserLocation,
        registry: &WarehouseRegistry,
        pricer: &P,
    ) -> Arc<DeliverySnapshot> {
        let results = compute_all(registry, &location.coordinate, pricer);
        let snapshot = Arc::new(DeliverySnapshot::from_results(location, results));

        info!(
            pincode = %snapshot.location().pincode,
            categories = snapshot.len(),
            omitted = snapshot.omitted().len(),
            "delivery info recomputed"
        );

        self.state = CacheState::Computed(Arc::clone(&snapshot));
        snapshot
    }

    /// Drops the snapshot and returns to the uninitialized state
    pub fn reset(&mut self) {
        self.state = CacheState::Uninitialized;
    }

    pub fn get(&self, category: ProductCategory) -> Option<&CategoryDeliveryInfo> {
        match &self.state {
            CacheState::Uninitialized => None,
            CacheState::Computed(snapshot) => snapshot.get(category),
        }
    }

    /// Price with delivery when known, otherwise `base_price * quantity`
    pub fn product_price(
        &self,
        base_price: Rupees,
        category: Option<ProductCategory>,
        quantity: u32,
    ) -> Rupees {
        match &self.state {
            CacheState::Uninitialized => total_price(base_price, 0.0, quantity),
            CacheState::Computed(snapshot) => {
                snapshot.product_price(base_price, category, quantity)
            }
        }
    }
}
