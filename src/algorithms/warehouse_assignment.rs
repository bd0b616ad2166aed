use tracing::debug;

use crate::algorithms::delivery_time::estimate_delivery_time;
use crate::algorithms::DeliveryPricer;
use crate::error::ComputationError;
use crate::models::{
    CategoryDeliveryInfo, Coordinate, ProductCategory, WarehouseConfig, WarehouseRegistry,
};
use crate::utils::distance::distance_km;

/// Delivery info for one category's warehouse at the user's coordinate
pub fn compute_category_info<P: DeliveryPricer + ?Sized>(
    category: ProductCategory,
    warehouse: &WarehouseConfig,
    user: &Coordinate,
    pricer: &P,
) -> Result<CategoryDeliveryInfo, ComputationError> {
    let distance_km = distance_km(user, &warehouse.location)?;
    let delivery_charge = pricer.charge(distance_km, warehouse);
    let delivery_time = estimate_delivery_time(distance_km);

    debug!(
        %category,
        warehouse = %warehouse.name,
        distance_km,
        delivery_charge,
        "computed delivery info"
    );

    Ok(CategoryDeliveryInfo {
        category,
        warehouse_name: warehouse.name.clone(),
        distance_km,
        delivery_charge,
        delivery_time,
    })
}

/// Runs [`compute_category_info`] for every registered category, in category order.
///
/// Each category succeeds or fails on its own; one failure never stops the rest.
pub fn compute_all<P: DeliveryPricer + ?Sized>(
    registry: &WarehouseRegistry,
    user: &Coordinate,
    pricer: &P,
) -> Vec<(ProductCategory, Result<CategoryDeliveryInfo, ComputationError>)> {
    registry
        .iter()
        .map(|(category, warehouse)| {
            (
                category,
                compute_category_info(category, warehouse, user, pricer),
            )
        })
        .collect()
}

/// Finds the registered warehouse closest to a coordinate.
///
/// Returns the category it serves, the warehouse and the distance in km. Ties keep
/// the first category in registry order. `None` if the registry is empty or no
/// distance could be computed.
pub fn nearest_warehouse<'a>(
    registry: &'a WarehouseRegistry,
    user: &Coordinate,
) -> Option<(ProductCategory, &'a WarehouseConfig, f64)> {
    let mut nearest = None;
    let mut min_distance = f64::MAX;

    for (category, warehouse) in registry.iter() {
        let Ok(distance) = distance_km(user, &warehouse.location) else {
            continue;
        };
        if distance < min_distance {
            min_distance = distance;
            nearest = Some((category, warehouse, distance));
        }
    }

    nearest
}
