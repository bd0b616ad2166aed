// Distance calculation utilities

use geo::HaversineDistance;

use crate::error::DistanceCalculationError;
use crate::models::Coordinate;

/// Rounds a value to 2 decimal places, halves away from zero
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Great-circle distance in kilometres between two coordinates, rounded to 2 decimals.
///
/// Fails if either coordinate is NaN, infinite or outside the valid degree ranges.
pub fn distance_km(from: &Coordinate, to: &Coordinate) -> Result<f64, DistanceCalculationError> {
    let from = from.validated()?.to_point();
    let to = to.validated()?.to_point();

    let meters = from.haversine_distance(&to);
    Ok(round_to_cents(meters / 1000.0))
}
