// Pincode geocoding seam

use std::collections::HashMap;

use crate::error::GeocodingError;
use crate::models::{Coordinate, GeocodedLocation, Pincode};

/// Resolves a pincode to a coordinate and postal address fields.
///
/// Implementations own retries and transport, callers only see the final outcome.
pub trait Geocoder {
    fn geocode(&self, pincode: &Pincode) -> Result<GeocodedLocation, GeocodingError>;
}

impl<G: Geocoder + ?Sized> Geocoder for &G {
    fn geocode(&self, pincode: &Pincode) -> Result<GeocodedLocation, GeocodingError> {
        (**self).geocode(pincode)
    }
}

/// In-memory pincode table
#[derive(Debug, Clone, Default)]
pub struct StaticGeocoder {
    entries: HashMap<String, GeocodedLocation>,
}

impl StaticGeocoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the entry for a pincode
    pub fn insert(&mut self, pincode: &Pincode, location: GeocodedLocation) {
        self.entries.insert(pincode.as_str().to_string(), location);
    }

    /// Builder form of [`StaticGeocoder::insert`] for the common city/district case
    pub fn with_place(
        mut self,
        pincode: &Pincode,
        coordinate: Coordinate,
        city: &str,
        district: &str,
        state: &str,
    ) -> Self {
        self.insert(
            pincode,
            GeocodedLocation {
                coordinate: Some(coordinate),
                address: Some(format!("{district}, {city}, {state} {pincode}")),
                city: Some(city.to_string()),
                state: Some(state.to_string()),
                district: Some(district.to_string()),
            },
        );
        self
    }

    /// Pincodes around Hyderabad plus a few distant ones
    pub fn hyderabad() -> Self {
        let places = [
            ("500001", 17.3850, 78.4867, "Hyderabad", "Abids", "Telangana"),
            ("500032", 17.4401, 78.3489, "Hyderabad", "Gachibowli", "Telangana"),
            ("500072", 17.4948, 78.3996, "Hyderabad", "Kukatpally", "Telangana"),
            ("500081", 17.4504, 78.3808, "Hyderabad", "Madhapur", "Telangana"),
            ("501401", 17.6297, 78.4814, "Medchal", "Medchal-Malkajgiri", "Telangana"),
            ("509216", 17.0716, 78.2037, "Shadnagar", "Rangareddy", "Telangana"),
            ("506002", 17.9689, 79.5941, "Warangal", "Hanamkonda", "Telangana"),
            ("530001", 17.6868, 83.2185, "Visakhapatnam", "Visakhapatnam", "Andhra Pradesh"),
        ];

        places
            .into_iter()
            .filter_map(|(code, lat, lon, city, district, state)| {
                Pincode::new(code)
                    .ok()
                    .map(|pincode| (pincode, Coordinate::new(lat, lon), city, district, state))
            })
            .fold(
                Self::new(),
                |geocoder, (pincode, coordinate, city, district, state)| {
                    geocoder.with_place(&pincode, coordinate, city, district, state)
                },
            )
    }
}

impl Geocoder for StaticGeocoder {
    fn geocode(&self, pincode: &Pincode) -> Result<GeocodedLocation, GeocodingError> {
        self.entries
            .get(pincode.as_str())
            .cloned()
            .ok_or_else(|| GeocodingError::NotFound(pincode.to_string()))
    }
}
