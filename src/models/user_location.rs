// User delivery location keyed by pincode

use crate::error::LocationError;
use crate::models::Coordinate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Six digit Indian postal code, first digit 1-9
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Pincode(String);

impl Pincode {
    pub fn new(raw: &str) -> Result<Self, LocationError> {
        let trimmed = raw.trim();
        let bytes = trimmed.as_bytes();

        if bytes.len() == 6 && bytes.iter().all(u8::is_ascii_digit) && bytes[0] != b'0' {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(LocationError::InvalidPincode(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Pincode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Pincode {
    type Err = LocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Pincode {
    type Error = LocationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Pincode> for String {
    fn from(pincode: Pincode) -> Self {
        pincode.0
    }
}

/// Result of geocoding a pincode
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GeocodedLocation {
    pub coordinate: Option<Coordinate>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub district: Option<String>,
}

/// Where the customer wants materials delivered.
///
/// Replaced wholesale whenever the pincode changes, never edited in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserLocation {
    pub pincode: Pincode,
    pub coordinate: Coordinate,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
}

impl UserLocation {
    /// Location with only a pincode and coordinate
    pub fn new(pincode: Pincode, coordinate: Coordinate) -> Self {
        Self {
            pincode,
            coordinate,
            address: None,
            city: None,
            state: None,
            district: None,
        }
    }

    /// Combines a pincode with what the geocoder found for it.
    ///
    /// Returns `None` when the geocoder produced no coordinate.
    pub fn from_geocoded(pincode: Pincode, geocoded: GeocodedLocation) -> Option<Self> {
        let coordinate = geocoded.coordinate?;
        Some(Self {
            pincode,
            coordinate,
            address: geocoded.address,
            city: geocoded.city,
            state: geocoded.state,
            district: geocoded.district,
        })
    }
}
