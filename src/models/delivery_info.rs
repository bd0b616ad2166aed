// Per-category delivery quote derived from the user's location

use crate::models::{ProductCategory, Rupees};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Delivery window bucket chosen purely from distance
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DeliveryTimeEstimate {
    SameDay,
    OneToTwoDays,
    TwoToThreeDays,
    ThreeToFiveDays,
    FiveToSevenDays,
}

impl DeliveryTimeEstimate {
    /// Customer facing label
    pub fn label(&self) -> &'static str {
        match self {
            DeliveryTimeEstimate::SameDay => "Same day delivery available",
            DeliveryTimeEstimate::OneToTwoDays => "1-2 days delivery available",
            DeliveryTimeEstimate::TwoToThreeDays => "2-3 days delivery available",
            DeliveryTimeEstimate::ThreeToFiveDays => "3-5 days delivery available",
            DeliveryTimeEstimate::FiveToSevenDays => "5-7 days delivery available",
        }
    }
}

impl fmt::Display for DeliveryTimeEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Delivery details for one category at the current user location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDeliveryInfo {
    /// Category this quote applies to
    pub category: ProductCategory,

    /// Warehouse the order ships from
    pub warehouse_name: String,

    /// Straight-line distance, rounded to 2 decimals
    pub distance_km: f64,

    /// Charge after rounding and the floor
    pub delivery_charge: Rupees,

    pub delivery_time: DeliveryTimeEstimate,
}
