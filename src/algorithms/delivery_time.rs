use crate::models::DeliveryTimeEstimate;

// Upper bounds (inclusive, km) of each delivery window
const SAME_DAY_MAX_KM: f64 = 10.0;
const ONE_TO_TWO_DAYS_MAX_KM: f64 = 50.0;
const TWO_TO_THREE_DAYS_MAX_KM: f64 = 100.0;
const THREE_TO_FIVE_DAYS_MAX_KM: f64 = 200.0;

/// Picks the delivery window for a distance. A lookup table, not a forecast.
pub fn estimate_delivery_time(distance_km: f64) -> DeliveryTimeEstimate {
    if distance_km <= SAME_DAY_MAX_KM {
        DeliveryTimeEstimate::SameDay
    } else if distance_km <= ONE_TO_TWO_DAYS_MAX_KM {
        DeliveryTimeEstimate::OneToTwoDays
    } else if distance_km <= TWO_TO_THREE_DAYS_MAX_KM {
        DeliveryTimeEstimate::TwoToThreeDays
    } else if distance_km <= THREE_TO_FIVE_DAYS_MAX_KM {
        DeliveryTimeEstimate::ThreeToFiveDays
    } else {
        DeliveryTimeEstimate::FiveToSevenDays
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_boundaries() {
        assert_eq!(estimate_delivery_time(0.0), DeliveryTimeEstimate::SameDay);
        assert_eq!(estimate_delivery_time(10.0), DeliveryTimeEstimate::SameDay);
        assert_eq!(estimate_delivery_time(10.01), DeliveryTimeEstimate::OneToTwoDays);
        assert_eq!(estimate_delivery_time(20.0), DeliveryTimeEstimate::OneToTwoDays);
        assert_eq!(estimate_delivery_time(50.0), DeliveryTimeEstimate::OneToTwoDays);
        assert_eq!(estimate_delivery_time(50.01), DeliveryTimeEstimate::TwoToThreeDays);
        assert_eq!(estimate_delivery_time(100.0), DeliveryTimeEstimate::TwoToThreeDays);
        assert_eq!(estimate_delivery_time(200.0), DeliveryTimeEstimate::ThreeToFiveDays);
        assert_eq!(estimate_delivery_time(200.01), DeliveryTimeEstimate::FiveToSevenDays);
    }

    #[test]
    fn test_labels_for_examples() {
        assert_eq!(
            estimate_delivery_time(20.0).label(),
            "1-2 days delivery available"
        );
        assert_eq!(
            estimate_delivery_time(50.01).label(),
            "2-3 days delivery available"
        );
    }
}
