use crate::models::Rupees;

/// `base_price * quantity + delivery_charge`.
///
/// Quantity is not validated; callers clamp it to at least 1.
pub fn total_price(base_price: Rupees, delivery_charge: Rupees, quantity: u32) -> Rupees {
    base_price * quantity as f64 + delivery_charge
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_price() {
        assert_eq!(total_price(100.0, 0.0, 2), 200.0);
        assert_eq!(total_price(420.0, 96.0, 3), 1356.0);
        assert_eq!(total_price(99.5, 50.0, 1), 149.5);
    }

    #[test]
    fn test_zero_quantity_is_not_clamped() {
        assert_eq!(total_price(100.0, 50.0, 0), 50.0);
    }
}
