// Cart lines and the priced quote built from them

use crate::models::{ProductCategory, Rupees};
use serde::{Deserialize, Serialize};

/// One product line in the customer's cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Name of the product
    pub product_name: String,

    /// Catalogue category string, resolved leniently when priced
    pub category: String,

    /// Unit price before delivery
    pub base_price: Rupees,

    pub quantity: u32,
}

impl CartLine {
    /// Creates a new cart line
    pub fn new<S: Into<String>, C: Into<String>>(
        product_name: S,
        category: C,
        base_price: Rupees,
        quantity: u32,
    ) -> Self {
        Self {
            product_name: product_name.into(),
            category: category.into(),
            base_price,
            quantity,
        }
    }

    /// Category if the catalogue string names a known one
    pub fn product_category(&self) -> Option<ProductCategory> {
        ProductCategory::parse(&self.category)
    }

    /// Price of the goods alone
    pub fn subtotal(&self) -> Rupees {
        self.base_price * self.quantity as f64
    }
}

/// Priced version of a cart line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineQuote {
    pub product_name: String,
    pub category: Option<ProductCategory>,
    pub subtotal: Rupees,

    /// Zero when delivery info for the category is unavailable
    pub delivery_charge: Rupees,

    pub delivery_available: bool,

    pub total: Rupees,
}

/// Priced cart
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CartQuote {
    pub lines: Vec<LineQuote>,
    pub subtotal: Rupees,
    pub delivery_total: Rupees,
    pub total: Rupees,
}

impl CartQuote {
    /// Appends a priced line and updates the running totals
    pub fn push(&mut self, line: LineQuote) {
        self.subtotal += line.subtotal;
        self.delivery_total += line.delivery_charge;
        self.total += line.total;
        self.lines.push(line);
    }

    /// Lines whose category had no delivery info
    pub fn lines_without_delivery(&self) -> impl Iterator<Item = &LineQuote> {
        self.lines.iter().filter(|line| !line.delivery_available)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_line() {
        let line = CartLine::new("UltraTech OPC 53", "Cement", 420.0, 3);
        assert_eq!(line.product_category(), Some(ProductCategory::Cement));
        assert_eq!(line.subtotal(), 1260.0);

        let unknown = CartLine::new("Wall Putty", "Paint", 100.0, 1);
        assert_eq!(unknown.product_category(), None);
    }

    #[test]
    fn test_cart_quote_totals() {
        let mut quote = CartQuote::default();
        quote.push(LineQuote {
            product_name: "Cement".to_string(),
            category: Some(ProductCategory::Cement),
            subtotal: 800.0,
            delivery_charge: 120.0,
            delivery_available: true,
            total: 920.0,
        });
        quote.push(LineQuote {
            product_name: "Putty".to_string(),
            category: None,
            subtotal: 200.0,
            delivery_charge: 0.0,
            delivery_available: false,
            total: 200.0,
        });

        assert_eq!(quote.subtotal, 1000.0);
        assert_eq!(quote.delivery_total, 120.0);
        assert_eq!(quote.total, 1120.0);
        assert_eq!(quote.lines_without_delivery().count(), 1);
    }
}
