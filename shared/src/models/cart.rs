//! Cart Line Model

use serde::{Deserialize, Serialize};

use super::food::FoodItem;

/// One item in the cart plus its requested quantity (always >= 1)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub item: FoodItem,
    pub quantity: u32,
}

impl CartLine {
    pub fn new(item: FoodItem, quantity: u32) -> Self {
        Self {
            item,
            quantity: quantity.max(1),
        }
    }

    pub fn id(&self) -> &str {
        &self.item.id
    }

    /// Parsed unit price × quantity, saturating at `i64::MAX`
    pub fn line_total(&self) -> i64 {
        self.item.unit_price().saturating_mul(i64::from(self.quantity))
    }

    /// `"2 pcs × Rp 15.000"`
    pub fn quantity_label(&self) -> String {
        format!("{} pcs × {}", self.quantity, self.item.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_total() {
        let line = CartLine::new(FoodItem::new("1", "Ayam", "Rp 10.000"), 2);
        assert_eq!(line.line_total(), 20000);
        assert_eq!(line.quantity_label(), "2 pcs × Rp 10.000");
    }

    #[test]
    fn test_quantity_is_at_least_one() {
        let line = CartLine::new(FoodItem::new("1", "Ayam", "Rp 10.000"), 0);
        assert_eq!(line.quantity, 1);
    }

    #[test]
    fn test_huge_line_total_saturates() {
        let line = CartLine::new(FoodItem::new("1", "Mahal", "Rp 9.000.000.000.000.000.000"), u32::MAX);
        assert_eq!(line.line_total(), i64::MAX);
    }

    #[test]
    fn test_unparsable_price_totals_zero() {
        let line = CartLine::new(FoodItem::new("1", "Es Teh", "Gratis"), 3);
        assert_eq!(line.line_total(), 0);
    }
}
