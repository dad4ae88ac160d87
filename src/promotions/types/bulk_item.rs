//! Bulk Item Promotion

use rust_decimal::Decimal;

use crate::{items::LineItem, orders::Order, pricing::percent_of, promotions::OrderPromotion};

/// Percentage off every line bought in bulk.
///
/// Each line with at least `min_quantity` units is discounted by `rate` of its
/// own total; the discounts of all qualifying lines are summed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulkItemPromotion {
    min_quantity: u32,
    rate: Decimal,
}

impl BulkItemPromotion {
    /// Create a new bulk item promotion. `rate` is fractional: `0.1` is 10%.
    pub fn new(min_quantity: u32, rate: Decimal) -> Self {
        Self { min_quantity, rate }
    }

    /// Units a line needs to qualify
    pub fn min_quantity(&self) -> u32 {
        self.min_quantity
    }

    /// Fraction of each qualifying line total given as discount
    pub fn rate(&self) -> Decimal {
        self.rate
    }

    fn qualifies(&self, item: &LineItem) -> bool {
        item.quantity() >= self.min_quantity
    }
}

impl Default for BulkItemPromotion {
    /// 10% off each line with 20 or more units.
    fn default() -> Self {
        Self::new(20, Decimal::new(1, 1))
    }
}

impl OrderPromotion for BulkItemPromotion {
    fn name(&self) -> &str {
        "bulk item"
    }

    fn discount(&self, order: &Order) -> Decimal {
        order
            .cart()
            .iter()
            .filter(|item| self.qualifies(item))
            .map(|item| percent_of(self.rate, item.total()))
            .sum()
    }
}
