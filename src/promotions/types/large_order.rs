//! Large Order Promotion

use rust_decimal::Decimal;
use rustc_hash::FxHashSet;

use crate::{items::LineItem, orders::Order, pricing::percent_of, promotions::OrderPromotion};

/// Percentage off the order total when the cart holds enough distinct products.
///
/// Products are counted by name, so two lines of the same product count once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LargeOrderPromotion {
    min_distinct_products: usize,
    rate: Decimal,
}

impl LargeOrderPromotion {
    /// Create a new large order promotion. `rate` is fractional: `0.07` is 7%.
    pub fn new(min_distinct_products: usize, rate: Decimal) -> Self {
        Self {
            min_distinct_products,
            rate,
        }
    }

    /// Distinct products an order needs to qualify
    pub fn min_distinct_products(&self) -> usize {
        self.min_distinct_products
    }

    /// Fraction of the order total given as discount
    pub fn rate(&self) -> Decimal {
        self.rate
    }
}

impl Default for LargeOrderPromotion {
    /// 7% off orders with 10 or more distinct products.
    fn default() -> Self {
        Self::new(10, Decimal::new(7, 2))
    }
}

/// Count the distinct product names in an order's cart.
fn distinct_products(order: &Order) -> usize {
    order
        .cart()
        .iter()
        .map(LineItem::product)
        .collect::<FxHashSet<_>>()
        .len()
}

impl OrderPromotion for LargeOrderPromotion {
    fn name(&self) -> &str {
        "large order"
    }

    fn discount(&self, order: &Order) -> Decimal {
        if distinct_products(order) >= self.min_distinct_products {
            percent_of(self.rate, order.total())
        } else {
            Decimal::ZERO
        }
    }
}
