//! Fidelity Promotion
//!
//! A percentage off the whole order for customers with enough loyalty points.

use rust_decimal::Decimal;

use crate::{orders::Order, pricing::percent_of, promotions::OrderPromotion};

/// Percentage off the order total once a customer reaches a points threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FidelityPromotion {
    min_points: u64,
    rate: Decimal,
}

impl FidelityPromotion {
    /// Create a new fidelity promotion. `rate` is fractional: `0.05` is 5%.
    pub fn new(min_points: u64, rate: Decimal) -> Self {
        Self { min_points, rate }
    }

    /// Points a customer needs to qualify
    pub fn min_points(&self) -> u64 {
        self.min_points
    }

    /// Fraction of the order total given as discount
    pub fn rate(&self) -> Decimal {
        self.rate
    }
}

impl Default for FidelityPromotion {
    /// 5% off for customers with 1000 or more points.
    fn default() -> Self {
        Self::new(1000, Decimal::new(5, 2))
    }
}

impl OrderPromotion for FidelityPromotion {
    fn name(&self) -> &str {
        "fidelity"
    }

    fn discount(&self, order: &Order) -> Decimal {
        if order.customer().fidelity >= self.min_points {
            percent_of(self.rate, order.total())
        } else {
            Decimal::ZERO
        }
    }
}
