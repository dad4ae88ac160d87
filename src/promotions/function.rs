//! Function Promotions
//!
//! Lets a plain function or closure act as a promotion rule.

use std::fmt;

use rust_decimal::Decimal;

use crate::{
    orders::Order,
    promotions::{OrderPromotion, Promotion, promotion},
};

/// A named function used as a promotion rule.
pub struct PromotionFn<F> {
    name: String,
    rule: F,
}

impl<F> PromotionFn<F>
where
    F: Fn(&Order) -> Decimal + Send + Sync,
{
    /// Wrap `rule` under the given name.
    pub fn new(name: impl Into<String>, rule: F) -> Self {
        Self {
            name: name.into(),
            rule,
        }
    }
}

impl<F> fmt::Debug for PromotionFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PromotionFn")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl<F> OrderPromotion for PromotionFn<F>
where
    F: Fn(&Order) -> Decimal + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn discount(&self, order: &Order) -> Decimal {
        (self.rule)(order)
    }
}

/// Wrap a function as a shared promotion object.
pub fn promotion_fn<F>(name: impl Into<String>, rule: F) -> Promotion
where
    F: Fn(&Order) -> Decimal + Send + Sync + 'static,
{
    promotion(PromotionFn::new(name, rule))
}
