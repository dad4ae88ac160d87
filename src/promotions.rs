//! Promotions
//!
//! A promotion is any rule that maps an [`Order`] to a non-negative discount.
//! Rules are shared as [`Promotion`] trait objects so that any of them, or the
//! best-of selector in [`best`], can be bound to an order.

use std::{fmt, sync::Arc};

use rust_decimal::Decimal;
use slotmap::new_key_type;
use thiserror::Error;

use crate::orders::Order;

pub mod best;
pub mod function;
pub mod registry;
pub mod types;

new_key_type! {
    /// Promotion Key
    pub struct PromotionKey;
}

/// Promotion metadata
#[derive(Debug, Default, Clone)]
pub struct PromotionMeta {
    /// Promotion name
    pub name: String,
}

/// Errors raised while selecting a promotion.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PromotionError {
    /// No promotions were registered, so there is nothing to select from.
    #[error("no promotions registered; cannot select the best promotion")]
    EmptyRegistry,
}

/// A discount rule that can be applied to an order.
///
/// Implementations must be deterministic, free of side effects, and return a
/// discount between zero and [`Order::total`].
pub trait OrderPromotion: fmt::Debug + Send + Sync {
    /// Human readable name, used in logs and receipts.
    fn name(&self) -> &str;

    /// Calculate the discount this rule grants on `order`.
    fn discount(&self, order: &Order) -> Decimal;
}

/// Promotion object bound to orders and held by registries.
pub type Promotion = Arc<dyn OrderPromotion>;

/// Convert any promotion implementation into a shared promotion object.
pub fn promotion<P>(promotion: P) -> Promotion
where
    P: OrderPromotion + 'static,
{
    Arc::new(promotion)
}

#[cfg(test)]
mod tests {
    use crate::{customers::Customer, items::LineItem, promotions::types::FidelityPromotion};

    use super::*;

    #[test]
    fn promotion_helper_wraps_trait_implementation() {
        let wrapped = promotion(FidelityPromotion::default());

        let order = Order::new(
            Customer::new("Emily Taho", 1000),
            [LineItem::new("melon", 2, Decimal::new(5, 0))],
            None,
        );

        assert_eq!(wrapped.name(), "fidelity");
        assert_eq!(wrapped.discount(&order), Decimal::new(50, 2));
    }

    #[test]
    fn empty_registry_error_message() {
        assert_eq!(
            PromotionError::EmptyRegistry.to_string(),
            "no promotions registered; cannot select the best promotion"
        );
    }
}
