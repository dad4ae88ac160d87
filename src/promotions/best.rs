//! Best Promotion Selection
//!
//! Evaluates every registered promotion against an order and picks the one
//! granting the largest discount.

use std::sync::Arc;

use rust_decimal::Decimal;
use smallvec::SmallVec;
use tracing::{Span, debug};

use crate::{
    orders::Order,
    promotions::{OrderPromotion, PromotionError, PromotionKey, registry::PromotionRegistry},
};

/// The promotion that won a selection and the discount it grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Key of the winning promotion
    pub key: PromotionKey,

    /// Discount granted by the winning promotion
    pub discount: Decimal,
}

impl PromotionRegistry {
    /// Evaluate every registered promotion against `order`, in registration order.
    pub fn evaluate(&self, order: &Order) -> SmallVec<[(PromotionKey, Decimal); 4]> {
        self.iter()
            .map(|(key, promotion)| (key, promotion.discount(order)))
            .collect()
    }

    /// Select the promotion granting the largest discount on `order`.
    ///
    /// When several promotions tie, the earliest registered one is selected.
    ///
    /// # Errors
    ///
    /// Returns [`PromotionError::EmptyRegistry`] if no promotions are registered.
    #[tracing::instrument(
        name = "promotions.select",
        skip_all,
        fields(
            candidates = self.len(),
            promotion = tracing::field::Empty,
            discount = tracing::field::Empty
        )
    )]
    pub fn select(&self, order: &Order) -> Result<Selection, PromotionError> {
        let selection = self
            .evaluate(order)
            .into_iter()
            .fold(None, |best: Option<Selection>, (key, discount)| match best {
                Some(best) if best.discount >= discount => Some(best),
                _ => Some(Selection { key, discount }),
            })
            .ok_or(PromotionError::EmptyRegistry)?;

        let span = Span::current();

        if let Some(meta) = self.meta(selection.key) {
            span.record("promotion", meta.name.as_str());
        }
        span.record("discount", tracing::field::display(selection.discount));

        debug!("selected best promotion");

        Ok(selection)
    }
}

/// Return the largest discount any registered promotion grants on `order`.
///
/// # Errors
///
/// Returns [`PromotionError::EmptyRegistry`] if no promotions are registered.
pub fn best_promo(registry: &PromotionRegistry, order: &Order) -> Result<Decimal, PromotionError> {
    registry.select(order).map(|selection| selection.discount)
}

/// A promotion that grants the best discount of a populated registry.
///
/// Binding this to an [`Order`] makes `due()` apply whichever registered
/// promotion is most favourable for that order.
#[derive(Debug, Clone)]
pub struct BestPromotion {
    registry: Arc<PromotionRegistry>,
}

impl BestPromotion {
    /// Create a best-of selector over `registry`.
    ///
    /// # Errors
    ///
    /// Returns [`PromotionError::EmptyRegistry`] if the registry has no promotions.
    pub fn new(registry: Arc<PromotionRegistry>) -> Result<Self, PromotionError> {
        if registry.is_empty() {
            return Err(PromotionError::EmptyRegistry);
        }

        Ok(Self { registry })
    }

    /// The registry this selector chooses from
    pub fn registry(&self) -> &PromotionRegistry {
        &self.registry
    }
}

impl OrderPromotion for BestPromotion {
    fn name(&self) -> &str {
        "best"
    }

    fn discount(&self, order: &Order) -> Decimal {
        // The registry is non-empty (checked in `new`) and cannot change behind the `Arc`.
        best_promo(&self.registry, order).unwrap_or(Decimal::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        customers::Customer,
        items::LineItem,
        promotions::{
            function::promotion_fn,
            promotion,
            types::{BulkItemPromotion, FidelityPromotion, LargeOrderPromotion},
        },
    };

    use super::*;

    fn fruit_cart(grapes: u32) -> Vec<LineItem> {
        vec![
            LineItem::new("lemon", 4, Decimal::new(5, 1)),
            LineItem::new("grape", grapes, Decimal::new(15, 1)),
            LineItem::new("melon", 5, Decimal::new(5, 0)),
        ]
    }

    fn long_cart() -> Vec<LineItem> {
        (0..10)
            .map(|n| LineItem::new(format!("item-{n}"), 1, Decimal::ONE))
            .collect()
    }

    #[test]
    fn empty_registry_is_an_error() {
        let registry = PromotionRegistry::new();
        let order = Order::new(Customer::new("Ann", 5000), fruit_cart(10), None);

        assert_eq!(
            best_promo(&registry, &order),
            Err(PromotionError::EmptyRegistry)
        );
        assert_eq!(registry.select(&order), Err(PromotionError::EmptyRegistry));
    }

    #[test]
    fn picks_fidelity_when_it_is_largest() -> TestResult {
        let registry = PromotionRegistry::with_defaults();
        let order = Order::new(Customer::new("Emily Taho", 1100), fruit_cart(10), None);

        assert_eq!(best_promo(&registry, &order)?, Decimal::new(210, 2));

        Ok(())
    }

    #[test]
    fn picks_bulk_item_over_earlier_fidelity() -> TestResult {
        let registry = PromotionRegistry::with_defaults();
        // total 57.00: fidelity 2.85, bulk item 3.00
        let order = Order::new(Customer::new("Emily Taho", 1100), fruit_cart(20), None);

        let selection = registry.select(&order)?;

        assert_eq!(selection.discount, Decimal::new(300, 2));
        assert_eq!(
            registry.meta(selection.key).map(|meta| meta.name.as_str()),
            Some("bulk item")
        );

        Ok(())
    }

    #[test]
    fn picks_large_order_when_registered_last() -> TestResult {
        let registry = PromotionRegistry::with_defaults();
        let order = Order::new(Customer::new("Ann", 0), long_cart(), None);

        assert_eq!(best_promo(&registry, &order)?, Decimal::new(70, 2));

        Ok(())
    }

    #[test]
    fn result_does_not_depend_on_registration_order() -> TestResult {
        let mut reversed = PromotionRegistry::new();
        reversed.register(LargeOrderPromotion::default());
        reversed.register(BulkItemPromotion::default());
        reversed.register(FidelityPromotion::default());

        let forward = PromotionRegistry::with_defaults();

        for order in [
            Order::new(Customer::new("Ann", 1100), fruit_cart(10), None),
            Order::new(Customer::new("Ann", 1100), fruit_cart(20), None),
            Order::new(Customer::new("Ann", 0), long_cart(), None),
        ] {
            assert_eq!(best_promo(&forward, &order)?, best_promo(&reversed, &order)?);
        }

        Ok(())
    }

    #[test]
    fn no_qualifying_promotion_selects_zero() -> TestResult {
        let registry = PromotionRegistry::with_defaults();
        let order = Order::new(Customer::new("Clark Scot", 0), fruit_cart(10), None);

        assert_eq!(best_promo(&registry, &order)?, Decimal::ZERO);

        Ok(())
    }

    #[test]
    fn ties_go_to_the_earliest_registered() -> TestResult {
        let mut registry = PromotionRegistry::new();
        registry.register_promotion(promotion_fn("first", |_: &Order| Decimal::ONE));
        registry.register_promotion(promotion_fn("second", |_: &Order| Decimal::ONE));

        let order = Order::new(Customer::new("Ann", 0), fruit_cart(10), None);
        let selection = registry.select(&order)?;

        assert_eq!(
            registry.meta(selection.key).map(|meta| meta.name.as_str()),
            Some("first")
        );

        Ok(())
    }

    #[test]
    fn evaluate_reports_every_promotion_in_order() {
        let registry = PromotionRegistry::with_defaults();
        let order = Order::new(Customer::new("Ann", 1100), fruit_cart(20), None);

        let discounts: Vec<Decimal> = registry
            .evaluate(&order)
            .into_iter()
            .map(|(_, discount)| discount)
            .collect();

        // total 57.00
        assert_eq!(
            discounts,
            [Decimal::new(285, 2), Decimal::new(300, 2), Decimal::ZERO]
        );
    }

    #[test]
    fn best_promotion_requires_a_populated_registry() {
        let result = BestPromotion::new(Arc::new(PromotionRegistry::new()));

        assert!(matches!(result, Err(PromotionError::EmptyRegistry)));
    }

    #[test]
    fn bound_best_promotion_drives_due() -> TestResult {
        let registry = Arc::new(PromotionRegistry::with_defaults());
        let best = promotion(BestPromotion::new(registry)?);

        let order = Order::new(Customer::new("Emily Taho", 1100), fruit_cart(10), Some(best));

        assert_eq!(order.discount(), Decimal::new(210, 2));
        assert_eq!(order.due(), Decimal::new(3990, 2));
        assert!(order.due() <= order.total());

        Ok(())
    }
}
