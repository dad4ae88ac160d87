//! Promotion Registry
//!
//! An ordered, append-only collection of promotions. A registry is populated
//! once at startup, then shared read-only (typically behind an `Arc`) with
//! anything that selects promotions.

use slotmap::SlotMap;
use smallvec::SmallVec;
use tracing::debug;

use crate::promotions::{
    OrderPromotion, Promotion, PromotionKey, PromotionMeta, promotion,
    types::{BulkItemPromotion, FidelityPromotion, LargeOrderPromotion},
};

/// Registered promotions in registration order.
#[derive(Debug, Default)]
pub struct PromotionRegistry {
    meta: SlotMap<PromotionKey, PromotionMeta>,
    promotions: Vec<(PromotionKey, Promotion)>,
}

impl PromotionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the fidelity, bulk item and large order
    /// promotions with their default settings.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register_defaults();

        registry
    }

    /// Register the fidelity, bulk item and large order promotions, in that order.
    pub fn register_defaults(&mut self) -> &mut Self {
        self.register(FidelityPromotion::default());
        self.register(BulkItemPromotion::default());
        self.register(LargeOrderPromotion::default());

        self
    }

    /// Append a promotion and return it unchanged as a shared promotion object.
    pub fn register<P>(&mut self, rule: P) -> Promotion
    where
        P: OrderPromotion + 'static,
    {
        self.register_promotion(promotion(rule))
    }

    /// Append an already shared promotion and return the same object.
    pub fn register_promotion(&mut self, promotion: Promotion) -> Promotion {
        let key = self.meta.insert(PromotionMeta {
            name: promotion.name().to_string(),
        });

        debug!(
            promotion = promotion.name(),
            ?key,
            position = self.promotions.len(),
            "registered promotion"
        );

        self.promotions.push((key, promotion.clone()));

        promotion
    }

    /// Number of registered promotions
    pub fn len(&self) -> usize {
        self.promotions.len()
    }

    /// Whether no promotions have been registered
    pub fn is_empty(&self) -> bool {
        self.promotions.is_empty()
    }

    /// Iterate over registered promotions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (PromotionKey, &Promotion)> {
        self.promotions
            .iter()
            .map(|(key, promotion)| (*key, promotion))
    }

    /// Look up a promotion by key.
    pub fn get(&self, key: PromotionKey) -> Option<&Promotion> {
        self.promotions
            .iter()
            .find(|(candidate, _)| *candidate == key)
            .map(|(_, promotion)| promotion)
    }

    /// Look up promotion metadata by key.
    pub fn meta(&self, key: PromotionKey) -> Option<&PromotionMeta> {
        self.meta.get(key)
    }

    /// Keys of registered promotions in registration order.
    pub fn keys(&self) -> SmallVec<[PromotionKey; 4]> {
        self.promotions.iter().map(|(key, _)| *key).collect()
    }
}
