//! Cartwise prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    customers::Customer,
    fixtures::{Fixture, FixtureError},
    items::LineItem,
    orders::Order,
    promotions::{
        OrderPromotion, Promotion, PromotionError, PromotionKey, PromotionMeta,
        best::{BestPromotion, Selection, best_promo},
        function::{PromotionFn, promotion_fn},
        promotion,
        registry::PromotionRegistry,
        types::{BulkItemPromotion, FidelityPromotion, LargeOrderPromotion},
    },
    receipt::{Receipt, ReceiptError},
};
