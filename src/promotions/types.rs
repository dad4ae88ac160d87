//! Promotion Types

mod bulk_item;
mod fidelity;
mod large_order;

pub use bulk_item::BulkItemPromotion;
pub use fidelity::FidelityPromotion;
pub use large_order::LargeOrderPromotion;
