//! Cartwise
//!
//! Cartwise prices shopping orders against interchangeable promotion rules and
//! picks the most favourable one.
//!
//! Orders are plain immutable records ([`orders::Order`]) priced with exact
//! decimal arithmetic. Promotions implement [`promotions::OrderPromotion`],
//! are collected once at startup in a [`promotions::registry::PromotionRegistry`]
//! and compared with [`promotions::best::best_promo`].

pub mod customers;
pub mod fixtures;
pub mod items;
pub mod orders;
pub mod prelude;
pub mod pricing;
pub mod promotions;
pub mod receipt;
