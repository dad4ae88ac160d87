//! Orders

use std::fmt;

use rust_decimal::Decimal;
use tracing::warn;

use crate::{
    customers::Customer,
    items::LineItem,
    pricing::{to_cents, total_price},
    promotions::Promotion,
};

/// A customer's cart, optionally bound to a single promotion.
///
/// Orders are immutable; binding a different promotion builds a new order
/// with [`Order::with_promotion`].
#[derive(Clone, Debug)]
pub struct Order {
    customer: Customer,
    cart: Vec<LineItem>,
    promotion: Option<Promotion>,
}

impl Order {
    /// Create a new order.
    pub fn new(
        customer: Customer,
        cart: impl Into<Vec<LineItem>>,
        promotion: Option<Promotion>,
    ) -> Self {
        Self {
            customer,
            cart: cart.into(),
            promotion,
        }
    }

    /// Build a new order for the same customer and cart, bound to `promotion`.
    #[must_use]
    pub fn with_promotion(self, promotion: Promotion) -> Self {
        Self {
            promotion: Some(promotion),
            ..self
        }
    }

    /// The customer who placed the order
    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    /// Line items in cart order
    pub fn cart(&self) -> &[LineItem] {
        &self.cart
    }

    /// The bound promotion, if any
    pub fn promotion(&self) -> Option<&Promotion> {
        self.promotion.as_ref()
    }

    /// Total before any discount.
    pub fn total(&self) -> Decimal {
        total_price(&self.cart)
    }

    /// Discount produced by the bound promotion, zero when none is bound.
    pub fn discount(&self) -> Decimal {
        let Some(promotion) = &self.promotion else {
            return Decimal::ZERO;
        };

        let discount = promotion.discount(self);

        if discount > self.total() {
            warn!(
                promotion = promotion.name(),
                %discount,
                total = %self.total(),
                "promotion discount exceeds order total"
            );
        }

        discount
    }

    /// Amount due after applying the bound promotion.
    pub fn due(&self) -> Decimal {
        self.total() - self.discount()
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Order total: {} due(fee): {}>",
            to_cents(self.total()),
            to_cents(self.due())
        )
    }
}
