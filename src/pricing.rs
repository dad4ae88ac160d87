//! Pricing
//!
//! Exact decimal arithmetic shared by line items, orders and promotions.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::items::LineItem;

/// Calculates the total price of a line: `quantity × unit_price`.
pub fn line_total(quantity: u32, unit_price: Decimal) -> Decimal {
    Decimal::from(quantity) * unit_price
}

/// Calculates the total price of a list of line items.
///
/// An empty list totals zero.
pub fn total_price(items: &[LineItem]) -> Decimal {
    items.iter().map(LineItem::total).sum()
}

/// Applies a fractional rate (`0.05` for 5%) to an amount without rounding.
pub fn percent_of(rate: Decimal, amount: Decimal) -> Decimal {
    amount * rate
}

/// Rounds an amount to two decimal places, half to even, keeping trailing zeros.
pub fn to_cents(amount: Decimal) -> Decimal {
    let mut cents = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    cents.rescale(2);

    cents
}
