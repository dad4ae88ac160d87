//! Line Items

use rust_decimal::Decimal;

use crate::pricing::line_total;

/// A single cart line: a product bought in some quantity at a unit price.
#[derive(Clone, Debug, PartialEq)]
pub struct LineItem {
    product: String,
    quantity: u32,
    unit_price: Decimal,
}

impl LineItem {
    /// Creates a new line item.
    ///
    /// No range checks are made on `unit_price`; callers supply non-negative prices.
    pub fn new(product: impl Into<String>, quantity: u32, unit_price: Decimal) -> Self {
        Self {
            product: product.into(),
            quantity,
            unit_price,
        }
    }

    /// Returns the product name
    pub fn product(&self) -> &str {
        &self.product
    }

    /// Returns the number of units
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns the price of a single unit
    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    /// Returns `quantity × unit_price`, computed exactly.
    pub fn total(&self) -> Decimal {
        line_total(self.quantity, self.unit_price)
    }
}
