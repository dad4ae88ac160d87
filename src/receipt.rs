//! Receipt

use std::io;

use rust_decimal::Decimal;
use rusty_money::{Money, MoneyError, iso::Currency};
use smallvec::SmallVec;
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};
use thiserror::Error;

use crate::{orders::Order, pricing::to_cents};

/// Errors that can occur when building or printing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// Wrapper for money errors.
    #[error(transparent)]
    Money(#[from] MoneyError),

    /// IO error
    #[error("IO error")]
    IO,
}

/// A single line on a receipt.
#[derive(Debug, Clone)]
pub struct ReceiptLine<'a> {
    /// Product name
    pub product: String,

    /// Units bought
    pub quantity: u32,

    /// Price of a single unit
    pub unit_price: Money<'a, Currency>,

    /// `quantity × unit_price`
    pub total: Money<'a, Currency>,
}

/// Final receipt for an order.
#[derive(Debug, Clone)]
pub struct Receipt<'a> {
    /// Lines in cart order
    lines: SmallVec<[ReceiptLine<'a>; 10]>,

    /// Name of the promotion bound to the order, if any
    promotion: Option<String>,

    /// Total cost before any discount
    subtotal: Money<'a, Currency>,

    /// Total amount due after the discount
    total: Money<'a, Currency>,

    /// Currency used for all monetary values
    currency: &'static Currency,
}

impl<'a> Receipt<'a> {
    /// Build a receipt for `order`, expressing every amount in `currency`.
    pub fn from_order(order: &Order, currency: &'static Currency) -> Receipt<'a> {
        let lines = order
            .cart()
            .iter()
            .map(|item| ReceiptLine {
                product: item.product().to_string(),
                quantity: item.quantity(),
                unit_price: money(item.unit_price(), currency),
                total: money(item.total(), currency),
            })
            .collect();

        Receipt {
            lines,
            promotion: order.promotion().map(|promotion| promotion.name().to_string()),
            subtotal: money(order.total(), currency),
            total: money(order.due(), currency),
            currency,
        }
    }

    /// Lines in cart order
    pub fn lines(&self) -> &[ReceiptLine<'a>] {
        &self.lines
    }

    /// Name of the applied promotion
    pub fn promotion(&self) -> Option<&str> {
        self.promotion.as_deref()
    }

    /// Total cost before any discount
    pub fn subtotal(&self) -> Money<'a, Currency> {
        self.subtotal
    }

    /// Total amount due
    pub fn total(&self) -> Money<'a, Currency> {
        self.total
    }

    /// Currency used for all monetary values.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Calculate the savings made by applying the promotion.
    ///
    /// # Errors
    ///
    /// Returns a [`MoneyError`] if the subtraction operation fails.
    pub fn savings(&self) -> Result<Money<'a, Currency>, MoneyError> {
        self.subtotal.sub(self.total)
    }

    /// Prints the receipt as a table followed by a summary.
    ///
    /// # Errors
    ///
    /// Returns an error if the savings cannot be calculated or the output cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReceiptError> {
        let mut builder = Builder::default();

        builder.push_record(["Product", "Qty", "Unit Price", "Total"]);

        for line in &self.lines {
            builder.push_record([
                line.product.clone(),
                line.quantity.to_string(),
                line.unit_price.to_string(),
                line.total.to_string(),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern_rounded());
        table.modify(Columns::new(1..4), Alignment::right());

        writeln!(out, "\n{table}").map_err(|_err| ReceiptError::IO)?;

        let savings = self.savings()?;

        writeln!(out, " Subtotal:  {}", self.subtotal).map_err(|_err| ReceiptError::IO)?;
        writeln!(
            out,
            " Promotion: {}",
            self.promotion.as_deref().unwrap_or("none")
        )
        .map_err(|_err| ReceiptError::IO)?;
        writeln!(out, " Savings:   {savings}").map_err(|_err| ReceiptError::IO)?;
        writeln!(out, " Total:     {}", self.total).map_err(|_err| ReceiptError::IO)?;

        Ok(())
    }
}

/// Convert an exact amount to money, rounded to the nearest cent.
fn money(amount: Decimal, currency: &'static Currency) -> Money<'static, Currency> {
    Money::from_decimal(to_cents(amount), currency)
}
