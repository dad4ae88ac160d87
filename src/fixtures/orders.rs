//! Order Fixtures

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use rusty_money::iso::{Currency, EUR, GBP, USD};
use serde::Deserialize;

use crate::{customers::Customer, fixtures::FixtureError};

/// Wrapper for an order set in YAML
#[derive(Debug, Deserialize)]
pub struct OrderSetFixture {
    /// Map of customer key -> customer fixture
    #[serde(default)]
    pub customers: FxHashMap<String, CustomerFixture>,

    /// Map of cart key -> cart lines
    #[serde(default)]
    pub carts: FxHashMap<String, Vec<LineItemFixture>>,
}

/// Customer Fixture
#[derive(Debug, Deserialize)]
pub struct CustomerFixture {
    /// Customer name
    pub name: String,

    /// Loyalty points
    #[serde(default)]
    pub fidelity: u64,
}

impl From<CustomerFixture> for Customer {
    fn from(fixture: CustomerFixture) -> Self {
        Customer::new(fixture.name, fixture.fidelity)
    }
}

/// Line Item Fixture
#[derive(Debug, Deserialize)]
pub struct LineItemFixture {
    /// Product name
    pub product: String,

    /// Units bought
    pub quantity: u32,

    /// Unit price (e.g., "0.50 GBP")
    pub price: String,
}

/// Parse price string (e.g., "1.50 GBP") into an exact amount and currency
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount is not a non-negative decimal, or if the currency code
/// is not recognized.
pub fn parse_price(s: &str) -> Result<(Decimal, &'static Currency), FixtureError> {
    let parts: Vec<&str> = s.split_whitespace().collect();

    let [amount, currency_code] = parts.as_slice() else {
        return Err(FixtureError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    };

    let amount = amount
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))?;

    if amount.is_sign_negative() {
        return Err(FixtureError::InvalidPrice(s.to_string()));
    }

    let currency = match *currency_code {
        "GBP" => GBP,
        "USD" => USD,
        "EUR" => EUR,
        other => return Err(FixtureError::UnknownCurrency(other.to_string())),
    };

    Ok((amount, currency))
}
