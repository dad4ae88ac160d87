//! Fixtures
//!
//! Loads named customers and carts from YAML order sets so orders can be
//! assembled without hand-building every line item.
//!
//! An order set lives at `<base>/orders/<name>.yml`:
//!
//! ```yaml
//! customers:
//!   clark:
//!     name: Clark Scot
//!     fidelity: 0
//! carts:
//!   fruit:
//!     - product: lemon
//!       quantity: 4
//!       price: 0.50 GBP
//! ```

use std::{fs, path::PathBuf};

use rustc_hash::FxHashMap;
use rusty_money::iso::Currency;
use thiserror::Error;
use tracing::debug;

use crate::{
    customers::Customer,
    fixtures::orders::{OrderSetFixture, parse_price},
    items::LineItem,
    orders::Order,
    promotions::Promotion,
};

pub mod orders;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Currency mismatch between prices
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),

    /// No prices loaded yet
    #[error("No prices loaded yet; currency unknown")]
    NoCurrency,

    /// Customer not found
    #[error("Customer not found: {0}")]
    CustomerNotFound(String),

    /// Cart not found
    #[error("Cart not found: {0}")]
    CartNotFound(String),
}

/// Fixture
#[derive(Debug)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,

    /// Customers by fixture key
    customers: FxHashMap<String, Customer>,

    /// Carts by fixture key
    carts: FxHashMap<String, Vec<LineItem>>,

    /// Currency shared by every price in the fixture
    currency: Option<&'static Currency>,
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

impl Fixture {
    /// Create a new empty fixture with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            customers: FxHashMap::default(),
            carts: FxHashMap::default(),
            currency: None,
        }
    }

    /// Load customers and carts from an order set YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, if a price is
    /// malformed or negative, or if prices use more than one currency.
    pub fn load_orders(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("orders").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: OrderSetFixture = serde_norway::from_str(&contents)?;

        for (key, customer) in fixture.customers {
            self.customers.insert(key, customer.into());
        }

        for (key, lines) in fixture.carts {
            let mut cart = Vec::with_capacity(lines.len());

            for line in lines {
                let (unit_price, currency) = parse_price(&line.price)?;

                self.check_currency(currency)?;

                cart.push(LineItem::new(line.product, line.quantity, unit_price));
            }

            self.carts.insert(key, cart);
        }

        debug!(
            set = name,
            customers = self.customers.len(),
            carts = self.carts.len(),
            "loaded order fixtures"
        );

        Ok(self)
    }

    /// Load a complete fixture set by name
    ///
    /// # Errors
    ///
    /// Returns an error if the order set cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::new();

        fixture.load_orders(name)?;

        Ok(fixture)
    }

    /// Get a customer by its fixture key
    ///
    /// # Errors
    ///
    /// Returns an error if the customer is not found.
    pub fn customer(&self, key: &str) -> Result<&Customer, FixtureError> {
        self.customers
            .get(key)
            .ok_or_else(|| FixtureError::CustomerNotFound(key.to_string()))
    }

    /// Get a cart by its fixture key
    ///
    /// # Errors
    ///
    /// Returns an error if the cart is not found.
    pub fn cart(&self, key: &str) -> Result<&[LineItem], FixtureError> {
        self.carts
            .get(key)
            .map(Vec::as_slice)
            .ok_or_else(|| FixtureError::CartNotFound(key.to_string()))
    }

    /// Build an order for a fixture customer and cart, optionally bound to a promotion
    ///
    /// # Errors
    ///
    /// Returns an error if the customer or cart is not found.
    pub fn order(
        &self,
        customer: &str,
        cart: &str,
        promotion: Option<Promotion>,
    ) -> Result<Order, FixtureError> {
        Ok(Order::new(
            self.customer(customer)?.clone(),
            self.cart(cart)?.to_vec(),
            promotion,
        ))
    }

    /// Currency shared by the fixture's prices
    ///
    /// # Errors
    ///
    /// Returns an error if no prices have been loaded.
    pub fn currency(&self) -> Result<&'static Currency, FixtureError> {
        self.currency.ok_or(FixtureError::NoCurrency)
    }

    fn check_currency(&mut self, currency: &'static Currency) -> Result<(), FixtureError> {
        match self.currency {
            Some(existing) if existing != currency => Err(FixtureError::CurrencyMismatch(
                existing.iso_alpha_code.to_string(),
                currency.iso_alpha_code.to_string(),
            )),
            Some(_) => Ok(()),
            None => {
                self.currency = Some(currency);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use rust_decimal::Decimal;
    use rusty_money::iso::GBP;
    use tempfile::tempdir;
    use testresult::TestResult;

    use super::*;

    fn write_orders(base: &Path, name: &str, contents: &str) -> TestResult {
        let dir = base.join("orders");
        fs::create_dir_all(&dir)?;
        fs::write(dir.join(format!("{name}.yml")), contents)?;

        Ok(())
    }

    const FRUIT: &str = "
customers:
  clark:
    name: Clark Scot
    fidelity: 0
carts:
  fruit:
    - product: lemon
      quantity: 4
      price: 0.50 GBP
    - product: melon
      quantity: 5
      price: 5 GBP
";

    #[test]
    fn load_orders_reads_customers_and_carts() -> TestResult {
        let dir = tempdir()?;
        write_orders(dir.path(), "fruit", FRUIT)?;

        let mut fixture = Fixture::with_base_path(dir.path());
        fixture.load_orders("fruit")?;

        assert_eq!(fixture.customer("clark")?.name, "Clark Scot");
        assert_eq!(fixture.cart("fruit")?.len(), 2);
        assert_eq!(fixture.currency()?, GBP);

        let order = fixture.order("clark", "fruit", None)?;
        assert_eq!(order.total(), Decimal::new(27, 0));

        Ok(())
    }

    #[test]
    fn missing_keys_are_reported() -> TestResult {
        let dir = tempdir()?;
        write_orders(dir.path(), "fruit", FRUIT)?;

        let mut fixture = Fixture::with_base_path(dir.path());
        fixture.load_orders("fruit")?;

        assert!(matches!(
            fixture.customer("emily"),
            Err(FixtureError::CustomerNotFound(key)) if key == "emily"
        ));
        assert!(matches!(
            fixture.order("clark", "veg", None),
            Err(FixtureError::CartNotFound(key)) if key == "veg"
        ));

        Ok(())
    }

    #[test]
    fn mixed_currencies_are_rejected() -> TestResult {
        let dir = tempdir()?;
        write_orders(
            dir.path(),
            "mixed",
            "
customers: {}
carts:
  mixed:
    - product: lemon
      quantity: 1
      price: 0.50 GBP
    - product: lime
      quantity: 1
      price: 0.50 USD
",
        )?;

        let mut fixture = Fixture::with_base_path(dir.path());

        assert!(matches!(
            fixture.load_orders("mixed"),
            Err(FixtureError::CurrencyMismatch(expected, found)) if expected == "GBP" && found == "USD"
        ));

        Ok(())
    }

    #[test]
    fn currency_is_unknown_before_loading() {
        let fixture = Fixture::with_base_path("unused");

        assert!(matches!(fixture.currency(), Err(FixtureError::NoCurrency)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let mut fixture = Fixture::with_base_path("does-not-exist");

        assert!(matches!(
            fixture.load_orders("fruit"),
            Err(FixtureError::Io(_))
        ));
    }
}
