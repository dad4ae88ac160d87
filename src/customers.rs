//! Customers

/// A customer placing an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    /// Customer name
    pub name: String,

    /// Loyalty points accrued by the customer
    pub fidelity: u64,
}

impl Customer {
    /// Create a new customer.
    pub fn new(name: impl Into<String>, fidelity: u64) -> Self {
        Self {
            name: name.into(),
            fidelity,
        }
    }
}
