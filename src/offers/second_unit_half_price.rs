//! Second Unit Half Price
//!
//! "Buy one, get the second half price" for a single product code. The
//! discount comes off the price of the *second* matching item in insertion
//! order, and is applied at most once however many items match.

use rust_decimal::Decimal;

use crate::{offers::Offer, products::Product};

/// A "buy one, get the second half price" offer for one product code.
#[derive(Debug, Clone)]
pub struct SecondUnitHalfPrice {
    description: String,
    code: String,
}

impl SecondUnitHalfPrice {
    /// Create a new offer targeting the given product code.
    pub fn new(description: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            code: code.into(),
        }
    }

    /// Return the product code the offer targets.
    pub fn code(&self) -> &str {
        &self.code
    }
}

impl Offer for SecondUnitHalfPrice {
    fn description(&self) -> &str {
        &self.description
    }

    fn apply(&self, items: &[&Product], total: Decimal) -> Decimal {
        // The second occurrence in insertion order sets the discount,
        // not the cheapest or priciest match.
        match items
            .iter()
            .filter(|item| item.code == self.code)
            .nth(1)
        {
            Some(second) => total - second.price / Decimal::TWO,
            None => total,
        }
    }
}
