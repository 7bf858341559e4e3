//! Function Offers
//!
//! Adapter for caller-supplied discount closures. Offer authors outside this
//! crate provide the discount logic; the basket only sequences and invokes it.

use std::fmt;

use rust_decimal::Decimal;

use crate::{offers::Offer, products::Product};

/// An offer backed by a caller-supplied discount function.
#[derive(Clone)]
pub struct FnOffer<F> {
    description: String,
    discount: F,
}

impl<F> FnOffer<F>
where
    F: Fn(&[&Product], Decimal) -> Decimal,
{
    /// Create a new offer from a description and a discount function.
    ///
    /// The function receives the full item list and the running total, and
    /// returns the new running total. It must not rely on anything other
    /// than its inputs.
    pub fn new(description: impl Into<String>, discount: F) -> Self {
        Self {
            description: description.into(),
            discount,
        }
    }
}

impl<F> fmt::Debug for FnOffer<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnOffer")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

impl<F> Offer for FnOffer<F>
where
    F: Fn(&[&Product], Decimal) -> Decimal,
{
    fn description(&self) -> &str {
        &self.description
    }

    fn apply(&self, items: &[&Product], total: Decimal) -> Decimal {
        (self.discount)(items, total)
    }
}
