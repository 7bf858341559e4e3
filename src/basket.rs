//! Basket

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    delivery::DeliverySchedule,
    offers::Offer,
    pricing::{subtotal, truncate},
    products::{Catalogue, Product},
};

/// Errors raised by basket operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BasketError {
    /// No catalogue entry has the supplied product code.
    #[error("Product with code {0} not found")]
    ProductNotFound(String),
}

/// A shopping basket over a catalogue, delivery schedule and offer pipeline.
///
/// The catalogue, schedule and offers are fixed for the basket's lifetime;
/// only the item list changes, and it only ever grows. Baskets are intended
/// for a single logical owner; wrap one in a mutex if it must be shared
/// across threads.
#[derive(Debug)]
pub struct Basket<'a> {
    catalogue: &'a Catalogue,
    delivery: &'a DeliverySchedule,
    offers: &'a [Box<dyn Offer>],
    items: Vec<&'a Product>,
}

impl<'a> Basket<'a> {
    /// Create an empty basket.
    #[must_use]
    pub fn new(
        catalogue: &'a Catalogue,
        delivery: &'a DeliverySchedule,
        offers: &'a [Box<dyn Offer>],
    ) -> Self {
        Basket {
            catalogue,
            delivery,
            offers,
            items: Vec::new(),
        }
    }

    /// Add a product to the basket by catalogue code.
    ///
    /// The catalogue is searched first-match and the matching product is
    /// appended to the item list. The item list is unchanged on failure.
    ///
    /// # Errors
    ///
    /// Returns [`BasketError::ProductNotFound`] if no catalogue entry has
    /// the given code.
    pub fn add(&mut self, code: &str) -> Result<(), BasketError> {
        let product = self
            .catalogue
            .lookup(code)
            .ok_or_else(|| BasketError::ProductNotFound(code.to_string()))?;

        self.items.push(product);

        Ok(())
    }

    /// Calculate the basket total.
    ///
    /// An empty basket totals exactly zero and incurs no delivery charge.
    /// Otherwise the item prices are summed, each offer is applied in
    /// pipeline order to the running total, the delivery charge for the
    /// post-offer total is added, and the result is truncated to two
    /// decimal places without rounding.
    ///
    /// Calling this repeatedly without intervening [`Self::add`] calls
    /// returns the same value.
    #[must_use]
    pub fn total(&self) -> Decimal {
        if self.items.is_empty() {
            return Decimal::ZERO;
        }

        let discounted = self
            .offers
            .iter()
            .fold(subtotal(&self.items), |running, offer| {
                offer.apply(&self.items, running)
            });

        truncate(discounted + self.delivery.charge_for(discounted))
    }

    /// Return the items currently in the basket, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[&'a Product] {
        &self.items
    }

    /// Get the number of items in the basket.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the basket is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
