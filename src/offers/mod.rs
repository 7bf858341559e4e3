//! Offers
//!
//! Pluggable discount strategies, applied as an ordered pipeline over the
//! basket's item list and running total.

use std::fmt;

use rust_decimal::Decimal;

use crate::products::Product;

pub mod function;
pub mod second_unit_half_price;
pub mod threshold_percent;

pub use function::FnOffer;
pub use second_unit_half_price::SecondUnitHalfPrice;
pub use threshold_percent::ThresholdPercentOff;

/// A pluggable discount strategy.
///
/// Each offer receives the full item list and the running total produced by
/// the previous pipeline step, and returns the new running total. Offers must
/// be pure: no mutation of the items, and identical inputs always yield
/// identical outputs, so basket totals stay deterministic and re-callable.
/// A discount is conventionally less than or equal to the incoming total,
/// but the contract does not enforce that.
pub trait Offer: fmt::Debug {
    /// A brief description of the offer.
    fn description(&self) -> &str;

    /// Apply the offer to the current items and running total.
    fn apply(&self, items: &[&Product], total: Decimal) -> Decimal;
}
