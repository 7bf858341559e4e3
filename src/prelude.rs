//! Hamper prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    basket::{Basket, BasketError},
    delivery::{DeliveryRule, DeliverySchedule, Threshold},
    fixtures::{Fixture, FixtureError},
    offers::{FnOffer, Offer, SecondUnitHalfPrice, ThresholdPercentOff},
    pricing::{subtotal, truncate},
    products::{Catalogue, Product},
};
