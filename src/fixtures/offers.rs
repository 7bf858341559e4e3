//! Offer Fixtures

use decimal_percentage::Percentage;
use serde::Deserialize;

use crate::{
    fixtures::{FixtureError, catalogue::parse_amount},
    offers::{Offer, SecondUnitHalfPrice, ThresholdPercentOff},
};

/// Wrapper for an offer pipeline in YAML
#[derive(Debug, Deserialize)]
pub struct OffersFixture {
    /// Offers in application order
    pub offers: Vec<OfferFixture>,
}

/// Offer fixture from YAML
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OfferFixture {
    /// "Buy one, get the second half price" for one product code
    SecondUnitHalfPrice {
        /// Offer description
        description: String,

        /// Product code the offer targets
        code: String,
    },

    /// Percentage off the running total above a minimum spend
    ThresholdPercentOff {
        /// Offer description
        description: String,

        /// Minimum qualifying spend as a decimal string
        min_spend: String,

        /// Discount percentage as a decimal (e.g. 0.15 for 15%)
        percent: f64,
    },
}

impl OfferFixture {
    /// Convert into a boxed offer.
    ///
    /// # Errors
    ///
    /// Returns an error if a spend amount is not a valid decimal, or if a
    /// percentage falls outside `0.0..=1.0`.
    pub fn try_into_offer(self) -> Result<Box<dyn Offer>, FixtureError> {
        match self {
            OfferFixture::SecondUnitHalfPrice { description, code } => {
                Ok(Box::new(SecondUnitHalfPrice::new(description, code)))
            }
            OfferFixture::ThresholdPercentOff {
                description,
                min_spend,
                percent,
            } => {
                if !(0.0..=1.0).contains(&percent) {
                    return Err(FixtureError::InvalidPercentage(percent));
                }

                let min_spend = parse_amount(&min_spend)?;

                Ok(Box::new(ThresholdPercentOff::new(
                    description,
                    min_spend,
                    Percentage::from(percent),
                )))
            }
        }
    }
}
