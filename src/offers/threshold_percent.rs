//! Threshold Percent Off
//!
//! Takes a percentage off the running total once a minimum spend is met.
//! Qualification is checked against the running total the offer receives,
//! so earlier offers in the pipeline can move a basket in or out of range.

use decimal_percentage::Percentage;
use rust_decimal::Decimal;

use crate::{offers::Offer, products::Product};

/// A percentage off the running total once a minimum spend is met.
#[derive(Debug, Clone)]
pub struct ThresholdPercentOff {
    description: String,
    min_spend: Decimal,
    percent: Percentage,
}

impl ThresholdPercentOff {
    /// Create a new offer with the given minimum spend and percentage.
    pub fn new(
        description: impl Into<String>,
        min_spend: Decimal,
        percent: Percentage,
    ) -> Self {
        Self {
            description: description.into(),
            min_spend,
            percent,
        }
    }

    /// Return the minimum qualifying spend.
    pub fn min_spend(&self) -> Decimal {
        self.min_spend
    }

    /// Return the percentage taken off the total.
    pub fn percent(&self) -> Percentage {
        self.percent
    }
}

impl Offer for ThresholdPercentOff {
    fn description(&self) -> &str {
        &self.description
    }

    fn apply(&self, _items: &[&Product], total: Decimal) -> Decimal {
        if total >= self.min_spend {
            total - self.percent * total
        } else {
            total
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pence(minor: i64) -> Decimal {
        Decimal::new(minor, 2)
    }

    fn offer() -> ThresholdPercentOff {
        ThresholdPercentOff::new("10% off over £100", pence(10000), Percentage::from(0.10))
    }

    #[test]
    fn below_minimum_spend_leaves_total_unchanged() {
        let items: [&Product; 0] = [];

        assert_eq!(offer().apply(&items, pence(9999)), pence(9999));
    }

    #[test]
    fn at_minimum_spend_takes_percentage_off() {
        let items: [&Product; 0] = [];

        assert_eq!(offer().apply(&items, pence(10000)), pence(9000));
    }

    #[test]
    fn above_minimum_spend_takes_percentage_off() {
        let items: [&Product; 0] = [];

        assert_eq!(offer().apply(&items, pence(20000)), pence(18000));
    }

    #[test]
    fn accessors_return_constructor_values() {
        let offer = offer();

        assert_eq!(offer.min_spend(), pence(10000));
        assert_eq!(offer.percent(), Percentage::from(0.10));
        assert_eq!(offer.description(), "10% off over £100");
    }
}
