//! Delivery Fixtures

use serde::Deserialize;

use crate::{
    delivery::{DeliveryRule, DeliverySchedule},
    fixtures::{FixtureError, catalogue::parse_amount},
};

/// Wrapper for a delivery schedule in YAML
#[derive(Debug, Deserialize)]
pub struct DeliveryFixture {
    /// Rules in evaluation order
    pub rules: Vec<DeliveryRuleFixture>,
}

/// Delivery rule fixture from YAML
#[derive(Debug, Deserialize)]
pub struct DeliveryRuleFixture {
    /// Exclusive spend threshold as a decimal string; omit for an
    /// unbounded rule.
    #[serde(default)]
    pub threshold: Option<String>,

    /// Delivery charge as a decimal string
    pub charge: String,
}

impl TryFrom<DeliveryRuleFixture> for DeliveryRule {
    type Error = FixtureError;

    fn try_from(fixture: DeliveryRuleFixture) -> Result<Self, Self::Error> {
        let charge = parse_amount(&fixture.charge)?;

        match fixture.threshold {
            Some(raw) => Ok(DeliveryRule::below(parse_amount(&raw)?, charge)),
            None => Ok(DeliveryRule::unbounded(charge)),
        }
    }
}

impl TryFrom<DeliveryFixture> for DeliverySchedule {
    type Error = FixtureError;

    fn try_from(fixture: DeliveryFixture) -> Result<Self, Self::Error> {
        let rules = fixture
            .rules
            .into_iter()
            .map(DeliveryRule::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(DeliverySchedule::new(rules))
    }
}
