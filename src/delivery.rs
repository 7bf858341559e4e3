//! Delivery
//!
//! Tiered delivery charges: an ordered rule table scanned first-match
//! against the post-offer basket total, usually ending in an unbounded
//! free-delivery tier.

use rust_decimal::Decimal;

/// Exclusive upper bound on the basket total for a delivery rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Threshold {
    /// The rule applies to totals strictly below this amount.
    Below(Decimal),

    /// The rule applies to any total.
    Unbounded,
}

impl Threshold {
    /// Return whether a total falls under this threshold.
    #[must_use]
    pub fn admits(&self, total: Decimal) -> bool {
        match self {
            Threshold::Below(limit) => total < *limit,
            Threshold::Unbounded => true,
        }
    }
}

/// A single delivery tier: a spend threshold and the charge below it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeliveryRule {
    threshold: Threshold,
    charge: Decimal,
}

impl DeliveryRule {
    /// Create a rule charging `charge` for totals strictly below `limit`.
    #[must_use]
    pub fn below(limit: Decimal, charge: Decimal) -> Self {
        DeliveryRule {
            threshold: Threshold::Below(limit),
            charge,
        }
    }

    /// Create a rule charging `charge` for any total.
    #[must_use]
    pub fn unbounded(charge: Decimal) -> Self {
        DeliveryRule {
            threshold: Threshold::Unbounded,
            charge,
        }
    }

    /// Return the threshold.
    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// Return the charge.
    pub fn charge(&self) -> Decimal {
        self.charge
    }

    /// Return whether this rule applies to the given total.
    #[must_use]
    pub fn matches(&self, total: Decimal) -> bool {
        self.threshold.admits(total)
    }
}

/// An ordered delivery rule table, evaluated first-match.
#[derive(Debug, Clone, Default)]
pub struct DeliverySchedule {
    rules: Vec<DeliveryRule>,
}

impl DeliverySchedule {
    /// Create a new schedule with the given rules.
    #[must_use]
    pub fn new(rules: impl Into<Vec<DeliveryRule>>) -> Self {
        DeliverySchedule {
            rules: rules.into(),
        }
    }

    /// Determine the delivery charge for a post-offer total.
    ///
    /// Rules are scanned in order and the first match wins. When no rule
    /// matches, the charge is zero; schedules are expected to end with an
    /// unbounded rule so that the fallback is an explicit free-delivery
    /// tier rather than an accident (see [`Self::is_exhaustive`]).
    #[must_use]
    pub fn charge_for(&self, total: Decimal) -> Decimal {
        self.rules
            .iter()
            .find(|rule| rule.matches(total))
            .map_or(Decimal::ZERO, DeliveryRule::charge)
    }

    /// Return whether the schedule contains an unbounded rule, so every
    /// total resolves to a rule rather than the zero fallback.
    #[must_use]
    pub fn is_exhaustive(&self) -> bool {
        self.rules
            .iter()
            .any(|rule| rule.threshold() == Threshold::Unbounded)
    }

    /// Return the rules in evaluation order.
    pub fn rules(&self) -> &[DeliveryRule] {
        &self.rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pence(minor: i64) -> Decimal {
        Decimal::new(minor, 2)
    }

    fn standard_schedule() -> DeliverySchedule {
        DeliverySchedule::new([
            DeliveryRule::below(pence(5000), pence(495)),
            DeliveryRule::below(pence(9000), pence(295)),
            DeliveryRule::unbounded(Decimal::ZERO),
        ])
    }

    #[test]
    fn charge_for_picks_first_matching_rule() {
        let schedule = standard_schedule();

        assert_eq!(schedule.charge_for(pence(1000)), pence(495));
        assert_eq!(schedule.charge_for(pence(6085)), pence(295));
        assert_eq!(schedule.charge_for(pence(12000)), Decimal::ZERO);
    }

    #[test]
    fn thresholds_are_exclusive_upper_bounds() {
        let schedule = standard_schedule();

        // Exactly on a boundary falls through to the next tier.
        assert_eq!(schedule.charge_for(pence(5000)), pence(295));
        assert_eq!(schedule.charge_for(pence(9000)), Decimal::ZERO);
        assert_eq!(schedule.charge_for(pence(4999)), pence(495));
    }

    #[test]
    fn charge_is_non_increasing_across_ascending_thresholds() {
        let schedule = standard_schedule();

        let charges: Vec<Decimal> = [pence(100), pence(5500), pence(9500)]
            .iter()
            .map(|total| schedule.charge_for(*total))
            .collect();

        assert!(
            charges.windows(2).all(|pair| pair.first() >= pair.last()),
            "charges should not increase as totals grow: {charges:?}"
        );
    }

    #[test]
    fn missing_unbounded_rule_falls_back_to_free_delivery() {
        let schedule = DeliverySchedule::new([DeliveryRule::below(pence(5000), pence(495))]);

        assert_eq!(schedule.charge_for(pence(5000)), Decimal::ZERO);
        assert!(!schedule.is_exhaustive());
    }

    #[test]
    fn schedule_with_unbounded_rule_is_exhaustive() {
        assert!(standard_schedule().is_exhaustive());
    }

    #[test]
    fn empty_schedule_charges_nothing() {
        let schedule = DeliverySchedule::default();

        assert_eq!(schedule.charge_for(pence(100)), Decimal::ZERO);
        assert!(schedule.rules().is_empty());
    }

    #[test]
    fn unbounded_threshold_admits_any_total() {
        assert!(Threshold::Unbounded.admits(Decimal::ZERO));
        assert!(Threshold::Unbounded.admits(pence(i64::MAX)));
    }
}
