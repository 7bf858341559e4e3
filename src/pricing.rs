//! Pricing
//!
//! Arithmetic shared by the basket total pipeline: the raw item subtotal and
//! the final truncation to currency precision.

use rust_decimal::Decimal;

use crate::products::Product;

/// Calculates the subtotal of a list of items.
///
/// A plain arithmetic sum; item order does not affect the result.
#[must_use]
pub fn subtotal(items: &[&Product]) -> Decimal {
    items
        .iter()
        .fold(Decimal::ZERO, |acc, item| acc + item.price)
}

/// Truncates an amount to two decimal places without rounding.
///
/// Truncation is toward zero: `54.374999` becomes `54.37`, never `54.38`.
/// Totals depend on this exact behaviour, so it must not be replaced with
/// midpoint rounding.
#[must_use]
pub fn truncate(amount: Decimal) -> Decimal {
    amount.trunc_with_scale(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pence(minor: i64) -> Decimal {
        Decimal::new(minor, 2)
    }

    #[test]
    fn subtotal_sums_item_prices() {
        let blue = Product::new("B01", "Blue Widget", pence(795));
        let green = Product::new("G01", "Green Widget", pence(2495));
        let items = [&blue, &green];

        assert_eq!(subtotal(&items), pence(3290));
    }

    #[test]
    fn subtotal_of_no_items_is_zero() {
        let items: [&Product; 0] = [];

        assert_eq!(subtotal(&items), Decimal::ZERO);
    }

    #[test]
    fn truncate_discards_fractional_pence() {
        assert_eq!(truncate(Decimal::new(54375, 3)), pence(5437));
    }

    #[test]
    fn truncate_never_rounds_up() {
        assert_eq!(truncate(Decimal::new(54_374_999, 6)), pence(5437));
        assert_eq!(truncate(Decimal::new(54379, 3)), pence(5437));
    }

    #[test]
    fn truncate_leaves_exact_amounts_unchanged() {
        assert_eq!(truncate(pence(3785)), pence(3785));
        assert_eq!(truncate(Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn truncated_amount_never_exceeds_input() {
        for raw in [
            Decimal::new(98_275, 3),
            Decimal::new(49_425, 3),
            Decimal::new(1, 3),
        ] {
            assert!(truncate(raw) <= raw, "truncate({raw}) exceeded input");
        }
    }
}
