//! Integer money arithmetic used by the pricing engine.

use crate::cart::models::CartItem;

/// Tax charged on the subtotal, in percent.
pub const TAX_RATE_PERCENT: u64 = 9;

/// Recognized discount codes and the percentage of the subtotal they take off.
pub const DISCOUNT_CODES: &[(&str, u64)] = &[("CHECK10", 10)];

/// `amount * percent / 100`, rounded half-up to the nearest unit.
///
/// Computed in `u128` so the intermediate product cannot overflow; results
/// beyond `u64::MAX` saturate.
pub fn percent_of(amount: u64, percent: u64) -> u64 {
    let scaled = u128::from(amount) * u128::from(percent) + 50;
    u64::try_from(scaled / 100).unwrap_or(u64::MAX)
}

/// Contribution of one cart line: `unit_price * quantity - unit_discount`.
///
/// A discount larger than the line's gross amount clamps the line to zero.
pub fn line_subtotal(item: &CartItem) -> u64 {
    item.unit_price
        .saturating_mul(u64::from(item.quantity))
        .saturating_sub(item.unit_discount.unwrap_or(0))
}

/// Percentage granted by `code`, if it is a recognized discount code.
///
/// Matching is exact and case-sensitive.
pub fn discount_percent(code: &str) -> Option<u64> {
    DISCOUNT_CODES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, percent)| *percent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_of_rounds_half_up() {
        // 22.5 -> 23, 13.5 -> 14, 4.5 -> 5
        assert_eq!(percent_of(250, 9), 23);
        assert_eq!(percent_of(150, 9), 14);
        assert_eq!(percent_of(50, 9), 5);
        // 4.4 -> 4
        assert_eq!(percent_of(49, 9), 4);
    }

    #[test]
    fn percent_of_is_exact_for_large_amounts() {
        assert_eq!(percent_of(1_742_500, 9), 156_825);
        assert_eq!(percent_of(1_742_500, 10), 174_250);
        assert_eq!(percent_of(u64::MAX, 100), u64::MAX);
    }

    #[test]
    fn discount_percent_requires_exact_match() {
        assert_eq!(discount_percent("CHECK10"), Some(10));
        assert_eq!(discount_percent("check10"), None);
        assert_eq!(discount_percent("CHECK100"), None);
        assert_eq!(discount_percent(" CHECK10"), None);
        assert_eq!(discount_percent(""), None);
    }
}
