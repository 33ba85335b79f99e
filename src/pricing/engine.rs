//! Checkout summary derivation.

use super::{
    helpers::{discount_percent, line_subtotal, percent_of, TAX_RATE_PERCENT},
    models::{CheckoutSummary, ShippingMethod, ShippingRates},
};
use crate::{cart::models::CartItem, error::CheckoutError};

/// Derives the payment summary for a cart.
///
/// * `subtotal` sums every line's `unit_price * quantity - unit_discount`.
/// * `shipping` is looked up in `rates`; a method the table does not offer
///   fails with [`CheckoutError::UnknownShippingMethod`].
/// * `tax` is 9% of the subtotal, rounded half-up.
/// * `discount_value` is 10% of the subtotal, rounded half-up, when
///   `discount_code` is exactly `CHECK10`, and zero for anything else.
///
/// The function is pure: identical inputs always produce identical output.
pub fn compute_summary<'a, I>(
    items: I,
    rates: &ShippingRates,
    shipping_method: ShippingMethod,
    discount_code: &str,
) -> Result<CheckoutSummary, CheckoutError>
where
    I: IntoIterator<Item = &'a CartItem>,
{
    let shipping = rates
        .cost_of(shipping_method)
        .ok_or_else(|| CheckoutError::UnknownShippingMethod(shipping_method.to_string()))?;

    let subtotal = items
        .into_iter()
        .map(line_subtotal)
        .fold(0u64, u64::saturating_add);

    let tax = percent_of(subtotal, TAX_RATE_PERCENT);
    let discount_value = discount_percent(discount_code).map_or(0, |p| percent_of(subtotal, p));

    let total = subtotal
        .saturating_add(shipping)
        .saturating_add(tax)
        .saturating_sub(discount_value);

    Ok(CheckoutSummary {
        subtotal,
        shipping,
        tax,
        discount_value,
        total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::models::ShippingRate;

    fn item(id: &str, unit_price: u64, unit_discount: Option<u64>, quantity: u32) -> CartItem {
        CartItem {
            id: id.to_string(),
            title: format!("item {id}"),
            color: None,
            seller: None,
            unit_price,
            unit_discount,
            quantity,
            image: String::new(),
            delivery_tags: Vec::new(),
        }
    }

    fn sample_cart() -> Vec<CartItem> {
        vec![
            item("1", 1_625_000, Some(132_500), 1),
            item("2", 125_000, None, 2),
        ]
    }

    #[test]
    fn summary_without_discount_code() {
        let summary = compute_summary(
            &sample_cart(),
            &ShippingRates::default(),
            ShippingMethod::Standard,
            "",
        )
        .unwrap();

        assert_eq!(
            summary,
            CheckoutSummary {
                subtotal: 1_742_500,
                shipping: 20_000,
                tax: 156_825,
                discount_value: 0,
                total: 1_919_325,
            }
        );
    }

    #[test]
    fn summary_with_check10() {
        let summary = compute_summary(
            &sample_cart(),
            &ShippingRates::default(),
            ShippingMethod::Standard,
            "CHECK10",
        )
        .unwrap();

        assert_eq!(summary.discount_value, 174_250);
        assert_eq!(summary.total, 1_745_075);
    }

    #[test]
    fn express_shipping_uses_its_rate() {
        let summary = compute_summary(
            &sample_cart(),
            &ShippingRates::default(),
            ShippingMethod::Express,
            "",
        )
        .unwrap();

        assert_eq!(summary.shipping, 50_000);
        assert_eq!(summary.total, 1_742_500 + 50_000 + 156_825);
    }

    #[test]
    fn near_miss_codes_grant_nothing() {
        for code in ["check10", "CHECK100", "", "CHECK1", "CHECK10 "] {
            let summary = compute_summary(
                &sample_cart(),
                &ShippingRates::default(),
                ShippingMethod::Standard,
                code,
            )
            .unwrap();
            assert_eq!(summary.discount_value, 0, "code {code:?} should not apply");
        }
    }

    #[test]
    fn method_missing_from_table_is_an_error() {
        let err = compute_summary(
            &sample_cart(),
            &ShippingRates::default(),
            ShippingMethod::Tipax,
            "",
        )
        .unwrap_err();

        assert_eq!(err, CheckoutError::UnknownShippingMethod("tipax".to_string()));
    }

    #[test]
    fn custom_rate_table_is_honoured() {
        let rates = ShippingRates::new(vec![
            ShippingRate {
                method: ShippingMethod::Post,
                cost: 35_000,
            },
            ShippingRate {
                method: ShippingMethod::Tipax,
                cost: 0,
            },
        ])
        .unwrap();

        let post = compute_summary(&sample_cart(), &rates, ShippingMethod::Post, "").unwrap();
        let tipax = compute_summary(&sample_cart(), &rates, ShippingMethod::Tipax, "").unwrap();

        assert_eq!(post.shipping, 35_000);
        assert_eq!(tipax.shipping, 0);
        assert!(compute_summary(&sample_cart(), &rates, ShippingMethod::Standard, "").is_err());
    }

    #[test]
    fn empty_cart_costs_only_shipping() {
        let summary = compute_summary(
            std::iter::empty(),
            &ShippingRates::default(),
            ShippingMethod::Standard,
            "CHECK10",
        )
        .unwrap();

        assert_eq!(
            summary,
            CheckoutSummary {
                subtotal: 0,
                shipping: 20_000,
                tax: 0,
                discount_value: 0,
                total: 20_000,
            }
        );
    }

    #[test]
    fn oversized_line_discount_clamps_line_to_zero() {
        let cart = vec![item("a", 100, Some(500), 1), item("b", 1_000, None, 1)];
        let summary =
            compute_summary(&cart, &ShippingRates::default(), ShippingMethod::Standard, "")
                .unwrap();

        assert_eq!(summary.subtotal, 1_000);
    }

    #[test]
    fn line_discount_is_applied_once_per_line() {
        let cart = vec![item("a", 1_000, Some(100), 3)];
        let summary =
            compute_summary(&cart, &ShippingRates::default(), ShippingMethod::Standard, "")
                .unwrap();

        assert_eq!(summary.subtotal, 2_900);
    }

    #[test]
    fn tax_rounds_half_up() {
        let cart = vec![item("a", 250, None, 1)];
        let summary =
            compute_summary(&cart, &ShippingRates::default(), ShippingMethod::Standard, "CHECK10")
                .unwrap();

        assert_eq!(summary.tax, 23);
        assert_eq!(summary.discount_value, 25);
    }

    #[test]
    fn summary_is_deterministic_and_balanced() {
        let rates = ShippingRates::default();
        let carts = [
            sample_cart(),
            vec![item("x", 999, Some(1), 7)],
            vec![item("y", 1, None, 1), item("z", 333_333, Some(33), 4)],
        ];

        for cart in &carts {
            for code in ["", "CHECK10"] {
                let first = compute_summary(cart, &rates, ShippingMethod::Express, code).unwrap();
                let second = compute_summary(cart, &rates, ShippingMethod::Express, code).unwrap();
                assert_eq!(first, second);
                assert_eq!(
                    first.total,
                    first.subtotal + first.shipping + first.tax - first.discount_value
                );
            }
        }
    }
}
