//! # Price Adjuster
//!
//! Converts one reference EUR amount into a target-region amount.
//!
//! ## The Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Price Adjustment Pipeline                          │
//! │                                                                         │
//! │  19 EUR                                                                 │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  × ppp_factor      (purchasing-power discount/premium)                  │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  × exchange_rate   (EUR → local currency)                               │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  rounding          coarse currency:  nearest 100                        │
//! │                    standard currency: round, then subtract 0.01         │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  FR:  19 × 1.0 × 1.0    → 19    → 18.99                                │
//! │  SN:  19 × 0.3 × 655.96 → 3739  → 3700                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rounding Is a Contract
//! The "round then subtract one cent" charm adjustment and the nearest-100
//! rule are user-visible prices on the marketing site. They are reproduced
//! exactly; do not "fix" the arithmetic.

use crate::region::RegionRecord;

// =============================================================================
// Price Adjustment
// =============================================================================

/// Converts a reference EUR amount into the region's local currency.
///
/// ## Behavior
/// - Non-finite or non-positive `reference_amount` → `0.0` (a malformed
///   price must not crash a pricing page)
/// - Coarse currencies (XOF, ARS, COP): rounded to the nearest 100 units
/// - All other currencies: rounded to the nearest whole unit, then 0.01 is
///   subtracted, floored at 0 (charm pricing: 19 EUR displays as 18.99)
///
/// The result is always a non-negative finite number. This function never
/// panics, for any input.
///
/// ## Example
/// ```rust
/// use hakawa_pricing::{adjust_price, get_region};
///
/// let fr = get_region("FR");
/// assert_eq!(adjust_price(19.0, fr), 18.99);
///
/// let sn = get_region("SN");
/// // 19 × 0.3 × 655.96 = 3738.97… → nearest 100 → 3700
/// assert_eq!(adjust_price(19.0, sn), 3700.0);
/// ```
pub fn adjust_price(reference_amount: f64, region: &RegionRecord) -> f64 {
    if !reference_amount.is_finite() || reference_amount <= 0.0 {
        return 0.0;
    }

    let adjusted = reference_amount * region.ppp_factor * region.exchange_rate;

    if region.currency.coarse_rounding() {
        return (adjusted / 100.0).round() * 100.0;
    }

    // Charm pricing: whole units minus one cent, floored at 0 so sub-cent
    // inputs cannot produce a negative price.
    (adjusted.round() - 0.01).max(0.0)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::{get_region, region, regions, RegionCode};

    #[test]
    fn test_fr_charm_pricing() {
        // Identity region: PPP 1.0, rate 1.0
        let fr = region(RegionCode::Fr);
        assert_eq!(adjust_price(19.0, fr), 18.99);
        assert_eq!(adjust_price(39.0, fr), 38.99);
        assert_eq!(adjust_price(149.0, fr), 148.99);
    }

    #[test]
    fn test_charm_rounds_before_subtracting() {
        let fr = region(RegionCode::Fr);
        // 19.6 rounds to 20 first, then minus one cent
        assert_eq!(adjust_price(19.6, fr), 19.99);
        assert_eq!(adjust_price(19.4, fr), 18.99);
    }

    #[test]
    fn test_coarse_currency_rounds_to_hundreds() {
        let sn = region(RegionCode::Sn);
        // 19 × 0.3 × 655.96 = 3738.972 → 3700
        assert_eq!(adjust_price(19.0, sn), 3700.0);
        // 39 × 0.3 × 655.96 = 7674.732 → 7700
        assert_eq!(adjust_price(39.0, sn), 7700.0);
    }

    #[test]
    fn test_coarse_results_are_multiples_of_100() {
        for region in regions().iter().filter(|r| r.currency.coarse_rounding()) {
            for amount in [0.5, 1.0, 9.0, 19.0, 39.0, 99.0, 149.0, 799.0] {
                let local = adjust_price(amount, region);
                assert_eq!(local % 100.0, 0.0, "{} in {}", amount, region.code);
            }
        }
    }

    #[test]
    fn test_standard_rounding_law() {
        for region in regions().iter().filter(|r| !r.currency.coarse_rounding()) {
            for amount in [1.0, 19.0, 39.0, 99.0, 319.0] {
                let expected =
                    ((amount * region.ppp_factor * region.exchange_rate).round() - 0.01).max(0.0);
                assert_eq!(adjust_price(amount, region), expected, "{}", region.code);
            }
        }
    }

    #[test]
    fn test_invalid_amounts_degrade_to_zero() {
        let fr = region(RegionCode::Fr);
        assert_eq!(adjust_price(f64::NAN, fr), 0.0);
        assert_eq!(adjust_price(f64::INFINITY, fr), 0.0);
        assert_eq!(adjust_price(f64::NEG_INFINITY, fr), 0.0);
        assert_eq!(adjust_price(-19.0, fr), 0.0);
        assert_eq!(adjust_price(0.0, fr), 0.0);
    }

    #[test]
    fn test_sub_cent_amount_floors_at_zero() {
        let fr = region(RegionCode::Fr);
        // 0.2 rounds to 0, minus 0.01 would be negative → floored
        assert_eq!(adjust_price(0.2, fr), 0.0);
    }

    #[test]
    fn test_always_non_negative_and_finite() {
        for region in regions() {
            for amount in [0.0, 0.01, 0.49, 1.0, 19.0, 99.0, 1e6, f64::NAN, -5.0] {
                let local = adjust_price(amount, region);
                assert!(local.is_finite(), "{} in {}", amount, region.code);
                assert!(local >= 0.0, "{} in {}", amount, region.code);
            }
        }
    }

    #[test]
    fn test_ppp_discount_applies_before_conversion() {
        let ma = get_region("MA");
        // 19 × 0.45 × 10.8 = 92.34 → 92 → 91.99
        assert_eq!(adjust_price(19.0, ma), 91.99);
    }
}
