//! # Subscription Plan Catalog
//!
//! The fallback table of Hakawa subscription plans, with reference prices in
//! EUR.
//!
//! ## Role
//! The live plan table comes from the billing backend. When that endpoint is
//! unreachable the marketing site still has to render a pricing page, so
//! this static catalog mirrors the launch plans. The pricing engine's job
//! ends at converting and formatting whichever reference amounts are in
//! play - live or fallback.

use serde::{Deserialize, Serialize};

// =============================================================================
// Billing Period
// =============================================================================

/// Billing cadence a visitor can toggle between on the pricing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingPeriod {
    /// Billed every month.
    #[default]
    Monthly,
    /// Billed once a year (discounted).
    Annual,
}

impl std::fmt::Display for BillingPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BillingPeriod::Monthly => write!(f, "monthly"),
            BillingPeriod::Annual => write!(f, "annual"),
        }
    }
}

// =============================================================================
// Plan
// =============================================================================

/// One subscription tier with its reference EUR prices.
#[derive(Debug, Clone, Serialize)]
pub struct Plan {
    /// Plan identifier, as the billing backend knows it.
    pub id: &'static str,

    /// Monthly price in EUR (reference currency).
    pub monthly_eur: f64,

    /// Annual price in EUR (reference currency).
    pub annual_eur: f64,

    /// Highlighted tier on the pricing page.
    pub popular: bool,
}

impl Plan {
    /// Returns the reference EUR price for the given billing period.
    pub fn price_eur(&self, period: BillingPeriod) -> f64 {
        match period {
            BillingPeriod::Monthly => self.monthly_eur,
            BillingPeriod::Annual => self.annual_eur,
        }
    }

    /// Free plans are rendered without a price at all.
    pub fn is_free(&self) -> bool {
        self.monthly_eur == 0.0 && self.annual_eur == 0.0
    }
}

/// Launch plan table, mirrored from the billing backend's seed data.
static FALLBACK_PLANS: &[Plan] = &[
    Plan {
        id: "free",
        monthly_eur: 0.0,
        annual_eur: 0.0,
        popular: false,
    },
    Plan {
        id: "conteur",
        monthly_eur: 19.0,
        annual_eur: 149.0,
        popular: false,
    },
    Plan {
        id: "auteur",
        monthly_eur: 39.0,
        annual_eur: 319.0,
        popular: true,
    },
    Plan {
        id: "studio",
        monthly_eur: 99.0,
        annual_eur: 799.0,
        popular: false,
    },
];

/// Returns the static fallback plan catalog.
pub fn fallback_plans() -> &'static [Plan] {
    FALLBACK_PLANS
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adjust::adjust_price;
    use crate::region::get_region;

    #[test]
    fn test_catalog_shape() {
        let plans = fallback_plans();
        assert_eq!(plans.len(), 4);
        assert_eq!(plans[0].id, "free");
        assert!(plans[0].is_free());
        // Exactly one highlighted tier
        assert_eq!(plans.iter().filter(|p| p.popular).count(), 1);
    }

    #[test]
    fn test_price_by_period() {
        let conteur = &fallback_plans()[1];
        assert_eq!(conteur.price_eur(BillingPeriod::Monthly), 19.0);
        assert_eq!(conteur.price_eur(BillingPeriod::Annual), 149.0);
    }

    #[test]
    fn test_plans_adjust_cleanly_for_default_region() {
        let fr = get_region("FR");
        let conteur = &fallback_plans()[1];
        assert_eq!(adjust_price(conteur.monthly_eur, fr), 18.99);
        assert_eq!(adjust_price(conteur.annual_eur, fr), 148.99);
    }
}
