//! # Pricing Session
//!
//! The consumer-facing surface of the pricing stack: one owned piece of
//! state (the active region) plus the pure pipeline bound to it.
//!
//! ## State Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       PricingSession State                              │
//! │                                                                         │
//! │  Exactly ONE state variable: the active RegionCode.                     │
//! │                                                                         │
//! │  Initialized once ──► resolve_region_code (override → persisted →      │
//! │                       locale → default)                                 │
//! │                                                                         │
//! │  Mutated only by ──► set_region_code (validated; invalid = no-op;      │
//! │                       valid = update + persist)                         │
//! │                                                                         │
//! │  Read by ─────────► region_code / region / convert_from_eur /          │
//! │                       format / display_price / available_regions        │
//! │                                                                         │
//! │  One session per visitor context: never a process-wide global, so a    │
//! │  server-rendering host cannot leak one visitor's region to another.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use hakawa_pricing::{
    adjust_price, format_currency, region, regions, RegionCode, RegionRecord,
};
use tracing::debug;

use crate::environment::Environment;
use crate::resolve::resolve_region_code;

// =============================================================================
// Pricing Session
// =============================================================================

/// Per-visitor pricing state: the active region and helpers bound to it.
///
/// Construction runs the resolution chain once; afterwards
/// [`set_region_code`](PricingSession::set_region_code) is the only way the
/// active region changes.
pub struct PricingSession<E: Environment> {
    env: E,
    region_code: RegionCode,
}

impl<E: Environment> PricingSession<E> {
    /// Creates a session, resolving the initial region from the environment.
    pub fn new(env: E) -> Self {
        let region_code = resolve_region_code(&env);
        debug!(%region_code, "Pricing session initialized");
        PricingSession { env, region_code }
    }

    /// The active region code.
    pub fn region_code(&self) -> RegionCode {
        self.region_code
    }

    /// The active region record - resolved, ready to use.
    pub fn region(&self) -> &'static RegionRecord {
        region(self.region_code)
    }

    /// Switches the active region.
    ///
    /// ## Behavior
    /// - Invalid/unknown `code`: no-op, current state preserved
    /// - Valid `code`: updates the active region and persists the choice
    ///   (best-effort) for future sessions
    ///
    /// This is the only mutation path for the session's state.
    pub fn set_region_code(&mut self, code: &str) {
        let Some(code) = RegionCode::parse(code) else {
            debug!(requested = code, "Ignoring invalid region selection");
            return;
        };

        self.region_code = code;
        self.env.persist_region(code);
        debug!(%code, "Region selection changed");
    }

    /// Converts a reference EUR amount into the active region's currency.
    pub fn convert_from_eur(&self, eur_amount: f64) -> f64 {
        adjust_price(eur_amount, self.region())
    }

    /// Formats an amount (already in local currency) for display.
    pub fn format(&self, amount: f64) -> String {
        format_currency(amount, self.region())
    }

    /// Converts an EUR amount and formats it in one step.
    ///
    /// ## Example
    /// ```rust
    /// use hakawa_session::environment::FakeEnvironment;
    /// use hakawa_session::session::PricingSession;
    ///
    /// let session = PricingSession::new(FakeEnvironment::default().with_override("SN"));
    /// assert_eq!(session.display_price(19.0), "3\u{202F}700\u{00A0}F CFA");
    /// ```
    pub fn display_price(&self, eur_amount: f64) -> String {
        self.format(self.convert_from_eur(eur_amount))
    }

    /// The full region catalog, for building a selector UI.
    pub fn available_regions(&self) -> &'static [RegionRecord] {
        regions()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::FakeEnvironment;
    use hakawa_pricing::Currency;

    #[test]
    fn test_initial_region_follows_resolution_chain() {
        let session = PricingSession::new(
            FakeEnvironment::default()
                .with_override("US")
                .with_persisted("MA")
                .with_locale("fr-FR"),
        );
        assert_eq!(session.region_code(), RegionCode::Us);

        let session = PricingSession::new(
            FakeEnvironment::default()
                .with_persisted("MA")
                .with_locale("fr-FR"),
        );
        assert_eq!(session.region_code(), RegionCode::Ma);

        let session = PricingSession::new(FakeEnvironment::default().with_locale("fr-FR"));
        assert_eq!(session.region_code(), RegionCode::Fr);

        let session = PricingSession::new(FakeEnvironment::default().with_locale("en"));
        assert_eq!(session.region_code(), RegionCode::Fr);
    }

    #[test]
    fn test_set_region_code_updates_and_persists() {
        let mut session = PricingSession::new(FakeEnvironment::default());
        assert_eq!(session.region_code(), RegionCode::Fr);

        session.set_region_code("ma");
        assert_eq!(session.region_code(), RegionCode::Ma);
        assert_eq!(session.env.persisted_value().as_deref(), Some("MA"));
    }

    #[test]
    fn test_set_region_code_invalid_is_noop() {
        let mut session = PricingSession::new(FakeEnvironment::default().with_persisted("MA"));
        assert_eq!(session.region_code(), RegionCode::Ma);

        session.set_region_code("zz");
        assert_eq!(session.region_code(), RegionCode::Ma);
        // Nothing new persisted either
        assert_eq!(session.env.persisted_value().as_deref(), Some("MA"));
    }

    #[test]
    fn test_bound_helpers_follow_active_region() {
        let mut session = PricingSession::new(FakeEnvironment::default());

        // FR: identity conversion, charm pricing, French formatting
        assert_eq!(session.convert_from_eur(19.0), 18.99);
        assert_eq!(session.format(18.99), "18,99\u{00A0}€");
        assert_eq!(session.display_price(19.0), "18,99\u{00A0}€");

        // Switch to SN: coarse XOF pipeline
        session.set_region_code("SN");
        assert_eq!(session.region().currency, Currency::Xof);
        assert_eq!(session.convert_from_eur(19.0), 3700.0);
        assert_eq!(session.display_price(19.0), "3\u{202F}700\u{00A0}F CFA");
    }

    #[test]
    fn test_available_regions_exposes_full_catalog() {
        let session = PricingSession::new(FakeEnvironment::default());
        let catalog = session.available_regions();
        assert_eq!(catalog.len(), RegionCode::ALL.len());
        assert!(catalog.iter().any(|r| r.code == RegionCode::Ci));
    }

    #[test]
    fn test_sessions_do_not_share_state() {
        let mut first = PricingSession::new(FakeEnvironment::default());
        let second = PricingSession::new(FakeEnvironment::default());

        first.set_region_code("US");
        assert_eq!(first.region_code(), RegionCode::Us);
        assert_eq!(second.region_code(), RegionCode::Fr);
    }
}
