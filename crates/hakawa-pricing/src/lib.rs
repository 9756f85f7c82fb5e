//! # hakawa-pricing: Pure Regional Pricing Logic for Hakawa
//!
//! This crate is the **heart** of Hakawa's regional pricing. It converts a
//! canonical EUR list price into a locale-appropriate, currency-formatted
//! display price, as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Hakawa Pricing Pipeline                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 hakawa-session (consumer side)                  │   │
//! │  │   Resolves the active region, owns the selection state          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ hakawa-pricing (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  region   │  │  adjust   │  │  format   │  │   plan    │  │   │
//! │  │   │ Registry  │  │ PPP × FX  │  │ Locale    │  │ Fallback  │  │   │
//! │  │   │ + lookup  │  │ + rounding│  │ rendering │  │ catalog   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STATE • PURE FUNCTIONS • NEVER PANICS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`region`] - Region registry: static catalog, lookup, validation
//! - [`currency`] - Currency codes, symbols, and rounding classes
//! - [`adjust`] - Price adjustment (PPP scaling, conversion, rounding)
//! - [`format`] - Locale-correct currency string rendering
//! - [`plan`] - Fallback subscription plan catalog (EUR reference prices)
//! - [`error`] - Registry integrity errors
//!
//! ## Design Principles
//!
//! 1. **Degrade to safe defaults**: unknown region → default region,
//!    malformed amount → `0` / empty string. A pricing page must always
//!    render a price; nothing at runtime panics or errors.
//! 2. **Fail loudly at boot**: the static region table is configuration,
//!    not user input. [`region::validate_registry`] rejects a malformed
//!    table before anything is displayed.
//! 3. **Pure functions**: same input = same output, trivially safe to call
//!    from multiple consumer contexts without coordination.
//!
//! ## Example Usage
//!
//! ```rust
//! use hakawa_pricing::{adjust_price, format_currency, get_region};
//!
//! // Unknown codes fall back to the default region (FR) rather than failing
//! let region = get_region("fr");
//!
//! // 19 EUR in FR: PPP 1.0 × rate 1.0, charm-rounded to 18.99
//! let local = adjust_price(19.0, region);
//! assert_eq!(local, 18.99);
//!
//! assert_eq!(format_currency(local, region), "18,99\u{00A0}€");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod adjust;
pub mod currency;
pub mod error;
pub mod format;
pub mod plan;
pub mod region;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use hakawa_pricing::RegionRecord` instead of
// `use hakawa_pricing::region::RegionRecord`

pub use adjust::adjust_price;
pub use currency::Currency;
pub use error::{RegistryError, RegistryResult};
pub use format::format_currency;
pub use plan::{fallback_plans, BillingPeriod, Plan};
pub use region::{
    get_region, is_valid_region_code, region, regions, validate_registry, RegionCode, RegionGroup,
    RegionRecord,
};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// The region used whenever no better choice exists (unknown code, no
/// persisted selection, unrecognized locale).
///
/// ## Why FR?
/// Hakawa launched in the French market; EUR list prices pass through
/// unchanged there (PPP 1.0, exchange rate 1.0), so the fallback is also the
/// cheapest region to reason about.
pub const DEFAULT_REGION_CODE: RegionCode = RegionCode::Fr;

/// Upper bound accepted for a PPP factor in the static region table.
///
/// ## Business Reason
/// PPP factors discount (or mildly inflate) EUR prices for local purchasing
/// power. Anything above 1.5 has always meant a typo in the table, not a real
/// market premium, so `validate_registry` rejects it at boot.
pub const MAX_PPP_FACTOR: f64 = 1.5;
