//! # Region Registry
//!
//! The static catalog of regions Hakawa prices for, plus the lookup
//! operations every other component goes through.
//!
//! ## Lookup Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Region Lookup Flow                                │
//! │                                                                         │
//! │  "fr" ──► uppercase ──► found ──────────────► RegionRecord for FR      │
//! │                                                                         │
//! │  "zz" ──► uppercase ──► not found ──► DEFAULT (FR) RegionRecord        │
//! │                                                                         │
//! │  ""  / garbage ─────────────────────► DEFAULT (FR) RegionRecord        │
//! │                                                                         │
//! │  get_region NEVER returns "nothing": downstream code never null-checks │
//! │  and a pricing page always has a region to render with.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Table Integrity
//! The table itself is configuration. [`validate_registry`] checks it once at
//! boot and fails loudly on a malformed entry - the degrade-to-default policy
//! applies to runtime lookups only.

use serde::{Deserialize, Serialize};

use crate::currency::Currency;
use crate::error::{RegistryError, RegistryResult};
use crate::{DEFAULT_REGION_CODE, MAX_PPP_FACTOR};

// =============================================================================
// Region Code
// =============================================================================

/// A supported region, keyed by its two-letter country code.
///
/// ## Design Notes
/// - Closed enum: a `RegionCode` value is valid by construction, so
///   downstream code never re-validates.
/// - Garbage input is rejected at the [`RegionCode::parse`] boundary and
///   never propagates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RegionCode {
    /// France (default region).
    Fr,
    /// Belgium.
    Be,
    /// Switzerland.
    Ch,
    /// Spain.
    Es,
    /// Canada.
    Ca,
    /// United States.
    Us,
    /// Mexico.
    Mx,
    /// Argentina.
    Ar,
    /// Colombia.
    Co,
    /// Morocco.
    Ma,
    /// Senegal.
    Sn,
    /// Ivory Coast.
    Ci,
}

impl RegionCode {
    /// All supported codes, in registry order.
    pub const ALL: [RegionCode; 12] = [
        RegionCode::Fr,
        RegionCode::Be,
        RegionCode::Ch,
        RegionCode::Es,
        RegionCode::Ca,
        RegionCode::Us,
        RegionCode::Mx,
        RegionCode::Ar,
        RegionCode::Co,
        RegionCode::Ma,
        RegionCode::Sn,
        RegionCode::Ci,
    ];

    /// Returns the uppercase two-letter code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            RegionCode::Fr => "FR",
            RegionCode::Be => "BE",
            RegionCode::Ch => "CH",
            RegionCode::Es => "ES",
            RegionCode::Ca => "CA",
            RegionCode::Us => "US",
            RegionCode::Mx => "MX",
            RegionCode::Ar => "AR",
            RegionCode::Co => "CO",
            RegionCode::Ma => "MA",
            RegionCode::Sn => "SN",
            RegionCode::Ci => "CI",
        }
    }

    /// Parses a region code from arbitrary input.
    ///
    /// Case-insensitive, whitespace-tolerant. Returns `None` for anything
    /// that does not name a supported region - this is the single
    /// normalization/rejection boundary for untrusted input.
    ///
    /// ## Example
    /// ```rust
    /// use hakawa_pricing::RegionCode;
    ///
    /// assert_eq!(RegionCode::parse("fr"), Some(RegionCode::Fr));
    /// assert_eq!(RegionCode::parse(" MA "), Some(RegionCode::Ma));
    /// assert_eq!(RegionCode::parse("zz"), None);
    /// assert_eq!(RegionCode::parse(""), None);
    /// ```
    pub fn parse(input: &str) -> Option<RegionCode> {
        let normalized = input.trim().to_uppercase();
        RegionCode::ALL
            .iter()
            .copied()
            .find(|code| code.as_str() == normalized)
    }
}

impl std::fmt::Display for RegionCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RegionCode {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RegionCode::parse(s).ok_or_else(|| RegistryError::UnknownRegion {
            code: s.to_string(),
        })
    }
}

// =============================================================================
// Region Group
// =============================================================================

/// Display grouping for region selector UIs.
///
/// Order is not significant to correctness; consumers group and sort for
/// display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionGroup {
    Europe,
    Americas,
    Africa,
}

impl std::fmt::Display for RegionGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegionGroup::Europe => write!(f, "europe"),
            RegionGroup::Americas => write!(f, "americas"),
            RegionGroup::Africa => write!(f, "africa"),
        }
    }
}

// =============================================================================
// Region Record
// =============================================================================

/// The static configuration tuple for one supported region.
///
/// ## Lifecycle
/// Created at compile time in [`REGIONS`]; never mutated; never created
/// dynamically from user input. `exchange_rate` is in local currency units
/// per one EUR; `ppp_factor` is the purchasing-power multiplier applied
/// before conversion.
#[derive(Debug, Clone, Serialize)]
pub struct RegionRecord {
    /// Region code (unique key).
    pub code: RegionCode,

    /// Billing currency. Not unique: SN and CI both bill in XOF.
    pub currency: Currency,

    /// Locale identifier, used only for number/currency formatting.
    pub locale: &'static str,

    /// Local currency units per one EUR.
    pub exchange_rate: f64,

    /// Purchasing-power multiplier applied before conversion.
    pub ppp_factor: f64,

    /// Display grouping for selector UIs.
    pub group: RegionGroup,
}

/// The full region catalog.
///
/// Values mirror the marketing site's launch table. Exchange rates are
/// deliberately static snapshots, not live quotes: display prices must be
/// stable between visits, and billing happens in EUR upstream anyway.
pub static REGIONS: &[RegionRecord] = &[
    // Europe
    RegionRecord {
        code: RegionCode::Fr,
        currency: Currency::Eur,
        locale: "fr-FR",
        exchange_rate: 1.0,
        ppp_factor: 1.0,
        group: RegionGroup::Europe,
    },
    RegionRecord {
        code: RegionCode::Be,
        currency: Currency::Eur,
        locale: "fr-BE",
        exchange_rate: 1.0,
        ppp_factor: 1.0,
        group: RegionGroup::Europe,
    },
    RegionRecord {
        code: RegionCode::Ch,
        currency: Currency::Eur,
        locale: "fr-CH",
        exchange_rate: 1.0,
        ppp_factor: 1.1,
        group: RegionGroup::Europe,
    },
    RegionRecord {
        code: RegionCode::Es,
        currency: Currency::Eur,
        locale: "es-ES",
        exchange_rate: 1.0,
        ppp_factor: 0.9,
        group: RegionGroup::Europe,
    },
    // North America
    RegionRecord {
        code: RegionCode::Ca,
        currency: Currency::Cad,
        locale: "fr-CA",
        exchange_rate: 1.45,
        ppp_factor: 1.0,
        group: RegionGroup::Americas,
    },
    RegionRecord {
        code: RegionCode::Us,
        currency: Currency::Usd,
        locale: "en-US",
        exchange_rate: 1.08,
        ppp_factor: 1.0,
        group: RegionGroup::Americas,
    },
    // LatAm
    RegionRecord {
        code: RegionCode::Mx,
        currency: Currency::Mxn,
        locale: "es-MX",
        exchange_rate: 18.5,
        ppp_factor: 0.5,
        group: RegionGroup::Americas,
    },
    RegionRecord {
        code: RegionCode::Ar,
        currency: Currency::Ars,
        locale: "es-AR",
        exchange_rate: 950.0,
        ppp_factor: 0.3,
        group: RegionGroup::Americas,
    },
    RegionRecord {
        code: RegionCode::Co,
        currency: Currency::Cop,
        locale: "es-CO",
        exchange_rate: 4200.0,
        ppp_factor: 0.4,
        group: RegionGroup::Americas,
    },
    // Africa
    RegionRecord {
        code: RegionCode::Ma,
        currency: Currency::Mad,
        locale: "fr-MA",
        exchange_rate: 10.8,
        ppp_factor: 0.45,
        group: RegionGroup::Africa,
    },
    RegionRecord {
        code: RegionCode::Sn,
        currency: Currency::Xof,
        locale: "fr-SN",
        exchange_rate: 655.96,
        ppp_factor: 0.3,
        group: RegionGroup::Africa,
    },
    RegionRecord {
        code: RegionCode::Ci,
        currency: Currency::Xof,
        locale: "fr-CI",
        exchange_rate: 655.96,
        ppp_factor: 0.3,
        group: RegionGroup::Africa,
    },
];

// =============================================================================
// Lookup Operations
// =============================================================================

/// Returns true iff the input, uppercased, names a supported region.
///
/// Tolerates empty/garbage input by returning false; never panics.
///
/// ## Example
/// ```rust
/// use hakawa_pricing::is_valid_region_code;
///
/// assert!(is_valid_region_code("FR"));
/// assert!(is_valid_region_code("ma"));
/// assert!(!is_valid_region_code("zz"));
/// assert!(!is_valid_region_code(""));
/// ```
pub fn is_valid_region_code(code: &str) -> bool {
    RegionCode::parse(code).is_some()
}

/// Returns the record for the given code, or the default region's record for
/// unknown input.
///
/// Never returns "nothing" - invalid input degrades to the default region so
/// a pricing page always has something to render.
pub fn get_region(code: &str) -> &'static RegionRecord {
    let code = RegionCode::parse(code).unwrap_or(DEFAULT_REGION_CODE);
    region(code)
}

/// Infallible typed lookup.
///
/// The table covers every `RegionCode` variant (guarded by
/// [`validate_registry`] and the registry tests), so the fallback arm is
/// unreachable in practice but keeps this function panic-free.
pub fn region(code: RegionCode) -> &'static RegionRecord {
    REGIONS
        .iter()
        .find(|record| record.code == code)
        .unwrap_or(&REGIONS[0])
}

/// All region records, in registry order.
///
/// Intended for building selector UIs; see [`RegionRecord::group`] for the
/// display grouping.
pub fn regions() -> &'static [RegionRecord] {
    REGIONS
}

// =============================================================================
// Registry Validation
// =============================================================================

/// Validates the static region table.
///
/// ## Checks
/// - Every `RegionCode` variant appears exactly once (no missing entries,
///   no duplicates)
/// - Exchange rates are positive and finite
/// - PPP factors are positive, finite, and within [`MAX_PPP_FACTOR`]
/// - Locales are non-empty
///
/// Call once at boot. A failure here means the table was edited incorrectly
/// and the process should refuse to serve prices at all.
pub fn validate_registry() -> RegistryResult<()> {
    for code in RegionCode::ALL {
        let matches = REGIONS.iter().filter(|r| r.code == code).count();
        if matches == 0 {
            return Err(RegistryError::MissingRegion {
                code: code.to_string(),
            });
        }
        if matches > 1 {
            return Err(RegistryError::DuplicateRegion {
                code: code.to_string(),
            });
        }
    }

    for record in REGIONS {
        if !record.exchange_rate.is_finite() || record.exchange_rate <= 0.0 {
            return Err(RegistryError::InvalidExchangeRate {
                code: record.code.to_string(),
                value: record.exchange_rate,
            });
        }

        if !record.ppp_factor.is_finite()
            || record.ppp_factor <= 0.0
            || record.ppp_factor > MAX_PPP_FACTOR
        {
            return Err(RegistryError::InvalidPppFactor {
                code: record.code.to_string(),
                value: record.ppp_factor,
                max: MAX_PPP_FACTOR,
            });
        }

        if record.locale.is_empty() {
            return Err(RegistryError::EmptyLocale {
                code: record.code.to_string(),
            });
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_is_valid() {
        validate_registry().unwrap();
    }

    #[test]
    fn test_parse_normalizes_case_and_whitespace() {
        assert_eq!(RegionCode::parse("fr"), Some(RegionCode::Fr));
        assert_eq!(RegionCode::parse("FR"), Some(RegionCode::Fr));
        assert_eq!(RegionCode::parse("  sn "), Some(RegionCode::Sn));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(RegionCode::parse(""), None);
        assert_eq!(RegionCode::parse("zz"), None);
        assert_eq!(RegionCode::parse("FRA"), None);
        assert_eq!(RegionCode::parse("12"), None);
        assert_eq!(RegionCode::parse("é€"), None);
    }

    #[test]
    fn test_get_region_round_trips_valid_codes() {
        for code in RegionCode::ALL {
            assert_eq!(get_region(code.as_str()).code, code);
            // Lowercase input normalizes to the same record
            assert_eq!(get_region(&code.as_str().to_lowercase()).code, code);
        }
    }

    #[test]
    fn test_get_region_falls_back_to_default() {
        assert_eq!(get_region("zz").code, RegionCode::Fr);
        assert_eq!(get_region("").code, RegionCode::Fr);
        assert_eq!(get_region("not a code").code, RegionCode::Fr);
    }

    #[test]
    fn test_is_valid_region_code() {
        assert!(is_valid_region_code("FR"));
        assert!(is_valid_region_code("ci"));
        assert!(!is_valid_region_code("zz"));
        assert!(!is_valid_region_code(""));
        assert!(!is_valid_region_code("   "));
    }

    #[test]
    fn test_shared_currency_regions() {
        // XOF is shared: currency is not a unique key
        assert_eq!(region(RegionCode::Sn).currency, Currency::Xof);
        assert_eq!(region(RegionCode::Ci).currency, Currency::Xof);
    }

    #[test]
    fn test_every_group_is_populated() {
        for group in [RegionGroup::Europe, RegionGroup::Americas, RegionGroup::Africa] {
            assert!(regions().iter().any(|r| r.group == group));
        }
    }

    #[test]
    fn test_region_record_serializes_with_string_keys() {
        let json = serde_json::to_value(region(RegionCode::Sn)).unwrap();
        assert_eq!(json["code"], "SN");
        assert_eq!(json["currency"], "XOF");
        assert_eq!(json["locale"], "fr-SN");
    }
}
