//! # Currency Catalog
//!
//! The closed set of currencies Hakawa bills in, with the per-currency
//! properties the adjuster and formatter need.
//!
//! ## Rounding Classes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Currency Rounding Classes                          │
//! │                                                                         │
//! │  STANDARD (EUR, USD, MAD, CAD, MXN)                                    │
//! │  ──────────────────────────────────                                    │
//! │  • Round to the nearest whole unit, then subtract 0.01                 │
//! │  • Two fraction digits when formatted (e.g. "18,99 €")                 │
//! │                                                                         │
//! │  COARSE (XOF, ARS, COP)                                                │
//! │  ──────────────────────                                                │
//! │  • Round to the nearest 100 units                                      │
//! │  • Zero fraction digits when formatted (e.g. "3 700 F CFA")            │
//! │  • Used where one EUR converts to hundreds/thousands of local units    │
//! │                                                                         │
//! │  The two classes are the SAME partition for both rounding and          │
//! │  formatting. `fraction_digits()` derives from `coarse_rounding()`.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::error::RegistryError;

// =============================================================================
// Currency
// =============================================================================

/// A currency Hakawa displays prices in.
///
/// ## Design Notes
/// - Closed enum, not a string: an unsupported currency in the region table
///   is a compile error, not a runtime surprise.
/// - Multiple regions may share a currency (SN and CI both bill in XOF).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Euro - the reference currency all list prices are authored in.
    Eur,
    /// US Dollar.
    Usd,
    /// Moroccan Dirham.
    Mad,
    /// West African CFA Franc (shared by SN and CI).
    Xof,
    /// Canadian Dollar.
    Cad,
    /// Mexican Peso.
    Mxn,
    /// Argentine Peso.
    Ars,
    /// Colombian Peso.
    Cop,
}

impl Currency {
    /// Returns the three-letter currency code.
    pub const fn code(&self) -> &'static str {
        match self {
            Currency::Eur => "EUR",
            Currency::Usd => "USD",
            Currency::Mad => "MAD",
            Currency::Xof => "XOF",
            Currency::Cad => "CAD",
            Currency::Mxn => "MXN",
            Currency::Ars => "ARS",
            Currency::Cop => "COP",
        }
    }

    /// Returns the display symbol used by the formatter.
    ///
    /// ## Note
    /// Several Latin American currencies share the `$` sign; the locale
    /// conventions (placement, spacing) disambiguate them in rendered output.
    pub const fn symbol(&self) -> &'static str {
        match self {
            Currency::Eur => "€",
            Currency::Usd => "$",
            Currency::Mad => "MAD",
            Currency::Xof => "F CFA",
            Currency::Cad => "$",
            Currency::Mxn => "$",
            Currency::Ars => "$",
            Currency::Cop => "$",
        }
    }

    /// Whether this currency uses coarse rounding (nearest 100 units).
    ///
    /// Coarse currencies are those whose smallest casually-used denomination
    /// is effectively "hundreds": one EUR converts to several hundred local
    /// units, so cent-level precision is noise to a visitor.
    pub const fn coarse_rounding(&self) -> bool {
        matches!(self, Currency::Xof | Currency::Ars | Currency::Cop)
    }

    /// Number of fraction digits shown when formatting.
    ///
    /// Zero for coarse currencies, two otherwise. The partition is the same
    /// as [`coarse_rounding`](Currency::coarse_rounding) - a price rounded to
    /// the nearest 100 never has meaningful decimals.
    pub const fn fraction_digits(&self) -> u32 {
        if self.coarse_rounding() {
            0
        } else {
            2
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "EUR" => Ok(Currency::Eur),
            "USD" => Ok(Currency::Usd),
            "MAD" => Ok(Currency::Mad),
            "XOF" => Ok(Currency::Xof),
            "CAD" => Ok(Currency::Cad),
            "MXN" => Ok(Currency::Mxn),
            "ARS" => Ok(Currency::Ars),
            "COP" => Ok(Currency::Cop),
            other => Err(RegistryError::UnknownCurrency {
                code: other.to_string(),
            }),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_coarse_set() {
        assert!(Currency::Xof.coarse_rounding());
        assert!(Currency::Ars.coarse_rounding());
        assert!(Currency::Cop.coarse_rounding());

        assert!(!Currency::Eur.coarse_rounding());
        assert!(!Currency::Usd.coarse_rounding());
        assert!(!Currency::Mad.coarse_rounding());
        assert!(!Currency::Cad.coarse_rounding());
        assert!(!Currency::Mxn.coarse_rounding());
    }

    #[test]
    fn test_fraction_digits_follow_rounding_class() {
        assert_eq!(Currency::Xof.fraction_digits(), 0);
        assert_eq!(Currency::Ars.fraction_digits(), 0);
        assert_eq!(Currency::Cop.fraction_digits(), 0);
        assert_eq!(Currency::Eur.fraction_digits(), 2);
        assert_eq!(Currency::Mad.fraction_digits(), 2);
    }

    #[test]
    fn test_code_round_trip() {
        for currency in [
            Currency::Eur,
            Currency::Usd,
            Currency::Mad,
            Currency::Xof,
            Currency::Cad,
            Currency::Mxn,
            Currency::Ars,
            Currency::Cop,
        ] {
            assert_eq!(Currency::from_str(currency.code()).unwrap(), currency);
        }
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!(Currency::from_str("eur").unwrap(), Currency::Eur);
        assert_eq!(Currency::from_str("xOf").unwrap(), Currency::Xof);
        assert!(Currency::from_str("BTC").is_err());
    }

    #[test]
    fn test_serde_uses_uppercase_code() {
        let json = serde_json::to_string(&Currency::Xof).unwrap();
        assert_eq!(json, "\"XOF\"");
        let back: Currency = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Currency::Xof);
    }
}
