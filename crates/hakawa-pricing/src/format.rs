//! # Currency Formatter
//!
//! Renders a numeric amount as a locale-correct currency string.
//!
//! ## Locale Conventions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                   Rendering by Locale Convention                        │
//! │                                                                         │
//! │  Locale      Decimal  Grouping   Symbol placement     Example          │
//! │  ──────      ───────  ────────   ────────────────     ───────          │
//! │  fr-* / es-ES   ","   narrow ␣   suffix, nbsp         18,99 €          │
//! │  en-US          "."   ","        prefix, no space     $18.99           │
//! │  es-MX          "."   ","        prefix, no space     $18.99           │
//! │  es-AR / es-CO  ","   "."        prefix, nbsp         $ 3.700          │
//! │                                                                         │
//! │  Fraction digits come from the currency's rounding class:              │
//! │  coarse (XOF/ARS/COP) → 0 digits, everything else → 2 digits.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Output matches what a standard i18n currency formatter produces for these
//! locale/currency pairs. Separators are the non-breaking variants so prices
//! never wrap mid-number in a UI.

use crate::region::RegionRecord;

// Non-breaking spaces used by CLDR-style currency patterns.
const NBSP: char = '\u{00A0}';
const NARROW_NBSP: char = '\u{202F}';

// =============================================================================
// Locale Conventions
// =============================================================================

/// Where the currency symbol sits relative to the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SymbolPosition {
    /// Symbol immediately before the number ("$18.99").
    Prefix,
    /// Symbol before the number, separated by a no-break space ("$ 3.700").
    PrefixSpaced,
    /// Symbol after the number, separated by a no-break space ("18,99 €").
    Suffix,
}

/// Number-rendering conventions for one locale.
#[derive(Debug, Clone, Copy)]
struct LocaleConvention {
    decimal_sep: char,
    group_sep: char,
    symbol_position: SymbolPosition,
}

/// Resolves rendering conventions from the region's locale identifier.
///
/// The registry only carries the locales matched below; anything else takes
/// the French convention, which is also the default region's.
fn convention(locale: &str) -> LocaleConvention {
    match locale {
        "en-US" | "es-MX" => LocaleConvention {
            decimal_sep: '.',
            group_sep: ',',
            symbol_position: SymbolPosition::Prefix,
        },
        "es-AR" | "es-CO" => LocaleConvention {
            decimal_sep: ',',
            group_sep: '.',
            symbol_position: SymbolPosition::PrefixSpaced,
        },
        // fr-FR, fr-BE, fr-CH, fr-CA, fr-MA, fr-SN, fr-CI, es-ES
        _ => LocaleConvention {
            decimal_sep: ',',
            group_sep: NARROW_NBSP,
            symbol_position: SymbolPosition::Suffix,
        },
    }
}

// =============================================================================
// Formatting
// =============================================================================

/// Renders an amount as a localized currency string.
///
/// ## Behavior
/// - Non-finite `amount` → empty string (never render "NaN" to a visitor)
/// - Fraction digits follow the currency's rounding class (0 for coarse,
///   2 otherwise)
/// - Grouping, decimal separator, and symbol placement follow the region's
///   locale
///
/// Pure function: same `(amount, region)` always yields the same string.
///
/// ## Example
/// ```rust
/// use hakawa_pricing::{format_currency, get_region};
///
/// assert_eq!(format_currency(18.99, get_region("FR")), "18,99\u{00A0}€");
/// assert_eq!(format_currency(18.99, get_region("US")), "$18.99");
/// assert_eq!(format_currency(3700.0, get_region("SN")), "3\u{202F}700\u{00A0}F CFA");
/// ```
pub fn format_currency(amount: f64, region: &RegionRecord) -> String {
    if !amount.is_finite() {
        return String::new();
    }

    let conv = convention(region.locale);
    let digits = region.currency.fraction_digits();
    let symbol = region.currency.symbol();

    let sign = if amount < 0.0 { "-" } else { "" };
    let scale = 10_i64.pow(digits);
    // Saturating cast: absurdly large inputs clamp instead of overflowing.
    let total = (amount.abs() * scale as f64).round() as i64;
    let units = total / scale;
    let fraction = total % scale;

    let mut number = group_digits(units, conv.group_sep);
    if digits > 0 {
        number.push(conv.decimal_sep);
        number.push_str(&format!("{:0width$}", fraction, width = digits as usize));
    }

    match conv.symbol_position {
        SymbolPosition::Prefix => format!("{sign}{symbol}{number}"),
        SymbolPosition::PrefixSpaced => format!("{sign}{symbol}{NBSP}{number}"),
        SymbolPosition::Suffix => format!("{sign}{number}{NBSP}{symbol}"),
    }
}

/// Renders a non-negative integer with a grouping separator every three
/// digits ("3700" → "3 700").
fn group_digits(units: i64, sep: char) -> String {
    let raw = units.to_string();
    let mut grouped = String::with_capacity(raw.len() + raw.len() / 3);

    let digits = raw.as_bytes();
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(sep);
        }
        grouped.push(*digit as char);
    }

    grouped
}

// =============================================================================
// Unit Tests
// =============================================================================
