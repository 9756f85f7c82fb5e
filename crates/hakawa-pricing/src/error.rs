//! # Error Types
//!
//! Errors for hakawa-pricing.
//!
//! ## Where Errors Live (and Where They Don't)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Error Surface                                      │
//! │                                                                         │
//! │  BOOT TIME (this file)                                                 │
//! │  ├── RegistryError   - static region table is malformed                │
//! │  └── Policy: FAIL LOUDLY. The table is configuration, not user input.  │
//! │                                                                         │
//! │  RUNTIME (no error types at all)                                       │
//! │  ├── Unknown region code  → default region substituted                 │
//! │  ├── Non-finite amount    → adjusts to 0 / formats to ""               │
//! │  └── Policy: DEGRADE TO SAFE DEFAULT. A pricing page must always       │
//! │      render a price; nothing user-facing can fail here.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Registry Error
// =============================================================================

/// Integrity failures in the static region table.
///
/// Raised only by [`validate_registry`](crate::region::validate_registry)
/// (and the `FromStr` parse boundaries). Runtime lookups never produce these;
/// they substitute the default region instead.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Two table entries share the same region code.
    #[error("Duplicate region entry: {code}")]
    DuplicateRegion { code: String },

    /// A region code has no entry in the table.
    #[error("Region {code} is missing from the registry")]
    MissingRegion { code: String },

    /// Exchange rate must be a positive finite number.
    #[error("Region {code} has invalid exchange rate {value}")]
    InvalidExchangeRate { code: String, value: f64 },

    /// PPP factor must be positive, finite, and within the sanity bound.
    #[error("Region {code} has invalid PPP factor {value} (expected 0 < factor <= {max})")]
    InvalidPppFactor { code: String, value: f64, max: f64 },

    /// Locale identifier is empty.
    #[error("Region {code} has an empty locale")]
    EmptyLocale { code: String },

    /// Input does not name a supported region (parse boundary only).
    #[error("Unknown region code: '{code}'")]
    UnknownRegion { code: String },

    /// Input does not name a supported currency (parse boundary only).
    #[error("Unknown currency code: '{code}'")]
    UnknownCurrency { code: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with RegistryError.
pub type RegistryResult<T> = Result<T, RegistryError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = RegistryError::InvalidPppFactor {
            code: "MA".to_string(),
            value: 4.5,
            max: 1.5,
        };
        assert_eq!(
            err.to_string(),
            "Region MA has invalid PPP factor 4.5 (expected 0 < factor <= 1.5)"
        );

        let err = RegistryError::UnknownRegion {
            code: "ZZ".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown region code: 'ZZ'");
    }
}
