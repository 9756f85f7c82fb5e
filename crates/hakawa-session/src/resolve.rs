//! # Region Resolution Policy
//!
//! The strict, ordered fallback chain that picks the initial region for a
//! visitor. Evaluated once, when the session is constructed.
//!
//! ## Precedence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │              Resolution Precedence (first valid wins)                   │
//! │                                                                         │
//! │  override "US" + persisted "MA" + locale "fr-FR"  ──►  US               │
//! │                 persisted "MA" + locale "fr-FR"   ──►  MA               │
//! │                                  locale "fr-FR"   ──►  FR               │
//! │                                  locale "en"      ──►  default (FR)     │
//! │                                                                         │
//! │  An INVALID value at any step is skipped, not an error: override "zz"  │
//! │  falls through to the persisted choice, and so on down the chain.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use hakawa_pricing::{RegionCode, DEFAULT_REGION_CODE};
use tracing::debug;

use crate::environment::Environment;

// =============================================================================
// Resolution
// =============================================================================

/// Resolves the active region code for a new session.
///
/// Order: explicit override → persisted choice → locale region subtag →
/// [`DEFAULT_REGION_CODE`]. Each source is consulted at most once; invalid
/// or absent values fall through silently.
pub fn resolve_region_code(env: &dyn Environment) -> RegionCode {
    if let Some(raw) = env.override_region() {
        if let Some(code) = RegionCode::parse(&raw) {
            debug!(%code, "Region resolved from explicit override");
            return code;
        }
        debug!(%raw, "Ignoring invalid region override");
    }

    if let Some(raw) = env.persisted_region() {
        if let Some(code) = RegionCode::parse(&raw) {
            debug!(%code, "Region resolved from persisted choice");
            return code;
        }
        debug!(%raw, "Ignoring invalid persisted region");
    }

    if let Some(locale) = env.locale() {
        if let Some(code) = region_subtag(&locale).and_then(RegionCode::parse) {
            debug!(%code, %locale, "Region inferred from locale");
            return code;
        }
        debug!(%locale, "Locale carries no usable region subtag");
    }

    debug!(code = %DEFAULT_REGION_CODE, "Region fell back to default");
    DEFAULT_REGION_CODE
}

/// Extracts the country-like subtag from a locale identifier.
///
/// Handles both BCP 47 ("fr-FR") and POSIX ("fr_FR.UTF-8", "fr_FR@euro")
/// shapes. A bare language ("en", "C", "POSIX") has no subtag.
fn region_subtag(locale: &str) -> Option<&str> {
    // Strip POSIX encoding/modifier suffixes before splitting
    let base = locale.split(['.', '@']).next().unwrap_or(locale);
    base.split(['-', '_']).nth(1).filter(|tag| !tag.is_empty())
}

// =============================================================================
// Unit Tests
// =============================================================================
