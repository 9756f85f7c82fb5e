//! # Environment Providers
//!
//! The resolution policy never touches the runtime directly. It reads three
//! values (explicit override, persisted choice, locale) through the
//! [`Environment`] trait, so the policy itself is unit-testable with fake
//! providers and the real probing lives in one place.
//!
//! ## Failure Semantics
//! Every probe is resilient to its backing source being unavailable:
//! a missing env var, an unreadable file, or a disabled config directory all
//! surface as `None`, never as an error. The pricing page must render with
//! or without them.

use std::cell::RefCell;

use hakawa_pricing::RegionCode;
use tracing::warn;

use crate::store::RegionStore;

/// Environment variable carrying an explicit region override.
///
/// The web frontend's equivalent is a `?region=` query parameter; for a
/// process runtime the same testing/demo channel is an env var.
pub const REGION_OVERRIDE_VAR: &str = "HAKAWA_REGION";

// =============================================================================
// Environment Trait
// =============================================================================

/// The three read probes and one write sink the resolution policy needs.
///
/// ## Contract
/// - Readers return `None` for "absent", including any failure inside the
///   implementation. They must not panic.
/// - Readers return raw, untrusted strings; validation happens in the
///   policy, at the [`RegionCode::parse`] boundary.
/// - `persist_region` is best-effort: failures are logged by the
///   implementation and swallowed. A visitor whose storage is unavailable
///   simply gets re-detected next session.
pub trait Environment {
    /// Explicit region override (testing/demo channel), if present.
    fn override_region(&self) -> Option<String>;

    /// The previously persisted region choice, if any.
    fn persisted_region(&self) -> Option<String>;

    /// The runtime's reported locale string (e.g. "fr_FR.UTF-8"), if any.
    fn locale(&self) -> Option<String>;

    /// Persists a validated region choice for future sessions.
    fn persist_region(&self, code: RegionCode);
}

// =============================================================================
// System Environment
// =============================================================================

/// The real environment: process env vars plus the file-backed region store.
///
/// ## Probe Sources
/// - Override: [`REGION_OVERRIDE_VAR`]
/// - Persisted: the [`RegionStore`] file under the user config directory
/// - Locale: `LC_ALL`, then `LC_MESSAGES`, then `LANG` (POSIX precedence)
pub struct SystemEnvironment {
    store: RegionStore,
}

impl SystemEnvironment {
    /// Creates a system environment with the store at its default location.
    pub fn new() -> Self {
        SystemEnvironment {
            store: RegionStore::from_default_location(),
        }
    }

    /// Creates a system environment with a specific store (tests, sandboxes).
    pub fn with_store(store: RegionStore) -> Self {
        SystemEnvironment { store }
    }
}

impl Default for SystemEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment for SystemEnvironment {
    fn override_region(&self) -> Option<String> {
        std::env::var(REGION_OVERRIDE_VAR)
            .ok()
            .filter(|value| !value.trim().is_empty())
    }

    fn persisted_region(&self) -> Option<String> {
        self.store.load().map(|code| code.as_str().to_string())
    }

    fn locale(&self) -> Option<String> {
        ["LC_ALL", "LC_MESSAGES", "LANG"]
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|value| !value.trim().is_empty())
    }

    fn persist_region(&self, code: RegionCode) {
        if let Err(error) = self.store.save(code) {
            warn!(%code, %error, "Failed to persist region choice; continuing without");
        }
    }
}

// =============================================================================
// Fake Environment (test support)
// =============================================================================

/// An in-memory environment for unit tests and examples.
///
/// Persisted writes land in the same slot `persisted_region` reads from, so
/// tests can assert the full choose-then-reload loop without a filesystem.
#[derive(Debug, Default)]
pub struct FakeEnvironment {
    override_region: Option<String>,
    persisted: RefCell<Option<String>>,
    locale: Option<String>,
}

impl FakeEnvironment {
    /// Sets the explicit override probe.
    pub fn with_override(mut self, value: &str) -> Self {
        self.override_region = Some(value.to_string());
        self
    }

    /// Sets the persisted-choice probe.
    pub fn with_persisted(self, value: &str) -> Self {
        *self.persisted.borrow_mut() = Some(value.to_string());
        self
    }

    /// Sets the locale probe.
    pub fn with_locale(mut self, value: &str) -> Self {
        self.locale = Some(value.to_string());
        self
    }

    /// Returns what was last persisted, if anything.
    pub fn persisted_value(&self) -> Option<String> {
        self.persisted.borrow().clone()
    }
}

impl Environment for FakeEnvironment {
    fn override_region(&self) -> Option<String> {
        self.override_region.clone()
    }

    fn persisted_region(&self) -> Option<String> {
        self.persisted.borrow().clone()
    }

    fn locale(&self) -> Option<String> {
        self.locale.clone()
    }

    fn persist_region(&self, code: RegionCode) {
        *self.persisted.borrow_mut() = Some(code.as_str().to_string());
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fake_environment_round_trip() {
        let env = FakeEnvironment::default();
        assert_eq!(env.persisted_region(), None);

        env.persist_region(RegionCode::Ma);
        assert_eq!(env.persisted_region().as_deref(), Some("MA"));
        assert_eq!(env.persisted_value().as_deref(), Some("MA"));
    }

    #[test]
    fn test_system_environment_reads_and_writes_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = RegionStore::new(dir.path().join("region"));
        let env = SystemEnvironment::with_store(store.clone());

        assert_eq!(env.persisted_region(), None);

        env.persist_region(RegionCode::Ci);
        assert_eq!(env.persisted_region().as_deref(), Some("CI"));
        assert_eq!(store.load(), Some(RegionCode::Ci));
    }

    #[test]
    fn test_fake_environment_builders() {
        let env = FakeEnvironment::default()
            .with_override("US")
            .with_persisted("MA")
            .with_locale("fr-FR");

        assert_eq!(env.override_region().as_deref(), Some("US"));
        assert_eq!(env.persisted_region().as_deref(), Some("MA"));
        assert_eq!(env.locale().as_deref(), Some("fr-FR"));
    }
}
