//! # Region Store
//!
//! File-backed persistence for the visitor's region choice.
//!
//! ## On-Disk Format
//! One plain-text file holding the uppercase two-letter region code and
//! nothing else ("MA"). Deliberately not a structured config document: the
//! value is a single token, and keeping it bare means any frontend (web
//! localStorage, this file, a future mobile keychain) stores the identical
//! payload.
//!
//! ## Default Location
//! - **Linux**: `~/.config/hakawa/region`
//! - **macOS**: `~/Library/Application Support/com.hakawa.app/region`
//! - **Windows**: `%APPDATA%\hakawa\app\config\region`
//!
//! ## Failure Semantics
//! Reads degrade to "no persisted value" (logged, never propagated).
//! Writes return a typed error, but the session layer swallows it - losing
//! a persisted choice costs one re-detection, never a broken pricing page.

use std::path::{Path, PathBuf};

use hakawa_pricing::RegionCode;
use thiserror::Error;
use tracing::{debug, warn};

/// File name of the persisted region code.
const REGION_FILE: &str = "region";

// =============================================================================
// Store Error
// =============================================================================

/// Failures while persisting the region choice.
///
/// Only `save` surfaces these; `load` always degrades to `None`.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No config directory could be determined for this platform/user.
    #[error("No config directory available for the region store")]
    NoConfigDir,

    /// Filesystem failure while writing the region file.
    #[error("Failed to write region file: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Region Store
// =============================================================================

/// Reads and writes the persisted region choice.
#[derive(Debug, Clone)]
pub struct RegionStore {
    /// `None` when no config directory exists (e.g. stripped-down
    /// containers); the store then behaves as permanently empty.
    path: Option<PathBuf>,
}

impl RegionStore {
    /// Creates a store backed by a specific file path.
    pub fn new(path: PathBuf) -> Self {
        RegionStore { path: Some(path) }
    }

    /// Creates a store at the platform config location.
    pub fn from_default_location() -> Self {
        let path = directories::ProjectDirs::from("com", "hakawa", "app")
            .map(|dirs| dirs.config_dir().join(REGION_FILE));
        if path.is_none() {
            debug!("No platform config directory; region choices will not persist");
        }
        RegionStore { path }
    }

    /// The backing file path, if one exists.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Loads the persisted region code, if a valid one is stored.
    ///
    /// Missing file, unreadable file, and stale/garbage contents all return
    /// `None` - the resolution chain then falls through to its next source.
    pub fn load(&self) -> Option<RegionCode> {
        let path = self.path.as_ref()?;

        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                debug!(?path, "No persisted region file");
                return None;
            }
            Err(error) => {
                warn!(?path, %error, "Failed to read persisted region; ignoring");
                return None;
            }
        };

        match RegionCode::parse(&contents) {
            Some(code) => {
                debug!(%code, "Loaded persisted region");
                Some(code)
            }
            None => {
                warn!(
                    ?path,
                    contents = contents.trim(),
                    "Persisted region file holds an unknown code; ignoring"
                );
                None
            }
        }
    }

    /// Persists a validated region code for future sessions.
    pub fn save(&self, code: RegionCode) -> Result<(), StoreError> {
        let path = self.path.as_ref().ok_or(StoreError::NoConfigDir)?;

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, code.as_str())?;
        debug!(%code, ?path, "Persisted region choice");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, RegionStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = RegionStore::new(dir.path().join("hakawa").join(REGION_FILE));
        (dir, store)
    }

    #[test]
    fn test_save_then_load() {
        let (_dir, store) = temp_store();

        store.save(RegionCode::Ma).unwrap();
        assert_eq!(store.load(), Some(RegionCode::Ma));

        // Overwrite
        store.save(RegionCode::Us).unwrap();
        assert_eq!(store.load(), Some(RegionCode::Us));
    }

    #[test]
    fn test_save_writes_bare_uppercase_code() {
        let (_dir, store) = temp_store();
        store.save(RegionCode::Sn).unwrap();

        let contents = std::fs::read_to_string(store.path().unwrap()).unwrap();
        assert_eq!(contents, "SN");
    }

    #[test]
    fn test_missing_file_loads_as_none() {
        let (_dir, store) = temp_store();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_garbage_contents_load_as_none() {
        let (_dir, store) = temp_store();
        let path = store.path().unwrap();
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, "not-a-region").unwrap();

        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_lowercase_legacy_contents_still_parse() {
        // Older builds wrote whatever the UI sent; trim + case-fold on read
        let (_dir, store) = temp_store();
        let path = store.path().unwrap();
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, "ma\n").unwrap();

        assert_eq!(store.load(), Some(RegionCode::Ma));
    }

    #[test]
    fn test_pathless_store_is_permanently_empty() {
        let store = RegionStore { path: None };
        assert_eq!(store.load(), None);
        assert!(matches!(
            store.save(RegionCode::Fr),
            Err(StoreError::NoConfigDir)
        ));
    }
}
