//! In-memory short-key → URL mapping store.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::utils::keygen::{self, KeyspaceExhausted};

/// Owned store of live URL mappings.
///
/// Wraps the mapping table in an [`RwLock`]: registration takes the
/// write guard across both key generation and insertion, so two
/// concurrent registrations can never be handed the same key, and
/// readers never observe a partially inserted entry. Resolution takes
/// the shared read guard and runs concurrently with other lookups.
///
/// Entries are never mutated or deleted; the store lives as long as the
/// process and is lost on restart.
#[derive(Debug, Default)]
pub struct MappingStore {
    mappings: RwLock<HashMap<String, String>>,
}

impl MappingStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a long URL under a freshly generated short key.
    ///
    /// The caller is expected to have validated `long_url` already; the
    /// store keeps it verbatim, without normalization. The same URL may
    /// be registered any number of times, each call yielding a new key.
    ///
    /// # Errors
    ///
    /// Returns [`KeyspaceExhausted`] when no unused key was found within
    /// the generation retry bound.
    pub fn register(&self, long_url: String) -> Result<String, KeyspaceExhausted> {
        let mut mappings = self.write_guard();

        // Uniqueness check and insert happen under one write guard.
        let key = keygen::generate_unique(|candidate| mappings.contains_key(candidate))?;
        mappings.insert(key.clone(), long_url);

        Ok(key)
    }

    /// Looks up the long URL registered under `short_key`.
    ///
    /// Absence is an ordinary outcome reported as `None`, never a fault.
    pub fn resolve(&self, short_key: &str) -> Option<String> {
        self.read_guard().get(short_key).cloned()
    }

    /// Number of live mappings.
    pub fn len(&self) -> usize {
        self.read_guard().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read_guard().is_empty()
    }

    // A poisoned lock only means another thread panicked mid-request;
    // the map itself is still structurally sound (inserts are single
    // statements), so recover the guard instead of propagating panics.
    fn write_guard(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<String, String>> {
        self.mappings.write().unwrap_or_else(|e| e.into_inner())
    }

    fn read_guard(&self) -> std::sync::RwLockReadGuard<'_, HashMap<String, String>> {
        self.mappings.read().unwrap_or_else(|e| e.into_inner())
    }
}
