//! In-memory mapping store for short-code lookups.
//!
//! Replaces a database layer: all mappings live in a concurrent map for the
//! lifetime of the process and are lost on termination. `DashMap`'s sharded
//! locks make the existence-check and insert a single atomic operation, so
//! two concurrent shorten requests can never claim the same code.

use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::constants::{DEMO_SHORT_CODE, DEMO_TARGET_URL};

/// Shared short-code to target-URL map.
///
/// Cloning is cheap and yields a handle to the same underlying map, which is
/// how the store is shared across actix worker threads via `web::Data`.
#[derive(Debug, Clone)]
pub struct UrlStore {
    inner: Arc<DashMap<String, String>>,
}

impl UrlStore {
    /// Create a new, empty store
    pub fn new() -> Self {
        Self {
            inner: Arc::new(DashMap::new()),
        }
    }

    /// Insert a mapping only if the short code is not already taken.
    ///
    /// Returns `true` when the mapping was stored, `false` when the code was
    /// already present (the existing mapping is left untouched). The check and
    /// insert happen under one shard lock, so there is no gap for a concurrent
    /// request to slip into.
    pub fn insert_if_absent(&self, short_code: &str, target_url: &str) -> bool {
        match self.inner.entry(short_code.to_string()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(target_url.to_string());
                true
            }
        }
    }

    /// Look up the target URL for a short code
    pub fn get(&self, short_code: &str) -> Option<String> {
        self.inner.get(short_code).map(|entry| entry.value().clone())
    }

    /// Check whether a short code is already in use
    pub fn contains(&self, short_code: &str) -> bool {
        self.inner.contains_key(short_code)
    }

    /// Number of stored mappings
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether the store holds no mappings
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Seed the demo mapping (`abc123` -> `https://example.com`)
    pub fn seed_demo_entry(&self) {
        self.insert_if_absent(DEMO_SHORT_CODE, DEMO_TARGET_URL);
    }
}

impl Default for UrlStore {
    fn default() -> Self {
        Self::new()
    }
}
