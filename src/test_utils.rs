//! Test utilities and helpers.
//!
//! Provides common test infrastructure used across multiple test modules.
//! This module is only compiled when running tests.

#![cfg(test)]

use crate::config::Config;
use crate::store::UrlStore;

/// Create a default test configuration.
pub fn test_config() -> Config {
    Config::default()
}

/// Create a fresh, empty store for testing.
pub fn test_store() -> UrlStore {
    UrlStore::new()
}

/// Create a store pre-populated with the demo mapping.
pub fn seeded_test_store() -> UrlStore {
    let store = UrlStore::new();
    store.seed_demo_entry();
    store
}
