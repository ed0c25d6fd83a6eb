//! Key-value persistence collaborator.
//!
//! The cart survives page loads by round-tripping through whatever
//! key-value store the host provides (browser local storage, an in-memory
//! map in tests). The interface is deliberately minimal and infallible on
//! the engine side: a host whose store can fail is expected to swallow the
//! failure the way `localStorage` does, and the engines recover from
//! whatever comes back on the next restore.

use std::collections::HashMap;

/// A key-value persistence backend.
pub trait Storage {
    /// Fetch the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory [`Storage`] implementation backed by a `HashMap`.
///
/// Used by tests and native embedders that don't need persistence across
/// process restarts.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a single entry.
    ///
    /// Handy for tests that simulate a previous session's persisted state.
    #[must_use]
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut storage = Self::new();
        storage.entries.insert(key.into(), value.into());
        storage
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
    }
}
