//! Key-value storage capability
//!
//! The widget persists small JSON snapshots (playback state, theme
//! preference) into a durable per-origin key-value store. In the browser
//! host that store is `localStorage`; tests and non-browser hosts use
//! [`MemoryStore`].
//!
//! Persistence is best-effort everywhere: callers treat a failed write as
//! a non-event, so the trait reports errors but nothing upstream depends
//! on them succeeding.

use crate::error::Result;
use std::collections::HashMap;

/// Durable per-origin key-value store
///
/// Access is read/overwrite only and single-threaded; there is no
/// concurrent contention to design for.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, overwriting any previous value
    ///
    /// Errors (store disabled, quota exceeded) are reported but callers
    /// ignore them - persistence is never fatal.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove the value stored under `key`
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// In-memory store for tests and non-browser hosts
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}
