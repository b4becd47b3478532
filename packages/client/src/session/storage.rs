//! Session storage
//!
//! Key/value storage for session-scoped credentials. The default
//! in-memory implementation lives for the process; the CLI plugs in a
//! file-backed implementation so a session survives between commands.

use parking_lot::RwLock;
use std::collections::HashMap;

/// Session-scoped string storage.
pub trait SessionStorage: Send + Sync {
    /// Read a value. `None` when missing or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value.
    fn set(&self, key: &str, value: &str);

    /// Remove a value if present.
    fn remove(&self, key: &str);
}

/// Process-lifetime storage backed by a lock-guarded map.
#[derive(Default)]
pub struct MemoryStorage {
    items: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.items.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.items.write().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.items.write().remove(key);
    }
}
