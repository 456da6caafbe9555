//! Key-value persistence.
//!
//! The app persists everything (accounts, profiles, the current-user
//! marker, the theme preference) as string keys in browser local
//! storage. `KeyValueStore` is the seam that keeps the session layer
//! testable on the host target, where no browser is available.

use std::cell::RefCell;
use std::collections::HashMap;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("failed to write key {0:?}")]
    WriteFailed(String),
}

/// String-keyed storage. Reads are infallible by design: a missing
/// backend reads the same as a missing key.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str);
}

/// Browser local storage. A zero-sized handle; every call goes through
/// `window().local_storage()` so a detached window never panics.
#[derive(Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn backend() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::backend().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = Self::backend().ok_or(StoreError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| StoreError::WriteFailed(key.to_string()))
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::backend() {
            let _ = storage.remove_item(key);
        }
    }
}

/// In-memory store used by host-side tests.
#[derive(Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys. Lets tests assert that a failed
    /// operation performed no writes.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips_values() {
        let store = MemoryStore::new();
        assert!(store.is_empty());

        store.set("theme", "dark").unwrap();
        assert_eq!(store.get("theme").as_deref(), Some("dark"));

        store.set("theme", "light").unwrap();
        assert_eq!(store.get("theme").as_deref(), Some("light"));
        assert_eq!(store.len(), 1);

        store.remove("theme");
        assert_eq!(store.get("theme"), None);
    }

    #[test]
    fn removing_a_missing_key_is_a_no_op() {
        let store = MemoryStore::new();
        store.remove("nope");
        assert!(store.is_empty());
    }
}
