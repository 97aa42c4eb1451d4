//! Key-value storage abstraction
//!
//! Mirrors the browser's `localStorage` contract: string keys, string values,
//! synchronous reads and writes, last writer wins. Backends take `&self` so
//! several components can share one profile the way scripts on one page share
//! `window.localStorage`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::error::StorageResult;

/// Storage key holding the serialized cart
pub const CART_KEY: &str = "brewtopia_cart";

/// Storage key holding the theme preference
pub const THEME_KEY: &str = "theme";

/// A synchronous string key-value store
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Store `value` under `key`, overwriting any prior value
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Delete `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> StorageResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Rc<T> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        (**self).remove(key)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        (**self).remove(key)
    }
}

/// In-memory store. Clones share the same map, like two tabs on one profile.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_set_get_remove() {
        let store = MemoryStore::new();
        assert_eq!(store.get(THEME_KEY).unwrap(), None);

        store.set(THEME_KEY, "dark").unwrap();
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));

        store.set(THEME_KEY, "light").unwrap();
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("light"));
        assert_eq!(store.len(), 1);

        store.remove(THEME_KEY).unwrap();
        store.remove(THEME_KEY).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_clones_share_entries() {
        let tab_a = MemoryStore::new();
        let tab_b = tab_a.clone();

        tab_a.set(CART_KEY, "[]").unwrap();
        tab_b.set(CART_KEY, "[{\"name\":\"Mocha\",\"price\":40.0,\"quantity\":1}]").unwrap();

        // Last writer wins
        assert!(tab_a.get(CART_KEY).unwrap().unwrap().contains("Mocha"));
    }

    #[test]
    fn test_rc_and_ref_forwarding() {
        let store = Rc::new(MemoryStore::new());
        store.set("k", "v").unwrap();

        let by_ref: &MemoryStore = &store;
        assert_eq!(by_ref.get("k").unwrap().as_deref(), Some("v"));
    }
}
