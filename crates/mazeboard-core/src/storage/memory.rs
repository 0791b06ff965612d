use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::storage::KeyValueStore;

/// In-memory key-value store
///
/// Nothing survives the process. Writes can be switched off with
/// [`MemoryStore::fail_writes`] to simulate a full or unavailable backend.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with one value
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), value.to_string());
        store
    }

    /// Make every subsequent `set` fail (or succeed again with `false`)
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Raw stored value, bypassing the failure switch
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes {
            return Err(Error::PersistenceFailure(format!(
                "storage rejected write to {:?}",
                key
            )));
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_key() {
        let store = MemoryStore::new();
        assert_eq!(store.get("missing").unwrap(), None);
    }

    #[test]
    fn test_set_then_get() {
        let mut store = MemoryStore::new();
        store.set("key", "value").unwrap();
        assert_eq!(store.get("key").unwrap().as_deref(), Some("value"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_failing_writes_keep_previous_value() {
        let mut store = MemoryStore::with_value("key", "old");
        store.fail_writes(true);

        let err = store.set("key", "new").unwrap_err();
        assert!(err.is_persistence_failure());
        assert_eq!(store.raw("key"), Some("old"));

        store.fail_writes(false);
        store.set("key", "new").unwrap();
        assert_eq!(store.raw("key"), Some("new"));
    }
}
