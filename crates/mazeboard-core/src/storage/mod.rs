//! Durable key-value storage used to persist the leaderboard.
//!
//! This module provides the storage abstraction and its backends:
//! - `KeyValueStore` - string keys to string values
//! - `FileStore` - one file per key under a data directory
//! - `MemoryStore` - in-process map, for tests and in-memory-only sessions

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::Result;

/// Trait for string-keyed durable storage.
///
/// Both operations are synchronous and bounded; a backend never retries.
pub trait KeyValueStore {
    /// Read the value stored under `key`, or `None` if nothing was stored.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &mut T {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}
