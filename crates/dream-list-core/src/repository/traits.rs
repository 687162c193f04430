//! Repository Layer - Core Traits
//!
//! Defines the abstract interface of a string key-value store.
//! Implementations can use browser storage, in-memory maps, etc.

use crate::domain::StorageError;

/// Raw string storage, shaped like the Web Storage API
///
/// Methods take `&self`; implementations use interior mutability.
pub trait KeyValueStore: Send + Sync {
    /// Read a value, `None` when the key is absent
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a value, replacing any previous one
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a key; removing an absent key is not an error
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;

    /// Remove every key
    fn clear(&self) -> Result<(), StorageError>;
}
