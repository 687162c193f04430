//! Typed JSON slot
//!
//! Uniform save/load/clear over one key. Absent or unparseable values load
//! as `None`; unparseable ones are removed so the next load starts clean.
//! Save and clear failures are returned for the caller to log.

use std::marker::PhantomData;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::StorageError;
use super::traits::KeyValueStore;

pub struct StorageSlot<T> {
    key: &'static str,
    store: Arc<dyn KeyValueStore>,
    _value: PhantomData<fn() -> T>,
}

impl<T: Serialize + DeserializeOwned> StorageSlot<T> {
    pub fn new(key: &'static str, store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            key,
            store,
            _value: PhantomData,
        }
    }

    pub fn save(&self, value: &T) -> Result<(), StorageError> {
        let json = serde_json::to_string(value).map_err(|source| StorageError::Serialize {
            key: self.key.to_string(),
            source,
        })?;

        self.store.set_item(self.key, &json)
    }

    pub fn load(&self) -> Option<T> {
        let raw = match self.store.get_item(self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                log::debug!("No '{}' found in storage.", self.key);
                return None;
            }
            Err(e) => {
                log::error!("Failed to load '{}' from storage: {}", self.key, e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("Corrupted '{}' in storage, removing it: {}", self.key, e);
                if let Err(e) = self.store.remove_item(self.key) {
                    log::error!("Failed to remove corrupted '{}': {}", self.key, e);
                }
                None
            }
        }
    }

    pub fn clear(&self) -> Result<(), StorageError> {
        self.store.remove_item(self.key)
    }
}
