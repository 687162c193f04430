//! Storage Service
//!
//! Holds both browser backends and the explicitly chosen `StorageMode`.
//! Data slots resolve to the selected backend; the mode preference itself
//! always lives in the local backend.

use std::fmt;
use std::sync::Arc;

use crate::config::{keys, StorageMode};
use crate::domain::{Dream, StorageError};
use super::memory::MemoryStore;
use super::slot::StorageSlot;
use super::traits::KeyValueStore;

#[derive(Clone)]
pub struct StorageService {
    local: Arc<dyn KeyValueStore>,
    session: Arc<dyn KeyValueStore>,
    mode: StorageMode,
}

impl StorageService {
    pub fn new(
        local: Arc<dyn KeyValueStore>,
        session: Arc<dyn KeyValueStore>,
        mode: StorageMode,
    ) -> Self {
        Self { local, session, mode }
    }

    /// Build with the mode saved in the local backend, session if none
    pub fn from_preference(local: Arc<dyn KeyValueStore>, session: Arc<dyn KeyValueStore>) -> Self {
        let remember = StorageSlot::<bool>::new(keys::USE_LOCAL_STORAGE, local.clone())
            .load()
            .unwrap_or(false);
        Self::new(local, session, StorageMode::from_remember_me(remember))
    }

    /// Two fresh in-memory backends
    pub fn in_memory(mode: StorageMode) -> Self {
        Self::new(Arc::new(MemoryStore::new()), Arc::new(MemoryStore::new()), mode)
    }

    pub fn mode(&self) -> StorageMode {
        self.mode
    }

    /// Same backends, different mode
    pub fn with_mode(&self, mode: StorageMode) -> Self {
        Self {
            local: self.local.clone(),
            session: self.session.clone(),
            mode,
        }
    }

    pub fn save_mode_preference(&self) -> Result<(), StorageError> {
        self.mode_preference().save(&self.mode.is_local())?;
        log::debug!("Storage mode set to {:?}", self.mode);
        Ok(())
    }

    fn data_store(&self) -> Arc<dyn KeyValueStore> {
        match self.mode {
            StorageMode::Local => self.local.clone(),
            StorageMode::Session => self.session.clone(),
        }
    }

    fn mode_preference(&self) -> StorageSlot<bool> {
        StorageSlot::new(keys::USE_LOCAL_STORAGE, self.local.clone())
    }

    pub fn username(&self) -> StorageSlot<String> {
        StorageSlot::new(keys::USERNAME, self.data_store())
    }

    pub fn dreams(&self) -> StorageSlot<Vec<Dream>> {
        StorageSlot::new(keys::DREAM_LIST, self.data_store())
    }

    pub fn themes(&self) -> StorageSlot<Vec<String>> {
        StorageSlot::new(keys::THEME_LIST, self.data_store())
    }

    /// Wipe both backends, including the mode preference
    pub fn clear_all(&self) -> Result<(), StorageError> {
        self.local.clear()?;
        self.session.clear()?;
        log::info!("Cleared all storage data");
        Ok(())
    }
}

impl fmt::Debug for StorageService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorageService")
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}
