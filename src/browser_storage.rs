//! Browser Storage Backend
//!
//! `KeyValueStore` over `window.localStorage` / `window.sessionStorage`.

use std::sync::Arc;

use dream_list_core::{KeyValueStore, StorageError, StorageMode, StorageService};
use wasm_bindgen::{JsCast, JsValue};

/// Handle to one of the two web storages.
///
/// Only the mode is kept; the `web_sys::Storage` object is looked up on
/// every call so the handle stays `Send + Sync`.
#[derive(Debug, Clone, Copy)]
pub struct BrowserStore {
    mode: StorageMode,
}

impl BrowserStore {
    pub fn local() -> Self {
        Self { mode: StorageMode::Local }
    }

    pub fn session() -> Self {
        Self { mode: StorageMode::Session }
    }

    fn storage(&self) -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        let storage = match self.mode {
            StorageMode::Local => window.local_storage(),
            StorageMode::Session => window.session_storage(),
        };
        storage
            .map_err(|e| StorageError::Unavailable(js_message(&e)))?
            .ok_or_else(|| StorageError::Unavailable(format!("{:?} storage disabled", self.mode)))
    }
}

impl KeyValueStore for BrowserStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| StorageError::Backend(js_message(&e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?.set_item(key, value).map_err(|e| {
            if is_quota_error(&e) {
                StorageError::QuotaExceeded { key: key.to_string() }
            } else {
                StorageError::Backend(js_message(&e))
            }
        })
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Backend(js_message(&e)))
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.storage()?
            .clear()
            .map_err(|e| StorageError::Backend(js_message(&e)))
    }
}

fn is_quota_error(error: &JsValue) -> bool {
    error
        .dyn_ref::<web_sys::DomException>()
        .map(|e| e.name() == "QuotaExceededError")
        .unwrap_or(false)
}

fn js_message(error: &JsValue) -> String {
    match error.dyn_ref::<web_sys::DomException>() {
        Some(e) => e.message(),
        None => format!("{:?}", error),
    }
}

/// Storage service over the real browser storages, in the remembered mode
pub fn browser_storage_service() -> StorageService {
    StorageService::from_preference(
        Arc::new(BrowserStore::local()),
        Arc::new(BrowserStore::session()),
    )
}
