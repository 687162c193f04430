//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Storage stays the
//! source of truth; the store mirrors it for rendering.

use dream_list_core::{AuthService, Dream, DreamService, ThemeService};
use leptos::prelude::*;
use reactive_stores::Store;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Logged in user, None when logged out
    pub username: Option<String>,
    /// All dreams of the user
    pub dreams: Vec<Dream>,
    /// All theme labels
    pub themes: Vec<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Reload From Storage
// ========================

pub fn reload_username(store: &AppStore, auth: &AuthService) {
    *store.username().write() = auth.load_username();
}

pub fn reload_dreams(store: &AppStore, dreams: &DreamService) {
    *store.dreams().write() = dreams.load_dreams();
}

pub fn reload_themes(store: &AppStore, themes: &ThemeService) {
    *store.themes().write() = themes.load_themes();
}

/// Drop everything after logout
pub fn store_clear(store: &AppStore) {
    *store.username().write() = None;
    store.dreams().write().clear();
    store.themes().write().clear();
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_username(store: &AppStore, username: String) {
    *store.username().write() = Some(username);
}

pub fn store_add_dream(store: &AppStore, dream: Dream) {
    store.dreams().write().push(dream);
}

/// Update a dream in the store by ID
pub fn store_update_dream(store: &AppStore, updated: Dream) {
    if let Some(dream) = store.dreams().write().iter_mut().find(|d| d.id == updated.id) {
        *dream = updated;
    }
}

/// Remove a dream from the store by ID
pub fn store_remove_dream(store: &AppStore, dream_id: u64) {
    store.dreams().write().retain(|d| d.id != dream_id);
}

pub fn store_add_theme(store: &AppStore, theme: String) {
    store.themes().write().push(theme);
}

pub fn store_remove_theme(store: &AppStore, theme: &str) {
    store.themes().write().retain(|t| t != theme);
}
