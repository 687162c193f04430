//! Application Context
//!
//! Shared state provided via Leptos Context API: current page, storage
//! service and validation rules.

use dream_list_core::{
    AuthService, DreamService, StorageError, StorageMode, StorageService, ThemeService,
    ValidationConfig,
};
use leptos::prelude::*;

/// Pages of the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppPage {
    Login,
    Dashboard,
    AddDream,
    Settings,
}

impl AppPage {
    /// Pages that need a logged in user
    pub fn is_protected(&self) -> bool {
        !matches!(self, AppPage::Login)
    }
}

/// Page actually shown for a requested page.
///
/// Logged out users always land on Login, logged in users never see it.
pub fn resolve_page(requested: AppPage, logged_in: bool) -> AppPage {
    match (requested, logged_in) {
        (page, false) if page.is_protected() => AppPage::Login,
        (AppPage::Login, true) => AppPage::Dashboard,
        (page, _) => page,
    }
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Requested page - read
    pub page: ReadSignal<AppPage>,
    /// Requested page - write
    set_page: WriteSignal<AppPage>,
    /// Storage with the currently selected mode
    storage: RwSignal<StorageService>,
    config: ValidationConfig,
}

impl AppContext {
    pub fn new(storage: StorageService, config: ValidationConfig) -> Self {
        let (page, set_page) = signal(AppPage::Login);
        Self {
            page,
            set_page,
            storage: RwSignal::new(storage),
            config,
        }
    }

    pub fn navigate(&self, page: AppPage) {
        log::debug!("Navigating to {:?}", page);
        self.set_page.set(page);
    }

    /// Current storage mode (tracked)
    pub fn storage_mode(&self) -> StorageMode {
        self.storage.with(|s| s.mode())
    }

    /// Switch backends and remember the choice
    pub fn set_storage_mode(&self, mode: StorageMode) -> Result<(), StorageError> {
        let storage = self.storage.with_untracked(|s| s.with_mode(mode));
        storage.save_mode_preference()?;
        self.storage.set(storage);
        Ok(())
    }

    /// Forget the remembered mode after everything was cleared
    pub fn reset_storage_mode(&self) {
        self.storage.update(|s| *s = s.with_mode(StorageMode::default()));
    }

    fn current_storage(&self) -> StorageService {
        self.storage.get_untracked()
    }

    pub fn auth(&self) -> AuthService {
        AuthService::new(self.current_storage(), self.config)
    }

    pub fn dreams(&self) -> DreamService {
        DreamService::new(self.current_storage(), self.config)
    }

    pub fn themes(&self) -> ThemeService {
        ThemeService::new(self.current_storage(), self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logged_out_user_is_sent_to_login() {
        for page in [AppPage::Dashboard, AppPage::AddDream, AppPage::Settings, AppPage::Login] {
            assert_eq!(resolve_page(page, false), AppPage::Login);
        }
    }

    #[test]
    fn test_logged_in_user_skips_login() {
        assert_eq!(resolve_page(AppPage::Login, true), AppPage::Dashboard);
        assert_eq!(resolve_page(AppPage::Settings, true), AppPage::Settings);
        assert_eq!(resolve_page(AppPage::AddDream, true), AppPage::AddDream);
    }
}
