//! Theme Service
//!
//! Manage the stored theme list. Deleting a theme does not touch dreams that
//! still reference it; such dreams keep their label.

use crate::config::ValidationConfig;
use crate::domain::{theme_exists, DomainError, DomainResult, FieldErrors, StorageError, ValidationResult};
use crate::messages;
use crate::repository::StorageService;
use crate::validation::validate_new_theme;

use super::seed::{DEFAULT_THEMES, FALLBACK_THEME};

#[derive(Debug, Clone)]
pub struct ThemeService {
    storage: StorageService,
    config: ValidationConfig,
}

impl ThemeService {
    pub fn new(storage: StorageService, config: ValidationConfig) -> Self {
        Self { storage, config }
    }

    /// All themes, empty when none are stored
    pub fn load_themes(&self) -> Vec<String> {
        self.storage.themes().load().unwrap_or_default()
    }

    pub fn clear_themes(&self) -> Result<(), StorageError> {
        self.storage.themes().clear()?;
        log::info!("Cleared all themes from storage.");
        Ok(())
    }

    pub fn theme_exists(&self, theme: &str) -> bool {
        theme_exists(&self.load_themes(), theme)
    }

    /// Validate and append a new theme
    pub fn create_theme(&self, theme: &str) -> ValidationResult<String> {
        let mut themes = self.load_themes();
        let theme = validate_new_theme(theme, &themes, &self.config)?;

        themes.push(theme.clone());
        if let Err(e) = self.storage.themes().save(&themes) {
            log::error!("Theme not saved: {}", e);
            return Err(FieldErrors::general(messages::THEME_SAVE_FAILED));
        }

        log::info!("Added theme '{}'.", theme);
        Ok(theme)
    }

    /// Remove a theme by its exact stored label
    pub fn delete_theme(&self, theme: &str) -> DomainResult<()> {
        let mut themes = self.load_themes();
        let Some(index) = themes.iter().position(|t| t == theme) else {
            log::warn!("Failed to find theme '{}'.", theme);
            return Err(DomainError::NotFound(format!("theme '{}'", theme)));
        };

        themes.remove(index);
        self.storage.themes().save(&themes)?;

        let orphaned = self.dreams_with_theme(theme);
        if orphaned > 0 {
            log::warn!(
                "Theme '{}' deleted while {} dream(s) still reference it.",
                theme,
                orphaned
            );
        }

        log::info!("Theme '{}' deleted successfully.", theme);
        Ok(())
    }

    /// Number of stored dreams labelled with `theme`, ignoring case
    pub fn dreams_with_theme(&self, theme: &str) -> usize {
        self.storage
            .dreams()
            .load()
            .unwrap_or_default()
            .iter()
            .filter(|dream| dream.has_theme(theme))
            .count()
    }

    /// Replace the theme list with the defaults, or the single fallback
    /// theme if the defaults cannot be written.
    pub fn save_default_themes(&self) -> Result<(), StorageError> {
        self.clear_themes()?;

        let defaults: Vec<String> = DEFAULT_THEMES.iter().map(|t| t.to_string()).collect();
        if let Err(e) = self.storage.themes().save(&defaults) {
            log::warn!("Failed to save default themes, trying fallback... ({})", e);
            self.storage.themes().save(&vec![FALLBACK_THEME.to_string()])?;
        }

        log::info!("Saved default themes.");
        Ok(())
    }
}
