//! Dream Service
//!
//! Create, toggle and delete dreams in the stored dream list.

use crate::config::ValidationConfig;
use crate::domain::{next_id, DomainError, DomainResult, Dream, FieldErrors, StorageError, ValidationResult};
use crate::messages;
use crate::repository::StorageService;
use crate::validation::validate_new_dream;

#[derive(Debug, Clone)]
pub struct DreamService {
    storage: StorageService,
    config: ValidationConfig,
}

impl DreamService {
    pub fn new(storage: StorageService, config: ValidationConfig) -> Self {
        Self { storage, config }
    }

    /// All dreams, empty when none are stored
    pub fn load_dreams(&self) -> Vec<Dream> {
        self.storage.dreams().load().unwrap_or_default()
    }

    pub fn clear_dreams(&self) -> Result<(), StorageError> {
        self.storage.dreams().clear()?;
        log::info!("Cleared all dreams from storage.");
        Ok(())
    }

    /// Whether a dream with this name exists, ignoring case
    pub fn dream_exists(&self, name: &str) -> bool {
        self.load_dreams().iter().any(|dream| dream.has_name(name))
    }

    /// Validate and append a new dream with the next free id
    pub fn create_dream(&self, name: &str, theme: &str, is_checked: bool) -> ValidationResult<Dream> {
        let mut dreams = self.load_dreams();
        let themes = self.storage.themes().load().unwrap_or_default();

        let new_dream = validate_new_dream(name, theme, &dreams, &themes, &self.config)?;

        let Some(id) = next_id(&dreams) else {
            log::error!("No dream id left after {} dreams.", dreams.len());
            return Err(FieldErrors::general(messages::DREAM_SAVE_FAILED));
        };
        let dream = Dream {
            id,
            name: new_dream.name,
            theme: new_dream.theme,
            is_checked,
        };
        dreams.push(dream.clone());

        if let Err(e) = self.storage.dreams().save(&dreams) {
            log::error!("Dream not saved: {}", e);
            return Err(FieldErrors::general(messages::DREAM_SAVE_FAILED));
        }

        log::info!("Added dream with id {}", dream.id);
        Ok(dream)
    }

    /// Remove a dream; an unknown id leaves storage untouched
    pub fn delete_dream(&self, id: u64) -> DomainResult<()> {
        let mut dreams = self.load_dreams();
        let Some(index) = dreams.iter().position(|dream| dream.id == id) else {
            log::warn!("Failed to find dream id {}.", id);
            return Err(DomainError::NotFound(format!("dream {}", id)));
        };

        dreams.remove(index);
        self.storage.dreams().save(&dreams)?;

        log::info!("Dream id {} deleted successfully.", id);
        Ok(())
    }

    pub fn update_dream_checked(&self, id: u64, is_checked: bool) -> DomainResult<Dream> {
        let mut dreams = self.load_dreams();
        let Some(dream) = dreams.iter_mut().find(|dream| dream.id == id) else {
            log::warn!("Failed to find dream id {}.", id);
            return Err(DomainError::NotFound(format!("dream {}", id)));
        };

        dream.is_checked = is_checked;
        let updated = dream.clone();
        self.storage.dreams().save(&dreams)?;

        log::info!("Updated dream id {} to is_checked: {}.", id, is_checked);
        Ok(updated)
    }
}
