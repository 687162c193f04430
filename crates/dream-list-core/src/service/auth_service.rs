//! Auth Service
//!
//! Locally stored username; the password is validated but never stored.

use crate::config::ValidationConfig;
use crate::domain::{combine, FieldErrors, StorageError, ValidationResult};
use crate::messages;
use crate::repository::StorageService;
use crate::validation::{validate_password, validate_username};

#[derive(Debug, Clone)]
pub struct AuthService {
    storage: StorageService,
    config: ValidationConfig,
}

impl AuthService {
    pub fn new(storage: StorageService, config: ValidationConfig) -> Self {
        Self { storage, config }
    }

    /// Current username, `None` when nobody is logged in
    pub fn load_username(&self) -> Option<String> {
        self.storage.username().load().filter(|name| !name.is_empty())
    }

    pub fn is_logged_in(&self) -> bool {
        self.load_username().is_some()
    }

    pub fn clear_username(&self) -> Result<(), StorageError> {
        self.storage.username().clear()?;
        log::info!("Cleared username from storage.");
        Ok(())
    }

    /// Validate and save a new username
    pub fn update_username(&self, username: &str) -> ValidationResult<String> {
        let username = validate_username(username, &self.config)?;

        if let Err(e) = self.storage.username().save(&username) {
            log::error!("Username not saved: {}", e);
            return Err(FieldErrors::general(messages::USERNAME_SAVE_FAILED));
        }

        log::info!("Username updated successfully.");
        Ok(username)
    }

    /// Validate credentials and store the username on success.
    /// On failure any username saved during the attempt is removed again.
    pub fn create_new_user(&self, username: &str, password: &str) -> ValidationResult<String> {
        let saved = self.update_username(username);
        let password = validate_password(password, &self.config);

        match combine(saved, password) {
            Ok((username, _)) => {
                log::info!("Successfully created new user.");
                Ok(username)
            }
            Err(errors) => {
                if let Err(e) = self.clear_username() {
                    log::warn!("Could not roll back username: {}", e);
                }
                Err(errors)
            }
        }
    }

    /// Clear every stored value, in both backends
    pub fn log_out(&self) -> Result<(), StorageError> {
        self.storage.clear_all()
    }
}
