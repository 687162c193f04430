//! Configuration
//!
//! Validation rules and storage settings. Values are passed explicitly into
//! validators and services instead of living in globals.

use serde::{Deserialize, Serialize};

/// Storage keys shared by every backend.
pub mod keys {
    /// Current user name (JSON string)
    pub const USERNAME: &str = "username";
    /// Dream list (JSON array)
    pub const DREAM_LIST: &str = "dream-list";
    /// Theme list (JSON array of strings)
    pub const THEME_LIST: &str = "theme-list";
    /// "Remember me" preference, always kept in the local backend
    pub const USE_LOCAL_STORAGE: &str = "use-local-storage";
}

/// Value of the dropdown prompt option on the add-dream form
pub const THEME_PROMPT_VALUE: &str = "prompt";

/// Input and authentication rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Maximum length of any text input, in characters
    pub input_max_length: usize,
    /// Minimum username length after sanitisation
    pub username_min_length: usize,
    /// Minimum password length
    pub password_min_length: usize,
    /// Whether passwords must contain at least one digit
    pub password_requires_number: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            input_max_length: 50,
            username_min_length: 1,
            password_min_length: 6,
            password_requires_number: true,
        }
    }
}

/// Which browser store holds user data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageMode {
    /// Survives browser restarts ("remember me")
    Local,
    /// Cleared when the tab closes
    #[default]
    Session,
}

impl StorageMode {
    pub fn from_remember_me(remember: bool) -> Self {
        if remember {
            StorageMode::Local
        } else {
            StorageMode::Session
        }
    }

    pub fn is_local(&self) -> bool {
        matches!(self, StorageMode::Local)
    }
}
