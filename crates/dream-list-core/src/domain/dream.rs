//! Dream Entity
//!
//! A to-do style item with a theme (category) and a completion flag.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// A dream on the user's list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dream {
    /// Unique identifier, assigned as max existing id + 1
    pub id: u64,
    /// Dream text
    pub name: String,
    /// Theme label; a soft reference into the theme list
    pub theme: String,
    /// Completion status
    pub is_checked: bool,
}

impl Dream {
    pub fn new(id: u64, name: String, theme: String) -> Self {
        Self {
            id,
            name,
            theme,
            is_checked: false,
        }
    }

    /// Case-insensitive name comparison used for uniqueness checks
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// Case-insensitive theme comparison
    pub fn has_theme(&self, theme: &str) -> bool {
        self.theme.to_lowercase() == theme.to_lowercase()
    }
}

impl Entity for Dream {
    type Id = u64;

    fn id(&self) -> Self::Id {
        self.id
    }
}
