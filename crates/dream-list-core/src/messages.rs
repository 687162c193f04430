//! User-facing messages
//!
//! Swedish UI texts. Sanitiser issues are rendered by `SanitiseIssue` instead.

use crate::config::ValidationConfig;

/// Button text states during a form submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonTexts {
    pub original: &'static str,
    pub loading: &'static str,
    pub success: &'static str,
}

pub const LOGIN_TEXTS: ButtonTexts = ButtonTexts {
    original: "Logga in",
    loading: "Loggar in...",
    success: "Inloggad!",
};

pub const UPDATE_TEXTS: ButtonTexts = ButtonTexts {
    original: "Spara",
    loading: "Sparar...",
    success: "Sparat!",
};

pub const ADD_DREAM_TEXTS: ButtonTexts = ButtonTexts {
    original: "Lägg till",
    loading: "Lägger till din dröm...",
    success: "Dröm tillagd!",
};

pub const ADD_THEME_TEXTS: ButtonTexts = ButtonTexts {
    original: "Lägg till",
    loading: "Sparar...",
    success: "Tillagd!",
};

// ========================
// Auth
// ========================

pub const CONTAINS_SPACES: &str = "Fältet får inte innehålla mellanslag.";
pub const PASSWORD_REQUIRES_NUMBER: &str = "Lösenordet måste innehålla en siffra.";
pub const LOGOUT_FAILED: &str = "Problem vid utloggning, försök igen.";
pub const USERNAME_SAVE_FAILED: &str = "Användarnamnet kunde inte sparas.";

pub fn username_too_short(config: &ValidationConfig) -> String {
    format!(
        "Användarnamnet måste vara minst {} tecken långt.",
        config.username_min_length
    )
}

pub fn password_too_short(config: &ValidationConfig) -> String {
    format!(
        "Lösenordet måste vara minst {} tecken långt.",
        config.password_min_length
    )
}

// ========================
// Dreams
// ========================

pub const DREAM_EXISTS: &str = "Drömmen finns redan.";
pub const DREAM_SAVE_FAILED: &str = "Drömmen kunde inte sparas.";
pub const NO_DREAMS_FOUND: &str = "Inga drömmar hittades, lägg till en dröm för att komma igång";
pub const DREAM_NOT_DELETED: &str = "Drömmen kunde inte tas bort.";
pub const DREAM_NOT_TOGGLED: &str = "Drömmen kunde inte (av)bockas.";

pub fn dream_deleted(id: u64) -> String {
    format!("Dröm {} borttagen!", id)
}

pub fn dream_toggled(id: u64, is_checked: bool) -> String {
    let state = if is_checked { "slutförd" } else { "inte slutförd" };
    format!("Dröm {} markerad som {}!", id, state)
}

// ========================
// Themes
// ========================

pub const THEME_PROMPT: &str = "-- Välj ett tema --";
pub const SELECT_THEME: &str = "Välj ett tema.";
pub const THEME_EXISTS: &str = "Temat finns redan.";
pub const THEME_NOT_FOUND: &str = "Temat finns inte.";
pub const THEME_SAVE_FAILED: &str = "Temat kunde inte sparas.";
pub const NO_THEMES_FOUND: &str =
    "Inga teman hittades, lägg till ett tema i inställningarna för att komma igång!";
pub const THEME_NOT_DELETED: &str = "Temat kunde inte tas bort.";
