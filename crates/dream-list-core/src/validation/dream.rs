//! Dream rules

use crate::config::ValidationConfig;
use crate::domain::{combine, find_theme, Dream, Field, FieldErrors, ValidationResult};
use crate::messages;
use crate::sanitise::sanitise_with;

use super::record_sanitisation;
use super::theme::validate_theme_choice;

/// Clean input for a dream that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDream {
    pub name: String,
    pub theme: String,
}

/// Form-level checks: name sanitisation and a real theme selection.
pub fn validate_dream_form(
    name: &str,
    theme: &str,
    config: &ValidationConfig,
) -> ValidationResult<NewDream> {
    let mut errors = FieldErrors::new();
    let sanitisation = sanitise_with(name, config);
    record_sanitisation(&mut errors, Field::Dream, &sanitisation);
    let name = errors.into_result(sanitisation.sanitised_input);

    let (name, theme) = combine(name, validate_theme_choice(theme, config))?;
    Ok(NewDream { name, theme })
}

/// Form checks plus uniqueness against `dreams` and existence in `themes`.
/// On success the theme carries the stored label's spelling.
pub fn validate_new_dream(
    name: &str,
    theme: &str,
    dreams: &[Dream],
    themes: &[String],
    config: &ValidationConfig,
) -> ValidationResult<NewDream> {
    let form = validate_dream_form(name, theme, config)?;
    let mut errors = FieldErrors::new();

    if dreams.iter().any(|dream| dream.has_name(&form.name)) {
        errors.push(Field::Dream, messages::DREAM_EXISTS);
    }

    let theme = match find_theme(themes, &form.theme) {
        Some(stored) => stored.to_string(),
        None => {
            errors.push(Field::Theme, messages::THEME_NOT_FOUND);
            form.theme
        }
    };

    errors.into_result(NewDream {
        name: form.name,
        theme,
    })
}
