//! Theme rules

use crate::config::{ValidationConfig, THEME_PROMPT_VALUE};
use crate::domain::{theme_exists, Field, FieldErrors, ValidationResult};
use crate::messages;
use crate::sanitise::sanitise_with;

use super::record_sanitisation;

/// Theme picked from the add-dream dropdown. The prompt option is rejected.
pub fn validate_theme_choice(theme: &str, config: &ValidationConfig) -> ValidationResult<String> {
    let mut errors = FieldErrors::new();

    let sanitisation = sanitise_with(theme, config);
    record_sanitisation(&mut errors, Field::Theme, &sanitisation);
    let clean = sanitisation.sanitised_input;

    if clean == THEME_PROMPT_VALUE {
        errors.set(Field::Theme, messages::SELECT_THEME);
        errors.clear_suggestion(Field::Theme);
    }

    errors.into_result(clean)
}

/// New theme from the settings form: sanitised and unique ignoring case.
pub fn validate_new_theme(
    theme: &str,
    existing: &[String],
    config: &ValidationConfig,
) -> ValidationResult<String> {
    let mut errors = FieldErrors::new();

    let sanitisation = sanitise_with(theme, config);
    record_sanitisation(&mut errors, Field::Theme, &sanitisation);
    let clean = sanitisation.sanitised_input;

    if theme_exists(existing, &clean) {
        errors.push(Field::Theme, messages::THEME_EXISTS);
        errors.clear_suggestion(Field::Theme);
    }

    errors.into_result(clean)
}
