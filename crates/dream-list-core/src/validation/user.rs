//! Username and password rules

use crate::config::ValidationConfig;
use crate::domain::{Field, FieldErrors, ValidationResult};
use crate::messages;
use crate::sanitise::sanitise_with;

use super::record_sanitisation;

/// Sanitise and validate a username. Yields the clean username.
pub fn validate_username(username: &str, config: &ValidationConfig) -> ValidationResult<String> {
    let mut errors = FieldErrors::new();

    let sanitisation = sanitise_with(username, config);
    record_sanitisation(&mut errors, Field::Username, &sanitisation);
    let clean = sanitisation.sanitised_input;

    if clean.chars().count() < config.username_min_length {
        errors.push(Field::Username, messages::username_too_short(config));
    }

    if clean.chars().any(char::is_whitespace) {
        errors.push(Field::Username, messages::CONTAINS_SPACES);
        let underscored: String = clean
            .chars()
            .map(|c| if c.is_whitespace() { '_' } else { c })
            .collect();
        errors.suggest(Field::Username, underscored);
    }

    errors.into_result(clean)
}

/// Validate a password. Passwords are never echoed back as suggestions.
pub fn validate_password(password: &str, config: &ValidationConfig) -> ValidationResult<String> {
    let sanitisation = sanitise_with(password, config);
    if !sanitisation.is_safe {
        return Err(FieldErrors::single(Field::Password, sanitisation.issue_text()));
    }

    let mut errors = FieldErrors::new();

    if password.chars().count() < config.password_min_length {
        errors.push(Field::Password, messages::password_too_short(config));
    }
    if config.password_requires_number && !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push(Field::Password, messages::PASSWORD_REQUIRES_NUMBER);
    }
    if password.chars().any(char::is_whitespace) {
        errors.push(Field::Password, messages::CONTAINS_SPACES);
    }

    errors.into_result(password.to_string())
}
