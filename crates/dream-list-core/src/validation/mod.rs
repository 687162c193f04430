//! Validation Layer
//!
//! Domain validators composing the sanitiser with business rules.
//! Each returns `ValidationResult<T>` carrying the cleaned value on success.

mod user;
mod theme;
mod dream;

pub use user::{validate_password, validate_username};
pub use theme::{validate_new_theme, validate_theme_choice};
pub use dream::{validate_dream_form, validate_new_dream, NewDream};

use crate::domain::{Field, FieldErrors};
use crate::sanitise::SanitisationResult;

/// Record sanitiser issues under `field`, suggesting the cleaned text
fn record_sanitisation(errors: &mut FieldErrors, field: Field, sanitisation: &SanitisationResult) {
    if !sanitisation.is_safe {
        errors.push(field, sanitisation.issue_text());
        errors.suggest(field, sanitisation.sanitised_input.clone());
    }
}
