//! Validation outcome
//!
//! Every validator and create operation returns `ValidationResult<T>`:
//! `Ok(data)` when valid, otherwise per-field messages plus optional
//! per-field suggested corrections.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Result of validating (and possibly persisting) form input
pub type ValidationResult<T> = Result<T, FieldErrors>;

/// Form field an error or suggestion belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Username,
    Password,
    Dream,
    Theme,
    /// Not tied to an input, e.g. storage failures
    General,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Username => "username",
            Field::Password => "password",
            Field::Dream => "dream",
            Field::Theme => "theme",
            Field::General => "general",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field-level messages and suggested corrections
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors {
    errors: BTreeMap<Field, String>,
    suggestions: BTreeMap<Field, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: Field, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.push(field, message);
        errors
    }

    /// Generic failure not attached to any input
    pub fn general(message: impl Into<String>) -> Self {
        Self::single(Field::General, message)
    }

    /// Add a message, appending on a new line if the field already has one
    pub fn push(&mut self, field: Field, message: impl Into<String>) {
        let message = message.into();
        if message.is_empty() {
            return;
        }
        self.errors
            .entry(field)
            .and_modify(|existing| {
                existing.push('\n');
                existing.push_str(&message);
            })
            .or_insert(message);
    }

    /// Replace whatever message the field had
    pub fn set(&mut self, field: Field, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn suggest(&mut self, field: Field, value: impl Into<String>) {
        self.suggestions.insert(field, value.into());
    }

    pub fn clear_suggestion(&mut self, field: Field) {
        self.suggestions.remove(&field);
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn suggestion(&self, field: Field) -> Option<&str> {
        self.suggestions.get(&field).map(String::as_str)
    }

    pub fn has_error(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Fold another result's errors into this one.
    /// Messages are appended per field; the other side's suggestions win.
    pub fn merge(&mut self, other: FieldErrors) {
        for (field, message) in other.errors {
            self.push(field, message);
        }
        self.suggestions.extend(other.suggestions);
    }

    /// `Ok(value)` when no errors were recorded
    pub fn into_result<T>(self, value: T) -> ValidationResult<T> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.errors {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, message.replace('\n', " "))?;
            first = false;
        }
        Ok(())
    }
}

/// Merge two validation results into one, keeping both values on success.
pub fn combine<A, B>(a: ValidationResult<A>, b: ValidationResult<B>) -> ValidationResult<(A, B)> {
    match (a, b) {
        (Ok(a), Ok(b)) => Ok((a, b)),
        (Err(e), Ok(_)) | (Ok(_), Err(e)) => Err(e),
        (Err(mut first), Err(second)) => {
            first.merge(second);
            Err(first)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_appends_on_new_line() {
        let mut errors = FieldErrors::new();
        errors.push(Field::Password, "too short");
        errors.push(Field::Password, "needs a digit");
        assert_eq!(errors.error(Field::Password), Some("too short\nneeds a digit"));
        assert!(!errors.has_error(Field::Username));
    }

    #[test]
    fn test_set_replaces_message() {
        let mut errors = FieldErrors::single(Field::Theme, "first");
        errors.set(Field::Theme, "second");
        assert_eq!(errors.error(Field::Theme), Some("second"));
    }

    #[test]
    fn test_empty_message_is_ignored() {
        let mut errors = FieldErrors::new();
        errors.push(Field::Theme, "");
        assert!(errors.is_empty());
        assert_eq!(errors.into_result(5), Ok(5));
    }

    #[test]
    fn test_merge_keeps_fields_and_suggestions() {
        let mut username = FieldErrors::single(Field::Username, "contains spaces");
        username.suggest(Field::Username, "anna_b");
        let password = FieldErrors::single(Field::Password, "too short");

        let mut merged = FieldErrors::new();
        merged.merge(username);
        merged.merge(password);

        assert_eq!(merged.error(Field::Username), Some("contains spaces"));
        assert_eq!(merged.error(Field::Password), Some("too short"));
        assert_eq!(merged.suggestion(Field::Username), Some("anna_b"));
        assert_eq!(merged.suggestion(Field::Password), None);
    }

    #[test]
    fn test_combine_merges_both_failures() {
        let a: ValidationResult<String> = Err(FieldErrors::single(Field::Dream, "empty"));
        let b: ValidationResult<String> = Err(FieldErrors::single(Field::Theme, "missing"));
        let errors = combine(a, b).unwrap_err();
        assert!(errors.has_error(Field::Dream));
        assert!(errors.has_error(Field::Theme));

        let ok = combine::<_, u32>(Ok("x"), Ok(1)).unwrap();
        assert_eq!(ok, ("x", 1));
    }

    #[test]
    fn test_display_lists_fields() {
        let mut errors = FieldErrors::single(Field::General, "could not save");
        errors.push(Field::Dream, "line one");
        errors.push(Field::Dream, "line two");
        assert_eq!(
            errors.to_string(),
            "dream: line one line two; general: could not save"
        );
    }
}
