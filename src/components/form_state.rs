//! Form Submission State
//!
//! Shared handling for every form: double-submit guard, button texts,
//! field errors and write-back of suggested values.

use dream_list_core::messages::ButtonTexts;
use dream_list_core::{Field, FieldErrors, ValidationResult};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// How long the success text stays on the button
const BUTTON_RESET_MS: u32 = 2_000;

/// Show a blocking browser alert for generic failures
pub fn alert(message: &str) {
    if let Err(e) = window().alert_with_message(message) {
        log::error!("Alert failed: {:?}", e);
    }
}

/// Per-form submission state
#[derive(Clone, Copy)]
pub struct FormState {
    pub is_submitting: RwSignal<bool>,
    pub button_text: RwSignal<&'static str>,
    pub errors: RwSignal<FieldErrors>,
    texts: ButtonTexts,
}

impl FormState {
    pub fn new(texts: ButtonTexts) -> Self {
        Self {
            is_submitting: RwSignal::new(false),
            button_text: RwSignal::new(texts.original),
            errors: RwSignal::new(FieldErrors::new()),
            texts,
        }
    }

    /// Run one submission.
    ///
    /// Ignored while another submission of the same form is running.
    /// Errors are stored for the fields; a `general` error is alerted.
    pub fn submit<T>(&self, action: impl FnOnce() -> ValidationResult<T>) -> Option<T> {
        if self.is_submitting.get_untracked() {
            log::debug!("Form already submitting, ignored");
            return None;
        }
        self.is_submitting.set(true);
        self.button_text.set(self.texts.loading);
        self.errors.set(FieldErrors::new());

        let outcome = match action() {
            Ok(value) => {
                self.show_success();
                Some(value)
            }
            Err(errors) => {
                log::debug!("Form rejected: {}", errors);
                self.button_text.set(self.texts.original);
                if let Some(message) = errors.error(Field::General) {
                    alert(message);
                }
                self.errors.set(errors);
                None
            }
        };

        self.is_submitting.set(false);
        outcome
    }

    fn show_success(&self) {
        self.button_text.set(self.texts.success);
        let button_text = self.button_text;
        let original = self.texts.original;
        Timeout::new(BUTTON_RESET_MS, move || {
            // Form may be gone by now
            let _ = button_text.try_set(original);
        })
        .forget();
    }

    /// Error text for one field (tracked)
    pub fn field_error(&self, field: Field) -> Option<String> {
        self.errors.with(|e| e.error(field).map(str::to_string))
    }

    /// Replace the input value with the suggested one, if any
    pub fn apply_suggestion(&self, field: Field, input: RwSignal<String>) {
        let suggestion = self
            .errors
            .with_untracked(|e| e.suggestion(field).map(str::to_string));
        if let Some(value) = suggestion.filter(|v| !v.is_empty()) {
            input.set(value);
        }
    }
}

/// Submit button showing the form's current button text
#[component]
pub fn SubmitButton(form: FormState, #[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <button
            type="submit"
            class=class
            disabled=move || form.is_submitting.get()
        >
            {move || form.button_text.get()}
        </button>
    }
}

/// Error line under an input, hidden when the field is valid
#[component]
pub fn FieldError(form: FormState, field: Field) -> impl IntoView {
    let message = move || form.field_error(field);
    view! {
        <p
            id=format!("{}-error", field)
            class="error-message"
            class:hidden=move || message().is_none()
            aria-live="polite"
        >
            {move || message().unwrap_or_default()}
        </p>
    }
}
