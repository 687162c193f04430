//! Form Input Components
//!
//! Labelled inputs bound to a `RwSignal<String>` with their error line.

use dream_list_core::Field;
use leptos::prelude::*;

use super::form_state::{FieldError, FormState};

/// Labelled text input with validation error display
#[component]
pub fn TextField(
    form: FormState,
    field: Field,
    value: RwSignal<String>,
    #[prop(into)] label: String,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let id = format!("{}-input", field);

    view! {
        <div class="form-field">
            <label for=id.clone()>{label}</label>
            <input
                id=id
                type="text"
                placeholder=placeholder
                aria-describedby=format!("{}-error", field)
                aria-invalid=move || form.field_error(field).map(|_| "true")
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <FieldError form=form field=field />
        </div>
    }
}

/// Password input with a show/hide toggle
#[component]
pub fn PasswordField(
    form: FormState,
    value: RwSignal<String>,
    #[prop(into)] label: String,
) -> impl IntoView {
    let (visible, set_visible) = signal(false);
    let field = Field::Password;
    let id = format!("{}-input", field);

    view! {
        <div class="form-field">
            <label for=id.clone()>{label}</label>
            <div class="password-row">
                <input
                    id=id
                    type=move || if visible.get() { "text" } else { "password" }
                    aria-describedby=format!("{}-error", field)
                    aria-invalid=move || form.field_error(field).map(|_| "true")
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
                <button
                    type="button"
                    class="toggle-password"
                    aria-pressed=move || visible.get().to_string()
                    aria-label=move || if visible.get() { "Dölj lösenord" } else { "Visa lösenord" }
                    on:click=move |_| set_visible.update(|v| *v = !*v)
                >
                    {move || if visible.get() { "Dölj" } else { "Visa" }}
                </button>
            </div>
            <FieldError form=form field=field />
        </div>
    }
}
