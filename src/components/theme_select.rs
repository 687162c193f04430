//! Theme Select Component
//!
//! Dropdown of stored themes with the prompt option first.

use dream_list_core::config::THEME_PROMPT_VALUE;
use dream_list_core::messages;
use dream_list_core::Field;
use leptos::prelude::*;

use super::form_state::{FieldError, FormState};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ThemeSelect(form: FormState, selected: RwSignal<String>) -> impl IntoView {
    let store = use_app_store();
    let field = Field::Theme;

    view! {
        <div class="form-field">
            <label for="theme-input">"Tema"</label>
            <select
                id="theme-input"
                aria-describedby=format!("{}-error", field)
                aria-invalid=move || form.field_error(field).map(|_| "true")
                prop:value=move || selected.get()
                on:change=move |ev| selected.set(event_target_value(&ev))
            >
                <option value=THEME_PROMPT_VALUE>{messages::THEME_PROMPT}</option>
                <For
                    each=move || store.themes().get()
                    key=|theme| theme.clone()
                    children=move |theme| {
                        let is_selected = {
                            let theme = theme.clone();
                            move || selected.get() == theme
                        };
                        let value = theme.clone();
                        view! {
                            <option value=value selected=is_selected>{theme}</option>
                        }
                    }
                />
            </select>
            <Show when=move || store.themes().with(|t| t.is_empty())>
                <p class="info-message">{messages::NO_THEMES_FOUND}</p>
            </Show>
            <FieldError form=form field=field />
        </div>
    }
}
