//! Login Page
//!
//! Username + password form. A successful login resets the user's themes and
//! dreams to the starter set and opens the dashboard.

use dream_list_core::messages::LOGIN_TEXTS;
use dream_list_core::service::seed;
use dream_list_core::{Field, StorageMode};
use leptos::prelude::*;

use crate::components::{alert, FormState, PasswordField, SubmitButton, TextField};
use crate::context::{AppContext, AppPage};
use crate::store::{reload_dreams, reload_themes, store_set_username, use_app_store};

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let form = FormState::new(LOGIN_TEXTS);

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let toggle_remember_me = move |ev: web_sys::Event| {
        let mode = StorageMode::from_remember_me(event_target_checked(&ev));
        if let Err(e) = ctx.set_storage_mode(mode) {
            log::error!("Storage mode not saved: {}", e);
            alert(&e.to_string());
        }
    };

    let log_in = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let outcome = form.submit(|| {
            ctx.auth()
                .create_new_user(&username.get_untracked(), &password.get_untracked())
        });

        match outcome {
            Some(name) => {
                seed::reset_user_data(&ctx.themes(), &ctx.dreams());
                reload_themes(&store, &ctx.themes());
                reload_dreams(&store, &ctx.dreams());
                store_set_username(&store, name);
                password.set(String::new());
                ctx.navigate(AppPage::Dashboard);
            }
            None => form.apply_suggestion(Field::Username, username),
        }
    };

    view! {
        <section class="login-page">
            <h1>"Drömlistan"</h1>
            <form class="login-form" novalidate on:submit=log_in>
                <TextField form=form field=Field::Username value=username label="Användarnamn" />
                <PasswordField form=form value=password label="Lösenord" />
                <div class="form-field remember-me">
                    <input
                        id="remember-me"
                        type="checkbox"
                        prop:checked=move || ctx.storage_mode().is_local()
                        on:change=toggle_remember_me
                    />
                    <label for="remember-me">"Kom ihåg mig"</label>
                </div>
                <SubmitButton form=form class="login-btn" />
            </form>
        </section>
    }
}
