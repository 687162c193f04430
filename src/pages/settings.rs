//! Settings Page
//!
//! Change username, manage themes and log out.

use dream_list_core::messages::{self, ADD_THEME_TEXTS, UPDATE_TEXTS};
use dream_list_core::Field;
use leptos::prelude::*;

use crate::components::{alert, DeleteConfirmButton, FormState, NavBar, SubmitButton, TextField};
use crate::context::{AppContext, AppPage};
use crate::store::{
    reload_themes, reload_username, store_add_theme, store_clear, store_remove_theme,
    store_set_username, use_app_store, AppStateStoreFields,
};

#[component]
pub fn SettingsPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    reload_username(&store, &ctx.auth());
    reload_themes(&store, &ctx.themes());

    let log_out = move |_| match ctx.auth().log_out() {
        Ok(()) => {
            log::info!("User logged out.");
            ctx.reset_storage_mode();
            store_clear(&store);
            ctx.navigate(AppPage::Login);
        }
        Err(e) => {
            log::error!("Logout failed: {}", e);
            alert(messages::LOGOUT_FAILED);
        }
    };

    view! {
        <NavBar />
        <section class="settings-page">
            <h1>"Inställningar"</h1>
            <UsernameForm />
            <ThemeSettings />
            <button type="button" class="logout-btn" on:click=log_out>
                "Logga ut"
            </button>
        </section>
    }
}

#[component]
fn UsernameForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let form = FormState::new(UPDATE_TEXTS);
    let username = RwSignal::new(store.username().get_untracked().unwrap_or_default());

    let update_username = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let outcome = form.submit(|| ctx.auth().update_username(&username.get_untracked()));

        match outcome {
            Some(name) => {
                username.set(name.clone());
                store_set_username(&store, name);
            }
            None => form.apply_suggestion(Field::Username, username),
        }
    };

    view! {
        <form class="settings-form" novalidate on:submit=update_username>
            <h2>"Användarnamn"</h2>
            <TextField form=form field=Field::Username value=username label="Nytt användarnamn" />
            <SubmitButton form=form />
        </form>
    }
}

#[component]
fn ThemeSettings() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let form = FormState::new(ADD_THEME_TEXTS);
    let new_theme = RwSignal::new(String::new());

    let add_theme = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let outcome = form.submit(|| ctx.themes().create_theme(&new_theme.get_untracked()));

        match outcome {
            Some(theme) => {
                store_add_theme(&store, theme);
                new_theme.set(String::new());
            }
            None => form.apply_suggestion(Field::Theme, new_theme),
        }
    };

    let delete_theme = move |theme: String| match ctx.themes().delete_theme(&theme) {
        Ok(()) => store_remove_theme(&store, &theme),
        Err(e) => {
            log::error!("Theme '{}' not deleted: {}", theme, e);
            reload_themes(&store, &ctx.themes());
            alert(messages::THEME_NOT_DELETED);
        }
    };

    view! {
        <form class="settings-form" novalidate on:submit=add_theme>
            <h2>"Teman"</h2>
            <TextField form=form field=Field::Theme value=new_theme label="Nytt tema" />
            <SubmitButton form=form />
        </form>
        <Show
            when=move || store.themes().with(|t| !t.is_empty())
            fallback=|| view! { <p class="info-message">{messages::NO_THEMES_FOUND}</p> }
        >
            <ul class="theme-list">
                <For
                    each=move || store.themes().get()
                    key=|theme| theme.clone()
                    children=move |theme| {
                        let label = theme.clone();
                        let on_confirm = Callback::new(move |_| delete_theme(theme.clone()));
                        view! {
                            <li class="theme-list_item">
                                <span>{label.clone()}</span>
                                <DeleteConfirmButton label=label on_confirm=on_confirm />
                            </li>
                        }
                    }
                />
            </ul>
        </Show>
    }
}
