//! Add Dream Page

use dream_list_core::config::THEME_PROMPT_VALUE;
use dream_list_core::messages::ADD_DREAM_TEXTS;
use dream_list_core::Field;
use leptos::prelude::*;

use crate::components::{FormState, NavBar, SubmitButton, TextField, ThemeSelect};
use crate::context::AppContext;
use crate::store::{reload_themes, store_add_dream, use_app_store};

#[component]
pub fn AddDreamPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let form = FormState::new(ADD_DREAM_TEXTS);

    let dream_name = RwSignal::new(String::new());
    let theme = RwSignal::new(THEME_PROMPT_VALUE.to_string());

    reload_themes(&store, &ctx.themes());

    let add_dream = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let outcome = form.submit(|| {
            ctx.dreams()
                .create_dream(&dream_name.get_untracked(), &theme.get_untracked(), false)
        });

        match outcome {
            Some(dream) => {
                store_add_dream(&store, dream);
                dream_name.set(String::new());
                theme.set(THEME_PROMPT_VALUE.to_string());
            }
            None => form.apply_suggestion(Field::Dream, dream_name),
        }
    };

    view! {
        <NavBar />
        <section class="add-dream-page">
            <h1>"Lägg till en dröm"</h1>
            <form class="add-dream-form" novalidate on:submit=add_dream>
                <TextField
                    form=form
                    field=Field::Dream
                    value=dream_name
                    label="Dröm"
                    placeholder="Vad drömmer du om?"
                />
                <ThemeSelect form=form selected=theme />
                <SubmitButton form=form class="add-dream-btn" />
            </form>
        </section>
    }
}
