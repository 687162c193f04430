//! Navigation Bar Component
//!
//! Links between the logged in pages plus the user greeting.

use leptos::prelude::*;

use crate::context::{AppContext, AppPage};
use crate::store::{use_app_store, AppStateStoreFields};

const NAV_LINKS: &[(AppPage, &str)] = &[
    (AppPage::Dashboard, "Mina drömmar"),
    (AppPage::AddDream, "Lägg till dröm"),
    (AppPage::Settings, "Inställningar"),
];

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <nav class="nav-bar">
            <UserGreeting />
            <ul class="nav-links">
                {NAV_LINKS.iter().map(|&(page, label)| {
                    let is_current = move || ctx.page.get() == page;
                    view! {
                        <li>
                            <button
                                type="button"
                                class="nav-link"
                                class:active=is_current
                                aria-current=move || is_current().then_some("page")
                                on:click=move |_| ctx.navigate(page)
                            >
                                {label}
                            </button>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </nav>
    }
}

/// "Hej, namn!" for the logged in user
#[component]
pub fn UserGreeting() -> impl IntoView {
    let store = use_app_store();

    view! {
        <p class="user-greeting">
            {move || match store.username().get() {
                Some(name) => format!("Hej, {}!", name),
                None => "Hej!".to_string(),
            }}
        </p>
    }
}
