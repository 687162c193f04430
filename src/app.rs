//! Dream List Frontend App
//!
//! Builds the storage-backed context and switches between pages.

use dream_list_core::ValidationConfig;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::browser_storage::browser_storage_service;
use crate::context::{resolve_page, AppContext, AppPage};
use crate::pages::{AddDreamPage, DashboardPage, LoginPage, SettingsPage};
use crate::store::{reload_username, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(browser_storage_service(), ValidationConfig::default());
    let store = Store::new(AppState::new());

    // Provide context to all children
    provide_context(ctx);
    provide_context(store);

    reload_username(&store, &ctx.auth());
    log::info!("Storage mode: {:?}", ctx.storage_mode());

    let visible_page = Memo::new(move |_| {
        let requested = ctx.page.get();
        let page = resolve_page(requested, store.username().with(Option::is_some));
        if page != requested {
            log::debug!("Redirecting from {:?} to {:?}", requested, page);
        }
        page
    });

    view! {
        <main class="app-layout">
            {move || match visible_page.get() {
                AppPage::Login => view! { <LoginPage /> }.into_any(),
                AppPage::Dashboard => view! { <DashboardPage /> }.into_any(),
                AppPage::AddDream => view! { <AddDreamPage /> }.into_any(),
                AppPage::Settings => view! { <SettingsPage /> }.into_any(),
            }}
        </main>
    }
}
