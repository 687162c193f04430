//! Dashboard Page
//!
//! The user's dream list with completion toggles and deletion.

use dream_list_core::messages;
use leptos::prelude::*;

use crate::components::{alert, DreamListItem, NavBar};
use crate::context::AppContext;
use crate::store::{
    reload_dreams, store_remove_dream, store_update_dream, use_app_store, AppStateStoreFields,
};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    // Announced through the live region
    let (status, set_status) = signal(String::new());

    reload_dreams(&store, &ctx.dreams());

    let toggle_dream = Callback::new(move |(id, is_checked): (u64, bool)| {
        match ctx.dreams().update_dream_checked(id, is_checked) {
            Ok(updated) => {
                store_update_dream(&store, updated);
                set_status.set(messages::dream_toggled(id, is_checked));
            }
            Err(e) => {
                log::error!("Dream {} not toggled: {}", id, e);
                // Put the checkbox back in line with storage
                reload_dreams(&store, &ctx.dreams());
                alert(messages::DREAM_NOT_TOGGLED);
            }
        }
    });

    let delete_dream = Callback::new(move |id: u64| match ctx.dreams().delete_dream(id) {
        Ok(()) => {
            store_remove_dream(&store, id);
            set_status.set(messages::dream_deleted(id));
        }
        Err(e) => {
            log::error!("Dream {} not deleted: {}", id, e);
            reload_dreams(&store, &ctx.dreams());
            alert(messages::DREAM_NOT_DELETED);
        }
    });

    view! {
        <NavBar />
        <section class="dashboard-page">
            <h1>"Mina drömmar"</h1>
            <Show
                when=move || store.dreams().with(|d| !d.is_empty())
                fallback=|| view! { <p class="info-message">{messages::NO_DREAMS_FOUND}</p> }
            >
                <ul class="dream-list">
                    <For
                        each=move || store.dreams().get()
                        key=|dream| (dream.id, dream.is_checked)
                        children=move |dream| view! {
                            <DreamListItem
                                dream=dream
                                on_toggle=toggle_dream
                                on_delete=delete_dream
                            />
                        }
                    />
                </ul>
            </Show>
            <p class="status-message" role="status" aria-live="polite">
                {move || status.get()}
            </p>
        </section>
    }
}
