//! Delete Confirm Button Component
//!
//! Inline delete with a confirm/cancel step.

use leptos::prelude::*;

/// Shows a "Ta bort" button; clicking it asks "Ta bort?" with ✓/✗.
///
/// # Arguments
/// * `label` - Accessible name, e.g. the dream or theme being deleted
/// * `on_confirm` - Callback to execute when the user confirms deletion
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] label: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirm_delete, set_confirm_delete) = signal(false);
    let aria_label = format!("Ta bort {}", label);

    view! {
        <Show
            when=move || confirm_delete.get()
            fallback=move || view! {
                <button
                    type="button"
                    class="delete-btn"
                    aria-label=aria_label.clone()
                    on:click=move |_| set_confirm_delete.set(true)
                >
                    "Ta bort"
                </button>
            }
        >
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Ta bort?"</span>
                <button
                    type="button"
                    class="confirm-btn"
                    on:click=move |_| {
                        set_confirm_delete.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    type="button"
                    class="cancel-btn"
                    on:click=move |_| set_confirm_delete.set(false)
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
