//! Dream List Item Component

use dream_list_core::Dream;
use leptos::prelude::*;

use super::DeleteConfirmButton;

/// One dream row: completion checkbox, name, theme and delete
#[component]
pub fn DreamListItem(
    dream: Dream,
    #[prop(into)] on_toggle: Callback<(u64, bool)>,
    #[prop(into)] on_delete: Callback<u64>,
) -> impl IntoView {
    let Dream { id, name, theme, is_checked } = dream;
    let checkbox_id = format!("dream-check-{}", id);
    let label = name.clone();

    view! {
        <li class="dream-list_item" class:checked=is_checked>
            <input
                id=checkbox_id.clone()
                type="checkbox"
                class="dream-check"
                prop:checked=is_checked
                on:change=move |ev| on_toggle.run((id, event_target_checked(&ev)))
            />
            <label for=checkbox_id>
                <span class="dream-name">{name}</span>
                ", "
                <span class="dream-theme">{theme}</span>
            </label>
            <DeleteConfirmButton
                label=label
                on_confirm=Callback::new(move |_| on_delete.run(id))
            />
        </li>
    }
}
