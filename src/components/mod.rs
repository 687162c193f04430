//! UI Components
//!
//! Reusable Leptos components.

mod form_state;
mod text_field;
mod delete_confirm_button;
mod dream_list_item;
mod theme_select;
mod nav_bar;

pub use form_state::{alert, FormState, SubmitButton};
pub use text_field::{PasswordField, TextField};
pub use delete_confirm_button::DeleteConfirmButton;
pub use dream_list_item::DreamListItem;
pub use theme_select::ThemeSelect;
pub use nav_bar::NavBar;
