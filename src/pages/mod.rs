//! Pages
//!
//! One component per screen, chosen by `AppContext::page`.

mod login;
mod dashboard;
mod add_dream;
mod settings;

pub use login::LoginPage;
pub use dashboard::DashboardPage;
pub use add_dream::AddDreamPage;
pub use settings::SettingsPage;
