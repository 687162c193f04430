//! Service Layer
//!
//! Operations the page controllers call: validate, mutate storage, report.

mod auth_service;
mod dream_service;
mod theme_service;
pub mod seed;

#[cfg(test)]
mod tests;

pub use auth_service::AuthService;
pub use dream_service::DreamService;
pub use theme_service::ThemeService;
