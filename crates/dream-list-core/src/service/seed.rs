//! Seed data
//!
//! Default themes and sample dreams written at login.

use super::{DreamService, ThemeService};

pub const DEFAULT_THEMES: [&str; 5] = [
    "teknikdrömmar",
    "vardagsdrömmar",
    "husdrömmar",
    "sportdrömmar",
    "resdrömmar",
];

/// Saved when the default list does not fit in storage
pub const FALLBACK_THEME: &str = "dröm";

/// (name, theme, is_checked)
pub const SAMPLE_DREAMS: [(&str, &str, bool); 3] = [
    ("Lära mig HTML/CSS", "teknikdrömmar", true),
    ("Lära mig TypeScript", "teknikdrömmar", false),
    ("En dröm som tar flera rader lorem ipsum", "vardagsdrömmar", false),
];

/// Append the sample dreams, skipping any that fail validation
pub fn save_sample_dreams(dreams: &DreamService) {
    for (name, theme, is_checked) in SAMPLE_DREAMS {
        if let Err(errors) = dreams.create_dream(name, theme, is_checked) {
            log::error!("Sample dream '{}' could not be added: {}", name, errors);
        }
    }
}

/// Fresh start after login: default themes and only the sample dreams
pub fn reset_user_data(themes: &ThemeService, dreams: &DreamService) {
    if let Err(e) = themes.save_default_themes() {
        log::error!("Default themes not saved: {}", e);
    }
    if let Err(e) = dreams.clear_dreams() {
        log::error!("Dreams not cleared: {}", e);
    }
    save_sample_dreams(dreams);
}
