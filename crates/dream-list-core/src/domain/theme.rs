//! Theme helpers
//!
//! Themes are plain string labels, unique ignoring case.

/// Lower-cased form used for comparisons
fn normalise_theme(theme: &str) -> String {
    theme.to_lowercase()
}

/// Stored spelling of `theme`, matched ignoring case
pub fn find_theme<'a>(themes: &'a [String], theme: &str) -> Option<&'a str> {
    let wanted = normalise_theme(theme);
    themes
        .iter()
        .find(|t| normalise_theme(t) == wanted)
        .map(String::as_str)
}

pub fn theme_exists(themes: &[String], theme: &str) -> bool {
    find_theme(themes, theme).is_some()
}
