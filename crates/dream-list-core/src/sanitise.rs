//! Input Sanitiser
//!
//! Single-pass text filter applied to every form input before validation:
//! empty check, script block removal, tag removal, trimming, length cap.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::ValidationConfig;

/// Shown in place of the original input when markup was stripped
pub const SANITISED_PLACEHOLDER: &str = "[CONTENT SANITISED]";

static SCRIPT_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script[^>]*>.*?</script>").expect("valid script regex"));

static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?[^>]+(?:>|$)").expect("valid tag regex"));

/// Problem found while sanitising
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SanitiseIssue {
    Empty,
    ScriptTags,
    HtmlTags,
    Whitespace,
    TooLong { length: usize, max: usize },
}

impl fmt::Display for SanitiseIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SanitiseIssue::Empty => f.write_str("Input cannot be empty"),
            SanitiseIssue::ScriptTags => f.write_str("Script tags detected and must be removed."),
            SanitiseIssue::HtmlTags => f.write_str("HTML tags detected and must be removed."),
            SanitiseIssue::Whitespace => f.write_str("Leading or trailing whitespace trimmed."),
            SanitiseIssue::TooLong { length, max } => write!(
                f,
                "Input too long ({} chars) and truncated to {} characters.",
                length, max
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitisationResult {
    /// True only when no issues were recorded
    pub is_safe: bool,
    /// Raw input, or a placeholder if it contained markup
    pub original_input: String,
    pub sanitised_input: String,
    pub issues: Vec<SanitiseIssue>,
}

impl SanitisationResult {
    /// All issue messages, one per line
    pub fn issue_text(&self) -> String {
        self.issues
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Sanitise with the default rules (50 character cap)
pub fn sanitise(raw: &str) -> SanitisationResult {
    sanitise_with(raw, &ValidationConfig::default())
}

pub fn sanitise_with(raw: &str, config: &ValidationConfig) -> SanitisationResult {
    if raw.trim().is_empty() {
        return SanitisationResult {
            is_safe: false,
            original_input: raw.to_string(),
            sanitised_input: String::new(),
            issues: vec![SanitiseIssue::Empty],
        };
    }

    let mut issues = Vec::new();
    let mut has_markup = false;
    let mut sanitised = raw.to_string();

    if SCRIPT_BLOCK.is_match(&sanitised) {
        issues.push(SanitiseIssue::ScriptTags);
        sanitised = SCRIPT_BLOCK.replace_all(&sanitised, "").into_owned();
        has_markup = true;
    }

    if HTML_TAG.is_match(&sanitised) {
        issues.push(SanitiseIssue::HtmlTags);
        sanitised = HTML_TAG.replace_all(&sanitised, "").into_owned();
        has_markup = true;
    }

    let trimmed = sanitised.trim();
    if trimmed.len() != sanitised.len() {
        issues.push(SanitiseIssue::Whitespace);
        sanitised = trimmed.to_string();
    }

    let length = sanitised.chars().count();
    if length > config.input_max_length {
        issues.push(SanitiseIssue::TooLong {
            length,
            max: config.input_max_length,
        });
        sanitised = sanitised.chars().take(config.input_max_length).collect();
    }

    SanitisationResult {
        is_safe: issues.is_empty(),
        original_input: if has_markup {
            SANITISED_PLACEHOLDER.to_string()
        } else {
            raw.to_string()
        },
        sanitised_input: sanitised,
        issues,
    }
}
