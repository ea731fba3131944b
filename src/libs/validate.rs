//! Allow-list validation for free-text fields.
//!
//! Nicknames, session names, descriptions, notes and emails may contain
//! letters (any script), digits, underscores, whitespace, dots, hyphens and
//! the at-sign. Anything else is rejected before it reaches storage.

use crate::libs::error::{TrackerError, TrackerResult};
use regex::Regex;
use std::sync::OnceLock;

static VALID_TEXT: OnceLock<Regex> = OnceLock::new();

// `$` anchors at the very end of input; `\s` covers a trailing newline.
fn pattern() -> &'static Regex {
    VALID_TEXT.get_or_init(|| Regex::new(r"^[\w\s.\-@]+$").expect("static pattern compiles"))
}

/// Validates a required text field.
pub fn validate_text(field: &str, value: &str) -> TrackerResult<()> {
    if value.trim().is_empty() {
        return Err(TrackerError::InvalidArgument(format!("'{}' must not be empty", field)));
    }
    if !pattern().is_match(value) {
        return Err(TrackerError::InvalidArgument(format!(
            "'{}' contains characters that are not allowed; use letters, digits, spaces, '.', '-', '_' or '@'",
            field
        )));
    }
    Ok(())
}

/// Validates an optional text field; `None` always passes.
pub fn validate_optional(field: &str, value: Option<&str>) -> TrackerResult<()> {
    match value {
        Some(v) => validate_text(field, v),
        None => Ok(()),
    }
}
