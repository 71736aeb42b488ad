//! Field checks shared by the login and register forms.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::sync::LazyLock;

use regex::Regex;

pub const MIN_PASSWORD_CHARS: usize = 6;

static EMAIL_SHAPE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").ok());

/// Loose `x@y.z` shape check; the API does the real validation.
pub fn looks_like_email(value: &str) -> bool {
    EMAIL_SHAPE.as_ref().is_some_and(|re| re.is_match(value))
}

/// Required email field: returns the trimmed value or the message to show.
pub fn check_email(value: &str) -> Result<String, &'static str> {
    let value = value.trim();
    if value.is_empty() {
        return Err("Email is required");
    }
    if !looks_like_email(value) {
        return Err("Please enter a valid email");
    }
    Ok(value.to_owned())
}
