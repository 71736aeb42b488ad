//! Build-time client configuration.
//!
//! The API origin is baked in at compile time from `TALES_API_URL`, the same
//! way a bundler inlines public environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Base URL of the tales API, without a trailing slash.
pub fn api_base_url() -> &'static str {
    normalize_base_url(option_env!("TALES_API_URL").unwrap_or(DEFAULT_API_URL))
}

fn normalize_base_url(raw: &str) -> &str {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() { DEFAULT_API_URL } else { trimmed }
}
