use super::*;

#[test]
fn normalize_trims_trailing_slashes() {
    assert_eq!(normalize_base_url("https://api.example.com//"), "https://api.example.com");
}

#[test]
fn normalize_trims_whitespace() {
    assert_eq!(normalize_base_url("  http://h:1 "), "http://h:1");
}

#[test]
fn normalize_blank_falls_back_to_default() {
    assert_eq!(normalize_base_url("   "), DEFAULT_API_URL);
    assert_eq!(normalize_base_url("/"), DEFAULT_API_URL);
}

#[test]
fn api_base_url_has_no_trailing_slash() {
    assert!(!api_base_url().ends_with('/'));
    assert!(!api_base_url().is_empty());
}
