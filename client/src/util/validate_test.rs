use super::*;

#[test]
fn looks_like_email_accepts_plain_addresses() {
    assert!(looks_like_email("alice@example.com"));
    assert!(looks_like_email("a.b+c@mail.example.org"));
}

#[test]
fn looks_like_email_rejects_missing_parts() {
    assert!(!looks_like_email("alice"));
    assert!(!looks_like_email("alice@example"));
    assert!(!looks_like_email("@example.com"));
    assert!(!looks_like_email(""));
}

#[test]
fn check_email_trims_and_requires_value() {
    assert_eq!(check_email("  alice@example.com "), Ok("alice@example.com".to_owned()));
    assert_eq!(check_email("   "), Err("Email is required"));
    assert_eq!(check_email("not-an-email"), Err("Please enter a valid email"));
}
