use super::*;
use crate::session::test_support::alice_token;

fn alice() -> IdentityClaims {
    IdentityClaims::decode(&alice_token(None)).unwrap()
}

// =============================================================
// AuthState constructors
// =============================================================

#[test]
fn default_is_initializing_and_loading() {
    let state = AuthState::default();
    assert_eq!(state, AuthState::initializing());
    assert!(state.is_loading());
    assert!(!state.is_authenticated());
    assert!(state.user().is_none());
}

#[test]
fn unauthenticated_is_settled_without_user() {
    let state = AuthState::unauthenticated();
    assert_eq!(state.status(), SessionStatus::Unauthenticated);
    assert!(!state.is_loading());
    assert!(!state.is_authenticated());
    assert!(state.user().is_none());
}

#[test]
fn authenticated_carries_user() {
    let state = AuthState::authenticated(alice());
    assert_eq!(state.status(), SessionStatus::Authenticated);
    assert!(!state.is_loading());
    assert!(state.is_authenticated());
    assert_eq!(state.user().map(|u| u.id.as_str()), Some("u1"));
}

// =============================================================
// display_name
// =============================================================

#[test]
fn display_name_uses_claims() {
    assert_eq!(AuthState::authenticated(alice()).display_name(), "Alice");
}

#[test]
fn display_name_falls_back_to_user() {
    assert_eq!(AuthState::unauthenticated().display_name(), "User");
}
