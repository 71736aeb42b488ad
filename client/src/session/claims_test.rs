use super::*;
use crate::session::test_support::{alice_token, token_for};

// =============================================================
// decode
// =============================================================

#[test]
fn decode_reads_identity_fields() {
    let claims = IdentityClaims::decode(&alice_token(Some(1_800_000_000))).unwrap();
    assert_eq!(claims.id, "u1");
    assert_eq!(claims.name, "Alice");
    assert_eq!(claims.email.as_deref(), Some("alice@example.com"));
    assert_eq!(claims.exp, Some(1_800_000_000));
    assert_eq!(claims.iat, Some(1_700_000_000));
    assert!(claims.extra.is_empty());
}

#[test]
fn decode_accepts_mongo_style_id() {
    let token = token_for(&serde_json::json!({ "_id": "665f", "name": "Bo" }));
    let claims = IdentityClaims::decode(&token).unwrap();
    assert_eq!(claims.id, "665f");
    assert_eq!(claims.email, None);
    assert_eq!(claims.exp, None);
}

#[test]
fn decode_keeps_unknown_claims() {
    let token = token_for(&serde_json::json!({ "id": "u2", "name": "Cy", "role": "admin" }));
    let claims = IdentityClaims::decode(&token).unwrap();
    assert_eq!(claims.extra.get("role"), Some(&serde_json::json!("admin")));
}

#[test]
fn decode_tolerates_trailing_padding() {
    let token = alice_token(None);
    let mut parts: Vec<&str> = token.split('.').collect();
    let padded = format!("{}==", parts[1]);
    parts[1] = &padded;
    let claims = IdentityClaims::decode(&parts.join(".")).unwrap();
    assert_eq!(claims.name, "Alice");
}

#[test]
fn decode_rounds_fractional_expiry_up() {
    let token = token_for(&serde_json::json!({ "id": "u1", "name": "A", "exp": 100.7 }));
    let claims = IdentityClaims::decode(&token).unwrap();
    assert_eq!(claims.exp, Some(101));
    // Still valid during the second in which it expires.
    assert!(!claims.is_expired_at(100));
    assert!(claims.is_expired_at(101));
}

#[test]
fn decode_accepts_several_id_keys_at_once() {
    let token = token_for(&serde_json::json!({ "id": "u1", "_id": "u1", "name": "A" }));
    assert_eq!(IdentityClaims::decode(&token).unwrap().id, "u1");

    let token = token_for(&serde_json::json!({ "userId": "u3", "id": "u2", "name": "A" }));
    assert_eq!(IdentityClaims::decode(&token).unwrap().id, "u2");

    let token = token_for(&serde_json::json!({ "_id": "m1", "userId": "u3", "name": "A" }));
    assert_eq!(IdentityClaims::decode(&token).unwrap().id, "m1");
}

#[test]
fn decode_accepts_user_id_key() {
    let token = token_for(&serde_json::json!({ "userId": "u9", "name": "A" }));
    let claims = IdentityClaims::decode(&token).unwrap();
    assert_eq!(claims.id, "u9");
    assert!(claims.extra.is_empty());
}

#[test]
fn decode_accepts_numeric_id() {
    let token = token_for(&serde_json::json!({ "id": 42, "name": "A" }));
    assert_eq!(IdentityClaims::decode(&token).unwrap().id, "42");
}

#[test]
fn decode_requires_some_id() {
    let token = token_for(&serde_json::json!({ "name": "A" }));
    assert!(matches!(IdentityClaims::decode(&token), Err(SessionError::MalformedCredential(_))));
}

#[test]
fn decode_treats_null_expiry_as_absent() {
    let token = token_for(&serde_json::json!({ "id": "u1", "name": "A", "exp": null }));
    let claims = IdentityClaims::decode(&token).unwrap();
    assert_eq!(claims.exp, None);
}

#[test]
fn decode_rejects_wrong_segment_count() {
    assert!(matches!(
        IdentityClaims::decode("only.two"),
        Err(SessionError::MalformedCredential(_))
    ));
    assert!(matches!(
        IdentityClaims::decode("a.b.c.d"),
        Err(SessionError::MalformedCredential(_))
    ));
    assert!(matches!(
        IdentityClaims::decode("not-a-token"),
        Err(SessionError::MalformedCredential(_))
    ));
}

#[test]
fn decode_rejects_empty_payload() {
    assert!(matches!(
        IdentityClaims::decode("header..sig"),
        Err(SessionError::MalformedCredential(_))
    ));
}

#[test]
fn decode_rejects_invalid_base64() {
    assert!(matches!(
        IdentityClaims::decode("header.!!!.sig"),
        Err(SessionError::MalformedCredential(_))
    ));
}

#[test]
fn decode_rejects_non_object_payload() {
    let payload = URL_SAFE_NO_PAD.encode(b"[1,2,3]");
    let token = format!("h.{payload}.s");
    assert!(matches!(
        IdentityClaims::decode(&token),
        Err(SessionError::MalformedCredential(_))
    ));
}

#[test]
fn decode_requires_name() {
    let token = token_for(&serde_json::json!({ "id": "u1" }));
    assert!(matches!(
        IdentityClaims::decode(&token),
        Err(SessionError::MalformedCredential(_))
    ));
}

#[test]
fn decode_rejects_string_expiry() {
    let token = token_for(&serde_json::json!({ "id": "u1", "name": "A", "exp": "tomorrow" }));
    assert!(matches!(
        IdentityClaims::decode(&token),
        Err(SessionError::MalformedCredential(_))
    ));
}

// =============================================================
// expiry
// =============================================================

#[test]
fn missing_expiry_never_expires() {
    let claims = IdentityClaims::decode(&alice_token(None)).unwrap();
    assert!(!claims.is_expired_at(i64::MAX));
}

#[test]
fn expiry_equal_to_now_is_expired() {
    let claims = IdentityClaims::decode(&alice_token(Some(100))).unwrap();
    assert!(claims.is_expired_at(100));
    assert!(!claims.is_expired_at(99));
}

#[test]
fn ensure_fresh_reports_expiry_and_now() {
    let claims = IdentityClaims::decode(&alice_token(Some(100))).unwrap();
    assert_eq!(
        claims.ensure_fresh_at(101),
        Err(SessionError::ExpiredCredential { exp: 100, now: 101 })
    );
}

#[test]
fn ensure_fresh_passes_future_expiry() {
    let claims = IdentityClaims::decode(&alice_token(Some(200))).unwrap();
    assert_eq!(claims.clone().ensure_fresh_at(100), Ok(claims));
}
