//! Token builders shared by session tests.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

/// Build an unsigned-looking JWT whose payload is `claims`.
pub(crate) fn token_for(claims: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string().as_bytes());
    format!("{header}.{payload}.c2lnbmF0dXJl")
}

/// Token for user `u1` / `Alice` with the given optional expiry.
pub(crate) fn alice_token(exp: Option<i64>) -> String {
    let mut claims = serde_json::json!({
        "id": "u1",
        "name": "Alice",
        "email": "alice@example.com",
        "iat": 1_700_000_000,
    });
    if let Some(exp) = exp {
        claims["exp"] = serde_json::json!(exp);
    }
    token_for(&claims)
}
