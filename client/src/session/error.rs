//! Session error taxonomy.

/// Reasons a bearer token cannot back an authenticated session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// The token is not a decodable `header.payload.signature` credential
    /// carrying the identity claim shape.
    #[error("malformed credential: {0}")]
    MalformedCredential(String),
    /// The token decoded but its `exp` claim is not in the future.
    #[error("expired credential: exp {exp} <= now {now}")]
    ExpiredCredential { exp: i64, now: i64 },
}
