//! Identity claims carried in the bearer token payload.
//!
//! DESIGN
//! ======
//! The token is a JWT: three base64url segments joined by `.`. Only the middle
//! (payload) segment is read. The signature segment is never checked; the API
//! verifies it on every authenticated request.

#[cfg(test)]
#[path = "claims_test.rs"]
mod claims_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use super::error::SessionError;

/// Decoded token payload describing the signed-in user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawClaims")]
pub struct IdentityClaims {
    /// User identifier, taken from `id`, `_id` or `userId` in that order.
    pub id: String,
    /// Display name.
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Expiry, seconds since the Unix epoch. Absent means no expiry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
    /// Issued-at, seconds since the Unix epoch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    /// Remaining claims, kept verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Payload as signed. Issuers may carry the user id under several keys at
/// once, so each key is read separately.
#[derive(Deserialize)]
struct RawClaims {
    #[serde(default, deserialize_with = "deserialize_id")]
    id: Option<String>,
    #[serde(rename = "_id", default, deserialize_with = "deserialize_id")]
    mongo_id: Option<String>,
    #[serde(rename = "userId", default, deserialize_with = "deserialize_id")]
    user_id: Option<String>,
    name: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    exp: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    iat: Option<i64>,
    #[serde(flatten)]
    extra: serde_json::Map<String, serde_json::Value>,
}

impl TryFrom<RawClaims> for IdentityClaims {
    type Error = String;

    fn try_from(raw: RawClaims) -> Result<Self, Self::Error> {
        let id = raw
            .id
            .or(raw.mongo_id)
            .or(raw.user_id)
            .ok_or_else(|| "missing user id claim (`id`, `_id` or `userId`)".to_owned())?;
        Ok(Self { id, name: raw.name, email: raw.email, exp: raw.exp, iat: raw.iat, extra: raw.extra })
    }
}

impl IdentityClaims {
    /// Decode the payload segment of `token` into claims.
    ///
    /// Both base64url and standard base64 alphabets are accepted, with or
    /// without trailing padding.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::MalformedCredential`] if the token does not have
    /// three segments, the payload is not base64, or the decoded JSON does not
    /// carry the identity claim shape.
    pub fn decode(token: &str) -> Result<Self, SessionError> {
        let mut segments = token.split('.');
        let (Some(_header), Some(payload), Some(_signature), None) =
            (segments.next(), segments.next(), segments.next(), segments.next())
        else {
            return Err(SessionError::MalformedCredential(
                "expected three dot-separated segments".to_owned(),
            ));
        };
        if payload.is_empty() {
            return Err(SessionError::MalformedCredential("empty payload segment".to_owned()));
        }

        let bytes = decode_segment(payload)?;
        serde_json::from_slice(&bytes)
            .map_err(|e| SessionError::MalformedCredential(format!("invalid claims payload: {e}")))
    }

    /// Whether the `exp` claim exists and is not after `now`.
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.exp.is_some_and(|exp| exp <= now)
    }

    /// Pass the claims through if they are still fresh at `now`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::ExpiredCredential`] when [`Self::is_expired_at`]
    /// holds.
    pub fn ensure_fresh_at(self, now: i64) -> Result<Self, SessionError> {
        match self.exp {
            Some(exp) if exp <= now => Err(SessionError::ExpiredCredential { exp, now }),
            _ => Ok(self),
        }
    }
}

fn decode_segment(segment: &str) -> Result<Vec<u8>, SessionError> {
    let normalized: String = segment
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect();
    URL_SAFE_NO_PAD
        .decode(normalized.as_bytes())
        .map_err(|e| SessionError::MalformedCredential(format!("invalid base64 payload: {e}")))
}

/// User ids arrive as strings, or as numbers from integer-keyed stores.
fn deserialize_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(id)) => Ok(Some(id)),
        Some(serde_json::Value::Number(id)) => Ok(Some(id.to_string())),
        Some(_) => Err(D::Error::custom("expected string or numeric user id")),
    }
}

/// Fractional timestamps round up, so a token is never treated as expired
/// before its `exp` instant.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::Number(number)) => {
            if let Some(int) = number.as_i64() {
                return Ok(Some(int));
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(Some(float.ceil() as i64));
            }
            Err(D::Error::custom("timestamp out of range"))
        }
        Some(_) => Err(D::Error::custom("expected numeric timestamp")),
    }
}
