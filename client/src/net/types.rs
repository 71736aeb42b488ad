//! Wire DTOs for the tales API.
//!
//! DESIGN
//! ======
//! Field names follow the API's camelCase JSON; tale ids arrive as `_id`.
//! Optional or loosely typed fields default instead of failing so one odd
//! record does not blank a whole list.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A stored or freshly generated tale.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tale {
    /// Record id. Empty for a generated tale that has not been saved.
    #[serde(rename = "_id", default)]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    /// Age bucket such as `"5-7"`.
    pub age_range: String,
    pub topic: String,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub likes: u64,
    /// ISO 8601 creation timestamp.
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub author: Option<TaleAuthor>,
}

/// Tale author, either populated or as a bare id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaleAuthor {
    Profile {
        #[serde(rename = "_id")]
        id: String,
        #[serde(default)]
        name: Option<String>,
    },
    Id(String),
}

impl TaleAuthor {
    pub fn id(&self) -> &str {
        match self {
            Self::Profile { id, .. } | Self::Id(id) => id,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Profile { name, .. } => name.as_deref(),
            Self::Id(_) => None,
        }
    }
}

/// `POST /api/auth/login` body.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /api/auth/register` body.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Token returned by both auth endpoints.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub token: String,
}

/// `POST /api/tales/generate` body.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateTaleRequest {
    pub age_range: String,
    pub topic: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_character: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setting: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_details: Option<String>,
}

/// `POST /api/tales` body.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaleRequest {
    pub title: String,
    pub content: String,
    pub age_range: String,
    pub topic: String,
    pub is_public: bool,
}

impl CreateTaleRequest {
    /// Save a generated tale as a private record.
    pub fn private_copy(tale: &Tale) -> Self {
        Self {
            title: tale.title.clone(),
            content: tale.content.clone(),
            age_range: tale.age_range.clone(),
            topic: tale.topic.clone(),
            is_public: false,
        }
    }
}

/// `PATCH /api/tales/{id}` body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibilityUpdate {
    pub is_public: bool,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TalesResponse {
    #[serde(default)]
    pub tales: Vec<Tale>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TaleResponse {
    pub tale: Tale,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct LikeResponse {
    pub liked: bool,
}

/// Error payload the API attaches to non-2xx responses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

fn deserialize_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(0),
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_u64() {
                return Ok(int);
            }
            if number.as_i64().is_some() {
                return Ok(0);
            }
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
            {
                return Ok(float.max(0.0) as u64);
            }
            Err(D::Error::custom("expected integer-compatible count"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
