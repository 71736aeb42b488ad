//! REST bindings for the tales API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only called from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. A 401 is reported as
//! [`ApiError::Unauthorized`] so authenticated callers can end the session;
//! other non-2xx statuses carry the server's `message` when it sent one.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use super::types::ApiErrorBody;
use super::types::{CreateTaleRequest, GenerateTaleRequest, Tale};
#[cfg(feature = "hydrate")]
use super::types::{AuthResponse, LikeResponse, LoginRequest, RegisterRequest, TaleResponse, TalesResponse, VisibilityUpdate};
#[cfg(feature = "hydrate")]
use serde::de::DeserializeOwned;

/// Failure of a tales API call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("unauthorized")]
    Unauthorized { message: Option<String> },
    #[error("request failed: {status}")]
    Status { status: u16, message: Option<String> },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// The server-provided message, or `fallback` when there is none.
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            Self::Unauthorized { message: Some(message) } | Self::Status { message: Some(message), .. }
                if !message.trim().is_empty() =>
            {
                message.clone()
            }
            _ => fallback.to_owned(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn status_error(status: u16, body: Option<ApiErrorBody>) -> ApiError {
    let message = body.and_then(|b| b.message);
    if status == 401 {
        ApiError::Unauthorized { message }
    } else {
        ApiError::Status { status, message }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(path: &str) -> String {
    format!("{}{path}", crate::config::api_base_url())
}

#[cfg(any(test, feature = "hydrate"))]
fn tale_path(id: &str) -> String {
    format!("/api/tales/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn tale_like_path(id: &str) -> String {
    format!("/api/tales/{id}/like")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

// =============================================================================
// TRANSPORT (hydrate only)
// =============================================================================

#[cfg(feature = "hydrate")]
fn with_bearer(builder: gloo_net::http::RequestBuilder, token: &str) -> gloo_net::http::RequestBuilder {
    builder.header("Authorization", &bearer_header(token))
}

#[cfg(feature = "hydrate")]
async fn send(request: Result<gloo_net::http::Request, gloo_net::Error>) -> Result<gloo_net::http::Response, ApiError> {
    let request = request.map_err(|e| ApiError::Network(e.to_string()))?;
    let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        let body = resp.json::<ApiErrorBody>().await.ok();
        let err = status_error(resp.status(), body);
        log::warn!("{} {}: {err}", resp.status(), resp.url());
        return Err(err);
    }
    Ok(resp)
}

#[cfg(feature = "hydrate")]
async fn send_json<T: DeserializeOwned>(
    request: Result<gloo_net::http::Request, gloo_net::Error>,
) -> Result<T, ApiError> {
    let resp = send(request).await?;
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

// =============================================================================
// AUTH
// =============================================================================

/// Exchange credentials for a bearer token via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the credentials are rejected.
pub async fn login(email: &str, password: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = LoginRequest { email: email.to_owned(), password: password.to_owned() };
        let request = gloo_net::http::Request::post(&endpoint("/api/auth/login")).json(&payload);
        let body: AuthResponse = send_json(request).await?;
        Ok(body.token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Unavailable)
    }
}

/// Create an account and receive a bearer token via `POST /api/auth/register`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the account is rejected
/// (for example a duplicate email).
pub async fn register(name: &str, email: &str, password: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = RegisterRequest { name: name.to_owned(), email: email.to_owned(), password: password.to_owned() };
        let request = gloo_net::http::Request::post(&endpoint("/api/auth/register")).json(&payload);
        let body: AuthResponse = send_json(request).await?;
        Ok(body.token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, email, password);
        Err(ApiError::Unavailable)
    }
}

// =============================================================================
// TALES
// =============================================================================

/// Tales owned by the signed-in user (`GET /api/tales/user`).
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn fetch_user_tales(token: &str) -> Result<Vec<Tale>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = with_bearer(gloo_net::http::Request::get(&endpoint("/api/tales/user")), token).build();
        let body: TalesResponse = send_json(request).await?;
        Ok(body.tales)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// All public tales (`GET /api/tales/public`).
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn fetch_public_tales() -> Result<Vec<Tale>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::get(&endpoint("/api/tales/public")).build();
        let body: TalesResponse = send_json(request).await?;
        Ok(body.tales)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// A single tale (`GET /api/tales/{id}`).
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the tale does not exist.
pub async fn fetch_tale(id: &str) -> Result<Tale, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::get(&endpoint(&tale_path(id))).build();
        let body: TaleResponse = send_json(request).await?;
        Ok(body.tale)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}

/// Ask the API to write a new tale (`POST /api/tales/generate`). The result is
/// not saved until [`save_tale`] is called.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request or the generation fails.
pub async fn generate_tale(token: &str, request: &GenerateTaleRequest) -> Result<Tale, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let http = with_bearer(gloo_net::http::Request::post(&endpoint("/api/tales/generate")), token).json(request);
        let body: TaleResponse = send_json(http).await?;
        Ok(body.tale)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, request);
        Err(ApiError::Unavailable)
    }
}

/// Save a tale to the user's collection (`POST /api/tales`).
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn save_tale(token: &str, request: &CreateTaleRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let http = with_bearer(gloo_net::http::Request::post(&endpoint("/api/tales")), token).json(request);
        send(http).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, request);
        Err(ApiError::Unavailable)
    }
}

/// Publish or unpublish a tale (`PATCH /api/tales/{id}`).
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn set_tale_visibility(token: &str, id: &str, is_public: bool) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let http = with_bearer(gloo_net::http::Request::patch(&endpoint(&tale_path(id))), token)
            .json(&VisibilityUpdate { is_public });
        send(http).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id, is_public);
        Err(ApiError::Unavailable)
    }
}

/// Delete a tale (`DELETE /api/tales/{id}`).
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn delete_tale(token: &str, id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let http = with_bearer(gloo_net::http::Request::delete(&endpoint(&tale_path(id))), token).build();
        send(http).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id);
        Err(ApiError::Unavailable)
    }
}

// =============================================================================
// LIKES
// =============================================================================

/// Whether the signed-in user likes a tale (`GET /api/tales/{id}/like`).
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn fetch_like_status(token: &str, id: &str) -> Result<bool, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let http = with_bearer(gloo_net::http::Request::get(&endpoint(&tale_like_path(id))), token).build();
        let body: LikeResponse = send_json(http).await?;
        Ok(body.liked)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id);
        Err(ApiError::Unavailable)
    }
}

/// Toggle the signed-in user's like (`POST /api/tales/{id}/like`). Returns the
/// new liked state.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn toggle_like(token: &str, id: &str) -> Result<bool, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let http = with_bearer(gloo_net::http::Request::post(&endpoint(&tale_like_path(id))), token)
            .json(&serde_json::json!({}));
        let body: LikeResponse = send_json(http).await?;
        Ok(body.liked)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id);
        Err(ApiError::Unavailable)
    }
}
