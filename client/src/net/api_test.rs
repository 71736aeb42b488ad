use super::*;

// =============================================================
// Paths and headers
// =============================================================

#[test]
fn endpoint_prefixes_api_base_url() {
    let url = endpoint("/api/tales/public");
    assert!(url.starts_with(crate::config::api_base_url()));
    assert!(url.ends_with("/api/tales/public"));
    assert!(!url.contains("//api"));
}

#[test]
fn tale_paths_embed_id() {
    assert_eq!(tale_path("abc"), "/api/tales/abc");
    assert_eq!(tale_like_path("abc"), "/api/tales/abc/like");
}

#[test]
fn bearer_header_formats_token() {
    assert_eq!(bearer_header("t0k"), "Bearer t0k");
}

// =============================================================
// status_error
// =============================================================

#[test]
fn status_401_maps_to_unauthorized() {
    let err = status_error(401, Some(ApiErrorBody { message: Some("Invalid credentials".to_owned()) }));
    assert!(err.is_unauthorized());
    assert_eq!(err.message_or("fallback"), "Invalid credentials");
}

#[test]
fn other_status_keeps_code_and_message() {
    let err = status_error(409, Some(ApiErrorBody { message: Some("User already exists".to_owned()) }));
    assert_eq!(
        err,
        ApiError::Status { status: 409, message: Some("User already exists".to_owned()) }
    );
    assert!(!err.is_unauthorized());
}

#[test]
fn missing_body_uses_fallback_message() {
    let err = status_error(500, None);
    assert_eq!(err.message_or("Failed to load tales"), "Failed to load tales");
}

#[test]
fn blank_server_message_uses_fallback() {
    let err = status_error(400, Some(ApiErrorBody { message: Some("  ".to_owned()) }));
    assert_eq!(err.message_or("Try again"), "Try again");
}

#[test]
fn transport_errors_use_fallback() {
    assert_eq!(ApiError::Network("offline".to_owned()).message_or("x"), "x");
    assert_eq!(ApiError::Unavailable.message_or("y"), "y");
}

#[test]
fn error_display_is_readable() {
    assert_eq!(ApiError::Status { status: 404, message: None }.to_string(), "request failed: 404");
    assert_eq!(ApiError::Unavailable.to_string(), "not available on server");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_are_unavailable_outside_the_browser() {
    let result = block_on_ready(fetch_public_tales());
    assert_eq!(result, Err(ApiError::Unavailable));
}

/// Poll a future that never pends, as the non-hydrate stubs do.
#[cfg(not(feature = "hydrate"))]
fn block_on_ready<F: std::future::Future>(future: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut future = pin!(future);
    let mut cx = Context::from_waker(Waker::noop());
    match future.as_mut().poll(&mut cx) {
        Poll::Ready(output) => output,
        Poll::Pending => panic!("stub future should complete immediately"),
    }
}
