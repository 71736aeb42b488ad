//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect behavior,
//! and every authenticated API caller reacts to a rejected token the same way.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::api::ApiError;
use crate::session::SessionManager;
use crate::state::auth::AuthState;

/// Whether a gated route should leave: the startup check is done and nobody is
/// signed in.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.is_loading() && !state.is_authenticated()
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: ReadSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// End the session when the API rejected its token. Returns whether it did.
pub fn expire_on_unauthorized(session: &SessionManager, err: &ApiError) -> bool {
    if !err.is_unauthorized() || !session.is_authenticated() {
        return false;
    }
    log::warn!("API rejected the session token; signing out");
    session.logout();
    true
}

/// Hand a token the API just issued to the session. On failure returns the
/// message to show.
pub fn adopt_token(session: &SessionManager, token: &str) -> Result<(), String> {
    session.login(token).map(|_| ()).map_err(|_| "Sign-in failed. Please try again.".to_owned())
}
