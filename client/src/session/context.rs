//! Leptos wiring for the session manager.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` calls [`provide_session`] once. Pages pull the manager with
//! [`use_session`] to call `login`/`logout` or read the bearer token, and the
//! read-only [`AuthState`] signal with [`use_auth`] for rendering and route
//! gating. The startup token check runs in an effect, so it only happens in the
//! browser after hydration; server renders stay in the loading state.

use leptos::prelude::*;

use super::manager::SessionManager;
use crate::state::auth::AuthState;

/// Build the browser session, mirror it into a signal, and provide both as
/// context.
pub fn provide_session() -> SessionManager {
    provide_session_with(SessionManager::browser())
}

/// Provide an already-built manager. Split out for hosts that supply their own
/// token store.
pub fn provide_session_with(manager: SessionManager) -> SessionManager {
    let auth = RwSignal::new(manager.snapshot());
    manager.subscribe(move |state| {
        let _ = auth.try_set(state.clone());
    });

    provide_context(manager.clone());
    provide_context(auth.read_only());

    #[cfg(feature = "hydrate")]
    {
        let manager = manager.clone();
        Effect::new(move || {
            manager.initialize();
        });
    }

    manager
}

pub fn use_session() -> SessionManager {
    expect_context::<SessionManager>()
}

pub fn use_auth() -> ReadSignal<AuthState> {
    expect_context::<ReadSignal<AuthState>>()
}
