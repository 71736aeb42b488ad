//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login redirects
//! and identity-dependent rendering. Values are produced only by
//! `SessionManager`, which is why the fields stay private: a user is present
//! exactly when the session is authenticated, and never while loading.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::session::IdentityClaims;

/// Three-state session lifecycle. `Initializing` is left once and never
/// re-entered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    #[default]
    Initializing,
    Unauthenticated,
    Authenticated,
}

/// Snapshot of the session as seen by pages and components.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    user: Option<IdentityClaims>,
    status: SessionStatus,
}

impl AuthState {
    /// State before the startup token check has run.
    pub fn initializing() -> Self {
        Self::default()
    }

    pub fn unauthenticated() -> Self {
        Self { user: None, status: SessionStatus::Unauthenticated }
    }

    pub fn authenticated(user: IdentityClaims) -> Self {
        Self { user: Some(user), status: SessionStatus::Authenticated }
    }

    pub fn user(&self) -> Option<&IdentityClaims> {
        self.user.as_ref()
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == SessionStatus::Initializing
    }

    pub fn is_authenticated(&self) -> bool {
        self.status == SessionStatus::Authenticated
    }

    /// Display name for greetings, falling back to `"User"`.
    pub fn display_name(&self) -> String {
        self.user
            .as_ref()
            .map_or_else(|| "User".to_owned(), |u| u.name.clone())
    }
}
