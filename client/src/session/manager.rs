//! Session manager: owner of the token slot and the derived identity.
//!
//! DESIGN
//! ======
//! One `SessionManager` is built per application load and handed to pages
//! through Leptos context. It is cheap to clone; clones share state. Every
//! transition replaces the whole `AuthState` and then notifies subscribers
//! outside the lock, so a subscriber may read the manager again.
//!
//! INVARIANTS
//! ==========
//! - An in-memory token exists iff the state is `Authenticated`, and the state's
//!   user is exactly `IdentityClaims::decode(token)`.
//! - After `initialize` or `logout` the state is never `Initializing` again.

#[cfg(test)]
#[path = "manager_test.rs"]
mod manager_test;

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use super::claims::IdentityClaims;
use super::error::SessionError;
use super::store::{BrowserTokenStore, TokenStore};
use crate::state::auth::AuthState;

type Listener = Arc<dyn Fn(&AuthState) + Send + Sync>;

/// Handle returned by [`SessionManager::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
struct Session {
    token: Option<String>,
    auth: AuthState,
}

impl Session {
    fn signed_out() -> Self {
        Self { token: None, auth: AuthState::unauthenticated() }
    }

    fn signed_in(token: String, claims: IdentityClaims) -> Self {
        Self { token: Some(token), auth: AuthState::authenticated(claims) }
    }
}

/// Single authority for who the current user is.
#[derive(Clone)]
pub struct SessionManager {
    store: Arc<dyn TokenStore>,
    session: Arc<RwLock<Session>>,
    listeners: Arc<RwLock<Vec<(SubscriptionId, Listener)>>>,
    next_listener: Arc<AtomicU64>,
}

impl fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionManager")
            .field("state", &self.snapshot())
            .finish_non_exhaustive()
    }
}

impl SessionManager {
    /// Manager over `store`, still `Initializing`.
    pub fn new(store: impl TokenStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
            session: Arc::new(RwLock::new(Session::default())),
            listeners: Arc::new(RwLock::new(Vec::new())),
            next_listener: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Manager backed by `localStorage`.
    pub fn browser() -> Self {
        Self::new(BrowserTokenStore)
    }

    // =========================================================================
    // READS
    // =========================================================================

    pub fn snapshot(&self) -> AuthState {
        self.session.read().unwrap_or_else(PoisonError::into_inner).auth.clone()
    }

    pub fn identity(&self) -> Option<IdentityClaims> {
        self.snapshot().user().cloned()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .auth
            .is_authenticated()
    }

    pub fn is_loading(&self) -> bool {
        self.session.read().unwrap_or_else(PoisonError::into_inner).auth.is_loading()
    }

    /// Bearer token for outbound requests; `None` unless authenticated.
    pub fn token(&self) -> Option<String> {
        self.session.read().unwrap_or_else(PoisonError::into_inner).token.clone()
    }

    // =========================================================================
    // TRANSITIONS
    // =========================================================================

    /// Startup check against the wall clock. See [`Self::initialize_at`].
    pub fn initialize(&self) -> AuthState {
        self.initialize_at(chrono::Utc::now().timestamp())
    }

    /// Load the persisted token and settle the session at time `now`
    /// (seconds since the Unix epoch).
    ///
    /// A token that fails to decode or whose `exp` is not after `now` is erased
    /// from the store. Never fails; the result is `Authenticated` or
    /// `Unauthenticated`.
    pub fn initialize_at(&self, now: i64) -> AuthState {
        let next = match self.store.load() {
            None => Session::signed_out(),
            Some(token) => match IdentityClaims::decode(&token).and_then(|claims| claims.ensure_fresh_at(now)) {
                Ok(claims) => {
                    log::debug!("restored session for user {}", claims.id);
                    Session::signed_in(token, claims)
                }
                Err(e) => {
                    log::warn!("discarding stored session token: {e}");
                    self.store.clear();
                    Session::signed_out()
                }
            },
        };
        self.replace(next)
    }

    /// Install `token`, obtained from a successful login or registration call.
    ///
    /// Expiry is not checked here. Any previously persisted token is
    /// overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::MalformedCredential`] if `token` does not
    /// decode; the store and the current state are left untouched.
    pub fn login(&self, token: &str) -> Result<AuthState, SessionError> {
        let claims = IdentityClaims::decode(token).inspect_err(|e| {
            log::error!("login rejected token from API: {e}");
        })?;
        self.store.save(token);
        log::debug!("signed in as user {}", claims.id);
        Ok(self.replace(Session::signed_in(token.to_owned(), claims)))
    }

    /// Erase the persisted token and sign out. Idempotent.
    pub fn logout(&self) -> AuthState {
        self.store.clear();
        log::debug!("signed out");
        self.replace(Session::signed_out())
    }

    // =========================================================================
    // SUBSCRIPTIONS
    // =========================================================================

    /// Call `listener` with the new state after every transition.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&AuthState) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_listener.fetch_add(1, Ordering::Relaxed));
        self.listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Arc::new(listener)));
        id
    }

    /// Remove a listener. Returns whether it was registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.write().unwrap_or_else(PoisonError::into_inner);
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    fn replace(&self, next: Session) -> AuthState {
        let snapshot = next.auth.clone();
        *self.session.write().unwrap_or_else(PoisonError::into_inner) = next;

        let listeners: Vec<Listener> = self
            .listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            listener(&snapshot);
        }
        snapshot
    }
}
