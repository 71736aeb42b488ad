//! Client-held authentication session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser keeps one bearer token per origin. `SessionManager` is the only
//! writer of that slot: it decodes the token into identity claims, checks the
//! expiry once at startup, and broadcasts every state change to subscribers.
//! Pages read the mirrored `AuthState` signal installed by `context`.
//!
//! TRADE-OFFS
//! ==========
//! Claims are decoded but never signature-verified, and expiry is only checked
//! during `initialize`. Tokens that expire mid-session are rejected by the API,
//! and API callers react to that by calling `logout`.

pub mod claims;
pub mod context;
pub mod error;
pub mod manager;
pub mod store;

#[cfg(test)]
pub(crate) mod test_support;

pub use claims::IdentityClaims;
pub use error::SessionError;
pub use manager::{SessionManager, SubscriptionId};
pub use store::{BrowserTokenStore, MemoryTokenStore, TOKEN_STORAGE_KEY, TokenStore};
