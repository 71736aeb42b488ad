//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep route gating, navigation, display formatting, form
//! checks and toast plumbing out of page components so the pure parts stay
//! testable natively.

pub mod auth;
pub mod catalog;
pub mod format;
pub mod nav;
pub mod notify;
pub mod validate;
