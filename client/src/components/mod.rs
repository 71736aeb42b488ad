//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and tale cards while reading shared session
//! and toast state from Leptos context providers.

pub mod footer;
pub mod navbar;
pub mod sidebar;
pub mod tale_card;
pub mod toaster;
