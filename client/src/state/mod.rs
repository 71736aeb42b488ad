//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by screen (`tales` for the dashboard, `gallery`,
//! `tale_view`) plus cross-cutting `auth` and `toast`, so components depend on
//! small focused models. Every model is plain data; pages wrap them in
//! `RwSignal`s.

pub mod auth;
pub mod gallery;
pub mod tale_view;
pub mod tales;
pub mod toast;

#[cfg(test)]
pub(crate) mod test_support;
