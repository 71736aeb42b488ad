//! Networking modules for the tales REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and `types` defines the shared wire schema.
//! Neither touches session state; callers pass the bearer token in.

pub mod api;
pub mod types;
