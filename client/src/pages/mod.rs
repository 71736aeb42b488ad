//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, gating, toasts) and
//! delegates rendering details to `components`.

pub mod dashboard;
pub mod generate;
pub mod home;
pub mod login;
pub mod public_tales;
pub mod register;
pub mod tale;
