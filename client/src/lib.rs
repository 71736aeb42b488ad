//! # tales-client
//!
//! Leptos + WASM frontend for Tale Weaver, a children's story generator.
//!
//! This crate contains the session manager, pages, components, application
//! state and the REST bindings for the tales API. The `hydrate` feature builds
//! the browser bundle; the `ssr` feature lets `tales-server` render the same
//! routes on the server.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
