//! Signal-driven navigation for event handlers.
//!
//! Handlers that live inside `Show`/list children cannot own the router's
//! navigate closure, so they write a target path into a signal and a single
//! effect performs the move.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

/// Returns a signal; setting it to `Some(path)` navigates there once.
pub fn deferred_navigate() -> RwSignal<Option<String>> {
    let target = RwSignal::new(None::<String>);
    let navigate = use_navigate();
    Effect::new(move || {
        if let Some(path) = target.get() {
            target.set(None);
            navigate(&path, NavigateOptions::default());
        }
    });
    target
}
