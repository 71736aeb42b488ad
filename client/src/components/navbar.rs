//! Top navigation bar for public routes.

use leptos::prelude::*;

use crate::session::context::{use_auth, use_session};
use crate::util::nav::deferred_navigate;

/// Site navigation. Signed-in users get Dashboard, Generate and Logout;
/// everyone else gets Login and Register.
#[component]
pub fn Navbar() -> impl IntoView {
    let auth = use_auth();
    let session = use_session();
    let go = deferred_navigate();

    let on_logout = Callback::new(move |()| {
        session.logout();
        go.set(Some("/".to_owned()));
    });

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">"Tale Weaver"</a>
            <a class="navbar__link" href="/public-tales">"Public Tales"</a>
            <span class="navbar__spacer"></span>
            <Show
                when=move || auth.get().is_authenticated()
                fallback=|| {
                    view! {
                        <a class="navbar__link" href="/login">"Login"</a>
                        <a class="btn btn--primary navbar__cta" href="/register">"Register"</a>
                    }
                }
            >
                <a class="navbar__link" href="/dashboard">"Dashboard"</a>
                <a class="navbar__link" href="/generate">"Generate"</a>
                <button class="btn navbar__logout" on:click=move |_| on_logout.run(())>
                    "Logout"
                </button>
            </Show>
        </nav>
    }
}
