//! Side navigation for the signed-in dashboard screens.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::session::context::{use_auth, use_session};

const LINKS: &[(&str, &str)] = &[
    ("/dashboard", "My Tales"),
    ("/generate", "Create New Tale"),
    ("/public-tales", "Public Tales"),
];

/// Sidebar with section links, the signed-in name and a Logout action.
/// Logging out leaves the gated page, which then redirects to `/login`.
#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = use_auth();
    let session = use_session();
    let pathname = use_location().pathname;

    let on_logout = Callback::new(move |()| {
        session.logout();
    });

    let links = LINKS
        .iter()
        .map(|(href, label)| {
            let href = *href;
            let active = move || pathname.get() == href;
            view! {
                <a class="sidebar__link" class:sidebar__link--active=active href=href>
                    {*label}
                </a>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <aside class="sidebar">
            <a class="sidebar__brand" href="/">"Tale Weaver"</a>
            <nav class="sidebar__nav">{links}</nav>
            <div class="sidebar__footer">
                <span class="sidebar__user">{move || auth.get().display_name()}</span>
                <button class="btn sidebar__logout" on:click=move |_| on_logout.run(())>
                    "Logout"
                </button>
            </div>
        </aside>
    }
}
