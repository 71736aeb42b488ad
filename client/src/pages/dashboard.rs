//! Dashboard page listing the signed-in user's tales with counters and owner
//! actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It fetches the user's tales once
//! the session is known, then applies visibility changes and deletions
//! locally after the API confirms them.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::sidebar::Sidebar;
use crate::components::tale_card::TaleCard;
use crate::session::SessionManager;
use crate::session::context::{use_auth, use_session};
use crate::state::tales::DashboardState;
use crate::state::toast::ToastState;
use crate::util::auth::install_unauth_redirect;
use crate::util::notify::use_toasts;

/// Dashboard page. Redirects to `/login` if the user is not authenticated.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    install_unauth_redirect(auth, use_navigate());

    view! {
        <Show
            when=move || auth.get().is_authenticated()
            fallback=move || {
                view! {
                    <div class="app-shell app-shell--pending">
                        <p>{move || if auth.get().is_loading() { "Loading..." } else { "Redirecting to login..." }}</p>
                    </div>
                }
            }
        >
            <div class="app-shell">
                <Sidebar/>
                <main class="app-shell__main">
                    <DashboardContent/>
                </main>
            </div>
        </Show>
    }
}

#[component]
fn DashboardContent() -> impl IntoView {
    let auth = use_auth();
    let session = use_session();
    let toasts = use_toasts();
    let dashboard = RwSignal::new(DashboardState::default());
    let delete_tale_id = RwSignal::new(None::<String>);

    load_user_tales(&session, dashboard, toasts);

    let on_toggle = Callback::new({
        let session = session.clone();
        move |(id, is_public): (String, bool)| set_visibility(&session, dashboard, toasts, id, is_public)
    });
    let on_delete_request = Callback::new(move |id: String| delete_tale_id.set(Some(id)));
    let on_delete_cancel = Callback::new(move |()| delete_tale_id.set(None));
    let on_delete_confirm = Callback::new(move |()| {
        if let Some(id) = delete_tale_id.get_untracked() {
            delete_tale(&session, dashboard, toasts, id);
        }
        delete_tale_id.set(None);
    });

    let stats = move || dashboard.get().stats;

    view! {
        <header class="dashboard-page__header">
            <div>
                <h1>"Dashboard"</h1>
                <p class="dashboard-page__welcome">{move || format!("Welcome back, {}", auth.get().display_name())}</p>
            </div>
            <a class="btn btn--primary" href="/generate">"Create New Tale"</a>
        </header>

        <section class="dashboard-page__stats">
            <div class="stat">
                <span class="stat__label">"Total Tales"</span>
                <span class="stat__value">{move || stats().total_tales}</span>
            </div>
            <div class="stat">
                <span class="stat__label">"Public Tales"</span>
                <span class="stat__value">{move || stats().public_tales}</span>
            </div>
            <div class="stat">
                <span class="stat__label">"Likes Received"</span>
                <span class="stat__value">{move || stats().likes_received}</span>
            </div>
        </section>

        <section class="dashboard-page__list">
            <h2>"Your Tales"</h2>
            <Show
                when=move || !dashboard.get().loading
                fallback=move || view! { <p>"Loading your tales..."</p> }
            >
                <Show
                    when=move || !dashboard.get().items.is_empty()
                    fallback=move || {
                        view! {
                            <div class="dashboard-page__empty">
                                <p>"You haven't created any tales yet."</p>
                                <a class="btn btn--primary" href="/generate">"Create your first tale"</a>
                            </div>
                        }
                    }
                >
                    <div class="dashboard-page__cards">
                        <For
                            each=move || dashboard.get().items
                            key=|tale| (tale.id.clone(), tale.is_public)
                            children=move |tale| {
                                view! {
                                    <TaleCard
                                        tale=tale
                                        on_toggle_visibility=on_toggle
                                        on_delete=on_delete_request
                                    />
                                }
                            }
                        />
                    </div>
                </Show>
            </Show>
        </section>

        <Show when=move || delete_tale_id.get().is_some()>
            <DeleteTaleDialog on_cancel=on_delete_cancel on_confirm=on_delete_confirm/>
        </Show>
    }
}

#[component]
fn DeleteTaleDialog(on_cancel: Callback<()>, on_confirm: Callback<()>) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Delete Tale"</h2>
                <p class="dialog__danger">"Are you sure you want to delete this tale?"</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| on_confirm.run(())>
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}

fn load_user_tales(session: &SessionManager, dashboard: RwSignal<DashboardState>, toasts: RwSignal<ToastState>) {
    #[cfg(feature = "hydrate")]
    {
        let session = session.clone();
        leptos::task::spawn_local(async move {
            let token = session.token().unwrap_or_default();
            match crate::net::api::fetch_user_tales(&token).await {
                Ok(tales) => {
                    let _ = dashboard.try_update(|d| d.set_items(tales));
                }
                Err(e) => {
                    log::error!("loading user tales failed: {e}");
                    let _ = dashboard.try_update(|d| d.loading = false);
                    if !crate::util::auth::expire_on_unauthorized(&session, &e) {
                        crate::util::notify::notify_error(toasts, "Failed to load your tales");
                    }
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (session, dashboard, toasts);
}

fn set_visibility(
    session: &SessionManager,
    dashboard: RwSignal<DashboardState>,
    toasts: RwSignal<ToastState>,
    id: String,
    is_public: bool,
) {
    #[cfg(feature = "hydrate")]
    {
        let session = session.clone();
        leptos::task::spawn_local(async move {
            let token = session.token().unwrap_or_default();
            match crate::net::api::set_tale_visibility(&token, &id, is_public).await {
                Ok(()) => {
                    let _ = dashboard.try_update(|d| d.apply_visibility(&id, is_public));
                    let label = if is_public { "public" } else { "private" };
                    crate::util::notify::notify_success(toasts, format!("Tale is now {label}"));
                }
                Err(e) => {
                    log::error!("updating visibility of {id} failed: {e}");
                    if !crate::util::auth::expire_on_unauthorized(&session, &e) {
                        crate::util::notify::notify_error(toasts, "Failed to update tale visibility");
                    }
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (session, dashboard, toasts, id, is_public);
}

fn delete_tale(session: &SessionManager, dashboard: RwSignal<DashboardState>, toasts: RwSignal<ToastState>, id: String) {
    #[cfg(feature = "hydrate")]
    {
        let session = session.clone();
        leptos::task::spawn_local(async move {
            let token = session.token().unwrap_or_default();
            match crate::net::api::delete_tale(&token, &id).await {
                Ok(()) => {
                    let _ = dashboard.try_update(|d| d.remove(&id));
                    crate::util::notify::notify_success(toasts, "Tale deleted successfully");
                }
                Err(e) => {
                    log::error!("deleting tale {id} failed: {e}");
                    if !crate::util::auth::expire_on_unauthorized(&session, &e) {
                        crate::util::notify::notify_error(toasts, "Failed to delete tale");
                    }
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (session, dashboard, toasts, id);
}
