//! Tale detail page: full text, likes and sharing.
//!
//! SYSTEM CONTEXT
//! ==============
//! Readable by anyone. Signed-in viewers also see and toggle their like; the
//! author gets a pointer back to the dashboard. A tale that fails to load sends
//! the visitor back to the gallery.

#[cfg(test)]
#[path = "tale_test.rs"]
mod tale_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_params_map;

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::session::context::{use_auth, use_session};
use crate::state::tale_view::TaleViewState;
use crate::util::catalog::age_facet_label;
use crate::util::format::{capitalize, format_date, like_label, paragraphs};
use crate::util::nav::deferred_navigate;
use crate::state::toast::ToastKind;
use crate::util::notify::{notify_error, use_toasts};

/// Toast shown once the clipboard write for "Share" settles.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn share_outcome(copied: bool) -> (ToastKind, &'static str) {
    if copied {
        (ToastKind::Success, "Link copied to clipboard!")
    } else {
        (ToastKind::Error, "Could not copy the link")
    }
}

#[component]
pub fn TalePage() -> impl IntoView {
    let params = use_params_map();
    let auth = use_auth();
    let session = use_session();
    let toasts = use_toasts();
    let go = deferred_navigate();
    let view_state = RwSignal::new(TaleViewState::default());

    let tale_id = Memo::new(move |_| params.read().get("id").unwrap_or_default());

    Effect::new(move || {
        let id = tale_id.get();
        view_state.set(TaleViewState::default());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_tale(&id).await {
                Ok(tale) => {
                    let _ = view_state.try_update(|v| v.loaded(Some(tale)));
                }
                Err(e) => {
                    log::error!("loading tale {id} failed: {e}");
                    let _ = view_state.try_update(|v| v.loaded(None));
                    notify_error(toasts, "Failed to load tale");
                    go.set(Some("/public-tales".to_owned()));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, go);
    });

    // Like status needs both the tale id and a settled session.
    {
        let session = session.clone();
        Effect::new(move || {
            let id = tale_id.get();
            if !auth.get().is_authenticated() {
                view_state.update(|v| v.liked = false);
                return;
            }
            #[cfg(feature = "hydrate")]
            {
                let session = session.clone();
                leptos::task::spawn_local(async move {
                    let token = session.token().unwrap_or_default();
                    match crate::net::api::fetch_like_status(&token, &id).await {
                        Ok(liked) => {
                            let _ = view_state.try_update(|v| v.liked = liked);
                        }
                        Err(e) => log::warn!("like status for {id} unavailable: {e}"),
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = (&session, id);
        });
    }

    let on_like = Callback::new(move |()| {
        if !auth.get_untracked().is_authenticated() {
            notify_error(toasts, "Please log in to like tales");
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            let id = tale_id.get_untracked();
            leptos::task::spawn_local(async move {
                let token = session.token().unwrap_or_default();
                match crate::net::api::toggle_like(&token, &id).await {
                    Ok(liked) => {
                        let _ = view_state.try_update(|v| v.apply_like_toggle(liked));
                        crate::util::notify::notify_success(toasts, if liked { "Tale liked!" } else { "Like removed" });
                    }
                    Err(e) => {
                        log::error!("toggling like on {id} failed: {e}");
                        if !crate::util::auth::expire_on_unauthorized(&session, &e) {
                            notify_error(toasts, "Failed to update like");
                        }
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = &session;
    });

    let on_share = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(href) = window.location().href() {
                    if let Some(clipboard) = window.navigator().clipboard() {
                        let write = clipboard.write_text(&href);
                        leptos::task::spawn_local(async move {
                            let copied = match wasm_bindgen_futures::JsFuture::from(write).await {
                                Ok(_) => true,
                                Err(e) => {
                                    log::warn!("clipboard write failed: {e:?}");
                                    false
                                }
                            };
                            let (kind, message) = share_outcome(copied);
                            crate::util::notify::notify(toasts, kind, message);
                        });
                        return;
                    }
                }
            }
            let (kind, message) = share_outcome(false);
            crate::util::notify::notify(toasts, kind, message);
        }
    };

    let is_author = move || view_state.with(|v| v.is_authored_by(auth.get().user()));

    view! {
        <Navbar/>
        <main class="tale-page">
            <a class="tale-page__back" href="/public-tales">"Back to all tales"</a>
            <Show
                when=move || !view_state.get().loading
                fallback=move || view! { <p class="tale-page__loading">"Loading tale..."</p> }
            >
                {move || match view_state.get().tale {
                    None => view! {
                        <div class="tale-page__missing">
                            <h1>"Tale not found"</h1>
                            <a class="btn btn--primary" href="/public-tales">"Browse public tales"</a>
                        </div>
                    }
                    .into_any(),
                    Some(tale) => {
                        let author = tale
                            .author
                            .as_ref()
                            .and_then(|a| a.name())
                            .unwrap_or("Anonymous")
                            .to_owned();
                        let created = tale.created_at.as_deref().and_then(format_date);
                        let body = paragraphs(&tale.content)
                            .into_iter()
                            .map(|p| view! { <p>{p}</p> })
                            .collect::<Vec<_>>();
                        view! {
                            <article class="tale-page__article">
                                <h1 class="tale-page__title">{tale.title.clone()}</h1>
                                <p class="tale-page__byline">
                                    {format!("By {author} • For ages {} • {}", tale.age_range, capitalize(&tale.topic))}
                                    {created.map(|d| format!(" • {d}"))}
                                </p>
                                <div class="tale-page__tags">
                                    <span class="tag tag--age">{age_facet_label(&tale.age_range)}</span>
                                </div>
                                <div class="tale-page__body">{body}</div>
                                <div class="tale-page__actions">
                                    <button
                                        class="btn tale-page__like"
                                        class:tale-page__like--active=move || view_state.get().liked
                                        on:click=move |_| on_like.run(())
                                    >
                                        {move || {
                                            let likes = view_state.get().tale.map_or(0, |t| t.likes);
                                            like_label(likes)
                                        }}
                                    </button>
                                    <button class="btn tale-page__share" on:click=on_share>
                                        "Share"
                                    </button>
                                </div>
                                <Show when=is_author>
                                    <p class="tale-page__manage">
                                        <a href="/dashboard">"Manage this tale in your dashboard"</a>
                                    </p>
                                </Show>
                            </article>
                        }
                        .into_any()
                    }
                }}
            </Show>
        </main>
        <Footer/>
    }
}
