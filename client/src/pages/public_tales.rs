//! Public gallery with local search and facet filters.
//!
//! DESIGN
//! ======
//! Public tales are fetched once per visit; searching and filtering run over
//! the loaded list without further requests.

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::tale_card::TaleCard;
use crate::session::context::use_auth;
use crate::state::gallery::GalleryState;
use crate::util::catalog::{AGE_RANGES, TOPICS};
use crate::util::notify::use_toasts;

#[component]
pub fn PublicTalesPage() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();
    let gallery = RwSignal::new(GalleryState::default());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_public_tales().await {
            Ok(tales) => {
                let _ = gallery.try_update(|g| {
                    g.tales = tales;
                    g.loading = false;
                });
            }
            Err(e) => {
                log::error!("loading public tales failed: {e}");
                let _ = gallery.try_update(|g| g.loading = false);
                crate::util::notify::notify_error(toasts, "Failed to load tales");
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = toasts;

    let visible = Memo::new(move |_| gallery.with(GalleryState::visible));
    let reset = move |_| gallery.update(|g| g.filters.reset());

    let age_options = AGE_RANGES
        .iter()
        .map(|(value, label)| view! { <option value=*value>{*label}</option> })
        .collect::<Vec<_>>();
    let topic_options = TOPICS
        .iter()
        .map(|(value, label)| view! { <option value=*value>{*label}</option> })
        .collect::<Vec<_>>();

    view! {
        <Navbar/>
        <main class="gallery-page">
            <header class="gallery-page__header">
                <h1>"Public Tales"</h1>
                <p>
                    "Explore a collection of magical tales created by our community. "
                    "Find stories perfect for your child's age and interests."
                </p>
            </header>

            <div class="gallery-page__toolbar">
                <input
                    class="gallery-page__search"
                    type="text"
                    placeholder="Search tales by title or content..."
                    prop:value=move || gallery.get().filters.search
                    on:input=move |ev| gallery.update(|g| g.filters.search = event_target_value(&ev))
                />
                <button class="btn" on:click=move |_| gallery.update(|g| g.show_filters = !g.show_filters)>
                    {move || if gallery.get().show_filters { "Hide Filters" } else { "Show Filters" }}
                </button>
                <Show when=move || auth.get().is_authenticated()>
                    <a class="btn btn--primary" href="/generate">"Create Your Own Tale"</a>
                </Show>
            </div>

            <div class="gallery-page__filters" class:gallery-page__filters--hidden=move || !gallery.get().show_filters>
                <label class="gallery-page__filter">
                    "Age Range"
                    <select
                        prop:value=move || gallery.get().filters.age_range
                        on:change=move |ev| gallery.update(|g| g.filters.age_range = event_target_value(&ev))
                    >
                        <option value="">"All Ages"</option>
                        {age_options}
                    </select>
                </label>
                <label class="gallery-page__filter">
                    "Topic"
                    <select
                        prop:value=move || gallery.get().filters.topic
                        on:change=move |ev| gallery.update(|g| g.filters.topic = event_target_value(&ev))
                    >
                        <option value="">"All Topics"</option>
                        {topic_options}
                    </select>
                </label>
                <button class="btn btn--link" on:click=reset>"Reset Filters"</button>
            </div>

            <Show
                when=move || !gallery.get().loading
                fallback=move || view! { <p class="gallery-page__loading">"Loading tales..."</p> }
            >
                <Show
                    when=move || !visible.get().is_empty()
                    fallback=move || {
                        view! {
                            <div class="gallery-page__empty">
                                <h3>"No tales found"</h3>
                                <p>"Try adjusting your filters or search terms"</p>
                                <button class="btn btn--primary" on:click=reset>"Clear All Filters"</button>
                            </div>
                        }
                    }
                >
                    <div class="gallery-page__cards">
                        <For
                            each=move || visible.get()
                            key=|tale| tale.id.clone()
                            children=move |tale| view! { <TaleCard tale=tale show_author=true/> }
                        />
                    </div>
                </Show>
            </Show>
        </main>
        <Footer/>
    }
}
