//! Card for one tale in the dashboard list and the public gallery.
//!
//! DESIGN
//! ======
//! The same card serves both lists. Owner actions (visibility toggle and
//! delete) render only when the caller passes the callbacks, and the author
//! line renders only on gallery cards.

#[cfg(test)]
#[path = "tale_card_test.rs"]
mod tale_card_test;

use leptos::prelude::*;

use crate::net::types::Tale;
use crate::util::catalog::age_facet_label;
use crate::util::format::{PREVIEW_CHARS, capitalize, format_date, like_label, truncate_content};

/// Display strings derived from a tale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaleCardSummary {
    pub href: String,
    pub title: String,
    pub preview: String,
    pub age: String,
    pub topic: String,
    pub likes: String,
    pub created: Option<String>,
    /// Author name, `Anonymous` when the API did not populate it.
    pub author: String,
    pub visibility: &'static str,
}

impl TaleCardSummary {
    pub fn from_tale(tale: &Tale) -> Self {
        Self {
            href: format!("/tale/{}", tale.id),
            title: tale.title.clone(),
            preview: truncate_content(&tale.content, PREVIEW_CHARS),
            age: age_facet_label(&tale.age_range),
            topic: capitalize(&tale.topic),
            likes: like_label(tale.likes),
            created: tale.created_at.as_deref().and_then(format_date),
            author: tale.author.as_ref().and_then(|a| a.name()).unwrap_or("Anonymous").to_owned(),
            visibility: if tale.is_public { "Public" } else { "Private" },
        }
    }
}

/// A tale card linking to the detail page.
#[component]
pub fn TaleCard(
    tale: Tale,
    #[prop(optional)] show_author: bool,
    #[prop(optional)] on_toggle_visibility: Option<Callback<(String, bool)>>,
    #[prop(optional)] on_delete: Option<Callback<String>>,
) -> impl IntoView {
    let summary = TaleCardSummary::from_tale(&tale);
    let id = tale.id.clone();
    let is_public = tale.is_public;
    let author = show_author.then(|| summary.author.clone());

    let owner_actions = (on_toggle_visibility.is_some() || on_delete.is_some()).then(|| {
        let toggle_id = id.clone();
        let delete_id = id.clone();
        let toggle_label = if is_public { "Make private" } else { "Make public" };
        view! {
            <div class="tale-card__actions">
                <button
                    class="btn tale-card__visibility"
                    on:click=move |_| {
                        if let Some(cb) = on_toggle_visibility.as_ref() {
                            cb.run((toggle_id.clone(), !is_public));
                        }
                    }
                    title=toggle_label
                >
                    {toggle_label}
                </button>
                <button
                    class="btn btn--danger tale-card__delete"
                    on:click=move |_| {
                        if let Some(cb) = on_delete.as_ref() {
                            cb.run(delete_id.clone());
                        }
                    }
                    title="Delete tale"
                    aria-label="Delete tale"
                >
                    "Delete"
                </button>
            </div>
        }
    });

    view! {
        <article class="tale-card" class:tale-card--public=is_public>
            <header class="tale-card__header">
                <a class="tale-card__title" href=summary.href.clone()>{summary.title}</a>
                <span class="tale-card__visibility-badge">{summary.visibility}</span>
            </header>
            <div class="tale-card__tags">
                <span class="tag tag--age">{summary.age}</span>
                <span class="tag tag--topic">{summary.topic}</span>
            </div>
            <p class="tale-card__preview">{summary.preview}</p>
            <footer class="tale-card__meta">
                <span class="tale-card__likes">{summary.likes}</span>
                {summary.created.map(|d| view! { <span class="tale-card__date">{d}</span> })}
                {author.map(|name| view! { <span class="tale-card__author">"by " {name}</span> })}
                <a class="tale-card__read" href=summary.href>"Read tale"</a>
            </footer>
            {owner_actions}
        </article>
    }
}
