//! Tale generator: pick an audience and topic, preview the result, then save
//! it privately.
//!
//! SYSTEM CONTEXT
//! ==============
//! Gated route. The API generates but does not store; "Save" posts a private
//! copy of the preview and moves to `/dashboard`.

#[cfg(test)]
#[path = "generate_test.rs"]
mod generate_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::sidebar::Sidebar;
use crate::net::types::{GenerateTaleRequest, Tale};
use crate::session::context::{use_auth, use_session};
use crate::util::auth::install_unauth_redirect;
use crate::util::catalog::{AGE_RANGES, TOPICS, age_facet_label, is_age_range, is_topic};
use crate::util::format::{capitalize, paragraphs};
use crate::util::nav::deferred_navigate;
use crate::util::notify::use_toasts;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerateErrors {
    pub age_range: Option<&'static str>,
    pub topic: Option<&'static str>,
}

/// Raw form values, before validation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerateForm {
    pub age_range: String,
    pub topic: String,
    pub main_character: String,
    pub setting: String,
    pub additional_details: String,
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_owned())
}

/// Age range and topic must be catalog values; blank optional fields are
/// left out of the request.
pub fn validate_generate_input(form: &GenerateForm) -> Result<GenerateTaleRequest, GenerateErrors> {
    let mut errors = GenerateErrors::default();
    if form.age_range.is_empty() {
        errors.age_range = Some("Age range is required");
    } else if !is_age_range(&form.age_range) {
        errors.age_range = Some("Select one of the listed age ranges");
    }
    if form.topic.is_empty() {
        errors.topic = Some("Topic is required");
    } else if !is_topic(&form.topic) {
        errors.topic = Some("Select one of the listed topics");
    }
    if errors != GenerateErrors::default() {
        return Err(errors);
    }
    Ok(GenerateTaleRequest {
        age_range: form.age_range.clone(),
        topic: form.topic.clone(),
        main_character: optional(&form.main_character),
        setting: optional(&form.setting),
        additional_details: optional(&form.additional_details),
    })
}

#[component]
pub fn GeneratePage() -> impl IntoView {
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
                <main class="app-shell__main generate-page">
                    <a class="generate-page__back" href="/dashboard">"Back to dashboard"</a>
                    <h1>"Create a New Tale"</h1>
                    <GenerateWorkspace/>
                </main>
            </div>
        </Show>
    }
}

#[component]
fn GenerateWorkspace() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let go = deferred_navigate();

    let form = RwSignal::new(GenerateForm::default());
    let errors = RwSignal::new(GenerateErrors::default());
    let generating = RwSignal::new(false);
    let saving = RwSignal::new(false);
    let preview = RwSignal::new(None::<Tale>);

    let on_generate = {
        let session = session.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if generating.get() {
                return;
            }
            let request = match validate_generate_input(&form.get()) {
                Ok(request) => request,
                Err(found) => {
                    errors.set(found);
                    return;
                }
            };
            errors.set(GenerateErrors::default());
            generating.set(true);
            preview.set(None);

            #[cfg(feature = "hydrate")]
            {
                let session = session.clone();
                leptos::task::spawn_local(async move {
                    let token = session.token().unwrap_or_default();
                    match crate::net::api::generate_tale(&token, &request).await {
                        Ok(tale) => {
                            preview.set(Some(tale));
                            crate::util::notify::notify_success(toasts, "Tale generated successfully!");
                        }
                        Err(e) => {
                            log::error!("tale generation failed: {e}");
                            if !crate::util::auth::expire_on_unauthorized(&session, &e) {
                                crate::util::notify::notify_error(
                                    toasts,
                                    e.message_or("Failed to generate tale. Please try again."),
                                );
                            }
                        }
                    }
                    generating.set(false);
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&session, request, toasts);
                generating.set(false);
            }
        }
    };

    let on_save = Callback::new(move |()| {
        let Some(tale) = preview.get_untracked() else {
            return;
        };
        if saving.get_untracked() {
            return;
        }
        saving.set(true);

        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            leptos::task::spawn_local(async move {
                let token = session.token().unwrap_or_default();
                let body = crate::net::types::CreateTaleRequest::private_copy(&tale);
                match crate::net::api::save_tale(&token, &body).await {
                    Ok(()) => {
                        crate::util::notify::notify_success(toasts, "Tale saved to your collection!");
                        go.set(Some("/dashboard".to_owned()));
                    }
                    Err(e) => {
                        log::error!("saving tale failed: {e}");
                        if !crate::util::auth::expire_on_unauthorized(&session, &e) {
                            crate::util::notify::notify_error(toasts, "Failed to save tale. Please try again.");
                        }
                    }
                }
                saving.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session, tale, go);
            saving.set(false);
        }
    });

    let on_generate_another = move |_| preview.set(None);

    let age_options = AGE_RANGES
        .iter()
        .map(|(value, label)| view! { <option value=*value>{*label}</option> })
        .collect::<Vec<_>>();
    let topic_options = TOPICS
        .iter()
        .map(|(value, label)| view! { <option value=*value>{*label}</option> })
        .collect::<Vec<_>>();

    view! {
        <form class="generate-form" on:submit=on_generate>
            <label class="generate-form__label">
                "Age range"
                <select
                    class="generate-form__select"
                    prop:value=move || form.get().age_range
                    on:change=move |ev| form.update(|f| f.age_range = event_target_value(&ev))
                >
                    <option value="">"Select an age range"</option>
                    {age_options}
                </select>
            </label>
            <Show when=move || errors.get().age_range.is_some()>
                <p class="generate-form__error">{move || errors.get().age_range.unwrap_or_default()}</p>
            </Show>
            <label class="generate-form__label">
                "Topic"
                <select
                    class="generate-form__select"
                    prop:value=move || form.get().topic
                    on:change=move |ev| form.update(|f| f.topic = event_target_value(&ev))
                >
                    <option value="">"Select a topic"</option>
                    {topic_options}
                </select>
            </label>
            <Show when=move || errors.get().topic.is_some()>
                <p class="generate-form__error">{move || errors.get().topic.unwrap_or_default()}</p>
            </Show>
            <label class="generate-form__label">
                "Main character (optional)"
                <input
                    class="generate-form__input"
                    type="text"
                    placeholder="e.g., a brave little fox named Max"
                    prop:value=move || form.get().main_character
                    on:input=move |ev| form.update(|f| f.main_character = event_target_value(&ev))
                />
            </label>
            <label class="generate-form__label">
                "Setting (optional)"
                <input
                    class="generate-form__input"
                    type="text"
                    placeholder="e.g., an enchanted forest"
                    prop:value=move || form.get().setting
                    on:input=move |ev| form.update(|f| f.setting = event_target_value(&ev))
                />
            </label>
            <label class="generate-form__label">
                "Additional details (optional)"
                <textarea
                    class="generate-form__textarea"
                    rows="3"
                    prop:value=move || form.get().additional_details
                    on:input=move |ev| form.update(|f| f.additional_details = event_target_value(&ev))
                ></textarea>
            </label>
            <button class="btn btn--primary" type="submit" disabled=move || generating.get()>
                {move || if generating.get() { "Generating..." } else { "Generate Tale" }}
            </button>
        </form>

        <Show when=move || preview.get().is_some()>
            <section class="tale-preview">
                {move || {
                    preview
                        .get()
                        .map(|tale| {
                            let body = paragraphs(&tale.content)
                                .into_iter()
                                .map(|p| view! { <p>{p}</p> })
                                .collect::<Vec<_>>();
                            view! {
                                <h2 class="tale-preview__title">{tale.title.clone()}</h2>
                                <div class="tale-preview__tags">
                                    <span class="tag tag--age">{age_facet_label(&tale.age_range)}</span>
                                    <span class="tag tag--topic">{capitalize(&tale.topic)}</span>
                                </div>
                                <div class="tale-preview__body">{body}</div>
                            }
                        })
                }}
                <div class="tale-preview__actions">
                    <button class="btn" on:click=on_generate_another>
                        "Generate Another"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| on_save.run(()) disabled=move || saving.get()>
                        {move || if saving.get() { "Saving..." } else { "Save Tale" }}
                    </button>
                </div>
            </section>
        </Show>
    }
}
