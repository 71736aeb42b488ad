//! Registration page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::net::types::RegisterRequest;
use crate::session::context::{use_auth, use_session};
#[cfg(feature = "hydrate")]
use crate::util::auth::adopt_token;
use crate::util::nav::deferred_navigate;
use crate::util::validate::{MIN_PASSWORD_CHARS, check_email};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
    pub confirm_password: Option<&'static str>,
}

impl RegisterErrors {
    fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Check the sign-up form and build the request body. The confirmation only
/// has to match; it is not sent.
pub fn validate_register_input(
    name: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<RegisterRequest, RegisterErrors> {
    let mut errors = RegisterErrors::default();

    let name = name.trim();
    if name.is_empty() {
        errors.name = Some("Name is required");
    }
    let email = check_email(email).unwrap_or_else(|msg| {
        errors.email = Some(msg);
        String::new()
    });
    if password.is_empty() {
        errors.password = Some("Password is required");
    } else if password.chars().count() < MIN_PASSWORD_CHARS {
        errors.password = Some("Password must be at least 6 characters");
    }
    if confirm_password.is_empty() {
        errors.confirm_password = Some("Please confirm your password");
    } else if confirm_password != password {
        errors.confirm_password = Some("Passwords do not match");
    }

    if errors.is_empty() {
        Ok(RegisterRequest { name: name.to_owned(), email, password: password.to_owned() })
    } else {
        Err(errors)
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();
    let session = use_session();
    let toasts = crate::util::notify::use_toasts();
    let go = deferred_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let errors = RwSignal::new(RegisterErrors::default());
    let busy = RwSignal::new(false);

    Effect::new(move || {
        if auth.get().is_authenticated() && !busy.get_untracked() {
            go.set(Some("/dashboard".to_owned()));
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_register_input(&name.get(), &email.get(), &password.get(), &confirm.get()) {
            Ok(request) => request,
            Err(found) => {
                errors.set(found);
                return;
            }
        };
        errors.set(RegisterErrors::default());
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            leptos::task::spawn_local(async move {
                let outcome =
                    match crate::net::api::register(&request.name, &request.email, &request.password).await {
                        Ok(token) => adopt_token(&session, &token),
                        Err(e) => Err(e.message_or("Registration failed. Please try again.")),
                    };
                match outcome {
                    Ok(()) => {
                        crate::util::notify::notify_success(toasts, "Registration successful!");
                        go.set(Some("/dashboard".to_owned()));
                    }
                    Err(message) => crate::util::notify::notify_error(toasts, message),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session, request, toasts);
            busy.set(false);
        }
    };

    let field = move |label: &'static str,
                      kind: &'static str,
                      autocomplete: &'static str,
                      value: RwSignal<String>,
                      error: fn(&RegisterErrors) -> Option<&'static str>| {
        view! {
            <label class="auth-form__label">
                {label}
                <input
                    class="auth-input"
                    class:auth-input--invalid=move || error(&errors.get()).is_some()
                    type=kind
                    autocomplete=autocomplete
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </label>
            <Show when=move || error(&errors.get()).is_some()>
                <p class="auth-form__error">{move || error(&errors.get()).unwrap_or_default()}</p>
            </Show>
        }
    };

    view! {
        <Navbar/>
        <div class="auth-page">
            <div class="auth-card">
                <a class="auth-card__back" href="/">"Back to home"</a>
                <h1>"Create your account"</h1>
                <p class="auth-card__subtitle">
                    "Already have an account? "
                    <a href="/login">"Sign in"</a>
                </p>
                <form class="auth-form" on:submit=on_submit>
                    {field("Full name", "text", "name", name, |e| e.name)}
                    {field("Email address", "email", "email", email, |e| e.email)}
                    {field("Password", "password", "new-password", password, |e| e.password)}
                    {field("Confirm password", "password", "new-password", confirm, |e| e.confirm_password)}
                    <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Create account" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
