//! Login page: email and password against the tales API.
//!
//! SYSTEM CONTEXT
//! ==============
//! A successful sign-in hands the returned token to the session manager and
//! moves to `/dashboard`. Already signed-in visitors are sent there directly.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::net::types::LoginRequest;
use crate::session::context::{use_auth, use_session};
#[cfg(feature = "hydrate")]
use crate::util::auth::adopt_token;
use crate::util::nav::deferred_navigate;
use crate::util::validate::check_email;

/// Per-field messages for the login form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

/// Check the form and build the request body.
pub fn validate_login_input(email: &str, password: &str) -> Result<LoginRequest, LoginErrors> {
    let mut errors = LoginErrors::default();
    let email = match check_email(email) {
        Ok(email) => Some(email),
        Err(msg) => {
            errors.email = Some(msg);
            None
        }
    };
    if password.is_empty() {
        errors.password = Some("Password is required");
    }
    match email {
        Some(email) if errors.password.is_none() => Ok(LoginRequest { email, password: password.to_owned() }),
        _ => Err(errors),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let session = use_session();
    let toasts = crate::util::notify::use_toasts();
    let go = deferred_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(LoginErrors::default());
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
        let request = match validate_login_input(&email.get(), &password.get()) {
            Ok(request) => request,
            Err(found) => {
                errors.set(found);
                return;
            }
        };
        errors.set(LoginErrors::default());
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            leptos::task::spawn_local(async move {
                let outcome = match crate::net::api::login(&request.email, &request.password).await {
                    Ok(token) => adopt_token(&session, &token),
                    Err(e) => Err(e.message_or("Invalid email or password")),
                };
                match outcome {
                    Ok(()) => {
                        crate::util::notify::notify_success(toasts, "Login successful!");
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

    view! {
        <Navbar/>
        <div class="auth-page">
            <div class="auth-card">
                <a class="auth-card__back" href="/">"Back to home"</a>
                <h1>"Sign in to your account"</h1>
                <p class="auth-card__subtitle">
                    "Don't have an account? "
                    <a href="/register">"Sign up"</a>
                </p>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Email address"
                        <input
                            class="auth-input"
                            class:auth-input--invalid=move || errors.get().email.is_some()
                            type="email"
                            autocomplete="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || errors.get().email.is_some()>
                        <p class="auth-form__error">{move || errors.get().email.unwrap_or_default()}</p>
                    </Show>
                    <label class="auth-form__label">
                        "Password"
                        <input
                            class="auth-input"
                            class:auth-input--invalid=move || errors.get().password.is_some()
                            type="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || errors.get().password.is_some()>
                        <p class="auth-form__error">{move || errors.get().password.unwrap_or_default()}</p>
                    </Show>
                    <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
