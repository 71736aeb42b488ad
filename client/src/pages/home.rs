//! Landing page.

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::session::context::use_auth;

const STEPS: &[(&str, &str)] = &[
    (
        "Customize Your Tale",
        "Select your child's age, preferred topics, characters, and settings to create a perfectly tailored story.",
    ),
    ("Generate Instantly", "Our AI crafts a unique, engaging story in seconds based on your specifications."),
    ("Save and Share", "Keep favorites in your collection and share the best ones with the community."),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();

    let steps = STEPS
        .iter()
        .map(|(title, body)| {
            view! {
                <div class="feature-card">
                    <h3>{*title}</h3>
                    <p>{*body}</p>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <Navbar/>
        <main class="home-page">
            <section class="home-page__hero">
                <h1>"Create Magical Tales for Children with AI"</h1>
                <p class="home-page__lede">
                    "Craft personalized stories tailored to your child's age, interests, and imagination."
                </p>
                <div class="home-page__actions">
                    <Show
                        when=move || auth.get().is_authenticated()
                        fallback=|| {
                            view! {
                                <a class="btn btn--primary" href="/register">"Get Started"</a>
                                <a class="btn" href="/login">"Sign In"</a>
                            }
                        }
                    >
                        <a class="btn btn--primary" href="/generate">"Create Your Tale"</a>
                        <a class="btn" href="/dashboard">"Go to Dashboard"</a>
                    </Show>
                    <a class="btn btn--link" href="/public-tales">"Browse Public Tales"</a>
                </div>
            </section>
            <section class="home-page__features">
                <h2>"How Tale Weaver Works"</h2>
                <div class="home-page__feature-grid">{steps}</div>
            </section>
        </main>
        <Footer/>
    }
}
