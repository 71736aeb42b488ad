use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().format("%Y").to_string();
    view! {
        <footer class="site-footer">
            <a class="site-footer__brand" href="/">"Tale Weaver"</a>
            <span class="site-footer__tagline">"AI-crafted bedtime stories for curious kids."</span>
            <span class="site-footer__copy">{format!("© {year} Tale Weaver")}</span>
        </footer>
    }
}
