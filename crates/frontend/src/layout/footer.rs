use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p>"evently — find something to do."</p>
            <nav class="site-footer__nav">
                <a href="/explore">"Explore"</a>
                <a href="/events/create">"Create event"</a>
            </nav>
        </footer>
    }
}
