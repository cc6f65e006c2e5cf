use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::domain::events::EventStore;
use crate::shared::theme::{Theme, ThemeStore};
use crate::system::auth::AuthStore;

/// Session details, theme preference and logout.
#[component]
pub fn SettingsTab() -> impl IntoView {
    let auth = expect_context::<AuthStore>();
    let events = expect_context::<EventStore>();
    let theme = expect_context::<ThemeStore>();
    let navigate = use_navigate();

    let token = auth.token;
    let is_authenticated = auth.is_authenticated;

    let token_preview = move || {
        token
            .get()
            .map(|t| {
                if t.len() > 30 {
                    format!("{}...", &t[..30])
                } else {
                    t
                }
            })
            .unwrap_or_else(|| "not available".to_string())
    };

    let on_logout = {
        let auth = auth.clone();
        let events = events.clone();
        move |_| {
            auth.logout();
            events.clear_my_events();
            navigate("/", Default::default());
        }
    };

    view! {
        <section class="settings-tab">
            <h3 class="section-title">"Session"</h3>
            <div class="field-grid">
                <div class="field">
                    <span class="field__label">"Token"</span>
                    <code class="field__value field__value--mono">{token_preview}</code>
                </div>
                <div class="field">
                    <span class="field__label">"Status"</span>
                    <span class="field__value">
                        <span class=move || {
                            if is_authenticated.get() {
                                "status-dot status-dot--on"
                            } else {
                                "status-dot status-dot--off"
                            }
                        }></span>
                        {move || if is_authenticated.get() { "Authenticated" } else { "Not authenticated" }}
                    </span>
                </div>
            </div>

            <h3 class="section-title">"Preferences"</h3>
            <div class="field">
                <span class="field__label">"Dark theme"</span>
                <button class="button" on:click=move |_| theme.toggle()>
                    {move || match theme.theme.get() {
                        Theme::Dark => "On",
                        Theme::Light => "Off",
                    }}
                </button>
            </div>

            <h3 class="section-title">"Account"</h3>
            <button class="button button--danger" on:click=on_logout>
                "Log out"
            </button>
        </section>
    }
}
