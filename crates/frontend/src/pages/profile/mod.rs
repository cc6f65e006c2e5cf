pub mod delete_event_modal;
pub mod edit_event_modal;
pub mod events_tab;
pub mod favorites_tab;
pub mod overview_tab;
pub mod settings_tab;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::domain::events::EventStore;
use crate::shared::components::ProfileSkeleton;
use crate::system::auth::AuthStore;
use events_tab::EventsTab;
use favorites_tab::FavoritesTab;
use overview_tab::OverviewTab;
use settings_tab::SettingsTab;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ProfileTab {
    #[default]
    Overview,
    Events,
    Favorites,
    Settings,
}

impl ProfileTab {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileTab::Overview => "overview",
            ProfileTab::Events => "events",
            ProfileTab::Favorites => "favorites",
            ProfileTab::Settings => "settings",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "events" => ProfileTab::Events,
            "favorites" => ProfileTab::Favorites,
            "settings" => ProfileTab::Settings,
            _ => ProfileTab::Overview,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProfileTab::Overview => "Overview",
            ProfileTab::Events => "My events",
            ProfileTab::Favorites => "Favorites",
            ProfileTab::Settings => "Settings",
        }
    }

    pub fn all() -> [ProfileTab; 4] {
        [
            ProfileTab::Overview,
            ProfileTab::Events,
            ProfileTab::Favorites,
            ProfileTab::Settings,
        ]
    }
}

/// Active tab from the `?tab=` query parameter.
fn tab_from_query() -> ProfileTab {
    #[cfg(target_arch = "wasm32")]
    {
        let search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: std::collections::HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        params
            .get("tab")
            .map(|tab| ProfileTab::from_str(tab))
            .unwrap_or_default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        ProfileTab::default()
    }
}

/// Mirror the active tab into the query string without a navigation.
fn write_tab_to_query(tab: ProfileTab) {
    #[cfg(target_arch = "wasm32")]
    {
        let query_string = serde_qs::to_string(&std::collections::HashMap::from([(
            "tab".to_string(),
            tab.as_str().to_string(),
        )]))
        .unwrap_or_default();
        let new_url = format!("?{}", query_string);

        let current_search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();

        if current_search != new_url {
            if let Some(w) = web_sys::window() {
                if let Ok(history) = w.history() {
                    let _ = history.replace_state_with_url(
                        &wasm_bindgen::JsValue::NULL,
                        "",
                        Some(&new_url),
                    );
                }
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = tab;
}

/// Guarded profile page: account header, tab navigation with the active tab
/// mirrored in the URL, logout.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<AuthStore>();
    let events = expect_context::<EventStore>();
    let navigate = use_navigate();

    {
        let auth = auth.clone();
        spawn_local(async move {
            auth.check_auth().await;
        });
    }

    let active = RwSignal::new(tab_from_query());
    Effect::new(move |_| write_tab_to_query(active.get()));

    let user = auth.user;
    let loading = auth.loading;
    let is_authenticated = auth.is_authenticated;

    let avatar_initial = move || {
        user.get()
            .map(|u| {
                [u.username, u.full_name, u.email]
                    .into_iter()
                    .find(|s| !s.is_empty())
                    .and_then(|s| s.chars().next())
                    .map(|c| c.to_uppercase().to_string())
                    .unwrap_or_else(|| "U".to_string())
            })
            .unwrap_or_else(|| "U".to_string())
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
        <main class="page page--profile">
            <Show
                when=move || !(loading.get() || (is_authenticated.get() && user.get().is_none()))
                fallback=|| view! { <ProfileSkeleton /> }
            >
                <Show
                    clone:on_logout
                    when=move || is_authenticated.get()
                    fallback=|| {
                        view! {
                            <div class="auth-card">
                                <h1 class="page__title">"Your profile"</h1>
                                <p>"You must be signed in to see your profile."</p>
                                <a href="/sign-in">"Sign in"</a>
                            </div>
                        }
                    }
                >
                    <div class="profile-card">
                        <div class="profile-card__header">
                            <div class="profile-card__avatar">{avatar_initial}</div>
                            <div>
                                <h1 class="page__title">"Your profile"</h1>
                                <p class="profile-card__subtitle">"Account information and activity"</p>
                            </div>
                            <button class="button button--danger" on:click=on_logout.clone()>
                                "Log out"
                            </button>
                        </div>

                        <nav class="tab-bar">
                            {ProfileTab::all()
                                .into_iter()
                                .map(|tab| {
                                    view! {
                                        <button
                                            class=move || {
                                                if active.get() == tab {
                                                    "tab-bar__item tab-bar__item--active"
                                                } else {
                                                    "tab-bar__item"
                                                }
                                            }
                                            on:click=move |_| active.set(tab)
                                        >
                                            {tab.label()}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </nav>

                        <div class="tab-content">
                            {move || match active.get() {
                                ProfileTab::Overview => view! { <OverviewTab /> }.into_any(),
                                ProfileTab::Events => view! { <EventsTab /> }.into_any(),
                                ProfileTab::Favorites => view! { <FavoritesTab /> }.into_any(),
                                ProfileTab::Settings => view! { <SettingsTab /> }.into_any(),
                            }}
                        </div>
                    </div>
                </Show>
            </Show>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_round_trip() {
        for tab in ProfileTab::all() {
            assert_eq!(ProfileTab::from_str(tab.as_str()), tab);
        }
    }

    #[test]
    fn test_unknown_tab_falls_back_to_overview() {
        assert_eq!(ProfileTab::from_str("bogus"), ProfileTab::Overview);
    }
}
