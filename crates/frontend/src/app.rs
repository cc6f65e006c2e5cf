use crate::domain::events::EventStore;
use crate::domain::stats::StatsStore;
use crate::routes::routes::AppRoutes;
use crate::shared::api_utils::api_base;
use crate::shared::theme::ThemeStore;
use crate::system::auth::AuthStore;
use client::ApiClient;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let api = ApiClient::new(api_base());

    // Stores are constructed here, once, and handed to the whole tree via
    // context. Components read signals and call actions; nothing else
    // mutates store state.
    let theme = ThemeStore::new();
    theme.install();
    provide_context(theme);

    let auth = AuthStore::new(api.clone());
    auth.bootstrap();
    provide_context(auth.clone());

    provide_context(EventStore::new(api.clone(), auth));
    provide_context(StatsStore::new(api.clone()));

    // The file upload in the event editor is the one network call that goes
    // past the stores.
    provide_context(api);

    view! { <AppRoutes /> }
}
