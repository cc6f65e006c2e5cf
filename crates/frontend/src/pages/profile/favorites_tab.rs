use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::events::ui::favorite::RemoveFavoriteButton;
use crate::domain::events::ui::EventCard;
use crate::domain::events::EventStore;
use crate::shared::components::Skeleton;
use crate::system::auth::AuthStore;

/// The events the signed-in user marked as favorites.
#[component]
pub fn FavoritesTab() -> impl IntoView {
    let store = expect_context::<EventStore>();
    let auth = expect_context::<AuthStore>();

    {
        let store = store.clone();
        let auth = auth.clone();
        spawn_local(async move {
            if let Some(token) = auth.token.get_untracked() {
                store.fetch_favorite_events(&token).await;
            }
        });
    }

    let favorites = store.favorite_events;
    let loading = store.favorites_loading;
    let error = store.error;

    view! {
        <section class="favorites-tab">
            <h3 class="section-title">
                "Favorites (" {move || favorites.get().len()} ")"
            </h3>

            <Show when=move || error.get().is_some()>
                <p class="error-banner">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <Show
                when=move || !loading.get()
                fallback=|| {
                    view! {
                        <Skeleton class="skeleton--block" />
                        <Skeleton class="skeleton--block" />
                    }
                }
            >
                <Show
                    when=move || !favorites.get().is_empty()
                    fallback=|| view! { <p class="empty-state">"Nothing here yet — explore events and mark some as favorites."</p> }
                >
                    <div class="card-grid">
                        <For
                            each=move || favorites.get()
                            key=|event| event.id.clone()
                            children=move |event| {
                                let event_id = event.id.clone();
                                view! {
                                    <EventCard event=event>
                                        <RemoveFavoriteButton event_id=event_id />
                                    </EventCard>
                                }
                            }
                        />
                    </div>
                </Show>
            </Show>
        </section>
    }
}
