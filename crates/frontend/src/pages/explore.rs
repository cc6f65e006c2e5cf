use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::events::ui::EventCard;
use crate::domain::events::ui::favorite::AddFavoriteButton;
use crate::domain::events::EventStore;

/// Public event browser with a client-side title/description filter.
#[component]
pub fn ExplorePage() -> impl IntoView {
    let store = expect_context::<EventStore>();

    {
        let store = store.clone();
        spawn_local(async move {
            store.fetch_events().await;
        });
    }

    let search = RwSignal::new(String::new());
    let events = store.events;
    let loading = store.loading;
    let error = store.error;

    let filtered = Memo::new(move |_| {
        let needle = search.get().to_lowercase();
        events
            .get()
            .into_iter()
            .filter(|event| {
                event.title.to_lowercase().contains(&needle)
                    || event.description.to_lowercase().contains(&needle)
            })
            .collect::<Vec<_>>()
    });

    view! {
        <main class="page page--explore">
            <h1 class="page__title">"Explore events"</h1>

            <div class="search-box">
                <input
                    type="text"
                    placeholder="Search by title or description..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
            </div>

            <Show when=move || error.get().is_some()>
                <p class="error-banner">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="spinner" /> }
            >
                <Show
                    when=move || !filtered.get().is_empty()
                    fallback=|| view! { <p class="empty-state">"No events found."</p> }
                >
                    <div class="card-grid">
                        <For
                            each=move || filtered.get()
                            key=|event| event.id.clone()
                            children=move |event| {
                                let event_id = event.id.clone();
                                view! {
                                    <EventCard event=event>
                                        <AddFavoriteButton event_id=event_id />
                                    </EventCard>
                                }
                            }
                        />
                    </div>
                </Show>
            </Show>
        </main>
    }
}
