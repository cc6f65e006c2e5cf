use leptos::prelude::*;
use leptos::task::spawn_local;

use super::card::EventCard;
use super::favorite::AddFavoriteButton;
use crate::domain::events::EventStore;
use crate::shared::components::skeleton::Skeleton;

/// Landing-page section listing the public events, with inline error and a
/// manual retry control. A failed refresh keeps showing the stale list.
#[component]
pub fn UpcomingEventsSection() -> impl IntoView {
    let store = expect_context::<EventStore>();

    {
        let store = store.clone();
        spawn_local(async move {
            store.fetch_events().await;
        });
    }

    let refresh = {
        let store = store.clone();
        move |_| {
            let store = store.clone();
            spawn_local(async move {
                store.fetch_events().await;
            });
        }
    };

    let events = store.events;
    let loading = store.loading;
    let error = store.error;

    view! {
        <section class="upcoming-events">
            <h2 class="section-title">"Upcoming events"</h2>

            <Show when=move || error.get().is_some()>
                <div class="error-banner">
                    <p>{move || error.get().unwrap_or_default()}</p>
                    <button class="button" on:click=refresh.clone()>"Retry"</button>
                </div>
            </Show>

            <Show
                when=move || !loading.get()
                fallback=|| {
                    view! {
                        <div class="card-grid">
                            <Skeleton class="event-card" />
                            <Skeleton class="event-card" />
                            <Skeleton class="event-card" />
                        </div>
                    }
                }
            >
                <Show
                    when=move || !events.get().is_empty()
                    fallback=|| view! { <p class="empty-state">"No events yet. Be the first to create one!"</p> }
                >
                    <div class="card-grid">
                        <For
                            each=move || events.get()
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
        </section>
    }
}
