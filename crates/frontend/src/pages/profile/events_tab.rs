use contracts::events::Event;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::delete_event_modal::DeleteEventModal;
use super::edit_event_modal::EditEventModal;
use crate::domain::events::EventStore;
use crate::shared::components::Skeleton;
use crate::shared::date_utils::format_date;
use crate::system::auth::AuthStore;

/// The signed-in user's own events, with refresh, edit and delete.
#[component]
pub fn EventsTab() -> impl IntoView {
    let store = expect_context::<EventStore>();
    let auth = expect_context::<AuthStore>();

    {
        let store = store.clone();
        let auth = auth.clone();
        spawn_local(async move {
            if let Some(token) = auth.token.get_untracked() {
                store.fetch_my_events(&token).await;
            }
        });
    }

    let refresh = {
        let store = store.clone();
        let auth = auth.clone();
        move |_| {
            let Some(token) = auth.token.get_untracked() else {
                return;
            };
            let store = store.clone();
            spawn_local(async move {
                store.fetch_my_events(&token).await;
            });
        }
    };

    let my_events = store.my_events;
    let loading = store.my_events_loading;
    let error = store.error;

    let selected = RwSignal::new(Option::<Event>::None);
    let edit_open = RwSignal::new(false);
    let delete_open = RwSignal::new(false);

    view! {
        <section class="events-tab">
            <div class="events-tab__header">
                <h3 class="section-title">
                    "My events (" {move || my_events.get().len()} ")"
                </h3>
                <button
                    class="button"
                    disabled=move || loading.get()
                    on:click=refresh.clone()
                >
                    {move || if loading.get() { "Loading..." } else { "Refresh" }}
                </button>
            </div>

            <Show when=move || error.get().is_some()>
                <p class="error-banner">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <Show
                when=move || !loading.get()
                fallback=|| {
                    view! {
                        <Skeleton class="skeleton--block" />
                        <Skeleton class="skeleton--block" />
                        <Skeleton class="skeleton--block" />
                    }
                }
            >
                <Show
                    when=move || !my_events.get().is_empty()
                    fallback=|| view! { <p class="empty-state">"You have not created any events yet."</p> }
                >
                    <ul class="event-list">
                        <For
                            each=move || my_events.get()
                            key=|event| event.id.clone()
                            children=move |event| {
                                let edit_target = event.clone();
                                let delete_target = event.clone();
                                view! {
                                    <li class="event-list__item">
                                        <div class="event-list__summary">
                                            <h4>{event.title.clone()}</h4>
                                            <p>{event.description.clone()}</p>
                                            <span class="event-list__date">{format_date(&event.date)}</span>
                                        </div>
                                        <div class="event-list__actions">
                                            <button
                                                class="button"
                                                on:click=move |_| {
                                                    selected.set(Some(edit_target.clone()));
                                                    edit_open.set(true);
                                                }
                                            >
                                                "Edit"
                                            </button>
                                            <button
                                                class="button button--danger"
                                                on:click=move |_| {
                                                    selected.set(Some(delete_target.clone()));
                                                    delete_open.set(true);
                                                }
                                            >
                                                "Delete"
                                            </button>
                                        </div>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </Show>
            </Show>

            <EditEventModal
                event=selected.into()
                open=edit_open
                on_close=Callback::new(move |_| edit_open.set(false))
            />
            <DeleteEventModal
                event=selected.into()
                open=delete_open
                on_close=Callback::new(move |_| delete_open.set(false))
            />
        </section>
    }
}
