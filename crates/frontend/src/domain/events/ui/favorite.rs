use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::events::EventStore;
use crate::system::auth::AuthStore;

/// Mark an event as favorite. Hidden while signed out.
#[component]
pub fn AddFavoriteButton(event_id: String) -> impl IntoView {
    let events = expect_context::<EventStore>();
    let auth = expect_context::<AuthStore>();
    let busy = RwSignal::new(false);

    let on_click = move |_| {
        let Some(token) = auth.token.get_untracked() else {
            return;
        };
        let events = events.clone();
        let event_id = event_id.clone();
        busy.set(true);
        spawn_local(async move {
            // Failures surface through the store error banner.
            let _ = events.add_favorite(&event_id, &token).await;
            busy.set(false);
        });
    };

    view! {
        <Show when=move || auth.is_authenticated.get()>
            <button
                class="button button--ghost"
                disabled=move || busy.get()
                on:click=on_click.clone()
            >
                "\u{2661} Favorite"
            </button>
        </Show>
    }
}

/// Drop an event from the favorites list.
#[component]
pub fn RemoveFavoriteButton(event_id: String) -> impl IntoView {
    let events = expect_context::<EventStore>();
    let auth = expect_context::<AuthStore>();
    let busy = RwSignal::new(false);

    let on_click = move |_| {
        let Some(token) = auth.token.get_untracked() else {
            return;
        };
        let events = events.clone();
        let event_id = event_id.clone();
        busy.set(true);
        spawn_local(async move {
            let _ = events.remove_favorite(&event_id, &token).await;
            busy.set(false);
        });
    };

    view! {
        <button
            class="button button--ghost"
            disabled=move || busy.get()
            on:click=on_click
        >
            "\u{2665} Remove"
        </button>
    }
}
