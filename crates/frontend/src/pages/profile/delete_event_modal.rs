use contracts::events::Event;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::events::EventStore;
use crate::shared::components::Modal;
use crate::system::auth::AuthStore;

/// Confirmation dialog for deleting an owned event. Stays open when the
/// deletion fails so the error is visible next to the buttons.
#[component]
pub fn DeleteEventModal(
    event: Signal<Option<Event>>,
    #[prop(into)] open: Signal<bool>,
    on_close: Callback<()>,
) -> impl IntoView {
    let store = expect_context::<EventStore>();
    let auth = expect_context::<AuthStore>();

    let deleting = store.loading;
    let error = store.error;

    let on_confirm = {
        let store = store.clone();
        let auth = auth.clone();
        move |_| {
            let Some(event) = event.get_untracked() else {
                return;
            };
            let Some(token) = auth.token.get_untracked() else {
                return;
            };

            let store = store.clone();
            spawn_local(async move {
                if store.delete_event(&event.id, &token).await.is_ok() {
                    on_close.run(());
                }
            });
        }
    };

    view! {
        <Modal open=open on_close=on_close title="Delete event">
            <p>
                "This will permanently delete "
                <strong>{move || event.get().map(|e| e.title).unwrap_or_default()}</strong>
                ". This cannot be undone."
            </p>

            <Show when=move || error.get().is_some()>
                <p class="error-banner">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <div class="modal__actions">
                <button class="button" on:click=move |_| on_close.run(())>
                    "Cancel"
                </button>
                <button
                    class="button button--danger"
                    disabled=move || deleting.get()
                    on:click=on_confirm.clone()
                >
                    {move || if deleting.get() { "Deleting..." } else { "Delete" }}
                </button>
            </div>
        </Modal>
    }
}
