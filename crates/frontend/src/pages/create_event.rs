use contracts::events::{EventDraft, Visibility};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::events::EventStore;
use crate::shared::components::ProfileSkeleton;
use crate::shared::date_utils::today_iso;
use crate::system::auth::AuthStore;

/// Guarded page: re-validates the session on entry, prompts for sign-in
/// when there is none, otherwise shows the creation form. On success the
/// fields reset and a confirmation shows; on failure the store error is
/// rendered and the input is kept.
#[component]
pub fn CreateEventPage() -> impl IntoView {
    let auth = expect_context::<AuthStore>();
    let events = expect_context::<EventStore>();

    {
        let auth = auth.clone();
        spawn_local(async move {
            auth.check_auth().await;
        });
    }

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let date = RwSignal::new(String::new());
    let visibility = RwSignal::new(String::from("public"));
    let success = RwSignal::new(Option::<String>::None);

    let auth_loading = auth.loading;
    let is_authenticated = auth.is_authenticated;
    let event_loading = events.loading;
    let event_error = events.error;

    let loading = move || auth_loading.get() || event_loading.get();

    let on_submit = {
        let auth = auth.clone();
        let events = events.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            success.set(None);

            let Some(token) = auth.token.get_untracked() else {
                return;
            };

            let draft = EventDraft {
                title: title.get_untracked(),
                description: description.get_untracked(),
                date: date.get_untracked(),
                visibility: Visibility::from_str(&visibility.get_untracked()),
                ..Default::default()
            };

            let events = events.clone();
            spawn_local(async move {
                if events.create_event(draft, &token).await.is_ok() {
                    success.set(Some("Your event has been created.".to_string()));
                    title.set(String::new());
                    description.set(String::new());
                    date.set(String::new());
                    visibility.set(String::from("public"));
                }
            });
        }
    };

    view! {
        <main class="page page--create-event">
            <Show
                when=move || !loading()
                fallback=|| view! { <ProfileSkeleton /> }
            >
                <Show
                    clone:on_submit
                    when=move || is_authenticated.get()
                    fallback=|| {
                        view! {
                            <div class="auth-card">
                                <h1 class="page__title">"Create an event"</h1>
                                <p>"You must be signed in to create events."</p>
                                <a href="/sign-in">"Sign in"</a>
                            </div>
                        }
                    }
                >
                    <div class="form-card">
                        <h1 class="page__title">"Create an event"</h1>

                        <form on:submit=on_submit.clone()>
                            <div class="form-group">
                                <label for="title">"Title"</label>
                                <input
                                    type="text"
                                    id="title"
                                    required
                                    prop:value=move || title.get()
                                    on:input=move |ev| title.set(event_target_value(&ev))
                                />
                            </div>

                            <div class="form-group">
                                <label for="description">"Description"</label>
                                <textarea
                                    id="description"
                                    required
                                    rows=4
                                    prop:value=move || description.get()
                                    on:input=move |ev| description.set(event_target_value(&ev))
                                ></textarea>
                            </div>

                            <div class="form-group">
                                <label for="date">"Date"</label>
                                <input
                                    type="date"
                                    id="date"
                                    required
                                    min=today_iso()
                                    prop:value=move || date.get()
                                    on:input=move |ev| date.set(event_target_value(&ev))
                                />
                            </div>

                            <div class="form-group">
                                <label for="visibility">"Visibility"</label>
                                <select
                                    id="visibility"
                                    prop:value=move || visibility.get()
                                    on:change=move |ev| visibility.set(event_target_value(&ev))
                                >
                                    <option value="public">"Public"</option>
                                    <option value="private">"Private"</option>
                                    <option value="only_me">"Only me"</option>
                                </select>
                            </div>

                            <button
                                type="submit"
                                class="button button--primary"
                                disabled=move || event_loading.get()
                            >
                                {move || if event_loading.get() { "Creating..." } else { "Create event" }}
                            </button>

                            <Show when=move || event_error.get().is_some()>
                                <p class="error-banner">{move || event_error.get().unwrap_or_default()}</p>
                            </Show>
                            <Show when=move || success.get().is_some()>
                                <p class="success-banner">{move || success.get().unwrap_or_default()}</p>
                            </Show>
                        </form>
                    </div>
                </Show>
            </Show>
        </main>
    }
}
