use client::ApiClient;
use contracts::events::{Event, EventPatch, Visibility};
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::events::EventStore;
use crate::shared::components::Modal;
use crate::shared::date_utils::{date_input_value, today_iso};
use crate::system::auth::AuthStore;

#[cfg(target_arch = "wasm32")]
async fn read_file_bytes(file: &web_sys::File) -> Result<Vec<u8>, String> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| "Could not read the selected file".to_string())?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

#[cfg(not(target_arch = "wasm32"))]
async fn read_file_bytes(_file: &web_sys::File) -> Result<Vec<u8>, String> {
    Err("File reading is only available in the browser".to_string())
}

fn optional(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Edit form for an owned event. The image can be kept as a URL or replaced
/// by a file, which goes through the upload endpoint first; the stored URL
/// then travels with the regular update. The modal stays open when the
/// update fails.
#[component]
pub fn EditEventModal(
    event: Signal<Option<Event>>,
    #[prop(into)] open: Signal<bool>,
    on_close: Callback<()>,
) -> impl IntoView {
    let store = expect_context::<EventStore>();
    let auth = expect_context::<AuthStore>();
    let api = expect_context::<ApiClient>();

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let date = RwSignal::new(String::new());
    let visibility = RwSignal::new(String::from("public"));
    let image_source = RwSignal::new(String::from("url"));
    let image_url = RwSignal::new(String::new());
    let file_input_ref = NodeRef::<html::Input>::new();
    let upload_error = RwSignal::new(Option::<String>::None);

    // Preload the form whenever another event is selected.
    Effect::new(move |_| {
        if let Some(event) = event.get() {
            title.set(event.title);
            description.set(event.description);
            date.set(date_input_value(&event.date));
            visibility.set(event.visibility.as_str().to_string());
            image_url.set(event.image_url.unwrap_or_default());
            image_source.set(String::from("url"));
            upload_error.set(None);
            if let Some(input) = file_input_ref.get_untracked() {
                input.set_value("");
            }
        }
    });

    let saving = store.loading;
    let error = store.error;

    let on_submit = {
        let store = store.clone();
        let auth = auth.clone();
        let api = api.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            upload_error.set(None);

            let Some(event) = event.get_untracked() else {
                return;
            };
            let Some(token) = auth.token.get_untracked() else {
                return;
            };

            let store = store.clone();
            let api = api.clone();
            let file = file_input_ref
                .get_untracked()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            let use_file = image_source.get_untracked() == "file";

            spawn_local(async move {
                let mut final_image_url = optional(image_url.get_untracked());

                if use_file {
                    if let Some(file) = file {
                        let bytes = match read_file_bytes(&file).await {
                            Ok(bytes) => bytes,
                            Err(message) => {
                                upload_error.set(Some(message));
                                return;
                            }
                        };
                        match api.upload(&file.name(), &file.type_(), bytes, &token).await {
                            Ok(urls) => final_image_url = urls.into_iter().next(),
                            Err(e) => {
                                log::error!("image upload failed: {e}");
                                upload_error.set(Some(e.to_string()));
                                return;
                            }
                        }
                    }
                }

                let patch = EventPatch {
                    title: Some(title.get_untracked()),
                    description: Some(description.get_untracked()),
                    date: Some(date.get_untracked()),
                    visibility: Some(Visibility::from_str(&visibility.get_untracked())),
                    image_url: final_image_url,
                    ..Default::default()
                };

                if store.update_event(&event.id, patch, &token).await.is_ok() {
                    on_close.run(());
                }
            });
        }
    };

    view! {
        <Modal open=open on_close=on_close title="Edit event">
            <form on:submit=on_submit>
                <div class="form-group">
                    <label for="edit-title">"Title"</label>
                    <input
                        type="text"
                        id="edit-title"
                        required
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="edit-description">"Description"</label>
                    <textarea
                        id="edit-description"
                        required
                        rows=4
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </div>

                <div class="form-group">
                    <label for="edit-date">"Date"</label>
                    <input
                        type="date"
                        id="edit-date"
                        required
                        min=today_iso()
                        prop:value=move || date.get()
                        on:input=move |ev| date.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="edit-visibility">"Visibility"</label>
                    <select
                        id="edit-visibility"
                        prop:value=move || visibility.get()
                        on:change=move |ev| visibility.set(event_target_value(&ev))
                    >
                        <option value="public">"Public"</option>
                        <option value="private">"Private"</option>
                        <option value="only_me">"Only me"</option>
                    </select>
                </div>

                <div class="form-group">
                    <label for="edit-image-source">"Image"</label>
                    <select
                        id="edit-image-source"
                        prop:value=move || image_source.get()
                        on:change=move |ev| image_source.set(event_target_value(&ev))
                    >
                        <option value="url">"Use a URL"</option>
                        <option value="file">"Upload a file"</option>
                    </select>
                </div>

                <Show
                    when=move || image_source.get() == "file"
                    fallback=move || {
                        view! {
                            <div class="form-group">
                                <input
                                    type="url"
                                    placeholder="https://..."
                                    prop:value=move || image_url.get()
                                    on:input=move |ev| image_url.set(event_target_value(&ev))
                                />
                            </div>
                        }
                    }
                >
                    <div class="form-group">
                        <input type="file" accept="image/*" node_ref=file_input_ref />
                    </div>
                </Show>

                <button
                    type="submit"
                    class="button button--primary"
                    disabled=move || saving.get()
                >
                    {move || if saving.get() { "Saving..." } else { "Save changes" }}
                </button>

                <Show when=move || upload_error.get().is_some()>
                    <p class="error-banner">{move || upload_error.get().unwrap_or_default()}</p>
                </Show>
                <Show when=move || error.get().is_some()>
                    <p class="error-banner">{move || error.get().unwrap_or_default()}</p>
                </Show>
            </form>
        </Modal>
    }
}
