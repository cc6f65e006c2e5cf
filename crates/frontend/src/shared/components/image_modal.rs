use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn set_body_overflow(value: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let body = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body());
        if let Some(body) = body {
            let _ = body.style().set_property("overflow", value);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = value;
}

/// Full-screen image viewer on top of a native `<dialog>`. Locks page
/// scroll while open and restores it on close.
#[component]
pub fn ImageModal(
    #[prop(into)] image_url: String,
    #[prop(into)] image_alt: String,
    #[prop(into)] open: Signal<bool>,
    on_close: Callback<()>,
) -> impl IntoView {
    let dialog_ref = NodeRef::<html::Dialog>::new();
    let loaded = RwSignal::new(false);
    let failed = RwSignal::new(false);

    Effect::new(move |_| {
        let Some(dialog) = dialog_ref.get() else {
            return;
        };
        if open.get() {
            if !dialog.open() {
                let _ = dialog.show_modal();
            }
            set_body_overflow("hidden");
            loaded.set(false);
            failed.set(false);
        } else {
            if dialog.open() {
                dialog.close();
            }
            set_body_overflow("");
        }
    });

    let on_backdrop_click = move |ev: ev::MouseEvent| {
        let hit_backdrop = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
            .map(|element| element.node_name() == "DIALOG")
            .unwrap_or(false);
        if hit_backdrop {
            on_close.run(());
        }
    };

    view! {
        <dialog
            node_ref=dialog_ref
            class="image-modal"
            on:click=on_backdrop_click
            on:close=move |_| on_close.run(())
        >
            <button
                class="image-modal__close"
                aria-label="Close image"
                on:click=move |_| on_close.run(())
            >
                "\u{00d7}"
            </button>
            <Show when=move || !loaded.get() && !failed.get()>
                <div class="image-modal__spinner" />
            </Show>
            <Show when=move || failed.get()>
                <p class="image-modal__error">"The image could not be loaded."</p>
            </Show>
            <img
                class="image-modal__image"
                src=image_url.clone()
                alt=image_alt.clone()
                on:load=move |_| loaded.set(true)
                on:error=move |_| failed.set(true)
            />
        </dialog>
    }
}
