use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Dialog-backed modal. The native `<dialog>` element is driven by the
/// `open` prop; Escape fires the element's `close` event, a click landing
/// on the dialog itself (outside the content box) is a backdrop click.
#[component]
pub fn Modal(
    #[prop(into)] open: Signal<bool>,
    on_close: Callback<()>,
    #[prop(optional, into)] title: Option<String>,
    children: Children,
) -> impl IntoView {
    let dialog_ref = NodeRef::<html::Dialog>::new();

    Effect::new(move |_| {
        let Some(dialog) = dialog_ref.get() else {
            return;
        };
        if open.get() {
            if !dialog.open() {
                let _ = dialog.show_modal();
            }
        } else if dialog.open() {
            dialog.close();
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
            class="modal"
            on:click=on_backdrop_click
            on:close=move |_| on_close.run(())
        >
            <div class="modal__header">
                {title.map(|title| view! { <h2 class="modal__title">{title}</h2> })}
                <button
                    class="modal__close"
                    aria-label="Close"
                    on:click=move |_| on_close.run(())
                >
                    "\u{00d7}"
                </button>
            </div>
            <div class="modal__body">{children()}</div>
        </dialog>
    }
}
