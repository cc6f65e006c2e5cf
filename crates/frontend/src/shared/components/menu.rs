use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::system::auth::AuthStore;

/// Mobile navigation dialog. Same open/close pattern as [`super::Modal`],
/// specialized for the nav link list; any link click closes it.
#[component]
pub fn MobileMenu(#[prop(into)] open: Signal<bool>, on_close: Callback<()>) -> impl IntoView {
    let auth = expect_context::<AuthStore>();
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

    let close = move |_| on_close.run(());

    view! {
        <dialog
            node_ref=dialog_ref
            class="mobile-menu"
            on:click=on_backdrop_click
            on:close=move |_| on_close.run(())
        >
            <nav class="mobile-menu__nav">
                <a href="/" on:click=close>"Home"</a>
                <a href="/explore" on:click=close>"Explore"</a>
                <Show
                    when=move || auth.is_authenticated.get()
                    fallback=move || {
                        view! {
                            <a href="/sign-in" on:click=close>"Sign in"</a>
                            <a href="/sign-up" on:click=close>"Sign up"</a>
                        }
                    }
                >
                    <a href="/events/create" on:click=close>"Create event"</a>
                    <a href="/profile" on:click=close>"Profile"</a>
                </Show>
            </nav>
            <button class="mobile-menu__close" aria-label="Close menu" on:click=close>
                "\u{00d7}"
            </button>
        </dialog>
    }
}
