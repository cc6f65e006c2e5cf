use leptos::prelude::*;

use crate::shared::components::MobileMenu;
use crate::shared::theme::ThemeToggle;
use crate::system::auth::AuthStore;

/// Top bar: brand link, desktop nav, theme toggle and the mobile menu
/// trigger. The link set follows the session state.
#[component]
pub fn Header() -> impl IntoView {
    let auth = expect_context::<AuthStore>();
    let menu_open = RwSignal::new(false);

    view! {
        <header class="site-header">
            <a class="site-header__brand" href="/">"evently"</a>

            <nav class="site-header__nav">
                <a href="/explore">"Explore"</a>
                <Show
                    when=move || auth.is_authenticated.get()
                    fallback=|| {
                        view! {
                            <a href="/sign-in">"Sign in"</a>
                            <a class="button button--primary" href="/sign-up">"Sign up"</a>
                        }
                    }
                >
                    <a href="/events/create">"Create event"</a>
                    <a href="/profile">"Profile"</a>
                </Show>
            </nav>

            <div class="site-header__actions">
                <ThemeToggle />
                <button
                    class="site-header__menu-button"
                    aria-label="Open menu"
                    on:click=move |_| menu_open.set(true)
                >
                    "\u{2630}"
                </button>
            </div>

            <MobileMenu
                open=menu_open
                on_close=Callback::new(move |_| menu_open.set(false))
            />
        </header>
    }
}
