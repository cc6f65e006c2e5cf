use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::system::auth::AuthStore;

#[component]
pub fn SignInPage() -> impl IntoView {
    let auth = expect_context::<AuthStore>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let loading = auth.loading;
    let error = auth.error;

    let on_submit = {
        let auth = auth.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();

            let auth = auth.clone();
            let navigate = navigate.clone();
            let email = email.get_untracked();
            let password = password.get_untracked();

            spawn_local(async move {
                if auth.login(&email, &password).await.is_ok() {
                    navigate("/profile", Default::default());
                }
            });
        }
    };

    view! {
        <main class="page page--auth">
            <div class="auth-card">
                <h1 class="page__title">"Sign in"</h1>

                <Show when=move || error.get().is_some()>
                    <p class="error-banner">{move || error.get().unwrap_or_default()}</p>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                            disabled=move || loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                            disabled=move || loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="button button--primary"
                        disabled=move || loading.get()
                    >
                        {move || if loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>

                <p class="auth-card__hint">
                    "No account yet? " <a href="/sign-up">"Sign up"</a>
                </p>
            </div>
        </main>
    }
}
