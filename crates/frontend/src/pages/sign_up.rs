use contracts::auth::{Gender, RegisterRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::system::auth::AuthStore;

fn optional(value: String) -> Option<String> {
    let value = value.trim().to_string();
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    let auth = expect_context::<AuthStore>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let full_name = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let birth_date = RwSignal::new(String::new());
    let gender = RwSignal::new(String::new());

    let loading = auth.loading;
    let error = auth.error;

    let on_submit = {
        let auth = auth.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();

            let request = RegisterRequest {
                email: email.get_untracked(),
                password: password.get_untracked(),
                full_name: optional(full_name.get_untracked()),
                username: optional(username.get_untracked()),
                birth_date: optional(birth_date.get_untracked()),
                gener: match gender.get_untracked().as_str() {
                    "M" => Some(Gender::M),
                    "F" => Some(Gender::F),
                    _ => None,
                },
                rol: None,
            };

            let auth = auth.clone();
            let navigate = navigate.clone();
            spawn_local(async move {
                if auth.register(request).await.is_ok() {
                    navigate("/profile", Default::default());
                }
            });
        }
    };

    view! {
        <main class="page page--auth">
            <div class="auth-card">
                <h1 class="page__title">"Create your account"</h1>

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

                    <div class="form-group">
                        <label for="full_name">"Full name (optional)"</label>
                        <input
                            type="text"
                            id="full_name"
                            prop:value=move || full_name.get()
                            on:input=move |ev| full_name.set(event_target_value(&ev))
                            disabled=move || loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="username">"Username (optional)"</label>
                        <input
                            type="text"
                            id="username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                            disabled=move || loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="birth_date">"Birth date (optional)"</label>
                        <input
                            type="date"
                            id="birth_date"
                            prop:value=move || birth_date.get()
                            on:input=move |ev| birth_date.set(event_target_value(&ev))
                            disabled=move || loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="gender">"Gender (optional)"</label>
                        <select
                            id="gender"
                            prop:value=move || gender.get()
                            on:change=move |ev| gender.set(event_target_value(&ev))
                            disabled=move || loading.get()
                        >
                            <option value="">"Prefer not to say"</option>
                            <option value="M">"Male"</option>
                            <option value="F">"Female"</option>
                        </select>
                    </div>

                    <button
                        type="submit"
                        class="button button--primary"
                        disabled=move || loading.get()
                    >
                        {move || if loading.get() { "Creating account..." } else { "Sign up" }}
                    </button>
                </form>

                <p class="auth-card__hint">
                    "Already have an account? " <a href="/sign-in">"Sign in"</a>
                </p>
            </div>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_drops_blank_input() {
        assert_eq!(optional("".into()), None);
        assert_eq!(optional("   ".into()), None);
        assert_eq!(optional(" ada ".into()), Some("ada".to_string()));
    }
}
