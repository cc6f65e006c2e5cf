use leptos::prelude::*;

use crate::system::auth::AuthStore;

/// Read-only view of the account fields.
#[component]
pub fn OverviewTab() -> impl IntoView {
    let auth = expect_context::<AuthStore>();
    let user = auth.user;

    let field = |label: &'static str, value: String| {
        view! {
            <div class="field">
                <span class="field__label">{label}</span>
                <span class="field__value">{value}</span>
            </div>
        }
    };

    view! {
        <section class="overview-tab">
            <h3 class="section-title">"Personal information"</h3>
            {move || {
                user.get()
                    .map(|u| {
                        view! {
                            <div class="field-grid">
                                {field("Username", u.username)}
                                {field("Full name", u.full_name)}
                                {field("Email", u.email)}
                                {field("Role", u.rol.as_str().to_string())}
                            </div>
                        }
                    })
            }}
        </section>
    }
}
