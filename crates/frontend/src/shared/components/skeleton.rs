use leptos::prelude::*;

/// Pulsing placeholder block shown while content loads.
#[component]
pub fn Skeleton(#[prop(optional, into)] class: String) -> impl IntoView {
    view! { <div class=format!("skeleton {class}")></div> }
}

/// Placeholder layout for the profile and other guarded pages.
#[component]
pub fn ProfileSkeleton() -> impl IntoView {
    view! {
        <div class="profile-skeleton">
            <div class="profile-skeleton__header">
                <Skeleton class="skeleton--avatar" />
                <Skeleton class="skeleton--line" />
            </div>
            <Skeleton class="skeleton--block" />
            <Skeleton class="skeleton--block" />
            <Skeleton class="skeleton--block" />
        </div>
    }
}
