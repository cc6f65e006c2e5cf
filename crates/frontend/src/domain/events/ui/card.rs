use contracts::events::{Event, Visibility};
use leptos::prelude::*;

use crate::shared::components::image_modal::ImageModal;
use crate::shared::date_utils::format_date;

pub fn visibility_badge_class(visibility: Visibility) -> &'static str {
    match visibility {
        Visibility::Public => "badge badge--public",
        Visibility::Private => "badge badge--private",
        Visibility::OnlyMe => "badge badge--only-me",
    }
}

/// One event in a grid. Children land in the footer and carry per-context
/// buttons (favorite toggles, edit/delete).
#[component]
pub fn EventCard(
    event: Event,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let image_open = RwSignal::new(false);
    let image_url = event.image_url.clone();
    let title = event.title.clone();

    view! {
        <article class="event-card">
            {image_url.map(|url| {
                let alt = title.clone();
                let full_url = url.clone();
                view! {
                    <img
                        class="event-card__image"
                        src=url
                        alt=alt.clone()
                        on:click=move |_| image_open.set(true)
                    />
                    <ImageModal
                        image_url=full_url
                        image_alt=alt
                        open=image_open
                        on_close=Callback::new(move |_| image_open.set(false))
                    />
                }
            })}
            <div class="event-card__body">
                <div class="event-card__header">
                    <h3 class="event-card__title">{event.title.clone()}</h3>
                    <span class=visibility_badge_class(event.visibility)>
                        {event.visibility.as_str()}
                    </span>
                </div>
                <p class="event-card__description">{event.description.clone()}</p>
            </div>
            <div class="event-card__footer">
                <span class="event-card__date">{format_date(&event.date)}</span>
                {event.time.clone().map(|time| view! { <span class="event-card__time">{time}</span> })}
                {children.map(|children| children())}
            </div>
        </article>
    }
}
