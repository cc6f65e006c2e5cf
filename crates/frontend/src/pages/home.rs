use leptos::prelude::*;

use crate::domain::events::ui::UpcomingEventsSection;
use crate::domain::events::EventStore;
use crate::domain::stats::ui::StatsSection;
use crate::shared::components::Carousel;

#[component]
pub fn HomePage() -> impl IntoView {
    let events = expect_context::<EventStore>();
    let event_list = events.events;

    view! {
        <main class="page page--home">
            <section class="hero">
                <h1 class="hero__title">"Discover what is happening around you"</h1>
                <p class="hero__subtitle">"Concerts, meetups, workshops — all in one place."</p>
                <Carousel events=event_list />
            </section>
            <UpcomingEventsSection />
            <StatsSection />
        </main>
    }
}
