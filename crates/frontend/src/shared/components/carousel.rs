use contracts::events::Event;
use leptos::prelude::*;

/// What one carousel slide shows, whether it comes from a real event or
/// from the promotional fallback.
#[derive(Clone, Debug, PartialEq)]
pub struct Slide {
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
}

fn placeholder_slides() -> Vec<Slide> {
    [
        ("Concerts", "Live music near you, every week."),
        ("Meetups", "Find people who share your interests."),
        ("Workshops", "Learn something new this weekend."),
        ("Festivals", "The big dates you should not miss."),
    ]
    .into_iter()
    .map(|(title, description)| Slide {
        title: title.to_string(),
        description: description.to_string(),
        image_url: None,
    })
    .collect()
}

/// Slides for the given event list; promotional placeholders when it is
/// empty.
pub fn slides_for(events: &[Event]) -> Vec<Slide> {
    if events.is_empty() {
        return placeholder_slides();
    }
    events
        .iter()
        .map(|event| Slide {
            title: event.title.clone(),
            description: event.description.clone(),
            image_url: event.image_url.clone(),
        })
        .collect()
}

// The track holds the slide list twice and slides by half its own width,
// so the loop restarts exactly where the duplicate begins.
const CAROUSEL_CSS: &str = "\
.carousel { overflow: hidden; width: 100%; }\
.carousel-track { display: flex; animation: carousel-scroll linear infinite; }\
.carousel-track:hover { animation-play-state: paused; }\
.carousel-slide { flex-shrink: 0; width: 33.33%; }\
@media (max-width: 1023px) { .carousel-slide { width: 50%; } }\
@media (max-width: 767px) { .carousel-slide { width: 100%; } }\
@keyframes carousel-scroll { from { transform: translateX(0); } to { transform: translateX(-50%); } }";

/// Endless horizontal scroller for the landing page.
#[component]
pub fn Carousel(#[prop(into)] events: Signal<Vec<Event>>) -> impl IntoView {
    let slides = Memo::new(move |_| slides_for(&events.get()));

    // Scroll speed follows the slide count so longer lists do not rush.
    let track_style = move || format!("animation-duration: {}s", slides.get().len() * 8);

    let doubled = move || {
        let slides = slides.get();
        slides
            .iter()
            .cloned()
            .chain(slides.iter().cloned())
            .enumerate()
            .collect::<Vec<_>>()
    };

    view! {
        <style>{CAROUSEL_CSS}</style>
        <div class="carousel">
            <div class="carousel-track" style=track_style>
                <For
                    each=doubled
                    key=|(index, _)| *index
                    children=|(_, slide)| {
                        view! {
                            <div class="carousel-slide">
                                {slide.image_url.clone().map(|url| {
                                    view! { <img class="carousel-slide__image" src=url alt=slide.title.clone() /> }
                                })}
                                <h3 class="carousel-slide__title">{slide.title.clone()}</h3>
                                <p class="carousel-slide__text">{slide.description.clone()}</p>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(title: &str) -> Event {
        serde_json::from_value(serde_json::json!({
            "id": "1",
            "title": title,
            "description": "d",
            "date": "2026-09-01",
            "status": "active",
            "visibility": "public",
            "user_id": "1"
        }))
        .unwrap()
    }

    #[test]
    fn test_empty_list_falls_back_to_placeholders() {
        let slides = slides_for(&[]);
        assert_eq!(slides.len(), 4);
        assert_eq!(slides[0].title, "Concerts");
    }

    #[test]
    fn test_events_map_to_slides() {
        let slides = slides_for(&[event("Rust Meetup")]);
        assert_eq!(slides.len(), 1);
        assert_eq!(slides[0].title, "Rust Meetup");
    }
}
