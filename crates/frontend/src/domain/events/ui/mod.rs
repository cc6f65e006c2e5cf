pub mod card;
pub mod favorite;
pub mod upcoming;

pub use card::EventCard;
pub use favorite::{AddFavoriteButton, RemoveFavoriteButton};
pub use upcoming::UpcomingEventsSection;
