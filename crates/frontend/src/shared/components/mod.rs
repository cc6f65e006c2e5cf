pub mod carousel;
pub mod image_modal;
pub mod menu;
pub mod modal;
pub mod skeleton;

pub use carousel::Carousel;
pub use image_modal::ImageModal;
pub use menu::MobileMenu;
pub use modal::Modal;
pub use skeleton::{ProfileSkeleton, Skeleton};
