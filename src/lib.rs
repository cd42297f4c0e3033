pub mod carousel;
pub mod config;
pub mod error;
pub mod events;
pub mod render;
pub mod rotation;
pub mod slide;
pub mod tracker;
pub mod tasks {
    pub mod carousel;
    pub mod input;
}

pub use carousel::{Carousel, CarouselOptions};
pub use error::CarouselError;
pub use events::CarouselEvent;
pub use slide::Slide;
