pub mod seed;
pub mod slide;

pub use seed::SEED_SLIDES;
pub use slide::{Slide, SlideId, SlideUpdate};
