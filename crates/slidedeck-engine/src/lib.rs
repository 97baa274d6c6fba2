pub mod html;
pub mod io;
pub mod models;
pub mod rendering;
pub mod store;

// Re-export key types for easier usage
pub use models::{Slide, SlideId, SlideUpdate};
pub use rendering::{Block, InlineSpan, ViewContext, render};
pub use store::{SlideStore, StoreError};
