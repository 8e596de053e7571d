pub mod autoplay;
pub mod lightbox;
pub mod quotes;
pub mod ticker;

pub use autoplay::{Advance, Autoplay};
pub use lightbox::Lightbox;
pub use quotes::QuoteRotator;
pub use ticker::{SkillTicker, DEFAULT_WINDOW};
