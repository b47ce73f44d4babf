//! Core geometry types for the board
//!
//! Positions and sizes are in page pixels; the board has no camera.

mod vec2;
mod rect;
mod size;
mod style;

pub use vec2::Vec2;
pub use rect::Rect;
pub use size::Size;
pub use style::{ChromeStyle, CHROME_STYLE};
