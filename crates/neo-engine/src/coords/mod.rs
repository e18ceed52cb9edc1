//! Coordinate and geometry types shared by path builders, canvases and widgets.
//!
//! Canonical CPU space:
//! - Canvas pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! "Clockwise" anywhere in this crate means clockwise as seen on screen.

mod corner_radii;
mod rect;
mod vec2;
mod viewport;

pub use corner_radii::CornerRadii;
pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
