//! Paint model shared between path builders, canvases and widgets.
//!
//! Scope:
//! - color representation (linear premultiplied alpha)
//! - gradient stops and the offset normalizer
//!
//! Geometry types remain in `coords`; per-draw paint state lives in `surface`.

pub mod color;
pub mod gradient;

pub use color::Color;
pub use gradient::{normalize_offsets, Gradient, GradientStop, LinearGradient, SpreadMode};
