//! Drawing-surface contract.
//!
//! Responsibilities:
//! - describe per-draw paint state (style, stroke width, color, shader, filters)
//! - define the [`Canvas`] a backend implements (draw path, save/restore, clip)
//! - provide [`RecordingCanvas`], which keeps every draw in issue order so
//!   compositing can be inspected or replayed by a backend
//!
//! Backends (Skia, tiny-skia, a GPU tessellator, ...) live outside this crate
//! and implement [`Canvas`].

mod canvas;
mod filter;
mod paint;
mod recording;

pub use canvas::Canvas;
pub use filter::{DropShadow, ImageFilter, MaskFilter, ShadowMode, DROP_SHADOW_SIGMA};
pub use paint::{PaintStyle, PathPaint};
pub use recording::{DrawOp, RecordingCanvas};
