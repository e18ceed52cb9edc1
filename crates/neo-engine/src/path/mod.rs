//! Path construction.
//!
//! Responsibilities:
//! - store an ordered outline of move/line/arc/close commands
//! - resolve arcs to circle geometry (for bounds and for backends that flatten)
//! - build the rounded outlines every control draws: per-corner rounded box,
//!   pill-shaped progress track, and the progress bar with its collapsing cap

mod arc;
mod cmd;
mod rounded;

pub use arc::Arc;
pub use cmd::{Path, PathCmd};
pub use rounded::{build_bar_path, build_rounded_path, build_track_path, BarGeometry};
