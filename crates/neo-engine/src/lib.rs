//! Neo engine crate.
//!
//! Geometry, paint and drawing-surface primitives for neumorphic controls.
//! Nothing here knows about widgets; `neo-ui` builds on these types.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod path;
pub mod surface;
