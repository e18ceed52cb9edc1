//! Neo UI: neumorphic controls drawn as layered, blurred shadow passes.
//!
//! Every control builds one rounded outline and paints it several times with
//! a single reused paint: a dark shadow offset one way, a light shadow offset
//! the other, the base fill, and optionally inner shadows clipped to the
//! outline and a border.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use neo_ui::prelude::*;
//!
//! let mut scene = NeoScene::new(Viewport::new(240.0, 80.0));
//! let mut button = NeoButton::new()
//!     .corner_radius(CornerRadii::all(12.0))
//!     .base_color(Color::from_srgb_u8(0xe0, 0xe5, 0xec, 0xff));
//!
//! // In your frame callback:
//! if let Some(ops) = scene.render_if_dirty(&button) {
//!     backend.replay(ops);
//! }
//!
//! // On click:
//! button.press(&mut StepDriver::default())?;
//! ```
//!
//! # Custom controls
//!
//! Implement [`Widget`](widget::Widget) and delegate to a
//! [`DrawPolicy`](policy::DrawPolicy), or call
//! [`composite`](compositor::composite) directly with your own outline.

pub mod animation;
pub mod compositor;
pub mod error;
pub mod invalidation;
pub mod painter;
pub mod policy;
pub mod scene;
pub mod style;
pub mod widget;
pub mod widgets;

pub use error::{NeoError, Result};

/// Everything you need to build and draw controls.
pub mod prelude {
    pub use crate::animation::{AnimationDriver, StepDriver, DEFAULT_LENGTH};
    pub use crate::error::{NeoError, Result};
    pub use crate::painter::Painter;
    pub use crate::scene::NeoScene;
    pub use crate::style::{Border, DrawMode, NeoStyle, ShadowDrawMode};
    pub use crate::widget::{Styled, Widget};
    pub use crate::widgets::{button::NeoButton, frame::NeoFrame, progress::NeoProgressView};

    // Engine primitives every control touches.
    pub use neo_engine::coords::{CornerRadii, Rect, Vec2, Viewport};
    pub use neo_engine::paint::{Color, Gradient, GradientStop, LinearGradient, SpreadMode};
    pub use neo_engine::surface::{Canvas, DrawOp, RecordingCanvas};
}
