use crate::paint::{Color, LinearGradient};

use super::{ImageFilter, MaskFilter};

/// Whether a path is filled or outlined.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum PaintStyle {
    #[default]
    Fill,
    Stroke,
}

/// Mutable paint state handed to [`Canvas::draw_path`](super::Canvas::draw_path).
///
/// One `PathPaint` is reused across the passes of a draw; each pass sets the
/// fields it needs before drawing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathPaint {
    pub anti_alias: bool,
    pub style: PaintStyle,
    /// Only meaningful for [`PaintStyle::Stroke`].
    pub stroke_width: f32,
    pub color: Color,
    /// Overrides `color` for fills when set.
    pub shader: Option<LinearGradient>,
    pub mask_filter: Option<MaskFilter>,
    pub image_filter: Option<ImageFilter>,
}

impl PathPaint {
    #[inline]
    pub fn fill(color: Color) -> Self {
        Self { anti_alias: true, color, ..Self::default() }
    }

    #[inline]
    pub fn stroke(color: Color, width: f32) -> Self {
        Self {
            anti_alias: true,
            style: PaintStyle::Stroke,
            stroke_width: width,
            color,
            ..Self::default()
        }
    }

    /// Sets a normal-style blur mask, or clears it for `sigma <= 0`.
    #[inline]
    pub fn set_blur(&mut self, sigma: f32) {
        self.mask_filter = (sigma > 0.0).then_some(MaskFilter::Blur { sigma });
    }

    /// Drops both the mask and image filter.
    #[inline]
    pub fn clear_filters(&mut self) {
        self.mask_filter = None;
        self.image_filter = None;
    }
}
