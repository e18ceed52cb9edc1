//! Layered shadow compositing.
//!
//! One outline, drawn several times with the same paint object, produces the
//! neumorphic look. Passes run in a fixed order and later passes cover
//! earlier ones:
//!
//! 1. outer dark shadow (offset `+distance`), then outer light shadow (`-distance`)
//! 2. base fill (shadow filter cleared; blur mask cleared too in [`DrawMode::Flat`])
//! 3. inner light then inner dark shadow, stroked at `distance` width, clipped to the outline
//! 4. border stroke, unfiltered

use neo_engine::paint::{Color, LinearGradient};
use neo_engine::path::Path;
use neo_engine::surface::{ImageFilter, PaintStyle};

use crate::painter::Painter;
use crate::style::{Border, DrawMode, NeoStyle};

/// Shadow colors and offsets for one draw.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ShadowParams {
    pub blur: f32,
    pub distance: f32,
    pub light: Color,
    /// Already carries the elevation alpha.
    pub dark: Color,
}

impl From<&NeoStyle> for ShadowParams {
    fn from(style: &NeoStyle) -> Self {
        Self {
            blur: style.shadow_blur,
            distance: style.shadow_distance,
            light: style.light_shadow_color,
            dark: style.dark_shadow(),
        }
    }
}

/// Which passes run, and with what extras.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompositeFlags<'a> {
    pub outer: bool,
    pub inner: bool,
    pub draw_mode: DrawMode,
    pub border: Option<Border>,
    /// Shader for the base fill pass only.
    pub fill: Option<&'a LinearGradient>,
}

impl CompositeFlags<'_> {
    /// Outer shadows only, crisp base, nothing else.
    pub const fn raised() -> Self {
        Self { outer: true, inner: false, draw_mode: DrawMode::Flat, border: None, fill: None }
    }
}

/// Runs the shadow passes for `path` against the painter's canvas.
///
/// The painter's paint is used as-is for the outer and base passes, so the
/// caller decides the base style (fill, or stroke for tracks) beforehand.
pub fn composite(painter: &mut Painter<'_>, path: &Path, shadow: &ShadowParams, flags: &CompositeFlags<'_>) {
    if flags.outer {
        log::trace!("composite: outer shadows, distance {}", shadow.distance);
        painter.paint.image_filter = Some(ImageFilter::drop_shadow(shadow.dark, shadow.distance));
        painter.draw(path);

        painter.paint.image_filter = Some(ImageFilter::drop_shadow(shadow.light, -shadow.distance));
        painter.draw(path);
    }

    painter.paint.image_filter = None;
    if flags.draw_mode == DrawMode::Flat {
        painter.paint.mask_filter = None;
    }
    painter.paint.shader = flags.fill.cloned();
    painter.draw(path);
    painter.paint.shader = None;

    if flags.inner {
        log::trace!("composite: inner shadows, distance {}", shadow.distance);
        let count = painter.clip_to(path);

        painter.paint.set_blur(shadow.blur);
        painter.paint.style = PaintStyle::Stroke;
        painter.paint.stroke_width = shadow.distance.abs();

        painter.paint.image_filter = Some(ImageFilter::drop_shadow(shadow.light, -shadow.distance));
        painter.draw(path);

        painter.paint.image_filter = Some(ImageFilter::drop_shadow(shadow.dark, shadow.distance));
        painter.draw(path);

        painter.restore(count);
    }

    match flags.border {
        Some(border) if !border.color.is_transparent() => {
            painter.paint.clear_filters();
            painter.paint.style = PaintStyle::Stroke;
            painter.paint.stroke_width = border.width;
            painter.paint.color = border.color;
            painter.draw(path);
        }
        Some(_) => log::debug!("composite: transparent border skipped"),
        None => {}
    }
}
