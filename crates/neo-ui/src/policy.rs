//! Per-control draw policies.
//!
//! Each policy picks the shadow padding, builds its outline and chooses the
//! compositing flags; the shared [`composite`] does the rest.

use neo_engine::coords::{CornerRadii, Viewport};
use neo_engine::paint::{Color, LinearGradient};
use neo_engine::path::{build_bar_path, build_rounded_path, build_track_path};
use neo_engine::surface::PaintStyle;

use crate::compositor::{composite, CompositeFlags, ShadowParams};
use crate::painter::Painter;
use crate::style::{Border, DrawMode, NeoStyle, ShadowDrawMode};

/// Canvas area left for the outline once shadow padding is reserved.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ContentBox {
    pub width: f32,
    pub height: f32,
    pub padding: f32,
}

impl ContentBox {
    /// Shrinks `viewport` by `padding` on every side.
    ///
    /// A canvas too small for its padding collapses to an empty box.
    pub fn inset(viewport: Viewport, padding: f32) -> Self {
        let width = viewport.width - padding * 2.0;
        let height = viewport.height - padding * 2.0;
        if width < 0.0 || height < 0.0 {
            log::warn!(
                "canvas {}x{} too small for shadow padding {padding}; clamping",
                viewport.width,
                viewport.height
            );
        }

        Self { width: width.max(0.0), height: height.max(0.0), padding }
    }
}

/// Frame compositing switches.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameFlags {
    pub shadow_draw_mode: ShadowDrawMode,
    pub draw_mode: DrawMode,
    /// Outer shadows are drawn only if this is set and the mode allows them.
    pub show_out: bool,
    /// Forces the inner shadows regardless of the mode.
    pub show_in: bool,
    /// Forces [`DrawMode::Soft`].
    pub is_soft: bool,
}

impl FrameFlags {
    fn outer(&self) -> bool {
        self.show_out && self.shadow_draw_mode.draws_outer()
    }

    fn inner(&self) -> bool {
        self.show_in || self.shadow_draw_mode.draws_inner()
    }

    fn draw_mode(&self) -> DrawMode {
        if self.is_soft { DrawMode::Soft } else { self.draw_mode }
    }
}

impl Default for FrameFlags {
    fn default() -> Self {
        Self {
            shadow_draw_mode: ShadowDrawMode::default(),
            draw_mode: DrawMode::default(),
            show_out: true,
            show_in: false,
            is_soft: false,
        }
    }
}

/// Draw strategy for one control kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawPolicy<'a> {
    /// Raised rounded box.
    Button { radii: CornerRadii },
    /// Rounded box with selectable outer/inner shadows, border and fill shader.
    Frame {
        radii: CornerRadii,
        flags: FrameFlags,
        border: Option<Border>,
        fill: Option<&'a LinearGradient>,
    },
    /// Pill track with a filled bar underneath its shadows.
    Progress { progress: f32, bar_color: Color, thickness: f32 },
}

impl DrawPolicy<'_> {
    /// Space reserved around the outline for shadow bleed.
    pub fn padding(&self, style: &NeoStyle) -> f32 {
        match self {
            DrawPolicy::Button { .. } => style.shadow_blur * 2.0,
            DrawPolicy::Frame { flags, .. } => {
                if flags.shadow_draw_mode == ShadowDrawMode::InnerOnly {
                    0.0
                } else {
                    style.shadow_blur * 2.0
                }
            }
            DrawPolicy::Progress { .. } => style.shadow_blur * 3.0,
        }
    }

    /// Draws the control into `painter`.
    pub fn draw(&self, painter: &mut Painter<'_>, style: &NeoStyle) {
        let content = ContentBox::inset(painter.viewport(), self.padding(style));
        let shadow = ShadowParams::from(style);

        if let DrawPolicy::Button { radii } | DrawPolicy::Frame { radii, .. } = *self {
            if !radii.fits(content.width, content.height) {
                log::debug!(
                    "corner radii {radii:?} exceed content box {}x{}; arcs will overlap",
                    content.width,
                    content.height
                );
            }
        }

        match *self {
            DrawPolicy::Button { radii } => {
                let path = build_rounded_path(content.width, content.height, content.padding, radii);
                composite(painter, &path, &shadow, &CompositeFlags::raised());
            }
            DrawPolicy::Frame { radii, flags, border, fill } => {
                let path = build_rounded_path(content.width, content.height, content.padding, radii);
                let composite_flags = CompositeFlags {
                    outer: flags.outer(),
                    inner: flags.inner(),
                    draw_mode: flags.draw_mode(),
                    border,
                    fill,
                };
                composite(painter, &path, &shadow, &composite_flags);
            }
            DrawPolicy::Progress { progress, bar_color, thickness } => {
                let corner_radius = content.height / 2.0;
                let track = build_track_path(content.width, content.height, content.padding, corner_radius);
                let bar = build_bar_path(
                    content.width,
                    content.height,
                    content.padding,
                    corner_radius,
                    progress,
                );

                painter.paint.color = bar_color;
                painter.draw(&bar);

                painter.paint.color = style.base_color;
                painter.paint.style = PaintStyle::Stroke;
                painter.paint.stroke_width = thickness;
                painter.paint.set_blur(style.shadow_blur);
                composite(painter, &track, &shadow, &CompositeFlags::raised());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neo_engine::surface::{DrawOp, ImageFilter, MaskFilter, RecordingCanvas};

    fn draw(policy: DrawPolicy<'_>, viewport: Viewport) -> Vec<DrawOp> {
        let mut canvas = RecordingCanvas::new(viewport);
        {
            let mut painter = Painter::begin(&mut canvas, &NeoStyle::default());
            policy.draw(&mut painter, &NeoStyle::default());
        }
        canvas.take_ops()
    }

    fn frame(flags: FrameFlags) -> DrawPolicy<'static> {
        DrawPolicy::Frame { radii: CornerRadii::all(3.0), flags, border: None, fill: None }
    }

    // ── ContentBox ────────────────────────────────────────────────────────

    #[test]
    fn inset_removes_padding_on_both_sides() {
        let b = ContentBox::inset(Viewport::new(200.0, 100.0), 20.0);
        assert_eq!(b, ContentBox { width: 160.0, height: 60.0, padding: 20.0 });
    }

    #[test]
    fn inset_clamps_small_canvas() {
        let b = ContentBox::inset(Viewport::new(30.0, 100.0), 20.0);
        assert_eq!(b.width, 0.0);
        assert_eq!(b.height, 60.0);
    }

    // ── padding ───────────────────────────────────────────────────────────

    #[test]
    fn padding_per_policy() {
        let style = NeoStyle::default();
        assert_eq!(DrawPolicy::Button { radii: CornerRadii::zero() }.padding(&style), 20.0);
        assert_eq!(frame(FrameFlags::default()).padding(&style), 20.0);
        let inner_only = FrameFlags { shadow_draw_mode: ShadowDrawMode::InnerOnly, ..FrameFlags::default() };
        assert_eq!(frame(inner_only).padding(&style), 0.0);
        let progress = DrawPolicy::Progress { progress: 0.5, bar_color: Color::red(), thickness: 5.0 };
        assert_eq!(progress.padding(&style), 30.0);
    }

    // ── button ────────────────────────────────────────────────────────────

    #[test]
    fn button_outline_sits_inside_padding() {
        let ops = draw(DrawPolicy::Button { radii: CornerRadii::all(3.0) }, Viewport::new(200.0, 100.0));
        assert_eq!(ops.len(), 3);
        let b = ops[2].path.bounds().unwrap();
        assert!((b.origin.x - 20.0).abs() < 1e-3 && (b.size.x - 160.0).abs() < 1e-3);
    }

    #[test]
    fn oversized_radii_are_drawn_unclamped() {
        let radii = CornerRadii::all(50.0);
        let ops = draw(DrawPolicy::Button { radii }, Viewport::new(200.0, 100.0));
        assert!(!radii.fits(160.0, 60.0));
        assert_eq!(ops.len(), 3);
        let arcs = ops[2].path.arcs();
        assert_eq!(arcs.len(), 4);
        assert!(arcs.iter().all(|arc| arc.radius == 50.0));
    }

    // ── frame ─────────────────────────────────────────────────────────────

    #[test]
    fn inner_only_frame_fills_whole_canvas() {
        let flags = FrameFlags { shadow_draw_mode: ShadowDrawMode::InnerOnly, ..FrameFlags::default() };
        let ops = draw(frame(flags), Viewport::new(120.0, 60.0));

        assert_eq!(ops.len(), 3);
        assert!(ops[0].paint.image_filter.is_none());
        let b = ops[0].path.bounds().unwrap();
        assert!((b.size.x - 120.0).abs() < 1e-3 && (b.origin.x).abs() < 1e-3);
        assert!(ops[1].is_clipped() && ops[2].is_clipped());
    }

    #[test]
    fn show_out_off_suppresses_outer_shadows() {
        let flags = FrameFlags { show_out: false, ..FrameFlags::default() };
        let ops = draw(frame(flags), Viewport::new(120.0, 60.0));
        assert_eq!(ops.len(), 1);
    }

    #[test]
    fn show_in_forces_inner_shadows() {
        let flags = FrameFlags { show_in: true, ..FrameFlags::default() };
        let ops = draw(frame(flags), Viewport::new(120.0, 60.0));
        assert_eq!(ops.len(), 5);
        assert_eq!(ops.iter().filter(|op| op.is_clipped()).count(), 2);
    }

    #[test]
    fn is_soft_keeps_blur_on_base() {
        let flags = FrameFlags { is_soft: true, ..FrameFlags::default() };
        let ops = draw(frame(flags), Viewport::new(120.0, 60.0));
        assert_eq!(ops[2].paint.mask_filter, Some(MaskFilter::Blur { sigma: 10.0 }));
    }

    // ── progress ──────────────────────────────────────────────────────────

    #[test]
    fn progress_draws_bar_then_shadowed_track() {
        let policy = DrawPolicy::Progress { progress: 0.4, bar_color: Color::red(), thickness: 5.0 };
        let ops = draw(policy, Viewport::new(300.0, 80.0));
        assert_eq!(ops.len(), 4);

        let bar = &ops[0];
        assert_eq!(bar.paint.color, Color::red());
        assert_eq!(bar.paint.style, PaintStyle::Fill);
        assert!(bar.paint.mask_filter.is_some());

        for op in &ops[1..] {
            assert_eq!(op.paint.style, PaintStyle::Stroke);
            assert_eq!(op.paint.stroke_width, 5.0);
            assert_eq!(op.paint.color, NeoStyle::default().base_color);
        }
        assert!(matches!(ops[1].paint.image_filter, Some(ImageFilter::DropShadow(s)) if s.dx == 9.0));
        assert!(matches!(ops[2].paint.image_filter, Some(ImageFilter::DropShadow(s)) if s.dx == -9.0));
        assert!(ops[3].paint.image_filter.is_none() && ops[3].paint.mask_filter.is_none());

        // Track: padding 30, content 240x20.
        let track = ops[3].path.bounds().unwrap();
        assert!((track.origin.x - 30.0).abs() < 1e-3);
        assert!((track.size.x - 240.0).abs() < 1e-3);
        assert!((track.size.y - 20.0).abs() < 1e-3);
    }
}
