use neo_engine::coords::CornerRadii;
use neo_engine::paint::{Color, GradientStop, LinearGradient};

use crate::invalidation::Invalidation;
use crate::painter::Painter;
use crate::policy::{DrawPolicy, FrameFlags};
use crate::style::{Border, DrawMode, NeoStyle, ShadowDrawMode};
use crate::widget::{Styled, Widget};

const DEFAULT_CORNER_RADIUS: f32 = 3.0;

/// A rounded surface that can look raised, pressed, or both, with an
/// optional border and gradient fill.
///
/// # Example
/// ```rust,ignore
/// NeoFrame::new()
///     .shadow_draw_mode(ShadowDrawMode::InnerOnly)
///     .border_color(Color::from_straight(1.0, 1.0, 1.0, 0.4))
///     .border_width(2.0)
/// ```
pub struct NeoFrame {
    style: NeoStyle,
    corner_radius: CornerRadii,
    flags: FrameFlags,
    border_color: Color,
    border_width: f32,
    fill: Option<LinearGradient>,
    invalidation: Invalidation,
}

impl NeoFrame {
    pub fn new() -> Self {
        Self {
            style: NeoStyle::default(),
            corner_radius: CornerRadii::all(DEFAULT_CORNER_RADIUS),
            flags: FrameFlags::default(),
            border_color: Color::transparent(),
            border_width: 1.0,
            fill: None,
            invalidation: Invalidation::new(),
        }
    }

    pub fn with_style(mut self, v: NeoStyle) -> Self { self.style = v; self }
    pub fn corner_radius(mut self, v: CornerRadii) -> Self { self.corner_radius = v; self }
    pub fn shadow_draw_mode(mut self, v: ShadowDrawMode) -> Self { self.flags.shadow_draw_mode = v; self }
    pub fn draw_mode(mut self, v: DrawMode) -> Self { self.flags.draw_mode = v; self }
    pub fn show_out(mut self, v: bool) -> Self { self.flags.show_out = v; self }
    pub fn show_in(mut self, v: bool) -> Self { self.flags.show_in = v; self }
    pub fn is_soft(mut self, v: bool) -> Self { self.flags.is_soft = v; self }
    pub fn border_color(mut self, v: Color) -> Self { self.border_color = v; self }
    pub fn border_width(mut self, v: f32) -> Self { self.border_width = v; self }
    pub fn fill_gradient(mut self, v: LinearGradient) -> Self { self.fill = Some(v); self }

    #[inline]
    pub fn flags(&self) -> FrameFlags {
        self.flags
    }

    /// The border, or `None` while the border color is transparent.
    #[inline]
    pub fn border(&self) -> Option<Border> {
        Border::visible(self.border_width, self.border_color)
    }

    #[inline]
    pub fn gradient(&self) -> Option<&LinearGradient> {
        self.fill.as_ref()
    }

    pub fn set_corner_radius(&mut self, v: CornerRadii) {
        self.invalidation.update(&mut self.corner_radius, v);
    }

    pub fn set_flags(&mut self, v: FrameFlags) {
        self.invalidation.update(&mut self.flags, v);
    }

    pub fn set_shadow_draw_mode(&mut self, v: ShadowDrawMode) {
        self.invalidation.update(&mut self.flags.shadow_draw_mode, v);
    }

    pub fn set_draw_mode(&mut self, v: DrawMode) {
        self.invalidation.update(&mut self.flags.draw_mode, v);
    }

    pub fn set_border_color(&mut self, v: Color) {
        self.invalidation.update(&mut self.border_color, v);
    }

    pub fn set_border_width(&mut self, v: f32) {
        self.invalidation.update(&mut self.border_width, v);
    }

    pub fn set_fill_gradient(&mut self, v: Option<LinearGradient>) {
        self.invalidation.update(&mut self.fill, v);
    }

    /// Appends a stop to the fill gradient, re-normalizing its offsets.
    ///
    /// Returns `false` when the frame has no fill gradient.
    pub fn push_gradient_stop(&mut self, stop: GradientStop) -> bool {
        match &mut self.fill {
            Some(fill) => {
                fill.gradient.push_stop(stop);
                self.invalidation.invalidate();
                true
            }
            None => false,
        }
    }

    fn policy(&self) -> DrawPolicy<'_> {
        DrawPolicy::Frame {
            radii: self.corner_radius,
            flags: self.flags,
            border: self.border(),
            fill: self.fill.as_ref(),
        }
    }
}

impl Default for NeoFrame { fn default() -> Self { Self::new() } }

impl Widget for NeoFrame {
    fn style(&self) -> &NeoStyle {
        &self.style
    }

    fn invalidation(&self) -> &Invalidation {
        &self.invalidation
    }

    fn draw(&self, painter: &mut Painter<'_>) {
        self.policy().draw(painter, &self.style);
    }
}

impl Styled for NeoFrame {
    fn style_parts(&mut self) -> (&mut NeoStyle, &Invalidation) {
        (&mut self.style, &self.invalidation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neo_engine::coords::Vec2;
    use neo_engine::paint::{Gradient, SpreadMode};

    fn gradient() -> LinearGradient {
        LinearGradient::new(
            Vec2::zero(),
            Vec2::new(0.0, 100.0),
            Gradient::new(
                vec![GradientStop::new(0.0, Color::white()), GradientStop::unset(Color::gray())],
                SpreadMode::Pad,
            ),
        )
    }

    #[test]
    fn defaults() {
        let f = NeoFrame::new();
        assert_eq!(f.flags(), FrameFlags::default());
        assert!(f.flags().show_out && !f.flags().show_in && !f.flags().is_soft);
        assert_eq!(f.flags().shadow_draw_mode, ShadowDrawMode::OuterOnly);
        assert!(f.border().is_none());
        assert!(f.gradient().is_none());
    }

    #[test]
    fn border_appears_once_colored() {
        let f = NeoFrame::new().border_color(Color::black()).border_width(2.0);
        assert_eq!(f.border(), Some(Border::new(2.0, Color::black())));
    }

    #[test]
    fn flag_setters_invalidate() {
        let mut f = NeoFrame::new();
        f.invalidation().take();

        f.set_shadow_draw_mode(ShadowDrawMode::OuterOnly);
        assert!(!f.invalidation().is_dirty());

        f.set_shadow_draw_mode(ShadowDrawMode::All);
        assert!(f.invalidation().take());

        f.set_border_color(Color::red());
        assert!(f.invalidation().take());
    }

    #[test]
    fn pushing_a_stop_renormalizes_and_invalidates() {
        let mut f = NeoFrame::new();
        assert!(!f.push_gradient_stop(GradientStop::unset(Color::black())));

        f.set_fill_gradient(Some(gradient()));
        f.invalidation().take();

        assert!(f.push_gradient_stop(GradientStop::unset(Color::black())));
        assert!(f.invalidation().take());

        let offsets: Vec<f32> =
            f.gradient().unwrap().gradient.stops().iter().map(GradientStop::resolved_offset).collect();
        assert_eq!(offsets, vec![0.0, 0.5, 1.0]);
    }
}
