use std::time::Duration;

use neo_engine::paint::Color;

use crate::animation::AnimationDriver;
use crate::error::{NeoError, Result};
use crate::invalidation::Invalidation;
use crate::painter::Painter;
use crate::policy::DrawPolicy;
use crate::style::NeoStyle;
use crate::widget::{Styled, Widget};

/// Horizontal progress bar: a colored bar under a raised pill-shaped track.
pub struct NeoProgressView {
    style: NeoStyle,
    progress: f32,
    bar_color: Color,
    thickness: f32,
    invalidation: Invalidation,
}

impl NeoProgressView {
    pub fn new() -> Self {
        Self {
            style: NeoStyle::default(),
            progress: 0.4,
            bar_color: Color::red(),
            thickness: 5.0,
            invalidation: Invalidation::new(),
        }
    }

    pub fn with_style(mut self, v: NeoStyle) -> Self { self.style = v; self }
    pub fn progress(mut self, v: f32) -> Self { self.progress = clamp_progress(v); self }
    pub fn bar_color(mut self, v: Color) -> Self { self.bar_color = v; self }
    pub fn thickness(mut self, v: f32) -> Self { self.thickness = v; self }

    /// Current progress in `[0, 1]`.
    #[inline]
    pub fn value(&self) -> f32 {
        self.progress
    }

    #[inline]
    pub fn bar(&self) -> Color {
        self.bar_color
    }

    /// Sets progress, clamped to `[0, 1]`.
    pub fn set_progress(&mut self, v: f32) {
        self.invalidation.update(&mut self.progress, clamp_progress(v));
    }

    pub fn set_bar_color(&mut self, v: Color) {
        self.invalidation.update(&mut self.bar_color, v);
    }

    pub fn set_thickness(&mut self, v: f32) {
        self.invalidation.update(&mut self.thickness, v);
    }

    /// Animates progress from its current value to `to`.
    ///
    /// `to` must lie in `[0, 1]`; otherwise nothing changes and
    /// [`NeoError::ProgressOutOfRange`] is returned.
    pub fn animate_progress(
        &mut self,
        to: f32,
        length: Duration,
        driver: &mut dyn AnimationDriver,
    ) -> Result<bool> {
        if !(0.0..=1.0).contains(&to) {
            log::warn!("rejected progress target {to}");
            return Err(NeoError::ProgressOutOfRange { value: to });
        }
        if length.is_zero() {
            return Err(NeoError::InvalidDuration { name: "animate_progress" });
        }

        let from = self.progress;
        Ok(driver.animate("animate_progress", from, to, length, &mut |v| self.set_progress(v)))
    }

    fn policy(&self) -> DrawPolicy<'static> {
        DrawPolicy::Progress {
            progress: self.progress,
            bar_color: self.bar_color,
            thickness: self.thickness,
        }
    }
}

fn clamp_progress(v: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

impl Default for NeoProgressView { fn default() -> Self { Self::new() } }

impl Widget for NeoProgressView {
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

impl Styled for NeoProgressView {
    fn style_parts(&mut self) -> (&mut NeoStyle, &Invalidation) {
        (&mut self.style, &self.invalidation)
    }
}
