use std::time::Duration;

use neo_engine::coords::CornerRadii;
use neo_engine::paint::Color;

use crate::animation::{AnimationDriver, DEFAULT_LENGTH};
use crate::error::{NeoError, Result};
use crate::invalidation::Invalidation;
use crate::painter::Painter;
use crate::policy::DrawPolicy;
use crate::style::NeoStyle;
use crate::widget::{Styled, Widget};

const DEFAULT_CORNER_RADIUS: f32 = 3.0;

/// A raised rounded button.
///
/// Pressing animates the shadow distance through zero to its negative, which
/// swaps the light and dark shadows and reads as the surface sinking in.
/// Changing the checked state plays the same press.
///
/// # Example
/// ```rust,ignore
/// let mut button = NeoButton::new()
///     .corner_radius(CornerRadii::all(12.0))
///     .base_color(Color::from_srgb_u8(0xe0, 0xe5, 0xec, 0xff));
///
/// button.press(&mut StepDriver::default())?;
/// ```
pub struct NeoButton {
    style: NeoStyle,
    corner_radius: CornerRadii,
    is_checked: bool,
    invalidation: Invalidation,
}

impl NeoButton {
    pub fn new() -> Self {
        Self {
            style: NeoStyle::default(),
            corner_radius: CornerRadii::all(DEFAULT_CORNER_RADIUS),
            is_checked: false,
            invalidation: Invalidation::new(),
        }
    }

    pub fn with_style(mut self, v: NeoStyle) -> Self { self.style = v; self }
    pub fn corner_radius(mut self, v: CornerRadii) -> Self { self.corner_radius = v; self }
    pub fn shadow_distance(mut self, v: f32) -> Self { self.style.shadow_distance = v; self }
    pub fn shadow_blur(mut self, v: f32) -> Self { self.style.shadow_blur = v; self }
    pub fn elevation(mut self, v: f32) -> Self { self.style.elevation = v; self }
    pub fn base_color(mut self, v: Color) -> Self { self.style.base_color = v; self }
    pub fn checked(mut self, v: bool) -> Self { self.is_checked = v; self }

    #[inline]
    pub fn corners(&self) -> CornerRadii {
        self.corner_radius
    }

    #[inline]
    pub fn is_checked(&self) -> bool {
        self.is_checked
    }

    /// Sets the checked state, playing [`press`](Self::press) if it changed.
    ///
    /// Returns `Ok(true)` when nothing changed or the press completed.
    pub fn set_checked(&mut self, v: bool, driver: &mut dyn AnimationDriver) -> Result<bool> {
        if self.is_checked == v {
            return Ok(true);
        }
        self.is_checked = v;
        log::debug!("button checked: {v}");
        self.press(driver)
    }

    pub fn set_corner_radius(&mut self, v: CornerRadii) {
        self.invalidation.update(&mut self.corner_radius, v);
    }

    /// Animates the shadow distance from its current value to `to`.
    pub fn animate_click(
        &mut self,
        to: f32,
        length: Duration,
        driver: &mut dyn AnimationDriver,
    ) -> Result<bool> {
        if length.is_zero() {
            return Err(NeoError::InvalidDuration { name: "animate_click" });
        }

        let from = self.style.shadow_distance;
        Ok(driver.animate("animate_click", from, to, length, &mut |v| self.set_shadow_distance(v)))
    }

    /// Press and release: the distance goes to `-|d|` and back to `|d|`.
    ///
    /// Returns `false` if the driver cancelled either half.
    pub fn press(&mut self, driver: &mut dyn AnimationDriver) -> Result<bool> {
        let distance = self.style.shadow_distance.abs();
        if !self.animate_click(-distance, DEFAULT_LENGTH, driver)? {
            return Ok(false);
        }
        self.animate_click(distance, DEFAULT_LENGTH, driver)
    }

    fn policy(&self) -> DrawPolicy<'static> {
        DrawPolicy::Button { radii: self.corner_radius }
    }
}

impl Default for NeoButton { fn default() -> Self { Self::new() } }

impl Widget for NeoButton {
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

impl Styled for NeoButton {
    fn style_parts(&mut self) -> (&mut NeoStyle, &Invalidation) {
        (&mut self.style, &self.invalidation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::StepDriver;

    /// Records every value and optionally cancels.
    struct Probe {
        values: Vec<f32>,
        complete: bool,
    }

    impl AnimationDriver for Probe {
        fn animate(
            &mut self,
            _name: &str,
            from: f32,
            to: f32,
            _length: Duration,
            on_value: &mut dyn FnMut(f32),
        ) -> bool {
            for v in [from + (to - from) * 0.5, to] {
                self.values.push(v);
                on_value(v);
            }
            self.complete
        }
    }

    #[test]
    fn defaults() {
        let b = NeoButton::new();
        assert_eq!(b.corners(), CornerRadii::all(3.0));
        assert_eq!(b.style(), &NeoStyle::default());
        assert!(b.invalidation().is_dirty());
    }

    #[test]
    fn setters_invalidate_on_change_only() {
        let mut b = NeoButton::new();
        b.invalidation().take();

        b.set_corner_radius(CornerRadii::all(3.0));
        b.set_shadow_distance(9.0);
        assert!(!b.invalidation().is_dirty());

        b.set_shadow_distance(4.0);
        assert!(b.invalidation().take());
        assert_eq!(b.style().shadow_distance, 4.0);

        b.set_corner_radius(CornerRadii::all(8.0));
        assert!(b.invalidation().take());
    }

    #[test]
    fn animate_click_drives_shadow_distance() {
        let mut b = NeoButton::new();
        let mut probe = Probe { values: Vec::new(), complete: true };

        assert_eq!(b.animate_click(-9.0, DEFAULT_LENGTH, &mut probe), Ok(true));
        assert_eq!(probe.values, vec![0.0, -9.0]);
        assert_eq!(b.style().shadow_distance, -9.0);
    }

    #[test]
    fn press_returns_to_rest() {
        let mut b = NeoButton::new();
        assert_eq!(b.press(&mut StepDriver::default()), Ok(true));
        assert_eq!(b.style().shadow_distance, 9.0);
    }

    #[test]
    fn cancelled_press_stops_after_first_half() {
        let mut b = NeoButton::new();
        let mut probe = Probe { values: Vec::new(), complete: false };

        assert_eq!(b.press(&mut probe), Ok(false));
        assert_eq!(b.style().shadow_distance, -9.0);
    }

    // ── checked ───────────────────────────────────────────────────────────

    #[test]
    fn checked_builder_starts_without_animation() {
        let b = NeoButton::new().checked(true);
        assert!(b.is_checked());
        assert!(!NeoButton::new().is_checked());
        assert_eq!(b.style().shadow_distance, 9.0);
    }

    #[test]
    fn changing_checked_plays_press() {
        let mut b = NeoButton::new();
        let mut probe = Probe { values: Vec::new(), complete: true };

        assert_eq!(b.set_checked(true, &mut probe), Ok(true));
        assert!(b.is_checked());
        assert_eq!(probe.values, vec![0.0, -9.0, 0.0, 9.0]);
        assert_eq!(b.style().shadow_distance, 9.0);

        probe.values.clear();
        assert_eq!(b.set_checked(false, &mut probe), Ok(true));
        assert!(!b.is_checked());
        assert_eq!(probe.values.len(), 4);
    }

    #[test]
    fn unchanged_checked_does_not_animate() {
        let mut b = NeoButton::new().checked(true);
        b.invalidation().take();
        let mut probe = Probe { values: Vec::new(), complete: true };

        assert_eq!(b.set_checked(true, &mut probe), Ok(true));
        assert!(probe.values.is_empty());
        assert!(!b.invalidation().is_dirty());
    }

    #[test]
    fn zero_length_click_is_rejected() {
        let mut b = NeoButton::new();
        let err = b.animate_click(1.0, Duration::ZERO, &mut StepDriver::default());
        assert_eq!(err, Err(NeoError::InvalidDuration { name: "animate_click" }));
        assert_eq!(b.style().shadow_distance, 9.0);
    }
}
