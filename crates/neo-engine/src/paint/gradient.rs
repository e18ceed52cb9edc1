use crate::coords::Vec2;

use super::Color;

/// Gradient spread behavior outside the [0, 1] range.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum SpreadMode {
    /// Clamp to edge stops.
    #[default]
    Pad,
    /// Repeat the gradient pattern.
    Repeat,
}

/// A single gradient stop.
///
/// `offset` is the declared position. A negative value means "unset": the
/// stop gets its position from [`normalize_offsets`], which writes it into
/// `render_offset`. Stops with a declared offset keep `render_offset == offset`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub render_offset: f32,
    pub color: Color,
}

impl GradientStop {
    #[inline]
    pub fn new(offset: f32, color: Color) -> Self {
        Self { offset, render_offset: offset.max(0.0), color }
    }

    /// A stop whose position is derived from its neighbours.
    #[inline]
    pub fn unset(color: Color) -> Self {
        Self::new(-1.0, color)
    }

    #[inline]
    pub fn is_unset(&self) -> bool {
        self.offset < 0.0
    }

    /// Position used when building a shader.
    #[inline]
    pub fn resolved_offset(&self) -> f32 {
        if self.is_unset() { self.render_offset } else { self.offset }
    }
}

/// Fills in the render offsets of unset stops in place.
///
/// The sequence is cut into segments at every stop with a declared offset and
/// at the last stop. Unset stops inside a segment are spaced evenly between
/// the segment's start (previous anchor, floored at 0) and its end (the
/// absolute value of the closing stop's offset). Declared stops are not touched.
///
/// Output is monotonic only if the declared anchors are; that is not checked.
pub fn normalize_offsets(stops: &mut [GradientStop]) {
    let Some(last) = stops.len().checked_sub(1) else {
        return;
    };

    let mut from = 0;
    for i in 0..stops.len() {
        if !stops[i].is_unset() || i == last {
            fill_segment(stops, from, i);
            from = i;
        }
    }
}

fn fill_segment(stops: &mut [GradientStop], from: usize, to: usize) {
    let mut current = stops[from].offset.max(0.0);
    let end = stops[to].offset.abs();
    let step = if to > from { (end - current) / (to - from) as f32 } else { 0.0 };

    for stop in &mut stops[from..=to] {
        if stop.is_unset() {
            stop.render_offset = current;
        }
        current += step;
    }
}

/// Ordered stop collection with spread behavior.
///
/// Owns its stops exclusively. Every mutation re-normalizes, so render
/// offsets are always current when a shader is built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Gradient {
    stops: Vec<GradientStop>,
    pub spread: SpreadMode,
}

impl Gradient {
    pub fn new(stops: Vec<GradientStop>, spread: SpreadMode) -> Self {
        let mut gradient = Self { stops, spread };
        gradient.normalize();
        gradient
    }

    #[inline]
    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    pub fn set_stops(&mut self, stops: Vec<GradientStop>) {
        self.stops = stops;
        self.normalize();
    }

    pub fn push_stop(&mut self, stop: GradientStop) {
        self.stops.push(stop);
        self.normalize();
    }

    #[inline]
    pub fn is_repeating(&self) -> bool {
        self.spread == SpreadMode::Repeat
    }

    fn normalize(&mut self) {
        normalize_offsets(&mut self.stops);
        log::trace!("gradient normalized: {} stops", self.stops.len());
    }
}

/// Linear gradient definition in canvas pixel space.
///
/// `start` and `end` are positions in the same coordinate space as paths.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub gradient: Gradient,
}

impl LinearGradient {
    pub fn new(start: Vec2, end: Vec2, gradient: Gradient) -> Self {
        Self { start, end, gradient }
    }

    /// Returns true when the gradient definition is structurally usable.
    pub fn is_valid(&self) -> bool {
        self.start.is_finite()
            && self.end.is_finite()
            && self.gradient.stops().len() >= 2
            && self.gradient.stops().iter().all(|s| s.resolved_offset().is_finite() && s.color.is_finite())
            && (self.end.x != self.start.x || self.end.y != self.start.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stops(offsets: &[f32]) -> Vec<GradientStop> {
        offsets.iter().map(|&o| GradientStop::new(o, Color::white())).collect()
    }

    fn rendered(stops: &[GradientStop]) -> Vec<f32> {
        stops.iter().map(GradientStop::resolved_offset).collect()
    }

    // ── normalize_offsets ─────────────────────────────────────────────────

    #[test]
    fn leading_unset_stop_starts_at_zero() {
        let mut s = stops(&[-1.0, 0.8]);
        normalize_offsets(&mut s);
        assert_eq!(s[0].render_offset, 0.0);
        assert_eq!(s[1].render_offset, 0.8);
    }

    #[test]
    fn unset_stops_are_evenly_spaced() {
        let mut s = stops(&[-1.0, -1.0, 1.0]);
        normalize_offsets(&mut s);
        assert_eq!(rendered(&s), vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn interior_run_between_anchors() {
        let mut s = stops(&[0.2, -1.0, -1.0, -1.0, 0.6]);
        normalize_offsets(&mut s);
        let r = rendered(&s);
        let expected = [0.2, 0.3, 0.4, 0.5, 0.6];
        for (got, want) in r.iter().zip(expected) {
            assert!((got - want).abs() < 1e-6, "{got} != {want}");
        }
    }

    #[test]
    fn trailing_unset_stop_ends_at_abs_of_sentinel() {
        let mut s = stops(&[0.2, -1.0]);
        normalize_offsets(&mut s);
        assert!((s[1].render_offset - 1.0).abs() < 1e-6);
    }

    #[test]
    fn declared_offsets_are_untouched() {
        let mut s = stops(&[0.1, -1.0, 0.9]);
        normalize_offsets(&mut s);
        assert_eq!(s[0].offset, 0.1);
        assert_eq!(s[2].offset, 0.9);
        assert_eq!(s[1].offset, -1.0);
        assert!((s[1].render_offset - 0.5).abs() < 1e-6);
    }

    #[test]
    fn fully_declared_sequence_is_unchanged() {
        let original = stops(&[0.0, 0.25, 1.0]);
        let mut s = original.clone();
        normalize_offsets(&mut s);
        assert_eq!(s, original);
    }

    #[test]
    fn normalize_is_idempotent() {
        let mut s = stops(&[-1.0, -1.0, 0.5, -1.0, 1.0]);
        normalize_offsets(&mut s);
        let once = s.clone();
        normalize_offsets(&mut s);
        assert_eq!(s, once);
    }

    #[test]
    fn empty_and_single_stop() {
        let mut empty: Vec<GradientStop> = Vec::new();
        normalize_offsets(&mut empty);

        let mut single = stops(&[-1.0]);
        normalize_offsets(&mut single);
        assert_eq!(single[0].render_offset, 0.0);
    }

    // ── Gradient ──────────────────────────────────────────────────────────

    #[test]
    fn push_stop_renormalizes() {
        let mut g = Gradient::new(stops(&[-1.0, -1.0]), SpreadMode::Pad);
        assert_eq!(rendered(g.stops()), vec![0.0, 1.0]);

        g.push_stop(GradientStop::unset(Color::black()));
        assert_eq!(rendered(g.stops()), vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn linear_gradient_validity() {
        let g = Gradient::new(stops(&[-1.0, -1.0]), SpreadMode::Repeat);
        assert!(g.is_repeating());
        assert!(LinearGradient::new(Vec2::zero(), Vec2::new(0.0, 10.0), g.clone()).is_valid());
        assert!(!LinearGradient::new(Vec2::zero(), Vec2::zero(), g).is_valid());
    }
}
