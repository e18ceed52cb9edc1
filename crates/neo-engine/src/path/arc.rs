use core::f32::consts::{FRAC_PI_2, TAU};

use crate::coords::Vec2;

/// Tolerance for endpoint coincidence and angle range checks.
const EPSILON: f32 = 1e-4;

/// Circular arc resolved from an `ArcTo` command.
///
/// Angles are in radians, measured with +Y down, so a positive sweep runs
/// clockwise on screen.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Arc {
    pub center: Vec2,
    pub radius: f32,
    pub start_angle: f32,
    pub sweep: f32,
}

impl Arc {
    /// Resolves a clockwise minor arc from `from` to `to`.
    ///
    /// Returns `None` when the arc degenerates to a straight segment
    /// (non-positive radius or coincident endpoints).
    pub fn resolve(from: Vec2, to: Vec2, radius: f32) -> Option<Arc> {
        let chord = to - from;
        let len = chord.length();
        if radius <= 0.0 || !radius.is_finite() || len <= EPSILON {
            return None;
        }

        let half = len * 0.5;
        let radius = radius.max(half);
        let rise = (radius * radius - half * half).max(0.0).sqrt();

        // Right-hand normal of the chord (screen space) points at the center
        // of the clockwise minor arc.
        let normal = Vec2::new(-chord.y, chord.x) / len;
        let center = (from + to) * 0.5 + normal * rise;

        let start_angle = angle_of(from - center);
        let end_angle = angle_of(to - center);
        let sweep = (end_angle - start_angle).rem_euclid(TAU);

        Some(Arc { center, radius, start_angle, sweep })
    }

    /// Point on the circle at `angle`.
    #[inline]
    pub fn point_at(&self, angle: f32) -> Vec2 {
        self.center + Vec2::new(angle.cos(), angle.sin()) * self.radius
    }

    /// Axis-aligned extreme points crossed by the sweep (excluding endpoints).
    pub fn extrema(&self) -> Vec<Vec2> {
        (0..4)
            .map(|k| k as f32 * FRAC_PI_2)
            .filter(|&axis| {
                let delta = (axis - self.start_angle).rem_euclid(TAU);
                delta <= self.sweep + EPSILON || delta >= TAU - EPSILON
            })
            .map(|axis| self.point_at(axis))
            .collect()
    }
}

#[inline]
fn angle_of(v: Vec2) -> f32 {
    v.y.atan2(v.x)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-3 && (a.y - b.y).abs() < 1e-3
    }

    #[test]
    fn quarter_turn_top_right_corner() {
        let arc = Arc::resolve(Vec2::new(90.0, 0.0), Vec2::new(100.0, 10.0), 10.0).unwrap();
        assert!(approx(arc.center, Vec2::new(90.0, 10.0)));
        assert!((arc.sweep - FRAC_PI_2).abs() < 1e-4);
    }

    #[test]
    fn quarter_turn_bottom_left_corner() {
        let arc = Arc::resolve(Vec2::new(10.0, 50.0), Vec2::new(0.0, 40.0), 10.0).unwrap();
        assert!(approx(arc.center, Vec2::new(10.0, 40.0)));
    }

    #[test]
    fn short_radius_is_raised_to_half_chord() {
        let arc = Arc::resolve(Vec2::new(0.0, 0.0), Vec2::new(0.0, 10.0), 1.0).unwrap();
        assert_eq!(arc.radius, 5.0);
        assert!((arc.sweep - core::f32::consts::PI).abs() < 1e-4);
    }

    #[test]
    fn semicircle_extrema_include_far_side() {
        let arc = Arc::resolve(Vec2::new(0.0, 0.0), Vec2::new(0.0, 10.0), 5.0).unwrap();
        let ext = arc.extrema();
        assert!(ext.iter().any(|&p| approx(p, Vec2::new(5.0, 5.0))));
        assert!(!ext.iter().any(|&p| approx(p, Vec2::new(-5.0, 5.0))));
    }

    #[test]
    fn degenerate_inputs_resolve_to_none() {
        assert!(Arc::resolve(Vec2::zero(), Vec2::new(5.0, 5.0), 0.0).is_none());
        assert!(Arc::resolve(Vec2::new(3.0, 3.0), Vec2::new(3.0, 3.0), 4.0).is_none());
    }
}
