use super::Vec2;

/// Axis-aligned rectangle in canvas pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Builds a rectangle spanning two corner points, in any order.
    #[inline]
    pub fn from_points(a: Vec2, b: Vec2) -> Self {
        let x0 = a.x.min(b.x);
        let y0 = a.y.min(b.y);
        Rect::new(x0, y0, a.x.max(b.x) - x0, a.y.max(b.y) - y0)
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x, self.origin.y + self.size.y)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Grows the rectangle to include `p`.
    #[inline]
    pub fn include(self, p: Vec2) -> Self {
        Rect::from_points(
            Vec2::new(self.origin.x.min(p.x), self.origin.y.min(p.y)),
            Vec2::new(self.max().x.max(p.x), self.max().y.max(p.y)),
        )
    }

    /// Expands every edge outward by `amount`.
    #[inline]
    pub fn inflate(self, amount: f32) -> Self {
        Rect::new(
            self.origin.x - amount,
            self.origin.y - amount,
            self.size.x + amount * 2.0,
            self.size.y + amount * 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── from_points ───────────────────────────────────────────────────────

    #[test]
    fn from_points_orders_corners() {
        let rect = Rect::from_points(Vec2::new(10.0, 2.0), Vec2::new(4.0, 8.0));
        assert_eq!(rect, r(4.0, 2.0, 6.0, 6.0));
    }

    // ── include ───────────────────────────────────────────────────────────

    #[test]
    fn include_interior_point_is_identity() {
        let rect = r(0.0, 0.0, 10.0, 10.0);
        assert_eq!(rect.include(Vec2::new(5.0, 5.0)), rect);
    }

    #[test]
    fn include_grows_towards_point() {
        let rect = r(0.0, 0.0, 10.0, 10.0).include(Vec2::new(-2.0, 15.0));
        assert_eq!(rect, r(-2.0, 0.0, 12.0, 15.0));
    }

    // ── inflate ───────────────────────────────────────────────────────────

    #[test]
    fn inflate_moves_every_edge() {
        assert_eq!(r(5.0, 5.0, 10.0, 20.0).inflate(5.0), r(0.0, 0.0, 20.0, 30.0));
    }

    // ── is_empty ──────────────────────────────────────────────────────────

    #[test]
    fn is_empty_zero_size() {
        assert!(r(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(r(0.0, 0.0, 5.0, 0.0).is_empty());
        assert!(!r(0.0, 0.0, 1.0, 1.0).is_empty());
    }
}
