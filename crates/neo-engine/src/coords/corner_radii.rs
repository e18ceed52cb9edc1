/// Per-corner radii for a rounded outline (canvas pixels).
///
/// Corners follow CSS convention: top-left, top-right, bottom-right, bottom-left.
///
/// Radii are not checked against the box they round. A radius above half the
/// shorter side produces overlapping arcs; keeping them in range is up to the caller.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    #[inline]
    pub const fn new(top_left: f32, top_right: f32, bottom_right: f32, bottom_left: f32) -> Self {
        Self { top_left, top_right, bottom_right, bottom_left }
    }

    /// Uniform radius on all four corners.
    #[inline]
    pub const fn all(r: f32) -> Self {
        Self { top_left: r, top_right: r, bottom_right: r, bottom_left: r }
    }

    /// No rounding.
    #[inline]
    pub const fn zero() -> Self {
        Self::all(0.0)
    }

    /// Returns true when every radius fits within a `width` x `height` box.
    ///
    /// Path builders do not enforce this.
    #[inline]
    pub fn fits(self, width: f32, height: f32) -> bool {
        let limit = width.min(height) * 0.5;
        [self.top_left, self.top_right, self.bottom_right, self.bottom_left]
            .iter()
            .all(|&r| r >= 0.0 && r <= limit)
    }
}
