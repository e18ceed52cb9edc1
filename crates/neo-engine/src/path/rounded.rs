use crate::coords::CornerRadii;

use super::Path;

/// Builds the closed rounded-box outline shared by buttons and frames.
///
/// `width`/`height` describe the content box with padding already removed;
/// `padding` offsets every coordinate so the shape sits inset in a larger
/// canvas. The outline runs clockwise from the top edge, just right of the
/// top-left arc. Zero radii give plain corners (zero-length arcs).
///
/// Radii are not clamped against the box.
pub fn build_rounded_path(width: f32, height: f32, padding: f32, radii: CornerRadii) -> Path {
    let CornerRadii { top_left, top_right, bottom_right, bottom_left } = radii;
    let start_x = top_left + padding;
    let start_y = padding;

    let mut path = Path::new();
    path.move_to(start_x, start_y);

    path.line_to(width - top_right + padding, start_y);
    path.arc_to(top_right, width + padding, top_right + padding);

    path.line_to(width + padding, height - bottom_right + padding);
    path.arc_to(bottom_right, width - bottom_right + padding, height + padding);

    path.line_to(bottom_left + padding, height + padding);
    path.arc_to(bottom_left, padding, height - bottom_left + padding);

    path.line_to(padding, top_left + padding);
    path.arc_to(top_left, start_x, start_y);

    path.close();
    path
}

/// Builds the pill-shaped progress track: two straight edges joined by two
/// semicircular caps of `corner_radius`.
pub fn build_track_path(width: f32, height: f32, padding: f32, corner_radius: f32) -> Path {
    let r = corner_radius;

    let mut path = Path::new();
    path.move_to(r + padding, padding);

    path.line_to(width - r + padding, padding);
    path.arc_to(r, width - r + padding, height + padding);

    path.line_to(r + padding, height + padding);
    path.arc_to(r, r + padding, padding);

    path.close();
    path
}

/// Derived proportions of the progress bar for one progress value.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BarGeometry {
    /// Fraction of the track the bar spans, never below 0.01 so an empty
    /// bar still draws a sliver.
    pub min_progress: f32,
    /// Scale applied to the leading cap radius.
    ///
    /// 0 up to and including 0.5; above that `2 - (1 - (1 - p) / 0.5)`,
    /// which starts near 2 just past the midpoint and falls to 1 at p = 1.
    pub inverted_progress: f32,
}

impl BarGeometry {
    pub fn for_progress(progress: f32) -> Self {
        let inverted_progress = if progress <= 0.5 {
            0.0
        } else {
            2.0 - (1.0 - ((1.0 - progress) / 0.5))
        };

        Self {
            min_progress: progress.max(0.01),
            inverted_progress,
        }
    }
}

/// Builds the filled portion of the progress track.
///
/// The trailing cap keeps the track's `corner_radius`; the leading cap's radius
/// is `corner_radius * inverted_progress` (see [`BarGeometry`]). `progress`
/// is expected in [0, 1]; range checks happen where progress is set, not here.
pub fn build_bar_path(
    width: f32,
    height: f32,
    padding: f32,
    corner_radius: f32,
    progress: f32,
) -> Path {
    let geometry = BarGeometry::for_progress(progress);
    let r = corner_radius;
    let lead_x = (width - r) * geometry.min_progress + padding;

    let mut path = Path::new();
    path.move_to(r + padding, padding);

    path.line_to(lead_x, padding);
    path.arc_to(r * geometry.inverted_progress, lead_x, height + padding);

    path.line_to(r + padding, height + padding);
    path.arc_to(r, r + padding, padding);

    path.close();
    path
}
