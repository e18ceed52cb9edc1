use neo_engine::coords::Viewport;
use neo_engine::path::Path;
use neo_engine::surface::{Canvas, PathPaint};

use crate::style::NeoStyle;

/// Render context for one draw call.
///
/// Wraps the host canvas together with the single [`PathPaint`] that every
/// pass of the draw mutates in turn.
///
/// Acquiring a painter clears the canvas and primes the paint with the
/// control's base color, fill style and a blur mask of `shadow_blur`.
/// Dropping it restores the canvas to the save count it started with, so a
/// clip opened mid-draw is released on every exit path.
pub struct Painter<'a> {
    canvas: &'a mut dyn Canvas,
    /// Paint reused across passes. Each pass sets what it needs.
    pub paint: PathPaint,
    base_save_count: usize,
}

impl<'a> Painter<'a> {
    pub fn begin(canvas: &'a mut dyn Canvas, style: &NeoStyle) -> Self {
        canvas.clear();
        let base_save_count = canvas.save_count();

        let mut paint = PathPaint::fill(style.base_color);
        paint.set_blur(style.shadow_blur);

        Self { canvas, paint, base_save_count }
    }

    /// Pixel size of the target surface.
    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.canvas.viewport()
    }

    /// Draws `path` with the current paint.
    #[inline]
    pub fn draw(&mut self, path: &Path) {
        self.canvas.draw_path(path, &self.paint);
    }

    // ── clipping ──────────────────────────────────────────────────────────

    /// Saves the canvas and clips it to `path`. Pass the returned count to
    /// [`restore`](Self::restore).
    pub fn clip_to(&mut self, path: &Path) -> usize {
        let count = self.canvas.save();
        self.canvas.clip_path(path);
        count
    }

    /// Ends a clip started with [`clip_to`](Self::clip_to).
    #[inline]
    pub fn restore(&mut self, count: usize) {
        self.canvas.restore_to_count(count);
    }
}

impl Drop for Painter<'_> {
    fn drop(&mut self) {
        if self.canvas.save_count() > self.base_save_count {
            log::trace!(
                "painter released {} pending canvas save(s)",
                self.canvas.save_count() - self.base_save_count
            );
            self.canvas.restore_to_count(self.base_save_count);
        }
    }
}
