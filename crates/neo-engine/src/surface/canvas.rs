use crate::coords::Viewport;
use crate::path::Path;

use super::PathPaint;

/// A 2D drawing surface.
///
/// Draws are applied in call order; later draws cover earlier ones.
/// Clip state nests with `save`/`restore` the way Skia-style canvases do.
pub trait Canvas {
    /// Pixel size of the surface.
    fn viewport(&self) -> Viewport;

    /// Erases all content and resets clip and save state, leaving
    /// `save_count() == 0`.
    fn clear(&mut self);

    fn draw_path(&mut self, path: &Path, paint: &PathPaint);

    /// Pushes the current clip state. Returns the save count before the push.
    fn save(&mut self) -> usize;

    /// Pops the most recent `save`. No-op when nothing is saved.
    fn restore(&mut self);

    /// Current depth of the save stack.
    fn save_count(&self) -> usize;

    /// Intersects the current clip with `path`.
    fn clip_path(&mut self, path: &Path);

    /// Pops saves until `save_count() == count`.
    fn restore_to_count(&mut self, count: usize) {
        while self.save_count() > count {
            self.restore();
        }
    }
}
