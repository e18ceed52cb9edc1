use crate::coords::Viewport;
use crate::path::Path;

use super::{Canvas, PathPaint};

/// A single recorded draw: outline, paint snapshot and active clip.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawOp {
    pub path: Path,
    pub paint: PathPaint,
    /// Clip paths in effect, outermost first. The drawable area is their
    /// intersection; empty means unclipped.
    pub clip: Vec<Path>,
}

impl DrawOp {
    #[inline]
    pub fn is_clipped(&self) -> bool {
        !self.clip.is_empty()
    }
}

/// [`Canvas`] that records draws instead of rasterizing them.
///
/// Ops are kept strictly in issue order; nothing is sorted or merged, so the
/// list is exactly the sequence a rasterizing backend would receive.
///
/// # Clipping
///
/// `save` remembers how many clip paths are active; `clip_path` appends one;
/// `restore` truncates back to the remembered length.
///
/// ```ignore
/// let n = canvas.save();
/// canvas.clip_path(&outline);
/// // ... draws here carry `outline` in `DrawOp::clip` ...
/// canvas.restore_to_count(n);
/// ```
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    viewport: Viewport,
    ops: Vec<DrawOp>,

    /// Active clip paths; every op snapshots this.
    clip: Vec<Path>,
    /// `clip.len()` at each `save`.
    saves: Vec<usize>,
}

impl RecordingCanvas {
    #[inline]
    pub fn new(viewport: Viewport) -> Self {
        Self { viewport, ..Self::default() }
    }

    /// Changes the surface size. Recorded ops are kept.
    #[inline]
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Returns ops in issue order.
    #[inline]
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Moves the recorded ops out, leaving the canvas empty.
    #[inline]
    pub fn take_ops(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.ops)
    }
}

impl Canvas for RecordingCanvas {
    #[inline]
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Drops recorded ops and all clip/save state. Keeps allocated capacity.
    fn clear(&mut self) {
        self.ops.clear();
        self.clip.clear();
        self.saves.clear();
    }

    fn draw_path(&mut self, path: &Path, paint: &PathPaint) {
        self.ops.push(DrawOp {
            path: path.clone(),
            paint: paint.clone(),
            clip: self.clip.clone(),
        });
    }

    fn save(&mut self) -> usize {
        let count = self.saves.len();
        self.saves.push(self.clip.len());
        count
    }

    fn restore(&mut self) {
        if let Some(len) = self.saves.pop() {
            self.clip.truncate(len);
        }
    }

    #[inline]
    fn save_count(&self) -> usize {
        self.saves.len()
    }

    fn clip_path(&mut self, path: &Path) {
        self.clip.push(path.clone());
    }
}
