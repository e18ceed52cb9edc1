use neo_engine::coords::Viewport;
use neo_engine::surface::{Canvas, DrawOp, RecordingCanvas};

use crate::painter::Painter;
use crate::widget::Widget;

// ── NeoScene ──────────────────────────────────────────────────────────────

/// Owns the canvas a control is drawn into and decides when to redraw it.
///
/// The canvas is public so a host can split-borrow it when replaying ops into
/// a rasterizing backend.
///
/// # Example
///
/// ```rust,ignore
/// let mut scene = NeoScene::new(Viewport::new(240.0, 80.0));
/// let mut progress = NeoProgressView::new();
///
/// // In your frame callback:
/// if let Some(ops) = scene.render_if_dirty(&progress) {
///     backend.replay(ops);
/// }
/// progress.set_progress(0.7); // next frame redraws
/// ```
pub struct NeoScene {
    pub canvas: RecordingCanvas,
    /// Set by [`resize`](Self::resize); forces the next redraw.
    resized: bool,
}

impl NeoScene {
    pub fn new(viewport: Viewport) -> Self {
        Self { canvas: RecordingCanvas::new(viewport), resized: false }
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.canvas.viewport()
    }

    /// Changes the canvas size. The next [`render_if_dirty`](Self::render_if_dirty)
    /// redraws even if the control itself is clean.
    pub fn resize(&mut self, viewport: Viewport) {
        if viewport != self.viewport() {
            log::debug!("scene resized to {}x{}", viewport.width, viewport.height);
            self.canvas.resize(viewport);
            self.resized = true;
        }
    }

    /// Redraws `widget` unconditionally and clears its redraw flag.
    ///
    /// The returned ops are valid until the next render.
    pub fn render(&mut self, widget: &dyn Widget) -> &[DrawOp] {
        widget.invalidation().take();
        self.resized = false;

        let viewport = self.viewport();
        if !viewport.is_valid() {
            log::warn!("rendering into degenerate canvas {}x{}", viewport.width, viewport.height);
        }

        {
            let mut painter = Painter::begin(&mut self.canvas, widget.style());
            widget.draw(&mut painter);
        }

        log::trace!("rendered {} draw ops", self.canvas.ops().len());
        self.canvas.ops()
    }

    /// Redraws `widget` only if it was invalidated or the canvas was resized.
    pub fn render_if_dirty(&mut self, widget: &dyn Widget) -> Option<&[DrawOp]> {
        if widget.invalidation().is_dirty() || self.resized {
            Some(self.render(widget))
        } else {
            None
        }
    }
}
