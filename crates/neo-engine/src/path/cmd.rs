use crate::coords::{Rect, Vec2};

use super::Arc;

/// A single outline command.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathCmd {
    MoveTo(Vec2),
    LineTo(Vec2),
    /// Clockwise minor circular arc from the current point to `to`.
    ///
    /// `radius <= 0` (or `to` equal to the current point) draws a straight line.
    /// A radius shorter than half the chord is raised to half the chord.
    ArcTo { radius: f32, to: Vec2 },
    Close,
}

/// Ordered outline made of [`PathCmd`]s.
///
/// Paths are plain values: built, handed to a canvas and dropped within one
/// draw call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    cmds: Vec<PathCmd>,
}

impl Path {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn cmds(&self) -> &[PathCmd] {
        &self.cmds
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    #[inline]
    pub fn move_to(&mut self, x: f32, y: f32) {
        self.cmds.push(PathCmd::MoveTo(Vec2::new(x, y)));
    }

    #[inline]
    pub fn line_to(&mut self, x: f32, y: f32) {
        self.cmds.push(PathCmd::LineTo(Vec2::new(x, y)));
    }

    #[inline]
    pub fn arc_to(&mut self, radius: f32, x: f32, y: f32) {
        self.cmds.push(PathCmd::ArcTo { radius, to: Vec2::new(x, y) });
    }

    #[inline]
    pub fn close(&mut self) {
        self.cmds.push(PathCmd::Close);
    }

    /// Number of contours (one per `MoveTo`).
    pub fn contour_count(&self) -> usize {
        self.cmds.iter().filter(|c| matches!(c, PathCmd::MoveTo(_))).count()
    }

    /// True when every contour ends with `Close`.
    pub fn is_closed(&self) -> bool {
        let mut open = false;
        for cmd in &self.cmds {
            match cmd {
                PathCmd::MoveTo(_) => {
                    if open {
                        return false;
                    }
                    open = true;
                }
                PathCmd::Close => open = false,
                _ => {}
            }
        }
        !open && !self.cmds.is_empty()
    }

    /// Resolved arcs in outline order, skipping arcs that degenerate to lines.
    pub fn arcs(&self) -> Vec<Arc> {
        let mut arcs = Vec::new();
        self.walk(|from, cmd| {
            if let PathCmd::ArcTo { radius, to } = cmd {
                if let Some(arc) = Arc::resolve(from, to, radius) {
                    arcs.push(arc);
                }
            }
        });
        arcs
    }

    /// Exact axis-aligned bounds, including arc extrema.
    ///
    /// Returns `None` for an empty path.
    pub fn bounds(&self) -> Option<Rect> {
        let mut bounds: Option<Rect> = None;
        let mut grow = |p: Vec2| {
            bounds = Some(match bounds {
                None => Rect::new(p.x, p.y, 0.0, 0.0),
                Some(b) => b.include(p),
            });
        };

        self.walk(|from, cmd| match cmd {
            PathCmd::MoveTo(p) | PathCmd::LineTo(p) => grow(p),
            PathCmd::ArcTo { radius, to } => {
                grow(from);
                if let Some(arc) = Arc::resolve(from, to, radius) {
                    arc.extrema().into_iter().for_each(&mut grow);
                }
                grow(to);
            }
            PathCmd::Close => {}
        });

        bounds
    }

    /// Visits each command together with the pen position it starts from.
    fn walk(&self, mut f: impl FnMut(Vec2, PathCmd)) {
        let mut pen = Vec2::zero();
        let mut contour_start = Vec2::zero();

        for &cmd in &self.cmds {
            f(pen, cmd);
            match cmd {
                PathCmd::MoveTo(p) => {
                    pen = p;
                    contour_start = p;
                }
                PathCmd::LineTo(p) | PathCmd::ArcTo { to: p, .. } => pen = p,
                PathCmd::Close => pen = contour_start,
            }
        }
    }
}
