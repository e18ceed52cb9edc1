//! Human-readable listing of recorded draw ops.

use std::fmt::Write as _;

use neo_engine::surface::{DrawOp, ImageFilter, MaskFilter, PaintStyle};

/// One line per op: style, color, filters, clip depth and outline bounds.
pub fn describe(op: &DrawOp) -> String {
    let paint = &op.paint;
    let mut line = String::new();

    let style = match paint.style {
        PaintStyle::Fill => "fill".to_string(),
        PaintStyle::Stroke => format!("stroke {:.1}", paint.stroke_width),
    };
    let (r, g, b, a) = paint.color.to_straight();
    let _ = write!(line, "{style:<11} rgba({r:.2}, {g:.2}, {b:.2}, {a:.2})");

    if let Some(MaskFilter::Blur { sigma }) = paint.mask_filter {
        let _ = write!(line, "  blur {sigma:.1}");
    }
    if let Some(ImageFilter::DropShadow(shadow)) = paint.image_filter {
        let _ = write!(line, "  shadow ({:+.1}, {:+.1})", shadow.dx, shadow.dy);
    }
    if paint.shader.is_some() {
        line.push_str("  gradient");
    }
    if op.is_clipped() {
        let _ = write!(line, "  clip x{}", op.clip.len());
    }
    if let Some(bounds) = op.path.bounds() {
        let _ = write!(
            line,
            "  @ {:.1},{:.1} {:.1}x{:.1}",
            bounds.origin.x, bounds.origin.y, bounds.size.x, bounds.size.y
        );
    }

    line
}
