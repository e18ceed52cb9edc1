use crate::paint::Color;

/// Blur sigma passed to every drop-shadow filter built by
/// [`DropShadow::symmetric`]. Forwarded to the backend unchanged.
pub const DROP_SHADOW_SIGMA: f32 = -6.0;

/// Paint-level filter applied to whatever the paint draws.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MaskFilter {
    /// Normal-style gaussian blur.
    Blur { sigma: f32 },
}

/// What a drop-shadow filter renders.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShadowMode {
    /// Only the offset, blurred silhouette.
    DrawShadowOnly,
    /// The silhouette followed by the source geometry.
    DrawShadowAndForeground,
}

/// Directional drop-shadow image filter.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DropShadow {
    pub dx: f32,
    pub dy: f32,
    pub sigma_x: f32,
    pub sigma_y: f32,
    pub color: Color,
    pub mode: ShadowMode,
}

impl DropShadow {
    /// Shadow offset by `distance` on both axes, shadow-only.
    ///
    /// Positive distances push the shadow down-right, negative up-left.
    #[inline]
    pub fn symmetric(color: Color, distance: f32) -> Self {
        Self {
            dx: distance,
            dy: distance,
            sigma_x: DROP_SHADOW_SIGMA,
            sigma_y: DROP_SHADOW_SIGMA,
            color,
            mode: ShadowMode::DrawShadowOnly,
        }
    }
}

/// Layer-level filter applied to the result of a draw.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ImageFilter {
    DropShadow(DropShadow),
}

impl ImageFilter {
    /// Convenience for [`DropShadow::symmetric`].
    #[inline]
    pub fn drop_shadow(color: Color, distance: f32) -> Self {
        ImageFilter::DropShadow(DropShadow::symmetric(color, distance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symmetric_shadow_offsets_both_axes() {
        let s = DropShadow::symmetric(Color::black(), -9.0);
        assert_eq!((s.dx, s.dy), (-9.0, -9.0));
        assert_eq!((s.sigma_x, s.sigma_y), (DROP_SHADOW_SIGMA, DROP_SHADOW_SIGMA));
        assert_eq!(s.mode, ShadowMode::DrawShadowOnly);
    }
}
