use neo_engine::paint::Color;

/// Whether the blur mask survives onto the base fill.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum DrawMode {
    /// Crisp base surface: the blur mask is dropped before the fill pass.
    #[default]
    Flat,
    /// Soft-edged base surface: the blur mask stays active for the fill.
    Soft,
}

/// Which shadows a control renders.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum ShadowDrawMode {
    /// Raised look: shadows cast outside the outline.
    #[default]
    OuterOnly,
    /// Pressed look: shadows confined inside the outline.
    InnerOnly,
    All,
}

impl ShadowDrawMode {
    #[inline]
    pub fn draws_outer(self) -> bool {
        matches!(self, ShadowDrawMode::OuterOnly | ShadowDrawMode::All)
    }

    #[inline]
    pub fn draws_inner(self) -> bool {
        matches!(self, ShadowDrawMode::InnerOnly | ShadowDrawMode::All)
    }
}

/// Stroke drawn along the outline after every shadow pass.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: Color,
}

impl Border {
    #[inline]
    pub fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }

    /// `None` for a transparent color, which means "no border".
    #[inline]
    pub fn visible(width: f32, color: Color) -> Option<Self> {
        (!color.is_transparent()).then(|| Self::new(width, color))
    }
}

/// Shadow and surface configuration shared by every control.
///
/// Read by value on each draw; nothing is cached between frames.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct NeoStyle {
    /// Blur sigma of the mask filter; also sizes the padding reserved for shadows.
    pub shadow_blur: f32,
    /// Alpha of the dark shadow, in [0, 1].
    pub elevation: f32,
    /// Shadow offset on both axes. Negative values flip the light direction.
    pub shadow_distance: f32,
    pub light_shadow_color: Color,
    pub dark_shadow_color: Color,
    /// Surface color of the control.
    pub base_color: Color,
}

impl NeoStyle {
    /// Dark shadow color with `elevation` as its alpha.
    #[inline]
    pub fn dark_shadow(&self) -> Color {
        self.dark_shadow_color.with_alpha(self.elevation)
    }
}

impl Default for NeoStyle {
    fn default() -> Self {
        Self {
            shadow_blur: 10.0,
            elevation: 0.6,
            shadow_distance: 9.0,
            light_shadow_color: Color::white(),
            dark_shadow_color: Color::black(),
            base_color: Color::gray(),
        }
    }
}
