use neo_engine::paint::Color;

use crate::invalidation::Invalidation;
use crate::painter::Painter;
use crate::style::NeoStyle;

// ── Widget trait ──────────────────────────────────────────────────────────

/// A neumorphic control.
///
/// Controls are configuration holders: on every draw they read their fields
/// by value and hand them to a [`DrawPolicy`](crate::policy::DrawPolicy).
///
/// ```rust,ignore
/// let mut scene = NeoScene::new(Viewport::new(200.0, 80.0));
/// let button = NeoButton::new().corner_radius(CornerRadii::all(12.0));
///
/// if let Some(ops) = scene.render_if_dirty(&button) {
///     backend.replay(ops);
/// }
/// ```
pub trait Widget {
    /// Shadow configuration; also primes the painter's paint.
    fn style(&self) -> &NeoStyle;

    /// Redraw flag raised by setters.
    fn invalidation(&self) -> &Invalidation;

    /// Draws the control into `painter`, filling the painter's viewport.
    fn draw(&self, painter: &mut Painter<'_>);
}

// ── Styled ────────────────────────────────────────────────────────────────

/// Invalidating setters for the shared [`NeoStyle`] fields.
pub trait Styled {
    /// Split borrow of the style and the flag guarding it.
    fn style_parts(&mut self) -> (&mut NeoStyle, &Invalidation);

    /// Applies `f` to the style; raises the flag if anything changed.
    fn update_style(&mut self, f: impl FnOnce(&mut NeoStyle))
    where
        Self: Sized,
    {
        let (style, invalidation) = self.style_parts();
        let before = *style;
        f(style);
        if *style != before {
            invalidation.invalidate();
        }
    }

    fn set_style(&mut self, style: NeoStyle)
    where
        Self: Sized,
    {
        self.update_style(|s| *s = style);
    }

    fn set_shadow_blur(&mut self, v: f32)
    where
        Self: Sized,
    {
        self.update_style(|s| s.shadow_blur = v);
    }

    fn set_shadow_distance(&mut self, v: f32)
    where
        Self: Sized,
    {
        self.update_style(|s| s.shadow_distance = v);
    }

    fn set_elevation(&mut self, v: f32)
    where
        Self: Sized,
    {
        self.update_style(|s| s.elevation = v);
    }

    fn set_base_color(&mut self, v: Color)
    where
        Self: Sized,
    {
        self.update_style(|s| s.base_color = v);
    }

    fn set_light_shadow_color(&mut self, v: Color)
    where
        Self: Sized,
    {
        self.update_style(|s| s.light_shadow_color = v);
    }

    fn set_dark_shadow_color(&mut self, v: Color)
    where
        Self: Sized,
    {
        self.update_style(|s| s.dark_shadow_color = v);
    }
}
