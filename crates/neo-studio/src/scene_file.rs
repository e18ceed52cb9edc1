//! JSON scene description. Every field is optional; missing fields keep the
//! control defaults.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use neo_engine::coords::{CornerRadii, Vec2, Viewport};
use neo_engine::paint::{Color, Gradient, GradientStop, LinearGradient, SpreadMode};
use neo_ui::style::{DrawMode, NeoStyle, ShadowDrawMode};
use neo_ui::widgets::{button::NeoButton, frame::NeoFrame, progress::NeoProgressView};

pub const DEFAULT_SCENE: &str = include_str!("../scenes/default.json");

/// sRGB bytes, `[r, g, b, a]`.
pub type Rgba = [u8; 4];

fn color(c: Rgba) -> Color {
    Color::from_srgb_u8(c[0], c[1], c[2], c[3])
}

#[derive(Debug, Deserialize)]
pub struct SceneFile {
    #[serde(default)]
    pub canvas: CanvasSpec,
    /// Applied to every widget before its own overrides.
    #[serde(default)]
    pub style: StyleSpec,
    #[serde(default)]
    pub widgets: Vec<WidgetSpec>,
}

#[derive(Debug, Deserialize)]
pub struct CanvasSpec {
    pub width: f32,
    pub height: f32,
}

impl Default for CanvasSpec {
    fn default() -> Self {
        Self { width: 240.0, height: 100.0 }
    }
}

impl CanvasSpec {
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct StyleSpec {
    pub shadow_blur: Option<f32>,
    pub shadow_distance: Option<f32>,
    pub elevation: Option<f32>,
    pub light_shadow_color: Option<Rgba>,
    pub dark_shadow_color: Option<Rgba>,
    pub base_color: Option<Rgba>,
}

impl StyleSpec {
    pub fn apply(&self, style: &mut NeoStyle) {
        if let Some(v) = self.shadow_blur { style.shadow_blur = v; }
        if let Some(v) = self.shadow_distance { style.shadow_distance = v; }
        if let Some(v) = self.elevation { style.elevation = v; }
        if let Some(v) = self.light_shadow_color { style.light_shadow_color = color(v); }
        if let Some(v) = self.dark_shadow_color { style.dark_shadow_color = color(v); }
        if let Some(v) = self.base_color { style.base_color = color(v); }
    }
}

#[derive(Debug, Copy, Clone, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShadowModeSpec {
    #[default]
    OuterOnly,
    InnerOnly,
    All,
}

impl From<ShadowModeSpec> for ShadowDrawMode {
    fn from(v: ShadowModeSpec) -> Self {
        match v {
            ShadowModeSpec::OuterOnly => ShadowDrawMode::OuterOnly,
            ShadowModeSpec::InnerOnly => ShadowDrawMode::InnerOnly,
            ShadowModeSpec::All => ShadowDrawMode::All,
        }
    }
}

#[derive(Debug, Copy, Clone, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawModeSpec {
    #[default]
    Flat,
    Soft,
}

impl From<DrawModeSpec> for DrawMode {
    fn from(v: DrawModeSpec) -> Self {
        match v {
            DrawModeSpec::Flat => DrawMode::Flat,
            DrawModeSpec::Soft => DrawMode::Soft,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StopSpec {
    /// Omitted means "spread evenly between neighbours".
    #[serde(default)]
    pub offset: Option<f32>,
    pub color: Rgba,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GradientSpec {
    pub start: [f32; 2],
    pub end: [f32; 2],
    pub stops: Vec<StopSpec>,
    #[serde(default)]
    pub repeat: bool,
}

impl GradientSpec {
    pub fn build(&self) -> LinearGradient {
        let stops = self
            .stops
            .iter()
            .map(|s| match s.offset {
                Some(offset) => GradientStop::new(offset, color(s.color)),
                None => GradientStop::unset(color(s.color)),
            })
            .collect();
        let spread = if self.repeat { SpreadMode::Repeat } else { SpreadMode::Pad };

        LinearGradient::new(
            Vec2::new(self.start[0], self.start[1]),
            Vec2::new(self.end[0], self.end[1]),
            Gradient::new(stops, spread),
        )
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WidgetSpec {
    Button {
        #[serde(default)]
        style: StyleSpec,
        corner_radius: Option<f32>,
        /// Play the press animation before drawing.
        #[serde(default)]
        press: bool,
        #[serde(default)]
        checked: bool,
    },
    Frame {
        #[serde(default)]
        style: StyleSpec,
        corner_radius: Option<f32>,
        #[serde(default)]
        shadow_draw_mode: ShadowModeSpec,
        #[serde(default)]
        draw_mode: DrawModeSpec,
        show_out: Option<bool>,
        #[serde(default)]
        show_in: bool,
        #[serde(default)]
        is_soft: bool,
        border_color: Option<Rgba>,
        border_width: Option<f32>,
        gradient: Option<GradientSpec>,
    },
    Progress {
        #[serde(default)]
        style: StyleSpec,
        progress: Option<f32>,
        bar_color: Option<Rgba>,
        thickness: Option<f32>,
        /// Animate to this value before drawing.
        animate_to: Option<f32>,
    },
}

/// A control built from its description, plus the animation to play on it.
pub enum Built {
    Button { button: NeoButton, press: bool },
    Frame(NeoFrame),
    Progress { view: NeoProgressView, animate_to: Option<f32> },
}

impl WidgetSpec {
    pub fn kind(&self) -> &'static str {
        match self {
            WidgetSpec::Button { .. } => "button",
            WidgetSpec::Frame { .. } => "frame",
            WidgetSpec::Progress { .. } => "progress",
        }
    }

    pub fn build(&self, shared: &StyleSpec) -> Built {
        let style_for = |own: &StyleSpec| {
            let mut style = NeoStyle::default();
            shared.apply(&mut style);
            own.apply(&mut style);
            style
        };

        match self {
            WidgetSpec::Button { style, corner_radius, press, checked } => {
                let mut button = NeoButton::new().with_style(style_for(style)).checked(*checked);
                if let Some(r) = corner_radius {
                    button = button.corner_radius(CornerRadii::all(*r));
                }
                Built::Button { button, press: *press }
            }
            WidgetSpec::Frame {
                style,
                corner_radius,
                shadow_draw_mode,
                draw_mode,
                show_out,
                show_in,
                is_soft,
                border_color,
                border_width,
                gradient,
            } => {
                let mut frame = NeoFrame::new()
                    .with_style(style_for(style))
                    .shadow_draw_mode((*shadow_draw_mode).into())
                    .draw_mode((*draw_mode).into())
                    .show_out(show_out.unwrap_or(true))
                    .show_in(*show_in)
                    .is_soft(*is_soft);
                if let Some(r) = corner_radius {
                    frame = frame.corner_radius(CornerRadii::all(*r));
                }
                if let Some(c) = border_color {
                    frame = frame.border_color(color(*c));
                }
                if let Some(w) = border_width {
                    frame = frame.border_width(*w);
                }
                if let Some(g) = gradient {
                    frame = frame.fill_gradient(g.build());
                }
                Built::Frame(frame)
            }
            WidgetSpec::Progress { style, progress, bar_color, thickness, animate_to } => {
                let mut view = NeoProgressView::new().with_style(style_for(style));
                if let Some(p) = progress {
                    view = view.progress(*p);
                }
                if let Some(c) = bar_color {
                    view = view.bar_color(color(*c));
                }
                if let Some(t) = thickness {
                    view = view.thickness(*t);
                }
                Built::Progress { view, animate_to: *animate_to }
            }
        }
    }
}

impl SceneFile {
    pub fn parse(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("invalid scene description")
    }

    /// Reads `path`, or the bundled default scene when `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read scene file {}", path.display()))?;
                Self::parse(&json).with_context(|| format!("in {}", path.display()))
            }
            None => Self::parse(DEFAULT_SCENE),
        }
    }
}
