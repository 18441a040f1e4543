//! Preview export of composed scenes.
//!
//! The engine's output is the [`SceneNode`](tableau_core::draw::SceneNode)
//! tree itself; exporters here only turn it into something a person can look
//! at while authoring descriptors.
//!
//! # Available Backends
//!
//! - [`svg`]: standalone SVG documents via [`svg::render_svg`]

pub mod svg;

use serde::Deserialize;

use tableau_core::color::Color;

use crate::config::AppConfig;

/// Page settings shared by export backends.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Output pixels per scene unit.
    pub pixels_per_unit: f32,
    /// Blank margin around the scene, in scene units.
    pub padding: f32,
    /// Page background; `None` leaves it transparent.
    pub background: Option<Color>,
    /// Scene units per font point.
    pub font_scale: f32,
    /// Scene units a point moves down and left per unit of depth.
    pub depth_shift: f32,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            pixels_per_unit: 80.0,
            padding: 0.5,
            background: Some(Color::from_rgb8(0x1e, 0x1e, 0x1e)),
            font_scale: 0.02,
            depth_shift: 0.35,
        }
    }
}

impl ExportOptions {
    /// Options matching the background and font scale of `config`.
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            background: Some(config.style().background_color()),
            font_scale: config.style().font_scale(),
            ..Self::default()
        }
    }

    pub fn with_pixels_per_unit(mut self, pixels_per_unit: f32) -> Self {
        self.pixels_per_unit = pixels_per_unit;
        self
    }

    pub fn with_background(mut self, background: Option<Color>) -> Self {
        self.background = background;
        self
    }
}
