//! Configuration types for diagram composition.
//!
//! This module provides configuration structures that control the geometric
//! constants and default styling shared by every diagram builder. All types
//! implement [`serde::Deserialize`] for loading from external sources; any
//! field left out keeps its documented default.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout and style settings.
//! - [`LayoutConfig`] - Geometric constants (arc radii, offsets, spacings).
//! - [`StyleConfig`] - Default stroke width, font sizing and colors.
//!
//! # Example
//!
//! ```
//! # use tableau::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.layout().angle_arc_radius(), 0.4);
//! assert_eq!(config.style().font_size(), 24.0);
//! ```

use serde::Deserialize;

use tableau_core::color::{Color, css};

/// Top-level configuration combining layout and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and style configurations.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Geometric constants used while resolving diagrams, in scene units.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Radius of angle arcs drawn at triangle and circle vertices.
    angle_arc_radius: f32,
    /// Angle labels sit on the bisector at `angle_arc_radius * angle_label_factor`.
    angle_label_factor: f32,
    /// Distance between a labelled feature and its label.
    label_offset: f32,
    /// Length of congruence tick marks.
    tick_length: f32,
    /// Distance between neighbouring congruence tick marks.
    tick_spacing: f32,
    /// Empty space between consecutive flowchart boxes.
    flowchart_gap: f32,
    /// Radius of an atom's nucleus.
    nucleus_radius: f32,
    /// Radial distance between consecutive electron shells.
    shell_spacing: f32,
    /// Draw right angles as square corner marks instead of arcs.
    right_angle_marks: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            angle_arc_radius: 0.4,
            angle_label_factor: 1.8,
            label_offset: 0.3,
            tick_length: 0.2,
            tick_spacing: 0.08,
            flowchart_gap: 0.5,
            nucleus_radius: 0.35,
            shell_spacing: 0.55,
            right_angle_marks: true,
        }
    }
}

impl LayoutConfig {
    pub fn angle_arc_radius(&self) -> f32 {
        self.angle_arc_radius
    }

    pub fn angle_label_factor(&self) -> f32 {
        self.angle_label_factor
    }

    pub fn label_offset(&self) -> f32 {
        self.label_offset
    }

    pub fn tick_length(&self) -> f32 {
        self.tick_length
    }

    pub fn tick_spacing(&self) -> f32 {
        self.tick_spacing
    }

    pub fn flowchart_gap(&self) -> f32 {
        self.flowchart_gap
    }

    pub fn nucleus_radius(&self) -> f32 {
        self.nucleus_radius
    }

    pub fn shell_spacing(&self) -> f32 {
        self.shell_spacing
    }

    pub fn right_angle_marks(&self) -> bool {
        self.right_angle_marks
    }

    /// Returns a copy with right-angle corner marks switched on or off.
    pub fn with_right_angle_marks(mut self, enabled: bool) -> Self {
        self.right_angle_marks = enabled;
        self
    }

    /// Returns a copy with a different angle arc radius.
    pub fn with_angle_arc_radius(mut self, radius: f32) -> Self {
        self.angle_arc_radius = radius;
        self
    }

    /// Returns a copy with a different gap between flowchart boxes.
    pub fn with_flowchart_gap(mut self, gap: f32) -> Self {
        self.flowchart_gap = gap;
        self
    }
}

/// Default visual styling applied by builders.
///
/// Font sizes are expressed in points, the way diagram authors specify
/// them; `font_scale` converts points to scene units when a builder needs to
/// reserve space for text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    stroke_width: f32,
    font_size: f32,
    font_scale: f32,
    label_color: Color,
    background_color: Color,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            stroke_width: 2.0,
            font_size: 24.0,
            font_scale: 0.02,
            label_color: Color::from(css::WHITE),
            background_color: Color::from_rgb8(0x1e, 0x1e, 0x1e),
        }
    }
}

impl StyleConfig {
    /// Default stroke width for outlines and connectors.
    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    /// Default label font size, in points.
    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// Scene units per font point.
    pub fn font_scale(&self) -> f32 {
        self.font_scale
    }

    pub fn label_color(&self) -> Color {
        self.label_color
    }

    pub fn background_color(&self) -> Color {
        self.background_color
    }

    /// Converts a font size in points to scene units.
    pub fn font_units(&self, font_size: f32) -> f32 {
        font_size * self.font_scale
    }

    /// Returns a copy with a different background color.
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }
}
