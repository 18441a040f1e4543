//! Diagram builders, one module per diagram family.
//!
//! Every builder follows the same three steps: validate the descriptor
//! (failing before any primitive exists), resolve coordinates through
//! [`crate::resolve`] and [`crate::layout`], then assemble a
//! [`SceneNode`](tableau_core::draw::SceneNode) in paint order.

pub mod atom;
pub mod axes_vector;
pub mod bar_chart;
pub mod cartesian_graph;
pub mod circle_geometry;
pub mod code_block;
pub mod congruence;
pub mod flowchart;
pub mod force_diagram;
pub mod illustration;
pub mod triangle;

use tableau_core::{
    color::Color,
    draw::{FillDefinition, Primitive, StrokeDefinition},
    geometry::Point,
};

use crate::config::AppConfig;

/// Radius of marker dots on points of interest.
pub(crate) const DOT_RADIUS: f32 = 0.08;

/// Solid stroke in `color` at the configured width.
pub(crate) fn outline(config: &AppConfig, color: Color) -> StrokeDefinition {
    StrokeDefinition::solid(color, config.style().stroke_width())
}

/// Label in the configured font size and label color.
pub(crate) fn label(config: &AppConfig, position: Point, text: impl Into<String>) -> Primitive {
    colored_label(config, position, text, config.style().label_color())
}

/// Label in the configured font size with a specific color.
pub(crate) fn colored_label(
    config: &AppConfig,
    position: Point,
    text: impl Into<String>,
    color: Color,
) -> Primitive {
    Primitive::label(position, text, config.style().font_size()).with_fill(FillDefinition::solid(color))
}

/// Filled marker dot.
pub(crate) fn marker(center: Point, color: Color) -> Primitive {
    Primitive::dot(center, DOT_RADIUS).with_fill(FillDefinition::solid(color))
}

/// Default colors used when a descriptor does not name one.
pub(crate) mod palette {
    use tableau_core::color::Color;

    pub fn blue() -> Color {
        Color::from_rgb8(0x58, 0xc4, 0xdd)
    }

    pub fn red() -> Color {
        Color::from_rgb8(0xfc, 0x62, 0x55)
    }

    pub fn green() -> Color {
        Color::from_rgb8(0x83, 0xc1, 0x67)
    }

    pub fn yellow() -> Color {
        Color::from_rgb8(0xff, 0xff, 0x00)
    }

    pub fn orange() -> Color {
        Color::from_rgb8(0xff, 0x86, 0x2f)
    }

    pub fn purple() -> Color {
        Color::from_rgb8(0x9a, 0x72, 0xac)
    }

    pub fn gray() -> Color {
        Color::from_rgb8(0x88, 0x88, 0x88)
    }

    pub fn pink() -> Color {
        Color::from_rgb8(0xd1, 0x47, 0xbd)
    }

    pub fn cyan() -> Color {
        Color::from_rgb8(0x00, 0xff, 0xff)
    }

    pub fn white() -> Color {
        Color::from_rgb8(0xff, 0xff, 0xff)
    }

    /// Cycle used for multi-series defaults such as bar colors.
    pub fn series() -> [Color; 5] {
        [blue(), green(), yellow(), orange(), purple()]
    }
}
