//! Stroke and line-style definitions.
//!
//! # Overview
//!
//! - [`StrokeDefinition`]: color, width, style, cap and join of an outline
//! - [`StrokeStyle`]: line patterns (solid, dashed, dotted, etc.)
//! - [`StrokeCap`]: how line endpoints are rendered
//! - [`StrokeJoin`]: how line corners are rendered
//! - [`apply_stroke!`](crate::apply_stroke!): applies a stroke to an SVG element
//!
//! Terminology follows SVG/CSS so that renderers can map the values one to
//! one. Widths are in renderer units (pixels for the SVG preview), not
//! scene units, so a diagram keeps crisp outlines at any zoom.
//!
//! ```
//! use tableau_core::color::{Color, css};
//! use tableau_core::draw::{StrokeCap, StrokeDefinition};
//!
//! let axis = StrokeDefinition::solid(Color::from(css::WHITE), 2.0);
//! let net_force = StrokeDefinition::dashed(Color::from(css::ORANGE), 4.0)
//!     .with_cap(StrokeCap::Round);
//! assert_eq!(axis.width(), 2.0);
//! assert_eq!(net_force.cap(), StrokeCap::Round);
//! ```

use std::str::FromStr;

use crate::color::Color;

/// Defines the visual style of a stroke, including dash patterns.
///
/// # SVG Mapping
///
/// - `Solid`: No dasharray attribute
/// - `Dashed`: "5,5"
/// - `Dotted`: "2,3"
/// - `DashDot`: "10,5,2,5"
/// - `Custom(pattern)`: Uses the provided pattern string
#[derive(Debug, Default, Clone, PartialEq)]
pub enum StrokeStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
    DashDot,
    /// Custom SVG dasharray pattern, e.g. "10,5,2,3"
    Custom(String),
}

impl FromStr for StrokeStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "solid" => Ok(Self::Solid),
            "dashed" => Ok(Self::Dashed),
            "dotted" => Ok(Self::Dotted),
            "dash-dot" | "dashdot" => Ok(Self::DashDot),
            // Any other value is treated as a custom dasharray pattern
            _ => Ok(Self::Custom(s.to_string())),
        }
    }
}

impl StrokeStyle {
    /// Returns the SVG dasharray value for this style, or None for solid lines
    pub fn to_svg_value(&self) -> Option<String> {
        match self {
            Self::Solid => None,
            Self::Dashed => Some("5,5".to_string()),
            Self::Dotted => Some("2,3".to_string()),
            Self::DashDot => Some("10,5,2,5".to_string()),
            Self::Custom(pattern) => Some(pattern.clone()),
        }
    }
}

/// Defines how line endpoints are rendered.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeCap {
    #[default]
    Butt,
    Round,
    Square,
}

impl StrokeCap {
    /// Returns the SVG stroke-linecap value
    pub fn to_svg_value(&self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
            Self::Square => "square",
        }
    }
}

/// Defines how line corners (joins) are rendered.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

impl StrokeJoin {
    /// Returns the SVG stroke-linejoin value
    pub fn to_svg_value(&self) -> &'static str {
        match self {
            Self::Miter => "miter",
            Self::Round => "round",
            Self::Bevel => "bevel",
        }
    }
}

/// A stroke definition for outlines, lines and arcs.
///
/// Strokes are immutable values; the `with_*` methods return a modified copy
/// so a builder can derive variants from one base stroke.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    style: StrokeStyle,
    cap: StrokeCap,
    join: StrokeJoin,
}

impl StrokeDefinition {
    /// Creates a new solid stroke with the given color and width.
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            ..Self::default()
        }
    }

    /// Creates a solid stroke (convenience constructor).
    pub fn solid(color: Color, width: f32) -> Self {
        Self::new(color, width)
    }

    /// Creates a dashed stroke (convenience constructor).
    pub fn dashed(color: Color, width: f32) -> Self {
        Self::new(color, width).with_style(StrokeStyle::Dashed)
    }

    /// Creates a dotted stroke (convenience constructor).
    pub fn dotted(color: Color, width: f32) -> Self {
        Self::new(color, width).with_style(StrokeStyle::Dotted)
    }

    /// Returns the stroke color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the stroke width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the stroke style.
    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    /// Returns the stroke cap style.
    pub fn cap(&self) -> StrokeCap {
        self.cap
    }

    /// Returns the stroke join style.
    pub fn join(&self) -> StrokeJoin {
        self.join
    }

    /// Returns a copy with the given color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Returns a copy with the given width.
    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    /// Returns a copy with the given style.
    pub fn with_style(mut self, style: StrokeStyle) -> Self {
        self.style = style;
        self
    }

    /// Returns a copy with the given cap.
    pub fn with_cap(mut self, cap: StrokeCap) -> Self {
        self.cap = cap;
        self
    }

    /// Returns a copy with the given join.
    pub fn with_join(mut self, join: StrokeJoin) -> Self {
        self.join = join;
        self
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self {
            color: Color::default(),
            width: 1.0,
            style: StrokeStyle::default(),
            cap: StrokeCap::default(),
            join: StrokeJoin::default(),
        }
    }
}

/// Apply all stroke attributes to an SVG element.
///
/// Applies color, opacity, width, line cap, line join, and dash pattern (if
/// not solid). Pass `None` to emit `stroke="none"`.
///
/// # Examples
///
/// ```
/// use tableau_core::color::{Color, css};
/// use tableau_core::draw::StrokeDefinition;
/// use svg::node::element as svg_element;
///
/// let stroke = Some(StrokeDefinition::dashed(Color::from(css::BLACK), 2.0));
/// let line = svg_element::Line::new().set("x1", 0).set("x2", 10);
/// let line = tableau_core::apply_stroke!(line, stroke.as_ref());
/// assert!(line.to_string().contains("stroke-dasharray"));
/// ```
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        match $stroke {
            Some(stroke) => {
                let mut elem = $element
                    .set("stroke", stroke.color().with_alpha(1.0).to_string())
                    .set("stroke-opacity", stroke.color().alpha())
                    .set("stroke-width", stroke.width())
                    .set("stroke-linecap", stroke.cap().to_svg_value())
                    .set("stroke-linejoin", stroke.join().to_svg_value());

                if let Some(dasharray) = stroke.style().to_svg_value() {
                    elem = elem.set("stroke-dasharray", dasharray);
                }

                elem
            }
            None => $element.set("stroke", "none"),
        }
    }};
}
