//! Fill definitions for closed primitives and label text.

use crate::color::Color;

/// Interior paint of a primitive: a color and an opacity.
///
/// The opacity is kept separate from the color's own alpha so that
/// descriptors can express "blue at 10%" the way diagram authors think about
/// it; [`FillDefinition::effective_color`] folds the two together.
///
/// # Examples
///
/// ```
/// use tableau_core::color::{Color, css};
/// use tableau_core::draw::FillDefinition;
///
/// let fill = FillDefinition::new(Color::from(css::BLUE), 0.1);
/// assert_eq!(fill.opacity(), 0.1);
/// assert!((fill.effective_color().alpha() - 0.1).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillDefinition {
    color: Color,
    opacity: f32,
}

impl FillDefinition {
    /// Creates a fill; `opacity` is clamped into `[0, 1]`.
    pub fn new(color: Color, opacity: f32) -> Self {
        Self {
            color,
            opacity: opacity.clamp(0.0, 1.0),
        }
    }

    /// Creates a fully opaque fill.
    pub fn solid(color: Color) -> Self {
        Self::new(color, 1.0)
    }

    /// Returns the fill color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the fill opacity.
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Returns the color with the opacity multiplied into its alpha channel.
    pub fn effective_color(&self) -> Color {
        self.color.with_alpha(self.color.alpha() * self.opacity)
    }
}

/// Apply a fill definition to an SVG element.
///
/// Sets `fill` and `fill-opacity`; pass `None` to emit `fill="none"`.
///
/// # Examples
///
/// ```
/// use tableau_core::color::{Color, css};
/// use tableau_core::draw::FillDefinition;
/// use svg::node::element as svg_element;
///
/// let fill = Some(FillDefinition::new(Color::from(css::RED), 0.5));
/// let circle = tableau_core::apply_fill!(svg_element::Circle::new(), fill.as_ref());
/// assert!(circle.to_string().contains("fill-opacity"));
/// ```
#[macro_export]
macro_rules! apply_fill {
    ($element:expr, $fill:expr) => {{
        match $fill {
            Some(fill) => $element
                .set("fill", fill.color().with_alpha(1.0).to_string())
                .set("fill-opacity", fill.color().alpha() * fill.opacity()),
            None => $element.set("fill", "none"),
        }
    }};
}
