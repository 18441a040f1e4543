//! Bar charts with proportional bar heights.

use log::debug;
use serde::Deserialize;

use tableau_core::{
    color::Color,
    draw::{FillDefinition, Primitive, SceneNode},
    geometry::Point,
};

use crate::{
    builders::{label, outline, palette},
    config::AppConfig,
    error::{DiagramError, Result, check_len, check_positive},
    resolve::scale_proportional,
};

/// Parameters of a bar chart.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BarChart {
    pub values: Vec<f32>,
    pub labels: Option<Vec<String>>,
    /// Bar colors, cycled when there are fewer colors than bars.
    pub colors: Option<Vec<Color>>,
    pub bar_width: f32,
    pub gap: f32,
    /// Height of the tallest bar.
    pub chart_height: f32,
    pub show_values: bool,
    /// Draw a baseline under the bars.
    pub show_axis: bool,
}

impl Default for BarChart {
    fn default() -> Self {
        Self {
            values: Vec::new(),
            labels: None,
            colors: None,
            bar_width: 0.7,
            gap: 0.3,
            chart_height: 4.0,
            show_values: true,
            show_axis: true,
        }
    }
}

impl BarChart {
    fn validate(&self) -> Result<()> {
        if self.values.is_empty() {
            return Err(DiagramError::schema_mismatch("values", "at least one value", 0));
        }
        if let Some(value) = self.values.iter().find(|v| !v.is_finite() || **v < 0.0) {
            return Err(DiagramError::invalid_parameter(
                "values",
                format!("must be finite and non-negative, got {value}"),
            ));
        }
        check_len("labels", self.labels.as_deref(), self.values.len())?;
        if self.colors.as_ref().is_some_and(Vec::is_empty) {
            return Err(DiagramError::schema_mismatch("colors", "at least one color", 0));
        }
        check_positive("bar_width", self.bar_width)?;
        check_positive("chart_height", self.chart_height)?;
        if !self.gap.is_finite() || self.gap < 0.0 {
            return Err(DiagramError::invalid_parameter("gap", "must be non-negative"));
        }
        Ok(())
    }

    /// Resolved bar heights, proportional to the values.
    ///
    /// # Errors
    ///
    /// Returns [`DiagramError::DegenerateRange`] when every value is zero.
    pub fn bar_heights(&self) -> Result<Vec<f32>> {
        let max = self.values.iter().copied().fold(0.0f32, f32::max);
        self.values
            .iter()
            .map(|&value| scale_proportional(value, max, self.chart_height))
            .collect()
    }

    fn color(&self, index: usize) -> Color {
        let palette = palette::series();
        match &self.colors {
            Some(colors) => colors[index % colors.len()],
            None => palette[index % palette.len()],
        }
    }
}

/// Formats a value without a trailing `.0` for whole numbers.
fn format_value(value: f32) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

/// Builds a bar chart.
///
/// Bar `i` is centered at `x = i * (bar_width + gap)`, standing on `y = 0`.
/// Each bar is a sub-node `"bar-{i}"` with its rectangle, optional value
/// label above and optional category label below.
///
/// # Errors
///
/// - [`DiagramError::SchemaMismatch`] for an empty chart or mismatched
///   labels.
/// - [`DiagramError::DegenerateRange`] when every value is zero.
pub fn build(desc: &BarChart, config: &AppConfig) -> Result<SceneNode> {
    desc.validate()?;
    let heights = desc.bar_heights()?;
    let offset = config.layout().label_offset();
    let pitch = desc.bar_width + desc.gap;

    debug!(bars = heights.len(), pitch = pitch; "Resolved bar chart");

    let mut scene = SceneNode::new("bar_chart");
    for (i, (&value, &height)) in desc.values.iter().zip(&heights).enumerate() {
        let x = i as f32 * pitch;
        let color = desc.color(i);
        let mut bar = SceneNode::new(format!("bar-{i}"));
        bar.push(
            Primitive::rectangle(Point::new(x, height / 2.0), desc.bar_width, height)
                .with_fill(FillDefinition::new(color, 0.8))
                .with_stroke(outline(config, color)),
        );
        if desc.show_values {
            bar.push(label(config, Point::new(x, height + offset), format_value(value)));
        }
        if let Some(text) = desc.labels.as_ref().map(|labels| labels[i].as_str()) {
            bar.push(label(config, Point::new(x, -offset), text));
        }
        scene.push_node(bar);
    }

    if desc.show_axis {
        let half = desc.bar_width / 2.0;
        let last = (desc.values.len() - 1) as f32 * pitch;
        scene.push(
            Primitive::line(Point::new(-half - desc.gap, 0.0), Point::new(last + half + desc.gap, 0.0))
                .with_stroke(outline(config, config.style().label_color())),
        );
    }

    Ok(scene)
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    fn check_tallest_bar_reaches_chart_height(values: Vec<f32>) -> std::result::Result<(), TestCaseError> {
        let desc = BarChart {
            values,
            ..BarChart::default()
        };
        let heights = desc.bar_heights().unwrap();
        let tallest = heights.iter().copied().fold(0.0f32, f32::max);
        prop_assert!((tallest - desc.chart_height).abs() < 1e-4);
        prop_assert!(heights.iter().all(|h| *h >= 0.0 && *h <= desc.chart_height + 1e-4));
        Ok(())
    }

    proptest! {
        #[test]
        fn tallest_bar_reaches_chart_height(
            values in prop::collection::vec(0.0f32..1000.0, 1..20)
                .prop_filter("needs a positive value", |v| v.iter().any(|x| *x > 1e-3))
        ) {
            check_tallest_bar_reaches_chart_height(values)?;
        }
    }
}
