//! Function plots on labelled cartesian axes.

use std::{fmt, sync::Arc};

use log::debug;
use serde::Deserialize;

use tableau_core::{
    color::Color,
    draw::{Primitive, SceneNode, StrokeDefinition},
    geometry::Point,
};

use crate::{
    builders::{label, outline, palette},
    config::AppConfig,
    error::{DiagramError, Result, check_positive},
    layout::AxisRange,
};

/// Upper bound on the number of samples a single curve takes.
pub const MAX_SAMPLES: usize = 100_000;

fn one() -> f32 {
    1.0
}

/// A caller-supplied function, usable from code only.
#[derive(Clone)]
pub struct CustomFn(Arc<dyn Fn(f32) -> f32 + Send + Sync>);

impl CustomFn {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(f32) -> f32 + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }
}

impl fmt::Debug for CustomFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CustomFn(..)")
    }
}

impl PartialEq for CustomFn {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// The function to plot.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Curve {
    /// `slope * x + intercept`
    Linear {
        #[serde(default = "one")]
        slope: f32,
        #[serde(default)]
        intercept: f32,
    },
    /// `c0 + c1 * x + c2 * x^2 + ...`
    Polynomial { coefficients: Vec<f32> },
    /// `amplitude * sin(frequency * x + phase)`
    Sine {
        #[serde(default = "one")]
        amplitude: f32,
        #[serde(default = "one")]
        frequency: f32,
        #[serde(default)]
        phase: f32,
    },
    /// `amplitude * cos(frequency * x + phase)`
    Cosine {
        #[serde(default = "one")]
        amplitude: f32,
        #[serde(default = "one")]
        frequency: f32,
        #[serde(default)]
        phase: f32,
    },
    /// `amplitude * e^(rate * x)`
    Exponential {
        #[serde(default = "one")]
        amplitude: f32,
        #[serde(default = "one")]
        rate: f32,
    },
    #[serde(skip)]
    Custom(CustomFn),
}

impl Default for Curve {
    fn default() -> Self {
        Self::Linear {
            slope: 1.0,
            intercept: 0.0,
        }
    }
}

impl Curve {
    /// Wraps a closure as a curve.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tableau::builders::cartesian_graph::Curve;
    /// let square = Curve::custom(|x| x * x);
    /// assert_eq!(square.eval(3.0), 9.0);
    /// ```
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(f32) -> f32 + Send + Sync + 'static,
    {
        Self::Custom(CustomFn::new(f))
    }

    pub fn eval(&self, x: f32) -> f32 {
        match self {
            Self::Linear { slope, intercept } => slope.mul_add(x, *intercept),
            // Horner's rule, highest power first
            Self::Polynomial { coefficients } => coefficients
                .iter()
                .rev()
                .fold(0.0f32, |acc, c| acc.mul_add(x, *c)),
            Self::Sine {
                amplitude,
                frequency,
                phase,
            } => amplitude * frequency.mul_add(x, *phase).sin(),
            Self::Cosine {
                amplitude,
                frequency,
                phase,
            } => amplitude * frequency.mul_add(x, *phase).cos(),
            Self::Exponential { amplitude, rate } => amplitude * (rate * x).exp(),
            Self::Custom(f) => (f.0)(x),
        }
    }

    /// Lazily samples the curve over `[min, max]` every `step`.
    ///
    /// A step that would take more than [`MAX_SAMPLES`] samples is widened
    /// to exactly that many.
    pub fn samples(&self, min: f32, max: f32, step: f32) -> SampleIter<'_> {
        SampleIter::new(self, min, max, step)
    }
}

/// Lazy iterator over `(x, f(x))` samples of a [`Curve`].
///
/// Yields `x_i = min + i * step` for `i` in `0..=n`, with the last sample
/// clamped to `max`. A clone taken before iterating replays the same
/// sequence.
#[derive(Debug, Clone)]
pub struct SampleIter<'a> {
    curve: &'a Curve,
    min: f32,
    max: f32,
    step: f32,
    index: usize,
    last: usize,
}

impl<'a> SampleIter<'a> {
    fn new(curve: &'a Curve, min: f32, max: f32, step: f32) -> Self {
        let intervals = ((max - min) / step).ceil();
        let (last, step) = if max > min && step > 0.0 && intervals.is_finite() {
            if intervals > MAX_SAMPLES as f32 {
                (MAX_SAMPLES, (max - min) / MAX_SAMPLES as f32)
            } else {
                (intervals as usize, step)
            }
        } else {
            (0, step)
        };
        Self {
            curve,
            min,
            max,
            step,
            index: 0,
            last,
        }
    }
}

impl Iterator for SampleIter<'_> {
    type Item = (f32, f32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.index > self.last {
            return None;
        }
        let x = if self.index == self.last {
            self.max
        } else {
            (self.min + self.index as f32 * self.step).min(self.max)
        };
        self.index += 1;
        Some((x, self.curve.eval(x)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.last.saturating_add(1).saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SampleIter<'_> {}

/// Parameters of a cartesian graph.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CartesianGraph {
    pub function: Curve,
    pub x_range: AxisRange,
    pub y_range: AxisRange,
    /// Scene length of the x axis.
    pub x_length: f32,
    /// Scene length of the y axis.
    pub y_length: f32,
    pub color: Color,
    pub show_labels: bool,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub samples_per_unit: f32,
}

impl Default for CartesianGraph {
    fn default() -> Self {
        Self {
            function: Curve::default(),
            x_range: AxisRange::new(-5.0, 5.0, 1.0),
            y_range: AxisRange::new(-5.0, 5.0, 1.0),
            x_length: 6.0,
            y_length: 4.0,
            color: palette::blue(),
            show_labels: true,
            x_label: None,
            y_label: None,
            samples_per_unit: 20.0,
        }
    }
}

impl CartesianGraph {
    /// Maps a data point to scene coordinates.
    pub fn to_scene(&self, x: f32, y: f32) -> Point {
        Point::new(
            self.x_range.to_centered(x, self.x_length),
            self.y_range.to_centered(y, self.y_length),
        )
    }

    /// Sampled curve split into visible runs, in scene coordinates.
    ///
    /// A sample that is not finite or falls outside `y_range` ends the
    /// current run; runs shorter than two points are dropped.
    pub fn segments(&self) -> Vec<Vec<Point>> {
        let step = 1.0 / self.samples_per_unit;
        let mut segments = Vec::new();
        let mut current = Vec::new();
        for (x, y) in self.function.samples(self.x_range.min, self.x_range.max, step) {
            if y.is_finite() && self.y_range.contains(y) {
                current.push(self.to_scene(x, y));
            } else if !current.is_empty() {
                segments.push(std::mem::take(&mut current));
            }
        }
        segments.push(current);
        segments.retain(|segment| segment.len() >= 2);
        segments
    }
}

/// Formats a tick value compactly.
fn tick_text(value: f32) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded}")
    }
}

fn axes(desc: &CartesianGraph, config: &AppConfig) -> SceneNode {
    let layout = config.layout();
    let stroke = outline(config, config.style().label_color());
    let half_tick = layout.tick_length() / 2.0;

    // Axes cross at the data origin, clamped into view.
    let x0 = desc.x_range.clamp(0.0);
    let y0 = desc.y_range.clamp(0.0);
    let x_axis_y = desc.to_scene(x0, y0).y();
    let y_axis_x = desc.to_scene(x0, y0).x();

    let mut node = SceneNode::new("axes");
    let x_end = desc.to_scene(desc.x_range.max, y0);
    let y_end = desc.to_scene(x0, desc.y_range.max);
    node.push(Primitive::arrow(desc.to_scene(desc.x_range.min, y0), x_end).with_stroke(stroke.clone()));
    node.push(Primitive::arrow(desc.to_scene(x0, desc.y_range.min), y_end).with_stroke(stroke.clone()));

    for x in desc.x_range.ticks() {
        let at = Point::new(desc.to_scene(x, y0).x(), x_axis_y);
        node.push(
            Primitive::line(at.add_point(Point::new(0.0, -half_tick)), at.add_point(Point::new(0.0, half_tick)))
                .with_stroke(stroke.clone()),
        );
        if desc.show_labels && x != x0 {
            node.push(label(config, at.add_point(Point::new(0.0, -layout.label_offset())), tick_text(x)));
        }
    }
    for y in desc.y_range.ticks() {
        let at = Point::new(y_axis_x, desc.to_scene(x0, y).y());
        node.push(
            Primitive::line(at.add_point(Point::new(-half_tick, 0.0)), at.add_point(Point::new(half_tick, 0.0)))
                .with_stroke(stroke.clone()),
        );
        if desc.show_labels && y != y0 {
            node.push(label(config, at.add_point(Point::new(-layout.label_offset(), 0.0)), tick_text(y)));
        }
    }

    if let Some(text) = &desc.x_label {
        node.push(label(config, x_end.add_point(Point::new(layout.label_offset(), 0.0)), text.as_str()));
    }
    if let Some(text) = &desc.y_label {
        node.push(label(config, y_end.add_point(Point::new(0.0, layout.label_offset())), text.as_str()));
    }
    node
}

/// Builds a cartesian graph.
///
/// Emits an `"axes"` sub-node (axis arrows, ticks and labels) followed by a
/// `"curve"` sub-node with one polyline per visible run of the function.
///
/// # Errors
///
/// - [`DiagramError::DegenerateRange`](crate::DiagramError::DegenerateRange)
///   when either range is empty or has a non-positive step.
/// - [`DiagramError::InvalidParameter`](crate::DiagramError::InvalidParameter)
///   for non-positive axis lengths or sampling density.
pub fn build(desc: &CartesianGraph, config: &AppConfig) -> Result<SceneNode> {
    desc.x_range.validate("x_range")?;
    desc.y_range.validate("y_range")?;
    check_positive("x_length", desc.x_length)?;
    check_positive("y_length", desc.y_length)?;
    check_positive("samples_per_unit", desc.samples_per_unit)?;
    let samples = desc.x_range.span() * desc.samples_per_unit;
    if !samples.is_finite() || samples > MAX_SAMPLES as f32 {
        return Err(DiagramError::invalid_parameter(
            "samples_per_unit",
            format!("more than {MAX_SAMPLES} samples over the x range"),
        ));
    }

    let segments = desc.segments();
    debug!(
        segments = segments.len(),
        samples = segments.iter().map(Vec::len).sum::<usize>();
        "Sampled cartesian graph"
    );

    let mut scene = SceneNode::new("cartesian_graph");
    scene.push_node(axes(desc, config));

    let stroke = StrokeDefinition::solid(desc.color, config.style().stroke_width() * 1.5);
    let mut curve = SceneNode::new("curve");
    curve.extend(
        segments
            .into_iter()
            .map(|points| Primitive::polyline(points).with_stroke(stroke.clone())),
    );
    scene.push_node(curve);

    Ok(scene)
}
