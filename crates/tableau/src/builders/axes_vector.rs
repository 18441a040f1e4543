//! Vectors drawn on a three-dimensional axis frame.
//!
//! Points keep their `z` component; projecting onto the page is left to the
//! renderer.

use log::debug;
use serde::Deserialize;

use tableau_core::{
    color::Color,
    draw::{Primitive, SceneNode, StrokeDefinition},
    geometry::Point,
};

use crate::{
    builders::{colored_label, label, outline, palette},
    config::AppConfig,
    error::{DiagramError, Result, check_positive},
    layout::AxisRange,
};

/// A vector from the origin.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Vector3Spec {
    pub components: [f32; 3],
    #[serde(default = "palette::yellow")]
    pub color: Color,
    #[serde(default)]
    pub label: Option<String>,
}

impl Vector3Spec {
    pub fn new(components: [f32; 3], label: impl Into<String>) -> Self {
        Self {
            components,
            color: palette::yellow(),
            label: Some(label.into()),
        }
    }
}

/// Parameters of a 3D axes-and-vectors diagram.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AxesVector {
    pub vectors: Vec<Vector3Spec>,
    pub x_range: AxisRange,
    pub y_range: AxisRange,
    pub z_range: AxisRange,
    /// Scene length of the longer half of each axis.
    pub axis_length: f32,
    pub show_unit_vectors: bool,
}

impl Default for AxesVector {
    fn default() -> Self {
        Self {
            vectors: Vec::new(),
            x_range: AxisRange::new(-3.0, 3.0, 1.0),
            y_range: AxisRange::new(-3.0, 3.0, 1.0),
            z_range: AxisRange::new(-3.0, 3.0, 1.0),
            axis_length: 3.0,
            show_unit_vectors: false,
        }
    }
}

/// Scene units per range unit, so that the larger `|bound|` reaches
/// `axis_length`.
fn unit_length(range: &AxisRange, axis_length: f32) -> Result<f32> {
    let extent = range.min.abs().max(range.max.abs());
    if extent > 0.0 {
        Ok(axis_length / extent)
    } else {
        Err(DiagramError::degenerate_range("axis extent is zero"))
    }
}

impl AxesVector {
    /// Scene units per range unit along x, y and z.
    ///
    /// # Errors
    ///
    /// Same as [`build`].
    pub fn units(&self) -> Result<[f32; 3]> {
        check_positive("axis_length", self.axis_length)?;
        let ranges = [("x_range", &self.x_range), ("y_range", &self.y_range), ("z_range", &self.z_range)];
        let mut units = [0.0; 3];
        for (unit, (name, range)) in units.iter_mut().zip(ranges) {
            range.validate(name)?;
            *unit = unit_length(range, self.axis_length)?;
        }
        Ok(units)
    }

    /// Scene position of a point given in range units.
    pub fn to_scene(units: [f32; 3], components: [f32; 3]) -> Point {
        Point::new_3d(
            components[0] * units[0],
            components[1] * units[1],
            components[2] * units[2],
        )
    }
}

fn axis_direction(axis: usize) -> [f32; 3] {
    let mut direction = [0.0; 3];
    direction[axis] = 1.0;
    direction
}

fn axes(desc: &AxesVector, units: [f32; 3], config: &AppConfig) -> SceneNode {
    let stroke = outline(config, config.style().label_color());
    let half_tick = config.layout().tick_length() / 2.0;
    let offset = config.layout().label_offset();
    let ranges = [desc.x_range, desc.y_range, desc.z_range];

    let mut node = SceneNode::new("axes");
    for (axis, (range, name)) in ranges.iter().zip(["x", "y", "z"]).enumerate() {
        let step = AxesVector::to_scene(units, axis_direction(axis));
        let along = Point::from(axis_direction(axis));
        let start = step.scale(range.min);
        let end = step.scale(range.max);
        node.push(Primitive::arrow(start, end).with_stroke(stroke.clone()));

        // Ticks lie across the axis: along y for the x axis, along x otherwise.
        let across = if axis == 0 { Point::new(0.0, half_tick) } else { Point::new(half_tick, 0.0) };
        for value in range.ticks().into_iter().filter(|v| *v != 0.0) {
            let at = step.scale(value);
            node.push(Primitive::line(at.sub_point(across), at.add_point(across)).with_stroke(stroke.clone()));
        }
        node.push(label(config, end.add_point(along.scale(offset)), name));
    }
    node
}

/// Builds a 3D axes diagram.
///
/// Emits an `"axes"` sub-node, an optional `"unit-vectors"` sub-node with
/// `î`, `ĵ` and `k̂`, then one `"vector-{i}"` sub-node per vector.
///
/// # Errors
///
/// Returns [`DiagramError::DegenerateRange`] when a range is empty, has a
/// non-positive step or spans nothing on either side of zero.
pub fn build(desc: &AxesVector, config: &AppConfig) -> Result<SceneNode> {
    let units = desc.units()?;
    let offset = config.layout().label_offset();
    let width = config.style().stroke_width() * 1.5;

    let mut scene = SceneNode::new("axes_vector");
    scene.push_node(axes(desc, units, config));

    if desc.show_unit_vectors {
        let mut node = SceneNode::new("unit-vectors");
        let colors = [palette::red(), palette::green(), palette::blue()];
        for (axis, (name, color)) in ["î", "ĵ", "k̂"].into_iter().zip(colors).enumerate() {
            let tip = AxesVector::to_scene(units, axis_direction(axis));
            node.push(Primitive::arrow(Point::default(), tip).with_stroke(StrokeDefinition::solid(color, width)));
            // Offset the label sideways so it does not sit on the axis name.
            let side = if axis == 1 { Point::new(offset, 0.0) } else { Point::new(0.0, offset) };
            node.push(colored_label(config, tip.add_point(side), name, color));
        }
        scene.push_node(node);
    }

    for (i, vector) in desc.vectors.iter().enumerate() {
        let tip = AxesVector::to_scene(units, vector.components);
        let mut node = SceneNode::new(format!("vector-{i}"));
        node.push(Primitive::arrow(Point::default(), tip).with_stroke(StrokeDefinition::solid(vector.color, width)));
        if let Some(text) = &vector.label {
            let beyond = tip.normalize().map_or(Point::new(0.0, offset), |d| d.scale(offset));
            node.push(colored_label(config, tip.add_point(beyond), text.as_str(), vector.color));
        }
        scene.push_node(node);
    }

    debug!(vectors = desc.vectors.len(), units:? = units; "Resolved 3D axes");

    Ok(scene)
}
