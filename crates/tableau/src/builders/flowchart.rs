//! Flowcharts: boxes stacked along one axis joined by arrows.

use log::debug;
use serde::Deserialize;

use tableau_core::{
    color::Color,
    draw::{FillDefinition, Primitive, SceneNode},
    geometry::Point,
};

use crate::{
    builders::{colored_label, outline, palette},
    config::AppConfig,
    error::{DiagramError, Result, check_index, check_positive},
    layout::{StackAxis, stack_positions},
};

/// Shape family of a flowchart step.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    /// Stadium (pill-shaped) terminal.
    Start,
    /// Plain rectangle.
    #[default]
    Process,
    /// Diamond.
    Decision,
    /// Stadium (pill-shaped) terminal.
    End,
}

/// One box of the flowchart.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Step {
    pub text: String,
    #[serde(default, rename = "type", alias = "kind")]
    pub kind: StepKind,
}

impl Step {
    pub fn new(text: impl Into<String>, kind: StepKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

/// A directed connection between two steps.
///
/// Deserializes from `[0, 1]`, `[2, 3, "Yes"]` or a table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Connection {
    pub from: usize,
    pub to: usize,
    #[serde(default)]
    pub label: Option<String>,
}

impl Connection {
    pub fn new(from: usize, to: usize) -> Self {
        Self {
            from,
            to,
            label: None,
        }
    }

    pub fn labeled(from: usize, to: usize, label: impl Into<String>) -> Self {
        Self {
            from,
            to,
            label: Some(label.into()),
        }
    }
}

/// Parameters of a flowchart diagram.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Flowchart {
    pub steps: Vec<Step>,
    pub connections: Vec<Connection>,
    pub direction: StackAxis,
    pub box_width: f32,
    pub box_height: f32,
    pub color: Color,
    /// Step text size in points; defaults to the configured font size.
    pub font_size: Option<f32>,
}

impl Default for Flowchart {
    fn default() -> Self {
        Self {
            steps: Vec::new(),
            connections: Vec::new(),
            direction: StackAxis::Vertical,
            box_width: 2.5,
            box_height: 0.8,
            color: palette::blue(),
            font_size: None,
        }
    }
}

impl Flowchart {
    fn validate(&self) -> Result<()> {
        check_positive("box_width", self.box_width)?;
        check_positive("box_height", self.box_height)?;
        let len = self.steps.len();
        for (i, connection) in self.connections.iter().enumerate() {
            let context = format!("connection {i}");
            check_index(&context, connection.from, len)?;
            check_index(&context, connection.to, len)?;
            if connection.from == connection.to {
                return Err(DiagramError::schema_mismatch(
                    context,
                    "two distinct steps",
                    format!("a loop on step {}", connection.from),
                ));
            }
        }
        Ok(())
    }

    fn pitch(&self, gap: f32) -> f32 {
        match self.direction {
            StackAxis::Vertical => self.box_height + gap,
            StackAxis::Horizontal => self.box_width + gap,
        }
    }

    /// Midpoint of the box edge at `center` that faces `toward`.
    fn anchor(&self, center: Point, toward: Point) -> Point {
        let delta = toward.sub_point(center);
        let (half_w, half_h) = (self.box_width / 2.0, self.box_height / 2.0);
        // Pick the edge whose normal best matches the direction, scaled by
        // box proportions so diagonal neighbours leave through the right side.
        if delta.x().abs() * half_h > delta.y().abs() * half_w {
            center.add_point(Point::new(half_w.copysign(delta.x()), 0.0))
        } else {
            center.add_point(Point::new(0.0, half_h.copysign(delta.y())))
        }
    }

    fn shape(&self, kind: StepKind, center: Point) -> Primitive {
        let (w, h) = (self.box_width, self.box_height);
        match kind {
            StepKind::Start | StepKind::End => Primitive::rounded_rectangle(center, w, h, h / 2.0),
            StepKind::Process => Primitive::rectangle(center, w, h),
            StepKind::Decision => Primitive::polygon(vec![
                center.add_point(Point::new(0.0, h / 2.0)),
                center.add_point(Point::new(w / 2.0, 0.0)),
                center.add_point(Point::new(0.0, -h / 2.0)),
                center.add_point(Point::new(-w / 2.0, 0.0)),
            ]),
        }
    }
}

/// Builds a flowchart.
///
/// Steps become sub-nodes `"step-{i}"` holding the shape and its text;
/// connectors follow in declaration order, each a forward arrow plus an
/// optional label.
///
/// # Errors
///
/// - [`DiagramError::IndexOutOfRange`] when a connection references a
///   missing step.
/// - [`DiagramError::SchemaMismatch`] for a connection from a step to itself.
pub fn build(desc: &Flowchart, config: &AppConfig) -> Result<SceneNode> {
    desc.validate()?;

    let pitch = desc.pitch(config.layout().flowchart_gap());
    let centers = stack_positions(desc.steps.len(), pitch, desc.direction);
    let font_size = desc.font_size.unwrap_or(config.style().font_size());
    let text_color = config.style().label_color();

    debug!(
        steps = desc.steps.len(),
        connections = desc.connections.len(),
        direction:? = desc.direction;
        "Resolved flowchart layout"
    );

    let stroke = outline(config, desc.color);
    let mut scene = SceneNode::new("flowchart");

    for (i, (step, &center)) in desc.steps.iter().zip(&centers).enumerate() {
        let mut node = SceneNode::new(format!("step-{i}"));
        node.push(
            desc.shape(step.kind, center)
                .with_stroke(stroke.clone())
                .with_fill(FillDefinition::new(desc.color, 0.2)),
        );
        node.push(
            Primitive::label(center, step.text.as_str(), font_size)
                .with_fill(FillDefinition::solid(text_color)),
        );
        scene.push_node(node);
    }

    let mut connectors = SceneNode::new("connectors");
    for connection in &desc.connections {
        let (from, to) = (centers[connection.from], centers[connection.to]);
        let start = desc.anchor(from, to);
        let end = desc.anchor(to, from);
        connectors.push(Primitive::arrow(start, end).with_stroke(stroke.clone()));

        if let Some(text) = connection.label.as_deref().filter(|t| !t.is_empty()) {
            let sideways = end
                .sub_point(start)
                .perpendicular()
                .normalize()
                .unwrap_or(Point::new(1.0, 0.0))
                .scale(-config.layout().label_offset());
            connectors.push(colored_label(
                config,
                start.midpoint(end).add_point(sideways),
                text,
                text_color,
            ));
        }
    }
    scene.push_node(connectors);

    Ok(scene)
}
