//! Circles with points, chords, radii, tangents and angle arcs.

use log::debug;
use serde::Deserialize;

use tableau_core::{
    color::Color,
    draw::{FillDefinition, Primitive, SceneNode},
    geometry::Point,
};

use crate::{
    builders::{label, marker, outline, palette},
    config::AppConfig,
    error::{Result, check_index, check_len, check_positive},
    resolve::{AngleArc, point_on_circle, resolve_angle_arc},
    resolve::geometry::push_away,
};

/// A chord between two points on the circle.
///
/// Deserializes from `{ from = 0, to = 1, label = "c" }` or `[0, 1, "c"]`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Chord {
    pub from: usize,
    pub to: usize,
    #[serde(default)]
    pub label: Option<String>,
}

/// The angle at the center subtended by points `a` and `b`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CentralAngle {
    pub a: usize,
    pub b: usize,
    #[serde(default)]
    pub label: Option<String>,
}

/// The angle at point `vertex` subtended by points `a` and `b`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InscribedAngle {
    pub a: usize,
    pub vertex: usize,
    pub b: usize,
    #[serde(default)]
    pub label: Option<String>,
}

/// Parameters of a circle geometry diagram.
///
/// Every point reference is an index into `points_on_circle`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CircleGeometry {
    pub radius: f32,
    pub center: Point,
    /// Point positions, in degrees counter-clockwise from +x.
    pub points_on_circle: Vec<f32>,
    pub point_labels: Option<Vec<String>>,
    pub chords: Vec<Chord>,
    pub radii: Vec<usize>,
    pub tangent_at: Vec<usize>,
    pub central_angle: Option<CentralAngle>,
    pub inscribed_angle: Option<InscribedAngle>,
    pub color: Color,
    pub fill_opacity: f32,
    /// Total length of each tangent segment; defaults to the radius.
    pub tangent_length: Option<f32>,
}

impl Default for CircleGeometry {
    fn default() -> Self {
        Self {
            radius: 2.0,
            center: Point::default(),
            points_on_circle: Vec::new(),
            point_labels: None,
            chords: Vec::new(),
            radii: Vec::new(),
            tangent_at: Vec::new(),
            central_angle: None,
            inscribed_angle: None,
            color: palette::blue(),
            fill_opacity: 0.1,
            tangent_length: None,
        }
    }
}

impl CircleGeometry {
    /// Resolves every point on the circle, in declaration order.
    pub fn resolve_points(&self) -> Vec<Point> {
        self.points_on_circle
            .iter()
            .map(|&angle| point_on_circle(self.center, self.radius, angle))
            .collect()
    }

    /// Checks every parameter and point reference.
    fn validate(&self) -> Result<()> {
        check_positive("radius", self.radius)?;
        if let Some(length) = self.tangent_length {
            check_positive("tangent_length", length)?;
        }

        let len = self.points_on_circle.len();
        check_len("point_labels", self.point_labels.as_deref(), len)?;

        for (i, chord) in self.chords.iter().enumerate() {
            let context = format!("chord {i}");
            check_index(&context, chord.from, len)?;
            check_index(&context, chord.to, len)?;
        }
        for &index in &self.radii {
            check_index("radii", index, len)?;
        }
        for &index in &self.tangent_at {
            check_index("tangent_at", index, len)?;
        }
        if let Some(angle) = &self.central_angle {
            check_index("central_angle", angle.a, len)?;
            check_index("central_angle", angle.b, len)?;
        }
        if let Some(angle) = &self.inscribed_angle {
            check_index("inscribed_angle", angle.a, len)?;
            check_index("inscribed_angle", angle.vertex, len)?;
            check_index("inscribed_angle", angle.b, len)?;
        }
        Ok(())
    }
}

/// Builds a circle geometry diagram.
///
/// Paint order: circle, center dot, chords, radii, tangents, angle arcs,
/// then point dots with their labels on top.
///
/// # Errors
///
/// - [`DiagramError::IndexOutOfRange`](crate::DiagramError::IndexOutOfRange)
///   for any point reference outside `points_on_circle`.
/// - [`DiagramError::SchemaMismatch`](crate::DiagramError::SchemaMismatch)
///   when `point_labels` does not match the point count.
/// - [`DiagramError::DegenerateAngle`](crate::DiagramError::DegenerateAngle)
///   when an angle's vertex coincides with one of its endpoints.
pub fn build(desc: &CircleGeometry, config: &AppConfig) -> Result<SceneNode> {
    desc.validate()?;

    let layout = config.layout();
    let points = desc.resolve_points();
    let center = desc.center;

    // Resolve angles up front so a degenerate angle fails before emitting.
    let central = desc
        .central_angle
        .as_ref()
        .map(|angle| {
            let arc = resolve_angle_arc(
                center,
                points[angle.a],
                points[angle.b],
                layout.angle_arc_radius(),
                layout.angle_label_factor(),
            )?;
            Ok::<_, crate::DiagramError>((arc, angle.label.as_deref()))
        })
        .transpose()?;
    let inscribed = desc
        .inscribed_angle
        .as_ref()
        .map(|angle| {
            let arc = resolve_angle_arc(
                points[angle.vertex],
                points[angle.a],
                points[angle.b],
                layout.angle_arc_radius(),
                layout.angle_label_factor(),
            )?;
            Ok::<_, crate::DiagramError>((arc, angle.label.as_deref()))
        })
        .transpose()?;

    debug!(
        points = points.len(),
        chords = desc.chords.len(),
        radii = desc.radii.len(),
        tangents = desc.tangent_at.len();
        "Resolved circle geometry"
    );

    let stroke = outline(config, desc.color);
    let mut scene = SceneNode::new("circle_geometry");

    scene.push(
        Primitive::circle(center, desc.radius)
            .with_stroke(stroke.clone())
            .with_fill(FillDefinition::new(desc.color, desc.fill_opacity)),
    );

    if !desc.radii.is_empty() || central.is_some() {
        scene.push(marker(center, config.style().label_color()));
    }

    for chord in &desc.chords {
        let (start, end) = (points[chord.from], points[chord.to]);
        scene.push(Primitive::line(start, end).with_stroke(stroke.clone()));
        if let Some(text) = non_empty(chord.label.as_deref()) {
            let anchor = push_away(start.midpoint(end), center, layout.label_offset());
            scene.push(label(config, anchor, text));
        }
    }

    for &index in &desc.radii {
        scene.push(Primitive::line(center, points[index]).with_stroke(stroke.clone()));
    }

    let tangent_length = desc.tangent_length.unwrap_or(desc.radius);
    for &index in &desc.tangent_at {
        let point = points[index];
        let along = point
            .sub_point(center)
            .with_z(0.0)
            .perpendicular()
            .normalize()
            .unwrap_or(Point::new(1.0, 0.0))
            .scale(tangent_length / 2.0);
        scene.push(
            Primitive::line(point.sub_point(along), point.add_point(along))
                .with_stroke(stroke.clone()),
        );
    }

    for (name, resolved) in [("central-angle", central), ("inscribed-angle", inscribed)] {
        if let Some((arc, text)) = resolved {
            scene.push_node(angle_node(name, &arc, text, config));
        }
    }

    let labels = desc.point_labels.as_deref().unwrap_or_default();
    for (i, (&point, &angle)) in points.iter().zip(&desc.points_on_circle).enumerate() {
        scene.push(marker(point, config.style().label_color()));
        if let Some(text) = labels.get(i).filter(|text| !text.is_empty()) {
            let anchor = point_on_circle(center, desc.radius + layout.label_offset(), angle);
            scene.push(label(config, anchor, text.as_str()));
        }
    }

    Ok(scene)
}

fn angle_node(name: &str, arc: &AngleArc, text: Option<&str>, config: &AppConfig) -> SceneNode {
    let mut node = SceneNode::new(name);
    node.push(
        arc.to_mark(config.layout().right_angle_marks())
            .with_stroke(outline(config, config.style().label_color())),
    );
    if let Some(text) = non_empty(text) {
        node.push(label(config, arc.label_position(), text));
    }
    node
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|text| !text.is_empty())
}
