//! Triangles with vertex, side and angle labels.
//!
//! Side `i` joins vertex `i` to vertex `(i + 1) % 3`; the angle at vertex
//! `i` is measured between the rays towards its two neighbours.

use log::debug;
use serde::Deserialize;

use tableau_core::{
    color::Color,
    draw::{FillDefinition, Primitive, SceneNode, StrokeDefinition},
    geometry::Point,
};

use crate::{
    builders::{label, outline, palette},
    config::AppConfig,
    error::{Result, check_len},
    resolve::{
        AngleArc, TriangleVertices,
        geometry::{centroid, push_away},
        resolve_angle_arc,
    },
};

/// Parameters of a labeled triangle diagram.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LabeledTriangle {
    pub vertices: TriangleVertices,
    pub vertex_labels: Option<Vec<String>>,
    /// One label per side, following the side convention above.
    pub side_labels: Option<Vec<String>>,
    pub show_angles: bool,
    /// Verbatim angle labels in vertex order; an empty string draws the arc
    /// without a label. When absent, the measured angles are shown.
    pub angle_labels: Option<Vec<String>>,
    pub color: Color,
    pub fill_opacity: f32,
}

impl Default for LabeledTriangle {
    fn default() -> Self {
        Self {
            vertices: TriangleVertices::default(),
            vertex_labels: None,
            side_labels: None,
            show_angles: false,
            angle_labels: None,
            color: palette::blue(),
            fill_opacity: 0.25,
        }
    }
}

/// The endpoints of side `i`.
pub(crate) fn side(vertices: &[Point; 3], i: usize) -> (Point, Point) {
    (vertices[i % 3], vertices[(i + 1) % 3])
}

/// Interior angle arcs at every vertex, in vertex order.
pub(crate) fn angle_arcs(vertices: &[Point; 3], config: &AppConfig) -> Result<[AngleArc; 3]> {
    let layout = config.layout();
    let arc_at = |i: usize| {
        resolve_angle_arc(
            vertices[i],
            vertices[(i + 1) % 3],
            vertices[(i + 2) % 3],
            layout.angle_arc_radius(),
            layout.angle_label_factor(),
        )
    };
    Ok([arc_at(0)?, arc_at(1)?, arc_at(2)?])
}

/// `count` congruence ticks across the segment, centered on its midpoint.
pub(crate) fn tick_marks(
    start: Point,
    end: Point,
    count: u8,
    config: &AppConfig,
    stroke: &StrokeDefinition,
) -> Vec<Primitive> {
    let layout = config.layout();
    let Some(along) = end.sub_point(start).with_z(0.0).normalize() else {
        return Vec::new();
    };
    let across = along.perpendicular().scale(layout.tick_length() / 2.0);
    let middle = start.midpoint(end);
    let first = -(f32::from(count.saturating_sub(1))) * layout.tick_spacing() / 2.0;

    (0..count)
        .map(|j| {
            let center = middle.add_point(along.scale(first + f32::from(j) * layout.tick_spacing()));
            Primitive::line(center.sub_point(across), center.add_point(across))
                .with_stroke(stroke.clone())
        })
        .collect()
}

/// The filled triangle outline.
pub(crate) fn triangle_polygon(
    vertices: &[Point; 3],
    color: Color,
    fill_opacity: f32,
    config: &AppConfig,
) -> Primitive {
    Primitive::polygon(vertices.to_vec())
        .with_stroke(outline(config, color))
        .with_fill(FillDefinition::new(color, fill_opacity))
}

/// Vertex labels pushed outward from the centroid.
pub(crate) fn vertex_labels(
    vertices: &[Point; 3],
    labels: &[String],
    config: &AppConfig,
) -> Vec<Primitive> {
    let center = centroid(vertices);
    vertices
        .iter()
        .zip(labels)
        .filter(|(_, text)| !text.is_empty())
        .map(|(&vertex, text)| {
            label(
                config,
                push_away(vertex, center, config.layout().label_offset()),
                text.as_str(),
            )
        })
        .collect()
}

/// Builds a labeled triangle.
///
/// Paint order: polygon, angle arcs with their labels, side labels, vertex
/// labels.
///
/// # Errors
///
/// - [`DiagramError::UnknownPreset`](crate::DiagramError::UnknownPreset) for
///   unrecognized preset names.
/// - [`DiagramError::SchemaMismatch`](crate::DiagramError::SchemaMismatch)
///   for label lists that do not have three entries, or malformed explicit
///   vertices.
/// - [`DiagramError::DegenerateAngle`](crate::DiagramError::DegenerateAngle)
///   for coincident vertices when angles are shown.
pub fn build(desc: &LabeledTriangle, config: &AppConfig) -> Result<SceneNode> {
    let vertices = desc.vertices.resolve()?;
    check_len("vertex_labels", desc.vertex_labels.as_deref(), 3)?;
    check_len("side_labels", desc.side_labels.as_deref(), 3)?;
    check_len("angle_labels", desc.angle_labels.as_deref(), 3)?;

    let arcs = if desc.show_angles {
        Some(angle_arcs(&vertices, config)?)
    } else {
        None
    };

    debug!(
        show_angles = desc.show_angles,
        has_side_labels = desc.side_labels.is_some();
        "Resolved triangle"
    );

    let layout = config.layout();
    let mut scene = SceneNode::new("triangle");
    scene.push(triangle_polygon(&vertices, desc.color, desc.fill_opacity, config));

    if let Some(arcs) = arcs {
        let stroke = outline(config, config.style().label_color());
        for (i, arc) in arcs.iter().enumerate() {
            let mut node = SceneNode::new(format!("angle-{i}"));
            node.push(arc.to_mark(layout.right_angle_marks()).with_stroke(stroke.clone()));

            let text = match &desc.angle_labels {
                Some(labels) => labels[i].clone(),
                None => format!("{:.0}°", arc.degrees()),
            };
            if !text.is_empty() {
                node.push(label(config, arc.label_position(), text));
            }
            scene.push_node(node);
        }
    }

    if let Some(labels) = &desc.side_labels {
        let center = centroid(&vertices);
        for (i, text) in labels.iter().enumerate().filter(|(_, t)| !t.is_empty()) {
            let (start, end) = side(&vertices, i);
            let anchor = push_away(start.midpoint(end), center, layout.label_offset());
            scene.push(label(config, anchor, text.as_str()));
        }
    }

    if let Some(labels) = &desc.vertex_labels {
        scene.extend(vertex_labels(&vertices, labels, config));
    }

    Ok(scene)
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use tableau_core::{
        color::css,
        draw::{Geometry, PrimitiveKind},
    };

    use super::*;
    use crate::error::DiagramError;

    fn right_triangle() -> LabeledTriangle {
        LabeledTriangle {
            vertices: TriangleVertices::Preset("right_triangle".into()),
            vertex_labels: Some(vec!["A".into(), "B".into(), "C".into()]),
            side_labels: Some(vec!["c".into(), "a".into(), "b".into()]),
            show_angles: true,
            angle_labels: Some(vec![String::new(), String::new(), "90°".into()]),
            ..LabeledTriangle::default()
        }
    }

    #[test]
    fn test_right_triangle_output_order() {
        let scene = build(&right_triangle(), &AppConfig::default()).unwrap();
        let first = scene.primitives().next().unwrap();
        assert_eq!(first.kind(), PrimitiveKind::Polygon);

        let texts: Vec<_> = scene.primitives().filter_map(|p| p.text()).collect();
        assert_eq!(texts, vec!["90°", "c", "a", "b", "A", "B", "C"]);
    }

    #[test]
    fn test_empty_angle_label_still_draws_arc() {
        let scene = build(&right_triangle(), &AppConfig::default()).unwrap();
        let angle_0 = scene.find("angle-0").unwrap();
        assert_eq!(angle_0.primitive_count(), 1);
        assert_eq!(angle_0.count_kind(PrimitiveKind::Arc), 1);

        // the right angle becomes a corner mark
        let angle_2 = scene.find("angle-2").unwrap();
        assert_eq!(angle_2.count_kind(PrimitiveKind::Polyline), 1);
    }

    #[test]
    fn test_right_angle_marks_can_be_disabled() {
        let layout = crate::config::LayoutConfig::default().with_right_angle_marks(false);
        let config = AppConfig::new(layout, Default::default());
        let scene = build(&right_triangle(), &config).unwrap();
        assert_eq!(scene.count_kind(PrimitiveKind::Arc), 3);
        assert_eq!(scene.count_kind(PrimitiveKind::Polyline), 0);
    }

    #[test]
    fn test_computed_angle_labels() {
        let desc = LabeledTriangle {
            show_angles: true,
            ..LabeledTriangle::default()
        };
        let scene = build(&desc, &AppConfig::default()).unwrap();
        let texts: Vec<_> = scene.primitives().filter_map(|p| p.text()).collect();
        assert_eq!(texts, vec!["60°", "60°", "60°"]);
    }

    #[test]
    fn test_explicit_3d_right_triangle() {
        let desc = LabeledTriangle {
            vertices: TriangleVertices::Explicit(vec![
                vec![0.0, 0.0, 0.0],
                vec![1.0, 0.0, 0.0],
                vec![0.0, 0.0, 1.0],
            ]),
            show_angles: true,
            ..LabeledTriangle::default()
        };
        let scene = build(&desc, &AppConfig::default()).unwrap();
        let texts: Vec<_> = scene.primitives().filter_map(|p| p.text()).collect();
        assert_eq!(texts, vec!["90°", "45°", "45°"]);
        assert_eq!(
            scene.find("angle-0").unwrap().count_kind(PrimitiveKind::Polyline),
            1
        );
    }

    #[test]
    fn test_label_count_mismatch() {
        let desc = LabeledTriangle {
            vertex_labels: Some(vec!["A".into(), "B".into()]),
            ..LabeledTriangle::default()
        };
        assert!(matches!(
            build(&desc, &AppConfig::default()),
            Err(DiagramError::SchemaMismatch { .. })
        ));
    }

    #[test]
    fn test_unknown_preset() {
        let desc = LabeledTriangle {
            vertices: TriangleVertices::Preset("scalene".into()),
            ..LabeledTriangle::default()
        };
        assert!(matches!(
            build(&desc, &AppConfig::default()),
            Err(DiagramError::UnknownPreset { .. })
        ));
    }

    #[test]
    fn test_tick_marks_are_perpendicular_and_centered() {
        let stroke = StrokeDefinition::solid(Color::from(css::WHITE), 2.0);
        let ticks = tick_marks(
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            3,
            &AppConfig::default(),
            &stroke,
        );
        assert_eq!(ticks.len(), 3);

        let xs: Vec<f32> = ticks
            .iter()
            .map(|tick| match tick.geometry() {
                Geometry::Line { start, end, .. } => {
                    assert_approx_eq!(f32, start.x(), end.x());
                    assert_approx_eq!(f32, start.distance(*end), 0.2, epsilon = 1e-6);
                    start.x()
                }
                other => panic!("unexpected geometry {other:?}"),
            })
            .collect();
        assert_approx_eq!(f32, xs[0], 1.92, epsilon = 1e-5);
        assert_approx_eq!(f32, xs[1], 2.0, epsilon = 1e-5);
        assert_approx_eq!(f32, xs[2], 2.08, epsilon = 1e-5);
    }

    #[test]
    fn test_side_convention() {
        let vertices = [Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(0.0, 1.0)];
        assert_eq!(side(&vertices, 0), (vertices[0], vertices[1]));
        assert_eq!(side(&vertices, 2), (vertices[2], vertices[0]));
    }
}
