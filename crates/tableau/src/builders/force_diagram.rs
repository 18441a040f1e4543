//! Free-body diagrams: an object with force arrows on its boundary.

use log::debug;
use serde::Deserialize;

use tableau_core::{
    color::Color,
    draw::{FillDefinition, Primitive, SceneNode, StrokeDefinition},
    geometry::Point,
};

use crate::{
    builders::{colored_label, label, outline, palette},
    config::AppConfig,
    error::{DiagramError, Result, check_positive},
    resolve::scale_proportional,
};

/// Net forces shorter than this are drawn as "F_net = 0".
const NET_FORCE_EPSILON: f32 = 1e-4;

/// Outline of the object the forces act on.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectShape {
    #[default]
    Square,
    Circle,
}

/// One of the eight compass directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Compass {
    Up,
    Down,
    Left,
    Right,
    Ul,
    Ur,
    Dl,
    Dr,
}

impl Compass {
    pub fn degrees(self) -> f32 {
        match self {
            Self::Right => 0.0,
            Self::Ur => 45.0,
            Self::Up => 90.0,
            Self::Ul => 135.0,
            Self::Left => 180.0,
            Self::Dl => 225.0,
            Self::Down => 270.0,
            Self::Dr => 315.0,
        }
    }
}

/// Direction of a force: a compass name (`"UP"`, `"DL"`, ...) or an angle
/// in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ForceDirection {
    Compass(Compass),
    Degrees(f32),
}

impl ForceDirection {
    pub fn degrees(self) -> f32 {
        match self {
            Self::Compass(compass) => compass.degrees(),
            Self::Degrees(degrees) => degrees,
        }
    }
}

impl From<Compass> for ForceDirection {
    fn from(compass: Compass) -> Self {
        Self::Compass(compass)
    }
}

/// A single force acting on the object.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Force {
    pub direction: ForceDirection,
    pub magnitude: f32,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub color: Option<Color>,
}

impl Force {
    pub fn new(direction: impl Into<ForceDirection>, magnitude: f32, label: impl Into<String>) -> Self {
        Self {
            direction: direction.into(),
            magnitude,
            label: Some(label.into()),
            color: None,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

/// Parameters of a force diagram.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ForceDiagram {
    pub object_shape: ObjectShape,
    pub object_size: f32,
    pub object_color: Color,
    pub forces: Vec<Force>,
    pub show_net_force: bool,
    pub net_force_color: Color,
    /// Length of the arrow for the largest force.
    pub max_arrow_length: f32,
}

impl Default for ForceDiagram {
    fn default() -> Self {
        Self {
            object_shape: ObjectShape::Square,
            object_size: 1.2,
            object_color: palette::blue(),
            forces: Vec::new(),
            show_net_force: false,
            net_force_color: palette::purple(),
            max_arrow_length: 2.0,
        }
    }
}

impl ForceDiagram {
    fn validate(&self) -> Result<f32> {
        check_positive("object_size", self.object_size)?;
        check_positive("max_arrow_length", self.max_arrow_length)?;
        for (i, force) in self.forces.iter().enumerate() {
            if !force.magnitude.is_finite() || force.magnitude < 0.0 {
                return Err(DiagramError::schema_mismatch(
                    format!("force {i} magnitude"),
                    "a non-negative number",
                    force.magnitude,
                ));
            }
            if !force.direction.degrees().is_finite() {
                return Err(DiagramError::invalid_parameter(
                    format!("forces[{i}].direction"),
                    "must be a finite angle in degrees",
                ));
            }
        }
        let max = self.forces.iter().map(|f| f.magnitude).fold(0.0f32, f32::max);
        if !self.forces.is_empty() && max == 0.0 {
            return Err(DiagramError::degenerate_range("force magnitudes are all zero"));
        }
        Ok(max)
    }

    /// Distance from the object's center to its boundary along `direction`
    /// (a unit vector).
    fn boundary_distance(&self, direction: Point) -> f32 {
        let half = self.object_size / 2.0;
        match self.object_shape {
            ObjectShape::Circle => half,
            ObjectShape::Square => half / direction.x().abs().max(direction.y().abs()),
        }
    }

    /// Scaled force vectors, in declaration order.
    ///
    /// # Errors
    ///
    /// Same as [`build`].
    pub fn scaled_vectors(&self) -> Result<Vec<Point>> {
        let max = self.validate()?;
        self.forces
            .iter()
            .map(|force| {
                let length = scale_proportional(force.magnitude, max, self.max_arrow_length)?;
                Ok(Point::from_angle(force.direction.degrees()).scale(length))
            })
            .collect()
    }
}

/// Builds a force diagram.
///
/// Emits the `"object"`, one `"force-{i}"` sub-node per force (arrow and
/// label) and, when requested, a `"net-force"` sub-node.
///
/// # Errors
///
/// - [`DiagramError::SchemaMismatch`] for a negative magnitude.
/// - [`DiagramError::DegenerateRange`] when every magnitude is zero.
pub fn build(desc: &ForceDiagram, config: &AppConfig) -> Result<SceneNode> {
    let vectors = desc.scaled_vectors()?;
    let offset = config.layout().label_offset();
    let width = config.style().stroke_width() * 1.5;

    let mut scene = SceneNode::new("force_diagram");

    let object_stroke = outline(config, desc.object_color);
    let object_fill = FillDefinition::new(desc.object_color, 0.5);
    let object = match desc.object_shape {
        ObjectShape::Square => Primitive::rectangle(Point::default(), desc.object_size, desc.object_size),
        ObjectShape::Circle => Primitive::circle(Point::default(), desc.object_size / 2.0),
    };
    let mut object_node = SceneNode::new("object");
    object_node.push(object.with_stroke(object_stroke).with_fill(object_fill));
    scene.push_node(object_node);

    for (i, (force, vector)) in desc.forces.iter().zip(&vectors).enumerate() {
        let Some(direction) = vector.normalize() else {
            continue;
        };
        let color = force.color.unwrap_or_else(palette::yellow);
        let start = direction.scale(desc.boundary_distance(direction));
        let end = start.add_point(*vector);

        let mut node = SceneNode::new(format!("force-{i}"));
        node.push(Primitive::arrow(start, end).with_stroke(StrokeDefinition::solid(color, width)));
        if let Some(text) = force.label.as_deref().filter(|t| !t.is_empty()) {
            node.push(colored_label(config, end.add_point(direction.scale(offset)), text, color));
        }
        scene.push_node(node);
    }

    if desc.show_net_force {
        let net = vectors
            .iter()
            .fold(Point::default(), |sum, vector| sum.add_point(*vector));
        let mut node = SceneNode::new("net-force");
        match net.normalize().filter(|_| net.length() > NET_FORCE_EPSILON) {
            Some(direction) => {
                node.push(
                    Primitive::arrow(Point::default(), net)
                        .with_stroke(StrokeDefinition::dashed(desc.net_force_color, width * 1.5)),
                );
                node.push(colored_label(
                    config,
                    net.add_point(direction.scale(offset)),
                    "F_net",
                    desc.net_force_color,
                ));
            }
            None => {
                let below = Point::new(0.0, -desc.object_size / 2.0 - 2.0 * offset);
                node.push(label(config, below, "F_net = 0"));
            }
        }
        scene.push_node(node);
    }

    debug!(
        forces = desc.forces.len(),
        shape:? = desc.object_shape,
        net_force = desc.show_net_force;
        "Resolved force diagram"
    );

    Ok(scene)
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use tableau_core::draw::{Geometry, PrimitiveKind, StrokeStyle};

    use super::*;

    fn arrow_of(scene: &SceneNode, node: &str) -> (Point, Point) {
        match scene.find(node).and_then(|n| n.primitives().next()).map(|p| p.geometry()) {
            Some(Geometry::Line { start, end, .. }) => (*start, *end),
            other => panic!("expected an arrow in {node}, got {other:?}"),
        }
    }

    fn on_surface() -> ForceDiagram {
        ForceDiagram {
            forces: vec![
                Force::new(Compass::Up, 2.0, "N").with_color(palette::green()),
                Force::new(Compass::Down, 2.0, "mg").with_color(palette::red()),
            ],
            ..ForceDiagram::default()
        }
    }

    #[test]
    fn test_arrows_start_at_square_boundary() {
        let scene = build(&on_surface(), &AppConfig::default()).unwrap();
        let (start, end) = arrow_of(&scene, "force-0");
        assert_approx_eq!(f32, start.y(), 0.6, epsilon = 1e-6);
        assert_approx_eq!(f32, end.y(), 2.6, epsilon = 1e-5);

        let (start, _) = arrow_of(&scene, "force-1");
        assert_approx_eq!(f32, start.y(), -0.6, epsilon = 1e-6);
    }

    #[test]
    fn test_diagonal_force_leaves_square_corner() {
        let desc = ForceDiagram {
            forces: vec![Force::new(Compass::Ur, 1.0, "F")],
            ..ForceDiagram::default()
        };
        let scene = build(&desc, &AppConfig::default()).unwrap();
        let (start, _) = arrow_of(&scene, "force-0");
        assert_approx_eq!(f32, start.x(), 0.6, epsilon = 1e-5);
        assert_approx_eq!(f32, start.y(), 0.6, epsilon = 1e-5);
    }

    #[test]
    fn test_circle_boundary_and_proportional_lengths() {
        let desc = ForceDiagram {
            object_shape: ObjectShape::Circle,
            object_size: 1.0,
            forces: vec![
                Force::new(ForceDirection::Degrees(30.0), 4.0, "T"),
                Force::new(Compass::Left, 1.0, "f"),
            ],
            ..ForceDiagram::default()
        };
        let scene = build(&desc, &AppConfig::default()).unwrap();
        let (start, end) = arrow_of(&scene, "force-0");
        assert_approx_eq!(f32, start.length(), 0.5, epsilon = 1e-5);
        assert_approx_eq!(f32, start.distance(end), 2.0, epsilon = 1e-5);

        let (start, end) = arrow_of(&scene, "force-1");
        assert_approx_eq!(f32, start.distance(end), 0.5, epsilon = 1e-5);
    }

    #[test]
    fn test_balanced_forces_show_zero_net() {
        let desc = ForceDiagram {
            show_net_force: true,
            ..on_surface()
        };
        let scene = build(&desc, &AppConfig::default()).unwrap();
        let net = scene.find("net-force").unwrap();
        assert_eq!(net.count_kind(PrimitiveKind::Line), 0);
        let texts: Vec<_> = net.primitives().filter_map(|p| p.text()).collect();
        assert_eq!(texts, vec!["F_net = 0"]);
    }

    #[test]
    fn test_unbalanced_net_force_is_dashed() {
        let desc = ForceDiagram {
            forces: vec![
                Force::new(Compass::Right, 3.0, "F"),
                Force::new(Compass::Left, 1.0, "f"),
            ],
            show_net_force: true,
            ..ForceDiagram::default()
        };
        let scene = build(&desc, &AppConfig::default()).unwrap();
        let net = scene.find("net-force").unwrap();
        let arrow = net.primitives().next().unwrap();
        assert_eq!(arrow.stroke().map(|s| s.style().clone()), Some(StrokeStyle::Dashed));
        let (start, end) = arrow_of(&scene, "net-force");
        assert_approx_eq!(f32, start.x(), 0.0);
        // 2.0 - 2.0 / 3.0
        assert_approx_eq!(f32, end.x(), 4.0 / 3.0, epsilon = 1e-5);
    }

    #[test]
    fn test_negative_magnitude() {
        let desc = ForceDiagram {
            forces: vec![Force::new(Compass::Up, -1.0, "N")],
            ..ForceDiagram::default()
        };
        assert!(matches!(
            build(&desc, &AppConfig::default()),
            Err(DiagramError::SchemaMismatch { .. })
        ));
    }

    #[test]
    fn test_non_finite_direction() {
        let desc = ForceDiagram {
            forces: vec![
                Force::new(Compass::Up, 1.0, "N"),
                Force::new(ForceDirection::Degrees(f32::NAN), 1.0, "F"),
            ],
            ..ForceDiagram::default()
        };
        assert!(matches!(
            build(&desc, &AppConfig::default()),
            Err(DiagramError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_all_zero_magnitudes() {
        let desc = ForceDiagram {
            forces: vec![Force::new(Compass::Up, 0.0, "N")],
            ..ForceDiagram::default()
        };
        assert!(matches!(
            build(&desc, &AppConfig::default()),
            Err(DiagramError::DegenerateRange { .. })
        ));
    }

    #[test]
    fn test_direction_deserialize() {
        let desc: ForceDiagram = toml::from_str(
            r#"
            object_shape = "circle"
            forces = [
                { direction = "UP", magnitude = 2.5, label = "T", color = "yellow" },
                { direction = 200, magnitude = 1.0 },
            ]
            "#,
        )
        .unwrap();
        assert_eq!(desc.forces[0].direction, ForceDirection::Compass(Compass::Up));
        assert_eq!(desc.forces[1].direction, ForceDirection::Degrees(200.0));
        assert_eq!(desc.forces[1].label, None);
    }
}
