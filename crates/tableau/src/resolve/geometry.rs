//! Descriptive parameters to absolute coordinates.

use serde::Deserialize;

use tableau_core::geometry::Point;

use crate::error::{DiagramError, Result};

/// Point at `angle_degrees` (counter-clockwise from +x) on a circle.
///
/// # Examples
///
/// ```
/// # use tableau::resolve::point_on_circle;
/// # use tableau_core::geometry::Point;
/// let top = point_on_circle(Point::new(1.0, 1.0), 2.0, 90.0);
/// assert!((top.x() - 1.0).abs() < 1e-6);
/// assert!((top.y() - 3.0).abs() < 1e-6);
/// ```
pub fn point_on_circle(center: Point, radius: f32, angle_degrees: f32) -> Point {
    center.add_point(Point::from_angle(angle_degrees).scale(radius))
}

/// Resolves a named triangle preset to its vertices.
///
/// - `"equilateral"`: side 3, centroid at the origin, apex up. Vertices run
///   counter-clockwise from the lower left.
/// - `"right_triangle"`: legs 4 (along x) and 3 (along y), centered on the
///   origin, with the right angle at the third vertex.
///
/// # Errors
///
/// Returns [`DiagramError::UnknownPreset`] for any other name.
pub fn preset_triangle(name: &str) -> Result<[Point; 3]> {
    match name {
        "equilateral" => {
            let circumradius = 3.0 / 3f32.sqrt();
            Ok([210.0, 330.0, 90.0].map(|angle| point_on_circle(Point::default(), circumradius, angle)))
        }
        "right_triangle" => Ok([
            Point::new(2.0, -1.5),
            Point::new(-2.0, 1.5),
            Point::new(-2.0, -1.5),
        ]),
        _ => Err(DiagramError::UnknownPreset {
            name: name.to_string(),
        }),
    }
}

/// Maps `value` from `[0, domain_max]` onto `[0, range_max]`.
///
/// # Errors
///
/// Returns [`DiagramError::DegenerateRange`] when `domain_max` is zero,
/// negative or not finite.
pub fn scale_proportional(value: f32, domain_max: f32, range_max: f32) -> Result<f32> {
    if !domain_max.is_finite() || domain_max <= 0.0 {
        return Err(DiagramError::degenerate_range(format!(
            "scaling domain [0, {domain_max}]"
        )));
    }
    Ok(value / domain_max * range_max)
}

/// Triangle vertices given either as a preset name or as explicit coordinates.
///
/// Deserializes from a string (`vertices = "equilateral"`) or from a list of
/// three `[x, y]` / `[x, y, z]` lists.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TriangleVertices {
    Preset(String),
    Explicit(Vec<Vec<f32>>),
}

impl Default for TriangleVertices {
    fn default() -> Self {
        Self::Preset("equilateral".to_string())
    }
}

impl From<[Point; 3]> for TriangleVertices {
    fn from(points: [Point; 3]) -> Self {
        Self::Explicit(points.iter().map(|p| vec![p.x(), p.y(), p.z()]).collect())
    }
}

impl TriangleVertices {
    /// Resolves the vertices to absolute points.
    ///
    /// # Errors
    ///
    /// - [`DiagramError::UnknownPreset`] for unrecognized preset names.
    /// - [`DiagramError::SchemaMismatch`] unless exactly three coordinate
    ///   lists of two or three finite numbers are given.
    pub fn resolve(&self) -> Result<[Point; 3]> {
        match self {
            Self::Preset(name) => preset_triangle(name),
            Self::Explicit(coords) => {
                if coords.len() != 3 {
                    return Err(DiagramError::schema_mismatch(
                        "triangle vertices",
                        "3 vertices",
                        coords.len(),
                    ));
                }
                let mut points = [Point::default(); 3];
                for (slot, coord) in points.iter_mut().zip(coords) {
                    *slot = coordinate(coord)?;
                }
                Ok(points)
            }
        }
    }
}

/// Converts a 2- or 3-element coordinate list into a point.
pub(crate) fn coordinate(coord: &[f32]) -> Result<Point> {
    let point = match *coord {
        [x, y] => Point::new(x, y),
        [x, y, z] => Point::new_3d(x, y, z),
        _ => {
            return Err(DiagramError::schema_mismatch(
                "coordinate",
                "2 or 3 components",
                coord.len(),
            ));
        }
    };
    if !point.is_finite() {
        return Err(DiagramError::invalid_parameter(
            "coordinate",
            format!("components must be finite, got {coord:?}"),
        ));
    }
    Ok(point)
}

/// Centroid of a triangle.
pub fn centroid(vertices: &[Point; 3]) -> Point {
    vertices[0]
        .add_point(vertices[1])
        .add_point(vertices[2])
        .scale(1.0 / 3.0)
}

/// Moves `point` by `distance` directly away from `origin`.
///
/// A point sitting on `origin` is pushed straight up.
pub fn push_away(point: Point, origin: Point, distance: f32) -> Point {
    let direction = point
        .sub_point(origin)
        .with_z(0.0)
        .normalize()
        .unwrap_or(Point::new(0.0, 1.0));
    point.add_point(direction.scale(distance))
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_point_on_circle_cardinal_angles() {
        let center = Point::default();
        let east = point_on_circle(center, 2.0, 0.0);
        let west = point_on_circle(center, 2.0, 180.0);
        assert_approx_eq!(f32, east.x(), 2.0);
        assert_approx_eq!(f32, east.y(), 0.0);
        assert_approx_eq!(f32, west.x(), -2.0, epsilon = 1e-5);
        assert_approx_eq!(f32, west.y(), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_equilateral_preset() {
        let [a, b, c] = preset_triangle("equilateral").unwrap();
        assert_approx_eq!(f32, a.distance(b), 3.0, epsilon = 1e-5);
        assert_approx_eq!(f32, b.distance(c), 3.0, epsilon = 1e-5);
        assert_approx_eq!(f32, c.distance(a), 3.0, epsilon = 1e-5);
        assert!(c.y() > a.y(), "apex should point up");

        let center = centroid(&[a, b, c]);
        assert_approx_eq!(f32, center.x(), 0.0, epsilon = 1e-5);
        assert_approx_eq!(f32, center.y(), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_right_triangle_preset_sides() {
        let [a, b, c] = preset_triangle("right_triangle").unwrap();
        assert_approx_eq!(f32, a.distance(b), 5.0, epsilon = 1e-5);
        assert_approx_eq!(f32, b.distance(c), 3.0, epsilon = 1e-5);
        assert_approx_eq!(f32, c.distance(a), 4.0, epsilon = 1e-5);
        assert_approx_eq!(f32, a.sub_point(c).dot(b.sub_point(c)), 0.0);
    }

    #[test]
    fn test_unknown_preset() {
        assert_eq!(
            preset_triangle("isosceles"),
            Err(DiagramError::UnknownPreset {
                name: "isosceles".to_string()
            })
        );
    }

    #[test]
    fn test_scale_proportional() {
        assert_approx_eq!(f32, scale_proportional(45.0, 90.0, 4.0).unwrap(), 2.0);
        assert_approx_eq!(f32, scale_proportional(0.0, 90.0, 4.0).unwrap(), 0.0);
        assert!(matches!(
            scale_proportional(1.0, 0.0, 4.0),
            Err(DiagramError::DegenerateRange { .. })
        ));
        assert!(scale_proportional(1.0, f32::INFINITY, 4.0).is_err());
    }

    #[test]
    fn test_explicit_vertices_accept_2d_and_3d() {
        let vertices = TriangleVertices::Explicit(vec![
            vec![0.0, 0.0],
            vec![4.0, 0.0, 0.0],
            vec![0.0, 3.0],
        ]);
        let [a, b, c] = vertices.resolve().unwrap();
        assert_eq!(a, Point::new(0.0, 0.0));
        assert_eq!(b, Point::new(4.0, 0.0));
        assert_eq!(c, Point::new(0.0, 3.0));
    }

    #[test]
    fn test_explicit_vertices_reject_bad_shapes() {
        let too_few = TriangleVertices::Explicit(vec![vec![0.0, 0.0], vec![1.0, 0.0]]);
        assert!(matches!(
            too_few.resolve(),
            Err(DiagramError::SchemaMismatch { .. })
        ));

        let bad_coord = TriangleVertices::Explicit(vec![vec![0.0], vec![1.0, 0.0], vec![0.0, 1.0]]);
        assert!(matches!(
            bad_coord.resolve(),
            Err(DiagramError::SchemaMismatch { .. })
        ));
    }

    #[test]
    fn test_vertices_deserialize_from_toml() {
        #[derive(Deserialize)]
        struct Doc {
            a: TriangleVertices,
            b: TriangleVertices,
        }

        let doc: Doc = toml::from_str(
            r#"
            a = "right_triangle"
            b = [[0, 0], [4, 0], [0, 3]]
            "#,
        )
        .unwrap();

        assert_eq!(doc.a, TriangleVertices::Preset("right_triangle".to_string()));
        assert_eq!(doc.b.resolve().unwrap()[1], Point::new(4.0, 0.0));
    }

    #[test]
    fn test_push_away() {
        let pushed = push_away(Point::new(2.0, 0.0), Point::default(), 0.5);
        assert_approx_eq!(f32, pushed.x(), 2.5);

        let degenerate = push_away(Point::default(), Point::default(), 0.5);
        assert_approx_eq!(f32, degenerate.y(), 0.5);
    }
}
