//! Interior angle arcs between two rays sharing a vertex.
//!
//! The resolved angle is always the interior one, in `[0°, 180°]`; the arc
//! sweeps from the first ray towards the second along the shorter side.

use tableau_core::{
    draw::Primitive,
    geometry::Point,
};

use crate::error::{DiagramError, Result};

/// Angles within this many degrees of 90° count as right angles.
const RIGHT_ANGLE_TOLERANCE: f32 = 0.5;

/// A resolved angle arc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleArc {
    vertex: Point,
    radius: f32,
    start_angle: f32,
    sweep: f32,
    degrees: f32,
    label_position: Point,
    first_ray: Point,
    second_ray: Point,
}

impl AngleArc {
    pub fn vertex(&self) -> Point {
        self.vertex
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Direction of the first ray, in degrees.
    pub fn start_angle(&self) -> f32 {
        self.start_angle
    }

    /// Signed sweep of the drawn arc, from the first ray to the second, in
    /// degrees. Measured in the XY plane.
    pub fn sweep(&self) -> f32 {
        self.sweep
    }

    /// The interior angle between the full rays, in `[0°, 180°]`.
    pub fn degrees(&self) -> f32 {
        self.degrees
    }

    /// Where the angle's label goes: on the bisector, beyond the arc.
    pub fn label_position(&self) -> Point {
        self.label_position
    }

    pub fn is_right_angle(&self) -> bool {
        (self.degrees() - 90.0).abs() < RIGHT_ANGLE_TOLERANCE
    }

    /// The arc itself, unstyled.
    pub fn to_arc(&self) -> Primitive {
        Primitive::arc(self.vertex, self.radius, self.start_angle, self.sweep)
    }

    /// A square corner mark: two short legs meeting on the bisector.
    pub fn to_right_angle_mark(&self) -> Primitive {
        let leg = self.radius * 0.7;
        let along_first = self.first_ray.scale(leg);
        let along_second = self.second_ray.scale(leg);
        Primitive::polyline(vec![
            self.vertex.add_point(along_first),
            self.vertex.add_point(along_first).add_point(along_second),
            self.vertex.add_point(along_second),
        ])
    }

    /// The mark to draw for this angle: a square corner for right angles
    /// when `right_angle_marks` is set, an arc otherwise.
    pub fn to_mark(&self, right_angle_marks: bool) -> Primitive {
        if right_angle_marks && self.is_right_angle() {
            self.to_right_angle_mark()
        } else {
            self.to_arc()
        }
    }

    /// Returns concentric copies for multi-arc congruence marks.
    ///
    /// Copy `i` has radius `radius + i * spacing`.
    pub fn nested(&self, count: u8, spacing: f32) -> Vec<AngleArc> {
        (0..count)
            .map(|i| AngleArc {
                radius: self.radius + f32::from(i) * spacing,
                ..*self
            })
            .collect()
    }
}

/// Resolves the interior angle at `vertex` between the rays towards `a` and `b`.
///
/// The arc is drawn with `radius`; the label sits on the bisector at
/// `radius * label_factor`. The angle itself is measured between the full 3D
/// rays. The drawn arc lives in the XY plane, so its start and sweep follow the
/// projected rays; a ray with no XY extent collapses the arc onto the other one.
///
/// # Errors
///
/// Returns [`DiagramError::DegenerateAngle`] when either ray has zero length.
///
/// # Examples
///
/// ```
/// # use tableau::resolve::resolve_angle_arc;
/// # use tableau_core::geometry::Point;
/// let arc = resolve_angle_arc(
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 0.0),
///     Point::new(0.0, 1.0),
///     0.4,
///     1.8,
/// )
/// .unwrap();
/// assert!(arc.is_right_angle());
/// assert!(arc.sweep() > 0.0);
/// ```
pub fn resolve_angle_arc(
    vertex: Point,
    a: Point,
    b: Point,
    radius: f32,
    label_factor: f32,
) -> Result<AngleArc> {
    let v1 = a.sub_point(vertex);
    let v2 = b.sub_point(vertex);

    let (Some(u1), Some(u2)) = (v1.normalize(), v2.normalize()) else {
        return Err(DiagramError::DegenerateAngle {
            context: format!("angle at ({}, {}, {})", vertex.x(), vertex.y(), vertex.z()),
        });
    };

    let degrees = interior_degrees(u1, u2);

    let (start_angle, sweep, bisector) =
        match (v1.with_z(0.0).normalize(), v2.with_z(0.0).normalize()) {
            (Some(p1), Some(p2)) => {
                let projected = interior_degrees(p1, p2);
                let sweep = if p1.cross(p2).z() < 0.0 { -projected } else { projected };
                (p1.angle_degrees(), sweep, p1.rotate(sweep / 2.0))
            }
            // A ray along the depth axis: the label follows the 3D bisector.
            (Some(flat), None) | (None, Some(flat)) => {
                let bisector = u1.add_point(u2).normalize().unwrap_or(flat);
                (flat.angle_degrees(), 0.0, bisector)
            }
            (None, None) => (0.0, 0.0, u1),
        };
    let label_position = vertex.add_point(bisector.scale(radius * label_factor));

    Ok(AngleArc {
        vertex,
        radius,
        start_angle,
        sweep,
        degrees,
        label_position,
        first_ray: u1,
        second_ray: u2,
    })
}

/// Angle between two unit vectors, in degrees.
fn interior_degrees(u1: Point, u2: Point) -> f32 {
    u1.dot(u2).clamp(-1.0, 1.0).acos().to_degrees()
}
