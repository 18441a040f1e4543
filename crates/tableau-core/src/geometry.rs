//! Geometric primitives for diagram composition.
//!
//! This module provides the fundamental geometric types used throughout
//! Tableau for resolving positions, sizes, and bounding boxes of primitives.
//!
//! # Overview
//!
//! - [`Point`] - A coordinate in scene space (planar, with an optional depth)
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - An axis-aligned bounding box in the XY plane
//! - [`Insets`] - Padding/margin values for four sides
//!
//! # Coordinate System
//!
//! Tableau uses a mathematical coordinate system:
//!
//! ```text
//!    +Y
//!     ▲
//!     │
//!     │
//!   (0,0) ────────► +X
//! ```
//!
//! - **Origin**: Scene center at `(0, 0)`
//! - **X-axis**: Increases rightward
//! - **Y-axis**: Increases upward
//! - **Z-axis**: Increases toward the viewer (only used by 3D diagrams)
//!
//! Angles are measured in degrees, counter-clockwise from the positive x-axis.
//! Renderers that use a downward Y-axis (such as SVG) flip the Y coordinate
//! on output.

use serde::Deserialize;

/// A point (or displacement vector) in scene space.
///
/// Points use `f32` coordinates. Most diagrams are planar and leave `z` at
/// zero; 3D diagrams populate it and leave projection to the renderer.
///
/// # Examples
///
/// ```
/// # use tableau_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(5.0, 5.0);
///
/// // Vector addition
/// let sum = p1.add_point(p2);
/// assert_eq!(sum.x(), 15.0);
/// assert_eq!(sum.y(), 25.0);
///
/// // Midpoint calculation
/// let mid = p1.midpoint(p2);
/// assert_eq!(mid.x(), 7.5);
/// assert_eq!(mid.y(), 12.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(from = "Vec<f32>")]
pub struct Point {
    x: f32,
    y: f32,
    z: f32,
}

impl Point {
    /// Creates a new planar point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y, z: 0.0 }
    }

    /// Creates a new point with all three coordinates
    pub fn new_3d(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Creates a unit-length direction in the XY plane at the given angle.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tableau_core::geometry::Point;
    /// let up = Point::from_angle(90.0);
    /// assert!(up.x().abs() < 1e-6);
    /// assert!((up.y() - 1.0).abs() < 1e-6);
    /// ```
    pub fn from_angle(degrees: f32) -> Self {
        let radians = degrees.to_radians();
        Self::new(radians.cos(), radians.sin())
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Returns the z-coordinate of the point
    pub fn z(self) -> f32 {
        self.z
    }

    /// Creates a new point with the specified x-coordinate
    pub fn with_x(mut self, x: f32) -> Self {
        self.x = x;
        self
    }

    /// Creates a new point with the specified y-coordinate
    pub fn with_y(mut self, y: f32) -> Self {
        self.y = y;
        self
    }

    /// Creates a new point with the specified z-coordinate
    pub fn with_z(mut self, z: f32) -> Self {
        self.z = z;
        self
    }

    /// Checks if all coordinates are zero
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }

    /// Checks that every coordinate is finite (no NaN or infinity)
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Adds another point to this point, returning a new point.
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }

    /// Calculates the midpoint between this point and another point
    pub fn midpoint(self, other: Point) -> Self {
        self.lerp(other, 0.5)
    }

    /// Linear interpolation: `t = 0` yields `self`, `t = 1` yields `other`.
    pub fn lerp(self, other: Point, t: f32) -> Self {
        Self {
            x: (other.x - self.x).mul_add(t, self.x),
            y: (other.y - self.y).mul_add(t, self.y),
            z: (other.z - self.z).mul_add(t, self.z),
        }
    }

    /// Multiplies all coordinates by the given factor.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tableau_core::geometry::Point;
    /// let point = Point::new(10.0, 20.0);
    ///
    /// let doubled = point.scale(2.0);
    /// assert_eq!(doubled.x(), 20.0);
    /// assert_eq!(doubled.y(), 40.0);
    /// ```
    pub fn scale(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
            z: self.z * factor,
        }
    }

    /// Dot product, treating both points as vectors from the origin
    pub fn dot(self, other: Point) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product, treating both points as vectors from the origin
    pub fn cross(self, other: Point) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Euclidean length of the vector from the origin to this point
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Calculates the hypotenuse in the XY plane (ignores depth)
    pub fn hypot(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Distance between two points
    pub fn distance(self, other: Point) -> f32 {
        other.sub_point(self).length()
    }

    /// Returns the unit vector in the same direction, or `None` for a
    /// zero-length (or non-finite) vector.
    pub fn normalize(self) -> Option<Self> {
        let length = self.length();
        if length > f32::EPSILON && length.is_finite() {
            Some(self.scale(1.0 / length))
        } else {
            None
        }
    }

    /// Rotates the vector 90° counter-clockwise in the XY plane.
    pub fn perpendicular(self) -> Self {
        Self {
            x: -self.y,
            y: self.x,
            z: self.z,
        }
    }

    /// Rotates the point about the origin by `degrees` in the XY plane.
    pub fn rotate(self, degrees: f32) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self {
            x: self.x.mul_add(cos, -self.y * sin),
            y: self.x.mul_add(sin, self.y * cos),
            z: self.z,
        }
    }

    /// Rotates the point about `pivot` by `degrees` in the XY plane.
    pub fn rotate_about(self, pivot: Point, degrees: f32) -> Self {
        self.sub_point(pivot).rotate(degrees).add_point(pivot)
    }

    /// Direction of the vector in the XY plane, in degrees within `(-180, 180]`.
    pub fn angle_degrees(self) -> f32 {
        self.y.atan2(self.x).to_degrees()
    }

    /// Returns a new point with absolute values of all coordinates
    pub fn abs(self) -> Self {
        Self {
            x: self.x.abs(),
            y: self.y.abs(),
            z: self.z.abs(),
        }
    }

    /// Converts a point and size into a bounds rectangle
    ///
    /// The point is treated as the center of the bounds, and the size
    /// is distributed equally in all directions around that center.
    pub fn to_bounds(self, size: Size) -> Bounds {
        Bounds::new_from_center(self, size)
    }
}

/// Coordinates written as `[x, y]` or `[x, y, z]` lists.
///
/// Missing trailing components default to zero; extra components are
/// ignored. Callers that must reject malformed lists validate the length
/// before converting.
impl From<Vec<f32>> for Point {
    fn from(coords: Vec<f32>) -> Self {
        let at = |index: usize| coords.get(index).copied().unwrap_or(0.0);
        Self::new_3d(at(0), at(1), at(2))
    }
}

impl From<[f32; 2]> for Point {
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<[f32; 3]> for Point {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new_3d(x, y, z)
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns a new Size with the maximum width and height between this size and another
    pub fn max(self, other: Size) -> Self {
        Self {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }

    /// Returns a new Size with padding added to both width and height
    pub fn add_padding(self, insets: Insets) -> Self {
        Self {
            width: self.width + insets.horizontal_sum(),
            height: self.height + insets.vertical_sum(),
        }
    }

    /// Multiplies both dimension by the given factor
    pub fn scale(self, factor: f32) -> Self {
        Self {
            width: self.width * factor,
            height: self.height * factor,
        }
    }

    /// Returns true if both width and height are zero
    pub fn is_zero(self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }
}

/// Represents an axis-aligned bounding box in the XY plane
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates a new bounds from a center point and a size
    pub fn new_from_center(center: Point, size: Size) -> Self {
        let half_width = size.width / 2.0;
        let half_height = size.height / 2.0;
        Self {
            min_x: center.x - half_width,
            min_y: center.y - half_height,
            max_x: center.x + half_width,
            max_y: center.y + half_height,
        }
    }

    /// Creates the smallest bounds containing every point, or `None` when
    /// the iterator is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tableau_core::geometry::{Bounds, Point};
    /// let bounds = Bounds::from_points([
    ///     Point::new(-1.0, 2.0),
    ///     Point::new(3.0, -4.0),
    /// ])
    /// .unwrap();
    /// assert_eq!(bounds.min_x(), -1.0);
    /// assert_eq!(bounds.max_y(), 2.0);
    /// assert_eq!(bounds.width(), 4.0);
    /// ```
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        let start = Self {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        Some(points.fold(start, |bounds, point| bounds.include_point(point)))
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the center point of the bounds
    pub fn center(self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Converts bounds to a Size object
    pub fn to_size(self) -> Size {
        Size {
            width: self.width(),
            height: self.height(),
        }
    }

    /// Returns `true` if the point lies inside or on the edge of the bounds
    pub fn contains(self, point: Point) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }

    /// Grows the bounds so that it contains the given point
    pub fn include_point(self, point: Point) -> Self {
        Self {
            min_x: self.min_x.min(point.x),
            min_y: self.min_y.min(point.y),
            max_x: self.max_x.max(point.x),
            max_y: self.max_y.max(point.y),
        }
    }

    /// Merges two bounds to create a larger bounds that contains both.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tableau_core::geometry::{Bounds, Point, Size};
    /// let a = Bounds::new_from_center(Point::new(0.0, 0.0), Size::new(2.0, 2.0));
    /// let b = Bounds::new_from_center(Point::new(3.0, 0.0), Size::new(2.0, 4.0));
    ///
    /// let combined = a.merge(&b);
    /// assert_eq!(combined.min_x(), -1.0);
    /// assert_eq!(combined.max_x(), 4.0);
    /// assert_eq!(combined.height(), 4.0);
    /// ```
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Moves the bounds by the specified offset.
    pub fn translate(&self, offset: Point) -> Self {
        Self {
            min_x: self.min_x + offset.x,
            min_y: self.min_y + offset.y,
            max_x: self.max_x + offset.x,
            max_y: self.max_y + offset.y,
        }
    }

    /// Expands the bounds by adding insets.
    ///
    /// Insets are expressed in screen terms: `top` grows the bounds upward
    /// (toward `max_y`) and `bottom` grows it downward.
    pub fn add_padding(&self, insets: Insets) -> Self {
        Self {
            min_x: self.min_x - insets.left(),
            min_y: self.min_y - insets.bottom(),
            max_x: self.max_x + insets.right(),
            max_y: self.max_y + insets.top(),
        }
    }
}

/// Represents spacing around an element (padding, margin, etc.)
/// with potentially different values for each side
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Insets {
    top: f32,
    right: f32,
    bottom: f32,
    left: f32,
}

impl Insets {
    /// Creates a new insets with specified values for each side
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Creates a new insets with the same value for all sides
    pub fn uniform(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Returns the top inset value
    pub fn top(self) -> f32 {
        self.top
    }

    /// Returns the right inset value
    pub fn right(self) -> f32 {
        self.right
    }

    /// Returns the bottom inset value
    pub fn bottom(self) -> f32 {
        self.bottom
    }

    /// Returns the left inset value
    pub fn left(self) -> f32 {
        self.left
    }

    /// Returns the sum of left and right insets
    pub fn horizontal_sum(self) -> f32 {
        self.left + self.right
    }

    /// Returns the sum of top and bottom insets
    pub fn vertical_sum(self) -> f32 {
        self.top + self.bottom
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_point_new() {
        let point = Point::new(10.0, 20.0);
        assert_eq!(point.x(), 10.0);
        assert_eq!(point.y(), 20.0);
        assert_eq!(point.z(), 0.0);
    }

    #[test]
    fn test_point_default() {
        let point = Point::default();
        assert!(point.is_zero());
    }

    #[test]
    fn test_point_add_sub() {
        let a = Point::new_3d(1.0, 2.0, 3.0);
        let b = Point::new_3d(4.0, 5.0, 6.0);
        assert_eq!(a.add_point(b), Point::new_3d(5.0, 7.0, 9.0));
        assert_eq!(b.sub_point(a), Point::new_3d(3.0, 3.0, 3.0));
    }

    #[test]
    fn test_point_dot_and_cross() {
        let x = Point::new(1.0, 0.0);
        let y = Point::new(0.0, 1.0);
        assert_eq!(x.dot(y), 0.0);
        assert_eq!(x.cross(y), Point::new_3d(0.0, 0.0, 1.0));
        assert_eq!(y.cross(x), Point::new_3d(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_point_length_and_distance() {
        assert_approx_eq!(f32, Point::new(3.0, 4.0).length(), 5.0);
        assert_approx_eq!(f32, Point::new_3d(2.0, 3.0, 6.0).length(), 7.0);
        assert_approx_eq!(
            f32,
            Point::new(1.0, 1.0).distance(Point::new(4.0, 5.0)),
            5.0
        );
    }

    #[test]
    fn test_point_normalize() {
        let unit = Point::new(0.0, -3.0).normalize().unwrap();
        assert_approx_eq!(f32, unit.y(), -1.0);
        assert!(Point::default().normalize().is_none());
    }

    #[test]
    fn test_point_perpendicular_is_ccw() {
        let perp = Point::new(1.0, 0.0).perpendicular();
        assert_eq!(perp, Point::new(0.0, 1.0));
    }

    #[test]
    fn test_point_rotate() {
        let rotated = Point::new(1.0, 0.0).rotate(90.0);
        assert_approx_eq!(f32, rotated.x(), 0.0, epsilon = 1e-6);
        assert_approx_eq!(f32, rotated.y(), 1.0, epsilon = 1e-6);

        let about = Point::new(2.0, 1.0).rotate_about(Point::new(1.0, 1.0), 180.0);
        assert_approx_eq!(f32, about.x(), 0.0, epsilon = 1e-6);
        assert_approx_eq!(f32, about.y(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_point_angle_degrees() {
        assert_approx_eq!(f32, Point::new(0.0, 2.0).angle_degrees(), 90.0);
        assert_approx_eq!(f32, Point::new(-1.0, 0.0).angle_degrees(), 180.0);
    }

    #[test]
    fn test_point_from_coordinate_lists() {
        assert_eq!(Point::from(vec![1.0, 2.0]), Point::new(1.0, 2.0));
        assert_eq!(
            Point::from(vec![1.0, 2.0, 3.0]),
            Point::new_3d(1.0, 2.0, 3.0)
        );
        assert_eq!(Point::from([4.0, 5.0]), Point::new(4.0, 5.0));
    }

    #[test]
    fn test_point_lerp() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, -10.0);
        assert_eq!(a.lerp(b, 0.25), Point::new(2.5, -2.5));
        assert_eq!(a.midpoint(b), Point::new(5.0, -5.0));
    }

    #[test]
    fn test_bounds_new_from_center() {
        let bounds = Bounds::new_from_center(Point::new(10.0, 10.0), Size::new(4.0, 2.0));
        assert_eq!(bounds.min_x(), 8.0);
        assert_eq!(bounds.max_x(), 12.0);
        assert_eq!(bounds.min_y(), 9.0);
        assert_eq!(bounds.max_y(), 11.0);
        assert_eq!(bounds.center(), Point::new(10.0, 10.0));
    }

    #[test]
    fn test_bounds_from_points_empty() {
        assert!(Bounds::from_points(Vec::new()).is_none());
    }

    #[test]
    fn test_bounds_contains_and_include() {
        let bounds = Bounds::new_from_center(Point::default(), Size::new(2.0, 2.0));
        assert!(bounds.contains(Point::new(1.0, -1.0)));
        assert!(!bounds.contains(Point::new(1.5, 0.0)));

        let grown = bounds.include_point(Point::new(3.0, 0.0));
        assert_eq!(grown.max_x(), 3.0);
        assert_eq!(grown.min_x(), -1.0);
    }

    #[test]
    fn test_bounds_translate() {
        let bounds = Bounds::new_from_center(Point::default(), Size::new(2.0, 2.0));
        let moved = bounds.translate(Point::new(5.0, -5.0));
        assert_eq!(moved.center(), Point::new(5.0, -5.0));
        assert_eq!(moved.to_size(), Size::new(2.0, 2.0));
    }

    #[test]
    fn test_bounds_add_padding() {
        let bounds = Bounds::new_from_center(Point::default(), Size::new(2.0, 2.0));
        let padded = bounds.add_padding(Insets::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(padded.max_y(), 2.0);
        assert_eq!(padded.max_x(), 3.0);
        assert_eq!(padded.min_y(), -4.0);
        assert_eq!(padded.min_x(), -5.0);
    }

    #[test]
    fn test_size_helpers() {
        let size = Size::new(2.0, 3.0);
        assert_eq!(size.scale(2.0), Size::new(4.0, 6.0));
        assert_eq!(size.max(Size::new(1.0, 5.0)), Size::new(2.0, 5.0));
        assert_eq!(
            size.add_padding(Insets::uniform(1.0)),
            Size::new(4.0, 5.0)
        );
        assert!(Size::default().is_zero());
    }

    #[test]
    fn test_insets_uniform() {
        let insets = Insets::uniform(5.0);
        assert_eq!(insets.horizontal_sum(), 10.0);
        assert_eq!(insets.vertical_sum(), 10.0);
    }
}

#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    fn point_strategy() -> impl Strategy<Value = Point> {
        (-1000.0f32..1000.0, -1000.0f32..1000.0).prop_map(|(x, y)| Point::new(x, y))
    }

    fn angle_strategy() -> impl Strategy<Value = f32> {
        -720.0f32..720.0
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Rotation is an isometry: it never changes the distance to the origin.
    fn check_rotation_preserves_length(point: Point, angle: f32) -> Result<(), TestCaseError> {
        let rotated = point.rotate(angle);
        prop_assert!(
            approx_eq!(f32, rotated.hypot(), point.hypot(), epsilon = 0.01),
            "rotating {point:?} by {angle} changed length to {}",
            rotated.hypot()
        );
        Ok(())
    }

    /// A perpendicular vector always has a zero dot product with the original.
    fn check_perpendicular_is_orthogonal(point: Point) -> Result<(), TestCaseError> {
        let dot = point.dot(point.perpendicular());
        prop_assert!(dot.abs() < 1e-3, "dot product was {dot}");
        Ok(())
    }

    /// Bounds built from points contain every one of them.
    fn check_bounds_contain_points(points: Vec<Point>) -> Result<(), TestCaseError> {
        let bounds = Bounds::from_points(points.iter().copied());
        match bounds {
            Some(bounds) => {
                for point in points {
                    prop_assert!(bounds.contains(point), "{point:?} not in {bounds:?}");
                }
            }
            None => prop_assert!(points.is_empty()),
        }
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn rotation_preserves_length(point in point_strategy(), angle in angle_strategy()) {
            check_rotation_preserves_length(point, angle)?;
        }

        #[test]
        fn perpendicular_is_orthogonal(point in point_strategy()) {
            check_perpendicular_is_orthogonal(point)?;
        }

        #[test]
        fn bounds_contain_points(points in prop::collection::vec(point_strategy(), 0..16)) {
            check_bounds_contain_points(points)?;
        }
    }
}
