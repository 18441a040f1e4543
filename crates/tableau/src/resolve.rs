//! Pure numeric resolution of descriptive parameters into coordinates.
//!
//! - [`geometry`] - polar points, triangle presets, proportional scaling
//! - [`angle`] - interior angle arcs between two rays

pub mod angle;
pub mod geometry;

pub use angle::{AngleArc, resolve_angle_arc};
pub use geometry::{TriangleVertices, point_on_circle, preset_triangle, scale_proportional};
