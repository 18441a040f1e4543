//! Drawable building blocks for diagram composition.
//!
//! Every diagram builder emits a [`SceneNode`]: an ordered tree of
//! [`Primitive`]s whose order defines paint order (back to front). Primitives
//! carry fully resolved geometry plus an optional [`StrokeDefinition`] and
//! [`FillDefinition`]; nothing in this module knows how a renderer displays
//! them.
//!
//! # Quick Start
//!
//! ```
//! use tableau_core::color::{Color, css};
//! use tableau_core::draw::{FillDefinition, Primitive, SceneNode, StrokeDefinition};
//! use tableau_core::geometry::Point;
//!
//! let mut scene = SceneNode::new("badge");
//! scene.push(
//!     Primitive::circle(Point::default(), 1.0)
//!         .with_fill(FillDefinition::new(Color::from(css::GOLD), 0.8))
//!         .with_stroke(StrokeDefinition::solid(Color::from(css::WHITE), 2.0)),
//! );
//! scene.push(Primitive::label(Point::default(), "1st", 24.0));
//!
//! assert_eq!(scene.primitive_count(), 2);
//! ```

mod arrow;
mod fill;
mod primitive;
mod scene;
mod stroke;

pub use arrow::ArrowDirection;
pub use fill::FillDefinition;
pub use primitive::{Geometry, Primitive, PrimitiveKind, Style};
pub use scene::{Primitives, SceneChild, SceneNode};
pub use stroke::{StrokeCap, StrokeDefinition, StrokeJoin, StrokeStyle};
