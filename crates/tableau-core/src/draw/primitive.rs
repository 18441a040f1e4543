//! Fully resolved drawable primitives.
//!
//! A [`Primitive`] couples a [`Geometry`] (where and what shape) with a
//! [`Style`] (how it is painted). Builders create primitives through the
//! named constructors and then attach paint with the `with_*` methods.

use std::fmt;

use crate::{
    draw::{ArrowDirection, FillDefinition, StrokeDefinition},
    geometry::{Bounds, Point},
};

/// Paint attributes shared by every primitive kind.
///
/// A missing stroke or fill means "do not paint that part"; labels use the
/// fill as their text color.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    stroke: Option<StrokeDefinition>,
    fill: Option<FillDefinition>,
}

impl Style {
    pub fn new(stroke: Option<StrokeDefinition>, fill: Option<FillDefinition>) -> Self {
        Self { stroke, fill }
    }

    pub fn stroke(&self) -> Option<&StrokeDefinition> {
        self.stroke.as_ref()
    }

    pub fn fill(&self) -> Option<&FillDefinition> {
        self.fill.as_ref()
    }
}

/// The shape of a primitive, in scene coordinates.
///
/// Angles are in degrees. An [`Geometry::Arc`] starts at `start_angle`
/// (counter-clockwise from +x) and sweeps by `sweep`; a negative sweep runs
/// clockwise.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Circle {
        center: Point,
        radius: f32,
    },
    Ellipse {
        center: Point,
        width: f32,
        height: f32,
    },
    Rectangle {
        center: Point,
        width: f32,
        height: f32,
        corner_radius: f32,
    },
    /// Closed outline through the vertices in order.
    Polygon {
        vertices: Vec<Point>,
    },
    /// Open path through the points in order.
    Polyline {
        points: Vec<Point>,
    },
    Line {
        start: Point,
        end: Point,
        direction: ArrowDirection,
    },
    Arc {
        center: Point,
        radius: f32,
        start_angle: f32,
        sweep: f32,
    },
    /// A small filled marker, rendered independently of zoom level.
    Dot {
        center: Point,
        radius: f32,
    },
    /// Text anchored at its center.
    Label {
        position: Point,
        text: String,
        font_size: f32,
    },
}

/// Discriminant of [`Geometry`], handy for counting and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Circle,
    Ellipse,
    Rectangle,
    Polygon,
    Polyline,
    Line,
    Arc,
    Dot,
    Label,
}

impl PrimitiveKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Ellipse => "ellipse",
            Self::Rectangle => "rectangle",
            Self::Polygon => "polygon",
            Self::Polyline => "polyline",
            Self::Line => "line",
            Self::Arc => "arc",
            Self::Dot => "dot",
            Self::Label => "label",
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Geometry {
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Self::Circle { .. } => PrimitiveKind::Circle,
            Self::Ellipse { .. } => PrimitiveKind::Ellipse,
            Self::Rectangle { .. } => PrimitiveKind::Rectangle,
            Self::Polygon { .. } => PrimitiveKind::Polygon,
            Self::Polyline { .. } => PrimitiveKind::Polyline,
            Self::Line { .. } => PrimitiveKind::Line,
            Self::Arc { .. } => PrimitiveKind::Arc,
            Self::Dot { .. } => PrimitiveKind::Dot,
            Self::Label { .. } => PrimitiveKind::Label,
        }
    }

    /// Axis-aligned bounds in the XY plane.
    ///
    /// Labels contribute only their anchor point since text extents depend
    /// on the renderer's font. Returns `None` for empty polygons and
    /// polylines.
    pub fn bounds(&self) -> Option<Bounds> {
        match self {
            Self::Circle { center, radius } | Self::Dot { center, radius } => {
                Bounds::from_points([
                    center.add_point(Point::new(-radius, -radius)),
                    center.add_point(Point::new(*radius, *radius)),
                ])
            }
            Self::Ellipse {
                center,
                width,
                height,
            }
            | Self::Rectangle {
                center,
                width,
                height,
                ..
            } => Bounds::from_points([
                center.add_point(Point::new(-width / 2.0, -height / 2.0)),
                center.add_point(Point::new(width / 2.0, height / 2.0)),
            ]),
            Self::Polygon { vertices: points } | Self::Polyline { points } => {
                Bounds::from_points(points.iter().copied())
            }
            Self::Line { start, end, .. } => Bounds::from_points([*start, *end]),
            Self::Arc {
                center,
                radius,
                start_angle,
                sweep,
            } => Bounds::from_points(arc_extremes(*center, *radius, *start_angle, *sweep)),
            Self::Label { position, .. } => Bounds::from_points([*position]),
        }
    }

    /// Returns a copy shifted by `offset`.
    pub fn translate(&self, offset: Point) -> Self {
        let shift = |p: &Point| p.add_point(offset);
        match self {
            Self::Circle { center, radius } => Self::Circle {
                center: shift(center),
                radius: *radius,
            },
            Self::Ellipse {
                center,
                width,
                height,
            } => Self::Ellipse {
                center: shift(center),
                width: *width,
                height: *height,
            },
            Self::Rectangle {
                center,
                width,
                height,
                corner_radius,
            } => Self::Rectangle {
                center: shift(center),
                width: *width,
                height: *height,
                corner_radius: *corner_radius,
            },
            Self::Polygon { vertices } => Self::Polygon {
                vertices: vertices.iter().map(shift).collect(),
            },
            Self::Polyline { points } => Self::Polyline {
                points: points.iter().map(shift).collect(),
            },
            Self::Line {
                start,
                end,
                direction,
            } => Self::Line {
                start: shift(start),
                end: shift(end),
                direction: *direction,
            },
            Self::Arc {
                center,
                radius,
                start_angle,
                sweep,
            } => Self::Arc {
                center: shift(center),
                radius: *radius,
                start_angle: *start_angle,
                sweep: *sweep,
            },
            Self::Dot { center, radius } => Self::Dot {
                center: shift(center),
                radius: *radius,
            },
            Self::Label {
                position,
                text,
                font_size,
            } => Self::Label {
                position: shift(position),
                text: text.clone(),
                font_size: *font_size,
            },
        }
    }
}

/// Endpoints of an arc plus every axis-crossing angle it passes through.
fn arc_extremes(center: Point, radius: f32, start_angle: f32, sweep: f32) -> Vec<Point> {
    let (lo, hi) = if sweep >= 0.0 {
        (start_angle, start_angle + sweep)
    } else {
        (start_angle + sweep, start_angle)
    };
    let on_arc = |angle: f32| center.add_point(Point::from_angle(angle).scale(radius));

    let mut points = vec![on_arc(lo), on_arc(hi)];
    let mut quadrant = (lo / 90.0).ceil() * 90.0;
    while quadrant < hi {
        points.push(on_arc(quadrant));
        quadrant += 90.0;
    }
    points
}

/// A geometry together with its paint.
///
/// # Examples
///
/// ```
/// use tableau_core::color::{Color, css};
/// use tableau_core::draw::{ArrowDirection, Geometry, Primitive, PrimitiveKind, StrokeDefinition};
/// use tableau_core::geometry::Point;
///
/// let force = Primitive::arrow(Point::new(0.0, 0.6), Point::new(0.0, 2.0))
///     .with_stroke(StrokeDefinition::solid(Color::from(css::RED), 3.0));
///
/// assert_eq!(force.kind(), PrimitiveKind::Line);
/// assert!(matches!(
///     force.geometry(),
///     Geometry::Line { direction: ArrowDirection::Forward, .. }
/// ));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    geometry: Geometry,
    style: Style,
}

impl Primitive {
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            style: Style::default(),
        }
    }

    pub fn circle(center: Point, radius: f32) -> Self {
        Self::new(Geometry::Circle { center, radius })
    }

    pub fn ellipse(center: Point, width: f32, height: f32) -> Self {
        Self::new(Geometry::Ellipse {
            center,
            width,
            height,
        })
    }

    pub fn rectangle(center: Point, width: f32, height: f32) -> Self {
        Self::rounded_rectangle(center, width, height, 0.0)
    }

    pub fn rounded_rectangle(center: Point, width: f32, height: f32, corner_radius: f32) -> Self {
        Self::new(Geometry::Rectangle {
            center,
            width,
            height,
            corner_radius,
        })
    }

    pub fn polygon(vertices: Vec<Point>) -> Self {
        Self::new(Geometry::Polygon { vertices })
    }

    pub fn polyline(points: Vec<Point>) -> Self {
        Self::new(Geometry::Polyline { points })
    }

    /// A plain segment without arrowheads.
    pub fn line(start: Point, end: Point) -> Self {
        Self::new(Geometry::Line {
            start,
            end,
            direction: ArrowDirection::Plain,
        })
    }

    /// A segment with an arrowhead at `end`.
    pub fn arrow(start: Point, end: Point) -> Self {
        Self::new(Geometry::Line {
            start,
            end,
            direction: ArrowDirection::Forward,
        })
    }

    pub fn arc(center: Point, radius: f32, start_angle: f32, sweep: f32) -> Self {
        Self::new(Geometry::Arc {
            center,
            radius,
            start_angle,
            sweep,
        })
    }

    pub fn dot(center: Point, radius: f32) -> Self {
        Self::new(Geometry::Dot { center, radius })
    }

    pub fn label(position: Point, text: impl Into<String>, font_size: f32) -> Self {
        Self::new(Geometry::Label {
            position,
            text: text.into(),
            font_size,
        })
    }

    pub fn with_stroke(mut self, stroke: StrokeDefinition) -> Self {
        self.style.stroke = Some(stroke);
        self
    }

    pub fn with_fill(mut self, fill: FillDefinition) -> Self {
        self.style.fill = Some(fill);
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn stroke(&self) -> Option<&StrokeDefinition> {
        self.style.stroke()
    }

    pub fn fill(&self) -> Option<&FillDefinition> {
        self.style.fill()
    }

    pub fn kind(&self) -> PrimitiveKind {
        self.geometry.kind()
    }

    /// The label text, if this primitive is a label.
    pub fn text(&self) -> Option<&str> {
        match &self.geometry {
            Geometry::Label { text, .. } => Some(text),
            _ => None,
        }
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.geometry.bounds()
    }

    /// Returns a copy shifted by `offset`, keeping the style.
    pub fn translate(&self, offset: Point) -> Self {
        Self {
            geometry: self.geometry.translate(offset),
            style: self.style.clone(),
        }
    }
}
