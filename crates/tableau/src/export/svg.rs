//! SVG preview rendering.
//!
//! Scene coordinates are math-style (y up); the page flips them, scales by
//! [`ExportOptions::pixels_per_unit`] and shifts depth with a simple oblique
//! projection. Arrow heads are shared `<marker>` definitions, one per stroke
//! color.

use std::collections::BTreeMap;

use log::{debug, trace};
use svg::node::element as svg_element;

use tableau_core::{
    apply_fill, apply_stroke,
    color::Color,
    draw::{Geometry, Primitive, SceneChild, SceneNode},
    geometry::{Bounds, Point},
};

use super::ExportOptions;

type SvgNode = Box<dyn svg::Node>;

/// Renders `scene` to a standalone SVG document.
///
/// # Examples
///
/// ```
/// use tableau::draw::{Primitive, SceneNode};
/// use tableau::export::{ExportOptions, svg::render_svg};
/// use tableau::geometry::Point;
///
/// let scene = SceneNode::new("demo").with(Primitive::circle(Point::default(), 1.0));
/// let document = render_svg(&scene, &ExportOptions::default());
/// assert!(document.contains("<circle"));
/// ```
pub fn render_svg(scene: &SceneNode, options: &ExportOptions) -> String {
    Svg::new(options).render(scene).to_string()
}

/// Collects arrow marker colors while walking a scene.
#[derive(Debug, Default)]
struct MarkerRegistry {
    colors: BTreeMap<String, Color>,
}

impl MarkerRegistry {
    /// Returns the `url(#..)` reference for an arrow head in `color`.
    fn reference(&mut self, color: Color) -> String {
        let id = format!("arrow-{}", color.to_id_safe_string());
        let reference = format!("url(#{id})");
        self.colors.insert(id, color);
        reference
    }

    fn definitions(&self) -> svg_element::Definitions {
        self.colors
            .iter()
            .fold(svg_element::Definitions::new(), |defs, (id, color)| {
                let head = svg_element::Path::new()
                    .set("d", "M 0 0 L 10 5 L 0 10 z")
                    .set("fill", color.with_alpha(1.0).to_string());
                defs.add(
                    svg_element::Marker::new()
                        .set("id", id.as_str())
                        .set("viewBox", "0 0 10 10")
                        .set("refX", 9)
                        .set("refY", 5)
                        .set("markerWidth", 6)
                        .set("markerHeight", 6)
                        .set("orient", "auto-start-reverse")
                        .add(head),
                )
            })
    }
}

/// A single SVG rendering pass.
struct Svg<'a> {
    options: &'a ExportOptions,
    markers: MarkerRegistry,
    /// Scene-space rectangle mapped onto the page, padding included.
    view: Bounds,
}

impl<'a> Svg<'a> {
    fn new(options: &'a ExportOptions) -> Self {
        Self {
            options,
            markers: MarkerRegistry::default(),
            view: Bounds::default(),
        }
    }

    /// Projects a 3D scene point onto the XY plane.
    fn project(&self, point: Point) -> Point {
        let shift = point.z() * self.options.depth_shift;
        Point::new(point.x() - shift, point.y() - shift)
    }

    /// Geometry with every point projected.
    fn flatten(&self, geometry: &Geometry) -> Geometry {
        let p = |point: &Point| self.project(*point);
        match geometry {
            Geometry::Circle { center, radius } => Geometry::Circle {
                center: p(center),
                radius: *radius,
            },
            Geometry::Ellipse { center, width, height } => Geometry::Ellipse {
                center: p(center),
                width: *width,
                height: *height,
            },
            Geometry::Rectangle {
                center,
                width,
                height,
                corner_radius,
            } => Geometry::Rectangle {
                center: p(center),
                width: *width,
                height: *height,
                corner_radius: *corner_radius,
            },
            Geometry::Polygon { vertices } => Geometry::Polygon {
                vertices: vertices.iter().map(p).collect(),
            },
            Geometry::Polyline { points } => Geometry::Polyline {
                points: points.iter().map(p).collect(),
            },
            Geometry::Line { start, end, direction } => Geometry::Line {
                start: p(start),
                end: p(end),
                direction: *direction,
            },
            Geometry::Arc {
                center,
                radius,
                start_angle,
                sweep,
            } => Geometry::Arc {
                center: p(center),
                radius: *radius,
                start_angle: *start_angle,
                sweep: *sweep,
            },
            Geometry::Dot { center, radius } => Geometry::Dot {
                center: p(center),
                radius: *radius,
            },
            Geometry::Label {
                position,
                text,
                font_size,
            } => Geometry::Label {
                position: p(position),
                text: text.clone(),
                font_size: *font_size,
            },
        }
    }

    /// Page coordinates of a projected scene point.
    fn to_page(&self, point: Point) -> (f32, f32) {
        let scale = self.options.pixels_per_unit;
        ((point.x() - self.view.min_x()) * scale, (self.view.max_y() - point.y()) * scale)
    }

    fn length(&self, length: f32) -> f32 {
        length * self.options.pixels_per_unit
    }

    fn points_attribute(&self, points: &[Point]) -> String {
        points
            .iter()
            .map(|point| {
                let (x, y) = self.to_page(*point);
                format!("{x},{y}")
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn scene_bounds(&self, scene: &SceneNode) -> Bounds {
        scene
            .primitives()
            .filter_map(|primitive| self.flatten(primitive.geometry()).bounds())
            .reduce(|acc, bounds| acc.merge(&bounds))
            .unwrap_or_default()
    }

    fn render(&mut self, scene: &SceneNode) -> svg::Document {
        let padding = self.options.padding;
        let bounds = self.scene_bounds(scene);
        self.view = Bounds::from_points([
            Point::new(bounds.min_x() - padding, bounds.min_y() - padding),
            Point::new(bounds.max_x() + padding, bounds.max_y() + padding),
        ])
        .unwrap_or_default();

        let width = self.length(self.view.width());
        let height = self.length(self.view.height());
        debug!(
            page_width = width,
            page_height = height,
            primitives = scene.primitive_count();
            "Rendering SVG preview"
        );

        let mut doc = svg::Document::new()
            .set("viewBox", format!("0 0 {width} {height}"))
            .set("width", width)
            .set("height", height);

        if let Some(background) = self.options.background {
            let rect = svg_element::Rectangle::new()
                .set("width", width)
                .set("height", height)
                .set("fill", background.with_alpha(1.0).to_string());
            doc = doc.add(rect);
        }

        let content = self.render_node(scene);
        doc.add(self.markers.definitions()).add(content)
    }

    fn render_node(&mut self, node: &SceneNode) -> svg_element::Group {
        let mut group = svg_element::Group::new().set("class", node.name());
        for child in node.children() {
            group = match child {
                SceneChild::Primitive(primitive) => group.add(self.render_primitive(primitive)),
                SceneChild::Node(node) => group.add(self.render_node(node)),
            };
        }
        group
    }

    fn render_primitive(&mut self, primitive: &Primitive) -> SvgNode {
        let stroke = primitive.stroke();
        let fill = primitive.fill();
        trace!(kind = primitive.kind().as_str(); "Rendering primitive");

        match self.flatten(primitive.geometry()) {
            Geometry::Circle { center, radius } | Geometry::Dot { center, radius } => {
                let (cx, cy) = self.to_page(center);
                let circle = svg_element::Circle::new()
                    .set("cx", cx)
                    .set("cy", cy)
                    .set("r", self.length(radius));
                Box::new(apply_stroke!(apply_fill!(circle, fill), stroke))
            }
            Geometry::Ellipse { center, width, height } => {
                let (cx, cy) = self.to_page(center);
                let ellipse = svg_element::Ellipse::new()
                    .set("cx", cx)
                    .set("cy", cy)
                    .set("rx", self.length(width / 2.0))
                    .set("ry", self.length(height / 2.0));
                Box::new(apply_stroke!(apply_fill!(ellipse, fill), stroke))
            }
            Geometry::Rectangle {
                center,
                width,
                height,
                corner_radius,
            } => {
                let (x, y) = self.to_page(center.add_point(Point::new(-width / 2.0, height / 2.0)));
                let rect = svg_element::Rectangle::new()
                    .set("x", x)
                    .set("y", y)
                    .set("width", self.length(width))
                    .set("height", self.length(height))
                    .set("rx", self.length(corner_radius));
                Box::new(apply_stroke!(apply_fill!(rect, fill), stroke))
            }
            Geometry::Polygon { vertices } => {
                let polygon = svg_element::Polygon::new().set("points", self.points_attribute(&vertices));
                Box::new(apply_stroke!(apply_fill!(polygon, fill), stroke))
            }
            Geometry::Polyline { points } => {
                let polyline = svg_element::Polyline::new()
                    .set("points", self.points_attribute(&points))
                    .set("fill", "none");
                Box::new(apply_stroke!(polyline, stroke))
            }
            Geometry::Line { start, end, direction } => {
                let (x1, y1) = self.to_page(start);
                let (x2, y2) = self.to_page(end);
                let mut line = apply_stroke!(
                    svg_element::Line::new()
                        .set("x1", x1)
                        .set("y1", y1)
                        .set("x2", x2)
                        .set("y2", y2),
                    stroke
                );
                if let Some(color) = stroke.map(|s| s.color()) {
                    if direction.has_head() {
                        line = line.set("marker-end", self.markers.reference(color));
                    }
                    if direction.has_tail() {
                        line = line.set("marker-start", self.markers.reference(color));
                    }
                }
                Box::new(line)
            }
            Geometry::Arc {
                center,
                radius,
                start_angle,
                sweep,
            } => {
                let start = center.add_point(Point::from_angle(start_angle).scale(radius));
                let end = center.add_point(Point::from_angle(start_angle + sweep).scale(radius));
                let (x1, y1) = self.to_page(start);
                let (x2, y2) = self.to_page(end);
                let r = self.length(radius);
                let large_arc = u8::from(sweep.abs() > 180.0);
                // Counter-clockwise in scene space is counter-clockwise on
                // the flipped page, which SVG calls the negative direction.
                let sweep_flag = u8::from(sweep < 0.0);
                let path = svg_element::Path::new()
                    .set("d", format!("M {x1} {y1} A {r} {r} 0 {large_arc} {sweep_flag} {x2} {y2}"))
                    .set("fill", "none");
                Box::new(apply_stroke!(path, stroke))
            }
            Geometry::Label {
                position,
                text,
                font_size,
            } => {
                let (x, y) = self.to_page(position);
                let label = svg_element::Text::new(text)
                    .set("x", x)
                    .set("y", y)
                    .set("font-size", self.length(font_size * self.options.font_scale))
                    .set("font-family", "sans-serif")
                    .set("text-anchor", "middle")
                    .set("dominant-baseline", "central");
                Box::new(apply_fill!(label, fill))
            }
        }
    }
}
