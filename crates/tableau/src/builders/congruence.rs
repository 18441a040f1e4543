//! Pairs of triangles marked as congruent or similar.
//!
//! Corresponding sides carry matching tick counts and corresponding angles
//! matching arc counts. Similar triangles additionally list side ratios
//! beneath the figure.

use log::debug;
use serde::Deserialize;

use tableau_core::{
    color::Color,
    draw::{Primitive, SceneNode},
    geometry::{Bounds, Point},
};

use crate::{
    builders::{label, outline, palette},
    config::AppConfig,
    error::{DiagramError, Result, check_index, check_len},
    resolve::TriangleVertices,
};

use super::triangle::{angle_arcs, side, tick_marks, triangle_polygon, vertex_labels};

/// Which congruence criterion the figure illustrates.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CongruenceMode {
    /// Side-side-side.
    #[default]
    Sss,
    /// Side-angle-side.
    Sas,
    /// Angle-side-angle.
    Asa,
    /// Similar, not congruent: equal angles, proportional sides.
    Similar,
}

/// A correspondence mark: index on the first triangle, index on the second,
/// and how many ticks or arcs to draw.
///
/// Deserializes from `[0, 0, 1]` or `{ first = 0, second = 0, count = 1 }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Mark {
    pub first: usize,
    pub second: usize,
    pub count: u8,
}

impl Mark {
    pub const fn new(first: usize, second: usize, count: u8) -> Self {
        Self {
            first,
            second,
            count,
        }
    }
}

/// Parameters of a triangle congruence diagram.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TriangleCongruence {
    pub mode: CongruenceMode,
    pub tri1_vertices: Option<TriangleVertices>,
    pub tri2_vertices: Option<TriangleVertices>,
    /// Vertex labels of the first triangle; `None` or empty draws none.
    pub labels1: Option<Vec<String>>,
    pub labels2: Option<Vec<String>>,
    /// Side marks; side `i` joins vertex `i` to vertex `(i + 1) % 3`.
    pub side_marks: Option<Vec<Mark>>,
    /// Angle marks by vertex index.
    pub angle_marks: Option<Vec<Mark>>,
    /// Defaults to on for [`CongruenceMode::Similar`] only.
    pub show_proportions: Option<bool>,
    pub proportion_labels: Option<Vec<String>>,
    pub color1: Color,
    pub color2: Color,
    pub fill_opacity: f32,
}

impl Default for TriangleCongruence {
    fn default() -> Self {
        Self {
            mode: CongruenceMode::default(),
            tri1_vertices: None,
            tri2_vertices: None,
            labels1: Some(DEFAULT_LABELS1.map(String::from).to_vec()),
            labels2: Some(DEFAULT_LABELS2.map(String::from).to_vec()),
            side_marks: None,
            angle_marks: None,
            show_proportions: None,
            proportion_labels: None,
            color1: palette::blue(),
            color2: palette::orange(),
            fill_opacity: 0.2,
        }
    }
}

/// Shape shared by the default triangles, anchored at its first vertex.
const DEFAULT_SHAPE: [[f32; 2]; 3] = [[0.0, 0.0], [3.0, 0.0], [1.0, 2.5]];
const SIMILAR_SCALE: f32 = 1.4;
const DEFAULT_LABELS1: [&str; 3] = ["A", "B", "C"];
const DEFAULT_LABELS2: [&str; 3] = ["D", "E", "F"];

impl TriangleCongruence {
    fn default_vertices(&self, second: bool) -> [Point; 3] {
        let (origin, scale) = match (second, self.mode) {
            (false, _) => (Point::new(-5.0, -1.5), 1.0),
            (true, CongruenceMode::Similar) => (Point::new(1.0, -1.5), SIMILAR_SCALE),
            (true, _) => (Point::new(1.5, -1.5), 1.0),
        };
        DEFAULT_SHAPE.map(|[x, y]| origin.add_point(Point::new(x, y).scale(scale)))
    }

    /// Vertex labels of one triangle, if any are drawn.
    fn labels(&self, second: bool) -> Option<&[String]> {
        let labels = if second { &self.labels2 } else { &self.labels1 };
        labels.as_deref().filter(|labels| !labels.is_empty())
    }

    /// Name of vertex `i` for proportion text, falling back to the default
    /// letters when the triangle is unlabeled.
    fn vertex_name(&self, second: bool, i: usize) -> &str {
        match self.labels(second) {
            Some(labels) => labels[i].as_str(),
            None if second => DEFAULT_LABELS2[i],
            None => DEFAULT_LABELS1[i],
        }
    }

    fn resolve_vertices(&self) -> Result<([Point; 3], [Point; 3])> {
        let first = match &self.tri1_vertices {
            Some(vertices) => vertices.resolve()?,
            None => self.default_vertices(false),
        };
        let second = match &self.tri2_vertices {
            Some(vertices) => vertices.resolve()?,
            None => self.default_vertices(true),
        };
        Ok((first, second))
    }

    /// Side marks to draw, falling back to the mode's defaults.
    pub fn effective_side_marks(&self) -> Vec<Mark> {
        if let Some(marks) = &self.side_marks {
            return marks.clone();
        }
        match self.mode {
            CongruenceMode::Sss => vec![Mark::new(0, 0, 1), Mark::new(1, 1, 2), Mark::new(2, 2, 3)],
            CongruenceMode::Sas => vec![Mark::new(0, 0, 1), Mark::new(2, 2, 2)],
            CongruenceMode::Asa => vec![Mark::new(0, 0, 1)],
            CongruenceMode::Similar => Vec::new(),
        }
    }

    /// Angle marks to draw, falling back to the mode's defaults.
    pub fn effective_angle_marks(&self) -> Vec<Mark> {
        if let Some(marks) = &self.angle_marks {
            return marks.clone();
        }
        match self.mode {
            CongruenceMode::Sss => Vec::new(),
            CongruenceMode::Sas => vec![Mark::new(0, 0, 1)],
            CongruenceMode::Asa => vec![Mark::new(0, 0, 1), Mark::new(1, 1, 2)],
            CongruenceMode::Similar => {
                vec![Mark::new(0, 0, 1), Mark::new(1, 1, 2), Mark::new(2, 2, 3)]
            }
        }
    }

    fn shows_proportions(&self) -> bool {
        self.show_proportions
            .unwrap_or(self.mode == CongruenceMode::Similar)
    }
}

/// Formats a ratio with at most two decimals, dropping trailing zeros.
fn format_ratio(ratio: f32) -> String {
    let text = format!("{ratio:.2}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Builds a triangle congruence diagram.
///
/// Each triangle is a sub-node (`"triangle-1"`, `"triangle-2"`) holding its
/// polygon, tick groups (`"ticks-side-{i}"`), arc groups
/// (`"arcs-vertex-{i}"`) and vertex labels; ratios go in `"proportions"`.
///
/// # Errors
///
/// - [`DiagramError::SchemaMismatch`] when a label list does not have three
///   entries.
/// - [`DiagramError::IndexOutOfRange`] for side or vertex indices `>= 3`.
/// - [`DiagramError::DegenerateAngle`] when angle marks are requested on a
///   triangle with coincident vertices.
pub fn build(desc: &TriangleCongruence, config: &AppConfig) -> Result<SceneNode> {
    let (tri1, tri2) = desc.resolve_vertices()?;
    check_len("labels1", desc.labels(false), 3)?;
    check_len("labels2", desc.labels(true), 3)?;
    check_len("proportion_labels", desc.proportion_labels.as_deref(), 3)?;

    let side_marks = desc.effective_side_marks();
    let angle_marks = desc.effective_angle_marks();
    for mark in &side_marks {
        check_index("side_marks", mark.first, 3)?;
        check_index("side_marks", mark.second, 3)?;
    }
    for mark in &angle_marks {
        check_index("angle_marks", mark.first, 3)?;
        check_index("angle_marks", mark.second, 3)?;
    }

    let arcs = if angle_marks.is_empty() {
        None
    } else {
        Some((angle_arcs(&tri1, config)?, angle_arcs(&tri2, config)?))
    };

    debug!(
        mode:? = desc.mode,
        side_marks = side_marks.len(),
        angle_marks = angle_marks.len();
        "Resolved triangle congruence"
    );

    let mut nodes = [
        (tri1, desc.color1, desc.labels(false), SceneNode::new("triangle-1")),
        (tri2, desc.color2, desc.labels(true), SceneNode::new("triangle-2")),
    ];

    for (which, (vertices, color, _, node)) in nodes.iter_mut().enumerate() {
        node.push(triangle_polygon(vertices, *color, desc.fill_opacity, config));

        let stroke = outline(config, *color);
        for mark in &side_marks {
            let index = if which == 0 { mark.first } else { mark.second };
            let (start, end) = side(vertices, index);
            let mut ticks = SceneNode::new(format!("ticks-side-{index}"));
            ticks.extend(tick_marks(start, end, mark.count, config, &stroke));
            node.push_node(ticks);
        }

        if let Some((arcs1, arcs2)) = &arcs {
            let arcs = if which == 0 { arcs1 } else { arcs2 };
            for mark in &angle_marks {
                let index = if which == 0 { mark.first } else { mark.second };
                let mut group = SceneNode::new(format!("arcs-vertex-{index}"));
                group.extend(
                    arcs[index]
                        .nested(mark.count, config.layout().tick_spacing())
                        .iter()
                        .map(|arc| arc.to_arc().with_stroke(stroke.clone())),
                );
                node.push_node(group);
            }
        }
    }

    let mut scene = SceneNode::new("triangle_congruence");
    for (vertices, _, labels, mut node) in nodes {
        if let Some(labels) = labels {
            node.extend(vertex_labels(&vertices, labels, config));
        }
        scene.push_node(node);
    }

    if desc.shows_proportions() {
        scene.push_node(proportions(desc, &tri1, &tri2, config)?);
    }

    Ok(scene)
}

fn proportions(
    desc: &TriangleCongruence,
    tri1: &[Point; 3],
    tri2: &[Point; 3],
    config: &AppConfig,
) -> Result<SceneNode> {
    let texts: Vec<String> = match &desc.proportion_labels {
        Some(labels) => labels.clone(),
        None => (0..3)
            .map(|i| {
                let (a1, b1) = side(tri1, i);
                let (a2, b2) = side(tri2, i);
                let base = a1.distance(b1);
                if base <= f32::EPSILON {
                    return Err(DiagramError::degenerate_range(format!(
                        "side {i} of the first triangle"
                    )));
                }
                let name1 = format!(
                    "{}{}",
                    desc.vertex_name(false, i),
                    desc.vertex_name(false, (i + 1) % 3)
                );
                let name2 = format!(
                    "{}{}",
                    desc.vertex_name(true, i),
                    desc.vertex_name(true, (i + 1) % 3)
                );
                Ok(format!(
                    "{name1} : {name2} = 1 : {}",
                    format_ratio(a2.distance(b2) / base)
                ))
            })
            .collect::<Result<_>>()?,
    };

    let Some(bounds) = Bounds::from_points(tri1.iter().chain(tri2).copied()) else {
        return Ok(SceneNode::new("proportions"));
    };
    let pitch = config.style().font_units(config.style().font_size()) * 1.5;
    let top = bounds.min_y() - config.layout().label_offset() - pitch;

    let mut node = SceneNode::new("proportions");
    node.extend(texts.into_iter().enumerate().map(|(i, text)| {
        label(
            config,
            Point::new(bounds.center().x(), top - i as f32 * pitch),
            text,
        )
    }));
    Ok(node)
}
