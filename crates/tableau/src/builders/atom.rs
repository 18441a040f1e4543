//! Bohr-model atoms: a nucleus with concentric electron shells.

use log::debug;
use serde::Deserialize;

use tableau_core::{
    color::Color,
    draw::{FillDefinition, Primitive, SceneNode, StrokeDefinition},
    geometry::Point,
};

use crate::{
    builders::{DOT_RADIUS, label, palette},
    config::AppConfig,
    error::Result,
    layout::{evenly_spaced_angles, shell_radius},
    resolve::point_on_circle,
};

/// Rotation applied to each successive shell so electrons do not line up.
const SHELL_OFFSET_DEGREES: f32 = 15.0;

/// Parameters of an atom diagram.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Atom {
    pub element_symbol: String,
    /// Electrons per shell, innermost first.
    pub electron_config: Vec<u32>,
    /// Annotate the nucleus with its proton count.
    pub show_nucleus_details: bool,
    pub nucleus_color: Color,
    pub electron_color: Color,
    pub shell_color: Color,
}

impl Default for Atom {
    fn default() -> Self {
        Self {
            element_symbol: "H".to_string(),
            electron_config: vec![1],
            show_nucleus_details: false,
            nucleus_color: palette::red(),
            electron_color: palette::blue(),
            shell_color: palette::gray(),
        }
    }
}

impl Atom {
    /// Total number of electrons, which for a neutral atom is also the
    /// proton count.
    pub fn electron_count(&self) -> u32 {
        self.electron_config.iter().sum()
    }
}

/// Builds an atom diagram.
///
/// The nucleus (with its symbol) is followed by one sub-node per shell,
/// `"shell-{k}"`, holding the orbit circle and its electron dots. An empty
/// configuration yields a bare nucleus.
pub fn build(desc: &Atom, config: &AppConfig) -> Result<SceneNode> {
    let layout = config.layout();
    let nucleus_radius = layout.nucleus_radius();

    debug!(
        element = desc.element_symbol.as_str(),
        shells = desc.electron_config.len(),
        electrons = desc.electron_count();
        "Resolved atom"
    );

    let mut scene = SceneNode::new("atom");
    let mut nucleus = SceneNode::new("nucleus");
    nucleus.push(
        Primitive::circle(Point::default(), nucleus_radius)
            .with_fill(FillDefinition::solid(desc.nucleus_color))
            .with_stroke(StrokeDefinition::solid(desc.nucleus_color, config.style().stroke_width())),
    );
    nucleus.push(label(config, Point::default(), desc.element_symbol.as_str()));
    if desc.show_nucleus_details {
        let below = Point::new(0.0, -nucleus_radius - layout.label_offset());
        nucleus.push(label(config, below, format!("{}p⁺", desc.electron_count())));
    }
    scene.push_node(nucleus);

    let orbit_stroke = StrokeDefinition::solid(desc.shell_color, config.style().stroke_width() / 2.0);
    let electron_fill = FillDefinition::solid(desc.electron_color);

    for (k, &count) in desc.electron_config.iter().enumerate() {
        let radius = shell_radius(k, layout);
        let mut shell = SceneNode::new(format!("shell-{k}"));
        shell.push(Primitive::circle(Point::default(), radius).with_stroke(orbit_stroke.clone()));

        let start = 90.0 + k as f32 * SHELL_OFFSET_DEGREES;
        shell.extend(
            evenly_spaced_angles(count as usize, start)
                .into_iter()
                .map(|angle| {
                    Primitive::dot(point_on_circle(Point::default(), radius, angle), DOT_RADIUS)
                        .with_fill(electron_fill)
                }),
        );
        scene.push_node(shell);
    }

    Ok(scene)
}
