//! Tableau - parametric composition of educational diagrams.
//!
//! A caller describes a diagram with a typed [`DiagramDescriptor`]
//! (geometry constructions, flowcharts, atoms, charts, physics sketches,
//! illustrations, code panels); [`DiagramBuilder`] validates it, resolves
//! coordinates and returns a [`SceneNode`](draw::SceneNode) tree of drawing
//! primitives in paint order. Rendering the tree is the caller's business;
//! [`export::svg`] offers a preview.

pub mod builders;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod export;
pub mod layout;
pub mod resolve;

pub use tableau_core::{color, draw, geometry};

pub use descriptor::DiagramDescriptor;
pub use error::{DiagramError, Result};

use log::{debug, info, trace};
use rand::Rng;

use config::AppConfig;
use draw::SceneNode;

/// Entry point that turns descriptors into scenes.
///
/// # Examples
///
/// ```
/// use tableau::{DiagramBuilder, DiagramDescriptor, builders::atom::Atom};
///
/// let atom = Atom {
///     element_symbol: "C".to_string(),
///     electron_config: vec![2, 4],
///     ..Atom::default()
/// };
/// let scene = DiagramBuilder::default()
///     .build(&DiagramDescriptor::from(atom))
///     .expect("valid atom");
/// assert!(scene.find("shell-1").is_some());
/// ```
#[derive(Debug, Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Builds a diagram, drawing any randomness from the thread-local RNG.
    ///
    /// # Errors
    ///
    /// Returns the [`DiagramError`] reported by the family's validation;
    /// no partial scene is produced.
    pub fn build(&self, descriptor: &DiagramDescriptor) -> Result<SceneNode> {
        self.build_with_rng(descriptor, &mut rand::rng())
    }

    /// Builds a diagram with an injected RNG.
    ///
    /// Seeding the RNG makes randomized illustrations reproducible; every
    /// other family ignores it.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::{SeedableRng, rngs::StdRng};
    /// use tableau::{DiagramBuilder, DiagramDescriptor};
    /// use tableau::builders::illustration::{Illustration, StarField};
    ///
    /// let descriptor = DiagramDescriptor::from(Illustration::StarField(StarField::default()));
    /// let builder = DiagramBuilder::default();
    /// let first = builder.build_with_rng(&descriptor, &mut StdRng::seed_from_u64(9)).unwrap();
    /// let again = builder.build_with_rng(&descriptor, &mut StdRng::seed_from_u64(9)).unwrap();
    /// assert_eq!(first, again);
    /// ```
    ///
    /// # Errors
    ///
    /// Same as [`DiagramBuilder::build`].
    pub fn build_with_rng<R>(&self, descriptor: &DiagramDescriptor, rng: &mut R) -> Result<SceneNode>
    where
        R: Rng + ?Sized,
    {
        info!(family = descriptor.family(), random = descriptor.is_random(); "Building diagram");

        let config = &self.config;
        let result = match descriptor {
            DiagramDescriptor::CircleGeometry(desc) => builders::circle_geometry::build(desc, config),
            DiagramDescriptor::Triangle(desc) => builders::triangle::build(desc, config),
            DiagramDescriptor::Congruence(desc) => builders::congruence::build(desc, config),
            DiagramDescriptor::Flowchart(desc) => builders::flowchart::build(desc, config),
            DiagramDescriptor::Atom(desc) => builders::atom::build(desc, config),
            DiagramDescriptor::BarChart(desc) => builders::bar_chart::build(desc, config),
            DiagramDescriptor::CartesianGraph(desc) => builders::cartesian_graph::build(desc, config),
            DiagramDescriptor::ForceDiagram(desc) => builders::force_diagram::build(desc, config),
            DiagramDescriptor::AxesVector(desc) => builders::axes_vector::build(desc, config),
            DiagramDescriptor::Illustration(desc) => builders::illustration::build(desc, config, rng),
            DiagramDescriptor::CodeBlock(desc) => builders::code_block::build(desc, config),
        };

        match &result {
            Ok(scene) => {
                debug!(
                    family = descriptor.family(),
                    primitives = scene.primitive_count();
                    "Diagram built"
                );
                trace!(scene:?; "Built scene");
            }
            Err(err) => {
                debug!(
                    family = descriptor.family(),
                    kind = err.kind(),
                    error:? = err;
                    "Diagram rejected"
                );
            }
        }

        result
    }
}
