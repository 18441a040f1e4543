//! The tagged union of every diagram family.
//!
//! Descriptors deserialize from any serde format; the `family` key selects
//! the variant and the remaining keys fill that family's parameters:
//!
//! ```
//! use tableau::DiagramDescriptor;
//!
//! let descriptor: DiagramDescriptor = toml::from_str(
//!     r#"
//!     family = "atom"
//!     element_symbol = "Li"
//!     electron_config = [2, 1]
//!     "#,
//! )
//! .unwrap();
//! assert_eq!(descriptor.family(), "atom");
//! ```

use serde::Deserialize;

use crate::builders::{
    atom::Atom, axes_vector::AxesVector, bar_chart::BarChart, cartesian_graph::CartesianGraph,
    circle_geometry::CircleGeometry, code_block::CodeBlock, congruence::TriangleCongruence,
    flowchart::Flowchart, force_diagram::ForceDiagram, illustration::Illustration,
    triangle::LabeledTriangle,
};

/// A request for one diagram.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum DiagramDescriptor {
    CircleGeometry(CircleGeometry),
    Triangle(LabeledTriangle),
    Congruence(TriangleCongruence),
    Flowchart(Flowchart),
    Atom(Atom),
    BarChart(BarChart),
    CartesianGraph(CartesianGraph),
    ForceDiagram(ForceDiagram),
    AxesVector(AxesVector),
    Illustration(Illustration),
    CodeBlock(CodeBlock),
}

impl DiagramDescriptor {
    /// The `family` tag of this descriptor.
    pub fn family(&self) -> &'static str {
        match self {
            Self::CircleGeometry(_) => "circle_geometry",
            Self::Triangle(_) => "triangle",
            Self::Congruence(_) => "congruence",
            Self::Flowchart(_) => "flowchart",
            Self::Atom(_) => "atom",
            Self::BarChart(_) => "bar_chart",
            Self::CartesianGraph(_) => "cartesian_graph",
            Self::ForceDiagram(_) => "force_diagram",
            Self::AxesVector(_) => "axes_vector",
            Self::Illustration(_) => "illustration",
            Self::CodeBlock(_) => "code_block",
        }
    }

    /// Returns `true` if building this descriptor draws from the RNG.
    pub fn is_random(&self) -> bool {
        matches!(self, Self::Illustration(illustration) if illustration.is_random())
    }
}

macro_rules! impl_from_descriptor {
    ($($variant:ident($ty:ty)),+ $(,)?) => {
        $(
            impl From<$ty> for DiagramDescriptor {
                fn from(desc: $ty) -> Self {
                    Self::$variant(desc)
                }
            }
        )+
    };
}

impl_from_descriptor!(
    CircleGeometry(CircleGeometry),
    Triangle(LabeledTriangle),
    Congruence(TriangleCongruence),
    Flowchart(Flowchart),
    Atom(Atom),
    BarChart(BarChart),
    CartesianGraph(CartesianGraph),
    ForceDiagram(ForceDiagram),
    AxesVector(AxesVector),
    Illustration(Illustration),
    CodeBlock(CodeBlock),
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::{cartesian_graph::Curve, illustration::Star};

    #[test]
    fn test_family_tag_selects_variant() {
        let descriptor: DiagramDescriptor = toml::from_str(
            r#"
            family = "bar_chart"
            values = [45, 72, 58]
            labels = ["A", "B", "C"]
            "#,
        )
        .unwrap();
        assert_eq!(descriptor.family(), "bar_chart");
        let DiagramDescriptor::BarChart(chart) = descriptor else {
            panic!("expected a bar chart");
        };
        assert_eq!(chart.values, vec![45.0, 72.0, 58.0]);
    }

    #[test]
    fn test_nested_tags() {
        let descriptor: DiagramDescriptor = toml::from_str(
            r#"
            family = "illustration"
            kind = "star"
            points = 7
            "#,
        )
        .unwrap();
        assert!(matches!(
            descriptor,
            DiagramDescriptor::Illustration(Illustration::Star(Star { points: 7, .. }))
        ));

        let descriptor: DiagramDescriptor = toml::from_str(
            r#"
            family = "cartesian_graph"
            function = { kind = "sine", amplitude = 2.0 }
            "#,
        )
        .unwrap();
        let DiagramDescriptor::CartesianGraph(graph) = descriptor else {
            panic!("expected a cartesian graph");
        };
        assert!(matches!(graph.function, Curve::Sine { .. }));
    }

    #[test]
    fn test_unknown_family() {
        let result: Result<DiagramDescriptor, _> = toml::from_str(r#"family = "venn""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_is_random() {
        assert!(DiagramDescriptor::from(Illustration::StarField(Default::default())).is_random());
        assert!(!DiagramDescriptor::from(Illustration::Star(Star::default())).is_random());
        assert!(!DiagramDescriptor::from(Atom::default()).is_random());
    }
}
