//! Integration tests for the DiagramBuilder API
//!
//! These tests drive every family through the public entry point and check
//! the observable structure of the scenes it returns.

use float_cmp::{approx_eq, assert_approx_eq};
use rand::{SeedableRng, rngs::StdRng};

use tableau::{
    DiagramBuilder, DiagramDescriptor, DiagramError,
    builders::{
        atom::Atom,
        bar_chart::BarChart,
        circle_geometry::{CentralAngle, CircleGeometry, InscribedAngle},
        congruence::TriangleCongruence,
        flowchart::{Connection, Flowchart, Step, StepKind},
        illustration::{Cell, Firework, Illustration, StarField},
        triangle::LabeledTriangle,
    },
    config::{AppConfig, LayoutConfig, StyleConfig},
    draw::{Geometry, PrimitiveKind, SceneNode},
    export::{ExportOptions, svg::render_svg},
    resolve::TriangleVertices,
};

fn build(descriptor: impl Into<DiagramDescriptor>) -> SceneNode {
    let descriptor = descriptor.into();
    DiagramBuilder::default()
        .build(&descriptor)
        .unwrap_or_else(|err| panic!("failed to build {}: {err}", descriptor.family()))
}

fn arc_sweep(node: &SceneNode) -> Option<f32> {
    node.primitives().find_map(|p| match p.geometry() {
        Geometry::Arc { sweep, .. } => Some(*sweep),
        _ => None,
    })
}

#[test]
fn test_builder_api_exists() {
    let _builder = DiagramBuilder::default();
    let _builder = DiagramBuilder::new(AppConfig::new(LayoutConfig::default(), StyleConfig::default()));
}

#[test]
fn test_inscribed_angle_is_half_the_central_angle() {
    let scene = build(CircleGeometry {
        radius: 2.0,
        points_on_circle: vec![0.0, 60.0, 180.0],
        central_angle: Some(CentralAngle {
            a: 0,
            b: 2,
            label: None,
        }),
        inscribed_angle: Some(InscribedAngle {
            a: 0,
            vertex: 1,
            b: 2,
            label: None,
        }),
        ..CircleGeometry::default()
    });

    let central = scene.find("central-angle").expect("central angle node");
    assert_approx_eq!(f32, arc_sweep(central).expect("central arc").abs(), 180.0, epsilon = 1e-3);

    // A 90° inscribed angle gets a right-angle mark instead of an arc.
    let inscribed = scene.find("inscribed-angle").expect("inscribed angle node");
    assert_eq!(inscribed.count_kind(PrimitiveKind::Polyline), 1);

    let builder = DiagramBuilder::new(AppConfig::new(
        LayoutConfig::default().with_right_angle_marks(false),
        StyleConfig::default(),
    ));
    let descriptor = DiagramDescriptor::from(CircleGeometry {
        points_on_circle: vec![0.0, 60.0, 180.0],
        inscribed_angle: Some(InscribedAngle {
            a: 0,
            vertex: 1,
            b: 2,
            label: None,
        }),
        ..CircleGeometry::default()
    });
    let scene = builder.build(&descriptor).unwrap();
    let sweep = arc_sweep(scene.find("inscribed-angle").unwrap()).unwrap();
    assert_approx_eq!(f32, sweep.abs(), 90.0, epsilon = 1e-3);
}

#[test]
fn test_circle_reference_out_of_range() {
    let descriptor = DiagramDescriptor::from(CircleGeometry {
        points_on_circle: vec![0.0, 90.0],
        radii: vec![0, 2],
        ..CircleGeometry::default()
    });
    let result = DiagramBuilder::default().build(&descriptor);
    assert!(matches!(
        result,
        Err(DiagramError::IndexOutOfRange { index: 2, len: 2, .. })
    ));
}

#[test]
fn test_right_triangle_preset_measures_ninety_degrees() {
    let scene = build(LabeledTriangle {
        vertices: TriangleVertices::Preset("right_triangle".to_string()),
        show_angles: true,
        ..LabeledTriangle::default()
    });
    let texts: Vec<_> = scene.primitives().filter_map(|p| p.text()).collect();
    assert!(texts.contains(&"90°"), "angle labels: {texts:?}");

    let total: f32 = texts
        .iter()
        .filter_map(|t| t.strip_suffix('°'))
        .map(|t| t.parse::<f32>().unwrap())
        .sum();
    assert!(approx_eq!(f32, total, 180.0, epsilon = 1.5));
}

#[test]
fn test_unknown_triangle_preset() {
    let descriptor = DiagramDescriptor::from(LabeledTriangle {
        vertices: TriangleVertices::Preset("scalene".to_string()),
        ..LabeledTriangle::default()
    });
    assert_eq!(
        DiagramBuilder::default().build(&descriptor),
        Err(DiagramError::UnknownPreset {
            name: "scalene".to_string()
        })
    );
}

#[test]
fn test_atom_shells_and_electrons() {
    for (config, shells, electrons) in [(vec![2, 4], 2, 6), (vec![2, 8, 1], 3, 11)] {
        let scene = build(Atom {
            electron_config: config,
            ..Atom::default()
        });
        let shell_nodes = scene.nodes().filter(|n| n.name().starts_with("shell-")).count();
        assert_eq!(shell_nodes, shells);
        let dots: usize = scene
            .nodes()
            .filter(|n| n.name().starts_with("shell-"))
            .map(|n| n.count_kind(PrimitiveKind::Dot))
            .sum();
        assert_eq!(dots, electrons);
    }
}

#[test]
fn test_bar_heights_preserve_ratios() {
    let values = [45.0, 72.0, 58.0, 31.0, 89.0];
    let scene = build(BarChart {
        values: values.to_vec(),
        ..BarChart::default()
    });

    let heights: Vec<f32> = (0..values.len())
        .map(|i| {
            let bar = scene.find(&format!("bar-{i}")).expect("bar node");
            bar.primitives()
                .find_map(|p| match p.geometry() {
                    Geometry::Rectangle { height, .. } => Some(*height),
                    _ => None,
                })
                .expect("bar rectangle")
        })
        .collect();

    for i in 0..values.len() {
        for j in 0..values.len() {
            assert!(approx_eq!(
                f32,
                heights[i] / heights[j],
                values[i] / values[j],
                epsilon = 1e-4
            ));
        }
    }
}

#[test]
fn test_flowchart_nodes_and_connectors() {
    let flowchart = Flowchart {
        steps: vec![
            Step::new("Start", StepKind::Start),
            Step::new("Read input", StepKind::Process),
            Step::new("Valid?", StepKind::Decision),
            Step::new("Done", StepKind::End),
        ],
        connections: vec![
            Connection::new(0, 1),
            Connection::new(1, 2),
            Connection::labeled(2, 3, "yes"),
        ],
        ..Flowchart::default()
    };
    let scene = build(flowchart.clone());
    assert_eq!(scene.nodes().filter(|n| n.name().starts_with("step-")).count(), 4);
    assert_eq!(
        scene.find("connectors").unwrap().count_kind(PrimitiveKind::Line),
        3
    );

    let broken = Flowchart {
        connections: vec![Connection::new(0, 7)],
        ..flowchart
    };
    assert!(matches!(
        DiagramBuilder::default().build(&broken.into()),
        Err(DiagramError::IndexOutOfRange { index: 7, len: 4, .. })
    ));
}

#[test]
fn test_sss_congruence_default_ticks() {
    let scene = build(TriangleCongruence::default());
    for triangle in ["triangle-1", "triangle-2"] {
        let node = scene.find(triangle).unwrap();
        let ticks: Vec<usize> = (0..3)
            .map(|i| node.find(&format!("ticks-side-{i}")).unwrap().primitive_count())
            .collect();
        assert_eq!(ticks, vec![1, 2, 3]);
    }
}

#[test]
fn test_deterministic_families_are_idempotent() {
    let builder = DiagramBuilder::default();
    let descriptors: Vec<DiagramDescriptor> = vec![
        CircleGeometry::default().into(),
        LabeledTriangle::default().into(),
        TriangleCongruence::default().into(),
        Atom::default().into(),
        BarChart {
            values: vec![1.0, 2.0],
            ..BarChart::default()
        }
        .into(),
    ];
    for descriptor in &descriptors {
        assert_eq!(builder.build(descriptor), builder.build(descriptor), "{}", descriptor.family());
    }
}

#[test]
fn test_seeded_illustrations_are_reproducible() {
    let builder = DiagramBuilder::default();
    for illustration in [
        Illustration::Cell(Cell::default()),
        Illustration::Firework(Firework::default()),
        Illustration::StarField(StarField::default()),
    ] {
        let descriptor = DiagramDescriptor::from(illustration);
        let first = builder.build_with_rng(&descriptor, &mut StdRng::seed_from_u64(2024));
        let again = builder.build_with_rng(&descriptor, &mut StdRng::seed_from_u64(2024));
        let other = builder.build_with_rng(&descriptor, &mut StdRng::seed_from_u64(2025));
        assert_eq!(first, again);
        assert_ne!(first, other);
    }
}

#[test]
fn test_descriptor_from_toml() {
    let descriptor: DiagramDescriptor = toml::from_str(
        r#"
        family = "flowchart"
        direction = "horizontal"
        steps = [
            { text = "Start", type = "start" },
            { text = "Work", type = "process" },
            { text = "End", type = "end" },
        ]
        connections = [[0, 1], [1, 2, "then"]]
        "#,
    )
    .expect("valid descriptor");
    let scene = DiagramBuilder::default().build(&descriptor).unwrap();
    assert_eq!(scene.name(), "flowchart");
    let texts: Vec<_> = scene.primitives().filter_map(|p| p.text()).collect();
    assert!(texts.contains(&"then"));
}

#[test]
fn test_render_svg_preview() {
    let builder = DiagramBuilder::default();
    let scene = build(TriangleCongruence::default());
    let svg = render_svg(&scene, &ExportOptions::from_config(builder.config()));
    assert!(svg.contains("<svg"), "Output should contain SVG tag");
    assert!(svg.contains("</svg>"), "Output should be complete SVG");
    assert!(svg.contains("<polygon"));
}
