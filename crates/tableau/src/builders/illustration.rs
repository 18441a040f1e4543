//! Catalog of parametric illustrations: small pictures composed back to
//! front from basic shapes.
//!
//! A few kinds scatter detail at random. They draw every sample from the
//! RNG handed to [`build`], so a seeded RNG reproduces the same picture.

use std::f32::consts::PI;

use log::debug;
use rand::Rng;
use serde::Deserialize;

use tableau_core::{
    color::Color,
    draw::{FillDefinition, Primitive, SceneNode, StrokeDefinition},
    geometry::{Bounds, Point, Size},
};

use crate::{
    builders::palette,
    config::AppConfig,
    error::{DiagramError, Result, check_positive},
    layout::{sample_between, scatter_points},
};

/// Fills a primitive with no outline.
fn filled(primitive: Primitive, color: Color, opacity: f32) -> Primitive {
    primitive.with_fill(FillDefinition::new(color, opacity))
}

/// Point at `radius` along `radians` (counter-clockwise from +x).
fn polar(radius: f32, radians: f32) -> Point {
    Point::new(radius * radians.cos(), radius * radians.sin())
}

fn shifted(points: &[Point], offset: Point) -> Vec<Point> {
    points.iter().map(|p| p.add_point(offset)).collect()
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Cell {
    pub ribosomes: usize,
}

impl Default for Cell {
    fn default() -> Self {
        Self { ribosomes: 15 }
    }
}

impl Cell {
    fn build<R: Rng + ?Sized>(&self, node: &mut SceneNode, rng: &mut R) {
        let cytoplasm = Color::from_rgb8(0xff, 0xf1, 0xb6);
        let membrane = Color::from_rgb8(0xe8, 0xc1, 0x1c);
        let nucleus = Point::new(-0.5, 0.0);

        node.push(filled(Primitive::ellipse(Point::default(), 3.8, 2.3), cytoplasm, 0.2));
        node.push(Primitive::ellipse(Point::default(), 4.0, 2.5).with_stroke(StrokeDefinition::solid(membrane, 3.0)));
        node.push(filled(Primitive::circle(nucleus, 0.5), palette::purple(), 0.6));
        node.push(filled(Primitive::circle(nucleus, 0.15), Color::from_rgb8(0x8b, 0x45, 0x13), 0.8));
        node.push(filled(Primitive::ellipse(Point::new(1.0, 0.5), 0.5, 0.25), palette::orange(), 0.7));
        node.push(filled(Primitive::ellipse(Point::new(0.5, -0.6), 0.4, 0.2), palette::orange(), 0.7));

        let region = Bounds::new_from_center(Point::default(), Size::new(3.0, 1.6));
        let mut ribosomes = SceneNode::new("ribosomes");
        ribosomes.extend(
            scatter_points(rng, self.ribosomes, region)
                .into_iter()
                .map(|at| filled(Primitive::dot(at, 0.03), palette::blue(), 1.0)),
        );
        node.push_node(ribosomes);
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Cloud {
    pub width: f32,
    pub color: Color,
}

impl Default for Cloud {
    fn default() -> Self {
        Self {
            width: 2.0,
            color: palette::white(),
        }
    }
}

impl Cloud {
    /// `(x, y, radius)` of each puff, in units of the cloud width.
    const PUFFS: [(f32, f32, f32); 6] = [
        (0.0, 0.0, 0.4),
        (-0.35, 0.05, 0.35),
        (0.35, 0.05, 0.35),
        (-0.2, 0.2, 0.3),
        (0.2, 0.2, 0.3),
        (0.0, 0.15, 0.35),
    ];

    fn build(&self, node: &mut SceneNode) -> Result<()> {
        let w = check_positive("width", self.width)?;
        for (x, y, r) in Self::PUFFS {
            node.push(filled(Primitive::circle(Point::new(x * w, y * w), r * w), self.color, 0.95));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Earth {
    pub radius: f32,
}

impl Default for Earth {
    fn default() -> Self {
        Self { radius: 1.0 }
    }
}

impl Earth {
    fn build(&self, node: &mut SceneNode) -> Result<()> {
        let r = check_positive("radius", self.radius)?;
        node.push(filled(Primitive::circle(Point::default(), r * 1.08), palette::blue(), 0.15));
        node.push(filled(Primitive::circle(Point::default(), r), Color::from_rgb8(0x1e, 0x90, 0xff), 1.0));

        let continents = [
            (Point::new(-0.3 * r, 0.3 * r), 0.6 * r, 0.5 * r),
            (Point::new(0.2 * r, 0.0), 0.4 * r, 0.8 * r),
            (Point::new(0.4 * r, -0.4 * r), 0.3 * r, 0.2 * r),
        ];
        for (center, width, height) in continents {
            node.push(filled(Primitive::ellipse(center, width, height), palette::green(), 0.9));
        }

        // Polar ice: an arc of the planet's radius whose apex touches 0.7r.
        node.push(
            Primitive::arc(Point::new(0.0, -0.3 * r), r, 54.0, 72.0)
                .with_stroke(StrokeDefinition::solid(palette::white().with_alpha(0.9), 4.0)),
        );
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Firework {
    pub radius: f32,
    pub sparks: usize,
    pub colors: Vec<Color>,
}

impl Default for Firework {
    fn default() -> Self {
        Self {
            radius: 2.0,
            sparks: 16,
            colors: vec![
                palette::red(),
                palette::yellow(),
                palette::orange(),
                palette::pink(),
                palette::cyan(),
                palette::green(),
            ],
        }
    }
}

impl Firework {
    fn build<R: Rng + ?Sized>(&self, node: &mut SceneNode, rng: &mut R) -> Result<()> {
        let radius = check_positive("radius", self.radius)?;
        if self.colors.is_empty() {
            return Err(DiagramError::schema_mismatch("firework colors", "at least 1 color", 0));
        }
        node.push(filled(Primitive::circle(Point::default(), radius * 0.15), palette::white(), 1.0));

        for i in 0..self.sparks {
            let color = self.colors[i % self.colors.len()];
            let angle = i as f32 * 2.0 * PI / self.sparks as f32 + sample_between(rng, -0.1, 0.1);
            let length = radius * sample_between(rng, 0.7, 1.0);
            let end = polar(length, angle);

            let mut spark = SceneNode::new(format!("spark-{i}"));
            spark.push(Primitive::line(polar(0.2, angle), end).with_stroke(StrokeDefinition::solid(color, 3.0)));
            spark.push(filled(Primitive::dot(end, 0.06), color, 1.0));

            let sub_stroke = StrokeDefinition::solid(color.with_alpha(0.7), 1.5);
            for _ in 0..2 {
                let sub_angle = angle + sample_between(rng, -0.3, 0.3);
                let sub_length = length * sample_between(rng, 0.3, 0.6);
                let start = end.scale(0.3);
                spark.push(
                    Primitive::line(start, start.add_point(polar(sub_length, sub_angle))).with_stroke(sub_stroke.clone()),
                );
            }
            node.push_node(spark);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Heart {
    pub size: f32,
    pub color: Color,
}

impl Default for Heart {
    fn default() -> Self {
        Self {
            size: 1.0,
            color: palette::red(),
        }
    }
}

impl Heart {
    fn build(&self, node: &mut SceneNode) -> Result<()> {
        let s = check_positive("size", self.size)?;
        let bottom = [Point::new(-0.55 * s, 0.0), Point::new(0.55 * s, 0.0), Point::new(0.0, -0.6 * s)];
        node.push(filled(
            Primitive::polygon(shifted(&bottom, Point::new(0.0, -0.05 * s))),
            self.color,
            1.0,
        ));
        for x in [-0.25 * s, 0.25 * s] {
            node.push(filled(Primitive::circle(Point::new(x, 0.15 * s), 0.35 * s), self.color, 1.0));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Lightning {
    pub height: f32,
    pub color: Color,
}

impl Default for Lightning {
    fn default() -> Self {
        Self {
            height: 3.0,
            color: palette::yellow(),
        }
    }
}

impl Lightning {
    fn build(&self, node: &mut SceneNode) -> Result<()> {
        let h = check_positive("height", self.height)?;
        let bolt: Vec<Point> = [(0.0, 0.5), (0.3, 0.2), (-0.1, 0.25), (0.2, -0.1), (-0.2, -0.05), (0.0, -0.5)]
            .into_iter()
            .map(|(x, y)| Point::new(x, y * h))
            .collect();
        let glow = bolt.iter().map(|p| p.scale(1.15)).collect();

        node.push(filled(Primitive::polygon(glow), self.color, 0.3));
        node.push(filled(Primitive::polygon(bolt), self.color, 1.0).with_stroke(StrokeDefinition::solid(palette::white(), 2.0)));
        Ok(())
    }
}

/// Which face of the moon to draw.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoonPhase {
    #[default]
    Crescent,
    Full,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Moon {
    pub phase: MoonPhase,
    pub radius: f32,
}

impl Default for Moon {
    fn default() -> Self {
        Self {
            phase: MoonPhase::Crescent,
            radius: 1.0,
        }
    }
}

impl Moon {
    /// `(x, y, radius)` of each crater, in units of the moon radius.
    const CRATERS: [(f32, f32, f32); 4] = [(0.3, 0.4, 0.15), (-0.2, -0.3, 0.2), (0.4, -0.2, 0.1), (-0.4, 0.2, 0.12)];

    fn build(&self, node: &mut SceneNode, config: &AppConfig) -> Result<()> {
        let r = check_positive("radius", self.radius)?;
        match self.phase {
            MoonPhase::Full => {
                let body = Color::from_rgb8(0xe8, 0xe8, 0xe8);
                node.push(
                    filled(Primitive::circle(Point::default(), r), body, 1.0)
                        .with_stroke(StrokeDefinition::solid(palette::gray(), 1.0)),
                );
                let rim = StrokeDefinition::solid(Color::from_rgb8(0xaa, 0xaa, 0xaa), 1.0);
                for (x, y, cr) in Self::CRATERS {
                    node.push(
                        filled(Primitive::circle(Point::new(x * r, y * r), cr * r), Color::from_rgb8(0xcc, 0xcc, 0xcc), 0.6)
                            .with_stroke(rim.clone()),
                    );
                }
            }
            MoonPhase::Crescent => {
                let beige = Color::from_rgb8(0xf5, 0xf5, 0xdc);
                node.push(filled(Primitive::circle(Point::default(), r * 1.15), beige, 0.1));
                node.push(filled(Primitive::circle(Point::default(), r), beige, 1.0));
                // The shadow disk is painted in the background color.
                node.push(filled(
                    Primitive::circle(Point::new(0.4 * r, 0.0), 0.85 * r),
                    config.style().background_color(),
                    1.0,
                ));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Star {
    pub radius: f32,
    pub points: usize,
    pub inner_ratio: f32,
    pub color: Color,
}

impl Default for Star {
    fn default() -> Self {
        Self {
            radius: 0.5,
            points: 5,
            inner_ratio: 0.4,
            color: palette::yellow(),
        }
    }
}

impl Star {
    /// Alternating outer and inner vertices, starting at the top.
    pub fn vertices(&self, center: Point) -> Vec<Point> {
        let n = self.points as f32;
        (0..self.points * 2)
            .map(|i| {
                let angle = i as f32 * PI / n + PI / 2.0;
                let radius = if i % 2 == 0 { self.radius } else { self.radius * self.inner_ratio };
                center.add_point(polar(radius, angle))
            })
            .collect()
    }

    fn validate(&self) -> Result<()> {
        if self.points < 2 {
            return Err(DiagramError::schema_mismatch("star points", "at least 2", self.points));
        }
        check_positive("radius", self.radius)?;
        check_positive("inner_ratio", self.inner_ratio)?;
        Ok(())
    }

    fn to_primitive(&self, center: Point) -> Primitive {
        filled(Primitive::polygon(self.vertices(center)), self.color, 1.0)
            .with_stroke(StrokeDefinition::solid(palette::white(), 1.0))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StarField {
    pub stars: usize,
    pub area_width: f32,
    pub area_height: f32,
}

impl Default for StarField {
    fn default() -> Self {
        Self {
            stars: 20,
            area_width: 12.0,
            area_height: 6.0,
        }
    }
}

impl StarField {
    fn build<R: Rng + ?Sized>(&self, node: &mut SceneNode, rng: &mut R) -> Result<()> {
        check_positive("area_width", self.area_width)?;
        check_positive("area_height", self.area_height)?;
        let area = Bounds::new_from_center(Point::default(), Size::new(self.area_width, self.area_height));
        for _ in 0..self.stars {
            let star = Star {
                radius: sample_between(rng, 0.05, 0.2),
                color: palette::white(),
                ..Star::default()
            };
            let center = Point::new(
                sample_between(rng, area.min_x(), area.max_x()),
                sample_between(rng, area.min_y(), area.max_y()),
            );
            node.push(star.to_primitive(center));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Sun {
    pub radius: f32,
    pub rays: usize,
}

impl Default for Sun {
    fn default() -> Self {
        Self { radius: 1.0, rays: 12 }
    }
}

impl Sun {
    fn build(&self, node: &mut SceneNode) -> Result<()> {
        let r = check_positive("radius", self.radius)?;
        let yellow = palette::yellow();

        // Outermost ring first and faintest.
        let mut glow = SceneNode::new("glow");
        for i in (1..=5u8).rev() {
            let ring = Primitive::circle(Point::default(), r + f32::from(i) * 0.15);
            glow.push(filled(ring, yellow, 0.08 * f32::from(6 - i)));
        }
        node.push_node(glow);

        node.push(filled(Primitive::circle(Point::default(), r), yellow, 1.0));
        node.push(filled(Primitive::circle(Point::default(), r * 0.7), palette::orange(), 0.3));

        let mut rays = SceneNode::new("rays");
        for i in 0..self.rays {
            let angle = i as f32 * 2.0 * PI / self.rays as f32;
            let ray = vec![polar(r * 1.1, angle - 0.08), polar(r * 1.1, angle + 0.08), polar(r * 1.5, angle)];
            rays.push(filled(Primitive::polygon(ray), yellow, 1.0));
        }
        node.push_node(rays);
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Tree {
    pub height: f32,
}

impl Default for Tree {
    fn default() -> Self {
        Self { height: 2.5 }
    }
}

impl Tree {
    /// `(base width, height, lift)` of each foliage layer, in units of the
    /// tree height.
    const LAYERS: [(f32, f32, f32); 3] = [(0.8, 0.4, 0.15), (0.65, 0.35, 0.35), (0.5, 0.3, 0.5)];

    fn build(&self, node: &mut SceneNode) -> Result<()> {
        let h = check_positive("height", self.height)?;
        node.push(filled(
            Primitive::rectangle(Point::new(0.0, -0.25 * h), 0.15 * h, 0.35 * h),
            Color::from_rgb8(0x8b, 0x45, 0x13),
            1.0,
        ));

        let shades = [
            Color::from_rgb8(0x22, 0x8b, 0x22),
            Color::from_rgb8(0x32, 0xcd, 0x32),
            Color::from_rgb8(0x2e, 0x8b, 0x57),
        ];
        for ((w, lh, lift), shade) in Self::LAYERS.into_iter().zip(shades) {
            let layer = [Point::new(-h * w / 2.0, 0.0), Point::new(h * w / 2.0, 0.0), Point::new(0.0, h * lh)];
            node.push(filled(Primitive::polygon(shifted(&layer, Point::new(0.0, h * lift))), shade, 0.9));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WaterDrop {
    pub height: f32,
    pub color: Color,
}

impl Default for WaterDrop {
    fn default() -> Self {
        Self {
            height: 1.5,
            color: palette::blue(),
        }
    }
}

impl WaterDrop {
    fn build(&self, node: &mut SceneNode) -> Result<()> {
        let h = check_positive("height", self.height)?;
        node.push(filled(
            Primitive::ellipse(Point::new(0.0, -0.15 * h), 0.6 * h, 0.7 * h),
            self.color,
            0.8,
        ));
        let tip = [Point::new(-0.1 * h, 0.0), Point::new(0.1 * h, 0.0), Point::new(0.0, 0.5 * h)];
        node.push(filled(
            Primitive::polygon(shifted(&tip, Point::new(0.0, 0.1 * h))),
            self.color,
            0.8,
        ));
        node.push(filled(
            Primitive::ellipse(Point::new(-0.1 * h, 0.05 * h), 0.15 * h, 0.25 * h),
            palette::white(),
            0.6,
        ));
        Ok(())
    }
}

/// An illustration and its parameters, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Illustration {
    Cell(Cell),
    Cloud(Cloud),
    Earth(Earth),
    Firework(Firework),
    Heart(Heart),
    Lightning(Lightning),
    Moon(Moon),
    Star(Star),
    StarField(StarField),
    Sun(Sun),
    Tree(Tree),
    WaterDrop(WaterDrop),
}

impl Illustration {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Cell(_) => "cell",
            Self::Cloud(_) => "cloud",
            Self::Earth(_) => "earth",
            Self::Firework(_) => "firework",
            Self::Heart(_) => "heart",
            Self::Lightning(_) => "lightning",
            Self::Moon(_) => "moon",
            Self::Star(_) => "star",
            Self::StarField(_) => "star_field",
            Self::Sun(_) => "sun",
            Self::Tree(_) => "tree",
            Self::WaterDrop(_) => "water_drop",
        }
    }

    /// Returns `true` if building this illustration draws from the RNG.
    pub fn is_random(&self) -> bool {
        matches!(self, Self::Cell(_) | Self::Firework(_) | Self::StarField(_))
    }
}

/// Builds an illustration into a node named after its kind.
///
/// # Errors
///
/// - [`DiagramError::SchemaMismatch`] for a star with fewer than 2 points
///   or a firework without colors.
/// - [`DiagramError::InvalidParameter`] for a non-positive size.
pub fn build<R>(illustration: &Illustration, config: &AppConfig, rng: &mut R) -> Result<SceneNode>
where
    R: Rng + ?Sized,
{
    let mut node = SceneNode::new(illustration.name());
    match illustration {
        Illustration::Cell(cell) => cell.build(&mut node, rng),
        Illustration::Cloud(cloud) => cloud.build(&mut node)?,
        Illustration::Earth(earth) => earth.build(&mut node)?,
        Illustration::Firework(firework) => firework.build(&mut node, rng)?,
        Illustration::Heart(heart) => heart.build(&mut node)?,
        Illustration::Lightning(lightning) => lightning.build(&mut node)?,
        Illustration::Moon(moon) => moon.build(&mut node, config)?,
        Illustration::Star(star) => {
            star.validate()?;
            node.push(star.to_primitive(Point::default()));
        }
        Illustration::StarField(field) => field.build(&mut node, rng)?,
        Illustration::Sun(sun) => sun.build(&mut node)?,
        Illustration::Tree(tree) => tree.build(&mut node)?,
        Illustration::WaterDrop(drop) => drop.build(&mut node)?,
    }

    debug!(
        kind = illustration.name(),
        random = illustration.is_random(),
        primitives = node.primitive_count();
        "Composed illustration"
    );

    Ok(node)
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use rand::{SeedableRng, rngs::StdRng};

    use tableau_core::draw::{Geometry, PrimitiveKind};

    use super::*;

    fn build_seeded(illustration: &Illustration, seed: u64) -> SceneNode {
        let mut rng = StdRng::seed_from_u64(seed);
        build(illustration, &AppConfig::default(), &mut rng).unwrap()
    }

    #[test]
    fn test_star_vertices_start_at_top() {
        let star = Star::default();
        let vertices = star.vertices(Point::default());
        assert_eq!(vertices.len(), 10);
        assert_approx_eq!(f32, vertices[0].x(), 0.0, epsilon = 1e-6);
        assert_approx_eq!(f32, vertices[0].y(), 0.5, epsilon = 1e-6);
        assert_approx_eq!(f32, vertices[1].length(), 0.2, epsilon = 1e-6);
    }

    #[test]
    fn test_star_needs_two_points() {
        let star = Illustration::Star(Star {
            points: 1,
            ..Star::default()
        });
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            build(&star, &AppConfig::default(), &mut rng),
            Err(DiagramError::SchemaMismatch { .. })
        ));
    }

    #[test]
    fn test_fixed_compositions() {
        let cases = [
            (Illustration::Cloud(Cloud::default()), 6),
            (Illustration::Earth(Earth::default()), 6),
            (Illustration::Heart(Heart::default()), 3),
            (Illustration::Lightning(Lightning::default()), 2),
            (Illustration::Sun(Sun::default()), 19),
            (Illustration::Tree(Tree::default()), 4),
            (Illustration::WaterDrop(WaterDrop::default()), 3),
            (Illustration::Moon(Moon::default()), 3),
            (
                Illustration::Moon(Moon {
                    phase: MoonPhase::Full,
                    ..Moon::default()
                }),
                5,
            ),
        ];
        for (illustration, expected) in cases {
            let node = build_seeded(&illustration, 0);
            assert_eq!(node.name(), illustration.name());
            assert_eq!(node.primitive_count(), expected, "{}", illustration.name());
        }
    }

    #[test]
    fn test_sun_glow_is_faintest_outside() {
        let node = build_seeded(&Illustration::Sun(Sun::default()), 0);
        let opacities: Vec<f32> = node
            .find("glow")
            .unwrap()
            .primitives()
            .filter_map(|p| p.fill().map(|f| f.opacity()))
            .collect();
        assert_eq!(opacities.len(), 5);
        assert!(opacities.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_firework_composition() {
        let firework = Illustration::Firework(Firework::default());
        let node = build_seeded(&firework, 7);
        // flash + 16 * (line + tip + 2 sub-sparks)
        assert_eq!(node.primitive_count(), 1 + 16 * 4);
        assert_eq!(node.count_kind(PrimitiveKind::Dot), 16);
    }

    #[test]
    fn test_random_kinds_follow_seed() {
        for illustration in [
            Illustration::Cell(Cell::default()),
            Illustration::Firework(Firework::default()),
            Illustration::StarField(StarField::default()),
        ] {
            assert!(illustration.is_random());
            assert_eq!(build_seeded(&illustration, 42), build_seeded(&illustration, 42));
            assert_ne!(build_seeded(&illustration, 42), build_seeded(&illustration, 43));
        }
    }

    #[test]
    fn test_star_field_stays_in_area() {
        let field = StarField::default();
        let node = build_seeded(&Illustration::StarField(field.clone()), 3);
        assert_eq!(node.primitive_count(), field.stars);
        for primitive in node.primitives() {
            let Geometry::Polygon { vertices } = primitive.geometry() else {
                panic!("expected a polygon");
            };
            let top = vertices[0];
            assert!(top.x().abs() <= field.area_width / 2.0);
            // top vertex sits one radius (< 0.2) above the center
            assert!(top.y().abs() <= field.area_height / 2.0 + 0.2);
        }
    }

    #[test]
    fn test_cell_ribosomes_inside_cytoplasm_box() {
        let node = build_seeded(&Illustration::Cell(Cell::default()), 11);
        let ribosomes = node.find("ribosomes").unwrap();
        assert_eq!(ribosomes.count_kind(PrimitiveKind::Dot), 15);
        for primitive in ribosomes.primitives() {
            let Geometry::Dot { center, .. } = primitive.geometry() else {
                panic!("expected a dot");
            };
            assert!(center.x().abs() <= 1.5 && center.y().abs() <= 0.8);
        }
    }

    #[test]
    fn test_deserialize_kind() {
        let illustration: Illustration = toml::from_str(
            r#"
            kind = "star"
            points = 6
            color = "gold"
            "#,
        )
        .unwrap();
        let Illustration::Star(star) = illustration else {
            panic!("expected a star");
        };
        assert_eq!(star.points, 6);
        assert_approx_eq!(f32, star.radius, 0.5);
    }
}
