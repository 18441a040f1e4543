//! Source code panels with optional line numbers.
//!
//! Text is laid out on a monospace grid; no glyph measurement happens here.

use log::debug;
use serde::Deserialize;

use tableau_core::{
    color::Color,
    draw::{FillDefinition, Primitive, SceneNode},
    geometry::Point,
};

use crate::{
    builders::palette,
    config::AppConfig,
    error::{DiagramError, Result, check_positive},
};

/// Character advance, as a fraction of the font size.
const ADVANCE: f32 = 0.6;
/// Line pitch, as a fraction of the font size.
const PITCH: f32 = 1.4;
const TAB: &str = "    ";

/// Parameters of a code block.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CodeBlock {
    #[serde(alias = "code_str")]
    pub code: String,
    pub language: String,
    /// Font size in points.
    pub font_size: f32,
    pub show_line_numbers: bool,
    pub background_color: Color,
    pub text_color: Color,
}

impl Default for CodeBlock {
    fn default() -> Self {
        Self {
            code: String::new(),
            language: "python".to_string(),
            font_size: 18.0,
            show_line_numbers: true,
            background_color: Color::from_rgb8(0x2b, 0x2b, 0x2b),
            text_color: palette::white(),
        }
    }
}

impl CodeBlock {
    /// Lines of code with tabs expanded.
    pub fn lines(&self) -> Vec<String> {
        self.code.lines().map(|line| line.replace('\t', TAB)).collect()
    }
}

/// Monospace grid metrics in scene units.
#[derive(Debug, Clone, Copy)]
struct Grid {
    advance: f32,
    pitch: f32,
    padding: f32,
}

impl Grid {
    fn new(font_size: f32, config: &AppConfig) -> Self {
        let units = config.style().font_units(font_size);
        Self {
            advance: units * ADVANCE,
            pitch: units * PITCH,
            padding: units,
        }
    }

    /// Scene width of `chars` characters.
    fn width(self, chars: usize) -> f32 {
        chars as f32 * self.advance
    }

    /// Center of a label whose first character starts at `left`.
    fn label_center(self, left: f32, chars: usize, y: f32) -> Point {
        Point::new(left + self.width(chars) / 2.0, y)
    }
}

/// Builds a code panel.
///
/// Emits the `"panel"` background, a `"language"` tag above its top-right
/// corner, a `"line-numbers"` sub-node (when enabled) and a `"code"`
/// sub-node with one label per non-blank line.
///
/// # Errors
///
/// - [`DiagramError::SchemaMismatch`] when `code` has no visible text.
/// - [`DiagramError::InvalidParameter`] for a non-positive font size.
pub fn build(desc: &CodeBlock, config: &AppConfig) -> Result<SceneNode> {
    if desc.code.trim().is_empty() {
        return Err(DiagramError::schema_mismatch("code", "at least 1 line of code", "empty text"));
    }
    check_positive("font_size", desc.font_size)?;

    let grid = Grid::new(desc.font_size, config);
    let lines = desc.lines();
    let digits = lines.len().to_string().len();
    let gutter = if desc.show_line_numbers { grid.width(digits + 2) } else { 0.0 };
    let longest = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);

    let width = gutter + grid.width(longest) + 2.0 * grid.padding;
    let height = lines.len() as f32 * grid.pitch + 2.0 * grid.padding;
    let left = -width / 2.0 + grid.padding;
    let top = height / 2.0 - grid.padding;

    let mut scene = SceneNode::new("code_block");

    let mut panel = SceneNode::new("panel");
    panel.push(
        Primitive::rounded_rectangle(Point::default(), width, height, grid.padding / 2.0)
            .with_fill(FillDefinition::solid(desc.background_color)),
    );
    scene.push_node(panel);

    if !desc.language.is_empty() {
        let tag_size = desc.font_size * 0.7;
        let tag_grid = Grid::new(tag_size, config);
        let chars = desc.language.chars().count();
        let right = width / 2.0 - grid.padding;
        let position = tag_grid.label_center(right - tag_grid.width(chars), chars, height / 2.0 + tag_grid.pitch / 2.0);
        let mut tag = SceneNode::new("language");
        tag.push(
            Primitive::label(position, desc.language.as_str(), tag_size)
                .with_fill(FillDefinition::new(desc.text_color, 0.6)),
        );
        scene.push_node(tag);
    }

    let mut numbers = SceneNode::new("line-numbers");
    let mut code = SceneNode::new("code");
    for (i, line) in lines.iter().enumerate() {
        let y = top - (i as f32 + 0.5) * grid.pitch;

        if desc.show_line_numbers {
            let number = (i + 1).to_string();
            // Right-aligned within the gutter's digit columns.
            let start = left + grid.width(digits - number.len());
            numbers.push(
                Primitive::label(grid.label_center(start, number.len(), y), number, desc.font_size)
                    .with_fill(FillDefinition::new(desc.text_color, 0.4)),
            );
        }

        let text = line.trim_start();
        if text.is_empty() {
            continue;
        }
        let indent = line.chars().count() - text.chars().count();
        let start = left + gutter + grid.width(indent);
        code.push(
            Primitive::label(grid.label_center(start, text.chars().count(), y), text, desc.font_size)
                .with_fill(FillDefinition::solid(desc.text_color)),
        );
    }
    if desc.show_line_numbers {
        scene.push_node(numbers);
    }
    scene.push_node(code);

    debug!(
        lines = lines.len(),
        language = desc.language.as_str(),
        panel_width = width,
        panel_height = height;
        "Laid out code block"
    );

    Ok(scene)
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use tableau_core::draw::Geometry;

    use super::*;

    fn labels(node: &SceneNode) -> Vec<(Point, String)> {
        node.primitives()
            .filter_map(|p| match p.geometry() {
                Geometry::Label { position, text, .. } => Some((*position, text.clone())),
                _ => None,
            })
            .collect()
    }

    fn sample() -> CodeBlock {
        CodeBlock {
            code: "def f(x):\n    return x * 2\n\nprint(f(3))".to_string(),
            ..CodeBlock::default()
        }
    }

    #[test]
    fn test_one_label_per_visible_line() {
        let scene = build(&sample(), &AppConfig::default()).unwrap();
        let code = labels(scene.find("code").unwrap());
        let texts: Vec<_> = code.iter().map(|(_, t)| t.as_str()).collect();
        assert_eq!(texts, vec!["def f(x):", "return x * 2", "print(f(3))"]);

        let numbers = labels(scene.find("line-numbers").unwrap());
        let texts: Vec<_> = numbers.iter().map(|(_, t)| t.as_str()).collect();
        assert_eq!(texts, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_labels_are_left_aligned_with_indent() {
        let config = AppConfig::default();
        let scene = build(&sample(), &config).unwrap();
        let code = labels(scene.find("code").unwrap());
        let advance = config.style().font_units(18.0) * ADVANCE;

        let left_edge = |(position, text): &(Point, String)| position.x() - text.chars().count() as f32 * advance / 2.0;
        assert_approx_eq!(f32, left_edge(&code[0]), left_edge(&code[2]), epsilon = 1e-5);
        assert_approx_eq!(f32, left_edge(&code[1]) - left_edge(&code[0]), 4.0 * advance, epsilon = 1e-5);

        // Lines step down by one pitch; the blank third line still takes a row.
        let pitch = config.style().font_units(18.0) * PITCH;
        assert_approx_eq!(f32, code[0].0.y() - code[1].0.y(), pitch, epsilon = 1e-5);
        assert_approx_eq!(f32, code[1].0.y() - code[2].0.y(), 2.0 * pitch, epsilon = 1e-5);
    }

    #[test]
    fn test_tabs_expand_to_four_spaces() {
        let tabbed = CodeBlock {
            code: "if x:\n\ty()".to_string(),
            ..CodeBlock::default()
        };
        let spaced = CodeBlock {
            code: "if x:\n    y()".to_string(),
            ..CodeBlock::default()
        };
        let config = AppConfig::default();
        assert_eq!(build(&tabbed, &config), build(&spaced, &config));
    }

    #[test]
    fn test_line_numbers_can_be_hidden() {
        let desc = CodeBlock {
            show_line_numbers: false,
            ..sample()
        };
        let scene = build(&desc, &AppConfig::default()).unwrap();
        assert!(scene.find("line-numbers").is_none());
        assert_eq!(scene.find("code").unwrap().len(), 3);
    }

    #[test]
    fn test_empty_code() {
        let desc = CodeBlock {
            code: "  \n\t".to_string(),
            ..CodeBlock::default()
        };
        assert!(matches!(
            build(&desc, &AppConfig::default()),
            Err(DiagramError::SchemaMismatch { .. })
        ));
    }

    #[test]
    fn test_deserialize_alias() {
        let desc: CodeBlock = toml::from_str(
            r#"
            code_str = "x = 1"
            language = "rust"
            "#,
        )
        .unwrap();
        assert_eq!(desc.code, "x = 1");
        assert_approx_eq!(f32, desc.font_size, 18.0);
        assert!(desc.show_line_numbers);
    }
}
