//! Scene trees: named, ordered groups of primitives.

use std::slice;

use crate::{
    draw::{Primitive, PrimitiveKind},
    geometry::{Bounds, Point},
};

/// One entry in a [`SceneNode`].
#[derive(Debug, Clone, PartialEq)]
pub enum SceneChild {
    Primitive(Primitive),
    Node(SceneNode),
}

impl From<Primitive> for SceneChild {
    fn from(primitive: Primitive) -> Self {
        Self::Primitive(primitive)
    }
}

impl From<SceneNode> for SceneChild {
    fn from(node: SceneNode) -> Self {
        Self::Node(node)
    }
}

/// A named group of primitives and nested groups.
///
/// Children are kept in insertion order, which is also paint order: earlier
/// children are drawn beneath later ones. Sub-nodes let callers address one
/// logical part of a diagram (a flowchart step, an electron shell) as a unit.
///
/// # Examples
///
/// ```
/// use tableau_core::draw::{Primitive, PrimitiveKind, SceneNode};
/// use tableau_core::geometry::Point;
///
/// let mut shell = SceneNode::new("shell-0");
/// shell.push(Primitive::circle(Point::default(), 0.9));
/// shell.push(Primitive::dot(Point::new(0.0, 0.9), 0.08));
///
/// let mut atom = SceneNode::new("atom");
/// atom.push(Primitive::circle(Point::default(), 0.35));
/// atom.push_node(shell);
///
/// assert_eq!(atom.primitive_count(), 3);
/// assert_eq!(atom.count_kind(PrimitiveKind::Dot), 1);
/// assert!(atom.find("shell-0").is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SceneNode {
    name: String,
    children: Vec<SceneChild>,
}

impl SceneNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn children(&self) -> &[SceneChild] {
        &self.children
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn push(&mut self, primitive: Primitive) {
        self.children.push(SceneChild::Primitive(primitive));
    }

    pub fn push_node(&mut self, node: SceneNode) {
        self.children.push(SceneChild::Node(node));
    }

    /// Builder-style variant of [`SceneNode::push`].
    pub fn with(mut self, primitive: Primitive) -> Self {
        self.push(primitive);
        self
    }

    /// Iterates over every primitive in the tree, depth-first, in paint order.
    pub fn primitives(&self) -> Primitives<'_> {
        Primitives {
            stack: vec![self.children.iter()],
        }
    }

    /// Total number of primitives in the tree.
    pub fn primitive_count(&self) -> usize {
        self.primitives().count()
    }

    /// Number of primitives anywhere in the tree matching `predicate`.
    pub fn count_where<F>(&self, mut predicate: F) -> usize
    where
        F: FnMut(&Primitive) -> bool,
    {
        self.primitives().filter(|p| predicate(p)).count()
    }

    /// Number of primitives of the given kind anywhere in the tree.
    pub fn count_kind(&self, kind: PrimitiveKind) -> usize {
        self.count_where(|p| p.kind() == kind)
    }

    /// Direct sub-nodes, in order.
    pub fn nodes(&self) -> impl Iterator<Item = &SceneNode> {
        self.children.iter().filter_map(|child| match child {
            SceneChild::Node(node) => Some(node),
            SceneChild::Primitive(_) => None,
        })
    }

    /// Finds the first node with the given name, searching depth-first and
    /// including `self`.
    pub fn find(&self, name: &str) -> Option<&SceneNode> {
        if self.name == name {
            return Some(self);
        }
        self.nodes().find_map(|node| node.find(name))
    }

    /// Union of the bounds of every primitive, or `None` for an empty tree.
    pub fn bounds(&self) -> Option<Bounds> {
        self.primitives()
            .filter_map(Primitive::bounds)
            .reduce(|acc, b| acc.merge(&b))
    }

    /// Shifts every primitive in the tree by `offset`.
    pub fn translate(&mut self, offset: Point) {
        for child in &mut self.children {
            match child {
                SceneChild::Primitive(primitive) => *primitive = primitive.translate(offset),
                SceneChild::Node(node) => node.translate(offset),
            }
        }
    }
}

impl Extend<Primitive> for SceneNode {
    fn extend<T: IntoIterator<Item = Primitive>>(&mut self, iter: T) {
        self.children
            .extend(iter.into_iter().map(SceneChild::Primitive));
    }
}

/// Depth-first iterator over the primitives of a [`SceneNode`].
///
/// Created by [`SceneNode::primitives`].
#[derive(Debug, Clone)]
pub struct Primitives<'a> {
    stack: Vec<slice::Iter<'a, SceneChild>>,
}

impl<'a> Iterator for Primitives<'a> {
    type Item = &'a Primitive;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let top = self.stack.last_mut()?;
            match top.next() {
                Some(SceneChild::Primitive(primitive)) => return Some(primitive),
                Some(SceneChild::Node(node)) => self.stack.push(node.children.iter()),
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn sample_tree() -> SceneNode {
        let mut inner = SceneNode::new("inner");
        inner.push(Primitive::dot(Point::new(5.0, 5.0), 0.1));
        inner.push(Primitive::label(Point::new(5.0, 6.0), "B", 24.0));

        let mut root = SceneNode::new("root");
        root.push(Primitive::circle(Point::default(), 1.0));
        root.push_node(inner);
        root.push(Primitive::label(Point::new(-3.0, 0.0), "A", 24.0));
        root
    }

    #[test]
    fn test_primitives_depth_first_order() {
        let tree = sample_tree();
        let kinds: Vec<_> = tree.primitives().map(Primitive::kind).collect();
        assert_eq!(
            kinds,
            vec![
                PrimitiveKind::Circle,
                PrimitiveKind::Dot,
                PrimitiveKind::Label,
                PrimitiveKind::Label
            ]
        );
        let texts: Vec<_> = tree.primitives().filter_map(Primitive::text).collect();
        assert_eq!(texts, vec!["B", "A"]);
    }

    #[test]
    fn test_counts() {
        let tree = sample_tree();
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.primitive_count(), 4);
        assert_eq!(tree.count_kind(PrimitiveKind::Label), 2);
        assert_eq!(tree.count_kind(PrimitiveKind::Arc), 0);
        assert_eq!(tree.count_where(|p| p.text() == Some("A")), 1);
    }

    #[test]
    fn test_find_nested_node() {
        let tree = sample_tree();
        assert_eq!(tree.find("inner").map(SceneNode::primitive_count), Some(2));
        assert_eq!(tree.find("root").map(SceneNode::name), Some("root"));
        assert!(tree.find("missing").is_none());
    }

    #[test]
    fn test_bounds_cover_all_primitives() {
        let bounds = sample_tree().bounds().unwrap();
        assert_approx_eq!(f32, bounds.min_x(), -3.0);
        assert_approx_eq!(f32, bounds.max_x(), 5.1);
        assert_approx_eq!(f32, bounds.min_y(), -1.0);
        assert_approx_eq!(f32, bounds.max_y(), 6.0);
    }

    #[test]
    fn test_empty_scene() {
        let scene = SceneNode::new("empty");
        assert!(scene.is_empty());
        assert!(scene.bounds().is_none());
        assert_eq!(scene.primitives().next(), None);
    }

    #[test]
    fn test_translate_reaches_nested_nodes() {
        let mut tree = sample_tree();
        tree.translate(Point::new(1.0, 1.0));
        let bounds = tree.bounds().unwrap();
        assert_approx_eq!(f32, bounds.min_x(), -2.0);
        assert_approx_eq!(f32, bounds.max_y(), 7.0);
    }

    #[test]
    fn test_extend_and_with() {
        let mut scene = SceneNode::new("ticks")
            .with(Primitive::line(Point::new(0.0, 0.0), Point::new(0.0, 1.0)));
        scene.extend((1..3).map(|i| {
            let x = i as f32;
            Primitive::line(Point::new(x, 0.0), Point::new(x, 1.0))
        }));
        assert_eq!(scene.count_kind(PrimitiveKind::Line), 3);
    }
}
