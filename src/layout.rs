//! Assigns each key in a [`Tree`] a point on a plane so the tree can be drawn.
//!
//! The root sits at `(0, 0)` and every level is one unit lower than its
//! parent. A child is offset horizontally from its parent by the current
//! spread, which starts at [`LayoutConfig::spread`] and halves at every
//! level. Deep or lopsided trees can still end up with overlapping nodes;
//! the spread is never widened to prevent that.
//!
//! # Examples
//!
//! ```
//! use bst_view::layout::{self, LayoutConfig, Position};
//! use bst_view::tree::Tree;
//!
//! let tree: Tree = [5, 3, 8, 4].into_iter().collect();
//! let positions = layout::positions(&tree, &LayoutConfig::default());
//!
//! assert_eq!(positions[&5], Position::new(0.0, 0.0));
//! assert_eq!(positions[&3], Position::new(-4.0, -1.0));
//! assert_eq!(positions[&4], Position::new(-2.0, -2.0));
//!
//! let edges = layout::edges(&tree, &positions);
//! assert_eq!(edges.len(), 3);
//! ```

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{Error, Result};
use crate::tree::{Key, Node, Tree};

/// The horizontal distance between the root and its children unless
/// configured otherwise.
pub const DEFAULT_SPREAD: f64 = 4.0;

/// Drawing position of every key, ordered by key.
pub type Positions = BTreeMap<Key, Position>;

/// Knobs for [`positions`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Horizontal distance between the root and each of its children.
    pub spread: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            spread: DEFAULT_SPREAD,
        }
    }
}

impl LayoutConfig {
    /// Builds a config with the given root spread, rejecting values that
    /// would collapse or invert the drawing.
    pub fn with_spread(spread: f64) -> Result<Self> {
        if spread.is_finite() && spread > 0.0 {
            Ok(Self { spread })
        } else {
            Err(Error::InvalidSpread(spread))
        }
    }
}

/// A point on the drawing plane. `y` grows upwards so deeper levels are
/// negative.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Position {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Position {
    /// A position at `(x, y)`.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A line to draw from a parent to one of its children.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Edge {
    /// Key of the parent node.
    pub parent: Key,
    /// Key of the child node.
    pub child: Key,
    /// Where the parent was placed.
    pub from: Position,
    /// Where the child was placed.
    pub to: Position,
}

/// Computes the drawing position of every key in `tree`.
pub fn positions(tree: &Tree, config: &LayoutConfig) -> Positions {
    let mut positions = Positions::new();

    // Each entry carries the spread its node uses to place its own children.
    let mut todo: Vec<(&Node, Position, f64)> = tree
        .root()
        .map(|root| (root, Position::new(0.0, 0.0), config.spread))
        .into_iter()
        .collect();
    while let Some((node, at, spread)) = todo.pop() {
        positions.insert(node.value(), at);

        let below = at.y - 1.0;
        if let Some(left) = node.left() {
            todo.push((left, Position::new(at.x - spread, below), spread / 2.0));
        }
        if let Some(right) = node.right() {
            todo.push((right, Position::new(at.x + spread, below), spread / 2.0));
        }
    }
    positions
}

/// Derives the parent-to-child lines for an already computed layout: each
/// positioned key is looked up in the tree and joined to whichever children
/// it has. Keys in `positions` that aren't in `tree` are skipped.
pub fn edges(tree: &Tree, positions: &Positions) -> Vec<Edge> {
    let mut edges = Vec::with_capacity(positions.len().saturating_sub(1));
    for (&key, &from) in positions {
        let Some(node) = tree.find_node(key) else {
            continue;
        };
        for child in [node.left(), node.right()].into_iter().flatten() {
            if let Some(&to) = positions.get(&child.value()) {
                edges.push(Edge {
                    parent: key,
                    child: child.value(),
                    from,
                    to,
                });
            }
        }
    }
    edges
}
