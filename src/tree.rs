//! An unbalanced Binary Search Tree of unique integer keys. Nodes are owned
//! exclusively by their parent (`Option<Box<Node>>`) so every structural
//! change is a move of a child pointer, never a copy of a subtree.
//!
//! # Examples
//!
//! ```
//! use bst_view::tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.search(5));
//!
//! for key in [5, 3, 8, 1, 4] {
//!     tree.insert(key);
//! }
//! assert_eq!(tree.inorder_traversal(), vec![1, 3, 4, 5, 8]);
//!
//! // Inserting a key that's already present does nothing.
//! assert!(!tree.insert(3));
//! assert_eq!(tree.len(), 5);
//!
//! // 5 has two children so it's replaced by its in-order successor, 8.
//! assert!(tree.delete(5));
//! assert_eq!(tree.inorder_traversal(), vec![1, 3, 4, 8]);
//! assert_eq!(tree.root().map(|n| n.value()), Some(8));
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::layout::{self, LayoutConfig, Positions};

/// The key type stored in a [`Tree`].
pub type Key = i64;

type Link = Option<Box<Node>>;

/// A Binary Search Tree without any rebalancing. Keys are unique: inserting
/// a key that is already present is a no-op.
///
/// Nothing here recurses over the tree, so a degenerate (list shaped) tree
/// is limited by memory and time, not by the stack.
#[derive(Default)]
pub struct Tree {
    root: Link,
    len: usize,
}

impl Drop for Tree {
    /// Tears the tree down one node at a time so a degenerate (list shaped)
    /// tree doesn't blow the stack through recursive `Box` drops.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl Clone for Tree {
    /// Copies the tree in post-order so both children of a node are built
    /// before the node itself claims them.
    fn clone(&self) -> Self {
        enum Visit<'a> {
            Enter(&'a Node),
            Exit(&'a Node),
        }

        let mut built: Vec<Box<Node>> = Vec::new();
        let mut todo: Vec<Visit<'_>> = self.root().map(Visit::Enter).into_iter().collect();
        while let Some(visit) = todo.pop() {
            match visit {
                Visit::Enter(node) => {
                    todo.push(Visit::Exit(node));
                    todo.extend(node.right().map(Visit::Enter));
                    todo.extend(node.left().map(Visit::Enter));
                }
                Visit::Exit(node) => {
                    // The right subtree finished last so it's on top.
                    let right = if node.right.is_some() { built.pop() } else { None };
                    let left = if node.left.is_some() { built.pop() } else { None };
                    built.push(Box::new(Node {
                        value: node.value,
                        left,
                        right,
                    }));
                }
            }
        }

        Self {
            root: built.pop(),
            len: self.len,
        }
    }
}

impl fmt::Debug for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("root", &self.root().map(Node::value))
            .field("keys", &self.inorder_traversal())
            .finish()
    }
}

impl Tree {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The number of keys stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root node, if any.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// Inserts `key` unless it's already present. Returns `true` if a node
    /// was added.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_view::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: Key) -> bool {
        if self.search(key) {
            return false;
        }

        *self.slot_mut(key) = Some(Box::new(Node::new(key)));
        self.len += 1;

        true
    }

    /// Returns `true` if `key` is stored in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_view::tree::Tree;
    ///
    /// let tree: Tree = [2, 1, 3].into_iter().collect();
    ///
    /// assert!(tree.search(3));
    /// assert!(!tree.search(42));
    /// ```
    pub fn search(&self, key: Key) -> bool {
        self.find_node(key).is_some()
    }

    /// Finds the node holding `key`. Used by the layout to look at a node's
    /// children.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_view::tree::Tree;
    ///
    /// let tree: Tree = [2, 1, 3].into_iter().collect();
    /// let node = tree.find_node(2).unwrap();
    ///
    /// assert_eq!(node.left().map(|n| n.value()), Some(1));
    /// assert_eq!(node.right().map(|n| n.value()), Some(3));
    /// assert!(tree.find_node(42).is_none());
    /// ```
    pub fn find_node(&self, key: Key) -> Option<&Node> {
        let mut node = self.root();
        while let Some(n) = node {
            node = match key.cmp(&n.value) {
                Ordering::Equal => return Some(n),
                Ordering::Less => n.left(),
                Ordering::Greater => n.right(),
            };
        }
        None
    }

    /// Removes `key` from the tree. Returns `true` if it was present.
    ///
    /// A node with two children takes the value of its in-order successor
    /// (the smallest key in its right subtree) and the successor's node is
    /// removed instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_view::tree::Tree;
    ///
    /// let mut tree: Tree = [2, 1, 3].into_iter().collect();
    ///
    /// assert!(tree.delete(2));
    /// assert!(!tree.delete(2));
    /// assert_eq!(tree.inorder_traversal(), vec![1, 3]);
    /// ```
    pub fn delete(&mut self, key: Key) -> bool {
        let slot = self.slot_mut(key);
        let Some(mut node) = slot.take() else {
            return false;
        };

        // Whatever replaces the deleted node is relinked into its parent's slot.
        *slot = match (node.left.take(), node.right.take()) {
            (None, child) | (child, None) => child,
            (left @ Some(_), mut right @ Some(_)) => {
                if let Some(successor) = Node::take_min(&mut right) {
                    node.value = successor;
                }
                node.left = left;
                node.right = right;
                Some(node)
            }
        };
        self.len -= 1;

        true
    }

    /// The link holding `key`, or the empty link where `key` would be
    /// attached if it isn't present.
    fn slot_mut(&mut self, key: Key) -> &mut Link {
        let mut slot = &mut self.root;
        loop {
            let ordering = match slot.as_deref() {
                Some(node) => key.cmp(&node.value),
                None => return slot,
            };
            if ordering == Ordering::Equal {
                return slot;
            }
            let node = slot.as_mut().expect("slot checked non-empty above");
            slot = if ordering == Ordering::Less {
                &mut node.left
            } else {
                &mut node.right
            };
        }
    }

    /// All keys in ascending order.
    pub fn inorder_traversal(&self) -> Vec<Key> {
        self.iter().collect()
    }

    /// Borrowing iterator over the keys in ascending order.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.root())
    }

    /// The smallest key, if any.
    pub fn min(&self) -> Option<Key> {
        self.root().map(Node::min_value)
    }

    /// The largest key, if any.
    pub fn max(&self) -> Option<Key> {
        let mut node = self.root()?;
        while let Some(right) = node.right() {
            node = right;
        }
        Some(node.value)
    }

    /// The number of levels in the tree. An empty tree has height 0 and a
    /// lone root has height 1.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level: Vec<&Node> = self.root().into_iter().collect();
        while !level.is_empty() {
            height += 1;
            level = level
                .iter()
                .flat_map(|n| n.left().into_iter().chain(n.right()))
                .collect();
        }
        height
    }

    /// Assigns every key a drawing position using the default
    /// [`LayoutConfig`]. See [`layout::positions`].
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_view::layout::Position;
    /// use bst_view::tree::Tree;
    ///
    /// let tree: Tree = [5, 3, 8].into_iter().collect();
    /// let positions = tree.get_positions();
    ///
    /// assert_eq!(positions[&5], Position::new(0.0, 0.0));
    /// assert_eq!(positions[&3], Position::new(-4.0, -1.0));
    /// assert_eq!(positions[&8], Position::new(4.0, -1.0));
    /// ```
    pub fn get_positions(&self) -> Positions {
        layout::positions(self, &LayoutConfig::default())
    }
}

impl FromIterator<Key> for Tree {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl Extend<Key> for Tree {
    fn extend<I: IntoIterator<Item = Key>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a> IntoIterator for &'a Tree {
    type Item = Key;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One stored key and its (possibly absent) children.
pub struct Node {
    value: Key,
    left: Link,
    right: Link,
}

impl Node {
    fn new(value: Key) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// The key stored in this node.
    pub fn value(&self) -> Key {
        self.value
    }

    /// The root of the left subtree, whose keys are all smaller.
    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    /// The root of the right subtree, whose keys are all larger.
    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    fn min_value(&self) -> Key {
        let mut node = self;
        while let Some(left) = node.left() {
            node = left;
        }
        node.value
    }

    /// Unlinks the smallest node of the subtree in `slot`, moving its right
    /// child up into its place, and returns its key.
    fn take_min(mut slot: &mut Link) -> Option<Key> {
        while slot.as_ref()?.left.is_some() {
            slot = &mut slot.as_mut()?.left;
        }
        let mut min = slot.take()?;
        *slot = min.right.take();
        Some(min.value)
    }
}

/// Shows the node's key and its children's keys without descending further.
impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &self.left().map(Node::value))
            .field("right", &self.right().map(Node::value))
            .finish()
    }
}

/// Iterates the keys of a [`Tree`] in ascending order. Keeps an explicit
/// stack of the left spine still to visit instead of recursing.
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iter<'a> {
    fn new(root: Option<&'a Node>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = Key;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node.value)
    }
}
