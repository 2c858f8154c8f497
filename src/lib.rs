//! This crate is a Binary Search Tree (BST) of integer keys together with a
//! layout that places every node on a plane so the tree can be drawn.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching takes `O(height)`. This tree never rebalances, so inserting keys
//! in sorted order builds a tree whose height equals its size. Visiting the
//! left subtree, then the subtree root, then the right subtree yields the keys
//! in sorted order.
//!
//! ## Modules
//!
//! - [`tree`]: the BST itself.
//! - [`layout`]: node positions and parent/child edges for drawing.
//! - [`input`]: validation of user-typed keys.
//! - [`session`]: the tree a host keeps around plus the commands it accepts.
//! - [`render`]: plain-text output of a session's state.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod input;
pub mod layout;
pub mod render;
pub mod session;
pub mod tree;

pub use error::{Error, Result};
pub use tree::Tree;
