//! This crate exposes an unbalanced Binary Search Tree (BST) of single elements, mostly for
//! educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to insert, search for, and
//! delete stored elements. BSTs are typically defined recursively using the notion of a `Node`.
//! A `Node` stores one element and has up to two child `Node`s. The most important invariants of
//! this BST are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have an element less than or equal
//!    to its own element.
//! 2. For every `Node`, all the `Node`s in its right subtree have an element greater than its own
//!    element.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching takes `O(height)`. This tree does no rebalancing, so inserting elements in sorted
//! order gives a height equal to the number of elements. BSTs naturally support sorted listing by
//! visiting the left subtree, then the subtree root, then the right subtree; see
//! [`OrderedBinaryTree::traverse`].
//!
//! ## Logging
//!
//! Structural changes are reported through the [`log`] facade at `debug` level and descent steps
//! at `trace` level. The crate never installs a logger itself.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod node;
pub mod stack;
pub mod tree;

pub use error::TreeError;
pub use stack::Stack;
pub use tree::OrderedBinaryTree;

#[cfg(test)]
mod test {
    pub(crate) mod quick;
}
