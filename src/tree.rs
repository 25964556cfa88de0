//! An unbalanced, mutable BST of single elements. Nodes live in an arena and link to each other
//! by index, so the tree needs no `unsafe` and no reference counting even though every node
//! knows its parent.
//!
//! Equal elements are allowed. They are routed to the left subtree, so the tree keeps the
//! invariant that a node's left subtree holds elements `<=` it and its right subtree holds
//! elements `>` it.
//!
//! # Examples
//!
//! ```
//! use ordered_bst::{OrderedBinaryTree, TreeError};
//!
//! let mut tree = OrderedBinaryTree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.search(&1));
//!
//! tree.insert(3)?;
//! tree.insert(1)?;
//! tree.insert(2)?;
//! assert!(tree.search(&1));
//! assert_eq!(tree.traverse(), vec![1, 2, 3]);
//!
//! // Deleting something that isn't there does nothing.
//! tree.delete(&42)?;
//! assert_eq!(tree.size(), 3);
//!
//! tree.delete(&3)?;
//! assert_eq!(tree.traverse(), vec![1, 2]);
//!
//! // An absent element is rejected.
//! assert_eq!(
//!     tree.insert(None::<i32>),
//!     Err(TreeError::InvalidArgument { operation: "insert" })
//! );
//! # Ok::<(), TreeError>(())
//! ```

use std::cmp::Ordering;
use std::fmt;

use log::{debug, trace};

use crate::error::TreeError;
use crate::node::{Arena, NodeId};
use crate::stack::Stack;

/// A Binary Search Tree over elements of type `T`. This can be used for inserting, searching
/// and deleting elements and for listing them in ascending order. It never rebalances, so
/// inserting already sorted elements builds a tree as deep as it is large.
#[derive(Clone)]
pub struct OrderedBinaryTree<T> {
    nodes: Arena<T>,
    root: Option<NodeId>,
    size: usize,
}

/// How a matched node was taken out of the tree during deletion.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Removal {
    /// The node had no children and was simply dropped.
    Leaf,
    /// The node had one child which took its place.
    Spliced,
    /// The node had two children. Its in-order successor was unlinked and the successor's
    /// element moved into the node.
    Successor,
    /// Like `Successor` but using the in-order predecessor. Only happens when the successor's
    /// element is repeated in the right subtree, since lifting it would leave an equal element to
    /// the right.
    Predecessor,
}

impl<T> Default for OrderedBinaryTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for OrderedBinaryTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut elements = Vec::with_capacity(self.size);
        self.walk_in_order(|element| elements.push(element));
        f.debug_struct("OrderedBinaryTree")
            .field("size", &self.size)
            .field("elements", &elements)
            .finish()
    }
}

impl<T> OrderedBinaryTree<T> {
    /// Generates a new, empty `OrderedBinaryTree`.
    pub fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            size: 0,
        }
    }

    /// How many elements are in the tree, counting duplicates.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the tree holds no elements.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts `element` into the tree. Elements equal to one already present are kept as well
    /// and placed in its left subtree.
    ///
    /// Passing `None` fails with [`TreeError::InvalidArgument`] and leaves the tree untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::{OrderedBinaryTree, TreeError};
    ///
    /// let mut tree = OrderedBinaryTree::new();
    /// tree.insert(1)?;
    /// tree.insert(Some(1))?;
    /// assert_eq!(tree.size(), 2);
    ///
    /// assert!(tree.insert(None).is_err());
    /// assert_eq!(tree.size(), 2);
    /// # Ok::<(), TreeError>(())
    /// ```
    pub fn insert(&mut self, element: impl Into<Option<T>>) -> Result<(), TreeError>
    where
        T: Ord,
    {
        let element = element
            .into()
            .ok_or(TreeError::InvalidArgument { operation: "insert" })?;
        self.insert_present(element);
        Ok(())
    }

    /// Deletes one element equal to `element` from the tree. If the tree has no such element,
    /// nothing happens. When several equal elements are stored, which of their nodes goes away
    /// is unspecified.
    ///
    /// Passing `None` fails with [`TreeError::InvalidArgument`] and leaves the tree untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::{OrderedBinaryTree, TreeError};
    ///
    /// let mut tree: OrderedBinaryTree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// tree.delete(&2)?;
    /// assert_eq!(tree.traverse(), vec![1, 3]);
    ///
    /// tree.delete(&2)?;
    /// assert_eq!(tree.size(), 2);
    /// # Ok::<(), TreeError>(())
    /// ```
    pub fn delete<'a>(&mut self, element: impl Into<Option<&'a T>>) -> Result<(), TreeError>
    where
        T: Ord + 'a,
    {
        let target = element
            .into()
            .ok_or(TreeError::InvalidArgument { operation: "delete" })?;

        let mut cursor = self.root;
        while let Some(id) = cursor {
            let node = self.nodes.get(id);
            cursor = match target.cmp(&node.element) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => {
                    let removal = self.remove(id);
                    debug!(
                        "delete: removed {:?} ({:?}), size now {}",
                        id, removal, self.size
                    );
                    return Ok(());
                }
            };
        }

        debug!("delete: element not present, size stays {}", self.size);
        Ok(())
    }

    /// Whether the tree contains an element equal to `element`.
    ///
    /// Each node on the way down is first checked for equality. Only if it isn't equal does the
    /// ordering pick a direction, `<=` going left.
    pub fn search(&self, element: &T) -> bool
    where
        T: Ord,
    {
        let mut cursor = self.root;
        while let Some(id) = cursor {
            let node = self.nodes.get(id);
            if *element == node.element {
                return true;
            }
            cursor = if *element <= node.element {
                node.left
            } else {
                node.right
            };
        }
        false
    }

    /// Returns every element in ascending order. The returned `Vec` is a copy; changing the tree
    /// afterwards does not change it.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::OrderedBinaryTree;
    ///
    /// let tree: OrderedBinaryTree<_> = [5, 1, 4, 1, 3].into_iter().collect();
    /// assert_eq!(tree.traverse(), vec![1, 1, 3, 4, 5]);
    /// ```
    pub fn traverse(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut recorded = Vec::with_capacity(self.size);
        self.walk_in_order(|element| recorded.push(element.clone()));
        recorded
    }

    /// The smallest element, if any.
    pub fn min(&self) -> Option<&T> {
        let mut id = self.root?;
        while let Some(left) = self.nodes.get(id).left {
            id = left;
        }
        Some(&self.nodes.get(id).element)
    }

    /// The largest element, if any.
    pub fn max(&self) -> Option<&T> {
        let mut id = self.root?;
        while let Some(right) = self.nodes.get(id).right {
            id = right;
        }
        Some(&self.nodes.get(id).element)
    }

    /// The number of nodes on the longest path from the root down to a leaf. An empty tree has a
    /// height of 0 and a tree of `n` elements inserted in sorted order has a height of `n`.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = Stack::new();
        if let Some(root) = self.root {
            stack.push((root, 1));
        }
        while let Some((id, depth)) = stack.pop() {
            height = height.max(depth);
            let node = self.nodes.get(id);
            for child in [node.left, node.right].into_iter().flatten() {
                stack.push((child, depth + 1));
            }
        }
        height
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.size = 0;
    }

    /// Calls `visit` on each element in ascending order. Walks left spines onto an explicit
    /// stack rather than recursing so degenerate trees can't overflow the call stack.
    fn walk_in_order<'a>(&'a self, mut visit: impl FnMut(&'a T)) {
        let mut stack = Stack::new();
        let mut current = self.root;

        while current.is_some() || !stack.is_empty() {
            while let Some(id) = current {
                stack.push(id);
                current = self.nodes.get(id).left;
            }
            let Some(id) = stack.pop() else {
                break;
            };
            let node = self.nodes.get(id);
            visit(&node.element);
            current = node.right;
        }
    }

    fn insert_present(&mut self, element: T)
    where
        T: Ord,
    {
        let Some(mut current) = self.root else {
            let root = self.nodes.alloc(element);
            self.root = Some(root);
            self.size = 1;
            debug!("insert: {:?} is the new root", root);
            return;
        };

        loop {
            let node = self.nodes.get(current);
            let goes_left = element <= node.element;
            let next = if goes_left { node.left } else { node.right };
            if let Some(child) = next {
                trace!("insert: descending from {:?} to {:?}", current, child);
                current = child;
                continue;
            }

            let child = self.nodes.alloc(element);
            self.nodes.get_mut(child).parent = Some(current);
            let parent = self.nodes.get_mut(current);
            if goes_left {
                parent.left = Some(child);
            } else {
                parent.right = Some(child);
            }
            self.size += 1;
            self.check_links(current);
            debug!(
                "insert: attached {:?} under {:?}, size now {}",
                child, current, self.size
            );
            return;
        }
    }

    /// Takes the node `id` out of the tree, keeping exactly the other elements, and releases one
    /// arena slot. See [`Removal`] for the cases.
    fn remove(&mut self, id: NodeId) -> Removal
    where
        T: Ord,
    {
        self.size -= 1;
        let node = self.nodes.get(id);
        match (node.left, node.right) {
            (None, None) => {
                self.replace_in_parent(id, None);
                self.nodes.release(id);
                Removal::Leaf
            }
            (None, Some(child)) | (Some(child), None) => {
                self.replace_in_parent(id, Some(child));
                self.nodes.release(id);
                Removal::Spliced
            }
            (Some(left), Some(right)) => {
                let successor = self.leftmost(right);
                let (replacement, removal) = if self.has_equal_parent(successor, id) {
                    (self.rightmost(left), Removal::Predecessor)
                } else {
                    (successor, Removal::Successor)
                };
                trace!("delete: {:?} replaces {:?}", replacement, id);

                // The successor has no left child and the predecessor has no right child, so at
                // most one child needs splicing up.
                let replacement_node = self.nodes.get(replacement);
                let orphan = replacement_node.left.or(replacement_node.right);
                self.replace_in_parent(replacement, orphan);
                let element = self.nodes.release(replacement);
                self.nodes.get_mut(id).element = element;
                self.check_links(id);
                removal
            }
        }
    }

    /// Whether `id`'s parent holds an equal element, not counting `stop` (the node being
    /// deleted).
    fn has_equal_parent(&self, id: NodeId, stop: NodeId) -> bool
    where
        T: Ord,
    {
        match self.nodes.get(id).parent {
            Some(parent) if parent != stop => {
                self.nodes.get(parent).element == self.nodes.get(id).element
            }
            _ => false,
        }
    }

    fn leftmost(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.nodes.get(id).left {
            id = left;
        }
        id
    }

    fn rightmost(&self, mut id: NodeId) -> NodeId {
        while let Some(right) = self.nodes.get(id).right {
            id = right;
        }
        id
    }

    /// Points whatever referenced `old` (its parent's child link, or the root) at `new` and
    /// fixes `new`'s parent link. `old` is left dangling for the caller to release.
    fn replace_in_parent(&mut self, old: NodeId, new: Option<NodeId>)
    where
        T: Ord,
    {
        let parent = self.nodes.get(old).parent;
        if let Some(new) = new {
            self.nodes.get_mut(new).parent = parent;
        }

        match parent {
            None => {
                self.root = new;
                debug!("root is now {:?}", new);
            }
            Some(parent) => {
                let parent_node = self.nodes.get_mut(parent);
                if parent_node.left == Some(old) {
                    parent_node.left = new;
                } else {
                    parent_node.right = new;
                }
                self.check_links(parent);
            }
        }
    }

    /// In debug builds, checks that `id`'s children point back at it and sit on the right side
    /// of it. Only looks at `id` and its direct children.
    fn check_links(&self, id: NodeId)
    where
        T: Ord,
    {
        if !cfg!(debug_assertions) {
            return;
        }
        let node = self.nodes.get(id);
        if let Some(left) = node.left {
            let left = self.nodes.get(left);
            assert_eq!(left.parent, Some(id), "left child of {:?} lost its parent", id);
            assert!(left.element <= node.element, "left child of {:?} is too big", id);
        }
        if let Some(right) = node.right {
            let right = self.nodes.get(right);
            assert_eq!(right.parent, Some(id), "right child of {:?} lost its parent", id);
            assert!(right.element > node.element, "right child of {:?} is too small", id);
        }
    }

    /// Walks the whole tree checking the ordering invariant, the parent links, and that `size`
    /// matches both the number of reachable nodes and the number of live arena slots.
    #[cfg(test)]
    fn assert_invariants(&self)
    where
        T: Ord,
    {
        // Each entry carries the bounds its subtree must respect: strictly above `low` and at
        // most `high`.
        let mut stack: Stack<(NodeId, Option<&T>, Option<&T>)> = Stack::new();
        let mut reachable = 0;

        if let Some(root) = self.root {
            assert_eq!(self.nodes.get(root).parent, None, "root has a parent");
            stack.push((root, None, None));
        }
        while let Some((id, low, high)) = stack.pop() {
            reachable += 1;
            let node = self.nodes.get(id);
            if let Some(low) = low {
                assert!(node.element > *low, "{:?} is not above its bound", id);
            }
            if let Some(high) = high {
                assert!(node.element <= *high, "{:?} is above its bound", id);
            }
            if let Some(left) = node.left {
                assert_eq!(self.nodes.get(left).parent, Some(id));
                stack.push((left, low, Some(&node.element)));
            }
            if let Some(right) = node.right {
                assert_eq!(self.nodes.get(right).parent, Some(id));
                stack.push((right, Some(&node.element), high));
            }
        }

        assert_eq!(reachable, self.size);
        assert_eq!(self.nodes.len(), self.size);
    }
}

impl<T> Extend<T> for OrderedBinaryTree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert_present(element);
        }
    }
}

impl<T> FromIterator<T> for OrderedBinaryTree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
