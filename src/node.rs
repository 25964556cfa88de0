//! Arena storage for tree nodes.
//!
//! Nodes refer to each other by [`NodeId`] instead of by pointer. Child links are the edges of the
//! logical tree and parent links are plain indices, so there is no ownership cycle and no
//! `unsafe`. Released slots go on a free list and are handed out again by the next
//! [`Arena::alloc`].

use std::fmt;

/// Index of a node in an [`Arena`].
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Node<T> {
    pub(crate) element: T,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
    pub(crate) parent: Option<NodeId>,
}

impl<T> Node<T> {
    fn new(element: T) -> Self {
        Self {
            element,
            left: None,
            right: None,
            parent: None,
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Arena<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<NodeId>,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Arena<T> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Stores `element` in a fresh, unlinked node.
    pub(crate) fn alloc(&mut self, element: T) -> NodeId {
        let node = Some(Node::new(element));
        match self.free.pop() {
            Some(id) => {
                self.slots[id.0] = node;
                id
            }
            None => {
                self.slots.push(node);
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// Frees the slot for `id` and hands back its element. The caller must already have unlinked
    /// the node from the tree.
    pub(crate) fn release(&mut self, id: NodeId) -> T {
        let node = self.slots[id.0]
            .take()
            .unwrap_or_else(|| panic!("released node {:?} twice", id));
        self.free.push(id);
        node.element
    }

    pub(crate) fn get(&self, id: NodeId) -> &Node<T> {
        self.slots
            .get(id.0)
            .and_then(Option::as_ref)
            .unwrap_or_else(|| panic!("dangling node id {:?}", id))
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut Node<T> {
        self.slots
            .get_mut(id.0)
            .and_then(Option::as_mut)
            .unwrap_or_else(|| panic!("dangling node id {:?}", id))
    }

    /// Number of live nodes.
    pub(crate) fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}
