//! A minimal LIFO stack. The tree uses it to walk itself without recursing.
//!
//! # Examples
//!
//! ```
//! use ordered_bst::Stack;
//!
//! let mut stack = Stack::new();
//! assert!(stack.is_empty());
//!
//! stack.push(1);
//! stack.push(2);
//! assert_eq!(stack.peek(), Some(&2));
//!
//! assert_eq!(stack.pop(), Some(2));
//! assert_eq!(stack.pop(), Some(1));
//! assert_eq!(stack.pop(), None);
//! ```

/// A last-in, first-out stack backed by a `Vec`.
#[derive(Clone, Debug)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    /// Generates a new, empty `Stack`.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Puts `item` on top of the stack.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes and returns the top item, or `None` if the stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Returns the top item without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Whether there is nothing on the stack.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// How many items are on the stack.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}
