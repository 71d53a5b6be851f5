use std::fmt;
use std::ptr;

use super::tree::BinarySearchTree;
use crate::util::{next, prev};

/// Bidirectional position in a [`BinarySearchTree`].
///
/// Either sits on a node or is past the end. Holding a cursor borrows the
/// tree, so the tree cannot change shape underneath it.
pub struct Cursor<'a, T> {
    tree: &'a BinarySearchTree<T>,
    node: Option<u32>,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(tree: &'a BinarySearchTree<T>, node: Option<u32>) -> Self {
        Self { tree, node }
    }

    /// Element under the cursor; `None` past the end.
    pub fn get(&self) -> Option<&'a T> {
        let tree = self.tree;
        self.node.map(|idx| tree.element(idx))
    }

    pub fn is_end(&self) -> bool {
        self.node.is_none()
    }

    /// Steps to the next larger element. Stepping from the maximum reaches
    /// the end; stepping from the end stays there.
    pub fn move_next(&mut self) {
        if let Some(idx) = self.node {
            self.node = next(self.tree.arena(), idx);
        }
    }

    /// Steps to the next smaller element. Stepping from the minimum reaches
    /// the end; stepping from the end stays there.
    pub fn move_prev(&mut self) {
        if let Some(idx) = self.node {
            self.node = prev(self.tree.arena(), idx);
        }
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

/// Two cursors are equal when they sit on the same node of the same tree,
/// or are both past the end of it.
impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.tree, other.tree) && self.node == other.node
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(x) => f.debug_tuple("Cursor").field(x).finish(),
            None => f.write_str("Cursor(end)"),
        }
    }
}
