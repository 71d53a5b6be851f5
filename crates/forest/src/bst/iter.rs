use std::iter::FusedIterator;

use super::tree::BinarySearchTree;
use crate::util::{first, last, next, prev};

/// Sorted-order iterator over a [`BinarySearchTree`], steppable from both
/// ends via parent links.
pub struct Iter<'a, T> {
    tree: &'a BinarySearchTree<T>,
    front: Option<u32>,
    back: Option<u32>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(tree: &'a BinarySearchTree<T>) -> Self {
        Self {
            tree,
            front: first(tree.arena(), tree.root()),
            back: last(tree.arena(), tree.root()),
            remaining: tree.len(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let tree = self.tree;
        let idx = self.front?;
        self.front = next(tree.arena(), idx);
        self.remaining -= 1;
        Some(tree.element(idx))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let tree = self.tree;
        let idx = self.back?;
        self.back = prev(tree.arena(), idx);
        self.remaining -= 1;
        Some(tree.element(idx))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}
