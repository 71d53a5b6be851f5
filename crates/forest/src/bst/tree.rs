use std::cmp::Ordering;
use std::fmt;

use tracing::trace;

use super::cursor::Cursor;
use super::iter::Iter;
use super::node::BstNode;
use crate::error::ForestError;
use crate::util::{find, first, get_l, get_p, get_r, last, print_preorder, set_l, set_p, set_r};

/// Unbalanced binary search tree over a totally ordered element type.
///
/// Duplicates are rejected. Nodes keep a parent link, which lets the
/// [`Cursor`] and [`Iter`] step through the elements in sorted order without
/// an explicit stack.
///
/// Nodes live in an arena and are never relocated: inserting or removing one
/// element leaves the slot of every other element where it was. Removed slots
/// are recycled by later inserts.
pub struct BinarySearchTree<T> {
    root: Option<u32>,
    size: usize,
    arena: Vec<BstNode<T>>,
    free: Vec<u32>,
}

impl<T> BinarySearchTree<T> {
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
            arena: Vec::new(),
            free: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of elements. Always equal to the number of nodes reachable
    /// from the root.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Live nodes held by this tree's arena.
    ///
    /// Replaces the process-wide debug counter of node constructions minus
    /// destructions with a per-instance figure.
    pub fn node_count(&self) -> usize {
        self.arena.len() - self.free.len()
    }

    /// Drops every element.
    pub fn make_empty(&mut self) {
        self.root = None;
        self.size = 0;
        self.arena.clear();
        self.free.clear();
    }

    pub(crate) fn arena(&self) -> &[BstNode<T>] {
        &self.arena
    }

    pub(crate) fn root(&self) -> Option<u32> {
        self.root
    }

    #[inline]
    pub(crate) fn element(&self, idx: u32) -> &T {
        self.arena[idx as usize].element()
    }

    /// Cursor at the smallest element, or [`end`](Self::end) when empty.
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::new(self, first(&self.arena, self.root))
    }

    /// The past-the-end cursor.
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::new(self, None)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Smallest element.
    pub fn find_min(&self) -> Result<&T, ForestError> {
        first(&self.arena, self.root)
            .map(|idx| self.element(idx))
            .ok_or(ForestError::Underflow)
    }

    /// Largest element.
    pub fn find_max(&self) -> Result<&T, ForestError> {
        last(&self.arena, self.root)
            .map(|idx| self.element(idx))
            .ok_or(ForestError::Underflow)
    }

    fn alloc(&mut self, element: T, p: Option<u32>) -> u32 {
        match self.free.pop() {
            Some(idx) => {
                self.arena[idx as usize].refill(element, p);
                idx
            }
            None => {
                self.arena.push(BstNode::new(element, p));
                (self.arena.len() - 1) as u32
            }
        }
    }

    fn release(&mut self, idx: u32) -> T {
        let slot = &mut self.arena[idx as usize];
        slot.p = None;
        slot.l = None;
        slot.r = None;
        let element = slot.take_element();
        self.free.push(idx);
        element
    }

    /// Detaches a node with at most one child, splicing that child into its
    /// place.
    fn unlink(&mut self, node: u32) -> T {
        let p = get_p(&self.arena, node);
        let child = get_l(&self.arena, node).or(get_r(&self.arena, node));
        if let Some(c) = child {
            set_p(&mut self.arena, c, p);
        }
        match p {
            Some(p) if get_l(&self.arena, p) == Some(node) => set_l(&mut self.arena, p, child),
            Some(p) => set_r(&mut self.arena, p, child),
            None => self.root = child,
        }
        self.release(node)
    }
}

impl<T: Ord> BinarySearchTree<T> {
    fn find_node(&self, x: &T) -> Option<u32> {
        find(&self.arena, self.root, x, |n| n.element())
    }

    /// Inserts `x`. Returns `false` and leaves the tree untouched when an
    /// equal element is already present.
    pub fn insert(&mut self, x: T) -> bool {
        let mut parent = None;
        let mut went_left = false;
        let mut curr = self.root;
        while let Some(i) = curr {
            match x.cmp(self.element(i)) {
                Ordering::Less => {
                    went_left = true;
                    curr = get_l(&self.arena, i);
                }
                Ordering::Greater => {
                    went_left = false;
                    curr = get_r(&self.arena, i);
                }
                Ordering::Equal => {
                    trace!(size = self.size, "duplicate insert ignored");
                    return false;
                }
            }
            parent = Some(i);
        }

        let node = self.alloc(x, parent);
        match parent {
            None => self.root = Some(node),
            Some(p) if went_left => set_l(&mut self.arena, p, Some(node)),
            Some(p) => set_r(&mut self.arena, p, Some(node)),
        }
        self.size += 1;
        true
    }

    /// Removes `x` and returns it, or `None` if it is absent.
    ///
    /// A node with two children keeps its slot: the minimum of its right
    /// subtree is moved into it and that minimum's node is the one released.
    pub fn remove(&mut self, x: &T) -> Option<T> {
        let node = self.find_node(x)?;
        let removed = match (get_l(&self.arena, node), get_r(&self.arena, node)) {
            (Some(_), Some(r)) => {
                let min = first(&self.arena, Some(r)).unwrap_or(r);
                let successor = self.unlink(min);
                self.arena[node as usize].replace_element(successor)
            }
            _ => self.unlink(node),
        };
        self.size -= 1;
        trace!(size = self.size, "element removed");
        Some(removed)
    }

    /// Cursor at `x`, or [`end`](Self::end) if absent.
    pub fn contains(&self, x: &T) -> Cursor<'_, T> {
        Cursor::new(self, self.find_node(x))
    }

    pub fn has(&self, x: &T) -> bool {
        self.find_node(x).is_some()
    }

    /// Tightest bracketing pair `(a, b)` around `x`.
    ///
    /// `a` is the largest element below `x` and `b` the smallest above it.
    /// When no element exists on a side the bound clamps to the tree
    /// minimum (for `a`) or maximum (for `b`); for a present `x` at either
    /// end that is `x` itself.
    pub fn find_pred_succ(&self, x: &T) -> Result<(&T, &T), ForestError> {
        let root = self.root.ok_or(ForestError::Underflow)?;

        let mut a = None;
        let mut b = None;
        let mut curr = Some(root);
        while let Some(i) = curr {
            match x.cmp(self.element(i)) {
                Ordering::Less => {
                    b = Some(i);
                    curr = get_l(&self.arena, i);
                }
                Ordering::Greater => {
                    a = Some(i);
                    curr = get_r(&self.arena, i);
                }
                Ordering::Equal => {
                    if let Some(l) = get_l(&self.arena, i) {
                        a = last(&self.arena, Some(l));
                    }
                    if let Some(r) = get_r(&self.arena, i) {
                        b = first(&self.arena, Some(r));
                    }
                    break;
                }
            }
        }

        let a = a.or_else(|| first(&self.arena, Some(root))).unwrap_or(root);
        let b = b.or_else(|| last(&self.arena, Some(root))).unwrap_or(root);
        Ok((self.element(a), self.element(b)))
    }

    /// Element stored in the parent of `x`'s node. `None` when `x` is
    /// absent or sits at the root.
    pub fn get_parent(&self, x: &T) -> Option<&T> {
        let node = self.find_node(x)?;
        get_p(&self.arena, node).map(|p| self.element(p))
    }

    /// Updates the element equal to `x` in place.
    ///
    /// `f` must leave the element comparing equal to `x`; anything else would
    /// break the search order. Returns `false` when `x` is absent.
    pub fn modify<F>(&mut self, x: &T, f: F) -> bool
    where
        F: FnOnce(&mut T),
    {
        let Some(node) = self.find_node(x) else {
            return false;
        };
        let element = self.arena[node as usize].element_mut();
        f(&mut *element);
        debug_assert!(
            x.cmp(element) == Ordering::Equal,
            "modify changed the element's ordering"
        );
        true
    }
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Deep copy into a compact arena with parent links rebuilt for the copy.
///
/// Nodes are copied in pre-order from an explicit work stack, so the copy
/// handles degenerate (list-shaped) trees of any depth. The root lands at
/// slot 0.
///
/// `clone_from` keeps the default copy-then-assign behavior, so the target
/// is only replaced once the copy is complete.
impl<T: Clone> Clone for BinarySearchTree<T> {
    fn clone(&self) -> Self {
        let mut arena: Vec<BstNode<T>> = Vec::with_capacity(self.size);
        // (source slot, copied parent slot, is left child)
        let mut stack: Vec<(u32, Option<u32>, bool)> =
            self.root.map(|r| (r, None, false)).into_iter().collect();
        while let Some((idx, parent, is_left)) = stack.pop() {
            let node = &self.arena[idx as usize];
            let at = arena.len() as u32;
            arena.push(BstNode::new(node.element().clone(), parent));
            match parent {
                Some(p) if is_left => arena[p as usize].l = Some(at),
                Some(p) => arena[p as usize].r = Some(at),
                None => {}
            }
            if let Some(r) = node.r {
                stack.push((r, Some(at), false));
            }
            if let Some(l) = node.l {
                stack.push((l, Some(at), true));
            }
        }
        Self {
            root: self.root.map(|_| 0),
            size: self.size,
            arena,
            free: Vec::new(),
        }
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for BinarySearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for x in iter {
            self.insert(x);
        }
    }
}

impl<'a, T> IntoIterator for &'a BinarySearchTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for BinarySearchTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Pre-order dump, indented by depth.
impl<T: fmt::Display> fmt::Display for BinarySearchTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("Empty tree");
        }
        f.write_str(&print_preorder(&self.arena, self.root, |n| {
            n.element().to_string()
        }))
    }
}
