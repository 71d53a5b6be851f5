//! Sorted set on a doubly-linked list.
//!
//! Elements are kept in strictly increasing order between two sentinel nodes,
//! so set algebra is a single linear merge over both operands.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

const HEAD: u32 = 0;
const TAIL: u32 = 1;

#[derive(Clone, Debug)]
struct SetNode<T> {
    prev: u32,
    next: u32,
    /// `None` for the two sentinels and for free slots.
    value: Option<T>,
}

impl<T> SetNode<T> {
    fn sentinel() -> Self {
        Self {
            prev: HEAD,
            next: TAIL,
            value: None,
        }
    }
}

/// Ordered set of distinct values.
#[derive(Clone)]
pub struct SortedSet<T> {
    nodes: Vec<SetNode<T>>,
    free: Vec<u32>,
    counter: usize,
}

impl<T> SortedSet<T> {
    pub fn new() -> Self {
        Self {
            nodes: vec![SetNode::sentinel(), SetNode::sentinel()],
            free: Vec::new(),
            counter: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.counter == 0
    }

    pub fn cardinality(&self) -> usize {
        self.counter
    }

    /// Live value nodes, sentinels excluded.
    pub fn node_count(&self) -> usize {
        self.nodes.len() - 2 - self.free.len()
    }

    pub fn make_empty(&mut self) {
        self.nodes.truncate(2);
        self.nodes[HEAD as usize] = SetNode::sentinel();
        self.nodes[TAIL as usize] = SetNode::sentinel();
        self.free.clear();
        self.counter = 0;
    }

    pub fn iter(&self) -> SetIter<'_, T> {
        SetIter {
            set: self,
            front: self.nodes[HEAD as usize].next,
            back: self.nodes[TAIL as usize].prev,
            remaining: self.counter,
        }
    }

    fn value(&self, idx: u32) -> Option<&T> {
        self.nodes[idx as usize].value.as_ref()
    }

    fn next_of(&self, idx: u32) -> u32 {
        self.nodes[idx as usize].next
    }

    /// Links `value` in right before `at`.
    fn insert_before(&mut self, at: u32, value: T) {
        let prev = self.nodes[at as usize].prev;
        let node = SetNode {
            prev,
            next: at,
            value: Some(value),
        };
        let idx = match self.free.pop() {
            Some(idx) => {
                self.nodes[idx as usize] = node;
                idx
            }
            None => {
                self.nodes.push(node);
                (self.nodes.len() - 1) as u32
            }
        };
        self.nodes[prev as usize].next = idx;
        self.nodes[at as usize].prev = idx;
        self.counter += 1;
    }

    fn unlink(&mut self, idx: u32) -> Option<T> {
        let (prev, next) = (self.nodes[idx as usize].prev, self.nodes[idx as usize].next);
        self.nodes[prev as usize].next = next;
        self.nodes[next as usize].prev = prev;
        self.counter -= 1;
        self.free.push(idx);
        self.nodes[idx as usize].value.take()
    }
}

/// In-order iterator over a [`SortedSet`], steppable from both ends.
pub struct SetIter<'a, T> {
    set: &'a SortedSet<T>,
    front: u32,
    back: u32,
    remaining: usize,
}

impl<'a, T> Iterator for SetIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let set = self.set;
        let idx = self.front;
        self.front = set.nodes[idx as usize].next;
        self.remaining -= 1;
        set.value(idx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for SetIter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let set = self.set;
        let idx = self.back;
        self.back = set.nodes[idx as usize].prev;
        self.remaining -= 1;
        set.value(idx)
    }
}

impl<T> ExactSizeIterator for SetIter<'_, T> {}

impl<T: Ord> SortedSet<T> {
    /// Builds a set from values already in strictly increasing order.
    pub fn from_sorted(values: Vec<T>) -> Self {
        debug_assert!(values.windows(2).all(|w| w[0] < w[1]), "values not strictly increasing");
        let mut set = Self::new();
        for value in values {
            set.insert_before(TAIL, value);
        }
        set
    }

    fn first_not_below(&self, x: &T) -> u32 {
        let mut p = self.next_of(HEAD);
        while let Some(v) = self.value(p) {
            if v >= x {
                break;
            }
            p = self.next_of(p);
        }
        p
    }

    pub fn is_member(&self, x: &T) -> bool {
        match (self.value(self.next_of(HEAD)), self.value(self.nodes[TAIL as usize].prev)) {
            (Some(min), Some(max)) if min <= x && x <= max => {
                self.value(self.first_not_below(x)) == Some(x)
            }
            _ => false,
        }
    }

    /// Adds `x`; `false` if it was already a member.
    pub fn insert(&mut self, x: T) -> bool {
        let at = self.first_not_below(&x);
        if self.value(at) == Some(&x) {
            return false;
        }
        self.insert_before(at, x);
        true
    }

    /// Removes `x`; `false` if it was not a member.
    pub fn remove(&mut self, x: &T) -> bool {
        let at = self.first_not_below(x);
        if self.value(at) != Some(x) {
            return false;
        }
        self.unlink(at);
        true
    }

    /// `true` when every member of `self` is a member of `other`.
    pub fn is_subset(&self, other: &Self) -> bool {
        if self.counter > other.counter {
            return false;
        }
        let mut theirs = other.iter().peekable();
        for mine in self.iter() {
            while theirs.next_if(|v| *v < mine).is_some() {}
            if theirs.next_if(|v| *v == mine).is_none() {
                return false;
            }
        }
        true
    }
}

impl<T: Ord + Clone> SortedSet<T> {
    /// In-place union.
    pub fn union_with(&mut self, other: &Self) {
        let mut p = self.next_of(HEAD);
        for v in other.iter() {
            while matches!(self.value(p), Some(mine) if mine < v) {
                p = self.next_of(p);
            }
            if self.value(p) == Some(v) {
                p = self.next_of(p);
            } else {
                self.insert_before(p, v.clone());
            }
        }
    }

    /// In-place intersection.
    pub fn intersect_with(&mut self, other: &Self) {
        let mut theirs = other.iter().peekable();
        let mut p = self.next_of(HEAD);
        while p != TAIL {
            let next = self.next_of(p);
            let keep = match self.value(p) {
                Some(mine) => {
                    while theirs.next_if(|v| *v < mine).is_some() {}
                    theirs.peek() == Some(&mine)
                }
                None => true,
            };
            if !keep {
                self.unlink(p);
            }
            p = next;
        }
    }

    /// In-place difference: drops every member of `other`.
    pub fn difference_with(&mut self, other: &Self) {
        let mut theirs = other.iter().peekable();
        let mut p = self.next_of(HEAD);
        while p != TAIL {
            let next = self.next_of(p);
            let drop = match self.value(p) {
                Some(mine) => {
                    while theirs.next_if(|v| *v < mine).is_some() {}
                    theirs.peek() == Some(&mine)
                }
                None => false,
            };
            if drop {
                self.unlink(p);
            }
            p = next;
        }
    }
}

impl<T> Default for SortedSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<T> for SortedSet<T> {
    fn from(value: T) -> Self {
        let mut set = Self::new();
        set.insert_before(TAIL, value);
        set
    }
}

impl<T: Ord> FromIterator<T> for SortedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        for x in iter {
            set.insert(x);
        }
        set
    }
}

impl<T: PartialEq> PartialEq for SortedSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.counter == other.counter && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SortedSet<T> {}

/// Subset order: `a <= b` iff `a` is a subset of `b`, `a < b` iff it is a
/// strict subset. Sets that are not nested are incomparable.
impl<T: Ord> PartialOrd for SortedSet<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.is_subset(other), other.is_subset(self)) {
            (true, true) => Some(Ordering::Equal),
            (true, false) => Some(Ordering::Less),
            (false, true) => Some(Ordering::Greater),
            (false, false) => None,
        }
    }
}

impl<T: Ord + Clone> AddAssign<&SortedSet<T>> for SortedSet<T> {
    fn add_assign(&mut self, rhs: &SortedSet<T>) {
        self.union_with(rhs);
    }
}

impl<T: Ord + Clone> MulAssign<&SortedSet<T>> for SortedSet<T> {
    fn mul_assign(&mut self, rhs: &SortedSet<T>) {
        self.intersect_with(rhs);
    }
}

impl<T: Ord + Clone> SubAssign<&SortedSet<T>> for SortedSet<T> {
    fn sub_assign(&mut self, rhs: &SortedSet<T>) {
        self.difference_with(rhs);
    }
}

impl<T: Ord + Clone> Add for &SortedSet<T> {
    type Output = SortedSet<T>;

    fn add(self, rhs: Self) -> SortedSet<T> {
        let mut out = self.clone();
        out += rhs;
        out
    }
}

impl<T: Ord + Clone> Mul for &SortedSet<T> {
    type Output = SortedSet<T>;

    fn mul(self, rhs: Self) -> SortedSet<T> {
        let mut out = self.clone();
        out *= rhs;
        out
    }
}

impl<T: Ord + Clone> Sub for &SortedSet<T> {
    type Output = SortedSet<T>;

    fn sub(self, rhs: Self) -> SortedSet<T> {
        let mut out = self.clone();
        out -= rhs;
        out
    }
}

impl<T: fmt::Display> fmt::Display for SortedSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("Set is empty!");
        }
        f.write_str("{ ")?;
        for v in self.iter() {
            write!(f, "{v} ")?;
        }
        f.write_str("}")
    }
}

impl<T: fmt::Debug> fmt::Debug for SortedSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
