use std::cmp::Ordering;
use std::fmt;

/// Weighted edge between `head` and `tail`.
///
/// Ordered by weight first; head and tail only break ties so the order is
/// total and deterministic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    pub head: usize,
    pub tail: usize,
    pub weight: i64,
}

impl Edge {
    pub fn new(head: usize, tail: usize, weight: i64) -> Self {
        Self { head, tail, weight }
    }
}

impl Ord for Edge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then(self.head.cmp(&other.head))
            .then(self.tail.cmp(&other.tail))
    }
}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.head, self.tail, self.weight)
    }
}
