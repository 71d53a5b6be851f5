use std::fmt;

use crate::error::GraphError;

/// Disjoint sets over the elements `1..=size`.
///
/// `array[x]` holds the parent of `x`, or `-k` when `x` is the root of a set
/// with `k` elements. Index 0 is unused.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisjointSets {
    array: Vec<i64>,
}

impl DisjointSets {
    /// `size` singleton sets.
    pub fn new(size: usize) -> Result<Self, GraphError> {
        if size == 0 {
            return Err(GraphError::ZeroSize);
        }
        let mut array = vec![-1; size + 1];
        array[0] = 0;
        Ok(Self { array })
    }

    pub fn size(&self) -> usize {
        self.array.len() - 1
    }

    fn check(&self, x: usize) -> Result<(), GraphError> {
        if x == 0 || x > self.size() {
            return Err(GraphError::VertexOutOfRange {
                vertex: x,
                size: self.size(),
            });
        }
        Ok(())
    }

    /// Root of the set containing `x`. Every element visited on the way is
    /// relinked directly to the root.
    pub fn find(&mut self, x: usize) -> Result<usize, GraphError> {
        self.check(x)?;
        Ok(self.root_of(x))
    }

    pub(crate) fn root_of(&mut self, x: usize) -> usize {
        if self.array[x] < 0 {
            return x;
        }
        let root = self.root_of(self.array[x] as usize);
        self.array[x] = root as i64;
        root
    }

    /// Merges the sets rooted at `r` and `s`; the smaller one is attached
    /// under the larger one's root. Both must be distinct roots.
    pub fn join(&mut self, r: usize, s: usize) -> Result<(), GraphError> {
        self.check(r)?;
        self.check(s)?;
        if r == s {
            return Err(GraphError::SameSet(r));
        }
        for x in [r, s] {
            if self.array[x] >= 0 {
                return Err(GraphError::NotARoot(x));
            }
        }
        self.union_roots(r, s);
        Ok(())
    }

    pub(crate) fn union_roots(&mut self, r: usize, s: usize) {
        debug_assert!(r != s && self.array[r] < 0 && self.array[s] < 0);
        // sizes are stored negated: the larger set has the smaller value
        if self.array[r] > self.array[s] {
            self.array[s] += self.array[r];
            self.array[r] = s as i64;
        } else {
            self.array[r] += self.array[s];
            self.array[s] = r as i64;
        }
    }

    /// Number of elements in the set containing `x`.
    pub fn set_size(&mut self, x: usize) -> Result<usize, GraphError> {
        let root = self.find(x)?;
        Ok(self.array[root].unsigned_abs() as usize)
    }
}

/// Two rows: element ids, then the parent/size array.
impl fmt::Display for DisjointSets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 1..self.array.len() {
            write!(f, "{i:>4}")?;
        }
        writeln!(f)?;
        for v in &self.array[1..] {
            write!(f, "{v:>4}")?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_by_size_attaches_smaller_tree() {
        let mut d = DisjointSets::new(5).unwrap();
        d.join(1, 2).unwrap();
        d.join(1, 3).unwrap();
        // {1,2,3} rooted at 1, {4} alone: joining 4 with 1 keeps 1 as root
        d.join(4, 1).unwrap();
        assert_eq!(d.find(4), Ok(1));
        assert_eq!(d.set_size(2), Ok(4));
        assert_eq!(d.to_string(), "   1   2   3   4   5\n  -4   1   1   1  -1\n");
    }

    #[test]
    fn find_compresses_paths() {
        let mut d = DisjointSets::new(4).unwrap();
        // build the chain 4 -> 3 -> 2 -> 1 by hand
        d.array = vec![0, -4, 1, 2, 3];
        assert_eq!(d.find(4), Ok(1));
        assert_eq!(d.array, vec![0, -4, 1, 1, 1]);
    }
}
