use std::fmt;

/// One entry of an adjacency list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Adjacent {
    pub vertex: usize,
    pub weight: i64,
}

/// Neighbors of one vertex in insertion order (not sorted).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdjacencyList {
    entries: Vec<Adjacent>,
}

impl AdjacencyList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `vertex` with `weight`, or overwrites the weight if `vertex` is
    /// already listed. Returns `true` when a new entry was appended.
    pub fn insert(&mut self, vertex: usize, weight: i64) -> bool {
        match self.entries.iter_mut().find(|a| a.vertex == vertex) {
            Some(existing) => {
                existing.weight = weight;
                false
            }
            None => {
                self.entries.push(Adjacent { vertex, weight });
                true
            }
        }
    }

    /// Drops `vertex`, keeping the order of the remaining entries.
    pub fn remove(&mut self, vertex: usize) -> bool {
        match self.entries.iter().position(|a| a.vertex == vertex) {
            Some(pos) => {
                self.entries.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn weight(&self, vertex: usize) -> Option<i64> {
        self.entries
            .iter()
            .find(|a| a.vertex == vertex)
            .map(|a| a.weight)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Adjacent> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a AdjacencyList {
    type Item = &'a Adjacent;
    type IntoIter = std::slice::Iter<'a, Adjacent>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for AdjacencyList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for a in &self.entries {
            write!(f, " {}({})", a.vertex, a.weight)?;
        }
        Ok(())
    }
}
