use std::fmt;

use tracing::trace;

use crate::adjacency::{Adjacent, AdjacencyList};
use crate::error::GraphError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GraphKind {
    /// `insert_edge(u, v, w)` adds the single arc `u -> v`.
    Directed,
    /// `insert_edge(u, v, w)` adds both `u -> v` and `v -> u`.
    Undirected,
}

/// Weighted graph on the vertices `1..=size`, stored as one adjacency list
/// per vertex.
#[derive(Clone, Debug)]
pub struct Graph {
    kind: GraphKind,
    size: usize,
    /// Index 0 is unused.
    table: Vec<AdjacencyList>,
    n_edges: usize,
}

impl Graph {
    /// Graph with `size` vertices and no edges.
    pub fn new(kind: GraphKind, size: usize) -> Result<Self, GraphError> {
        if size == 0 {
            return Err(GraphError::ZeroSize);
        }
        Ok(Self {
            kind,
            size,
            table: vec![AdjacencyList::new(); size + 1],
            n_edges: 0,
        })
    }

    pub fn directed(size: usize) -> Result<Self, GraphError> {
        Self::new(GraphKind::Directed, size)
    }

    pub fn undirected(size: usize) -> Result<Self, GraphError> {
        Self::new(GraphKind::Undirected, size)
    }

    /// Graph with `size` vertices and the `(u, v, weight)` edges in order.
    pub fn with_edges(
        kind: GraphKind,
        size: usize,
        edges: &[(usize, usize, i64)],
    ) -> Result<Self, GraphError> {
        let mut g = Self::new(kind, size)?;
        for &(u, v, w) in edges {
            g.insert_edge(u, v, w)?;
        }
        Ok(g)
    }

    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    pub fn is_directed(&self) -> bool {
        self.kind == GraphKind::Directed
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Adjacency entries across all vertices: one per arc, so an undirected
    /// edge between two distinct vertices counts twice.
    pub fn edge_count(&self) -> usize {
        self.n_edges
    }

    pub(crate) fn check(&self, v: usize) -> Result<(), GraphError> {
        if v == 0 || v > self.size {
            return Err(GraphError::VertexOutOfRange {
                vertex: v,
                size: self.size,
            });
        }
        Ok(())
    }

    #[inline]
    pub(crate) fn adjacency(&self, v: usize) -> &AdjacencyList {
        &self.table[v]
    }

    fn insert_arc(&mut self, u: usize, v: usize, w: i64) {
        if self.table[u].insert(v, w) {
            self.n_edges += 1;
        } else {
            trace!(u, v, weight = w, "edge weight updated");
        }
    }

    fn remove_arc(&mut self, u: usize, v: usize) -> bool {
        let removed = self.table[u].remove(v);
        if removed {
            self.n_edges -= 1;
        }
        removed
    }

    /// Inserts edge `(u, v)` with weight `w`, or updates the weight if the
    /// edge exists. An undirected self-loop is a single `u -> u` arc.
    pub fn insert_edge(&mut self, u: usize, v: usize, w: i64) -> Result<(), GraphError> {
        self.check(u)?;
        self.check(v)?;
        self.insert_arc(u, v, w);
        if self.kind == GraphKind::Undirected && u != v {
            self.insert_arc(v, u, w);
        }
        Ok(())
    }

    /// Removes edge `(u, v)`. Returns whether it was present.
    pub fn remove_edge(&mut self, u: usize, v: usize) -> Result<bool, GraphError> {
        self.check(u)?;
        self.check(v)?;
        let removed = self.remove_arc(u, v);
        if self.kind == GraphKind::Undirected && u != v {
            self.remove_arc(v, u);
        }
        Ok(removed)
    }

    /// Weight of edge `(u, v)`, if present.
    pub fn weight(&self, u: usize, v: usize) -> Result<Option<i64>, GraphError> {
        self.check(u)?;
        self.check(v)?;
        Ok(self.table[u].weight(v))
    }

    /// Neighbors of `v` with edge weights, in insertion order.
    pub fn neighbors(&self, v: usize) -> Result<std::slice::Iter<'_, Adjacent>, GraphError> {
        self.check(v)?;
        Ok(self.table[v].iter())
    }
}

const RULE: &str = "------------------------------------------------------------------";

/// Adjacency dump, one vertex per line.
impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{RULE}")?;
        writeln!(f, "vertex  adjacency list")?;
        writeln!(f, "{RULE}")?;
        for v in 1..=self.size {
            writeln!(f, "{v:>4} :{}", self.table[v])?;
        }
        writeln!(f, "{RULE}")
    }
}
