//! Minimum spanning trees of undirected graphs.

use std::fmt;

use tracing::debug;

use crate::dsets::DisjointSets;
use crate::edge::Edge;
use crate::error::GraphError;
use crate::graph::Graph;
use crate::heap::MinHeap;
use crate::shortest_path::closest_unfinalized;

/// Edges accepted by an MST algorithm, in acceptance order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpanningTree {
    vertices: usize,
    edges: Vec<Edge>,
    total_weight: i64,
}

impl SpanningTree {
    fn new(vertices: usize) -> Self {
        Self {
            vertices,
            edges: Vec::with_capacity(vertices.saturating_sub(1)),
            total_weight: 0,
        }
    }

    fn accept(&mut self, edge: Edge) {
        debug!(head = edge.head, tail = edge.tail, weight = edge.weight, "edge accepted");
        self.total_weight += edge.weight;
        self.edges.push(edge);
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn total_weight(&self) -> i64 {
        self.total_weight
    }

    /// `true` when the accepted edges reach every vertex. A disconnected
    /// graph yields a tree over the part reachable from where the algorithm
    /// started (Prim) or a forest (Kruskal).
    pub fn is_spanning(&self) -> bool {
        self.edges.len() + 1 == self.vertices
    }
}

impl fmt::Display for SpanningTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for e in &self.edges {
            writeln!(f, "{e}")?;
        }
        writeln!(f, "\nTotal weight: {}", self.total_weight)
    }
}

impl Graph {
    fn require_undirected(&self) -> Result<(), GraphError> {
        if self.is_directed() {
            return Err(GraphError::DirectedGraph);
        }
        Ok(())
    }

    /// Prim's algorithm grown from vertex 1.
    ///
    /// Each round finalizes the closest vertex by connecting edge weight (a
    /// linear scan) and emits `(predecessor, vertex, weight)`. Vertices not
    /// reachable from 1 are never selected.
    pub fn mst_prim(&self) -> Result<SpanningTree, GraphError> {
        self.require_undirected()?;
        let n = self.size();
        let mut tree = SpanningTree::new(n);
        let mut dist: Vec<Option<i64>> = vec![None; n + 1];
        let mut path = vec![0usize; n + 1];
        let mut done = vec![false; n + 1];

        let mut s = 1;
        dist[s] = Some(0);
        done[s] = true;
        loop {
            for adj in self.adjacency(s) {
                if !done[adj.vertex] && dist[adj.vertex].map_or(true, |d| adj.weight < d) {
                    dist[adj.vertex] = Some(adj.weight);
                    path[adj.vertex] = s;
                }
            }
            let Some((v, w)) = closest_unfinalized(&dist, &done) else {
                break;
            };
            done[v] = true;
            tree.accept(Edge::new(path[v], v, w));
            s = v;
        }

        debug!(total_weight = tree.total_weight, edges = tree.edges.len(), "prim finished");
        Ok(tree)
    }

    /// Kruskal's algorithm.
    ///
    /// Every undirected edge enters a min-heap once (as `head < tail`);
    /// edges are drawn by weight and accepted when their endpoints lie in
    /// different sets. Stops at `size - 1` edges or when the heap runs dry.
    pub fn mst_kruskal(&self) -> Result<SpanningTree, GraphError> {
        self.require_undirected()?;
        let n = self.size();
        let mut tree = SpanningTree::new(n);
        let mut heap = MinHeap::with_capacity(self.edge_count() / 2);
        for u in 1..=n {
            for adj in self.adjacency(u) {
                if u < adj.vertex {
                    heap.insert(Edge::new(u, adj.vertex, adj.weight));
                }
            }
        }

        let mut sets = DisjointSets::new(n)?;
        let mut accepted = 0;
        while accepted + 1 < n {
            let Some(e) = heap.delete_min() else {
                break;
            };
            let head_root = sets.root_of(e.head);
            let tail_root = sets.root_of(e.tail);
            if head_root != tail_root {
                tree.accept(e);
                sets.union_roots(head_root, tail_root);
                accepted += 1;
            }
        }

        debug!(total_weight = tree.total_weight, edges = accepted, "kruskal finished");
        Ok(tree)
    }
}
