//! Single-source shortest paths.
//!
//! [`Graph::uwsssp`] treats every edge as cost 1 and runs a breadth-first
//! search. [`Graph::pwsssp`] is Dijkstra's algorithm with a linear scan for
//! the next vertex, O(V²) overall; it assumes non-negative weights.

use std::collections::VecDeque;
use std::fmt;

use tracing::{debug, trace};

use crate::error::GraphError;
use crate::graph::Graph;

/// Shortest-path tree rooted at a source vertex.
///
/// Distances are `None` for vertices the source cannot reach. Predecessor
/// `0` marks "none" (the source itself, or unreachable vertices).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShortestPaths {
    source: usize,
    dist: Vec<Option<i64>>,
    path: Vec<usize>,
}

impl ShortestPaths {
    fn new(size: usize, source: usize) -> Self {
        let mut dist = vec![None; size + 1];
        dist[source] = Some(0);
        Self {
            source,
            dist,
            path: vec![0; size + 1],
        }
    }

    pub fn source(&self) -> usize {
        self.source
    }

    fn size(&self) -> usize {
        self.dist.len() - 1
    }

    fn check(&self, v: usize) -> Result<(), GraphError> {
        if v == 0 || v > self.size() {
            return Err(GraphError::VertexOutOfRange {
                vertex: v,
                size: self.size(),
            });
        }
        Ok(())
    }

    /// Distance from the source; `None` when `v` is unreachable or out of range.
    pub fn distance(&self, v: usize) -> Option<i64> {
        self.dist.get(v).copied().flatten()
    }

    /// Previous vertex on the shortest path to `v`.
    pub fn predecessor(&self, v: usize) -> Option<usize> {
        self.path.get(v).copied().filter(|&p| p != 0)
    }

    /// Distances of vertices `1..=size`, in order.
    pub fn distances(&self) -> &[Option<i64>] {
        &self.dist[1..]
    }

    /// Vertices from the source to `t`, both included. `Ok(None)` when `t`
    /// is unreachable.
    pub fn path_to(&self, t: usize) -> Result<Option<Vec<usize>>, GraphError> {
        self.check(t)?;
        if self.dist[t].is_none() {
            return Ok(None);
        }
        let mut out = vec![t];
        let mut v = t;
        while v != self.source {
            v = self.path[v];
            out.push(v);
        }
        out.reverse();
        Ok(Some(out))
    }

    /// `1 -> 2 -> 4 (3)`: the path to `t` followed by its total distance.
    pub fn format_path(&self, t: usize) -> Result<Option<String>, GraphError> {
        let Some(vertices) = self.path_to(t)? else {
            return Ok(None);
        };
        let hops: Vec<String> = vertices.iter().map(|v| v.to_string()).collect();
        Ok(Some(format!(
            "{} ({})",
            hops.join(" -> "),
            self.dist[t].unwrap_or_default()
        )))
    }
}

/// `vertex / dist / path` table; unreachable distances print as `-1`.
impl fmt::Display for ShortestPaths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "----------------------")?;
        writeln!(f, "vertex    dist    path")?;
        writeln!(f, "----------------------")?;
        for v in 1..self.dist.len() {
            writeln!(
                f,
                "{v:>4} :{:>8}{:>8}",
                self.dist[v].unwrap_or(-1),
                self.path[v]
            )?;
        }
        writeln!(f, "----------------------")
    }
}

/// Unfinalized vertex with the smallest finite tentative value, lowest id on
/// ties. Shared by Dijkstra and Prim.
pub(crate) fn closest_unfinalized(tentative: &[Option<i64>], done: &[bool]) -> Option<(usize, i64)> {
    let mut best: Option<(usize, i64)> = None;
    for (i, d) in tentative.iter().enumerate().skip(1) {
        if done[i] {
            continue;
        }
        if let Some(d) = *d {
            if best.map_or(true, |(_, b)| d < b) {
                best = Some((i, d));
            }
        }
    }
    best
}

impl Graph {
    /// Unweighted single-source shortest paths from `s`.
    ///
    /// Vertices leave the queue in FIFO order and each gets its distance
    /// exactly once, the first time it is seen.
    pub fn uwsssp(&self, s: usize) -> Result<ShortestPaths, GraphError> {
        self.check(s)?;
        let mut sp = ShortestPaths::new(self.size(), s);
        let mut queue = VecDeque::with_capacity(self.size());
        queue.push_back(s);

        while let Some(v) = queue.pop_front() {
            let next = sp.dist[v].map(|d| d + 1);
            for adj in self.adjacency(v) {
                if sp.dist[adj.vertex].is_none() {
                    sp.dist[adj.vertex] = next;
                    sp.path[adj.vertex] = v;
                    queue.push_back(adj.vertex);
                }
            }
        }

        debug!(source = s, "unweighted shortest paths computed");
        Ok(sp)
    }

    /// Positive-weighted single-source shortest paths from `s` (Dijkstra).
    pub fn pwsssp(&self, s: usize) -> Result<ShortestPaths, GraphError> {
        self.check(s)?;
        let mut sp = ShortestPaths::new(self.size(), s);
        let mut done = vec![false; self.size() + 1];

        while let Some((v, dv)) = closest_unfinalized(&sp.dist, &done) {
            done[v] = true;
            trace!(vertex = v, dist = dv, "vertex finalized");
            for adj in self.adjacency(v) {
                if done[adj.vertex] {
                    continue;
                }
                let candidate = dv.saturating_add(adj.weight);
                if sp.dist[adj.vertex].map_or(true, |d| candidate < d) {
                    sp.dist[adj.vertex] = Some(candidate);
                    sp.path[adj.vertex] = v;
                }
            }
        }

        debug!(source = s, "weighted shortest paths computed");
        Ok(sp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphKind;

    #[test]
    fn table_marks_unreachable() {
        let g = Graph::with_edges(GraphKind::Directed, 3, &[(1, 2, 4)]).unwrap();
        let sp = g.pwsssp(1).unwrap();
        assert_eq!(
            sp.to_string(),
            "----------------------\n\
             vertex    dist    path\n\
             ----------------------\n   \
             1 :       0       0\n   \
             2 :       4       1\n   \
             3 :      -1       0\n\
             ----------------------\n"
        );
    }
}
