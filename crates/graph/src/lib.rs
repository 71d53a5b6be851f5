//! Weighted graphs over vertices `1..=n` and the classic algorithms on them.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`graph`] | [`Graph`] (directed or undirected), edge insertion/removal |
//! | [`adjacency`] | insertion-ordered per-vertex [`AdjacencyList`] |
//! | [`shortest_path`] | BFS (`uwsssp`) and Dijkstra (`pwsssp`) producing [`ShortestPaths`] |
//! | [`mst`] | Prim and Kruskal producing a [`SpanningTree`] |
//! | [`heap`] | array-backed [`MinHeap`] |
//! | [`dsets`] | [`DisjointSets`] with path compression and union by size |
//!
//! Vertex `0` does not exist; every vertex argument is checked against
//! `1..=size` and rejected with [`GraphError::VertexOutOfRange`].

pub mod adjacency;
pub mod dsets;
pub mod edge;
pub mod error;
pub mod graph;
pub mod heap;
pub mod mst;
pub mod shortest_path;

pub use adjacency::{Adjacent, AdjacencyList};
pub use dsets::DisjointSets;
pub use edge::Edge;
pub use error::GraphError;
pub use graph::{Graph, GraphKind};
pub use heap::MinHeap;
pub use mst::SpanningTree;
pub use shortest_path::ShortestPaths;
