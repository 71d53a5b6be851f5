use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("size must be at least 1")]
    ZeroSize,
    #[error("vertex {vertex} out of range 1..={size}")]
    VertexOutOfRange { vertex: usize, size: usize },
    #[error("{0} is not the root of its set")]
    NotARoot(usize),
    #[error("cannot join set {0} with itself")]
    SameSet(usize),
    #[error("minimum spanning trees need an undirected graph")]
    DirectedGraph,
}
