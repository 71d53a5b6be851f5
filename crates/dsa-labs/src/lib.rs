//! Programs built on the `dsa-*` data structures.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`frequency`] | word counts kept in a [`BinarySearchTree`] |
//! | [`cli`] | logic behind the `word-freq` and `graph-run` binaries |

pub mod cli;
pub mod frequency;

pub use dsa_forest::{BinarySearchTree, Cursor, ForestError, SortedSet};
pub use dsa_graph::{Graph, GraphError, GraphKind, ShortestPaths, SpanningTree};
pub use frequency::{FrequencyPair, FrequencyTable};
