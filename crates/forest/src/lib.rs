//! Arena-backed ordered containers.
//!
//! Nodes live in a caller-invisible `Vec` arena and link to each other through
//! `Option<u32>` indices. Child links (`l` / `r`) own their subtree by
//! convention; the parent link (`p`) is a plain back reference used for
//! navigation only, so there is no ownership cycle to manage.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`types`] | [`Node`] link trait shared by the arena helpers |
//! | [`util`] | `first`, `last`, `next`, `prev`, `find`, `size`, pre-order printer |
//! | [`bst`] | [`BinarySearchTree`], [`Cursor`], [`Iter`] |
//! | [`set`] | [`SortedSet`], a doubly-linked sorted list with sentinels |
//! | [`error`] | [`ForestError`] |

pub mod bst;
pub mod error;
pub mod set;
pub mod types;
pub mod util;

pub use bst::{BinarySearchTree, BstNode, Cursor, Iter};
pub use error::ForestError;
pub use set::{SetIter, SortedSet};
pub use types::Node;
pub use util::{find, first, last, next, prev, size};
