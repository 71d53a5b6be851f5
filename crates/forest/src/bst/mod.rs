//! Unbalanced binary search tree with parent links.

pub mod cursor;
pub mod iter;
pub mod node;
pub mod tree;

pub use cursor::Cursor;
pub use iter::Iter;
pub use node::BstNode;
pub use tree::BinarySearchTree;
