//! Node trait definitions.
//!
//! Every "pointer" is an `Option<u32>` index into a [`Vec`]-backed arena.
//! The helpers in [`crate::util`] take the arena as a slice and work with
//! indices, so any node layout implementing [`Node`] can reuse them.

/// Binary-tree links (`p`, `l`, `r`).
///
/// `l` and `r` are the owning child links. `p` is a non-owning back link and
/// is `None` exactly for the root.
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}
