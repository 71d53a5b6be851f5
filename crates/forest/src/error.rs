use thiserror::Error;

/// Errors raised by the ordered containers.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ForestError {
    /// The operation needs at least one element but the container is empty.
    #[error("underflow: container is empty")]
    Underflow,
}
