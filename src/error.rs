//! Error types for selection operations.

/// A selection request that the caller should never have made.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("index {index} is out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },
}
