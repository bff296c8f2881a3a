use crate::memory::AllocError;

/// Error returned by skip list operations.
///
/// Every variant leaves the list exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SkipListError {
    /// Insert was called with a key that is already present.
    #[error("duplicate key")]
    DuplicateKey,
    /// Delete or a strict lookup was called with an absent key.
    #[error("key not found")]
    KeyNotFound,
    /// A tower taller than the structural ceiling was requested.
    #[error("tower height {height} exceeds the ceiling of {max}")]
    HeightOverflow {
        /// Requested height.
        height: usize,
        /// Structural ceiling.
        max: usize,
    },
    /// The memory owner could not provide storage for a new node.
    #[error("node allocation failed: {0}")]
    Allocation(#[from] AllocError),
}
