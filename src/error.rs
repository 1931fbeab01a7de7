use thiserror::Error;

/// Errors returned by the fallible [`MinHeap`](crate::MinHeap) accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// The heap holds no entries.
    #[error("heap is empty")]
    Empty,
}
