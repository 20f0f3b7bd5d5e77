//! Ring Buffer Error Types

use thiserror::Error;

/// Errors reported by the checked access and window APIs
///
/// The core operations (`push`, `len`, `clear`, `element_at`) never fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RingBufferError {
    /// Logical index past the retained elements
    #[error("Index {index} out of range for buffer holding {len} elements")]
    IndexOutOfRange { index: usize, len: usize },

    /// Requested window extends past the retained elements
    #[error("Window of {count} elements at {start} exceeds buffer holding {len} elements")]
    WindowOutOfRange {
        start: usize,
        count: usize,
        len: usize,
    },

    /// Window length larger than the buffer can ever hold
    #[error("Window length {length} exceeds buffer capacity {capacity}")]
    WindowExceedsCapacity { length: usize, capacity: usize },

    /// Malformed window request
    #[error("Invalid window: {0}")]
    InvalidWindow(&'static str),

    /// Window requires a filled buffer
    #[error("Buffer not filled: {len} of {capacity} elements")]
    NotFilled { len: usize, capacity: usize },
}
