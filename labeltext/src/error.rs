//! Errors returned by the line splitter.

use std::collections::TryReserveError;

use thiserror::Error;

/// Error type for splitting text into lines.
///
/// A split either produces every line or none of them. Callers should treat
/// an error as "nothing to render".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplitError {
    /// The text has more lines than the configured capacity allows.
    #[error("Text has {found} lines, capacity is {max}")]
    CapacityExceeded {
        /// The configured maximum.
        max: usize,
        /// The number of lines the text would produce.
        found: usize,
    },

    /// A line buffer or the line list could not be allocated.
    #[error("Failed to allocate line buffer: {0}")]
    Allocation(#[from] TryReserveError),

    /// Byte input was not valid UTF-8.
    #[error("Input is not valid UTF-8 after byte {valid_up_to}")]
    InvalidInput {
        /// Length of the valid prefix.
        valid_up_to: usize,
    },
}

impl SplitError {
    /// Creates a new capacity error.
    pub fn capacity_exceeded(max: usize, found: usize) -> Self {
        Self::CapacityExceeded { max, found }
    }
}
