//! Error types for mhfdat parsing and writing.

use thiserror::Error;

/// Errors that can occur when working with mhfdat files.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Common library error.
    #[error("{0}")]
    Common(#[from] rengoku_common::Error),

    /// A signature word did not match its expected constant.
    #[error("invalid mhfdat signature: word at {offset:#x} expected {expected:#010x}, got {actual:#010x}")]
    FormatMismatch {
        offset: usize,
        expected: u32,
        actual: u32,
    },

    /// A table read would run past the end of the buffer.
    #[error("truncated file: {needed} bytes at offset {offset:#x} in a {len}-byte buffer")]
    Truncated {
        offset: usize,
        needed: usize,
        len: usize,
    },

    /// An in-place block exceeds the fixed capacity of its region.
    #[error("block too large for in-place write: {size} bytes into a {capacity}-byte region")]
    BlockTooLarge { size: usize, capacity: usize },

    /// A counters block or pointer required for this save was absent.
    #[error("counters block required for this save was missing or unreadable")]
    MissingCounters,

    /// JSON interchange error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for mhfdat operations.
pub type Result<T> = std::result::Result<T, Error>;
