//! Error types for Hunting Road data parsing.

use thiserror::Error;

/// Errors that can occur when working with rengoku_data files.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Common library error.
    #[error("{0}")]
    Common(#[from] rengoku_common::Error),

    /// A table read would run past the end of the buffer.
    #[error("truncated file: {needed} bytes at offset {offset:#x} in a {len}-byte buffer")]
    Truncated {
        offset: usize,
        needed: usize,
        len: usize,
    },
}

/// Result type for Hunting Road operations.
pub type Result<T> = std::result::Result<T, Error>;
