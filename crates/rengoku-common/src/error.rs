//! Error types for rengoku-common.

use thiserror::Error;

/// Common error type for Rengoku operations.
#[derive(Debug, Error)]
pub enum Error {
    /// End of buffer reached while reading.
    #[error("unexpected end of buffer: needed {needed} bytes but only {available} available")]
    UnexpectedEof { needed: usize, available: usize },

    /// A patch target lies outside the buffer.
    #[error("patch out of bounds: {needed} bytes at offset {offset:#x} in a {len}-byte buffer")]
    PatchOutOfBounds {
        offset: usize,
        needed: usize,
        len: usize,
    },

    /// A name failed to resolve to a known identifier.
    #[error("unknown identifier: {0:?}")]
    UnknownIdentifier(String),
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
