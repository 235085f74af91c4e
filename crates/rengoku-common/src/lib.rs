//! Common utilities for Rengoku.
//!
//! This crate provides foundational pieces used across the Rengoku crates:
//!
//! - [`BinaryReader`] - Bounds-checked little-endian reading from byte slices
//! - [`patch`] - Write-side buffer patching and alignment helpers
//! - [`monsters`] - Monster id ↔ name table for display layers

mod error;
mod reader;

pub mod monsters;
pub mod patch;

pub use error::{Error, Result};
pub use reader::BinaryReader;

/// Re-export zerocopy traits for convenience
pub use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};
