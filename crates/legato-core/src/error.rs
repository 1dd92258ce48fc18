//! Error types for legato-core.

use thiserror::Error;

/// Error type for parameter tree construction and lookup.
///
/// Value writes never error: out-of-range values are silently clamped to the
/// parameter's range.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid range for parameter {address}: min={min}, max={max}")]
    InvalidRange { address: u64, min: f32, max: f32 },

    #[error("Duplicate parameter address: {0}")]
    DuplicateAddress(u64),

    #[error("Unknown parameter address: {0}")]
    UnknownAddress(u64),
}

/// Result type alias.
pub type Result<T> = core::result::Result<T, Error>;
