use std::collections::TryReserveError;

use thiserror::Error;

use sparsevec_core::SparseVectorError;

/// Structural problems found while decoding untrusted input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedInput {
    /// Fewer bytes than the fixed header (`HEADER_SIZE`).
    #[error("Truncated sparsevec header: need 12 bytes, found {0}")]
    TruncatedHeader(usize),

    /// The body is not exactly `nnz` indices followed by `nnz` values.
    #[error("Sparsevec body length mismatch: {nnz} entries need {expected} bytes, found {actual}")]
    LengthMismatch {
        nnz: u32,
        expected: usize,
        actual: usize,
    },

    /// Decoded entries violate the vector invariants.
    #[error(transparent)]
    Invalid(#[from] SparseVectorError),

    /// Text representation could not be parsed.
    #[error("Invalid sparsevec text representation: {0}")]
    InvalidText(String),
}

/// Error type for sparsevec-codec operations.
#[derive(Error, Debug)]
pub enum CodecError {
    #[error(transparent)]
    MalformedInput(#[from] MalformedInput),

    /// Could not grow the output buffer.
    #[error("Failed to allocate sparsevec output buffer: {0}")]
    Allocation(#[from] TryReserveError),
}

/// Result type alias for sparsevec-codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;
