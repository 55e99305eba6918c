use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SparseVectorError {
    #[error("Indices and values must have the same length: {indices} indices, {values} values")]
    LengthMismatch { indices: usize, values: usize },

    #[error("Index out of bounds: index {index} >= dimension {dim}")]
    IndexOutOfBounds { index: u32, dim: u32 },

    #[error("Indices must be strictly increasing: index {index} follows {previous}")]
    UnorderedIndices { previous: u32, index: u32 },

    #[error("Dimension {0} does not fit in 32 bits")]
    DimensionTooLarge(usize),
}

pub type Result<T> = std::result::Result<T, SparseVectorError>;
