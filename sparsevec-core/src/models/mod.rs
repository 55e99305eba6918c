pub mod sparse_vector;
#[cfg(feature = "sprs")]
pub mod conversions;

// re-export for cleaner imports
pub use self::sparse_vector::{DenseIter, SparseVector};
