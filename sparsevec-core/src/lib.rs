//! # sparsevec-core
//!
//! The in-memory model shared by every other sparsevec crate: a fixed-dimension
//! vector that only stores its nonzero `(index, value)` pairs.
//!
//! ## Example
//!
//! ```rust
//! use sparsevec_core::models::SparseVector;
//!
//! let vector = SparseVector::from_dense(&[1.0, 0.0, 2.0]).unwrap();
//! assert_eq!(vector.dim(), 3);
//! assert_eq!(vector.indices(), &[0, 2]);
//! assert_eq!(vector.to_dense(), vec![1.0, 0.0, 2.0]);
//! ```
//!
pub mod errors;
pub mod models;

pub use errors::*;
pub use models::*;
