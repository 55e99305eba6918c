//! # Wire codecs for the pgvector `sparsevec` type.
//!
//! This crate converts a [`SparseVector`](sparsevec_core::models::SparseVector) to and from
//! the two representations a Postgres server exchanges with its clients:
//!
//! - **binary** ([`binary`]): a fixed big-endian layout, strictly validated on decode
//! - **text** ([`text`]): the human-readable `{idx:val,...}/dim` literal
//!
//! Deciding *which* codec applies to a value is not done here; see `sparsevec-dispatch`.
//!
//! ## Example
//!
//! ```rust
//! use sparsevec_codec::{decode_binary, to_binary};
//! use sparsevec_core::models::SparseVector;
//!
//! let vector = SparseVector::new(3, vec![0, 2], vec![1.0, 2.0]).unwrap();
//! let bytes = to_binary(&vector).unwrap();
//! assert_eq!(bytes.len(), 28);
//! assert_eq!(decode_binary(&bytes).unwrap(), vector);
//! ```
//!
pub mod binary;
pub mod consts;
pub mod error;
pub mod text;

// re-expose core functions
pub use binary::*;
pub use consts::*;
pub use error::*;
pub use text::*;
