//! # sparsevec-dispatch
//!
//! Decides which codec, if any, handles a value.
//!
//! ## Purpose
//!
//! A client asks for a value to be sent or read in a given wire format. For the
//! `sparsevec` type the binary codec only applies when the runtime value really is
//! a sparse vector *and* the format is binary. Every other combination gets an
//! explicit "no plan" (`None`) so the caller can try another codec, for instance
//! the text codec or a plain pass-through of a pre-formatted literal.
//!
//! ## Main Components
//!
//! - **`Codec`**: plans encode/decode operations for a type
//! - **`SparseVectorCodec`**: binary sparsevec codec
//! - **`SparseVectorTextCodec`**: text sparsevec codec
//! - **`CodecRegistry`**: explicit OID → codecs table, built from [`RegistryConfig`]
//!
//! ## Example
//!
//! ```rust
//! use sparsevec_core::models::SparseVector;
//! use sparsevec_dispatch::{Codec, Format, SparseVectorCodec, Value};
//!
//! let value = Value::from(SparseVector::from_dense(&[1.0, 0.0, 2.0]).unwrap());
//!
//! // text is declined: not an error, just no plan
//! assert!(SparseVectorCodec.plan_encode(&value, Format::Text).is_none());
//!
//! let plan = SparseVectorCodec.plan_encode(&value, Format::Binary).unwrap();
//! let mut buf = Vec::new();
//! plan.encode(&value, &mut buf).unwrap();
//!
//! let decoded = SparseVectorCodec.decode_value(Format::Binary, Some(buf.as_slice())).unwrap();
//! assert_eq!(decoded, Some(value));
//! ```
//!
pub mod codec;
pub mod codecs;
pub mod config;
pub mod error;
pub mod format;
pub mod registry;
pub mod value;

// re-export things
pub use codec::*;
pub use codecs::*;
pub use config::*;
pub use error::*;
pub use format::*;
pub use registry::*;
pub use value::*;

// contants
pub mod consts {
    pub const SPARSEVEC_TYPE_NAME: &str = "sparsevec";
}
