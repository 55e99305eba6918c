//! # sparsevec
//!
//! Client-side support for the pgvector `sparsevec` type, split into
//! feature-gated crates:
//!
//! - `core`: the [`SparseVector`](core::models::SparseVector) data model
//! - `codec`: binary and text wire codecs
//! - `dispatch`: codec planning and the OID registry
//!
#[cfg(feature = "core")]
#[doc(inline)]
pub use sparsevec_core as core;

#[cfg(feature = "codec")]
#[doc(inline)]
pub use sparsevec_codec as codec;

#[cfg(feature = "dispatch")]
#[doc(inline)]
pub use sparsevec_dispatch as dispatch;
