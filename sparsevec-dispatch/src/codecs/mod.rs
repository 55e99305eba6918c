pub mod binary;
pub mod text;

pub use self::binary::SparseVectorCodec;
pub use self::text::SparseVectorTextCodec;
