use thiserror::Error;

use sparsevec_codec::{CodecError, MalformedInput};

use crate::config::RegistryConfigError;

#[derive(Error, Debug)]
pub enum DispatchError {
    /// No codec plan matched a conversion that was explicitly requested.
    #[error("Unable to convert sparsevec: {0}")]
    UnsupportedConversion(String),
    #[error("No codec registered for type oid {0}")]
    UnknownType(u32),
    #[error("Unsupported type name in registry config: {0}")]
    UnknownTypeName(String),
    #[error("Type {name} (oid {oid}) is registered more than once")]
    DuplicateType { name: String, oid: u32 },
    #[error("Unknown format code: {0}")]
    UnknownFormat(i16),
    #[error("Unknown format name {0:?}, expected `binary` or `text`")]
    UnknownFormatName(String),
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error(transparent)]
    Config(#[from] RegistryConfigError),
}

impl From<MalformedInput> for DispatchError {
    fn from(err: MalformedInput) -> Self {
        DispatchError::Codec(CodecError::MalformedInput(err))
    }
}

impl DispatchError {
    /// `true` when the input bytes themselves were rejected.
    pub fn is_malformed(&self) -> bool {
        matches!(self, DispatchError::Codec(CodecError::MalformedInput(_)))
    }
}

pub type Result<T> = std::result::Result<T, DispatchError>;
