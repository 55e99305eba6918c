use log::trace;

use sparsevec_codec::{decode_binary, encode_binary};
use sparsevec_core::models::SparseVector;

use crate::codec::{Codec, DecodePlan, EncodePlan};
use crate::error::{DispatchError, Result};
use crate::format::Format;
use crate::value::{Value, ValueKind};

///
/// The binary-only codec for sparsevec.
///
/// It plans exactly one combination in each direction: a sparse vector in
/// binary format. Every other request gets `None`.
///
#[derive(Debug, Default, Clone, Copy)]
pub struct SparseVectorCodec;

struct BinaryEncodePlan;

struct BinaryDecodePlan;

impl EncodePlan for BinaryEncodePlan {
    fn encode(&self, value: &Value, buf: &mut Vec<u8>) -> Result<()> {
        let vector = value.as_sparse_vector().ok_or_else(|| {
            DispatchError::UnsupportedConversion(format!(
                "binary sparsevec plan cannot encode a {:?} value",
                value.kind()
            ))
        })?;
        encode_binary(vector, buf)?;
        Ok(())
    }
}

impl DecodePlan for BinaryDecodePlan {
    fn decode(&self, src: &[u8]) -> Result<SparseVector> {
        Ok(decode_binary(src)?)
    }
}

impl Codec for SparseVectorCodec {
    fn name(&self) -> &'static str {
        "sparsevec-binary"
    }

    fn format_supported(&self, format: Format) -> bool {
        format == Format::Binary
    }

    fn preferred_format(&self) -> Format {
        Format::Binary
    }

    fn plan_encode(&self, value: &Value, format: Format) -> Option<Box<dyn EncodePlan>> {
        value.as_sparse_vector()?;

        if format != Format::Binary {
            trace!("{}: no encode plan for {} format", self.name(), format);
            return None;
        }

        Some(Box::new(BinaryEncodePlan))
    }

    fn plan_decode(&self, format: Format, target: ValueKind) -> Option<Box<dyn DecodePlan>> {
        if target != ValueKind::SparseVector || format != Format::Binary {
            trace!("{}: no decode plan for {:?} in {} format", self.name(), target, format);
            return None;
        }

        Some(Box::new(BinaryDecodePlan))
    }
}
