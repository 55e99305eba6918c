use log::trace;

use sparsevec_codec::{MalformedInput, decode_text, encode_text};
use sparsevec_core::models::SparseVector;

use crate::codec::{Codec, DecodePlan, EncodePlan};
use crate::error::{DispatchError, Result};
use crate::format::Format;
use crate::value::{Value, ValueKind};

///
/// Text-format counterpart of [`SparseVectorCodec`](super::SparseVectorCodec).
///
/// Registered after the binary codec so that a text-format request, which the
/// binary codec declines, still finds a plan.
///
#[derive(Debug, Default, Clone, Copy)]
pub struct SparseVectorTextCodec;

struct TextEncodePlan;

struct TextDecodePlan;

impl EncodePlan for TextEncodePlan {
    fn encode(&self, value: &Value, buf: &mut Vec<u8>) -> Result<()> {
        let vector = value.as_sparse_vector().ok_or_else(|| {
            DispatchError::UnsupportedConversion(format!(
                "text sparsevec plan cannot encode a {:?} value",
                value.kind()
            ))
        })?;

        let mut text = String::new();
        encode_text(vector, &mut text);
        buf.extend_from_slice(text.as_bytes());
        Ok(())
    }
}

impl DecodePlan for TextDecodePlan {
    fn decode(&self, src: &[u8]) -> Result<SparseVector> {
        let text = std::str::from_utf8(src)
            .map_err(|e| MalformedInput::InvalidText(format!("not valid UTF-8: {}", e)))?;
        Ok(decode_text(text)?)
    }
}

impl Codec for SparseVectorTextCodec {
    fn name(&self) -> &'static str {
        "sparsevec-text"
    }

    fn format_supported(&self, format: Format) -> bool {
        format == Format::Text
    }

    fn preferred_format(&self) -> Format {
        Format::Text
    }

    fn plan_encode(&self, value: &Value, format: Format) -> Option<Box<dyn EncodePlan>> {
        value.as_sparse_vector()?;

        if format != Format::Text {
            trace!("{}: no encode plan for {} format", self.name(), format);
            return None;
        }

        Some(Box::new(TextEncodePlan))
    }

    fn plan_decode(&self, format: Format, target: ValueKind) -> Option<Box<dyn DecodePlan>> {
        if target != ValueKind::SparseVector || format != Format::Text {
            trace!("{}: no decode plan for {:?} in {} format", self.name(), target, format);
            return None;
        }

        Some(Box::new(TextDecodePlan))
    }
}
