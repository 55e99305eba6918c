use log::debug;

use sparsevec_core::models::SparseVector;

use crate::error::{DispatchError, Result};
use crate::format::Format;
use crate::value::{Value, ValueKind};

///
/// A bound encode operation, obtained from [`Codec::plan_encode`].
///
/// Plans hold no per-value state and can be reused for every value of the
/// type they were planned for.
///
pub trait EncodePlan: Send + Sync {
    /// Append the encoded form of `value` to `buf`.
    fn encode(&self, value: &Value, buf: &mut Vec<u8>) -> Result<()>;
}

///
/// A bound decode operation, obtained from [`Codec::plan_decode`].
///
pub trait DecodePlan: Send + Sync {
    fn decode(&self, src: &[u8]) -> Result<SparseVector>;

    /// Decode into an existing destination. `dst` is untouched on failure.
    fn scan(&self, src: &[u8], dst: &mut SparseVector) -> Result<()> {
        *dst = self.decode(src)?;
        Ok(())
    }
}

///
/// A codec for the sparsevec type in one or more wire formats.
///
/// The planning methods return `None` when the codec does not apply to the
/// requested (value type, format) pair. That is not an error: the caller
/// should try the next codec.
///
pub trait Codec: Send + Sync {
    fn name(&self) -> &'static str;

    fn format_supported(&self, format: Format) -> bool;

    fn preferred_format(&self) -> Format;

    fn plan_encode(&self, value: &Value, format: Format) -> Option<Box<dyn EncodePlan>>;

    fn plan_decode(&self, format: Format, target: ValueKind) -> Option<Box<dyn DecodePlan>>;

    ///
    /// Decode into a dynamically-typed value.
    ///
    /// An absent field (`None`) decodes to `None` without touching any plan.
    /// When this codec has no plan for `format` the call fails with
    /// [`DispatchError::UnsupportedConversion`].
    ///
    fn decode_value(&self, format: Format, src: Option<&[u8]>) -> Result<Option<Value>> {
        let Some(src) = src else {
            return Ok(None);
        };

        let plan = self
            .plan_decode(format, ValueKind::SparseVector)
            .ok_or_else(|| {
                debug!("Codec {} has no {} decode plan", self.name(), format);
                DispatchError::UnsupportedConversion(format!(
                    "codec {} cannot decode {} format",
                    self.name(),
                    format
                ))
            })?;

        Ok(Some(Value::SparseVector(plan.decode(src)?)))
    }
}
