//! Text representations of a sparsevec.
//!
//! The sparse form is `{i1:v1,i2:v2,...}/dim` with **1-based** indices, which
//! is what the server prints and accepts. On input the dense literal
//! `[v0,v1,...]` is accepted as well.
use std::fmt::{self, Write};

use sparsevec_core::models::SparseVector;

use crate::error::MalformedInput;

///
/// Displays a vector in the sparse text form without allocating.
///
/// ```rust
/// use sparsevec_codec::text::TextLiteral;
/// use sparsevec_core::models::SparseVector;
///
/// let vector = SparseVector::from_dense(&[1.0, 0.0, 2.5]).unwrap();
/// assert_eq!(format!("{}", TextLiteral(&vector)), "{1:1,3:2.5}/3");
/// ```
///
pub struct TextLiteral<'a>(pub &'a SparseVector);

impl fmt::Display for TextLiteral<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('{')?;
        for (n, (index, value)) in self.0.iter().enumerate() {
            if n > 0 {
                f.write_char(',')?;
            }
            // index < dim <= u32::MAX
            write!(f, "{}:{}", index + 1, value)?;
        }
        write!(f, "}}/{}", self.0.dim())
    }
}

/// Displays a vector as a dense literal, `[v0,v1,...]`.
pub struct DenseLiteral<'a>(pub &'a SparseVector);

impl fmt::Display for DenseLiteral<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('[')?;
        for (n, value) in self.0.dense_iter().enumerate() {
            if n > 0 {
                f.write_char(',')?;
            }
            write!(f, "{}", value)?;
        }
        f.write_char(']')
    }
}

/// Append the sparse text form of `vector` to `buf`.
pub fn encode_text(vector: &SparseVector, buf: &mut String) {
    // writing into a String never fails
    let _ = write!(buf, "{}", TextLiteral(vector));
}

pub fn to_text(vector: &SparseVector) -> String {
    TextLiteral(vector).to_string()
}

fn invalid(reason: impl Into<String>) -> MalformedInput {
    MalformedInput::InvalidText(reason.into())
}

///
/// Parse either text form into a sparse vector.
///
/// Entries of the sparse form may come in any order; they are sorted, zero
/// values are dropped and repeated indices are rejected. NaN and infinite
/// values are rejected.
///
/// # Arguments
/// - src: the literal, surrounding whitespace is ignored
///
pub fn decode_text(src: &str) -> Result<SparseVector, MalformedInput> {
    let src = src.trim();

    if let Some(inner) = src.strip_prefix('[') {
        return decode_dense(inner);
    }

    let (body, dim) = src
        .rsplit_once('/')
        .ok_or_else(|| invalid(format!("missing '/dim' suffix in {:?}", src)))?;

    let dim: u32 = dim
        .trim()
        .parse()
        .map_err(|e| invalid(format!("bad dimension {:?}: {}", dim.trim(), e)))?;

    let body = body
        .trim()
        .strip_prefix('{')
        .and_then(|b| b.strip_suffix('}'))
        .ok_or_else(|| invalid(format!("expected '{{idx:val,...}}', got {:?}", body.trim())))?;

    let mut entries: Vec<(u32, f32)> = Vec::new();
    if !body.trim().is_empty() {
        for pair in body.split(',') {
            let (index, value) = pair
                .split_once(':')
                .ok_or_else(|| invalid(format!("expected 'idx:val', got {:?}", pair.trim())))?;

            let index: u32 = index
                .trim()
                .parse()
                .map_err(|e| invalid(format!("bad index {:?}: {}", index.trim(), e)))?;
            if index == 0 {
                return Err(invalid("indices start at 1"));
            }

            let value = parse_value(value)?;

            entries.push((index - 1, value));
        }
    }

    entries.sort_by_key(|(index, _)| *index);
    if let Some(pair) = entries.windows(2).find(|pair| pair[0].0 == pair[1].0) {
        return Err(invalid(format!("duplicate index {}", pair[0].0 + 1)));
    }
    entries.retain(|(_, value)| *value != 0.0);

    let (indices, values) = entries.into_iter().unzip();
    Ok(SparseVector::new(dim, indices, values)?)
}

/// Parse one element. NaN and infinities are not valid sparsevec elements.
fn parse_value(src: &str) -> Result<f32, MalformedInput> {
    let value: f32 = src
        .trim()
        .parse()
        .map_err(|e| invalid(format!("bad value {:?}: {}", src.trim(), e)))?;

    if !value.is_finite() {
        return Err(invalid(format!("value {} is not finite", value)));
    }
    Ok(value)
}

fn decode_dense(inner: &str) -> Result<SparseVector, MalformedInput> {
    let inner = inner
        .strip_suffix(']')
        .ok_or_else(|| invalid("dense literal must end with ']'"))?;

    let dense = if inner.trim().is_empty() {
        Vec::new()
    } else {
        inner
            .split(',')
            .map(parse_value)
            .collect::<Result<Vec<f32>, _>>()?
    };

    Ok(SparseVector::from_dense(&dense)?)
}
