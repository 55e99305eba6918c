//! Binary wire format of the pgvector `sparsevec` type.
//!
//! All fields are big-endian and 4 bytes wide, with no padding:
//!
//! ```text
//! | dim | nnz | reserved | indices (nnz x u32) | values (nnz x f32) |
//! ```
use byteorder::{BigEndian, ByteOrder};
use log::{debug, trace};

use sparsevec_core::models::SparseVector;

use crate::consts::{ENTRY_SIZE, HEADER_SIZE, RESERVED, WORD_SIZE};
use crate::error::{MalformedInput, Result};

///
/// The fixed-size prefix of an encoded sparsevec.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub dim: u32,
    pub nnz: u32,
}

impl Header {
    /// Number of body bytes that must follow the header, `None` on overflow.
    pub fn body_len(&self) -> Option<usize> {
        (self.nnz as usize).checked_mul(ENTRY_SIZE)
    }
}

///
/// Read the header of an encoded sparsevec without looking at the body.
///
/// # Arguments
/// - src: the raw field bytes as delivered by the transport
///
pub fn read_header(src: &[u8]) -> std::result::Result<Header, MalformedInput> {
    if src.len() < HEADER_SIZE {
        return Err(MalformedInput::TruncatedHeader(src.len()));
    }

    Ok(Header {
        dim: BigEndian::read_u32(&src[0..WORD_SIZE]),
        nnz: BigEndian::read_u32(&src[WORD_SIZE..2 * WORD_SIZE]),
    })
}

///
/// Append the binary form of `vector` to `buf`.
///
/// The only way this fails is when the buffer cannot grow.
///
/// # Arguments
/// - vector: the vector to encode
/// - buf: output buffer, existing contents are kept
///
pub fn encode_binary(vector: &SparseVector, buf: &mut Vec<u8>) -> Result<()> {
    let nnz = vector.nnz();
    let len = HEADER_SIZE + nnz * ENTRY_SIZE;

    buf.try_reserve(len)?;
    let start = buf.len();
    buf.resize(start + len, 0);

    let (header, body) = buf[start..].split_at_mut(HEADER_SIZE);
    BigEndian::write_u32(&mut header[0..4], vector.dim());
    // nnz <= dim, so it fits
    BigEndian::write_u32(&mut header[4..8], nnz as u32);
    BigEndian::write_u32(&mut header[8..12], RESERVED);

    let (indices, values) = body.split_at_mut(nnz * WORD_SIZE);
    BigEndian::write_u32_into(vector.indices(), indices);
    BigEndian::write_f32_into(vector.values(), values);

    trace!("Encoded sparsevec dim={} nnz={} into {} bytes", vector.dim(), nnz, len);

    Ok(())
}

/// Encode `vector` into a freshly allocated buffer.
pub fn to_binary(vector: &SparseVector) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    encode_binary(vector, &mut buf)?;
    Ok(buf)
}

///
/// Decode the binary form of a sparsevec.
///
/// The input must be exactly one encoded value: a header followed by `nnz`
/// indices and `nnz` values. Indices must be in bounds and strictly
/// increasing. Nothing is allocated before the declared size has been checked
/// against the input length.
///
/// # Arguments
/// - src: the raw field bytes, borrowed for the duration of the call
///
pub fn decode_binary(src: &[u8]) -> std::result::Result<SparseVector, MalformedInput> {
    let header = read_header(src).inspect_err(|e| debug!("Rejecting sparsevec: {e}"))?;
    let body = &src[HEADER_SIZE..];

    let expected = header.body_len();
    if expected != Some(body.len()) {
        let err = MalformedInput::LengthMismatch {
            nnz: header.nnz,
            expected: expected.unwrap_or(usize::MAX),
            actual: body.len(),
        };
        debug!("Rejecting sparsevec: {err}");
        return Err(err);
    }

    let nnz = header.nnz as usize;
    let (index_bytes, value_bytes) = body.split_at(nnz * WORD_SIZE);

    let mut indices = vec![0u32; nnz];
    let mut values = vec![0f32; nnz];
    BigEndian::read_u32_into(index_bytes, &mut indices);
    BigEndian::read_f32_into(value_bytes, &mut values);

    SparseVector::new(header.dim, indices, values).map_err(|e| {
        debug!("Rejecting sparsevec: {e}");
        MalformedInput::Invalid(e)
    })
}
