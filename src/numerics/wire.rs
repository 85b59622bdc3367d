//! Wire representation of vector fields.
//!
//! A vector travels as a contiguous run of little-endian IEEE-754 f32
//! values, `x, y[, z]`, with no padding and no length prefix. The receiver
//! knows the arity from the entity schema. The byte helpers here are used by
//! `to_le_bytes` / `read_le_bytes` on both vector types; `encode` / `decode`
//! go through serde with the bincode configuration below, which yields the
//! same bytes for f32 vectors.

use bincode::config::{Configuration, Fixint, LittleEndian, NoLimit};
use byteorder::{ByteOrder, LittleEndian as Le};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::VectorError;

/// Size of one encoded component.
pub const COMPONENT_BYTES: usize = 4;

/// bincode settings matching the vector wire layout.
pub const WIRE_CONFIG: Configuration<LittleEndian, Fixint, NoLimit> = bincode::config::standard()
    .with_little_endian()
    .with_fixed_int_encoding();

/// Writes `values` into the front of `out`. Returns the number of bytes written.
pub fn write_f32s(values: &[f32], out: &mut [u8]) -> Result<usize, VectorError> {
    let expected = values.len() * COMPONENT_BYTES;
    if out.len() < expected {
        tracing::debug!(expected, actual = out.len(), "output buffer too short for vector");
        return Err(VectorError::BufferTooShort {
            expected,
            actual: out.len(),
        });
    }
    Le::write_f32_into(values, &mut out[..expected]);
    Ok(expected)
}

/// Reads `N` components from the front of `bytes`. Trailing bytes are ignored.
pub fn read_f32s<const N: usize>(bytes: &[u8]) -> Result<[f32; N], VectorError> {
    let expected = N * COMPONENT_BYTES;
    if bytes.len() < expected {
        tracing::debug!(expected, actual = bytes.len(), "input buffer too short for vector");
        return Err(VectorError::BufferTooShort {
            expected,
            actual: bytes.len(),
        });
    }
    let mut values = [0.0_f32; N];
    Le::read_f32_into(&bytes[..expected], &mut values);
    Ok(values)
}

/// Serializes `value` with [`WIRE_CONFIG`].
pub fn encode<V: Serialize>(value: &V) -> Result<Vec<u8>, VectorError> {
    let bytes = bincode::serde::encode_to_vec(value, WIRE_CONFIG)
        .map_err(|e| VectorError::Encode(e.to_string()))?;
    tracing::trace!(len = bytes.len(), "encoded wire value");
    Ok(bytes)
}

/// Deserializes a value produced by [`encode`].
///
/// `bytes` must hold exactly one value; leftover bytes are a decode error.
pub fn decode<V: DeserializeOwned>(bytes: &[u8]) -> Result<V, VectorError> {
    let (value, read) = bincode::serde::decode_from_slice(bytes, WIRE_CONFIG)
        .map_err(|e| VectorError::Decode(e.to_string()))?;
    if read != bytes.len() {
        tracing::debug!(read, available = bytes.len(), "trailing bytes after wire value");
        return Err(VectorError::Decode(format!(
            "{} trailing bytes after a {}-byte value",
            bytes.len() - read,
            read
        )));
    }
    tracing::trace!(read, "decoded wire value");
    Ok(value)
}
