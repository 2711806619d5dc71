//! Fixed-width big-endian scalar serialization.
//!
//! Header fields are first rendered to their 4 or 8 network-order bytes
//! here, then spread over cover bytes by the interleaver in [`crate::bits`].

use byteorder::{BigEndian, ByteOrder};

use crate::error::StegError;
use crate::result::Result;

pub fn u32_to_bytes(value: u32) -> [u8; 4] {
    let mut buf = [0u8; 4];
    BigEndian::write_u32(&mut buf, value);
    buf
}

pub fn u64_to_bytes(value: u64) -> [u8; 8] {
    let mut buf = [0u8; 8];
    BigEndian::write_u64(&mut buf, value);
    buf
}

/// Bit-preserving reinterpretation, not a numeric conversion.
pub fn f32_to_bytes(value: f32) -> [u8; 4] {
    u32_to_bytes(value.to_bits())
}

/// Bit-preserving reinterpretation, not a numeric conversion.
pub fn f64_to_bytes(value: f64) -> [u8; 8] {
    u64_to_bytes(value.to_bits())
}

pub fn u32_from_bytes(source: &[u8], start: usize) -> Result<u32> {
    ensure_remaining(source, start, 4)?;
    Ok(BigEndian::read_u32(&source[start..start + 4]))
}

pub fn u64_from_bytes(source: &[u8], start: usize) -> Result<u64> {
    ensure_remaining(source, start, 8)?;
    Ok(BigEndian::read_u64(&source[start..start + 8]))
}

pub fn f32_from_bytes(source: &[u8], start: usize) -> Result<f32> {
    Ok(f32::from_bits(u32_from_bytes(source, start)?))
}

pub fn f64_from_bytes(source: &[u8], start: usize) -> Result<f64> {
    Ok(f64::from_bits(u64_from_bytes(source, start)?))
}

fn ensure_remaining(source: &[u8], start: usize, required: usize) -> Result<()> {
    let available = source.len().saturating_sub(start);
    if available < required {
        return Err(StegError::InsufficientBytes {
            required,
            available,
        });
    }

    Ok(())
}
