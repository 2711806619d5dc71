//! Bit-level primitives over byte buffers.
//!
//! The interleaver spreads each source byte over eight target bytes, writing
//! exactly one source bit into the chosen bit position of every target byte
//! while the other seven bits pass through untouched. The de-interleaver is
//! its exact mirror, which is what makes the round trip lossless.

use crate::error::StegError;
use crate::options::Endian;
use crate::result::Result;

/// Overwrites the bit at `position` in `target` with `value`.
pub fn set_bit(target: u8, value: u8, position: u8) -> Result<u8> {
    if position > 7 {
        return Err(StegError::BitPositionOutOfRange(position));
    }
    if value > 1 {
        return Err(StegError::InvalidBitValue(value));
    }

    Ok((target & !(1 << position)) | (value << position))
}

/// Reads the bit at `position` out of `value`.
pub fn get_bit(value: u8, position: u8) -> Result<u8> {
    if position > 7 {
        return Err(StegError::BitPositionOutOfRange(position));
    }

    Ok((value >> position) & 1)
}

/// Spreads `source[src_start..=src_end]` over the target buffer, one source
/// bit per target byte, written into `position`.
///
/// With [`Endian::Big`] the most significant bit of a source byte lands in
/// the first of its eight target bytes, with [`Endian::Little`] the least
/// significant bit does. The target must hold at least eight bytes per
/// source byte from `target_start` on.
pub fn interleave(
    target: &mut [u8],
    target_start: usize,
    source: &[u8],
    src_start: usize,
    src_end: usize,
    position: u8,
    endian: Endian,
) -> Result<()> {
    if position > 7 {
        return Err(StegError::BitPositionOutOfRange(position));
    }
    if src_start > src_end || src_end >= source.len() {
        return Err(StegError::SourceRangeOutOfBounds {
            start: src_start,
            end: src_end,
            len: source.len(),
        });
    }

    let required = (src_end - src_start + 1) * 8;
    let available = target.len().saturating_sub(target_start);
    if available < required {
        return Err(StegError::InsufficientBytes {
            required,
            available,
        });
    }

    let clear = !(1u8 << position);
    let mut t = target_start;
    for &byte in &source[src_start..=src_end] {
        for j in (0..8u8).rev() {
            let bit = match endian {
                Endian::Big => (byte >> j) & 1,
                Endian::Little => (byte >> (7 - j)) & 1,
            };
            target[t] = (target[t] & clear) | (bit << position);
            t += 1;
        }
    }

    Ok(())
}

/// Recovers `count` bytes from a buffer previously written by
/// [`interleave`] with the same `position` and `endian`.
pub fn deinterleave(
    source: &[u8],
    src_start: usize,
    count: usize,
    position: u8,
    endian: Endian,
) -> Result<Vec<u8>> {
    if position > 7 {
        return Err(StegError::BitPositionOutOfRange(position));
    }

    let required = count * 8;
    let available = source.len().saturating_sub(src_start);
    if available < required {
        return Err(StegError::InsufficientBytes {
            required,
            available,
        });
    }

    let mut out = Vec::with_capacity(count);
    let mut s = src_start;
    for _ in 0..count {
        let mut byte = 0u8;
        for j in 0..8u8 {
            let bit = (source[s] >> position) & 1;
            match endian {
                Endian::Big => byte = (byte << 1) | bit,
                Endian::Little => byte |= bit << j,
            }
            s += 1;
        }
        out.push(byte);
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_set_a_single_bit() {
        assert_eq!(set_bit(0b0000_0000, 1, 0).unwrap(), 0b0000_0001);
        assert_eq!(set_bit(0b1111_1111, 0, 7).unwrap(), 0b0111_1111);
        assert_eq!(set_bit(0b1010_1010, 1, 2).unwrap(), 0b1010_1110);
        assert_eq!(set_bit(0b1010_1010, 0, 1).unwrap(), 0b1010_1000);
    }

    #[test]
    fn should_read_a_single_bit() {
        assert_eq!(get_bit(0b0000_0001, 0).unwrap(), 1);
        assert_eq!(get_bit(0b0000_0001, 1).unwrap(), 0);
        assert_eq!(get_bit(0b1000_0000, 7).unwrap(), 1);
    }

    #[test]
    fn should_reject_invalid_positions_and_values() {
        assert!(matches!(
            set_bit(0, 1, 8),
            Err(StegError::BitPositionOutOfRange(8))
        ));
        assert!(matches!(set_bit(0, 2, 0), Err(StegError::InvalidBitValue(2))));
        assert!(matches!(
            get_bit(0, 9),
            Err(StegError::BitPositionOutOfRange(9))
        ));
    }

    #[test]
    fn should_interleave_big_endian_msb_first() {
        let mut target = [0u8; 8];
        interleave(&mut target, 0, &[0b1100_0101], 0, 0, 0, Endian::Big).unwrap();
        assert_eq!(target, [1, 1, 0, 0, 0, 1, 0, 1]);
    }

    #[test]
    fn should_interleave_little_endian_lsb_first() {
        let mut target = [0u8; 8];
        interleave(&mut target, 0, &[0b1100_0101], 0, 0, 0, Endian::Little).unwrap();
        assert_eq!(target, [1, 0, 1, 0, 0, 0, 1, 1]);
    }

    #[test]
    fn should_leave_other_bits_untouched() {
        let mut target = [0b1111_0000u8; 8];
        interleave(&mut target, 0, &[0b1010_1010], 0, 0, 2, Endian::Big).unwrap();
        for (i, byte) in target.iter().enumerate() {
            let expected_bit = if i % 2 == 0 { 0b100 } else { 0 };
            assert_eq!(*byte, 0b1111_0000 | expected_bit, "byte {i}");
        }
    }

    #[test]
    fn inverse_law_holds_for_every_position_and_endian() {
        let source: Vec<u8> = (0..=255u8).step_by(3).collect();
        for position in 0..=7u8 {
            for endian in [Endian::Big, Endian::Little] {
                let mut target = vec![0u8; source.len() * 8];
                interleave(
                    &mut target,
                    0,
                    &source,
                    0,
                    source.len() - 1,
                    position,
                    endian,
                )
                .unwrap();
                let recovered =
                    deinterleave(&target, 0, source.len(), position, endian).unwrap();
                assert_eq!(recovered, source, "position {position} endian {endian:?}");
            }
        }
    }

    #[test]
    fn should_respect_start_offsets() {
        let mut target = vec![0xFFu8; 20];
        interleave(&mut target, 4, &[0x00, 0xF0], 1, 1, 0, Endian::Big).unwrap();
        assert_eq!(&target[..4], &[0xFF; 4]);
        assert_eq!(&target[4..12], &[0xFF, 0xFF, 0xFF, 0xFF, 0xFE, 0xFE, 0xFE, 0xFE]);
        assert_eq!(&target[12..], &[0xFF; 8]);

        let recovered = deinterleave(&target, 4, 1, 0, Endian::Big).unwrap();
        assert_eq!(recovered, vec![0xF0]);
    }

    #[test]
    fn should_fail_when_target_is_too_small() {
        let mut target = [0u8; 15];
        assert!(matches!(
            interleave(&mut target, 0, &[1, 2], 0, 1, 0, Endian::Big),
            Err(StegError::InsufficientBytes {
                required: 16,
                available: 15
            })
        ));
    }

    #[test]
    fn should_fail_on_out_of_bounds_source_range() {
        let mut target = [0u8; 32];
        // end-inclusive: index 2 of a 2-byte source is one past the end
        assert!(matches!(
            interleave(&mut target, 0, &[1, 2], 0, 2, 0, Endian::Big),
            Err(StegError::SourceRangeOutOfBounds {
                start: 0,
                end: 2,
                len: 2
            })
        ));
        // the final valid index still works
        assert!(interleave(&mut target, 0, &[1, 2], 1, 1, 0, Endian::Big).is_ok());
    }

    #[test]
    fn should_fail_when_source_runs_short_on_deinterleave() {
        let source = [0u8; 23];
        assert!(matches!(
            deinterleave(&source, 0, 3, 0, Endian::Big),
            Err(StegError::InsufficientBytes {
                required: 24,
                available: 23
            })
        ));
    }
}
