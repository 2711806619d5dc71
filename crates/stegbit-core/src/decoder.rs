//! Streaming frame decoder.
//!
//! Reads a stego stream produced by [`crate::encoder::encode_frame`] with the
//! same options and writes the recovered payload to the destination. Every
//! per-region choice mirrors the encoder exactly; the two sides share their
//! cadence and header-field code through [`crate::frame`].

use std::io::{Read, Write};

use log::debug;

use crate::bits;
use crate::error::StegError;
use crate::frame::{
    read_exact, read_fill, recover_u32, recover_u64, skip_exact, skip_fill, EndianCycle,
    PASSWORD_FLAG_BIT,
};
use crate::options::StegOptions;
use crate::result::Result;
use crate::StegStatus;

/// Recovers the hidden payload from `stego`, writing it to `destination`.
///
/// Returns [`StegStatus::InvalidPassword`] as a value when the in-band
/// password marker does not agree with `options`; hard failures surface as
/// errors. When the input runs out before the declared payload length is
/// reached, the bytes recovered so far stay written and the call still
/// returns successfully, mismatched options produce garbage rather than
/// panics.
pub fn decode_frame<S, W>(
    stego: &mut S,
    destination: &mut W,
    options: &StegOptions,
) -> Result<StegStatus>
where
    S: Read,
    W: Write,
{
    skip_exact(stego, options.initial_offset())?;

    let mut flag = [0u8; 1];
    read_exact(stego, &mut flag)?;
    let marker_set = bits::get_bit(flag[0], PASSWORD_FLAG_BIT)? == 1;

    if marker_set != options.has_password() {
        return Ok(StegStatus::InvalidPassword);
    }
    if marker_set && !password_matches(stego, options)? {
        return Ok(StegStatus::InvalidPassword);
    }

    let position = options.hidden_bit_position();
    let endian = options.starting_endian();
    let payload_len = recover_u64(stego, position, endian)?;
    debug!("hidden frame declares {payload_len} payload bytes");

    let block_size = options.data_block_size();
    let mut cycle = EndianCycle::new(endian, options.endian_change_frequency());
    let mut buf = vec![0u8; block_size * 8];
    let mut remaining = payload_len;

    while remaining > 0 {
        let wanted = u64::min(block_size as u64, remaining) as usize;
        let got = read_fill(stego, &mut buf[..wanted * 8])?;
        // a trailing partial window cannot carry a whole payload byte
        let whole = got / 8;
        if whole == 0 {
            break;
        }

        let recovered = bits::deinterleave(&buf, 0, whole, position, cycle.current())?;
        destination
            .write_all(&recovered)
            .map_err(|source| StegError::WriteError { source })?;

        remaining -= whole as u64;
        cycle.block_done();

        if got < wanted * 8 {
            break;
        }
        if remaining > 0 && skip_fill(stego, options.byte_skip_per_block())? < options.byte_skip_per_block() {
            break;
        }
    }

    destination
        .flush()
        .map_err(|source| StegError::WriteError { source })?;

    Ok(StegStatus::DecodingSuccessful)
}

/// Reads the in-band password region and compares it against the configured
/// password. A length mismatch can never compare equal, so it fails without
/// touching the password body.
fn password_matches<S: Read>(stego: &mut S, options: &StegOptions) -> Result<bool> {
    let position = options.hidden_bit_position();
    let endian = options.starting_endian();

    let declared_len = recover_u32(stego, position, endian)? as usize;
    if declared_len != options.password().len() {
        return Ok(false);
    }

    let mut buf = vec![0u8; declared_len * 8];
    let got = read_fill(stego, &mut buf)?;
    if got < buf.len() {
        return Ok(false);
    }
    let recovered = bits::deinterleave(&buf, 0, declared_len, position, endian)?;

    Ok(recovered == options.password().as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::encode_frame;
    use crate::options::Endian;
    use std::io::Cursor;

    fn round_trip(cover: &[u8], payload: &[u8], options: &StegOptions) -> (Vec<u8>, StegStatus) {
        let mut stego = Vec::new();
        encode_frame(
            &mut Cursor::new(cover),
            cover.len() as u64,
            &mut Cursor::new(payload),
            payload.len() as u64,
            &mut stego,
            options,
        )
        .unwrap();

        let mut recovered = Vec::new();
        let status = decode_frame(&mut Cursor::new(&stego), &mut recovered, options).unwrap();
        (recovered, status)
    }

    #[test]
    fn recovers_a_payload_with_default_options() {
        let cover = vec![0b1010_1010u8; 400];
        let (recovered, status) = round_trip(&cover, b"hello stego", &StegOptions::default());
        assert_eq!(status, StegStatus::DecodingSuccessful);
        assert_eq!(recovered, b"hello stego");
    }

    #[test]
    fn recovers_across_every_bit_position() {
        let cover: Vec<u8> = (0..=255u8).cycle().take(1000).collect();
        for position in 0..=7u8 {
            let options = StegOptions::new(0, 0, 4, position, Endian::Big, 0, "").unwrap();
            let (recovered, _) = round_trip(&cover, b"positional", &options);
            assert_eq!(recovered, b"positional", "bit position {position}");
        }
    }

    #[test]
    fn empty_vs_nonempty_password_mismatch_is_invalid_password() {
        let cover = vec![0xF0u8; 500];
        let with_password = StegOptions::new(0, 0, 1, 0, Endian::Big, 0, "key").unwrap();
        let without = StegOptions::default();

        let mut stego = Vec::new();
        encode_frame(
            &mut Cursor::new(&cover),
            cover.len() as u64,
            &mut Cursor::new(b"data"),
            4,
            &mut stego,
            &with_password,
        )
        .unwrap();

        let mut sink = Vec::new();
        let status = decode_frame(&mut Cursor::new(&stego), &mut sink, &without).unwrap();
        assert_eq!(status, StegStatus::InvalidPassword);
        assert!(sink.is_empty());

        // and the other way around
        let mut stego = Vec::new();
        encode_frame(
            &mut Cursor::new(&cover),
            cover.len() as u64,
            &mut Cursor::new(b"data"),
            4,
            &mut stego,
            &without,
        )
        .unwrap();
        let status = decode_frame(&mut Cursor::new(&stego), &mut sink, &with_password).unwrap();
        assert_eq!(status, StegStatus::InvalidPassword);
    }

    #[test]
    fn truncated_stego_yields_a_prefix_not_an_error() {
        let cover = vec![0x11u8; 200];
        let options = StegOptions::default();
        let mut stego = Vec::new();
        encode_frame(
            &mut Cursor::new(&cover),
            cover.len() as u64,
            &mut Cursor::new(b"abcdefgh"),
            8,
            &mut stego,
            &options,
        )
        .unwrap();

        // cut the stream in the middle of the payload region
        stego.truncate(1 + 64 + 3 * 8 + 4);

        let mut recovered = Vec::new();
        let status = decode_frame(&mut Cursor::new(&stego), &mut recovered, &options).unwrap();
        assert_eq!(status, StegStatus::DecodingSuccessful);
        assert_eq!(recovered, b"abc");
    }
}
