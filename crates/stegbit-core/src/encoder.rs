//! Streaming frame encoder.
//!
//! Consumes cover and payload bytes and produces stego bytes of exactly the
//! cover's length. The destination receives bytes in strict cover order:
//! verbatim prefix, flag byte, optional password region, payload length
//! field, the block-structured payload region and finally the verbatim tail.

use std::io::{Read, Write};

use log::debug;

use crate::bits;
use crate::capacity;
use crate::frame::{
    copy_exact, copy_to_end, read_exact, read_fill, write_all, EndianCycle, PASSWORD_FLAG_BIT,
};
use crate::frame::{hide_u32, hide_u64};
use crate::options::StegOptions;
use crate::result::Result;
use crate::StegStatus;

/// Hides up to `payload_len` bytes of `payload` inside `cover`, writing the
/// stego stream to `destination`.
///
/// `cover_len` is the total cover size in bytes; the capacity check runs
/// against it before a single byte is written. The caller is expected to
/// clamp `payload_len` to what the payload stream can actually deliver; if
/// the stream still runs dry early, the frame is closed with the bytes that
/// were available and the rest of the cover is copied through.
pub fn encode_frame<C, P, W>(
    cover: &mut C,
    cover_len: u64,
    payload: &mut P,
    payload_len: u64,
    destination: &mut W,
    options: &StegOptions,
) -> Result<StegStatus>
where
    C: Read,
    P: Read,
    W: Write,
{
    let validation = capacity::validate(payload_len, cover_len, options);
    validation.ensure()?;
    debug!(
        "hiding {payload_len} payload bytes in {} of {cover_len} cover bytes",
        validation.total_bytes_required
    );

    copy_exact(cover, destination, options.initial_offset())?;

    let mut flag = [0u8; 1];
    read_exact(cover, &mut flag)?;
    flag[0] = bits::set_bit(flag[0], options.has_password() as u8, PASSWORD_FLAG_BIT)?;
    write_all(destination, &flag)?;

    let position = options.hidden_bit_position();
    let endian = options.starting_endian();

    if options.has_password() {
        encode_password(cover, destination, options)?;
    }

    hide_u64(cover, destination, payload_len, position, endian)?;

    let block_size = options.data_block_size();
    let mut cycle = EndianCycle::new(endian, options.endian_change_frequency());
    let mut data_buf = vec![0u8; block_size];
    let mut cover_buf = vec![0u8; block_size * 8];
    let mut encoded: u64 = 0;

    while encoded < payload_len {
        let wanted = u64::min(block_size as u64, payload_len - encoded) as usize;
        let got = read_fill(payload, &mut data_buf[..wanted])?;
        if got == 0 {
            break;
        }

        let chunk = &mut cover_buf[..got * 8];
        read_exact(cover, chunk)?;
        bits::interleave(chunk, 0, &data_buf, 0, got - 1, position, cycle.current())?;
        write_all(destination, chunk)?;

        encoded += got as u64;
        cycle.block_done();

        if encoded < payload_len {
            copy_exact(cover, destination, options.byte_skip_per_block())?;
        }
    }

    copy_to_end(cover, destination)?;
    destination
        .flush()
        .map_err(|source| crate::error::StegError::WriteError { source })?;

    Ok(StegStatus::EncodingSuccessful)
}

/// Writes the password length field followed by the password body, both with
/// the starting endianness. The flip cadence never applies here.
fn encode_password<C: Read, W: Write>(
    cover: &mut C,
    destination: &mut W,
    options: &StegOptions,
) -> Result<()> {
    let position = options.hidden_bit_position();
    let endian = options.starting_endian();
    let password = options.password().as_bytes();

    hide_u32(cover, destination, password.len() as u32, position, endian)?;

    let mut buf = vec![0u8; password.len() * 8];
    read_exact(cover, &mut buf)?;
    bits::interleave(&mut buf, 0, password, 0, password.len() - 1, position, endian)?;
    write_all(destination, &buf)
}
