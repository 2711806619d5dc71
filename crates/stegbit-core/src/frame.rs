//! Shared pieces of the hidden-frame layout.
//!
//! Everything both directions of the codec must agree on lives here: field
//! widths, the hard-wired flag bit, the endianness-flip cadence and the
//! header-field carriers. Encode and decode going through the same code is
//! what keeps the two sides symmetric.

use std::io::{ErrorKind, Read, Write};

use crate::bits;
use crate::error::StegError;
use crate::options::Endian;
use crate::result::Result;
use crate::scalar;

/// The password flag sits at bit 0 of its cover byte no matter which
/// `hidden_bit_position` the rest of the frame uses, so it can be read
/// before any frame options apply.
pub(crate) const PASSWORD_FLAG_BIT: u8 = 0;

/// Cover bytes carrying the 32-bit password length field.
pub(crate) const PASSWORD_LEN_COVER_BYTES: usize = 32;

/// Cover bytes carrying the 64-bit payload length field.
pub(crate) const PAYLOAD_LEN_COVER_BYTES: usize = 64;

/// Chunk size for verbatim cover copies.
const COPY_BUFFER_SIZE: usize = 8192;

/// Endianness-flip cadence of the payload region.
///
/// The counter only starts once the payload region begins; header fields are
/// always carried with the starting endianness.
#[derive(Debug)]
pub(crate) struct EndianCycle {
    current: Endian,
    frequency: u64,
    blocks_in_window: u64,
}

impl EndianCycle {
    pub(crate) fn new(starting: Endian, frequency: u64) -> Self {
        Self {
            current: starting,
            frequency,
            blocks_in_window: 0,
        }
    }

    pub(crate) fn current(&self) -> Endian {
        self.current
    }

    /// Accounts one completed block, toggling the endianness whenever the
    /// window fills. A frequency of 0 never toggles.
    pub(crate) fn block_done(&mut self) {
        if self.frequency == 0 {
            return;
        }
        self.blocks_in_window += 1;
        if self.blocks_in_window == self.frequency {
            self.current = self.current.flipped();
            self.blocks_in_window = 0;
        }
    }
}

pub(crate) fn read_exact<R: Read>(input: &mut R, buf: &mut [u8]) -> Result<()> {
    input
        .read_exact(buf)
        .map_err(|source| StegError::ReadError { source })
}

/// Reads until the buffer is full or the input runs dry, returning how many
/// bytes actually arrived.
pub(crate) fn read_fill<R: Read>(input: &mut R, buf: &mut [u8]) -> Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match input.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(source) => return Err(StegError::ReadError { source }),
        }
    }

    Ok(filled)
}

pub(crate) fn write_all<W: Write>(output: &mut W, buf: &[u8]) -> Result<()> {
    output
        .write_all(buf)
        .map_err(|source| StegError::WriteError { source })
}

/// Copies exactly `amount` bytes from input to output verbatim.
pub(crate) fn copy_exact<R: Read, W: Write>(
    input: &mut R,
    output: &mut W,
    amount: u64,
) -> Result<()> {
    let mut buffer = [0u8; COPY_BUFFER_SIZE];
    let mut remaining = amount;
    while remaining > 0 {
        let chunk = remaining.min(COPY_BUFFER_SIZE as u64) as usize;
        read_exact(input, &mut buffer[..chunk])?;
        write_all(output, &buffer[..chunk])?;
        remaining -= chunk as u64;
    }

    Ok(())
}

/// Copies everything left on the input to the output verbatim.
pub(crate) fn copy_to_end<R: Read, W: Write>(input: &mut R, output: &mut W) -> Result<()> {
    let mut buffer = [0u8; COPY_BUFFER_SIZE];
    loop {
        let got = read_fill(input, &mut buffer)?;
        if got == 0 {
            return Ok(());
        }
        write_all(output, &buffer[..got])?;
    }
}

/// Discards exactly `amount` bytes from the input.
pub(crate) fn skip_exact<R: Read>(input: &mut R, amount: u64) -> Result<()> {
    let mut buffer = [0u8; COPY_BUFFER_SIZE];
    let mut remaining = amount;
    while remaining > 0 {
        let chunk = remaining.min(COPY_BUFFER_SIZE as u64) as usize;
        read_exact(input, &mut buffer[..chunk])?;
        remaining -= chunk as u64;
    }

    Ok(())
}

/// Discards up to `amount` bytes, returning how many were actually there.
pub(crate) fn skip_fill<R: Read>(input: &mut R, amount: u64) -> Result<u64> {
    let mut buffer = [0u8; COPY_BUFFER_SIZE];
    let mut discarded = 0;
    while discarded < amount {
        let chunk = (amount - discarded).min(COPY_BUFFER_SIZE as u64) as usize;
        let got = read_fill(input, &mut buffer[..chunk])?;
        if got == 0 {
            break;
        }
        discarded += got as u64;
    }

    Ok(discarded)
}

/// Carries a 32-bit header field across 32 cover bytes.
pub(crate) fn hide_u32<R: Read, W: Write>(
    cover: &mut R,
    destination: &mut W,
    value: u32,
    position: u8,
    endian: Endian,
) -> Result<()> {
    let mut buf = [0u8; PASSWORD_LEN_COVER_BYTES];
    read_exact(cover, &mut buf)?;
    let bytes = scalar::u32_to_bytes(value);
    bits::interleave(&mut buf, 0, &bytes, 0, bytes.len() - 1, position, endian)?;
    write_all(destination, &buf)
}

pub(crate) fn recover_u32<R: Read>(input: &mut R, position: u8, endian: Endian) -> Result<u32> {
    let mut buf = [0u8; PASSWORD_LEN_COVER_BYTES];
    read_exact(input, &mut buf)?;
    let bytes = bits::deinterleave(&buf, 0, 4, position, endian)?;
    scalar::u32_from_bytes(&bytes, 0)
}

/// Carries a 64-bit header field across 64 cover bytes.
pub(crate) fn hide_u64<R: Read, W: Write>(
    cover: &mut R,
    destination: &mut W,
    value: u64,
    position: u8,
    endian: Endian,
) -> Result<()> {
    let mut buf = [0u8; PAYLOAD_LEN_COVER_BYTES];
    read_exact(cover, &mut buf)?;
    let bytes = scalar::u64_to_bytes(value);
    bits::interleave(&mut buf, 0, &bytes, 0, bytes.len() - 1, position, endian)?;
    write_all(destination, &buf)
}

pub(crate) fn recover_u64<R: Read>(input: &mut R, position: u8, endian: Endian) -> Result<u64> {
    let mut buf = [0u8; PAYLOAD_LEN_COVER_BYTES];
    read_exact(input, &mut buf)?;
    let bytes = bits::deinterleave(&buf, 0, 8, position, endian)?;
    scalar::u64_from_bytes(&bytes, 0)
}
