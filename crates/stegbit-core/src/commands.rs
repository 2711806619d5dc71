//! File-level operations: open the paths, wire up buffered streams and run
//! the frame codec.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use log::info;

use crate::capacity::{self, EncodeValidation};
use crate::decoder::decode_frame;
use crate::encoder::encode_frame;
use crate::error::StegError;
use crate::options::StegOptions;
use crate::result::Result;
use crate::StegStatus;

/// Hides the whole payload file inside the cover file.
pub fn encode(
    cover: impl AsRef<Path>,
    payload: impl AsRef<Path>,
    destination: impl AsRef<Path>,
    options: &StegOptions,
) -> Result<StegStatus> {
    let payload = payload.as_ref();
    let payload_len = file_size(payload)?;
    encode_amount(cover, payload, payload_len, destination, options)
}

/// Hides the first `amount` bytes of the payload file inside the cover file.
/// An `amount` beyond the payload size is clamped to what the file holds.
pub fn encode_amount(
    cover: impl AsRef<Path>,
    payload: impl AsRef<Path>,
    amount: u64,
    destination: impl AsRef<Path>,
    options: &StegOptions,
) -> Result<StegStatus> {
    let payload = payload.as_ref();
    let amount = amount.min(file_size(payload)?);
    let mut reader = BufReader::new(File::open(payload)?);
    encode_from_reader(cover.as_ref(), &mut reader, amount, destination.as_ref(), options)
}

/// Shared by single and multi-cover encoding: the payload arrives as an open
/// stream whose position carries over between fragments.
pub(crate) fn encode_from_reader<P: Read>(
    cover: &Path,
    payload: &mut P,
    amount: u64,
    destination: &Path,
    options: &StegOptions,
) -> Result<StegStatus> {
    let cover_len = file_size(cover)?;
    info!(
        "encoding {amount} payload bytes into {} ({cover_len} cover bytes)",
        cover.display()
    );

    let mut cover_stream = BufReader::new(File::open(cover)?);
    let mut dest_stream = BufWriter::new(File::create(destination)?);

    let status = encode_frame(
        &mut cover_stream,
        cover_len,
        payload,
        amount,
        &mut dest_stream,
        options,
    )?;
    dest_stream
        .flush()
        .map_err(|source| StegError::WriteError { source })?;

    Ok(status)
}

/// Recovers the hidden payload from a stego file into the destination file.
pub fn decode(
    encoded: impl AsRef<Path>,
    destination: impl AsRef<Path>,
    options: &StegOptions,
) -> Result<StegStatus> {
    let encoded = encoded.as_ref();
    if !encoded.exists() {
        return Err(StegError::FileNotFound(encoded.to_path_buf()));
    }
    info!("decoding hidden payload from {}", encoded.display());

    let mut dest_stream = BufWriter::new(File::create(destination)?);
    let status = decode_to_writer(encoded, &mut dest_stream, options)?;
    dest_stream
        .flush()
        .map_err(|source| StegError::WriteError { source })?;

    Ok(status)
}

/// Shared by single and multi-source decoding: fragments append to one
/// already-open destination.
pub(crate) fn decode_to_writer<W: Write>(
    encoded: &Path,
    destination: &mut W,
    options: &StegOptions,
) -> Result<StegStatus> {
    if !encoded.exists() {
        return Err(StegError::FileNotFound(encoded.to_path_buf()));
    }

    let mut stego_stream = BufReader::new(File::open(encoded)?);
    decode_frame(&mut stego_stream, destination, options)
}

/// Reports the exact cover cost of hiding the given payload file.
pub fn validate_encoding(
    cover: impl AsRef<Path>,
    payload: impl AsRef<Path>,
    options: &StegOptions,
) -> Result<EncodeValidation> {
    let payload_len = file_size(payload.as_ref())?;
    validate_encoding_amount(cover, payload_len, options)
}

/// Reports the exact cover cost of hiding `payload_len` bytes.
pub fn validate_encoding_amount(
    cover: impl AsRef<Path>,
    payload_len: u64,
    options: &StegOptions,
) -> Result<EncodeValidation> {
    let cover_len = file_size(cover.as_ref())?;

    Ok(capacity::validate(payload_len, cover_len, options))
}

pub(crate) fn file_size(path: &Path) -> Result<u64> {
    if !path.exists() {
        return Err(StegError::FileNotFound(path.to_path_buf()));
    }

    Ok(fs::metadata(path)?.len())
}
