//! Fragmentation across several cover files.
//!
//! One payload stream is carved into consecutive slices, one per entry, and
//! each slice is hidden in its own cover with its own options. Decoding
//! walks the same list in the same order and appends every recovered slice
//! to a single destination.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::capacity::EncodeValidation;
use crate::commands::{self, decode_to_writer, encode_from_reader, file_size};
use crate::error::StegError;
use crate::options::StegOptions;
use crate::result::Result;
use crate::StegStatus;

/// One fragment of a multi-cover encode: which cover carries how many
/// payload bytes, where the stego file goes and under which options.
#[derive(Debug, Clone)]
pub struct MultiEncodeEntry {
    pub cover_path: PathBuf,
    pub destination_path: PathBuf,
    pub data_amount: u64,
    pub options: StegOptions,
}

/// One fragment of a multi-source decode.
#[derive(Debug, Clone)]
pub struct MultiDecodeEntry {
    pub encoded_path: PathBuf,
    pub options: StegOptions,
}

/// Hides consecutive slices of the payload file across the entries, in list
/// order. The declared slice sizes must fit inside the payload file.
pub fn encode_multi(
    entries: &[MultiEncodeEntry],
    payload: impl AsRef<Path>,
) -> Result<StegStatus> {
    let payload = payload.as_ref();
    let payload_size = file_size(payload)?;

    let declared: u64 = entries.iter().map(|e| e.data_amount).sum();
    if declared > payload_size {
        return Err(StegError::FragmentsExceedPayload {
            declared,
            available: payload_size,
        });
    }
    info!(
        "fragmenting {declared} payload bytes over {} covers",
        entries.len()
    );

    // the stream position carries over from one fragment to the next
    let mut payload_stream = BufReader::new(File::open(payload)?);
    for entry in entries {
        debug!(
            "fragment of {} bytes into {}",
            entry.data_amount,
            entry.cover_path.display()
        );
        encode_from_reader(
            &entry.cover_path,
            &mut payload_stream,
            entry.data_amount,
            &entry.destination_path,
            &entry.options,
        )?;
    }

    Ok(StegStatus::EncodingSuccessful)
}

/// Recovers and concatenates the hidden slices of all entries, in list
/// order, into one destination file. Stops at the first password mismatch.
pub fn decode_multi(
    entries: &[MultiDecodeEntry],
    destination: impl AsRef<Path>,
) -> Result<StegStatus> {
    let mut dest_stream = BufWriter::new(File::create(destination.as_ref())?);

    for entry in entries {
        let status = decode_to_writer(&entry.encoded_path, &mut dest_stream, &entry.options)?;
        if status == StegStatus::InvalidPassword {
            return Ok(StegStatus::InvalidPassword);
        }
    }

    dest_stream
        .flush()
        .map_err(|source| StegError::WriteError { source })?;

    Ok(StegStatus::DecodingSuccessful)
}

/// Capacity breakdown for every entry of a multi-cover encode.
pub fn validate_encode_multi(entries: &[MultiEncodeEntry]) -> Result<Vec<EncodeValidation>> {
    entries
        .iter()
        .map(|entry| {
            commands::validate_encoding_amount(&entry.cover_path, entry.data_amount, &entry.options)
        })
        .collect()
}
