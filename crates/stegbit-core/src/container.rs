//! Container-aware entry points.
//!
//! A container family with a fixed-size leading header only needs its
//! header preserved verbatim, which the core already does for any prefix:
//! each adapter is a free function that copies the caller's options and
//! pushes the initial offset past the header before delegating. The
//! caller's options value is never touched.

use std::path::Path;

use crate::capacity::EncodeValidation;
use crate::commands;
use crate::multi::{self, MultiDecodeEntry, MultiEncodeEntry};
use crate::options::StegOptions;
use crate::result::Result;
use crate::StegStatus;

/// Copies `options` and advances its initial offset past a fixed-size
/// container header, leaving the original untouched.
pub fn offset_for_header(options: &StegOptions, header_len: u64) -> StegOptions {
    let mut adjusted = options.clone();
    adjusted.set_initial_offset(options.initial_offset() + header_len);
    adjusted
}

/// WAV covers: the 44-byte RIFF/fmt/data prologue of a canonical PCM file
/// stays untouched so the stego file remains a playable WAV.
pub mod wav {
    use super::*;

    pub const HEADER_LEN: u64 = 44;

    pub fn encode(
        cover: impl AsRef<Path>,
        payload: impl AsRef<Path>,
        destination: impl AsRef<Path>,
        options: &StegOptions,
    ) -> Result<StegStatus> {
        commands::encode(
            cover,
            payload,
            destination,
            &offset_for_header(options, HEADER_LEN),
        )
    }

    pub fn decode(
        encoded: impl AsRef<Path>,
        destination: impl AsRef<Path>,
        options: &StegOptions,
    ) -> Result<StegStatus> {
        commands::decode(encoded, destination, &offset_for_header(options, HEADER_LEN))
    }

    pub fn encode_multi(
        entries: &[MultiEncodeEntry],
        payload: impl AsRef<Path>,
    ) -> Result<StegStatus> {
        let adjusted = entries
            .iter()
            .map(|entry| MultiEncodeEntry {
                options: offset_for_header(&entry.options, HEADER_LEN),
                ..entry.clone()
            })
            .collect::<Vec<_>>();
        multi::encode_multi(&adjusted, payload)
    }

    pub fn decode_multi(
        entries: &[MultiDecodeEntry],
        destination: impl AsRef<Path>,
    ) -> Result<StegStatus> {
        let adjusted = entries
            .iter()
            .map(|entry| MultiDecodeEntry {
                options: offset_for_header(&entry.options, HEADER_LEN),
                ..entry.clone()
            })
            .collect::<Vec<_>>();
        multi::decode_multi(&adjusted, destination)
    }

    pub fn validate_encoding(
        cover: impl AsRef<Path>,
        payload: impl AsRef<Path>,
        options: &StegOptions,
    ) -> Result<EncodeValidation> {
        commands::validate_encoding(cover, payload, &offset_for_header(options, HEADER_LEN))
    }
}
