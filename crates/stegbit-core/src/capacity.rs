//! Exact cover-byte accounting for the hidden frame.
//!
//! Every hidden bit costs one cover byte, so the breakdown is expressed in
//! cover bytes throughout: the flag byte counts as 1, the password length
//! field as 32, the password body as 8 per byte and the payload length field
//! as 64.

use crate::error::StegError;
use crate::options::StegOptions;
use crate::result::Result;

/// Computed cover-byte cost of one encode operation. Derived, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeValidation {
    pub number_of_data_blocks: u64,
    pub total_byte_skip: u64,
    /// One cover byte for the bare flag, or the password's length field and
    /// body when one is set.
    pub password_size: u64,
    pub total_bytes_required: u64,
    pub cover_file_size: u64,
}

impl EncodeValidation {
    pub fn is_sufficient(&self) -> bool {
        self.total_bytes_required <= self.cover_file_size
    }

    pub fn ensure(&self) -> Result<()> {
        if !self.is_sufficient() {
            return Err(StegError::InsufficientCapacity {
                required: self.total_bytes_required,
                available: self.cover_file_size,
            });
        }

        Ok(())
    }
}

/// Computes the exact number of cover bytes an encode with these parameters
/// will consume, next to the cover size it has to fit into.
pub fn validate(payload_len: u64, cover_len: u64, options: &StegOptions) -> EncodeValidation {
    let password_size = if options.has_password() {
        32 + options.password().len() as u64 * 8
    } else {
        1
    };

    // an empty payload has no blocks at all
    let number_of_data_blocks = if payload_len == 0 {
        0
    } else {
        (payload_len - 1) / options.data_block_size() as u64 + 1
    };

    // no skip gap follows the final block
    let total_byte_skip = number_of_data_blocks.saturating_sub(1) * options.byte_skip_per_block();

    // 64 cover bytes carry the payload length field
    let total_bytes_required =
        payload_len * 8 + total_byte_skip + options.initial_offset() + password_size + 64;

    EncodeValidation {
        number_of_data_blocks,
        total_byte_skip,
        password_size,
        total_bytes_required,
        cover_file_size: cover_len,
    }
}
