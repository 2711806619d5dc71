use std::fmt::{self, Debug, Formatter};

use crate::error::StegError;
use crate::result::Result;

/// Bit order used when spreading one payload byte over eight cover bytes.
///
/// `Big` places the most significant payload bit into the first cover byte of
/// the window, `Little` places the least significant bit first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endian {
    Big,
    Little,
}

impl Endian {
    pub fn flipped(self) -> Self {
        match self {
            Endian::Big => Endian::Little,
            Endian::Little => Endian::Big,
        }
    }
}

/// Every tunable of the codec.
///
/// The defaults describe the plainest possible scheme: no offset, no skip
/// gaps, one payload byte per block, bit 0, MSB-first, never flipping and no
/// password. A `Clone` of an options value is fully independent of the
/// original.
#[derive(Clone, PartialEq, Eq)]
pub struct StegOptions {
    /// Cover bytes copied verbatim before the hidden frame begins.
    initial_offset: u64,

    /// Cover bytes copied verbatim between consecutive payload blocks.
    byte_skip_per_block: u64,

    /// How many consecutive payload bytes are grouped into one block.
    data_block_size: usize,

    /// Which bit (0..=7) of each touched cover byte carries a payload bit.
    hidden_bit_position: u8,

    /// Bit order for the first payload block and all header fields.
    starting_endian: Endian,

    /// Blocks between endianness flips, 0 disables flipping.
    endian_change_frequency: u64,

    /// In-band identifier, empty means "no password". Not a cipher key.
    password: String,
}

/// Options end up in logs and error reports, so the password is the one
/// field that never renders literally. Its length still shows, one star per
/// byte, an empty string meaning "no password".
impl Debug for StegOptions {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("StegOptions")
            .field("initial_offset", &self.initial_offset)
            .field("byte_skip_per_block", &self.byte_skip_per_block)
            .field("data_block_size", &self.data_block_size)
            .field("hidden_bit_position", &self.hidden_bit_position)
            .field("starting_endian", &self.starting_endian)
            .field("endian_change_frequency", &self.endian_change_frequency)
            .field("password", &"*".repeat(self.password.len()))
            .finish()
    }
}

impl Default for StegOptions {
    fn default() -> Self {
        Self {
            initial_offset: 0,
            byte_skip_per_block: 0,
            data_block_size: 1,
            hidden_bit_position: 0,
            starting_endian: Endian::Big,
            endian_change_frequency: 0,
            password: String::new(),
        }
    }
}

impl StegOptions {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        initial_offset: u64,
        byte_skip_per_block: u64,
        data_block_size: usize,
        hidden_bit_position: u8,
        starting_endian: Endian,
        endian_change_frequency: u64,
        password: impl Into<String>,
    ) -> Result<Self> {
        let mut options = Self {
            initial_offset,
            byte_skip_per_block,
            starting_endian,
            endian_change_frequency,
            password: password.into(),
            ..Self::default()
        };
        options.set_data_block_size(data_block_size)?;
        options.set_hidden_bit_position(hidden_bit_position)?;

        Ok(options)
    }

    pub fn initial_offset(&self) -> u64 {
        self.initial_offset
    }

    pub fn set_initial_offset(&mut self, initial_offset: u64) {
        self.initial_offset = initial_offset;
    }

    pub fn byte_skip_per_block(&self) -> u64 {
        self.byte_skip_per_block
    }

    pub fn set_byte_skip_per_block(&mut self, byte_skip_per_block: u64) {
        self.byte_skip_per_block = byte_skip_per_block;
    }

    pub fn data_block_size(&self) -> usize {
        self.data_block_size
    }

    pub fn set_data_block_size(&mut self, data_block_size: usize) -> Result<()> {
        if data_block_size < 1 {
            return Err(StegError::InvalidBlockSize);
        }
        self.data_block_size = data_block_size;

        Ok(())
    }

    pub fn hidden_bit_position(&self) -> u8 {
        self.hidden_bit_position
    }

    pub fn set_hidden_bit_position(&mut self, hidden_bit_position: u8) -> Result<()> {
        if hidden_bit_position > 7 {
            return Err(StegError::BitPositionOutOfRange(hidden_bit_position));
        }
        self.hidden_bit_position = hidden_bit_position;

        Ok(())
    }

    pub fn starting_endian(&self) -> Endian {
        self.starting_endian
    }

    pub fn set_starting_endian(&mut self, starting_endian: Endian) {
        self.starting_endian = starting_endian;
    }

    pub fn endian_change_frequency(&self) -> u64 {
        self.endian_change_frequency
    }

    pub fn set_endian_change_frequency(&mut self, endian_change_frequency: u64) {
        self.endian_change_frequency = endian_change_frequency;
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    pub fn has_password(&self) -> bool {
        !self.password.is_empty()
    }
}
