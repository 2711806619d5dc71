use clap::{Args, Parser, Subcommand};

use stegbit_core::{Endian, Result, StegOptions};

use crate::commands::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Encode(encode::EncodeArgs),
    Decode(decode::DecodeArgs),
    Capacity(capacity::CapacityArgs),
}

/// The codec tunables, shared by every subcommand. Encode and decode must
/// be run with identical values.
#[derive(Args, Debug)]
pub struct CodecArgs {
    /// Cover bytes copied verbatim before the hidden frame begins
    #[arg(long = "offset", value_name = "bytes", default_value = "0")]
    pub initial_offset: u64,

    /// Cover bytes copied verbatim between consecutive payload blocks
    #[arg(long = "skip", value_name = "bytes", default_value = "0")]
    pub byte_skip: u64,

    /// Payload bytes per block
    #[arg(long = "block-size", value_name = "bytes", default_value = "1")]
    pub block_size: usize,

    /// Which bit (0-7) of each touched cover byte carries a payload bit
    #[arg(long = "bit-position", value_name = "bit", default_value = "0")]
    pub bit_position: u8,

    /// Start LSB-first instead of MSB-first
    #[arg(long = "little-endian")]
    pub little_endian: bool,

    /// Flip the bit order after this many blocks, 0 never flips
    #[arg(long = "flip-frequency", value_name = "blocks", default_value = "0")]
    pub flip_frequency: u64,

    /// Password embedded in-band for identification
    #[arg(short, long, value_name = "password")]
    pub password: Option<String>,

    /// Treat the cover as a WAV file and keep its 44-byte header intact
    #[arg(long)]
    pub wav: bool,
}

impl CodecArgs {
    pub fn to_options(&self) -> Result<StegOptions> {
        let endian = if self.little_endian {
            Endian::Little
        } else {
            Endian::Big
        };

        StegOptions::new(
            self.initial_offset,
            self.byte_skip,
            self.block_size,
            self.bit_position,
            endian,
            self.flip_frequency,
            self.password.clone().unwrap_or_default(),
        )
    }
}
