use std::path::PathBuf;

use clap::Args;

use stegbit_core::{commands, container::wav};

use crate::cli::CodecArgs;
use crate::CliResult;

/// Shows how many cover bytes hiding a payload would take
#[derive(Args, Debug)]
pub struct CapacityArgs {
    /// Cover file to measure
    #[arg(short = 'i', long = "in", value_name = "cover file", required = true)]
    pub cover: PathBuf,

    /// Payload file to measure against
    #[arg(short = 'd', long = "data", value_name = "payload file", required = true)]
    pub payload: PathBuf,

    #[command(flatten)]
    pub codec: CodecArgs,
}

impl CapacityArgs {
    pub fn run(self) -> CliResult<()> {
        let options = self.codec.to_options()?;

        let validation = if self.codec.wav {
            wav::validate_encoding(&self.cover, &self.payload, &options)?
        } else {
            commands::validate_encoding(&self.cover, &self.payload, &options)?
        };

        println!("data blocks:          {}", validation.number_of_data_blocks);
        println!("skip bytes:           {}", validation.total_byte_skip);
        println!("password cover bytes: {}", validation.password_size);
        println!("total bytes required: {}", validation.total_bytes_required);
        println!("cover file size:      {}", validation.cover_file_size);
        println!(
            "verdict:              {}",
            if validation.is_sufficient() {
                "fits"
            } else {
                "does not fit"
            }
        );

        Ok(())
    }
}
