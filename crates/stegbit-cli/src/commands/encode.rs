use std::path::PathBuf;

use clap::Args;

use stegbit_core::{commands, container::wav};

use crate::cli::CodecArgs;
use crate::CliResult;

/// Hides a payload file inside a cover file
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Cover file the payload hides in, used readonly
    #[arg(short = 'i', long = "in", value_name = "cover file", required = true)]
    pub cover: PathBuf,

    /// File to hide
    #[arg(short = 'd', long = "data", value_name = "payload file", required = true)]
    pub payload: PathBuf,

    /// The stego file will be stored here
    #[arg(short = 'o', long = "out", value_name = "output file", required = true)]
    pub write_to_file: PathBuf,

    #[command(flatten)]
    pub codec: CodecArgs,
}

impl EncodeArgs {
    pub fn run(self) -> CliResult<()> {
        let options = self.codec.to_options()?;

        if self.codec.wav {
            wav::encode(&self.cover, &self.payload, &self.write_to_file, &options)?;
        } else {
            commands::encode(&self.cover, &self.payload, &self.write_to_file, &options)?;
        }

        Ok(())
    }
}
