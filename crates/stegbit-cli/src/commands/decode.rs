use std::path::PathBuf;

use clap::Args;

use stegbit_core::{commands, container::wav, StegStatus};

use crate::cli::CodecArgs;
use crate::CliResult;

/// Recovers a hidden payload from a stego file
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Stego file that contains hidden data
    #[arg(short = 'i', long = "in", value_name = "stego file", required = true)]
    pub stego: PathBuf,

    /// The recovered payload will be stored here
    #[arg(short = 'o', long = "out", value_name = "output file", required = true)]
    pub write_to_file: PathBuf,

    #[command(flatten)]
    pub codec: CodecArgs,
}

impl DecodeArgs {
    pub fn run(self) -> CliResult<()> {
        let options = self.codec.to_options()?;

        let status = if self.codec.wav {
            wav::decode(&self.stego, &self.write_to_file, &options)?
        } else {
            commands::decode(&self.stego, &self.write_to_file, &options)?
        };

        if status == StegStatus::InvalidPassword {
            eprintln!("invalid password: the stego file does not carry this password");
            std::process::exit(2);
        }

        Ok(())
    }
}
