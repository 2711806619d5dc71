use clap::Parser;

use stegbit_core::StegError;

mod cli;
use cli::*;
mod commands;

pub type CliResult<T> = std::result::Result<T, StegError>;

fn main() {
    env_logger::init();

    let args = CliArgs::parse();
    if let Err(err) = handle_subcommands(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn handle_subcommands(args: CliArgs) -> CliResult<()> {
    match args.command {
        Commands::Encode(encode) => encode.run(),
        Commands::Decode(decode) => decode.run(),
        Commands::Capacity(capacity) => capacity.run(),
    }
}
