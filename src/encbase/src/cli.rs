use clap::{Parser, Subcommand};

use crate::cmd::*;

mod args;

pub mod helpers;

pub mod io;
pub use io::*;

mod processor;
pub use processor::*;

pub const HYPHEN: &str = "-";

/// Encodes and decodes data with arbitrary base-N alphabets.
#[derive(Debug, Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
pub struct Cli {
    /// The selected command.
    #[clap(subcommand)]
    pub command: EncbaseCommand,

    #[clap(flatten)]
    pub verbosity: args::Verbosity,
}

/// The top-level commands supported by encbase.
#[derive(Debug, Subcommand)]
pub enum EncbaseCommand {
    Decode(decode::Decode),
    Encode(encode::Encode),
    Info(info::Info),
}

impl Command for EncbaseCommand {
    fn handle(self) -> eyre::Result<()> {
        match self {
            Self::Decode(decode) => decode.handle(),
            Self::Encode(encode) => encode.handle(),
            Self::Info(info) => info.handle(),
        }
    }
}
