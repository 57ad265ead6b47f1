use std::path::PathBuf;

use clap::Args;
use encbase_codec::alphabets;
use indexmap::IndexMap;
use serde::Serialize;

use super::{alphabet::AlphabetArgs, Command};
use crate::utils;

/// Subcommand for describing an alphabet.
///
/// Prints the symbols, their bit width and the aliases a decoder
/// would accept as JSON.
#[derive(Debug, Args)]
pub struct Info {
    #[clap(flatten)]
    alphabet: AlphabetArgs,

    /// Lists the names of the standard alphabets instead.
    #[clap(long)]
    list: bool,

    /// Describes the aliases of a strict decoder.
    #[clap(long)]
    strict: bool,

    /// The file to write the description to; stdout if missing.
    #[clap(short)]
    output: Option<PathBuf>,
}

#[derive(Serialize)]
struct AlphabetInfo {
    label: String,
    len: usize,
    bits_per_symbol: u32,
    mask: u32,
    code_length: usize,
    unused_code_points: usize,
    symbols: Vec<String>,
    aliases: IndexMap<String, Vec<String>>,
    separators: String,
}

impl Command for Info {
    fn handle(self) -> eyre::Result<()> {
        if self.list {
            let mut names = alphabets::names();
            names.push("hex-pairs");
            return utils::serialize_to_output_source(self.output, &names);
        }

        let selection = self.alphabet.select()?;
        let aliases = selection.decode_aliases(self.strict, &[]);

        // Validates the aliases and separators of profiles.
        selection.decoding(&aliases, "")?;

        let alphabet = &selection.alphabet;
        let info = AlphabetInfo {
            len: alphabet.len(),
            bits_per_symbol: alphabet.bits_per_symbol(),
            mask: alphabet.mask(),
            code_length: alphabet.code_length(),
            unused_code_points: alphabet.unused_code_points(),
            symbols: alphabet.symbols(),
            aliases,
            separators: selection.separators.clone(),
            label: selection.label,
        };

        utils::serialize_to_output_source(self.output, &info)
    }
}
