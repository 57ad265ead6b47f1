use clap::Args;

use super::{
    alphabet::{parse_alias, AlphabetArgs},
    Command,
};
use crate::cli::{helpers, process_par, InputsOutputs, Reader};

/// Subcommand for decoding text back into binary data.
///
/// Line breaks in the input are always skipped, unless the alphabet
/// itself uses them.
#[derive(Debug, Args)]
pub struct Decode {
    #[clap(flatten)]
    alphabet: AlphabetArgs,

    #[clap(flatten)]
    args: InputsOutputs,

    /// Declares symbols that decode like a canonical symbol.
    ///
    /// Given as CANONICAL=ALIAS[,ALIAS...] and may be repeated.
    #[clap(long = "alias", value_parser = parse_alias)]
    aliases: Vec<(String, Vec<String>)>,

    /// Characters to skip over in the input.
    #[clap(short, long, default_value = "")]
    separators: String,

    /// Disables the default Crockford aliases of base32.
    #[clap(long)]
    strict: bool,
}

impl Command for Decode {
    fn handle(self) -> eyre::Result<()> {
        let selection = self.alphabet.select()?;
        let aliases = selection.decode_aliases(self.strict, &self.aliases);
        let decoding = selection.decoding(&aliases, &self.separators)?;
        let (inputs, outputs) = self.args.evaluate("bin")?;

        process_par(
            inputs,
            outputs,
            |r: Reader| {
                let text = r.read_to_string()?;
                let bytes = decoding.decode(&text)?;

                log::info!("Decoded {} {} bytes", bytes.len(), selection.label);
                Ok(bytes)
            },
            helpers::write_bytes,
        )
    }
}
