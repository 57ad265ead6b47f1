use clap::Args;
use encbase_codec::layout;

use super::{alphabet::AlphabetArgs, Command};
use crate::cli::{helpers, process_par, InputsOutputs, Reader};

/// Subcommand for encoding binary data into text.
#[derive(Debug, Args)]
pub struct Encode {
    #[clap(flatten)]
    alphabet: AlphabetArgs,

    #[clap(flatten)]
    args: InputsOutputs,

    /// Inserts a separator after every N symbols.
    ///
    /// Decoding such output needs the separator declared, e.g. with
    /// `encbase decode -s`.
    #[clap(short, long, default_value_t = 0)]
    group: usize,

    /// The separator placed between groups.
    #[clap(short, long, default_value = "-")]
    separator: String,

    /// Breaks the output into lines of at most N characters.
    #[clap(short, long, default_value_t = 0)]
    wrap: usize,
}

/// Groups and wraps `encoded` text, and terminates it with a line
/// break. `group` counts characters, not symbols.
pub fn format_output(encoded: &str, group: usize, separator: &str, wrap: usize) -> String {
    let grouped = layout::group(encoded, group, separator);
    let mut out = layout::wrap(&grouped, wrap);
    out.push('\n');
    out
}

impl Command for Encode {
    fn handle(self) -> eyre::Result<()> {
        let selection = self.alphabet.select()?;
        let alphabet = &selection.alphabet;
        let group = self.group * alphabet.code_length();
        let (inputs, outputs) = self.args.evaluate("txt")?;

        process_par(
            inputs,
            outputs,
            |r: Reader| {
                let bytes = r.read_to_vec()?;
                let encoded = alphabet.encode(&bytes)?;

                let out = format_output(&encoded, group, &self.separator, self.wrap);

                log::info!(
                    "Encoded {} bytes into {} {} symbols",
                    bytes.len(),
                    encoded.chars().count() / alphabet.code_length(),
                    selection.label
                );
                Ok(out)
            },
            helpers::write_text,
        )
    }
}
