use std::path::PathBuf;

use super::OutputSource;
use crate::utils;

/// Helper function to be used with [`super::process_par`] for writing
/// raw output bytes to an output source.
pub fn write_bytes(inpath: Option<PathBuf>, value: Vec<u8>, out: OutputSource) -> eyre::Result<()> {
    match (out, inpath) {
        (OutputSource::Stdout, _) => utils::write_to_output_source(None, &value),
        (OutputSource::File(path), _) => utils::write_to_output_source(Some(path), &value),
        (OutputSource::Dir(mut out, suffix), Some(path)) => {
            // Name the output after the input, inside the output directory.
            let infile = path.with_extension(suffix);
            let Some(name) = infile.file_name() else {
                eyre::bail!("cannot derive an output name from '{}'", path.display());
            };
            out.push(name);

            utils::write_to_output_source(Some(out), &value)
        }

        (OutputSource::Dir(..), None) => Err(eyre::eyre!(
            "output path for stdin input is directory; specify a file path instead"
        )),
    }
}

/// Like [`write_bytes`], but for encoded text.
pub fn write_text(inpath: Option<PathBuf>, value: String, out: OutputSource) -> eyre::Result<()> {
    write_bytes(inpath, value.into_bytes(), out)
}
