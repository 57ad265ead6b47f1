use std::path::PathBuf;

use clap::Args;
use glob::glob;

use crate::cli::HYPHEN;

/// Where the data to transcode comes from.
#[derive(Clone, Debug)]
pub enum InputSource {
    /// Standard input.
    Stdin,
    /// One file on disk.
    File(PathBuf),
    /// Every file matched by a glob pattern.
    Files(Vec<PathBuf>),
}

/// Where transcoded data goes to.
#[derive(Clone, Debug)]
pub enum OutputSource {
    /// Standard output.
    Stdout,
    /// One file on disk.
    File(PathBuf),
    /// A directory receiving one output file per input file.
    ///
    /// Output files are named after their inputs, with the extension
    /// replaced by the suffix.
    Dir(PathBuf, &'static str),
}

/// Input and output options shared by the transcoding commands.
#[derive(Debug, Args)]
pub struct InputsOutputs {
    /// The data to process.
    ///
    /// "-" reads from stdin. Anything else is a file path, which may
    /// be a UNIX glob pattern to process many files at once.
    ///
    /// When a pattern matches several files, the output option has
    /// to name a directory.
    pub input: String,

    /// Where to write the results.
    ///
    /// Defaults to "-" for stdout. Takes a file path for a single
    /// input, or a directory which receives one file per input.
    #[clap(short, default_value = HYPHEN)]
    pub output: PathBuf,
}

impl InputsOutputs {
    /// Resolves the arguments into input and output sources.
    ///
    /// `suffix` is the extension given to files created in an
    /// output directory.
    pub fn evaluate(self, suffix: &'static str) -> eyre::Result<(InputSource, OutputSource)> {
        let inputs = self.input_source()?;
        let outputs = self.output_source(suffix, &inputs)?;

        Ok((inputs, outputs))
    }

    fn input_source(&self) -> eyre::Result<InputSource> {
        if self.input == HYPHEN {
            return Ok(InputSource::Stdin);
        }

        // Plain paths are valid glob patterns matching themselves.
        let mut paths: Vec<PathBuf> = glob(&self.input)?.collect::<Result<_, _>>()?;
        match paths.len() {
            0 => Err(eyre::eyre!("failed to find files matching '{}'", self.input)),
            1 => Ok(InputSource::File(paths.remove(0))),
            _ => Ok(InputSource::Files(paths)),
        }
    }

    fn output_source(
        self,
        suffix: &'static str,
        input: &InputSource,
    ) -> eyre::Result<OutputSource> {
        if self.output.as_os_str() == HYPHEN {
            if let InputSource::Files(paths) = input {
                eyre::bail!(
                    "'{}' matches {} files; specify an output directory with -o",
                    self.input,
                    paths.len()
                );
            }

            return Ok(OutputSource::Stdout);
        }

        Ok(match input {
            InputSource::Files(..) => OutputSource::Dir(self.output, suffix),
            _ if self.output.is_dir() => OutputSource::Dir(self.output, suffix),
            InputSource::Stdin | InputSource::File(..) => OutputSource::File(self.output),
        })
    }
}
