use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use eyre::Context;
use rayon::prelude::*;

use super::{InputSource, OutputSource};
use crate::utils;

/// A reader over a compatible input source.
pub enum Reader {
    Stdin(Vec<u8>),
    File(io::BufReader<fs::File>),
}

impl Reader {
    /// Reads the whole input into memory.
    pub fn read_to_vec(self) -> io::Result<Vec<u8>> {
        match self {
            Self::Stdin(buf) => Ok(buf),
            Self::File(mut f) => {
                let size = f
                    .get_ref()
                    .metadata()
                    .map(|m| m.len() as usize)
                    .unwrap_or(0);
                let mut buf = Vec::with_capacity(size);
                f.read_to_end(&mut buf)?;

                #[cfg(windows)]
                blocking::unblock(move || drop(f)).detach();

                Ok(buf)
            }
        }
    }

    /// Reads the whole input into memory as UTF-8 text.
    pub fn read_to_string(self) -> eyre::Result<String> {
        let buf = self.read_to_vec()?;
        String::from_utf8(buf).context("encoded input is not valid UTF-8")
    }
}

fn open_stdin() -> eyre::Result<Reader> {
    let mut stdin = utils::stdin_reader();
    let mut buf = Vec::new();
    stdin.read_to_end(&mut buf)?;

    Ok(Reader::Stdin(buf))
}

fn open_file(path: &Path) -> eyre::Result<Reader> {
    log::debug!("Reading '{}'", path.display());

    let file =
        fs::File::open(path).with_context(|| format!("failed to open '{}'", path.display()))?;
    Ok(Reader::File(io::BufReader::new(file)))
}

/// Runs `read` on every input and hands the results to `write`.
///
/// Globbed inputs are processed in parallel; each one goes through
/// its own call to `read`, so no codec state is shared between files.
pub fn process_par<T, R, W>(
    input: InputSource,
    output: OutputSource,
    read: R,
    write: W,
) -> eyre::Result<()>
where
    T: Send,
    R: Fn(Reader) -> eyre::Result<T> + Sync,
    W: Fn(Option<PathBuf>, T, OutputSource) -> eyre::Result<()> + Sync,
{
    match (input, output) {
        (InputSource::Stdin, out) => {
            let value = read(open_stdin()?)?;
            write(None, value, out)
        }

        (InputSource::File(path), out) => {
            let value = read(open_file(&path)?)
                .with_context(|| format!("failed to process '{}'", path.display()))?;
            write(Some(path), value, out)
        }

        (InputSource::Files(paths), OutputSource::Dir(dir, suffix)) => {
            fs::create_dir_all(&dir)?;
            log::info!("Processing {} files into '{}'", paths.len(), dir.display());

            paths.into_par_iter().try_for_each(|path| {
                let value = read(open_file(&path)?)
                    .with_context(|| format!("failed to process '{}'", path.display()))?;
                write(Some(path), value, OutputSource::Dir(dir.clone(), suffix))
            })
        }

        _ => unreachable!("invalid input/output combination"),
    }
}
