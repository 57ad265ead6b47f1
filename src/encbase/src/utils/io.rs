use std::{
    fs,
    io::{self, IsTerminal, Write},
    path::PathBuf,
    process,
};

use clap::CommandFactory;
use eyre::Context;

use crate::cli::Cli;

/// Obtains a buffered reader over the contents of stdin.
///
/// This function will terminate the process and print the running
/// command's help if stdin is connected to a terminal.
pub fn stdin_reader() -> io::BufReader<io::StdinLock<'static>> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        let _ = Cli::command().print_help();
        process::exit(2);
    }

    io::BufReader::new(stdin.lock())
}

/// Writes raw bytes to a file, or to stdout when no path is given.
pub fn write_to_output_source(out: Option<PathBuf>, data: &[u8]) -> eyre::Result<()> {
    match out {
        Some(path) => {
            fs::write(&path, data)
                .with_context(|| format!("failed to write '{}'", path.display()))?;
            log::debug!("Wrote {} bytes to '{}'", data.len(), path.display());
        }

        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(data)?;
            stdout.flush()?;
        }
    }

    Ok(())
}
