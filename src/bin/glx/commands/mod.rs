mod energy;
mod geom;
mod info;
mod spectra;

use std::io::Write as _;

use anyhow::{Context as _, Result, bail};

use gausslog::LogDocument;
use gausslog::extract;

use crate::cli::{Command, IoOptions};
use crate::display::Context;
use crate::io::{create_output, stdin_is_tty};

pub fn dispatch(command: Command, ctx: Context) -> Result<()> {
    match command {
        Command::Info(args) => info::run(args, ctx),
        Command::Energy(args) => energy::run(args, ctx),
        Command::Spectra(args) => spectra::run(args, ctx),
        Command::Geom(args) => geom::run(args, ctx),
    }
}

/// Loads the whole log into memory before any extractor runs.
fn load_document(io: &IoOptions) -> Result<LogDocument> {
    match &io.input {
        Some(path) => extract::read_log(path)
            .with_context(|| format!("Failed to read log file: {}", path.display())),
        None => {
            if stdin_is_tty() {
                bail!(
                    "No input file specified and stdin is a terminal.\n\nUsage: glx <COMMAND> -i <FILE> or pipe a log via stdin."
                );
            }
            extract::read_log_from(std::io::stdin().lock())
                .context("Failed to read log from stdin")
        }
    }
}

/// Writes the rendered result verbatim to the selected output.
fn write_result(io: &IoOptions, text: &str) -> Result<()> {
    let mut out = create_output(io.output.as_deref())?;
    out.write_all(text.as_bytes())
        .context("Failed to write result")?;
    out.flush().context("Failed to flush output")?;
    Ok(())
}
