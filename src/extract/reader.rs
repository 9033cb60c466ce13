use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::error::Error;
use crate::model::document::LogDocument;

/// Reads an entire `.log`/`.out` file into memory, preserving line order.
///
/// The whole file is materialized before any extractor runs. Nothing is
/// cached: repeated extraction against the same path re-reads the file.
pub fn read_log(path: impl AsRef<Path>) -> Result<LogDocument, Error> {
    let file = File::open(path)?;
    read_log_from(BufReader::new(file))
}

/// Reads a log document from any buffered source (file, stdin, in-memory
/// test data). Per-line trailing newlines are stripped; token content is
/// unaffected.
pub fn read_log_from<R: BufRead>(reader: R) -> Result<LogDocument, Error> {
    let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
    Ok(LogDocument::new(lines))
}
