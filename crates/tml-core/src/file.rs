use std::fs;
use std::io;
use std::path::Path;

use crate::document::Document;

/// Loads the whole file at `path` and delegates to [`Document::parse_text`].
///
/// Deliberately thin: per spec.md §1, this is a convenience entry point,
/// not part of the hard-engineering core (mirrors `tml_parse_file`'s
/// `fopen`-then-delegate shape in `tml_parser.c`).
pub fn parse_file(path: impl AsRef<Path>) -> io::Result<Document> {
    let bytes = fs::read(path)?;
    Ok(Document::parse_text(&bytes))
}
