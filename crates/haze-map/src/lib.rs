//! Text map-file reader for the haze histogram filter.
//!
//! A map file describes a grid world one row per line, one
//! whitespace-delimited token per cell; the first character of each token
//! is the cell's color. The reader is upstream glue for a larger filter:
//! it produces a [`CharGrid`] and never touches the float grids the
//! update core operates on.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// A grid of single-character cell colors, rows outer.
pub type CharGrid = Vec<Vec<char>>;

/// Errors from reading a map file.
#[derive(Debug)]
pub enum MapError {
    /// The file could not be opened or read.
    Io(io::Error),
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "map file i/o failed: {err}"),
        }
    }
}

impl std::error::Error for MapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
        }
    }
}

impl From<io::Error> for MapError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Read a map file from disk.
///
/// Unreadable files surface as [`MapError::Io`] rather than an empty
/// grid. Blank lines produce no row.
pub fn read_map(path: impl AsRef<Path>) -> Result<CharGrid, MapError> {
    let file = File::open(path)?;
    read_map_from(BufReader::new(file))
}

/// Read a map from any buffered reader. The testable inner form of
/// [`read_map`].
pub fn read_map_from(reader: impl BufRead) -> Result<CharGrid, MapError> {
    let mut map = CharGrid::new();
    for line in reader.lines() {
        let row = read_line(&line?);
        if !row.is_empty() {
            map.push(row);
        }
    }
    Ok(map)
}

/// Parse one line of map data: first character of each token.
fn read_line(line: &str) -> Vec<char> {
    line.split_whitespace()
        .filter_map(|token| token.chars().next())
        .collect()
}

/// Render a char grid to a human-readable form, one row per line.
/// Diagnostic output only.
pub fn render_map(map: &CharGrid) -> String {
    let mut out = String::new();
    for row in map {
        for (i, cell) in row.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push(*cell);
        }
        out.push('\n');
    }
    out
}
