//! Error types for grid construction.

use std::fmt;

/// Errors arising from grid construction.
///
/// All variants are precondition violations surfaced eagerly: once a
/// [`Grid`](crate::Grid) exists it is rectangular and non-empty, and the
/// rest of the workspace relies on that.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Attempted to construct a grid with zero rows or zero columns.
    EmptyGrid,
    /// An input row's length differs from the first row's length.
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        got: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one row and one column"),
            Self::RaggedRow { row, expected, got } => {
                write!(f, "row {row} has length {got}, expected {expected}")
            }
        }
    }
}

impl std::error::Error for GridError {}
