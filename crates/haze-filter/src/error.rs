//! Error types for filter operations.

use std::fmt;

/// Errors from the normalize/blur update step.
///
/// Both variants are rejected up front instead of letting the arithmetic
/// run: dividing by a degenerate total would fill the output with
/// non-finite cells, and an out-of-range blurring coefficient would
/// produce meaningless (possibly negative) kernel weights.
#[derive(Clone, Debug, PartialEq)]
pub enum FilterError {
    /// The grid's total mass is zero, negative, or non-finite, so no
    /// probability distribution can be recovered from it.
    DegenerateMass {
        /// The offending total.
        total: f32,
    },
    /// The blurring coefficient is outside `[0.0, 1.0]` or non-finite.
    BlurringOutOfRange {
        /// The offending coefficient.
        value: f32,
    },
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateMass { total } => {
                write!(f, "grid total mass {total} cannot be normalized")
            }
            Self::BlurringOutOfRange { value } => {
                write!(f, "blurring coefficient {value} outside [0, 1]")
            }
        }
    }
}

impl std::error::Error for FilterError {}
