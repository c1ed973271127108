//! Haze: the probabilistic update step of a 2-D toroidal histogram filter.
//!
//! This is the facade crate re-exporting the public API of the haze
//! sub-crates. For most users a single `haze` dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use haze::prelude::*;
//!
//! // A 3x3 belief with all mass on the center cell.
//! let mut belief = Grid::zeros(3, 3).unwrap();
//! belief.set(1, 1, 1.0);
//!
//! // Spill 12% of each cell's mass into its toroidal neighbourhood.
//! let blurred = blur(&belief, 0.12).unwrap();
//!
//! assert!((blurred.get(1, 1) - 0.88).abs() < 1e-4);
//! assert!((blurred.total_mass() - 1.0).abs() < 1e-4);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! - [`grid`] (`haze-grid`) — the [`Grid`](prelude::Grid) value type and
//!   toroidal index arithmetic.
//! - [`filter`] (`haze-filter`) — [`normalize`](prelude::normalize),
//!   [`blur`](prelude::blur), and the 3x3 [`Kernel`](prelude::Kernel).
//! - [`map`] (`haze-map`) — the text map-file reader.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub use haze_filter as filter;
pub use haze_grid as grid;
pub use haze_map as map;

/// The types and functions most callers need.
pub mod prelude {
    pub use haze_filter::{blur, normalize, FilterError, Kernel};
    pub use haze_grid::{Grid, GridError};
    pub use haze_map::{read_map, CharGrid, MapError};
}
