//! Test utilities for haze development.
//!
//! Approximate-equality helpers for battling floating-point error in
//! assertions, plus a literal-rows grid builder. Consumed exclusively
//! through dev-dependencies; the core crates never rely on these.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use haze_grid::Grid;

/// Absolute per-cell tolerance used by the equality helpers.
pub const TOLERANCE: f32 = 1e-4;

/// Whether two grids are "close enough" to be considered equal:
/// identical dimensions and every cell within [`TOLERANCE`].
pub fn close_enough(a: &Grid, b: &Grid) -> bool {
    if a.rows() != b.rows() || a.cols() != b.cols() {
        return false;
    }
    a.as_slice()
        .iter()
        .zip(b.as_slice())
        .all(|(&x, &y)| (x - y).abs() <= TOLERANCE)
}

/// Scalar form of [`close_enough`].
pub fn close_enough_scalar(a: f32, b: f32) -> bool {
    (a - b).abs() <= TOLERANCE
}

/// Build a grid from borrowed row literals.
///
/// # Panics
///
/// Panics on empty or ragged input; test fixtures are expected to be
/// well-formed.
pub fn grid_of(rows: &[&[f32]]) -> Grid {
    Grid::from_rows(rows.iter().map(|r| r.to_vec()).collect())
        .expect("test fixture grids must be rectangular and non-empty")
}
