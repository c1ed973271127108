//! Grid normalization.

use crate::error::FilterError;
use haze_grid::Grid;

/// Rescale a grid of unnormalized probability mass so it sums to 1.0.
///
/// One pass sums the cells, a second divides each cell by the total. The
/// input is untouched; a fresh grid of the same dimensions is returned.
///
/// Returns `Err(FilterError::DegenerateMass)` when the total is zero,
/// negative, or non-finite — dividing by such a total would fill the
/// output with NaN or infinities instead of a distribution.
pub fn normalize(grid: &Grid) -> Result<Grid, FilterError> {
    let total = grid.total_mass();
    if !total.is_finite() || total <= 0.0 {
        return Err(FilterError::DegenerateMass { total });
    }
    let mut out = Grid::zeros_like(grid);
    for (cell, &v) in out.as_mut_slice().iter_mut().zip(grid.as_slice()) {
        *cell = v / total;
    }
    Ok(out)
}
