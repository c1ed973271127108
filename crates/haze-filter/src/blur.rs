//! Toroidal 3x3 diffusion blur.

use crate::error::FilterError;
use crate::kernel::Kernel;
use crate::normalize::normalize;
use haze_grid::Grid;

/// Spread each cell's mass over a 3x3 toroidal window, then normalize.
///
/// Every source cell distributes its value onto itself and its eight
/// wraparound neighbours, weighted by the [`Kernel`] for `blurring`. The
/// kernel weights sum to 1.0, so the accumulation conserves total mass
/// and the final [`normalize`] only cleans up floating-point drift.
///
/// `blur(grid, 0.0)` is equivalent to `normalize(grid)`: the whole window
/// collapses onto the center.
///
/// # Errors
///
/// - `FilterError::BlurringOutOfRange` for a coefficient outside `[0, 1]`.
/// - `FilterError::DegenerateMass` when the input carries no positive
///   mass, propagated from the final normalization.
pub fn blur(grid: &Grid, blurring: f32) -> Result<Grid, FilterError> {
    let kernel = Kernel::new(blurring)?;
    normalize(&spread(grid, &kernel))
}

/// The un-normalized accumulation step of [`blur`].
///
/// Row-major over source cells, fixed offset sweep over the window. On a
/// 1-wide dimension the ±1 offsets wrap onto the same destination as the
/// 0 offset; each contribution is accumulated separately, which is the
/// intended toroidal behavior (no offset deduplication).
pub(crate) fn spread(grid: &Grid, kernel: &Kernel) -> Grid {
    let rows = grid.rows();
    let cols = grid.cols();
    let mut out = Grid::zeros_like(grid);
    let cells = out.as_mut_slice();
    for r in 0..rows {
        for c in 0..cols {
            let v = grid.get(r, c);
            for dr in -1isize..=1 {
                for dc in -1isize..=1 {
                    let nr = grid.wrap_row(r as isize + dr);
                    let nc = grid.wrap_col(c as isize + dc);
                    cells[nr * cols + nc] += v * kernel.weight(dr, dc);
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use haze_test_utils::{close_enough, close_enough_scalar, grid_of, TOLERANCE};
    use proptest::prelude::*;

    #[test]
    fn reference_scenario_center_spike() {
        let g = grid_of(&[
            &[0.0, 0.0, 0.0],
            &[0.0, 1.0, 0.0],
            &[0.0, 0.0, 0.0],
        ]);
        let b = blur(&g, 0.12).unwrap();
        let expected = grid_of(&[
            &[0.01, 0.02, 0.01],
            &[0.02, 0.88, 0.02],
            &[0.01, 0.02, 0.01],
        ]);
        assert!(close_enough(&b, &expected), "got:\n{b}");
    }

    #[test]
    fn zero_blurring_equals_normalize() {
        let g = grid_of(&[&[1.0, 3.0], &[2.0, 2.0]]);
        let b = blur(&g, 0.0).unwrap();
        let n = normalize(&g).unwrap();
        assert!(close_enough(&b, &n));
    }

    #[test]
    fn single_spike_hits_exactly_nine_cells() {
        let blurring = 0.3f32;
        let mut g = Grid::zeros(5, 5).unwrap();
        g.set(2, 2, 1.0);
        let b = blur(&g, blurring).unwrap();

        for r in 0..5usize {
            for c in 0..5usize {
                let dr = (r as isize - 2).abs();
                let dc = (c as isize - 2).abs();
                let expected = match (dr, dc) {
                    (0, 0) => 1.0 - blurring,
                    (0, 1) | (1, 0) => blurring / 6.0,
                    (1, 1) => blurring / 12.0,
                    _ => 0.0,
                };
                assert!(
                    close_enough_scalar(b.get(r, c), expected),
                    "cell ({r}, {c}): got {}, expected {expected}",
                    b.get(r, c)
                );
            }
        }
    }

    #[test]
    fn spike_on_corner_wraps_to_opposite_edges() {
        let mut g = Grid::zeros(4, 4).unwrap();
        g.set(0, 0, 1.0);
        let b = blur(&g, 0.12).unwrap();

        // NW diagonal of (0,0) wraps to (3,3); N to (3,0); W to (0,3).
        assert!(close_enough_scalar(b.get(0, 0), 0.88));
        assert!(close_enough_scalar(b.get(3, 0), 0.02));
        assert!(close_enough_scalar(b.get(0, 3), 0.02));
        assert!(close_enough_scalar(b.get(3, 3), 0.01));
        assert!(close_enough_scalar(b.get(1, 1), 0.01));
        assert!(close_enough_scalar(b.get(2, 2), 0.0));
    }

    #[test]
    fn spread_conserves_mass() {
        let g = grid_of(&[&[0.2, 1.5, 0.0], &[0.7, 0.1, 2.5]]);
        let kernel = Kernel::new(0.4).unwrap();
        let s = spread(&g, &kernel);
        assert!(
            (s.total_mass() - g.total_mass()).abs() < 1e-5,
            "mass before {} after {}",
            g.total_mass(),
            s.total_mass()
        );
    }

    #[test]
    fn single_cell_grid_collapses_onto_itself() {
        let g = grid_of(&[&[0.6]]);
        // All nine offsets wrap onto the one cell; mass stays put.
        let b = blur(&g, 0.5).unwrap();
        assert!(close_enough_scalar(b.get(0, 0), 1.0));
    }

    #[test]
    fn one_wide_row_keeps_duplicate_offset_contributions() {
        let g = grid_of(&[&[1.0, 0.0, 0.0]]);
        let b = blur(&g, 0.12).unwrap();

        // Vertical offsets wrap back onto row 0, so the source column keeps
        // center + both vertical taps: 0.88 + 2 * 0.02. Each side column
        // gets one orthogonal + two diagonal taps: 0.02 + 2 * 0.01.
        assert!(close_enough_scalar(b.get(0, 0), 0.92));
        assert!(close_enough_scalar(b.get(0, 1), 0.04));
        assert!(close_enough_scalar(b.get(0, 2), 0.04));
        assert!(close_enough_scalar(b.total_mass(), 1.0));
    }

    #[test]
    fn degenerate_input_propagates_from_normalize() {
        let g = Grid::zeros(3, 3).unwrap();
        assert!(matches!(
            blur(&g, 0.12),
            Err(FilterError::DegenerateMass { .. })
        ));
    }

    #[test]
    fn out_of_range_blurring_rejected_before_spreading() {
        let g = grid_of(&[&[1.0]]);
        assert!(matches!(
            blur(&g, 1.2),
            Err(FilterError::BlurringOutOfRange { .. })
        ));
    }

    // ── Property tests ──────────────────────────────────────────

    fn arb_mass_grid() -> impl Strategy<Value = Grid> {
        (1usize..6, 1usize..6)
            .prop_flat_map(|(rows, cols)| {
                proptest::collection::vec(0.0f32..10.0, rows * cols)
                    .prop_map(move |cells| (rows, cols, cells))
            })
            .prop_filter_map("needs positive mass", |(rows, cols, cells)| {
                if cells.iter().sum::<f32>() > 1e-3 {
                    let mut g = Grid::zeros(rows, cols).unwrap();
                    g.as_mut_slice().copy_from_slice(&cells);
                    Some(g)
                } else {
                    None
                }
            })
    }

    proptest! {
        #[test]
        fn blurred_grid_is_a_distribution(g in arb_mass_grid(), blurring in 0.0f32..=1.0) {
            let b = blur(&g, blurring).unwrap();
            prop_assert_eq!(b.rows(), g.rows());
            prop_assert_eq!(b.cols(), g.cols());
            prop_assert!(close_enough_scalar(b.total_mass(), 1.0));
            prop_assert!(b.as_slice().iter().all(|v| v.is_finite() && *v >= 0.0));
        }

        #[test]
        fn spread_mass_conservation(g in arb_mass_grid(), blurring in 0.0f32..=1.0) {
            let kernel = Kernel::new(blurring).unwrap();
            let s = spread(&g, &kernel);
            let before = g.total_mass();
            let after = s.total_mass();
            prop_assert!(
                (before - after).abs() <= TOLERANCE * before.max(1.0),
                "mass before {before} after {after}"
            );
        }
    }
}
