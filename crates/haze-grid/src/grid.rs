//! Rectangular 2-D probability-mass grid with toroidal index arithmetic.

use crate::error::GridError;
use std::fmt;

/// A rectangular grid of `f32` probability mass, stored flat in row-major
/// order.
///
/// Cell `(r, c)` lives at flat index `r * cols + c`. Construction
/// validates shape once (`rows >= 1`, `cols >= 1`, all rows equal length),
/// so every live `Grid` is rectangular and non-empty.
///
/// The grid's edges are toroidal: [`wrap_row`](Grid::wrap_row) and
/// [`wrap_col`](Grid::wrap_col) resolve signed out-of-range indices onto
/// the opposite side, so every cell has exactly eight neighbours.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    data: Vec<f32>,
}

impl Grid {
    /// Create a `rows x cols` grid with every cell set to 0.0.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is zero.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid);
        }
        Ok(Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        })
    }

    /// Create an all-zero grid with the same dimensions as `other`.
    ///
    /// Infallible: `other` already passed construction validation.
    pub fn zeros_like(other: &Grid) -> Self {
        Self {
            rows: other.rows,
            cols: other.cols,
            data: vec![0.0; other.rows * other.cols],
        }
    }

    /// Build a grid from nested rows.
    ///
    /// Returns `Err(GridError::EmptyGrid)` for zero rows or zero-length
    /// first row, and `Err(GridError::RaggedRow)` when any later row's
    /// length differs from the first.
    pub fn from_rows(rows: Vec<Vec<f32>>) -> Result<Self, GridError> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(GridError::EmptyGrid);
        }
        let cols = rows[0].len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(GridError::RaggedRow {
                    row: i,
                    expected: cols,
                    got: row.len(),
                });
            }
        }
        let height = rows.len();
        let mut data = Vec::with_capacity(height * cols);
        for row in rows {
            data.extend_from_slice(&row);
        }
        Ok(Self {
            rows: height,
            cols,
            data,
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells (`rows * cols`).
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Value at `(r, c)`.
    ///
    /// # Panics
    ///
    /// Panics if `r >= rows` or `c >= cols`.
    pub fn get(&self, r: usize, c: usize) -> f32 {
        assert!(r < self.rows && c < self.cols, "cell ({r}, {c}) out of bounds");
        self.data[r * self.cols + c]
    }

    /// Set the value at `(r, c)`.
    ///
    /// # Panics
    ///
    /// Panics if `r >= rows` or `c >= cols`.
    pub fn set(&mut self, r: usize, c: usize, value: f32) {
        assert!(r < self.rows && c < self.cols, "cell ({r}, {c}) out of bounds");
        self.data[r * self.cols + c] = value;
    }

    /// The cells in row-major order.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// The cells in row-major order, mutable.
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Sum of all cell values.
    pub fn total_mass(&self) -> f32 {
        self.data.iter().sum()
    }

    /// Resolve a signed row index onto the torus.
    ///
    /// Accepts any offset magnitude, not just +/-1: `wrap_row(-1)` is the
    /// last row, `wrap_row(rows)` is row 0.
    pub fn wrap_row(&self, r: isize) -> usize {
        wrap_axis(r, self.rows)
    }

    /// Resolve a signed column index onto the torus.
    pub fn wrap_col(&self, c: isize) -> usize {
        wrap_axis(c, self.cols)
    }
}

/// Wrap a signed axis value into `[0, len)`, periodic on both sides.
fn wrap_axis(val: isize, len: usize) -> usize {
    let n = len as isize;
    (((val % n) + n) % n) as usize
}

impl fmt::Display for Grid {
    /// Fixed-width rendering, one line per row. Diagnostic output only.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            for c in 0..self.cols {
                if c > 0 {
                    write!(f, "  ")?;
                }
                write!(f, "{:.5}", self.data[r * self.cols + c])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
