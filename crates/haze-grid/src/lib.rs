//! Probability-mass grid type for the haze histogram filter.
//!
//! This is the leaf crate of the haze workspace. It defines [`Grid`], a
//! rectangular 2-D array of `f32` probability mass with toroidal index
//! arithmetic, and the [`GridError`] validation errors raised at
//! construction time.
//!
//! Grids are value-like: every operation in the workspace takes `&Grid`
//! and returns a fresh `Grid`. Nothing mutates a grid across an API
//! boundary, so there is no aliasing to reason about.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod grid;

pub use error::GridError;
pub use grid::Grid;
