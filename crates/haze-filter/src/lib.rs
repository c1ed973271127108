//! Probabilistic update step of a 2-D toroidal histogram filter.
//!
//! Two pure operations over [`haze_grid::Grid`]:
//!
//! 1. [`normalize`](fn@normalize) — rescale a grid of unnormalized
//!    probability mass so it sums to 1.0.
//! 2. [`blur`](fn@blur) — spread each cell's mass over a 3x3 toroidal
//!    window weighted by a [`Kernel`], then normalize the result.
//!
//! Both consume a borrowed grid and return a fresh one; neither performs
//! any I/O. `blur` composes `normalize` rather than duplicating it.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod blur;
pub mod error;
pub mod kernel;
pub mod normalize;

pub use blur::blur;
pub use error::FilterError;
pub use kernel::Kernel;
pub use normalize::normalize;
