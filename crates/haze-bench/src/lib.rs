//! Benchmark profiles for the haze histogram-filter core.
//!
//! Provides deterministic input grids shared by the criterion benches:
//! a reference 100x100 profile (10K cells), a stress 316x316 profile
//! (~100K cells), and a sparse spike profile for blur-chain runs.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use haze_grid::Grid;
// rand_chacha 0.9 implements the rand_core 0.9 traits, which differ from
// the rand_core behind `rand::prelude`; take the traits from the crate's
// own re-export so they apply to ChaCha8Rng.
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Fill a `rows x cols` grid with deterministic pseudo-random mass in
/// `[0, 1)` derived from `seed` via a splitmix-style hash.
pub fn seeded_grid(rows: usize, cols: usize, seed: u64) -> Grid {
    let mut g = Grid::zeros(rows, cols).expect("bench profile dimensions are non-zero");
    for (i, cell) in g.as_mut_slice().iter_mut().enumerate() {
        let mut x = seed ^ (i as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
        x ^= x >> 30;
        x = x.wrapping_mul(0xBF58_476D_1CE4_E5B9);
        x ^= x >> 27;
        *cell = (x % 10_000) as f32 / 10_000.0;
    }
    g
}

/// Reference profile: 100x100 grid (10K cells).
pub fn reference_grid(seed: u64) -> Grid {
    seeded_grid(100, 100, seed)
}

/// Stress profile: 316x316 grid (~100K cells).
pub fn stress_grid(seed: u64) -> Grid {
    seeded_grid(316, 316, seed)
}

/// Sparse belief profile: `spikes` cells of positive mass at positions
/// drawn from a seeded ChaCha8 stream, the shape of a real localization
/// run's input.
pub fn spike_grid(rows: usize, cols: usize, spikes: usize, seed: u64) -> Grid {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut g = Grid::zeros(rows, cols).expect("bench profile dimensions are non-zero");
    for _ in 0..spikes {
        let r = (rng.next_u32() as usize) % rows;
        let c = (rng.next_u32() as usize) % cols;
        let mass = (rng.next_u32() % 1_000) as f32 / 1_000.0 + 0.1;
        g.set(r, c, mass);
    }
    g
}
