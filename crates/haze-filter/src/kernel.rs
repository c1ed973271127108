//! 3x3 diffusion kernel derived from a blurring coefficient.

use crate::error::FilterError;

/// The 3x3 weight window applied by [`blur`](crate::blur::blur).
///
/// Derived from a single `blurring` coefficient in `[0.0, 1.0]`:
///
/// - center weight `1 - blurring` (mass that stays put),
/// - the 4 orthogonal neighbours `blurring / 6` each,
/// - the 4 diagonal neighbours `blurring / 12` each.
///
/// The nine weights sum to 1.0 for any valid coefficient, which is what
/// makes the blur's accumulation step mass-conserving. The window is
/// symmetric on both axes, so [`weight`](Kernel::weight) is insensitive
/// to the order of its two offset arguments.
#[derive(Clone, Debug, PartialEq)]
pub struct Kernel {
    weights: [[f32; 3]; 3],
}

impl Kernel {
    /// Build the kernel for a blurring coefficient.
    ///
    /// Returns `Err(FilterError::BlurringOutOfRange)` when `blurring` is
    /// non-finite or outside `[0.0, 1.0]`.
    pub fn new(blurring: f32) -> Result<Self, FilterError> {
        if !blurring.is_finite() || !(0.0..=1.0).contains(&blurring) {
            return Err(FilterError::BlurringOutOfRange { value: blurring });
        }
        let center = 1.0 - blurring;
        let adjacent = blurring / 6.0;
        let corner = blurring / 12.0;
        Ok(Self {
            weights: [
                [corner, adjacent, corner],
                [adjacent, center, adjacent],
                [corner, adjacent, corner],
            ],
        })
    }

    /// Weight for the destination at offset `(dr, dc)`, each in `{-1, 0, 1}`.
    ///
    /// # Panics
    ///
    /// Panics if either offset is outside `{-1, 0, 1}`.
    pub fn weight(&self, dr: isize, dc: isize) -> f32 {
        self.weights[(dr + 1) as usize][(dc + 1) as usize]
    }
}
