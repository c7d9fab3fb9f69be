//! Random sources for coin placement and swap selection.

use alloc::boxed::Box;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::ShuffleError;

/// Supplies uniform indices for coin placement and shuffling.
///
/// Implement this to script the engine in tests or to plug in an external
/// entropy source.
pub trait RandomSource {
    /// Returns a uniformly distributed value in `0..bound`.
    ///
    /// Callers never pass a `bound` of zero.
    fn next_index(&mut self, bound: usize) -> usize;
}

impl RandomSource for ChaCha8Rng {
    fn next_index(&mut self, bound: usize) -> usize {
        self.random_range(0..bound)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_index(&mut self, bound: usize) -> usize {
        (**self).next_index(bound)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_index(&mut self, bound: usize) -> usize {
        (**self).next_index(bound)
    }
}

/// Creates the default deterministic generator for `seed`.
#[must_use]
pub fn seeded(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Draws an index and checks that the source honoured `bound`.
pub(crate) fn draw<R: RandomSource + ?Sized>(
    rng: &mut R,
    bound: usize,
) -> Result<usize, ShuffleError> {
    let value = rng.next_index(bound);
    if value < bound {
        Ok(value)
    } else {
        Err(ShuffleError::RngOutOfRange { value, bound })
    }
}
