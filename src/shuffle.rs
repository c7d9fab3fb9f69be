//! The shuffle engine.
//!
//! A shuffle is a fixed number of pairwise swaps between distinct slots. The
//! coin position is updated after every swap, before the next pair is drawn,
//! so the swap list replayed in order always reproduces the reported final
//! position.

use alloc::vec::Vec;

use tracing::trace;

use crate::cups::{CupSet, Swap};
use crate::error::ShuffleError;
use crate::rng::{RandomSource, draw};

/// Result of a complete shuffle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShuffleOutcome {
    /// Slot holding the coin after the last swap.
    pub coin_position: usize,
    /// Swaps in the order they were applied.
    pub swaps: Vec<Swap>,
    /// Cup identity standing at each slot after the last swap.
    pub arrangement: Vec<usize>,
}

/// Redraws allowed for the second slot of a pair before giving up.
pub const MAX_REDRAWS: usize = 64;

/// Picks two distinct slots out of `cup_count`.
///
/// The second slot is redrawn until it differs from the first, at most
/// [`MAX_REDRAWS`] times.
///
/// # Errors
///
/// Returns an error if `cup_count` is below two, the random source returns
/// an out-of-range index, or it keeps repeating the first slot.
pub fn pick_pair<R: RandomSource + ?Sized>(
    rng: &mut R,
    cup_count: usize,
) -> Result<Swap, ShuffleError> {
    if cup_count < 2 {
        return Err(ShuffleError::TooFewCups(cup_count));
    }

    let first = draw(rng, cup_count)?;
    for _ in 0..=MAX_REDRAWS {
        let second = draw(rng, cup_count)?;
        if second != first {
            return Ok(Swap::new(first, second));
        }
    }

    Err(ShuffleError::RngStuck { bound: cup_count })
}

/// Performs a single swap on `cups` and returns it.
///
/// # Errors
///
/// Returns an error if fewer than two cups are in play, the coin has not been
/// placed on a valid slot, or the random source misbehaves.
pub fn shuffle_step<R: RandomSource + ?Sized>(
    cups: &mut CupSet,
    rng: &mut R,
) -> Result<Swap, ShuffleError> {
    let cup_count = cups.len();
    if cup_count < 2 {
        return Err(ShuffleError::TooFewCups(cup_count));
    }
    if cups.coin().is_none() {
        return Err(ShuffleError::CoinNotPlaced);
    }

    let swap = pick_pair(rng, cup_count)?;
    cups.apply(swap);
    trace!(
        first = swap.first,
        second = swap.second,
        coin = ?cups.coin(),
        "swapped cups"
    );

    Ok(swap)
}

/// Shuffles `cup_count` cups with the coin starting at `coin_position`.
///
/// `steps` may be zero, in which case the input comes back unchanged.
///
/// # Example
///
/// ```
/// use shellgame::{seeded, shuffle};
///
/// let mut rng = seeded(7);
/// let outcome = shuffle(&mut rng, 3, 1, 8).unwrap();
/// assert_eq!(outcome.swaps.len(), 8);
/// let replayed = outcome.swaps.iter().fold(1, |coin, swap| swap.track(coin));
/// assert_eq!(replayed, outcome.coin_position);
/// ```
///
/// # Errors
///
/// Returns an error if `cup_count` is below two, `coin_position` is not a
/// slot, or the random source returns an out-of-range index.
pub fn shuffle<R: RandomSource + ?Sized>(
    rng: &mut R,
    cup_count: usize,
    coin_position: usize,
    steps: usize,
) -> Result<ShuffleOutcome, ShuffleError> {
    if cup_count < 2 {
        return Err(ShuffleError::TooFewCups(cup_count));
    }

    let mut cups = CupSet::new(cup_count);
    if !cups.place_coin(coin_position) {
        return Err(ShuffleError::CoinOutOfRange {
            coin: coin_position,
            cup_count,
        });
    }

    let mut swaps = Vec::with_capacity(steps);
    for _ in 0..steps {
        swaps.push(shuffle_step(&mut cups, rng)?);
    }

    Ok(ShuffleOutcome {
        coin_position: cups.coin().unwrap_or(coin_position),
        swaps,
        arrangement: cups.arrangement().to_vec(),
    })
}
