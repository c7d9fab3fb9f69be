//! Cup slots and the coin they hide.

use alloc::vec::Vec;

/// A pairwise exchange of two slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Swap {
    /// First slot index.
    pub first: usize,
    /// Second slot index.
    pub second: usize,
}

impl Swap {
    /// Creates a swap between two slots.
    #[must_use]
    pub const fn new(first: usize, second: usize) -> Self {
        Self { first, second }
    }

    /// Returns where something at `position` ends up after this swap.
    ///
    /// ```
    /// use shellgame::Swap;
    ///
    /// let swap = Swap::new(0, 2);
    /// assert_eq!(swap.track(0), 2);
    /// assert_eq!(swap.track(2), 0);
    /// assert_eq!(swap.track(1), 1);
    /// ```
    #[must_use]
    pub const fn track(self, position: usize) -> usize {
        if position == self.first {
            self.second
        } else if position == self.second {
            self.first
        } else {
            position
        }
    }
}

/// The cups on the table.
///
/// Each physical cup keeps the identity it was created with
/// (`0..len`). [`arrangement`](Self::arrangement) maps a slot to the identity
/// of the cup standing there, and the coin is tracked by slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CupSet {
    arrangement: Vec<usize>,
    coin: Option<usize>,
}

impl CupSet {
    /// Creates `count` cups in identity order with no coin placed.
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self {
            arrangement: (0..count).collect(),
            coin: None,
        }
    }

    /// Returns the number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.arrangement.len()
    }

    /// Returns whether there are no cups.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.arrangement.is_empty()
    }

    /// Returns the coin-bearing slot, if the coin has been placed.
    #[must_use]
    pub const fn coin(&self) -> Option<usize> {
        self.coin
    }

    /// Puts the coin under `slot`.
    ///
    /// Returns `false` and leaves the set untouched if `slot` does not exist.
    pub fn place_coin(&mut self, slot: usize) -> bool {
        if slot >= self.len() {
            return false;
        }
        self.coin = Some(slot);
        true
    }

    /// Exchanges two slots, carrying the coin along if it is under either.
    pub fn apply(&mut self, swap: Swap) {
        self.arrangement.swap(swap.first, swap.second);
        self.coin = self.coin.map(|slot| swap.track(slot));
    }

    /// Returns the cup identity standing at each slot.
    #[must_use]
    pub fn arrangement(&self) -> &[usize] {
        &self.arrangement
    }

    /// Returns, per slot, whether lifting that cup shows the coin.
    #[must_use]
    pub fn reveal(&self) -> Vec<bool> {
        (0..self.len()).map(|slot| self.coin == Some(slot)).collect()
    }

    /// Restores identity order with `count` cups and removes the coin.
    pub fn reset(&mut self, count: usize) {
        self.arrangement.clear();
        self.arrangement.extend(0..count);
        self.coin = None;
    }
}
