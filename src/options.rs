//! Game configuration options.

use core::time::Duration;

use crate::error::ConfigError;

/// Configuration options for a shell game session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use core::time::Duration;
/// use shellgame::GameOptions;
///
/// let options = GameOptions::default()
///     .with_starting_balance(10)
///     .with_shuffle_steps(12)
///     .with_reveal_delay(Duration::from_secs(1));
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Balance at the start of a game.
    pub starting_balance: usize,
    /// Bet at the start of a game.
    pub starting_bet: usize,
    /// Number of cups at the start of a game.
    pub starting_cups: usize,
    /// Upper bound on the number of cups.
    pub max_cups: usize,
    /// A cup is added each time the level reaches a multiple of this value.
    pub levels_per_cup: usize,
    /// Number of pairwise swaps performed each round.
    pub shuffle_steps: usize,
    /// How long the coin stays visible before shuffling.
    pub coin_display: Duration,
    /// Time allotted to each swap, movement and pause included.
    pub swap_interval: Duration,
    /// How long the cups stay open before the round is settled.
    pub reveal_delay: Duration,
    /// Pause between a settled round and the next betting phase.
    pub next_round_delay: Duration,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            starting_balance: 3,
            starting_bet: 1,
            starting_cups: 3,
            max_cups: 6,
            levels_per_cup: 3,
            shuffle_steps: 8,
            coin_display: Duration::from_secs(2),
            swap_interval: Duration::from_millis(500),
            reveal_delay: Duration::from_millis(1500),
            next_round_delay: Duration::from_secs(2),
        }
    }
}

impl GameOptions {
    /// Checks that the options describe a playable game.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two cups are configured, the cap is
    /// below the starting cup count, the starting balance or bet is zero, the
    /// bet exceeds the balance, or `levels_per_cup` is zero.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.starting_cups < 2 {
            return Err(ConfigError::TooFewCups(self.starting_cups));
        }
        if self.max_cups < self.starting_cups {
            return Err(ConfigError::MaxBelowStart {
                start: self.starting_cups,
                max: self.max_cups,
            });
        }
        if self.starting_balance == 0 {
            return Err(ConfigError::ZeroBalance);
        }
        if self.starting_bet == 0 {
            return Err(ConfigError::ZeroBet);
        }
        if self.starting_bet > self.starting_balance {
            return Err(ConfigError::BetExceedsBalance);
        }
        if self.levels_per_cup == 0 {
            return Err(ConfigError::ZeroLevelStep);
        }
        Ok(())
    }

    /// Sets the starting balance.
    ///
    /// # Example
    ///
    /// ```
    /// use shellgame::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_balance(20);
    /// assert_eq!(options.starting_balance, 20);
    /// ```
    #[must_use]
    pub const fn with_starting_balance(mut self, balance: usize) -> Self {
        self.starting_balance = balance;
        self
    }

    /// Sets the starting bet.
    #[must_use]
    pub const fn with_starting_bet(mut self, bet: usize) -> Self {
        self.starting_bet = bet;
        self
    }

    /// Sets the starting number of cups.
    ///
    /// # Example
    ///
    /// ```
    /// use shellgame::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_cups(4);
    /// assert_eq!(options.starting_cups, 4);
    /// ```
    #[must_use]
    pub const fn with_starting_cups(mut self, cups: usize) -> Self {
        self.starting_cups = cups;
        self
    }

    /// Sets the maximum number of cups.
    #[must_use]
    pub const fn with_max_cups(mut self, cups: usize) -> Self {
        self.max_cups = cups;
        self
    }

    /// Sets how many levels pass between cup additions.
    #[must_use]
    pub const fn with_levels_per_cup(mut self, levels: usize) -> Self {
        self.levels_per_cup = levels;
        self
    }

    /// Sets the number of swaps per round.
    ///
    /// # Example
    ///
    /// ```
    /// use shellgame::GameOptions;
    ///
    /// let options = GameOptions::default().with_shuffle_steps(0);
    /// assert_eq!(options.shuffle_steps, 0);
    /// ```
    #[must_use]
    pub const fn with_shuffle_steps(mut self, steps: usize) -> Self {
        self.shuffle_steps = steps;
        self
    }

    /// Sets how long the coin is shown before shuffling.
    #[must_use]
    pub const fn with_coin_display(mut self, duration: Duration) -> Self {
        self.coin_display = duration;
        self
    }

    /// Sets the time per swap.
    #[must_use]
    pub const fn with_swap_interval(mut self, duration: Duration) -> Self {
        self.swap_interval = duration;
        self
    }

    /// Sets how long the cups stay revealed.
    #[must_use]
    pub const fn with_reveal_delay(mut self, duration: Duration) -> Self {
        self.reveal_delay = duration;
        self
    }

    /// Sets the pause between rounds.
    #[must_use]
    pub const fn with_next_round_delay(mut self, duration: Duration) -> Self {
        self.next_round_delay = duration;
        self
    }
}
