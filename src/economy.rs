//! Balance, betting, and difficulty progression.

use crate::game::RoundOutcome;
use crate::options::GameOptions;

/// Settlement of a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Payout {
    /// Whether the guess was correct.
    pub outcome: RoundOutcome,
    /// Stake that was committed for the round.
    pub bet: usize,
}

impl Payout {
    /// Returns the amount gained or lost, which is always the stake.
    #[must_use]
    pub const fn amount(&self) -> usize {
        self.bet
    }

    /// Returns the amount announced to the player.
    ///
    /// A win is announced as the full return of twice the stake, a loss as
    /// the stake forfeited.
    #[must_use]
    pub const fn display_amount(&self) -> usize {
        match self.outcome {
            RoundOutcome::Win => self.bet.saturating_mul(2),
            RoundOutcome::Lose => self.bet,
        }
    }

    /// Returns the signed balance change.
    #[must_use]
    pub fn net(&self) -> isize {
        let stake = isize::try_from(self.bet).unwrap_or(isize::MAX);
        match self.outcome {
            RoundOutcome::Win => stake,
            RoundOutcome::Lose => -stake,
        }
    }
}

/// Effect of [`Economy::advance_level_if_won`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelChange {
    /// The round was lost; nothing moved.
    Unchanged,
    /// The level went up.
    Level(usize),
    /// The level went up and a cup was added.
    LevelAndCups {
        /// New level.
        level: usize,
        /// New cup count.
        cup_count: usize,
    },
}

/// Owns the player's money and progression.
///
/// The bet is kept in `1..=balance` whenever the balance is positive. Once a
/// bet is confirmed it is committed for the round and cannot be changed until
/// [`resolve_round`](Self::resolve_round) settles it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Economy {
    balance: usize,
    bet: usize,
    level: usize,
    cup_count: usize,
    committed: Option<usize>,
    starting_balance: usize,
    starting_bet: usize,
    starting_cups: usize,
    max_cups: usize,
    levels_per_cup: usize,
}

impl Economy {
    /// Creates an economy at the starting values of `options`.
    ///
    /// The options are expected to have passed [`GameOptions::validate`].
    #[must_use]
    pub fn new(options: &GameOptions) -> Self {
        let starting_bet = options.starting_bet.clamp(1, options.starting_balance.max(1));
        Self {
            balance: options.starting_balance,
            bet: starting_bet,
            level: 1,
            cup_count: options.starting_cups,
            committed: None,
            starting_balance: options.starting_balance,
            starting_bet,
            starting_cups: options.starting_cups,
            max_cups: options.max_cups,
            levels_per_cup: options.levels_per_cup.max(1),
        }
    }

    /// Returns the balance.
    #[must_use]
    pub const fn balance(&self) -> usize {
        self.balance
    }

    /// Returns the current bet.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Returns the level, starting at 1.
    #[must_use]
    pub const fn level(&self) -> usize {
        self.level
    }

    /// Returns the number of cups for the next round.
    #[must_use]
    pub const fn cup_count(&self) -> usize {
        self.cup_count
    }

    /// Returns the stake locked in for the running round.
    #[must_use]
    pub const fn committed(&self) -> Option<usize> {
        self.committed
    }

    /// Sets the bet, clamped to `1..=balance`.
    ///
    /// Returns the resulting bet, or `None` without changing anything when the
    /// balance is zero or a stake is already committed.
    ///
    /// ```
    /// use shellgame::{Economy, GameOptions};
    ///
    /// let mut economy = Economy::new(&GameOptions::default());
    /// assert_eq!(economy.set_bet(10), Some(3));
    /// assert_eq!(economy.set_bet(0), Some(1));
    /// ```
    pub fn set_bet(&mut self, amount: usize) -> Option<usize> {
        if self.balance == 0 || self.committed.is_some() {
            return None;
        }
        self.bet = amount.clamp(1, self.balance);
        Some(self.bet)
    }

    /// Moves the bet by `delta`, then clamps it like [`set_bet`](Self::set_bet).
    pub fn adjust_bet(&mut self, delta: isize) -> Option<usize> {
        self.set_bet(self.bet.saturating_add_signed(delta))
    }

    /// Pulls the bet back under the balance after a loss.
    ///
    /// Returns `true` if the bet changed.
    pub fn clamp_bet(&mut self) -> bool {
        let before = self.bet;
        if self.balance > 0 {
            self.bet = self.bet.clamp(1, self.balance);
        }
        self.bet != before
    }

    /// Locks in the current bet for the round and returns it.
    ///
    /// Confirming twice keeps the first commitment. Returns `None` if there is
    /// nothing to bet with.
    pub fn confirm_bet(&mut self) -> Option<usize> {
        if let Some(stake) = self.committed {
            return Some(stake);
        }
        if self.balance == 0 || self.bet > self.balance {
            return None;
        }
        self.committed = Some(self.bet);
        self.committed
    }

    /// Settles the round.
    ///
    /// A win adds the stake to the balance, a loss removes it. The committed
    /// stake is used when there is one, otherwise the current bet. The balance
    /// never goes below zero.
    pub fn resolve_round(&mut self, won: bool) -> Payout {
        let bet = self.committed.take().unwrap_or(self.bet);
        let outcome = if won {
            self.balance = self.balance.saturating_add(bet);
            RoundOutcome::Win
        } else {
            self.balance = self.balance.saturating_sub(bet);
            RoundOutcome::Lose
        };
        Payout { outcome, bet }
    }

    /// Advances the level after a won round.
    ///
    /// The level goes up by one and, when it lands on a multiple of
    /// `levels_per_cup`, a cup is added up to the cap. Lost rounds leave the
    /// progression untouched.
    pub const fn advance_level_if_won(&mut self, won: bool) -> LevelChange {
        if !won {
            return LevelChange::Unchanged;
        }

        self.level += 1;
        if self.level % self.levels_per_cup == 0 && self.cup_count < self.max_cups {
            self.cup_count += 1;
            LevelChange::LevelAndCups {
                level: self.level,
                cup_count: self.cup_count,
            }
        } else {
            LevelChange::Level(self.level)
        }
    }

    /// Returns whether the player is out of money.
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.balance == 0
    }

    /// Restores the starting balance, bet, level, and cup count.
    pub const fn reset(&mut self) {
        self.balance = self.starting_balance;
        self.bet = self.starting_bet;
        self.level = 1;
        self.cup_count = self.starting_cups;
        self.committed = None;
    }
}
