//! Round phases and the transition table.

/// Result of a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundOutcome {
    /// The guessed cup hid the coin.
    Win,
    /// The guessed cup was empty.
    Lose,
}

impl RoundOutcome {
    /// Returns whether the round was won.
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::Win)
    }
}

/// Phase of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundPhase {
    /// The player adjusts and confirms a bet.
    Betting,
    /// The coin is visible under its cup.
    ShowingCoin,
    /// Cups are being swapped.
    Shuffling,
    /// Waiting for the player to pick a cup.
    Guessing,
    /// All cups are lifted.
    Revealing,
    /// The round is settled.
    RoundResolved(RoundOutcome),
    /// The player is out of money; only a new game is accepted.
    GameOver,
}

/// Something that can move a round forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// The player confirmed the bet.
    ConfirmBet,
    /// The coin display timer elapsed.
    CoinDisplayElapsed,
    /// The last swap finished.
    ShuffleComplete,
    /// The player picked a cup.
    CupSelected,
    /// The reveal timer elapsed; the round settles with this outcome.
    RevealElapsed(RoundOutcome),
    /// The settled round left money to play with.
    NextRound,
    /// The settled round emptied the balance.
    Bankrupt,
    /// The player asked for a new game.
    NewGame,
}

impl Trigger {
    /// Every trigger, with each outcome for [`Trigger::RevealElapsed`].
    pub const ALL: [Self; 9] = [
        Self::ConfirmBet,
        Self::CoinDisplayElapsed,
        Self::ShuffleComplete,
        Self::CupSelected,
        Self::RevealElapsed(RoundOutcome::Win),
        Self::RevealElapsed(RoundOutcome::Lose),
        Self::NextRound,
        Self::Bankrupt,
        Self::NewGame,
    ];
}

impl RoundPhase {
    /// Every phase.
    pub const ALL: [Self; 8] = [
        Self::Betting,
        Self::ShowingCoin,
        Self::Shuffling,
        Self::Guessing,
        Self::Revealing,
        Self::RoundResolved(RoundOutcome::Win),
        Self::RoundResolved(RoundOutcome::Lose),
        Self::GameOver,
    ];

    /// Returns the phase `trigger` leads to, or `None` if it is not legal here.
    ///
    /// ```
    /// use shellgame::{RoundPhase, Trigger};
    ///
    /// assert_eq!(
    ///     RoundPhase::Betting.next(Trigger::ConfirmBet),
    ///     Some(RoundPhase::ShowingCoin)
    /// );
    /// assert_eq!(RoundPhase::Shuffling.next(Trigger::CupSelected), None);
    /// ```
    #[must_use]
    pub const fn next(self, trigger: Trigger) -> Option<Self> {
        match (self, trigger) {
            (Self::Betting, Trigger::ConfirmBet) => Some(Self::ShowingCoin),
            (Self::ShowingCoin, Trigger::CoinDisplayElapsed) => Some(Self::Shuffling),
            (Self::Shuffling, Trigger::ShuffleComplete) => Some(Self::Guessing),
            (Self::Guessing, Trigger::CupSelected) => Some(Self::Revealing),
            (Self::Revealing, Trigger::RevealElapsed(outcome)) => {
                Some(Self::RoundResolved(outcome))
            }
            (Self::RoundResolved(_), Trigger::NextRound) | (Self::GameOver, Trigger::NewGame) => {
                Some(Self::Betting)
            }
            (Self::RoundResolved(_), Trigger::Bankrupt) => Some(Self::GameOver),
            _ => None,
        }
    }

    /// Returns whether bet adjustments are accepted.
    #[must_use]
    pub const fn accepts_bet_input(self) -> bool {
        matches!(self, Self::Betting)
    }

    /// Returns whether a cup can be selected.
    #[must_use]
    pub const fn accepts_selection(self) -> bool {
        matches!(self, Self::Guessing)
    }

    /// Returns whether the coin is visible to the player.
    #[must_use]
    pub const fn coin_visible(self) -> bool {
        matches!(
            self,
            Self::ShowingCoin | Self::Revealing | Self::RoundResolved(_)
        )
    }
}
