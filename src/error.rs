//! Error types for session construction, shuffling, and player commands.

use thiserror::Error;

use crate::game::RoundPhase;

/// Errors raised when [`GameOptions`](crate::GameOptions) cannot start a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Fewer than two cups leaves nothing to shuffle.
    #[error("at least two cups are required, got {0}")]
    TooFewCups(usize),
    /// The difficulty cap is below the starting cup count.
    #[error("max cups ({max}) is below starting cups ({start})")]
    MaxBelowStart {
        /// Configured starting cup count.
        start: usize,
        /// Configured cap.
        max: usize,
    },
    /// Starting balance is zero.
    #[error("starting balance is zero")]
    ZeroBalance,
    /// Starting bet is zero.
    #[error("starting bet is zero")]
    ZeroBet,
    /// Starting bet exceeds the starting balance.
    #[error("starting bet exceeds starting balance")]
    BetExceedsBalance,
    /// Cup count would never advance.
    #[error("levels per cup is zero")]
    ZeroLevelStep,
}

/// Precondition violations in the shuffle engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShuffleError {
    /// Two distinct slots cannot be picked from fewer than two cups.
    #[error("cannot shuffle {0} cup(s)")]
    TooFewCups(usize),
    /// The tracked coin does not point at a slot.
    #[error("coin position {coin} is outside {cup_count} cups")]
    CoinOutOfRange {
        /// Offending coin position.
        coin: usize,
        /// Number of cups in play.
        cup_count: usize,
    },
    /// No coin has been placed on the cups.
    #[error("no coin has been placed")]
    CoinNotPlaced,
    /// The random source produced an index outside the requested bound.
    #[error("random source returned {value} for bound {bound}")]
    RngOutOfRange {
        /// Returned value.
        value: usize,
        /// Requested exclusive bound.
        bound: usize,
    },
    /// The random source kept returning the same slot for both ends of a pair.
    #[error("random source kept repeating one slot out of {bound}")]
    RngStuck {
        /// Requested exclusive bound.
        bound: usize,
    },
}

/// Reasons a player command was ignored.
///
/// Session state is untouched and no event is emitted when a command returns
/// one of these; input layers usually discard them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The command is not legal in the current phase.
    #[error("command not accepted during {0:?}")]
    InvalidPhase(RoundPhase),
    /// The selected cup does not exist.
    #[error("cup {index} does not exist ({cup_count} cups in play)")]
    NoSuchCup {
        /// Selected index.
        index: usize,
        /// Number of cups in play.
        cup_count: usize,
    },
}
