//! Notifications for presentation and audio collaborators.

use crate::cups::Swap;
use crate::economy::Payout;
use crate::game::RoundPhase;

/// A change in session state, queued in the order it happened.
///
/// Entering [`RoundPhase::RoundResolved`] is reported by
/// [`Event::RoundResult`] and entering [`RoundPhase::GameOver`] by
/// [`Event::GameOver`]; every other phase change by [`Event::PhaseChanged`].
/// Value events are only queued when the value actually changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The round moved to a new phase.
    PhaseChanged(RoundPhase),
    /// The balance changed.
    BalanceChanged(usize),
    /// The bet changed.
    BetChanged(usize),
    /// The level changed.
    LevelChanged(usize),
    /// The difficulty changed; takes effect from the next round.
    CupCountChanged(usize),
    /// The coin was placed under `slot` and is visible.
    CoinPlaced {
        /// Coin-bearing slot.
        slot: usize,
    },
    /// Two cups were exchanged.
    ShuffleStep(Swap),
    /// All cups were lifted.
    CupsRevealed {
        /// Slot hiding the coin.
        coin: usize,
        /// Slot the player picked.
        guess: usize,
    },
    /// The round was settled.
    RoundResult(Payout),
    /// The balance ran out.
    GameOver,
}

/// Sound triggers raised by the session.
///
/// Calls are fire-and-forget: they return nothing and cannot affect the game.
/// Every method defaults to doing nothing.
pub trait AudioService {
    /// A pair of cups was swapped.
    fn on_shuffle_step(&mut self) {}

    /// A player command was accepted.
    fn on_tap(&mut self) {}

    /// The player won a round.
    fn on_win(&mut self) {}

    /// The player lost a round.
    fn on_lose(&mut self) {}

    /// The service was attached to a session; start background ambience.
    fn on_ambience_start(&mut self) {}

    /// The session was torn down; stop everything that is playing.
    fn on_stop(&mut self) {}
}
