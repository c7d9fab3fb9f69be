//! Scheduled round callbacks.

use core::time::Duration;

use tracing::trace;

use super::Table;
use crate::rng::RandomSource;

/// A delayed step of the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timer {
    /// Hides the coin and starts shuffling.
    CoinDisplay,
    /// Performs the next swap, or ends shuffling after the last one.
    ShuffleStep,
    /// Settles the revealed round.
    Reveal,
    /// Starts the next betting phase.
    NextRound,
}

#[derive(Debug, Clone, Copy)]
pub(super) struct Scheduled {
    pub(super) timer: Timer,
    pub(super) remaining: Duration,
}

impl<R: RandomSource> Table<R> {
    pub(super) fn schedule(&mut self, timer: Timer, delay: Duration) {
        trace!(?timer, ?delay, "scheduled timer");
        self.pending = Some(Scheduled {
            timer,
            remaining: delay,
        });
    }

    pub(super) fn cancel_timer(&mut self) -> Option<Timer> {
        let cancelled = self.pending.take().map(|scheduled| scheduled.timer);
        if let Some(timer) = cancelled {
            trace!(?timer, "cancelled timer");
        }
        cancelled
    }

    /// Consumes `elapsed`, firing every timer that comes due within it.
    pub(super) fn advance(&mut self, mut elapsed: Duration) -> usize {
        let mut fired = 0;
        while let Some(scheduled) = self.pending {
            if scheduled.remaining > elapsed {
                self.pending = Some(Scheduled {
                    timer: scheduled.timer,
                    remaining: scheduled.remaining - elapsed,
                });
                break;
            }
            elapsed -= scheduled.remaining;
            self.pending = None;
            self.fire(scheduled.timer);
            fired += 1;
        }
        fired
    }

    pub(super) fn fire_pending(&mut self) -> Option<Timer> {
        let scheduled = self.pending.take()?;
        self.fire(scheduled.timer);
        Some(scheduled.timer)
    }

    fn fire(&mut self, timer: Timer) {
        trace!(?timer, "timer fired");
        match timer {
            Timer::CoinDisplay => self.start_shuffling(),
            Timer::ShuffleStep => self.continue_shuffling(),
            Timer::Reveal => self.settle(),
            Timer::NextRound => self.next_round(),
        }
    }
}
