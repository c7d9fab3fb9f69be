use tracing::{debug, info};

use crate::economy::LevelChange;
use crate::error::CommandError;
use crate::event::Event;
use crate::rng::RandomSource;
use crate::shuffle::shuffle_step;

use super::{RoundOutcome, RoundPhase, Table, Timer, Trigger};

impl<R: RandomSource> Table<R> {
    /// Hides the coin and performs the first swap.
    pub(super) fn start_shuffling(&mut self) {
        if !self.transition(Trigger::CoinDisplayElapsed) {
            return;
        }
        self.steps_left = self.options.shuffle_steps;
        self.continue_shuffling();
    }

    /// Performs the next swap, or moves on to guessing once none are left.
    ///
    /// Each swap is drawn and applied only when its step comes up, so the
    /// coin position is always current before the next pair is picked.
    pub(super) fn continue_shuffling(&mut self) {
        if self.phase != RoundPhase::Shuffling {
            return;
        }
        if self.steps_left == 0 {
            self.transition(Trigger::ShuffleComplete);
            return;
        }

        self.steps_left -= 1;
        let swap = shuffle_step(&mut self.cups, &mut self.rng)
            .unwrap_or_else(|err| panic!("shuffle precondition violated: {err}"));
        self.emit(Event::ShuffleStep(swap));
        self.play(|audio| audio.on_shuffle_step());
        self.schedule(Timer::ShuffleStep, self.options.swap_interval);
    }

    pub(super) fn select_cup(&mut self, index: usize) -> Result<RoundOutcome, CommandError> {
        if !self.phase.accepts_selection() {
            return Err(self.reject("select_cup"));
        }
        let cup_count = self.cups.len();
        if index >= cup_count {
            debug!(index, cup_count, "ignoring selection of missing cup");
            return Err(CommandError::NoSuchCup { index, cup_count });
        }
        let Some(coin) = self.cups.coin() else {
            return Err(self.reject("select_cup"));
        };

        self.play(|audio| audio.on_tap());
        let outcome = if index == coin {
            RoundOutcome::Win
        } else {
            RoundOutcome::Lose
        };
        self.guess = Some(index);
        self.outcome = Some(outcome);

        self.transition(Trigger::CupSelected);
        self.emit(Event::CupsRevealed { coin, guess: index });
        self.schedule(Timer::Reveal, self.options.reveal_delay);
        Ok(outcome)
    }

    /// Applies the payout and progression, then ends the game or waits for
    /// the next round.
    pub(super) fn settle(&mut self) {
        let Some(outcome) = self.outcome else {
            return;
        };
        if !self.transition(Trigger::RevealElapsed(outcome)) {
            return;
        }
        self.outcome = None;

        let won = outcome.is_win();
        let payout = self.economy.resolve_round(won);
        info!(
            ?outcome,
            bet = payout.bet,
            balance = self.economy.balance(),
            "round settled"
        );
        self.emit(Event::RoundResult(payout));
        self.emit(Event::BalanceChanged(self.economy.balance()));
        if won {
            self.play(|audio| audio.on_win());
        } else {
            self.play(|audio| audio.on_lose());
        }

        match self.economy.advance_level_if_won(won) {
            LevelChange::Unchanged => {}
            LevelChange::Level(level) => self.emit(Event::LevelChanged(level)),
            LevelChange::LevelAndCups { level, cup_count } => {
                debug!(level, cup_count, "difficulty increased");
                self.emit(Event::LevelChanged(level));
                self.emit(Event::CupCountChanged(cup_count));
            }
        }

        if self.economy.is_game_over() {
            self.transition(Trigger::Bankrupt);
            info!(level = self.economy.level(), "game over");
        } else {
            self.schedule(Timer::NextRound, self.options.next_round_delay);
        }
    }

    /// Opens betting for the next round with fresh cups.
    pub(super) fn next_round(&mut self) {
        if !self.transition(Trigger::NextRound) {
            return;
        }

        self.cups.reset(self.economy.cup_count());
        self.guess = None;
        if self.economy.clamp_bet() {
            self.emit(Event::BetChanged(self.economy.bet()));
        }
    }
}
