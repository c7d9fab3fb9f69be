use tracing::{debug, info};

use crate::error::CommandError;
use crate::event::Event;
use crate::rng::{RandomSource, draw};

use super::{RoundPhase, Table, Timer, Trigger};

impl<R: RandomSource> Table<R> {
    pub(super) fn place_bet(&mut self, delta: isize) -> Result<usize, CommandError> {
        if !self.phase.accepts_bet_input() {
            return Err(self.reject("place_bet"));
        }

        self.play(|audio| audio.on_tap());
        let before = self.economy.bet();
        let bet = self.economy.adjust_bet(delta).unwrap_or(before);
        if bet != before {
            self.emit(Event::BetChanged(bet));
        }
        Ok(bet)
    }

    pub(super) fn set_bet(&mut self, amount: usize) -> Result<usize, CommandError> {
        if !self.phase.accepts_bet_input() {
            return Err(self.reject("set_bet"));
        }

        self.play(|audio| audio.on_tap());
        let before = self.economy.bet();
        let bet = self.economy.set_bet(amount).unwrap_or(before);
        if bet != before {
            self.emit(Event::BetChanged(bet));
        }
        Ok(bet)
    }

    pub(super) fn confirm_bet(&mut self) -> Result<usize, CommandError> {
        if !self.phase.accepts_bet_input() {
            return Err(self.reject("confirm_bet"));
        }
        let Some(stake) = self.economy.confirm_bet() else {
            return Err(self.reject("confirm_bet"));
        };

        self.play(|audio| audio.on_tap());
        self.transition(Trigger::ConfirmBet);

        self.cups.reset(self.economy.cup_count());
        let slot = draw(&mut self.rng, self.cups.len())
            .unwrap_or_else(|err| panic!("coin placement failed: {err}"));
        self.cups.place_coin(slot);
        debug!(stake, slot, cups = self.cups.len(), "bet confirmed");
        self.emit(Event::CoinPlaced { slot });

        self.schedule(Timer::CoinDisplay, self.options.coin_display);
        Ok(stake)
    }

    pub(super) fn new_game(&mut self) -> Result<(), CommandError> {
        if self.phase != RoundPhase::GameOver {
            return Err(self.reject("request_new_game"));
        }

        self.play(|audio| audio.on_tap());
        self.cancel_timer();

        let balance = self.economy.balance();
        let bet = self.economy.bet();
        let level = self.economy.level();
        let cup_count = self.economy.cup_count();
        self.economy.reset();

        if self.economy.balance() != balance {
            self.emit(Event::BalanceChanged(self.economy.balance()));
        }
        if self.economy.bet() != bet {
            self.emit(Event::BetChanged(self.economy.bet()));
        }
        if self.economy.level() != level {
            self.emit(Event::LevelChanged(self.economy.level()));
        }
        if self.economy.cup_count() != cup_count {
            self.emit(Event::CupCountChanged(self.economy.cup_count()));
        }

        self.cups.reset(self.economy.cup_count());
        self.guess = None;
        self.outcome = None;
        self.steps_left = 0;
        self.transition(Trigger::NewGame);
        info!(balance = self.economy.balance(), "new game");
        Ok(())
    }
}
