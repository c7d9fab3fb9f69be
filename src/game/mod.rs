//! Session orchestration: the single entry point for input and presentation.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::mem;
use core::time::Duration;

use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::cups::CupSet;
use crate::economy::Economy;
use crate::error::{CommandError, ConfigError};
use crate::event::{AudioService, Event};
use crate::options::GameOptions;
use crate::rng::{RandomSource, seeded};
use crate::sync::Mutex;

mod bet;
mod round;
pub mod state;
pub mod timer;

pub use state::{RoundOutcome, RoundPhase, Trigger};
pub use timer::Timer;

use timer::Scheduled;

/// Everything a presentation layer needs to draw the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Current phase.
    pub phase: RoundPhase,
    /// Player balance.
    pub balance: usize,
    /// Current bet.
    pub bet: usize,
    /// Current level.
    pub level: usize,
    /// Cups in play this round.
    pub cup_count: usize,
    /// Cup identity standing at each slot.
    pub arrangement: Vec<usize>,
    /// Coin-bearing slot, only while the coin is visible.
    pub coin: Option<usize>,
    /// Slot the player picked this round.
    pub guess: Option<usize>,
}

/// A shell game session.
///
/// The session owns the economy, the cups, the round phase, and the random
/// source. Commands from the input layer and timer callbacks are applied one
/// at a time behind a single lock, and every visible change is queued as an
/// [`Event`] in the order it happened.
///
/// # Example
///
/// ```
/// use shellgame::{GameOptions, RoundPhase, Session};
///
/// let session = Session::new(GameOptions::default(), 42).unwrap();
/// session.place_bet(1).unwrap();
/// session.confirm_bet().unwrap();
/// session.run_timers();
/// assert_eq!(session.phase(), RoundPhase::Guessing);
/// ```
pub struct Session<R = ChaCha8Rng> {
    table: Mutex<Table<R>>,
}

pub(crate) struct Table<R> {
    options: GameOptions,
    phase: RoundPhase,
    economy: Economy,
    cups: CupSet,
    guess: Option<usize>,
    outcome: Option<RoundOutcome>,
    steps_left: usize,
    pending: Option<Scheduled>,
    events: Vec<Event>,
    rng: R,
    audio: Option<Box<dyn AudioService + Send>>,
}

impl Session {
    /// Creates a session driven by the default generator seeded with `seed`.
    ///
    /// # Errors
    ///
    /// Returns an error if `options` fail [`GameOptions::validate`].
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(options, seeded(seed))
    }
}

impl<R: RandomSource> Session<R> {
    /// Creates a session drawing randomness from `rng`.
    ///
    /// The session starts in [`RoundPhase::Betting`].
    ///
    /// # Errors
    ///
    /// Returns an error if `options` fail [`GameOptions::validate`].
    pub fn with_rng(options: GameOptions, rng: R) -> Result<Self, ConfigError> {
        options.validate()?;

        let economy = Economy::new(&options);
        let table = Table {
            options,
            phase: RoundPhase::Betting,
            cups: CupSet::new(economy.cup_count()),
            economy,
            guess: None,
            outcome: None,
            steps_left: 0,
            pending: None,
            events: Vec::new(),
            rng,
            audio: None,
        };

        Ok(Self {
            table: Mutex::new(table),
        })
    }

    /// Returns the options this session was created with.
    #[must_use]
    pub fn options(&self) -> GameOptions {
        self.table.lock().options.clone()
    }

    /// Attaches an audio service, replacing any previous one.
    pub fn set_audio(&self, audio: Box<dyn AudioService + Send>) {
        let mut table = self.table.lock();
        let audio = table.audio.insert(audio);
        audio.on_ambience_start();
    }

    /// Moves the bet by `delta` (usually `+1` or `-1`), clamped to the balance.
    ///
    /// Returns the resulting bet.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::InvalidPhase`] outside the betting phase.
    pub fn place_bet(&self, delta: isize) -> Result<usize, CommandError> {
        self.table.lock().place_bet(delta)
    }

    /// Sets the bet to `amount`, clamped to `1..=balance`.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::InvalidPhase`] outside the betting phase.
    pub fn set_bet(&self, amount: usize) -> Result<usize, CommandError> {
        self.table.lock().set_bet(amount)
    }

    /// Commits the bet, places the coin, and starts the coin display timer.
    ///
    /// Returns the committed stake.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::InvalidPhase`] outside the betting phase.
    ///
    /// # Panics
    ///
    /// Panics if the random source returns a slot outside the cups.
    pub fn confirm_bet(&self) -> Result<usize, CommandError> {
        self.table.lock().confirm_bet()
    }

    /// Guesses that the coin is under `index` and lifts every cup.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::InvalidPhase`] unless the session is waiting
    /// for a guess, or [`CommandError::NoSuchCup`] if `index` is not a slot.
    pub fn select_cup(&self, index: usize) -> Result<RoundOutcome, CommandError> {
        self.table.lock().select_cup(index)
    }

    /// Starts over with the starting balance, bet, level, and cup count.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::InvalidPhase`] unless the game is over.
    pub fn request_new_game(&self) -> Result<(), CommandError> {
        self.table.lock().new_game()
    }

    /// Lets `elapsed` pass, firing every timer that comes due.
    ///
    /// Returns the number of timers fired.
    ///
    /// # Panics
    ///
    /// Panics if the random source misbehaves during shuffling.
    pub fn advance(&self, elapsed: Duration) -> usize {
        self.table.lock().advance(elapsed)
    }

    /// Fires the pending timer immediately.
    ///
    /// # Panics
    ///
    /// Panics if the random source misbehaves during shuffling.
    pub fn fire_pending_timer(&self) -> Option<Timer> {
        self.table.lock().fire_pending()
    }

    /// Fires timers until the session waits for player input.
    ///
    /// Returns the number of timers fired.
    ///
    /// # Panics
    ///
    /// Panics if the random source misbehaves during shuffling.
    pub fn run_timers(&self) -> usize {
        let mut table = self.table.lock();
        let mut fired = 0;
        while table.fire_pending().is_some() {
            fired += 1;
        }
        fired
    }

    /// Returns the pending timer and the time left until it fires.
    pub fn pending_timer(&self) -> Option<(Timer, Duration)> {
        self.table
            .lock()
            .pending
            .map(|scheduled| (scheduled.timer, scheduled.remaining))
    }

    /// Cancels the pending timer and stops audio.
    ///
    /// Call this when the table goes away mid-round so no callback acts on
    /// stale state.
    pub fn teardown(&self) {
        let mut table = self.table.lock();
        table.cancel_timer();
        table.play(|audio| audio.on_stop());
    }

    /// Takes every queued event, oldest first.
    pub fn drain_events(&self) -> Vec<Event> {
        mem::take(&mut self.table.lock().events)
    }

    /// Returns the current phase.
    pub fn phase(&self) -> RoundPhase {
        self.table.lock().phase
    }

    /// Returns the balance.
    pub fn balance(&self) -> usize {
        self.table.lock().economy.balance()
    }

    /// Returns the current bet.
    pub fn bet(&self) -> usize {
        self.table.lock().economy.bet()
    }

    /// Returns the level.
    pub fn level(&self) -> usize {
        self.table.lock().economy.level()
    }

    /// Returns the difficulty, which takes effect from the next round.
    pub fn cup_count(&self) -> usize {
        self.table.lock().economy.cup_count()
    }

    /// Returns the coin-bearing slot regardless of visibility.
    pub fn coin_position(&self) -> Option<usize> {
        self.table.lock().cups.coin()
    }

    /// Returns a copy of the cups on the table.
    pub fn cups(&self) -> CupSet {
        self.table.lock().cups.clone()
    }

    /// Returns a copy of the economy.
    pub fn economy(&self) -> Economy {
        self.table.lock().economy.clone()
    }

    /// Returns a view of the table with the coin hidden while shuffling and
    /// guessing.
    pub fn snapshot(&self) -> Snapshot {
        let table = self.table.lock();
        Snapshot {
            phase: table.phase,
            balance: table.economy.balance(),
            bet: table.economy.bet(),
            level: table.economy.level(),
            cup_count: table.cups.len(),
            arrangement: table.cups.arrangement().to_vec(),
            coin: table
                .cups
                .coin()
                .filter(|_| table.phase.coin_visible()),
            guess: table.guess,
        }
    }
}

impl<R: RandomSource> Table<R> {
    /// Applies `trigger` to the phase, queueing the phase change.
    ///
    /// Returns `false` and leaves the phase alone if the transition is not
    /// legal.
    fn transition(&mut self, trigger: Trigger) -> bool {
        let Some(next) = self.phase.next(trigger) else {
            debug!(phase = ?self.phase, ?trigger, "illegal transition ignored");
            return false;
        };

        debug!(from = ?self.phase, to = ?next, ?trigger, "phase transition");
        self.phase = next;
        match next {
            // Announced by the settlement with its payout.
            RoundPhase::RoundResolved(_) => {}
            RoundPhase::GameOver => self.emit(Event::GameOver),
            _ => self.emit(Event::PhaseChanged(next)),
        }
        true
    }

    fn reject(&self, command: &'static str) -> CommandError {
        debug!(phase = ?self.phase, command, "ignoring command");
        CommandError::InvalidPhase(self.phase)
    }

    fn emit(&mut self, event: Event) {
        self.events.push(event);
    }

    fn play(&mut self, sound: impl FnOnce(&mut dyn AudioService)) {
        if let Some(audio) = self.audio.as_deref_mut() {
            sound(audio);
        }
    }
}
