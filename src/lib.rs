//! A shell game engine with optional `no_std` support.
//!
//! A coin is hidden under one of several cups, the cups are swapped in pairs,
//! and the player bets on where the coin ended up. The crate provides a
//! [`Session`] type that runs the round flow (betting, coin display,
//! shuffling, guessing, reveal), the [`Economy`] that pays out and raises the
//! difficulty, and a standalone [`shuffle`] engine that tracks the coin
//! through every swap.
//!
//! Rendering, sound synthesis, and input hit-testing live outside the crate.
//! The session reports what happened through [`Event`]s and an optional
//! [`AudioService`], and accepts discrete commands such as
//! [`Session::select_cup`].
//!
//! # Example
//!
//! ```
//! use shellgame::{GameOptions, Session};
//!
//! let session = Session::new(GameOptions::default(), 42).unwrap();
//! session.confirm_bet().unwrap();
//! session.run_timers();
//! let coin = session.coin_position().unwrap();
//! session.select_cup(coin).unwrap();
//! session.run_timers();
//! assert_eq!(session.balance(), 4);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod cups;
pub mod economy;
pub mod error;
pub mod event;
pub mod game;
pub mod options;
pub mod rng;
pub mod shuffle;
mod sync;

// Re-export main types
pub use cups::{CupSet, Swap};
pub use economy::{Economy, LevelChange, Payout};
pub use error::{CommandError, ConfigError, ShuffleError};
pub use event::{AudioService, Event};
pub use game::{RoundOutcome, RoundPhase, Session, Snapshot, Timer, Trigger};
pub use options::GameOptions;
pub use rng::{RandomSource, seeded};
pub use shuffle::{MAX_REDRAWS, ShuffleOutcome, pick_pair, shuffle, shuffle_step};
