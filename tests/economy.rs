//! Economy and progression tests.

use shellgame::{ConfigError, Economy, GameOptions, LevelChange, Payout, RoundOutcome};

fn economy() -> Economy {
    Economy::new(&GameOptions::default())
}

#[test]
fn starts_at_initial_values() {
    let economy = economy();
    assert_eq!(economy.balance(), 3);
    assert_eq!(economy.bet(), 1);
    assert_eq!(economy.level(), 1);
    assert_eq!(economy.cup_count(), 3);
    assert_eq!(economy.committed(), None);
    assert!(!economy.is_game_over());
}

#[test]
fn set_bet_clamps_into_balance() {
    let mut economy = economy();
    assert_eq!(economy.set_bet(10), Some(3));
    assert_eq!(economy.set_bet(0), Some(1));
    assert_eq!(economy.adjust_bet(isize::MAX), Some(3));
    assert_eq!(economy.adjust_bet(isize::MIN), Some(1));
}

#[test]
fn win_adds_stake_and_loss_removes_it() {
    let mut economy = economy();
    economy.set_bet(2);

    let win = economy.resolve_round(true);
    assert_eq!(win.amount(), 2);
    assert_eq!(win.display_amount(), 4);
    assert_eq!(win.net(), 2);
    assert_eq!(economy.balance(), 5);

    let loss = economy.resolve_round(false);
    assert_eq!(
        loss,
        Payout {
            outcome: RoundOutcome::Lose,
            bet: 2,
        }
    );
    assert_eq!(loss.display_amount(), 2);
    assert_eq!(loss.net(), -2);
    assert_eq!(economy.balance(), 3);
}

#[test]
fn net_saturates_for_huge_stakes() {
    let win = Payout {
        outcome: RoundOutcome::Win,
        bet: usize::MAX,
    };
    let loss = Payout {
        outcome: RoundOutcome::Lose,
        bet: usize::MAX,
    };
    assert_eq!(win.net(), isize::MAX);
    assert_eq!(loss.net(), -isize::MAX);
}

#[test]
fn losing_everything_ends_the_game() {
    let mut economy = Economy::new(&GameOptions::default().with_starting_balance(1));
    economy.confirm_bet();
    economy.resolve_round(false);

    assert_eq!(economy.balance(), 0);
    assert!(economy.is_game_over());
    assert_eq!(economy.set_bet(1), None);
    assert_eq!(economy.confirm_bet(), None);
}

#[test]
fn committed_stake_cannot_change() {
    let mut economy = economy();
    economy.set_bet(2);
    assert_eq!(economy.confirm_bet(), Some(2));
    assert_eq!(economy.set_bet(3), None);
    assert_eq!(economy.confirm_bet(), Some(2));

    let payout = economy.resolve_round(true);
    assert_eq!(payout.bet, 2);
    assert_eq!(economy.committed(), None);
    assert_eq!(economy.set_bet(3), Some(3));
}

#[test]
fn clamp_bet_follows_a_shrinking_balance() {
    let mut economy = economy();
    economy.set_bet(3);
    economy.confirm_bet();
    economy.resolve_round(true);
    economy.set_bet(5);
    economy.confirm_bet();
    economy.resolve_round(false);

    assert_eq!(economy.balance(), 1);
    assert!(economy.clamp_bet());
    assert_eq!(economy.bet(), 1);
    assert!(!economy.clamp_bet());
}

#[test]
fn cup_added_every_third_level() {
    let mut economy = economy();

    assert_eq!(economy.advance_level_if_won(true), LevelChange::Level(2));
    assert_eq!(
        economy.advance_level_if_won(true),
        LevelChange::LevelAndCups {
            level: 3,
            cup_count: 4,
        }
    );
    assert_eq!(economy.advance_level_if_won(true), LevelChange::Level(4));
    assert_eq!(economy.advance_level_if_won(true), LevelChange::Level(5));
    assert_eq!(economy.cup_count(), 4);
    assert_eq!(
        economy.advance_level_if_won(true),
        LevelChange::LevelAndCups {
            level: 6,
            cup_count: 5,
        }
    );
}

#[test]
fn losses_never_advance() {
    let mut economy = economy();
    economy.advance_level_if_won(true);
    assert_eq!(economy.advance_level_if_won(false), LevelChange::Unchanged);
    assert_eq!(economy.level(), 2);
    assert_eq!(economy.cup_count(), 3);
}

#[test]
fn cup_count_is_capped() {
    let mut economy = economy();
    for _ in 0..30 {
        economy.advance_level_if_won(true);
    }
    assert_eq!(economy.level(), 31);
    assert_eq!(economy.cup_count(), 6);
}

#[test]
fn reset_restores_starting_values() {
    let mut economy = economy();
    economy.set_bet(3);
    economy.resolve_round(true);
    for _ in 0..5 {
        economy.advance_level_if_won(true);
    }
    economy.reset();

    assert_eq!(economy, self::economy());
}

#[test]
fn options_validation() {
    let options = GameOptions::default();
    assert_eq!(options.validate(), Ok(()));
    assert_eq!(
        options.clone().with_max_cups(2).validate(),
        Err(ConfigError::MaxBelowStart { start: 3, max: 2 })
    );
    assert_eq!(
        options.clone().with_starting_bet(0).validate(),
        Err(ConfigError::ZeroBet)
    );
    assert_eq!(
        options.clone().with_starting_bet(4).validate(),
        Err(ConfigError::BetExceedsBalance)
    );
    assert_eq!(
        options.with_levels_per_cup(0).validate(),
        Err(ConfigError::ZeroLevelStep)
    );
}
