//! CLI shell game example.

use std::io::{self, Write};
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use shellgame::{AudioService, Event, GameOptions, RoundOutcome, RoundPhase, Session, Snapshot};
use tracing::Level;

/// Stands in for a sound engine by printing each trigger.
struct TerminalBell;

impl AudioService for TerminalBell {
    fn on_win(&mut self) {
        println!("*ding*");
    }

    fn on_lose(&mut self) {
        println!("*thud*");
    }
}

fn main() {
    let level = if std::env::var_os("SHELLGAME_DEBUG").is_some() {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .init();

    println!("Shell game CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let session = match Session::new(GameOptions::default(), seed) {
        Ok(session) => session,
        Err(err) => {
            println!("Cannot start: {err}");
            return;
        }
    };
    session.set_audio(Box::new(TerminalBell));

    loop {
        print_events(&session);
        let snapshot = session.snapshot();

        match snapshot.phase {
            RoundPhase::Betting => {
                print_table(&snapshot);
                let input = prompt_line("Bet (+/-/amount, c to confirm): ");
                match input.as_str() {
                    "q" | "quit" => break,
                    "+" => report(session.place_bet(1).map(|_| ())),
                    "-" => report(session.place_bet(-1).map(|_| ())),
                    "c" | "confirm" => report(session.confirm_bet().map(|_| ())),
                    other => match other.parse::<usize>() {
                        Ok(amount) => report(session.set_bet(amount).map(|_| ())),
                        Err(_) => println!("Unknown command."),
                    },
                }
            }
            RoundPhase::Guessing => {
                print_table(&snapshot);
                let input = prompt_line(&format!(
                    "Which cup hides the coin? (0-{}): ",
                    snapshot.cup_count - 1
                ));
                if input == "q" || input == "quit" {
                    break;
                }
                match input.parse::<usize>() {
                    Ok(index) => report(session.select_cup(index).map(|_| ())),
                    Err(_) => println!("Please enter a cup number."),
                }
            }
            RoundPhase::GameOver => {
                println!("You are out of coins at level {}.", snapshot.level);
                match prompt_line("New game? (y/n): ").as_str() {
                    "y" | "yes" => report(session.request_new_game()),
                    _ => break,
                }
            }
            _ => wait_for_timer(&session),
        }
    }

    session.teardown();
    println!("Goodbye.");
}

fn wait_for_timer(session: &Session) {
    if let Some((_, remaining)) = session.pending_timer() {
        thread::sleep(remaining);
        session.advance(remaining);
    }
}

fn report(result: Result<(), shellgame::CommandError>) {
    if let Err(err) = result {
        println!("Ignored: {err}");
    }
}

fn print_events(session: &Session) {
    for event in session.drain_events() {
        match event {
            Event::CoinPlaced { slot } => println!("The coin goes under cup {slot}."),
            Event::PhaseChanged(RoundPhase::Shuffling) => println!("Watch closely..."),
            Event::ShuffleStep(swap) => {
                println!("  cups {} <-> {}", swap.first, swap.second);
            }
            Event::CupsRevealed { coin, guess } => {
                println!("You picked cup {guess}; the coin was under cup {coin}.");
            }
            Event::RoundResult(payout) => match payout.outcome {
                RoundOutcome::Win => println!("YOU WON {}!", payout.display_amount()),
                RoundOutcome::Lose => println!("YOU LOST {}", payout.display_amount()),
            },
            Event::CupCountChanged(cups) => println!("Cups in play from next round: {cups}"),
            Event::GameOver => println!("GAME OVER!"),
            _ => {}
        }
    }
}

fn print_table(snapshot: &Snapshot) {
    println!(
        "\nBalance: {}  Bet: {}  Level: {}",
        snapshot.balance, snapshot.bet, snapshot.level
    );
    let cups: Vec<String> = (0..snapshot.cup_count)
        .map(|slot| {
            if snapshot.coin == Some(slot) {
                format!("[{slot}:o]")
            } else {
                format!("[{slot}]")
            }
        })
        .collect();
    println!("{}", cups.join(" "));
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => return "q".to_string(),
        Ok(_) => {}
    }
    input.trim().to_lowercase()
}
