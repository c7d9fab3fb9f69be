//! Helpers shared by the integration tests.

use std::collections::VecDeque;
use std::sync::mpsc::Sender;

use shellgame::{AudioService, RandomSource};

/// Replays scripted indices, then falls back to a counter so rejection
/// sampling always terminates.
pub struct ScriptedRng {
    script: VecDeque<usize>,
    counter: usize,
}

impl ScriptedRng {
    pub fn new(script: &[usize]) -> Self {
        Self {
            script: script.iter().copied().collect(),
            counter: 0,
        }
    }
}

impl RandomSource for ScriptedRng {
    fn next_index(&mut self, bound: usize) -> usize {
        self.script.pop_front().unwrap_or_else(|| {
            self.counter += 1;
            self.counter % bound
        })
    }
}

/// Returns the same index forever.
pub struct StuckRng(pub usize);

impl RandomSource for StuckRng {
    fn next_index(&mut self, _bound: usize) -> usize {
        self.0
    }
}

/// Forwards every sound trigger to a channel.
pub struct RecordingAudio(pub Sender<&'static str>);

impl AudioService for RecordingAudio {
    fn on_shuffle_step(&mut self) {
        let _ = self.0.send("shuffle");
    }

    fn on_tap(&mut self) {
        let _ = self.0.send("tap");
    }

    fn on_win(&mut self) {
        let _ = self.0.send("win");
    }

    fn on_lose(&mut self) {
        let _ = self.0.send("lose");
    }

    fn on_ambience_start(&mut self) {
        let _ = self.0.send("ambience");
    }

    fn on_stop(&mut self) {
        let _ = self.0.send("stop");
    }
}
