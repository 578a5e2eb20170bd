//! Keyboard to command mapping
//!
//! Physical keys never reach the simulation; they are translated into
//! `Command`s here. Held keys fire once per press, auto-repeat is swallowed.

use std::collections::HashSet;

use crate::sim::Command;

/// Something the host should do in response to a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Command(Command),
    /// Start a new run (only honored once the current run is over)
    Restart,
}

/// Map a `KeyboardEvent.code` value (layout independent) to an action
pub fn action_for_code(code: &str) -> Option<Action> {
    let action = match code {
        "KeyW" | "ArrowUp" => Action::Command(Command::SpeedUp),
        "KeyS" | "ArrowDown" => Action::Command(Command::SlowDown),
        "KeyA" | "ArrowLeft" => Action::Command(Command::GoLeft),
        "KeyD" | "ArrowRight" => Action::Command(Command::GoRight),
        "Enter" | "Space" => Action::Restart,
        _ => return None,
    };
    Some(action)
}

/// Map a legacy numeric `keyCode` to an action
pub fn action_for_key_code(key_code: u32) -> Option<Action> {
    let action = match key_code {
        87 | 38 => Action::Command(Command::SpeedUp),
        83 | 40 => Action::Command(Command::SlowDown),
        65 | 37 => Action::Command(Command::GoLeft),
        68 | 39 => Action::Command(Command::GoRight),
        13 | 32 => Action::Restart,
        _ => return None,
    };
    Some(action)
}

/// Edge detector over key codes
#[derive(Debug, Default)]
pub struct InputMapper {
    held: HashSet<String>,
}

impl InputMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key went down. Returns an action only on the first press, not repeats.
    pub fn press(&mut self, code: &str) -> Option<Action> {
        let action = action_for_code(code)?;
        if self.held.insert(code.to_owned()) {
            Some(action)
        } else {
            None
        }
    }

    pub fn release(&mut self, code: &str) {
        self.held.remove(code);
    }

    /// Forget all held keys (focus lost, keyups will never arrive)
    pub fn clear(&mut self) {
        self.held.clear();
    }
}
