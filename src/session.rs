//! Fixed-step game session
//!
//! Owns the step clock, the current run and the queue of commands waiting
//! for the next tick. The host feeds it refresh callbacks and key presses.

use std::collections::VecDeque;

use crate::renderer::FrameView;
use crate::settings::Settings;
use crate::sim::{Command, FixedStepClock, GameState, TickReport, WorldBounds, tick};

#[derive(Debug)]
pub struct Session {
    bounds: WorldBounds,
    clock: FixedStepClock,
    /// No run until `start`; the clock stays idle until then
    state: Option<GameState>,
    pending: VecDeque<Command>,
}

impl Session {
    pub fn new(bounds: WorldBounds, settings: &Settings) -> Self {
        Self {
            bounds,
            clock: FixedStepClock::new(settings.target_fps, 0.0),
            state: None,
            pending: VecDeque::new(),
        }
    }

    /// Begin a run with a fresh slope
    pub fn start(&mut self, seed: u64, now_ms: f64) {
        self.start_with(GameState::new(seed, self.bounds), now_ms);
    }

    /// Begin a run from a prepared state
    pub fn start_with(&mut self, state: GameState, now_ms: f64) {
        log::info!(
            "Starting run: seed {}, world {}x{}",
            state.seed,
            state.bounds.width,
            state.bounds.height
        );
        self.state = Some(state);
        self.pending.clear();
        self.clock.reset(now_ms);
    }

    /// Replace a finished run. Ignored while the actor is still alive.
    pub fn restart(&mut self, seed: u64, now_ms: f64) -> bool {
        if self.state.as_ref().is_some_and(|s| !s.is_over()) {
            return false;
        }
        self.start(seed, now_ms);
        true
    }

    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    pub fn bounds(&self) -> WorldBounds {
        self.bounds
    }

    pub fn is_over(&self) -> bool {
        self.state.as_ref().is_some_and(GameState::is_over)
    }

    /// Queue a command for the next tick. Dropped when there is no living actor.
    pub fn push_command(&mut self, command: Command) -> bool {
        match &self.state {
            Some(state) if !state.is_over() => {
                self.pending.push_back(command);
                true
            }
            _ => {
                log::debug!("dropping {:?}: no living actor", command);
                false
            }
        }
    }

    /// Refresh callback. Runs at most one tick, applying queued commands
    /// first.
    pub fn on_frame(&mut self, now_ms: f64) -> Option<TickReport> {
        let state = self.state.as_mut()?;
        if !self.clock.poll(now_ms) {
            return None;
        }

        for command in self.pending.drain(..) {
            state.apply(command);
        }
        Some(tick(state))
    }

    pub fn frame_view(&self) -> Option<FrameView> {
        self.state.as_ref().map(FrameView::capture)
    }
}
