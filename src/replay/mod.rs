//! Step replayer
//!
//! Plays a recorded [`StepSequence`] back over time. The replayer never runs
//! algorithm code; it only moves a cursor over pre-computed steps.
//!
//! # State machine
//!
//! ```text
//! Idle ──play──▶ Playing ──pause──▶ Paused
//!                  │  ▲──────play──────┘
//!                  ▼
//!              Completed ──play──▶ Playing (from the start)
//! reset: any state ──▶ Idle
//! ```
//!
//! # Ticks and generations
//!
//! Auto-play is driven by one-shot [`Tick`] tokens. Each tick captures the
//! generation that was current when it was scheduled. Pausing, resetting,
//! loading, manual stepping and speed changes all bump the generation, so a
//! tick scheduled before any of them is recognised as stale by [`Replayer::fire`]
//! and dropped without touching the display.

pub mod display;

pub use display::DisplayState;

use crate::step::{Step, StepSequence};
use serde::Serialize;
use std::fmt;
use std::time::{Duration, Instant};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlaybackState {
    Idle,
    Playing,
    Paused,
    Completed,
}

impl PlaybackState {
    pub fn label(self) -> &'static str {
        match self {
            PlaybackState::Idle => "IDLE",
            PlaybackState::Playing => "PLAYING",
            PlaybackState::Paused => "PAUSED",
            PlaybackState::Completed => "DONE",
        }
    }
}

/// Delay between auto-played steps, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Speed(u64);

impl Speed {
    pub const MIN_MS: u64 = 200;
    pub const MAX_MS: u64 = 2000;
    pub const STEP_MS: u64 = 200;
    pub const DEFAULT_MS: u64 = 1000;

    /// Clamp into range and snap to the nearest slider notch.
    pub fn from_millis(ms: u64) -> Self {
        let clamped = ms.clamp(Self::MIN_MS, Self::MAX_MS);
        let notch = (clamped + Self::STEP_MS / 2) / Self::STEP_MS * Self::STEP_MS;
        Speed(notch.clamp(Self::MIN_MS, Self::MAX_MS))
    }

    pub fn millis(self) -> u64 {
        self.0
    }

    pub fn delay(self) -> Duration {
        Duration::from_millis(self.0)
    }

    /// Shorter delay, bottoming out at the minimum.
    pub fn faster(self) -> Self {
        Speed::from_millis(self.0.saturating_sub(Self::STEP_MS))
    }

    pub fn slower(self) -> Self {
        Speed::from_millis(self.0 + Self::STEP_MS)
    }
}

impl Default for Speed {
    fn default() -> Self {
        Speed(Self::DEFAULT_MS)
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

/// A scheduled auto-play advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub generation: u64,
    pub due: Instant,
}

/// Result of delivering a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// One step applied, another tick scheduled.
    Applied,
    /// The last step was applied; playback stopped.
    Completed,
    /// The tick belonged to an older generation or playback is not running.
    Stale,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayError {
    #[error("already at the beginning of the sequence")]
    AtStart,

    #[error("no more steps: the sequence has finished")]
    AtEnd,
}

/// Finite-state player over a single owned [`StepSequence`].
#[derive(Debug)]
pub struct Replayer {
    sequence: StepSequence,
    /// Index of the last applied step; `None` is the initial configuration.
    cursor: Option<usize>,
    state: PlaybackState,
    generation: u64,
    pending: Option<Tick>,
    speed: Speed,
}

impl Replayer {
    pub fn new(sequence: StepSequence, speed: Speed) -> Self {
        Replayer {
            sequence,
            cursor: None,
            state: PlaybackState::Idle,
            generation: 0,
            pending: None,
            speed,
        }
    }

    pub fn sequence(&self) -> &StepSequence {
        &self.sequence
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn pending(&self) -> Option<Tick> {
        self.pending
    }

    /// Steps applied so far, oldest first.
    pub fn applied(&self) -> &[Step] {
        match self.cursor {
            Some(i) => &self.sequence.steps()[..=i],
            None => &[],
        }
    }

    /// Drop any scheduled tick and start a new generation.
    fn invalidate(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.pending = None;
    }

    fn transition(&mut self, to: PlaybackState) {
        if self.state != to {
            tracing::trace!(from = ?self.state, to = ?to, generation = self.generation, "playback state");
            self.state = to;
        }
    }

    fn last_index(&self) -> Option<usize> {
        self.sequence.len().checked_sub(1)
    }

    fn at_end(&self) -> bool {
        self.cursor.is_some() && self.cursor == self.last_index()
    }

    /// Replace the sequence and return to the initial configuration.
    pub fn load(&mut self, sequence: StepSequence) {
        self.sequence = sequence;
        self.cursor = None;
        self.invalidate();
        self.transition(PlaybackState::Idle);
    }

    /// Start or resume auto-play. The first step is due immediately.
    pub fn play(&mut self, now: Instant) {
        if self.state == PlaybackState::Playing || self.sequence.is_empty() {
            return;
        }
        if self.state == PlaybackState::Completed || self.at_end() {
            self.cursor = None;
        }
        self.invalidate();
        self.transition(PlaybackState::Playing);
        self.pending = Some(Tick {
            generation: self.generation,
            due: now,
        });
    }

    pub fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            self.invalidate();
            self.transition(PlaybackState::Paused);
        }
    }

    pub fn toggle(&mut self, now: Instant) {
        if self.state == PlaybackState::Playing {
            self.pause();
        } else {
            self.play(now);
        }
    }

    /// Back to the initial configuration, whatever the current state.
    pub fn reset(&mut self) {
        self.cursor = None;
        self.invalidate();
        self.transition(PlaybackState::Idle);
    }

    /// Apply exactly one step. Stops auto-play.
    pub fn step_forward(&mut self) -> Result<(), ReplayError> {
        let next = self.cursor.map_or(0, |i| i + 1);
        if next >= self.sequence.len() {
            return Err(ReplayError::AtEnd);
        }
        self.invalidate();
        self.cursor = Some(next);
        self.settle_after_manual_move();
        Ok(())
    }

    /// Undo one step by showing the previous snapshot.
    pub fn step_backward(&mut self) -> Result<(), ReplayError> {
        let Some(current) = self.cursor else {
            return Err(ReplayError::AtStart);
        };
        self.invalidate();
        self.cursor = current.checked_sub(1);
        self.settle_after_manual_move();
        Ok(())
    }

    pub fn jump_to_start(&mut self) {
        self.reset();
    }

    pub fn jump_to_end(&mut self) {
        let Some(last) = self.last_index() else {
            return;
        };
        self.invalidate();
        self.cursor = Some(last);
        self.transition(PlaybackState::Completed);
    }

    fn settle_after_manual_move(&mut self) {
        let state = match self.cursor {
            None => PlaybackState::Idle,
            Some(_) if self.at_end() => PlaybackState::Completed,
            Some(_) => PlaybackState::Paused,
        };
        self.transition(state);
    }

    /// Change the delay. A running playback is rescheduled one delay from `now`.
    pub fn set_speed(&mut self, speed: Speed, now: Instant) {
        self.speed = speed;
        self.invalidate();
        if self.state == PlaybackState::Playing {
            self.pending = Some(Tick {
                generation: self.generation,
                due: now + speed.delay(),
            });
        }
    }

    /// Deliver a tick. Stale ticks change nothing.
    pub fn fire(&mut self, tick: Tick, now: Instant) -> TickOutcome {
        if tick.generation != self.generation || self.state != PlaybackState::Playing {
            tracing::trace!(
                tick = tick.generation,
                current = self.generation,
                "stale tick dropped"
            );
            return TickOutcome::Stale;
        }

        let next = self.cursor.map_or(0, |i| i + 1);
        if next >= self.sequence.len() {
            self.pending = None;
            self.transition(PlaybackState::Completed);
            return TickOutcome::Completed;
        }
        self.cursor = Some(next);

        if self.at_end() {
            self.pending = None;
            self.transition(PlaybackState::Completed);
            TickOutcome::Completed
        } else {
            self.pending = Some(Tick {
                generation: self.generation,
                due: now + self.speed.delay(),
            });
            TickOutcome::Applied
        }
    }

    /// Fire the pending tick if it is due.
    pub fn poll(&mut self, now: Instant) -> Option<TickOutcome> {
        let tick = self.pending.filter(|tick| tick.due <= now)?;
        Some(self.fire(tick, now))
    }

    pub fn display(&self) -> DisplayState {
        DisplayState::of(&self.sequence, self.cursor, self.state)
    }
}
