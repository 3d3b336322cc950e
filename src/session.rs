//! One visualization page: selected algorithm, its input and a replayer.
//!
//! Every change to the algorithm or its input re-records and replaces the
//! sequence. Loading bumps the replayer generation, so a tick from the old
//! run can never land on the new one.

use crate::algorithm::{Algorithm, Family};
use crate::catalog::{self, CatalogEntry};
use crate::input::random::InputRng;
use crate::input::{clamp_len, clamp_target, clamp_window, AlgorithmInput};
use crate::recorder::{record, RecordError};
use crate::replay::{DisplayState, ReplayError, Replayer, Speed, TickOutcome};
use std::time::Instant;

/// Default number of generated values.
pub const DEFAULT_SIZE: usize = 10;

#[derive(Debug)]
pub struct Session {
    algorithm: Algorithm,
    input: AlgorithmInput,
    rng: InputRng,
    size: usize,
    replayer: Replayer,
}

impl Session {
    /// Record `input` for `algorithm` and wait in Idle.
    pub fn new(
        algorithm: Algorithm,
        input: AlgorithmInput,
        rng: InputRng,
        size: usize,
        speed: Speed,
    ) -> Result<Self, RecordError> {
        let sequence = record(algorithm, &input)?;
        Ok(Session {
            algorithm,
            input,
            rng,
            size: clamp_len(size),
            replayer: Replayer::new(sequence, speed),
        })
    }

    /// A session showing the algorithm's default example.
    pub fn with_sample(algorithm: Algorithm) -> Result<Self, RecordError> {
        Self::new(
            algorithm,
            AlgorithmInput::sample(algorithm),
            InputRng::default(),
            DEFAULT_SIZE,
            Speed::default(),
        )
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn input(&self) -> &AlgorithmInput {
        &self.input
    }

    pub fn replayer(&self) -> &Replayer {
        &self.replayer
    }

    pub fn catalog_entry(&self) -> Option<&'static CatalogEntry> {
        catalog::entry(self.algorithm)
    }

    pub fn display(&self) -> DisplayState {
        self.replayer.display()
    }

    fn rerecord(&mut self) -> Result<(), RecordError> {
        let sequence = record(self.algorithm, &self.input)?;
        self.replayer.load(sequence);
        Ok(())
    }

    /// Play, or resume after a pause.
    pub fn start(&mut self, now: Instant) {
        self.replayer.play(now);
    }

    pub fn toggle(&mut self, now: Instant) {
        self.replayer.toggle(now);
    }

    pub fn pause(&mut self) {
        self.replayer.pause();
    }

    /// Record a fresh sequence from the current input and return to Idle.
    pub fn reset(&mut self) -> Result<(), RecordError> {
        self.rerecord()
    }

    /// New random input for the current algorithm.
    pub fn randomize(&mut self) -> Result<(), RecordError> {
        self.input = self.rng.input_for(self.algorithm, self.size, &self.input);
        self.rerecord()
    }

    /// Switch algorithm, generating new input if the current one does not fit.
    pub fn select(&mut self, algorithm: Algorithm) -> Result<(), RecordError> {
        self.algorithm = algorithm;
        self.input.target = clamp_target(self.input.target, algorithm);

        let needs_values = algorithm.family() != Family::Graph && self.input.values.is_empty();
        if needs_values || self.input.validate_for(algorithm).is_err() {
            self.input = self.rng.input_for(algorithm, self.size, &self.input);
        }
        tracing::debug!(algorithm = %algorithm, "algorithm selected");
        self.rerecord()
    }

    pub fn next_algorithm(&mut self) -> Result<(), RecordError> {
        self.select(self.algorithm.next())
    }

    pub fn prev_algorithm(&mut self) -> Result<(), RecordError> {
        self.select(self.algorithm.prev())
    }

    /// Flip between the basic and optimized bubble sort.
    pub fn toggle_variant(&mut self) -> Result<(), RecordError> {
        let variant = self.algorithm.toggle_variant();
        if variant == self.algorithm {
            return Ok(());
        }
        self.select(variant)
    }

    pub fn set_target(&mut self, target: i64) -> Result<(), RecordError> {
        self.input.target = clamp_target(target, self.algorithm);
        self.rerecord()
    }

    pub fn set_window(&mut self, window: usize) -> Result<(), RecordError> {
        self.input.window = clamp_window(window, self.input.values.len());
        self.rerecord()
    }

    /// Array length used by [`Session::randomize`].
    pub fn set_size(&mut self, size: usize) {
        self.size = clamp_len(size);
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn step_forward(&mut self) -> Result<(), ReplayError> {
        self.replayer.step_forward()
    }

    pub fn step_backward(&mut self) -> Result<(), ReplayError> {
        self.replayer.step_backward()
    }

    pub fn jump_to_start(&mut self) {
        self.replayer.jump_to_start();
    }

    pub fn jump_to_end(&mut self) {
        self.replayer.jump_to_end();
    }

    pub fn set_speed(&mut self, speed: Speed, now: Instant) {
        self.replayer.set_speed(speed, now);
    }

    /// Advance auto-play if a tick is due.
    pub fn tick(&mut self, now: Instant) -> Option<TickOutcome> {
        self.replayer.poll(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::replay::PlaybackState;

    #[test]
    fn test_select_regenerates_invalid_input() {
        let mut session = Session::with_sample(Algorithm::Bubble).unwrap();
        // [5, 3, 4, 1, 2] is unsorted, so binary search needs new input.
        session.select(Algorithm::Binary).unwrap();
        assert!(session.input().validate_for(Algorithm::Binary).is_ok());
        assert!(!session.input().values.is_empty());
    }

    #[test]
    fn test_select_keeps_compatible_input() {
        let mut session = Session::with_sample(Algorithm::Bubble).unwrap();
        session.select(Algorithm::Insertion).unwrap();
        assert_eq!(session.input().values, vec![5, 3, 4, 1, 2]);
    }

    #[test]
    fn test_toggle_variant_only_for_bubble() {
        let mut session = Session::with_sample(Algorithm::Bubble).unwrap();
        session.toggle_variant().unwrap();
        assert_eq!(session.algorithm(), Algorithm::OptimizedBubble);
        session.select(Algorithm::Linear).unwrap();
        session.toggle_variant().unwrap();
        assert_eq!(session.algorithm(), Algorithm::Linear);
    }

    #[test]
    fn test_set_window_clamps_and_rerecords() {
        let mut session = Session::with_sample(Algorithm::SlidingWindow).unwrap();
        session.step_forward().unwrap();
        session.set_window(100).unwrap();
        assert_eq!(session.input().window, 6);
        assert_eq!(session.replayer().state(), PlaybackState::Idle);
    }
}
