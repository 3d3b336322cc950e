// What the front-end renders for the current cursor position

use super::PlaybackState;
use crate::step::{Counters, Detail, StepKind, StepSequence};
use serde::Serialize;
use std::collections::BTreeSet;

/// Rendered subset of a sequence at one cursor position.
///
/// Built fresh from `(sequence, cursor, state)` every time it is asked for, so
/// two replayers in the same position always agree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayState {
    /// Number of steps applied so far; 0 means the initial configuration.
    pub position: usize,
    pub total: usize,
    pub array: Vec<i64>,
    pub highlighted: BTreeSet<usize>,
    pub settled: BTreeSet<usize>,
    pub narration: String,
    pub counters: Counters,
    pub detail: Detail,
    /// Kind of the applied step, `None` before the first one.
    pub kind: Option<StepKind>,
    pub state: PlaybackState,
}

impl DisplayState {
    pub fn of(sequence: &StepSequence, cursor: Option<usize>, state: PlaybackState) -> Self {
        match cursor.and_then(|i| sequence.get(i).map(|step| (i, step))) {
            Some((index, step)) => DisplayState {
                position: index + 1,
                total: sequence.len(),
                array: step.array.clone(),
                highlighted: step.highlighted.clone(),
                settled: step.settled.clone(),
                narration: step.narration.clone(),
                counters: step.counters,
                detail: step.detail.clone(),
                kind: Some(step.kind),
                state,
            },
            None => DisplayState {
                position: 0,
                total: sequence.len(),
                array: sequence.initial().to_vec(),
                highlighted: BTreeSet::new(),
                settled: BTreeSet::new(),
                narration: format!("Press Space to start {}", sequence.algorithm()),
                counters: Counters::default(),
                detail: Detail::None,
                kind: None,
                state,
            },
        }
    }

    pub fn is_finished(&self) -> bool {
        self.kind.is_some_and(StepKind::is_terminal)
    }
}
