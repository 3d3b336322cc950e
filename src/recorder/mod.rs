//! Step recorders
//!
//! This module runs textbook algorithms eagerly to completion and records a
//! [`StepSequence`] describing every meaningful operation:
//! - [`sorting`]: bubble (basic and optimized), selection and insertion sort
//! - [`divide`]: merge sort as divide, conquer and merge frames
//! - [`counting`]: counting sort as a three-phase machine
//! - [`searching`]: linear, binary and interpolation search
//! - [`techniques`]: two-pointer pair sum and sliding window maximum sum
//! - [`graph`]: breadth-first and depth-first traversal
//! - [`errors`]: recording error types
//!
//! # Execution Model
//!
//! Recording is synchronous and pure: the same [`AlgorithmInput`] always
//! yields the same sequence. Nothing here knows about timers; pacing is the
//! replayer's job. Every sequence ends in exactly one terminal step (`Done`,
//! `Found` or `NotFound`), including for empty input.

pub mod errors;

mod counting;
mod divide;
mod graph;
mod searching;
mod sorting;
mod techniques;

pub use errors::RecordError;

use crate::algorithm::{Algorithm, Family};
use crate::input::AlgorithmInput;
use crate::step::{StepLog, StepSequence};

/// Validate `input` for `algorithm`, then record one full run.
pub fn record(algorithm: Algorithm, input: &AlgorithmInput) -> Result<StepSequence, RecordError> {
    input.validate_for(algorithm)?;

    let mut log = StepLog::new();
    let values = &input.values;
    let outcome = match algorithm {
        Algorithm::Bubble => sorting::bubble(values, false, &mut log)?,
        Algorithm::OptimizedBubble => sorting::bubble(values, true, &mut log)?,
        Algorithm::Selection => sorting::selection(values, &mut log)?,
        Algorithm::Insertion => sorting::insertion(values, &mut log)?,
        Algorithm::MergeSort => divide::merge_sort(values, &mut log)?,
        Algorithm::Counting => counting::counting_sort(values, &mut log)?,
        Algorithm::Linear => searching::linear(values, input.target, &mut log)?,
        Algorithm::Binary => searching::binary(values, input.target, &mut log)?,
        Algorithm::Interpolation => searching::interpolation(values, input.target, &mut log)?,
        Algorithm::TwoPointer => techniques::two_pointer(values, input.target, &mut log)?,
        Algorithm::SlidingWindow => techniques::sliding_window(values, input.window, &mut log)?,
        Algorithm::Bfs => graph::bfs(&input.graph, input.source, &mut log)?,
        Algorithm::Dfs => graph::dfs(&input.graph, &mut log)?,
    };

    let initial = if algorithm.family() == Family::Graph {
        Vec::new()
    } else {
        values.clone()
    };
    let sequence = log.finish(algorithm, initial, outcome);

    tracing::debug!(
        algorithm = %algorithm,
        steps = sequence.len(),
        comparisons = sequence.totals().comparisons,
        "recorded sequence"
    );

    Ok(sequence)
}
