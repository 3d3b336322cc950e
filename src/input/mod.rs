//! Algorithm inputs
//!
//! This module provides everything that seeds a run:
//! - [`AlgorithmInput`]: the array plus auxiliary parameters (target, window,
//!   graph, BFS source)
//! - [`graph`]: small undirected graphs for the traversal demos
//! - [`parse`]: tokenizer for value lists and edge lists typed on the command line
//! - [`random`]: seeded input generation matching each visualization
//!
//! # Bounds
//!
//! Inputs are kept small for legibility: at most [`MAX_LEN`] values in
//! `[VALUE_MIN, VALUE_MAX]`, counting sort keys in `[0, COUNTING_RANGE)` and at
//! most [`MAX_NODES`] graph nodes. Interactive controls clamp instead of
//! failing; [`AlgorithmInput::validate_for`] rejects anything else before a
//! recorder runs.

pub mod graph;
pub mod parse;
pub mod random;

use crate::algorithm::Algorithm;
use graph::Graph;
use thiserror::Error;

pub const MAX_LEN: usize = 16;
pub const VALUE_MIN: i64 = 0;
pub const VALUE_MAX: i64 = 99;
pub const COUNTING_RANGE: usize = 10;
pub const MAX_NODES: usize = 8;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("too many values: {len} (at most {max})")]
    TooManyValues { len: usize, max: usize },
    #[error("value {value} at index {index} is outside [{min}, {max}]")]
    ValueOutOfRange {
        index: usize,
        value: i64,
        min: i64,
        max: i64,
    },
    #[error("counting sort key {value} at index {index} is outside [0, {range})")]
    CountingKeyOutOfRange {
        index: usize,
        value: i64,
        range: usize,
    },
    #[error("{algorithm} needs a sorted array (index {index} breaks the order)")]
    Unsorted { algorithm: Algorithm, index: usize },
    #[error("window size {window} must be between 1 and {len}")]
    InvalidWindow { window: usize, len: usize },
    #[error("source node {label} is not in the graph")]
    UnknownSource { label: String },
    #[error("unknown node {label}")]
    UnknownNode { label: String },
    #[error("self loop on {label}")]
    SelfLoop { label: String },
    #[error("too many nodes: {nodes} (at most {max})")]
    TooManyNodes { nodes: usize, max: usize },
}

/// The input of one run. Immutable once recording starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlgorithmInput {
    pub values: Vec<i64>,
    /// Search target, or the pair sum for two-pointer.
    pub target: i64,
    /// Sliding window size.
    pub window: usize,
    pub graph: Graph,
    /// BFS start node.
    pub source: usize,
}

impl AlgorithmInput {
    pub fn new(values: Vec<i64>) -> Self {
        AlgorithmInput {
            values,
            target: 0,
            window: 1,
            graph: Graph::sample(),
            source: 0,
        }
    }

    pub fn with_target(mut self, target: i64) -> Self {
        self.target = target;
        self
    }

    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    pub fn with_graph(mut self, graph: Graph, source: usize) -> Self {
        self.graph = graph;
        self.source = source;
        self
    }

    /// The default input each visualization opens with.
    pub fn sample(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Bubble
            | Algorithm::OptimizedBubble
            | Algorithm::Selection
            | Algorithm::Insertion => AlgorithmInput::new(vec![5, 3, 4, 1, 2]),
            Algorithm::MergeSort => AlgorithmInput::new(vec![12, 5, 7, 3, 9, 1]),
            Algorithm::Counting => AlgorithmInput::new(vec![3, 1, 4, 1, 5, 9, 2, 6, 5, 3]),
            Algorithm::Linear => {
                AlgorithmInput::new(vec![64, 34, 25, 12, 22, 11, 90, 88, 76, 50]).with_target(22)
            }
            Algorithm::Binary => {
                AlgorithmInput::new(vec![11, 12, 22, 25, 34, 50, 64, 76, 88, 90]).with_target(22)
            }
            Algorithm::Interpolation => {
                AlgorithmInput::new((10..=90).step_by(10).collect()).with_target(50)
            }
            Algorithm::TwoPointer => {
                AlgorithmInput::new((1..=9).collect()).with_target(10)
            }
            Algorithm::SlidingWindow => {
                AlgorithmInput::new(vec![2, 1, 5, 1, 3, 2]).with_window(3)
            }
            Algorithm::Bfs | Algorithm::Dfs => {
                AlgorithmInput::new(Vec::new()).with_graph(Graph::sample(), 0)
            }
        }
    }

    /// Check that this input can be recorded by `algorithm`.
    pub fn validate_for(&self, algorithm: Algorithm) -> Result<(), InputError> {
        if algorithm.family() == crate::algorithm::Family::Graph {
            let nodes = self.graph.node_count();
            if nodes > MAX_NODES {
                return Err(InputError::TooManyNodes {
                    nodes,
                    max: MAX_NODES,
                });
            }
            if algorithm == Algorithm::Bfs && nodes > 0 && self.source >= nodes {
                return Err(InputError::UnknownSource {
                    label: graph::node_label(self.source),
                });
            }
            return Ok(());
        }

        if self.values.len() > MAX_LEN {
            return Err(InputError::TooManyValues {
                len: self.values.len(),
                max: MAX_LEN,
            });
        }

        for (index, &value) in self.values.iter().enumerate() {
            if algorithm == Algorithm::Counting {
                if value < 0 || value >= COUNTING_RANGE as i64 {
                    return Err(InputError::CountingKeyOutOfRange {
                        index,
                        value,
                        range: COUNTING_RANGE,
                    });
                }
            } else if !(VALUE_MIN..=VALUE_MAX).contains(&value) {
                return Err(InputError::ValueOutOfRange {
                    index,
                    value,
                    min: VALUE_MIN,
                    max: VALUE_MAX,
                });
            }
        }

        if algorithm.requires_sorted_input() {
            if let Some(index) = self.values.windows(2).position(|w| w[0] > w[1]) {
                return Err(InputError::Unsorted {
                    algorithm,
                    index: index + 1,
                });
            }
        }

        if algorithm.uses_window()
            && !self.values.is_empty()
            && (self.window == 0 || self.window > self.values.len())
        {
            return Err(InputError::InvalidWindow {
                window: self.window,
                len: self.values.len(),
            });
        }

        Ok(())
    }
}

/// Clamp a target typed into the numeric field.
pub fn clamp_target(target: i64, algorithm: Algorithm) -> i64 {
    // Pair sums can reach twice the largest value.
    let max = if algorithm == Algorithm::TwoPointer {
        VALUE_MAX * 2
    } else {
        VALUE_MAX
    };
    target.clamp(VALUE_MIN, max)
}

/// Clamp a window size to `1..=len` (1 for an empty array).
pub fn clamp_window(window: usize, len: usize) -> usize {
    window.clamp(1, len.max(1))
}

/// Clamp a requested array length to what the display can show.
pub fn clamp_len(len: usize) -> usize {
    len.min(MAX_LEN)
}
