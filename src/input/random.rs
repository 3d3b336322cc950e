//! Seeded input generation.
//!
//! Wraps `ChaCha8Rng` so the same seed always produces the same arrays and
//! graphs. Generated inputs always pass [`AlgorithmInput::validate_for`] for
//! the algorithm they were generated for.

use super::graph::Graph;
use super::{clamp_len, clamp_window, AlgorithmInput, COUNTING_RANGE};
use crate::algorithm::{Algorithm, Family};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seed used when none is configured.
pub const DEFAULT_SEED: u64 = 42;

/// Array sizes offered by the sort demos' size selector.
pub const SIZE_CHOICES: [usize; 4] = [6, 8, 10, 12];

#[derive(Debug, Clone)]
pub struct InputRng(ChaCha8Rng);

impl Default for InputRng {
    fn default() -> Self {
        Self::from_seed_u64(DEFAULT_SEED)
    }
}

impl InputRng {
    pub fn from_seed_u64(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    /// `size` values uniformly drawn from `low..=high`.
    pub fn values(&mut self, size: usize, low: i64, high: i64) -> Vec<i64> {
        (0..clamp_len(size))
            .map(|_| self.0.gen_range(low..=high))
            .collect()
    }

    /// Generate a fresh input for `algorithm`, keeping `target`/`window`
    /// from `previous` where they still make sense.
    pub fn input_for(
        &mut self,
        algorithm: Algorithm,
        size: usize,
        previous: &AlgorithmInput,
    ) -> AlgorithmInput {
        match algorithm.family() {
            Family::Graph => {
                let graph = self.graph();
                AlgorithmInput::new(Vec::new()).with_graph(graph, 0)
            }
            _ => {
                let values = match algorithm {
                    Algorithm::Counting => self.values(size, 0, COUNTING_RANGE as i64 - 1),
                    Algorithm::Linear => self.values(size, 1, 99),
                    Algorithm::Binary | Algorithm::Interpolation | Algorithm::TwoPointer => {
                        let mut v = self.values(size, 1, 99);
                        v.sort_unstable();
                        v
                    }
                    _ => self.values(size, 10, 99),
                };

                // Searches pick a target that is present most of the time.
                let target = if algorithm.uses_target() && !values.is_empty() {
                    self.target_for(algorithm, &values)
                } else {
                    previous.target
                };
                let window = clamp_window(previous.window, values.len());

                AlgorithmInput::new(values)
                    .with_target(target)
                    .with_window(window)
            }
        }
    }

    fn target_for(&mut self, algorithm: Algorithm, values: &[i64]) -> i64 {
        let hit = self.0.gen_bool(0.75);
        match algorithm {
            Algorithm::TwoPointer if values.len() >= 2 => {
                if hit {
                    let i = self.0.gen_range(0..values.len() - 1);
                    let j = self.0.gen_range(i + 1..values.len());
                    values[i] + values[j]
                } else {
                    self.0.gen_range(2..=198)
                }
            }
            _ => {
                if hit {
                    values.choose(&mut self.0).copied().unwrap_or(1)
                } else {
                    self.0.gen_range(1..=99)
                }
            }
        }
    }

    /// A connected graph of 4 to 6 nodes: a chain plus random extra edges.
    pub fn graph(&mut self) -> Graph {
        let count = self.0.gen_range(4..=6);
        let Ok(mut graph) = Graph::with_nodes(count) else {
            return Graph::sample();
        };
        for i in 0..count - 1 {
            let _ = graph.add_edge(i, i + 1);
        }
        for _ in 0..count {
            let a = self.0.gen_range(0..count);
            let b = self.0.gen_range(0..count);
            if a == b || graph.has_edge(a, b) || self.0.gen_bool(0.5) {
                continue;
            }
            let _ = graph.add_edge(a, b);
        }
        graph
    }
}
