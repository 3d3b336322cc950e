//! Recorded steps and the log that produces them.
//!
//! A [`Step`] is one immutable snapshot of an algorithm run: the array as it
//! looked at that moment, which indices are highlighted, a narration line and
//! the cumulative [`Counters`]. Recorders append steps through a [`StepLog`],
//! which is finished into a [`StepSequence`] once the algorithm terminates.
//!
//! Steps are never mutated after creation. The replayer only reads them.

use crate::algorithm::Algorithm;
use serde::Serialize;
use std::collections::BTreeSet;
use thiserror::Error;

/// Default cap on the number of steps one recording may produce.
pub const DEFAULT_STEP_BUDGET: usize = 4096;

/// What a step represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepKind {
    PassStart,
    Compare,
    Swap,
    Swapped,
    NoSwap,
    MarkSorted,
    EarlyExit,
    NewMinimum,
    Shift,
    Place,
    PhaseStart,
    Count,
    PrefixSum,
    Divide,
    BaseCase,
    Conquer,
    Merge,
    Probe,
    MovePointer,
    WindowInit,
    WindowSlide,
    NewBest,
    Enqueue,
    Dequeue,
    Discover,
    TreeEdge,
    BackEdge,
    CrossEdge,
    Backtrack,
    Finish,
    Found,
    NotFound,
    Done,
}

impl StepKind {
    /// Terminal kinds end a sequence; no other kind may appear last.
    pub fn is_terminal(self) -> bool {
        matches!(self, StepKind::Found | StepKind::NotFound | StepKind::Done)
    }

    /// Whether the step counts as a comparison-type step for complexity bounds.
    pub fn is_compare(self) -> bool {
        matches!(self, StepKind::Compare | StepKind::Probe)
    }

    pub fn label(self) -> &'static str {
        match self {
            StepKind::PassStart => "pass-start",
            StepKind::Compare => "compare",
            StepKind::Swap => "swap",
            StepKind::Swapped => "swapped",
            StepKind::NoSwap => "no-swap",
            StepKind::MarkSorted => "mark-sorted",
            StepKind::EarlyExit => "early-exit",
            StepKind::NewMinimum => "new-minimum",
            StepKind::Shift => "shift",
            StepKind::Place => "place",
            StepKind::PhaseStart => "phase-start",
            StepKind::Count => "count",
            StepKind::PrefixSum => "prefix-sum",
            StepKind::Divide => "divide",
            StepKind::BaseCase => "base-case",
            StepKind::Conquer => "conquer",
            StepKind::Merge => "merge",
            StepKind::Probe => "probe",
            StepKind::MovePointer => "move-pointer",
            StepKind::WindowInit => "window-init",
            StepKind::WindowSlide => "window-slide",
            StepKind::NewBest => "new-best",
            StepKind::Enqueue => "enqueue",
            StepKind::Dequeue => "dequeue",
            StepKind::Discover => "discover",
            StepKind::TreeEdge => "tree-edge",
            StepKind::BackEdge => "back-edge",
            StepKind::CrossEdge => "cross-edge",
            StepKind::Backtrack => "backtrack",
            StepKind::Finish => "finish",
            StepKind::Found => "found",
            StepKind::NotFound => "not-found",
            StepKind::Done => "done",
        }
    }
}

/// Cumulative operation counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Counters {
    pub comparisons: u32,
    pub swaps: u32,
    pub passes: u32,
    /// Element writes that are not swaps (insertion shifts, counting placements, merge picks).
    pub writes: u32,
    /// Graph nodes dequeued or discovered.
    pub visits: u32,
}

/// Counting sort phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CountingPhase {
    Count,
    Prefix,
    Output,
    Done,
}

impl CountingPhase {
    pub fn label(self) -> &'static str {
        match self {
            CountingPhase::Count => "Phase 1: Counting occurrences",
            CountingPhase::Prefix => "Phase 2: Prefix sums (cumulative counts)",
            CountingPhase::Output => "Phase 3: Build output from right to left (stable)",
            CountingPhase::Done => "Done: Array sorted",
        }
    }
}

/// Graph traversal state at one step. Nodes are indices into the graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Traversal {
    /// BFS queue (front first) or DFS path stack (bottom first).
    pub frontier: Vec<usize>,
    pub discovered: Vec<usize>,
    pub finished: Vec<usize>,
    pub active: Option<usize>,
    /// BFS distance from the source, `None` when unreached.
    pub distances: Vec<Option<u32>>,
    /// DFS discovery and finish times.
    pub times: Vec<(Option<u32>, Option<u32>)>,
}

/// Family-specific state carried alongside the array snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Detail {
    None,
    /// Binary search bounds, both inclusive.
    Bounds {
        left: usize,
        right: usize,
        mid: usize,
    },
    Pointers {
        left: usize,
        right: usize,
    },
    Window {
        start: usize,
        len: usize,
        sum: i64,
        best_start: usize,
        best_sum: i64,
    },
    /// Merge sort segment `start..end` at recursion `depth`; `split` is the
    /// first index of the right half once the segment has been divided.
    Segment {
        start: usize,
        end: usize,
        depth: usize,
        split: Option<usize>,
    },
    Counting {
        phase: CountingPhase,
        counts: Vec<usize>,
        output: Vec<Option<i64>>,
        /// Highlighted slot of the count array.
        slot: Option<usize>,
    },
    Traversal(Traversal),
}

/// One recorded snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    pub kind: StepKind,
    pub array: Vec<i64>,
    pub highlighted: BTreeSet<usize>,
    /// Indices known to hold their final value.
    pub settled: BTreeSet<usize>,
    pub narration: String,
    pub counters: Counters,
    pub detail: Detail,
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Outcome {
    Empty,
    Sorted,
    Found { index: usize },
    NotFound,
    Pair { left: usize, right: usize },
    MaxWindow { start: usize, len: usize, sum: i64 },
    Traversed { order: Vec<usize> },
}

/// The ordered, finite list of steps produced by one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepSequence {
    algorithm: Algorithm,
    initial: Vec<i64>,
    steps: Vec<Step>,
    outcome: Outcome,
}

impl StepSequence {
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// The array shown before the first step is applied.
    pub fn initial(&self) -> &[i64] {
        &self.initial
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn first(&self) -> Option<&Step> {
        self.steps.first()
    }

    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Array snapshot of the final step, or the initial array if nothing was recorded.
    pub fn final_array(&self) -> &[i64] {
        self.steps
            .last()
            .map(|s| s.array.as_slice())
            .unwrap_or(&self.initial)
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Counters of the last step.
    pub fn totals(&self) -> Counters {
        self.steps.last().map(|s| s.counters).unwrap_or_default()
    }

    /// Number of comparison-type steps.
    pub fn compare_steps(&self) -> usize {
        self.steps.iter().filter(|s| s.kind.is_compare()).count()
    }
}

impl<'a> IntoIterator for &'a StepSequence {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Raised when a recording would exceed its step budget.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("step budget exceeded: more than {limit} steps")]
pub struct BudgetExceeded {
    pub limit: usize,
}

/// Append-only step builder used by recorders.
///
/// Tracks the running counters and settled set so recorders only describe
/// what changed.
#[derive(Debug)]
pub struct StepLog {
    steps: Vec<Step>,
    counters: Counters,
    settled: BTreeSet<usize>,
    budget: usize,
}

impl StepLog {
    pub fn new() -> Self {
        Self::with_budget(DEFAULT_STEP_BUDGET)
    }

    pub fn with_budget(budget: usize) -> Self {
        StepLog {
            steps: Vec::new(),
            counters: Counters::default(),
            settled: BTreeSet::new(),
            budget,
        }
    }

    pub fn counters(&self) -> Counters {
        self.counters
    }

    pub fn counters_mut(&mut self) -> &mut Counters {
        &mut self.counters
    }

    /// Mark an index as holding its final value.
    pub fn settle(&mut self, index: usize) {
        self.settled.insert(index);
    }

    pub fn settle_range(&mut self, range: std::ops::Range<usize>) {
        self.settled.extend(range);
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Record a step with the current counters and settled set.
    pub fn emit(
        &mut self,
        kind: StepKind,
        array: &[i64],
        highlighted: impl IntoIterator<Item = usize>,
        narration: impl Into<String>,
        detail: Detail,
    ) -> Result<(), BudgetExceeded> {
        if self.steps.len() >= self.budget {
            return Err(BudgetExceeded { limit: self.budget });
        }

        let highlighted: BTreeSet<usize> = highlighted
            .into_iter()
            .filter(|&i| i < array.len())
            .collect();

        self.steps.push(Step {
            kind,
            array: array.to_vec(),
            highlighted,
            settled: self.settled.clone(),
            narration: narration.into(),
            counters: self.counters,
            detail,
        });
        Ok(())
    }

    /// Seal the log into an immutable sequence.
    pub fn finish(self, algorithm: Algorithm, initial: Vec<i64>, outcome: Outcome) -> StepSequence {
        debug_assert!(
            self.steps.last().is_some_and(|s| s.kind.is_terminal()),
            "recorded sequence must end in a terminal step"
        );
        StepSequence {
            algorithm,
            initial,
            steps: self.steps,
            outcome,
        }
    }
}

impl Default for StepLog {
    fn default() -> Self {
        Self::new()
    }
}
