//! The set of algorithms that can be recorded.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Algorithm selector, one per visualization.
///
/// Bubble sort has two variants (basic and optimized) which differ only in
/// the early-exit policy; they are modelled as separate selectors so the
/// variant radio button maps to a single value.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    Bubble,
    OptimizedBubble,
    Selection,
    Insertion,
    MergeSort,
    Counting,
    Linear,
    Binary,
    Interpolation,
    TwoPointer,
    SlidingWindow,
    Bfs,
    Dfs,
}

/// Broad family an algorithm belongs to; decides which input fields matter
/// and how the array pane is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Family {
    Sorting,
    Searching,
    Technique,
    Graph,
}

impl Algorithm {
    /// Every algorithm in selector order (Tab cycles through this list).
    pub const ALL: [Algorithm; 13] = [
        Algorithm::Bubble,
        Algorithm::OptimizedBubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::MergeSort,
        Algorithm::Counting,
        Algorithm::Linear,
        Algorithm::Binary,
        Algorithm::Interpolation,
        Algorithm::TwoPointer,
        Algorithm::SlidingWindow,
        Algorithm::Bfs,
        Algorithm::Dfs,
    ];

    pub fn family(self) -> Family {
        match self {
            Algorithm::Bubble
            | Algorithm::OptimizedBubble
            | Algorithm::Selection
            | Algorithm::Insertion
            | Algorithm::MergeSort
            | Algorithm::Counting => Family::Sorting,
            Algorithm::Linear | Algorithm::Binary | Algorithm::Interpolation => Family::Searching,
            Algorithm::TwoPointer | Algorithm::SlidingWindow => Family::Technique,
            Algorithm::Bfs | Algorithm::Dfs => Family::Graph,
        }
    }

    /// Whether the recorder needs a non-decreasing array.
    pub fn requires_sorted_input(self) -> bool {
        matches!(
            self,
            Algorithm::Binary | Algorithm::Interpolation | Algorithm::TwoPointer
        )
    }

    /// Whether the `target` field is read by this algorithm.
    pub fn uses_target(self) -> bool {
        matches!(
            self,
            Algorithm::Linear
                | Algorithm::Binary
                | Algorithm::Interpolation
                | Algorithm::TwoPointer
        )
    }

    pub fn uses_window(self) -> bool {
        self == Algorithm::SlidingWindow
    }

    /// Next algorithm in selector order, wrapping around.
    pub fn next(self) -> Self {
        let idx = self.position();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous algorithm in selector order, wrapping around.
    pub fn prev(self) -> Self {
        let idx = self.position();
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// The other bubble sort variant; identity for everything else.
    pub fn toggle_variant(self) -> Self {
        match self {
            Algorithm::Bubble => Algorithm::OptimizedBubble,
            Algorithm::OptimizedBubble => Algorithm::Bubble,
            other => other,
        }
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|a| *a == self).unwrap_or(0)
    }

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::OptimizedBubble => "Optimized Bubble Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::MergeSort => "Merge Sort",
            Algorithm::Counting => "Counting Sort",
            Algorithm::Linear => "Linear Search",
            Algorithm::Binary => "Binary Search",
            Algorithm::Interpolation => "Interpolation Search",
            Algorithm::TwoPointer => "Two Pointer Pair Sum",
            Algorithm::SlidingWindow => "Sliding Window Max Sum",
            Algorithm::Bfs => "Breadth-First Search",
            Algorithm::Dfs => "Depth-First Search",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
