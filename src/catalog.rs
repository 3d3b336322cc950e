//! Algorithm metadata table.
//!
//! One row per [`Algorithm`]: the topic id handed to the progress and bookmark
//! collaborators, complexities and a short description. Rendered by the stats
//! pane and by `stepviz list`.

use crate::algorithm::Algorithm;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub algorithm: Algorithm,
    /// Route-style identifier, e.g. `bubble-sort`.
    pub topic_id: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub best: &'static str,
    pub average: &'static str,
    pub worst: &'static str,
    pub space: &'static str,
    /// `None` where stability does not apply (searches, traversals).
    pub stable: Option<bool>,
    pub description: &'static str,
    pub use_cases: &'static [&'static str],
}

pub static CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        algorithm: Algorithm::Bubble,
        topic_id: "bubble-sort",
        title: "Bubble Sort",
        category: "Sorting",
        best: "O(n²)",
        average: "O(n²)",
        worst: "O(n²)",
        space: "O(1)",
        stable: Some(true),
        description: "Repeatedly swaps adjacent elements that are out of order.",
        use_cases: &["Teaching", "Tiny arrays"],
    },
    CatalogEntry {
        algorithm: Algorithm::OptimizedBubble,
        topic_id: "bubble-sort",
        title: "Bubble Sort (optimized)",
        category: "Sorting",
        best: "O(n)",
        average: "O(n²)",
        worst: "O(n²)",
        space: "O(1)",
        stable: Some(true),
        description: "Bubble sort that stops after a pass with no swaps.",
        use_cases: &["Nearly sorted data", "Detecting sortedness"],
    },
    CatalogEntry {
        algorithm: Algorithm::Selection,
        topic_id: "selection-sort",
        title: "Selection Sort",
        category: "Sorting",
        best: "O(n²)",
        average: "O(n²)",
        worst: "O(n²)",
        space: "O(1)",
        stable: Some(false),
        description: "Selects the minimum of the unsorted suffix and swaps it into place.",
        use_cases: &["Minimising writes", "Small arrays"],
    },
    CatalogEntry {
        algorithm: Algorithm::Insertion,
        topic_id: "insertion-sort",
        title: "Insertion Sort",
        category: "Sorting",
        best: "O(n)",
        average: "O(n²)",
        worst: "O(n²)",
        space: "O(1)",
        stable: Some(true),
        description: "Grows a sorted prefix by shifting larger elements right.",
        use_cases: &["Nearly sorted data", "Online sorting", "Small partitions"],
    },
    CatalogEntry {
        algorithm: Algorithm::MergeSort,
        topic_id: "merge-sort",
        title: "Merge Sort",
        category: "Divide & Conquer",
        best: "O(n log n)",
        average: "O(n log n)",
        worst: "O(n log n)",
        space: "O(n)",
        stable: Some(true),
        description: "Splits the array in half, sorts each half, then merges the sorted halves.",
        use_cases: &["Linked lists", "External sorting", "Stable ordering"],
    },
    CatalogEntry {
        algorithm: Algorithm::Counting,
        topic_id: "counting-sort",
        title: "Counting Sort",
        category: "Sorting",
        best: "O(n + k)",
        average: "O(n + k)",
        worst: "O(n + k)",
        space: "O(n + k)",
        stable: Some(true),
        description: "Counts key occurrences, turns counts into positions, places right to left.",
        use_cases: &["Small integer keys", "Radix sort digit pass"],
    },
    CatalogEntry {
        algorithm: Algorithm::Linear,
        topic_id: "linear-search",
        title: "Linear Search",
        category: "Searching",
        best: "O(1)",
        average: "O(n)",
        worst: "O(n)",
        space: "O(1)",
        stable: None,
        description: "Checks every element in order until the target is found.",
        use_cases: &["Unsorted data", "Small collections"],
    },
    CatalogEntry {
        algorithm: Algorithm::Binary,
        topic_id: "binary-search",
        title: "Binary Search",
        category: "Searching",
        best: "O(1)",
        average: "O(log n)",
        worst: "O(log n)",
        space: "O(1)",
        stable: None,
        description: "Halves a sorted search range on every comparison.",
        use_cases: &["Sorted arrays", "Lookup tables", "Bisection"],
    },
    CatalogEntry {
        algorithm: Algorithm::Interpolation,
        topic_id: "interpolation-search",
        title: "Interpolation Search",
        category: "Searching",
        best: "O(1)",
        average: "O(log log n)",
        worst: "O(n)",
        space: "O(1)",
        stable: None,
        description: "Guesses the target's position from its value relative to the range bounds.",
        use_cases: &["Uniformly distributed keys", "Phone books", "Large sorted tables"],
    },
    CatalogEntry {
        algorithm: Algorithm::TwoPointer,
        topic_id: "two-pointer",
        title: "Two Pointer Technique",
        category: "Techniques",
        best: "O(1)",
        average: "O(n)",
        worst: "O(n)",
        space: "O(1)",
        stable: None,
        description: "Moves two indices toward each other over a sorted array.",
        use_cases: &["Pair sums", "Palindromes", "Merging"],
    },
    CatalogEntry {
        algorithm: Algorithm::SlidingWindow,
        topic_id: "sliding-window",
        title: "Sliding Window",
        category: "Techniques",
        best: "O(n)",
        average: "O(n)",
        worst: "O(n)",
        space: "O(1)",
        stable: None,
        description: "Updates a fixed-size window sum in constant time per slide.",
        use_cases: &["Subarray sums", "Moving averages", "Rate limiting"],
    },
    CatalogEntry {
        algorithm: Algorithm::Bfs,
        topic_id: "bfs",
        title: "Breadth-First Search",
        category: "Graphs",
        best: "O(V + E)",
        average: "O(V + E)",
        worst: "O(V + E)",
        space: "O(V)",
        stable: None,
        description: "Visits nodes level by level from a source using a queue.",
        use_cases: &["Unweighted shortest paths", "Level order", "Connectivity"],
    },
    CatalogEntry {
        algorithm: Algorithm::Dfs,
        topic_id: "dfs",
        title: "Depth-First Search",
        category: "Graphs",
        best: "O(V + E)",
        average: "O(V + E)",
        worst: "O(V + E)",
        space: "O(V)",
        stable: None,
        description: "Follows each branch to its end before backtracking.",
        use_cases: &["Cycle detection", "Topological order", "Components"],
    },
];

/// Catalog row for `algorithm`.
pub fn entry(algorithm: Algorithm) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|e| e.algorithm == algorithm)
}

/// Rows sharing a topic id (both bubble variants share one).
pub fn by_topic(topic_id: &str) -> impl Iterator<Item = &'static CatalogEntry> + '_ {
    CATALOG.iter().filter(move |e| e.topic_id == topic_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_algorithm_has_an_entry() {
        for alg in Algorithm::ALL {
            assert_eq!(entry(alg).map(|e| e.algorithm), Some(alg));
        }
        assert_eq!(CATALOG.len(), Algorithm::ALL.len());
    }

    #[test]
    fn test_bubble_variants_share_topic() {
        assert_eq!(by_topic("bubble-sort").count(), 2);
        assert_eq!(by_topic("bfs").count(), 1);
        assert_eq!(by_topic("nope").count(), 0);
    }
}
