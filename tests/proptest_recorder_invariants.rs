//! Property-based invariant tests for the recorders and the replayer.
//!
//! Every recorded sequence must:
//! 1. end with exactly one terminal step
//! 2. never decrease a counter from one step to the next
//! 3. only highlight indices inside the snapshot array
//!
//! Sorting recorders must produce a sorted permutation of their input and the
//! search recorders must agree with a straightforward reference scan.

use std::collections::BTreeSet;
use std::time::Instant;

use proptest::collection::vec;
use proptest::prelude::*;
use stepviz::algorithm::Algorithm;
use stepviz::input::graph::Graph;
use stepviz::input::AlgorithmInput;
use stepviz::recorder::record;
use stepviz::replay::{Replayer, Speed};
use stepviz::step::{Outcome, StepKind, StepSequence};

const SORTS: [Algorithm; 5] = [
    Algorithm::Bubble,
    Algorithm::OptimizedBubble,
    Algorithm::Selection,
    Algorithm::Insertion,
    Algorithm::MergeSort,
];

fn values() -> impl Strategy<Value = Vec<i64>> {
    vec(0i64..=99, 0..=16)
}

fn sorted_values() -> impl Strategy<Value = Vec<i64>> {
    values().prop_map(|mut v| {
        v.sort_unstable();
        v
    })
}

/// Up to eight nodes with an arbitrary edge subset, no self loops.
fn graph() -> impl Strategy<Value = Graph> {
    (1usize..=8)
        .prop_flat_map(|nodes| (Just(nodes), vec((0..nodes, 0..nodes), 0..=12)))
        .prop_map(|(nodes, pairs)| {
            let mut graph = Graph::with_nodes(nodes).unwrap();
            for (a, b) in pairs {
                if a != b {
                    graph.add_edge(a, b).unwrap();
                }
            }
            graph
        })
}

fn check_structure(seq: &StepSequence) -> Result<(), TestCaseError> {
    prop_assert!(!seq.is_empty());
    let last = seq.len() - 1;
    for (i, step) in seq.iter().enumerate() {
        prop_assert_eq!(step.kind.is_terminal(), i == last, "step {} {:?}", i, step.kind);
        for &h in &step.highlighted {
            prop_assert!(h < step.array.len());
        }
    }
    for pair in seq.steps().windows(2) {
        let (a, b) = (pair[0].counters, pair[1].counters);
        prop_assert!(b.comparisons >= a.comparisons);
        prop_assert!(b.swaps >= a.swaps);
        prop_assert!(b.passes >= a.passes);
        prop_assert!(b.writes >= a.writes);
        prop_assert!(b.visits >= a.visits);
    }
    Ok(())
}

/// Nodes reachable from `source`, by plain flood fill.
fn reachable(graph: &Graph, source: usize) -> BTreeSet<usize> {
    let mut seen = BTreeSet::from([source]);
    let mut stack = vec![source];
    while let Some(node) = stack.pop() {
        for &next in graph.neighbors(node) {
            if seen.insert(next) {
                stack.push(next);
            }
        }
    }
    seen
}

proptest! {
    #[test]
    fn sorts_end_sorted_and_permuted(input in values()) {
        let mut expected = input.clone();
        expected.sort_unstable();
        for alg in SORTS {
            let seq = record(alg, &AlgorithmInput::new(input.clone())).unwrap();
            check_structure(&seq)?;
            prop_assert_eq!(seq.final_array(), expected.as_slice(), "{}", alg);
        }
    }

    #[test]
    fn counting_sort_matches_reference(input in vec(0i64..10, 0..=16)) {
        let mut expected = input.clone();
        expected.sort_unstable();
        let seq = record(Algorithm::Counting, &AlgorithmInput::new(input)).unwrap();
        check_structure(&seq)?;
        prop_assert_eq!(seq.final_array(), expected.as_slice());
    }

    #[test]
    fn bubble_compares_at_most_quadratic(input in values()) {
        let n = input.len();
        for alg in [Algorithm::Bubble, Algorithm::OptimizedBubble] {
            let seq = record(alg, &AlgorithmInput::new(input.clone())).unwrap();
            prop_assert!(seq.compare_steps() <= n * n.saturating_sub(1) / 2);
        }
    }

    #[test]
    fn optimized_bubble_never_compares_more(input in values()) {
        let plain = record(Algorithm::Bubble, &AlgorithmInput::new(input.clone())).unwrap();
        let optimized = record(Algorithm::OptimizedBubble, &AlgorithmInput::new(input)).unwrap();
        prop_assert!(optimized.totals().comparisons <= plain.totals().comparisons);
    }

    #[test]
    fn linear_search_finds_first_match(input in values(), target in 0i64..=99) {
        let seq = record(
            Algorithm::Linear,
            &AlgorithmInput::new(input.clone()).with_target(target),
        )
        .unwrap();
        check_structure(&seq)?;
        match input.iter().position(|&v| v == target) {
            Some(index) => prop_assert_eq!(seq.outcome(), &Outcome::Found { index }),
            None => prop_assert_eq!(seq.outcome(), &Outcome::NotFound),
        }
    }

    #[test]
    fn binary_search_agrees_with_contains(input in sorted_values(), target in 0i64..=99) {
        let seq = record(
            Algorithm::Binary,
            &AlgorithmInput::new(input.clone()).with_target(target),
        )
        .unwrap();
        check_structure(&seq)?;

        let guesses = seq.compare_steps();
        let bound = (usize::BITS - input.len().leading_zeros()) as usize;
        prop_assert!(guesses <= bound, "{} guesses for n = {}", guesses, input.len());

        match seq.outcome() {
            Outcome::Found { index } => prop_assert_eq!(input[*index], target),
            _ => prop_assert!(!input.contains(&target)),
        }
    }

    #[test]
    fn merge_sort_frames_cover_every_split(input in values()) {
        let n = input.len();
        let seq = record(Algorithm::MergeSort, &AlgorithmInput::new(input)).unwrap();
        check_structure(&seq)?;
        if n > 0 {
            let count = |kind: StepKind| seq.iter().filter(|s| s.kind == kind).count();
            prop_assert_eq!(count(StepKind::BaseCase), n);
            prop_assert_eq!(count(StepKind::Divide), n - 1);
            prop_assert_eq!(count(StepKind::Conquer), n - 1);
            prop_assert_eq!(seq.totals().writes as usize, count(StepKind::Merge));
        }
    }

    #[test]
    fn interpolation_search_agrees_with_contains(input in sorted_values(), target in 0i64..=99) {
        let seq = record(
            Algorithm::Interpolation,
            &AlgorithmInput::new(input.clone()).with_target(target),
        )
        .unwrap();
        check_structure(&seq)?;
        prop_assert!(seq.compare_steps() <= input.len());

        match seq.outcome() {
            Outcome::Found { index } => prop_assert_eq!(input[*index], target),
            _ => prop_assert!(!input.contains(&target)),
        }
    }

    #[test]
    fn two_pointer_finds_a_pair_when_one_exists(input in sorted_values(), target in 0i64..=198) {
        let seq = record(
            Algorithm::TwoPointer,
            &AlgorithmInput::new(input.clone()).with_target(target),
        )
        .unwrap();
        check_structure(&seq)?;

        let exists = (0..input.len())
            .any(|i| (i + 1..input.len()).any(|j| input[i] + input[j] == target));
        match seq.outcome() {
            Outcome::Pair { left, right } => {
                prop_assert!(left < right);
                prop_assert_eq!(input[*left] + input[*right], target);
            }
            _ => prop_assert!(!exists),
        }
    }

    #[test]
    fn sliding_window_finds_maximum(
        (input, window) in vec(0i64..=99, 1..=16)
            .prop_flat_map(|v| { let n = v.len(); (Just(v), 1..=n) })
    ) {
        let seq = record(
            Algorithm::SlidingWindow,
            &AlgorithmInput::new(input.clone()).with_window(window),
        )
        .unwrap();
        check_structure(&seq)?;

        let best = input.windows(window).map(|w| w.iter().sum::<i64>()).max().unwrap();
        match seq.outcome() {
            Outcome::MaxWindow { start, len, sum } => {
                prop_assert_eq!(*len, window);
                prop_assert_eq!(*sum, best);
                prop_assert_eq!(input[*start..*start + *len].iter().sum::<i64>(), best);
            }
            other => prop_assert!(false, "unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn bfs_visits_exactly_the_reachable_nodes(graph in graph(), source in 0usize..8) {
        let source = source % graph.node_count();
        let expected = reachable(&graph, source);
        let seq = record(
            Algorithm::Bfs,
            &AlgorithmInput::new(Vec::new()).with_graph(graph, source),
        )
        .unwrap();
        check_structure(&seq)?;

        match seq.outcome() {
            Outcome::Traversed { order } => {
                prop_assert_eq!(order.first(), Some(&source));
                let visited: BTreeSet<usize> = order.iter().copied().collect();
                prop_assert_eq!(visited.len(), order.len());
                prop_assert_eq!(visited, expected);
            }
            other => prop_assert!(false, "unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn dfs_visits_every_node_once(graph in graph()) {
        let nodes = graph.node_count();
        let seq = record(
            Algorithm::Dfs,
            &AlgorithmInput::new(Vec::new()).with_graph(graph, 0),
        )
        .unwrap();
        check_structure(&seq)?;

        match seq.outcome() {
            Outcome::Traversed { order } => {
                let mut sorted = order.clone();
                sorted.sort_unstable();
                prop_assert_eq!(sorted, (0..nodes).collect::<Vec<_>>());
            }
            other => prop_assert!(false, "unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn reset_restores_the_idle_display(input in values(), steps in 0usize..40) {
        let seq = record(Algorithm::Insertion, &AlgorithmInput::new(input)).unwrap();
        let mut replayer = Replayer::new(seq, Speed::default());
        let fresh = replayer.display();

        for _ in 0..steps {
            if replayer.step_forward().is_err() {
                break;
            }
        }
        replayer.reset();
        prop_assert_eq!(replayer.display(), fresh.clone());
        replayer.reset();
        prop_assert_eq!(replayer.display(), fresh);
    }

    #[test]
    fn manual_stepping_matches_autoplay(input in values()) {
        let seq = record(Algorithm::Selection, &AlgorithmInput::new(input)).unwrap();

        let mut manual = Replayer::new(seq.clone(), Speed::default());
        while manual.step_forward().is_ok() {}

        let mut auto = Replayer::new(seq, Speed::default());
        auto.play(Instant::now());
        while let Some(tick) = auto.pending() {
            let due = tick.due;
            auto.fire(tick, due);
        }
        prop_assert_eq!(manual.display(), auto.display());
    }

    #[test]
    fn stepping_back_and_forth_is_reversible(input in values(), forward in 1usize..30) {
        let seq = record(Algorithm::Bubble, &AlgorithmInput::new(input)).unwrap();
        let mut replayer = Replayer::new(seq, Speed::default());

        let mut taken = 0;
        while taken < forward && replayer.step_forward().is_ok() {
            taken += 1;
        }
        let before = replayer.display();
        if replayer.step_forward().is_ok() {
            replayer.step_backward().unwrap();
        }
        prop_assert_eq!(replayer.display().array, before.array);
        prop_assert_eq!(replayer.cursor(), before.position.checked_sub(1));
    }
}
