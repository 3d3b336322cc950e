// Graph traversals: BFS with distances, DFS with discovery/finish times

use crate::input::graph::{node_label, Graph};
use crate::step::{BudgetExceeded, Detail, Outcome, StepKind, StepLog, Traversal};
use std::collections::VecDeque;

/// Emit a traversal step. The array snapshot is the discovery order so far
/// (1-based node numbers) with the active node highlighted.
fn emit_walk(
    log: &mut StepLog,
    kind: StepKind,
    state: &Traversal,
    narration: String,
) -> Result<(), BudgetExceeded> {
    let order: Vec<i64> = state.discovered.iter().map(|&n| n as i64 + 1).collect();
    let highlighted = state
        .active
        .and_then(|active| state.discovered.iter().position(|&n| n == active));
    log.emit(kind, &order, highlighted, narration, Detail::Traversal(state.clone()))
}

fn record_empty(log: &mut StepLog) -> Result<Outcome, BudgetExceeded> {
    log.emit(StepKind::Done, &[], [], "Graph is empty - nothing to traverse", Detail::None)?;
    Ok(Outcome::Empty)
}

pub(crate) fn bfs(graph: &Graph, source: usize, log: &mut StepLog) -> Result<Outcome, BudgetExceeded> {
    let n = graph.node_count();
    if n == 0 {
        return record_empty(log);
    }

    let mut state = Traversal {
        distances: vec![None; n],
        ..Traversal::default()
    };
    let mut seen = vec![false; n];
    let mut queue = VecDeque::new();

    seen[source] = true;
    state.distances[source] = Some(0);
    state.discovered.push(source);
    queue.push_back(source);
    state.frontier = queue.iter().copied().collect();
    state.active = Some(source);
    log.counters_mut().visits += 1;
    emit_walk(
        log,
        StepKind::Enqueue,
        &state,
        format!(
            "Initialize: enqueue source {} (distance 0).",
            node_label(source)
        ),
    )?;

    while let Some(u) = queue.pop_front() {
        state.frontier = queue.iter().copied().collect();
        state.active = Some(u);
        emit_walk(
            log,
            StepKind::Dequeue,
            &state,
            format!("Dequeue {}. Explore its neighbors.", node_label(u)),
        )?;

        for &v in graph.neighbors(u) {
            log.counters_mut().comparisons += 1;
            if seen[v] {
                continue;
            }
            seen[v] = true;
            let dist = state.distances[u].map_or(1, |d| d + 1);
            state.distances[v] = Some(dist);
            state.discovered.push(v);
            queue.push_back(v);
            state.frontier = queue.iter().copied().collect();
            log.counters_mut().visits += 1;
            emit_walk(
                log,
                StepKind::Enqueue,
                &state,
                format!(
                    "Discover {} from {}; set dist={} and enqueue.",
                    node_label(v),
                    node_label(u),
                    dist
                ),
            )?;
        }

        state.finished.push(u);
        emit_walk(
            log,
            StepKind::Finish,
            &state,
            format!("Finished processing {}.", node_label(u)),
        )?;
    }

    state.active = None;
    emit_walk(
        log,
        StepKind::Done,
        &state,
        "BFS complete. All reachable nodes processed.".to_string(),
    )?;
    Ok(Outcome::Traversed {
        order: state.discovered,
    })
}

/// Depth-first search over every node, in node order.
///
/// Uses an explicit stack of `(node, next neighbor index)` frames instead of
/// recursion; the emitted steps match a recursive DFS exactly. The graph is
/// undirected, so the edge back to a node's parent is reported as a back edge.
pub(crate) fn dfs(graph: &Graph, log: &mut StepLog) -> Result<Outcome, BudgetExceeded> {
    let n = graph.node_count();
    if n == 0 {
        return record_empty(log);
    }

    let mut state = Traversal {
        times: vec![(None, None); n],
        ..Traversal::default()
    };
    let mut seen = vec![false; n];
    let mut done = vec![false; n];
    let mut time = 0u32;

    for root in 0..n {
        if seen[root] {
            continue;
        }

        state.active = None;
        log.counters_mut().passes += 1;
        emit_walk(
            log,
            StepKind::PassStart,
            &state,
            format!("Start new DFS tree at {}.", node_label(root)),
        )?;

        time += 1;
        seen[root] = true;
        state.times[root].0 = Some(time);
        state.discovered.push(root);
        state.frontier.push(root);
        state.active = Some(root);
        log.counters_mut().visits += 1;
        emit_walk(
            log,
            StepKind::Discover,
            &state,
            format!("Discover {} (d={}).", node_label(root), time),
        )?;

        let mut work: Vec<(usize, usize)> = vec![(root, 0)];
        while let Some(top) = work.last_mut() {
            let u = top.0;
            let Some(&v) = graph.neighbors(u).get(top.1) else {
                work.pop();
                time += 1;
                done[u] = true;
                state.times[u].1 = Some(time);
                state.finished.push(u);
                state.frontier.pop();
                state.active = Some(u);
                emit_walk(
                    log,
                    StepKind::Finish,
                    &state,
                    format!("Finish {} (f={}).", node_label(u), time),
                )?;

                if let Some(&(parent, _)) = work.last() {
                    state.active = Some(parent);
                    emit_walk(
                        log,
                        StepKind::Backtrack,
                        &state,
                        format!("Backtrack to {} from {}.", node_label(parent), node_label(u)),
                    )?;
                }
                continue;
            };
            top.1 += 1;
            log.counters_mut().comparisons += 1;
            state.active = Some(u);

            if !seen[v] {
                emit_walk(
                    log,
                    StepKind::TreeEdge,
                    &state,
                    format!("Tree Edge {}→{}", node_label(u), node_label(v)),
                )?;

                time += 1;
                seen[v] = true;
                state.times[v].0 = Some(time);
                state.discovered.push(v);
                state.frontier.push(v);
                state.active = Some(v);
                log.counters_mut().visits += 1;
                emit_walk(
                    log,
                    StepKind::Discover,
                    &state,
                    format!("Discover {} (d={}).", node_label(v), time),
                )?;
                work.push((v, 0));
            } else if !done[v] {
                emit_walk(
                    log,
                    StepKind::BackEdge,
                    &state,
                    format!("Back Edge {}→{} (cycle)", node_label(u), node_label(v)),
                )?;
            } else {
                emit_walk(
                    log,
                    StepKind::CrossEdge,
                    &state,
                    format!("Cross/Forward Edge {}→{}", node_label(u), node_label(v)),
                )?;
            }
        }
    }

    state.active = None;
    emit_walk(log, StepKind::Done, &state, "DFS complete.".to_string())?;
    Ok(Outcome::Traversed {
        order: state.discovered,
    })
}
