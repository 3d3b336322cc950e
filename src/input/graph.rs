//! Small undirected graphs for the traversal demos.
//!
//! Nodes are identified by index and displayed as `N1..Nn`. Adjacency lists
//! keep edge insertion order in both directions, which fixes the order in
//! which BFS and DFS explore neighbors.

use super::{InputError, MAX_NODES};
use rustc_hash::FxHashSet;

/// Display label of a node index (`0 -> "N1"`).
pub fn node_label(index: usize) -> String {
    format!("N{}", index + 1)
}

/// Resolve a `N<k>` label back to its index.
pub fn label_index(label: &str) -> Option<usize> {
    let number: usize = label.strip_prefix('N')?.parse().ok()?;
    number.checked_sub(1)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<Vec<usize>>,
    edges: Vec<(usize, usize)>,
    edge_set: FxHashSet<(usize, usize)>,
}

impl Graph {
    /// A graph with `nodes` isolated nodes.
    pub fn with_nodes(nodes: usize) -> Result<Self, InputError> {
        if nodes > MAX_NODES {
            return Err(InputError::TooManyNodes {
                nodes,
                max: MAX_NODES,
            });
        }
        Ok(Graph {
            adjacency: vec![Vec::new(); nodes],
            edges: Vec::new(),
            edge_set: FxHashSet::default(),
        })
    }

    /// The four-node diamond used by the traversal pages:
    /// N1-N2, N1-N3, N2-N4, N3-N4.
    pub fn sample() -> Self {
        let mut graph = Graph {
            adjacency: vec![Vec::new(); 4],
            edges: Vec::new(),
            edge_set: FxHashSet::default(),
        };
        for (a, b) in [(0, 1), (0, 2), (1, 3), (2, 3)] {
            graph.insert_unchecked(a, b);
        }
        graph
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    pub fn neighbors(&self, node: usize) -> &[usize] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_edge(&self, a: usize, b: usize) -> bool {
        self.edge_set.contains(&Self::key(a, b))
    }

    /// Add an undirected edge. Returns `false` when it already exists.
    pub fn add_edge(&mut self, a: usize, b: usize) -> Result<bool, InputError> {
        let nodes = self.node_count();
        for node in [a, b] {
            if node >= nodes {
                return Err(InputError::UnknownNode {
                    label: node_label(node),
                });
            }
        }
        if a == b {
            return Err(InputError::SelfLoop {
                label: node_label(a),
            });
        }
        if self.has_edge(a, b) {
            return Ok(false);
        }
        self.insert_unchecked(a, b);
        Ok(true)
    }

    fn insert_unchecked(&mut self, a: usize, b: usize) {
        self.adjacency[a].push(b);
        self.adjacency[b].push(a);
        self.edges.push((a, b));
        self.edge_set.insert(Self::key(a, b));
    }

    fn key(a: usize, b: usize) -> (usize, usize) {
        if a <= b { (a, b) } else { (b, a) }
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::sample()
    }
}
