//! Closeness and betweenness centrality.
//!
//! Betweenness follows Brandes (2001): one breadth-first pass per source
//! counts shortest paths, then a reverse sweep accumulates dependencies.

use std::collections::{BTreeMap, VecDeque};

use retia_core::{NodeId, Topology};
use tracing::instrument;

use crate::dense::Dense;

/// Returns the closeness centrality of every node.
///
/// With `r` nodes reachable from `u` (including `u`) at total distance `d`,
/// the score is `(r - 1) / d`, scaled by `(r - 1) / (n - 1)` so nodes in
/// small components do not dominate. Isolated nodes score `0.0`.
///
/// # Examples
/// ```
/// use retia_core::Graph;
/// use retia_metrics::closeness_centrality;
///
/// let mut star = Graph::with_nodes(4);
/// for leaf in 1..4 {
///     star.add_edge(0, leaf)?;
/// }
/// let scores = closeness_centrality(&star);
/// assert_eq!(scores[&0], 1.0);
/// assert!(scores[&1] < scores[&0]);
/// # Ok::<(), retia_core::GraphError>(())
/// ```
#[instrument(name = "metrics.closeness", skip(graph), fields(nodes = graph.node_count()))]
#[must_use]
pub fn closeness_centrality<T: Topology>(graph: &T) -> BTreeMap<NodeId, f64> {
    let dense = Dense::new(graph);
    let node_count = dense.len();
    let scores = (0..node_count)
        .map(|source| {
            let distances = dense.distances_from(source);
            let reachable = distances.iter().flatten().count();
            let total: usize = distances.iter().flatten().sum();
            if total == 0 || node_count < 2 {
                return 0.0;
            }
            let others = (reachable - 1) as f64;
            (others / total as f64) * (others / (node_count - 1) as f64)
        })
        .collect();
    dense.scores_by_node(scores)
}

/// Returns the normalised betweenness centrality of every node.
///
/// Each ordered source/target pair contributes, so raw scores are scaled by
/// `1 / ((n - 1)(n - 2))` to land in `[0, 1]`. Graphs with two nodes or
/// fewer score zero everywhere.
#[instrument(name = "metrics.betweenness", skip(graph), fields(nodes = graph.node_count()))]
#[must_use]
pub fn betweenness_centrality<T: Topology>(graph: &T) -> BTreeMap<NodeId, f64> {
    let dense = Dense::new(graph);
    let node_count = dense.len();
    let mut betweenness = vec![0.0_f64; node_count];

    for source in 0..node_count {
        let ShortestPaths {
            sigma,
            predecessors,
            order,
        } = shortest_paths(&dense, source);
        let mut delta = vec![0.0_f64; node_count];
        for &w in order.iter().rev() {
            for &v in &predecessors[w] {
                delta[v] += sigma[v] / sigma[w] * (1.0 + delta[w]);
            }
            if w != source {
                betweenness[w] += delta[w];
            }
        }
    }

    if node_count > 2 {
        let scale = 1.0 / ((node_count - 1) * (node_count - 2)) as f64;
        for value in &mut betweenness {
            *value *= scale;
        }
    }
    dense.scores_by_node(betweenness)
}

struct ShortestPaths {
    /// Number of shortest paths from the source to each position.
    sigma: Vec<f64>,
    predecessors: Vec<Vec<usize>>,
    /// Positions in non-decreasing distance from the source.
    order: Vec<usize>,
}

fn shortest_paths(dense: &Dense, source: usize) -> ShortestPaths {
    let node_count = dense.len();
    let mut sigma = vec![0.0_f64; node_count];
    let mut distance: Vec<Option<usize>> = vec![None; node_count];
    let mut predecessors = vec![Vec::new(); node_count];
    let mut order = Vec::with_capacity(node_count);
    let mut queue = VecDeque::from([source]);

    sigma[source] = 1.0;
    distance[source] = Some(0);
    while let Some(v) = queue.pop_front() {
        order.push(v);
        let next = distance[v].map_or(0, |hops| hops + 1);
        for &w in dense.neighbours(v) {
            if distance[w].is_none() {
                distance[w] = Some(next);
                queue.push_back(w);
            }
            if distance[w] == Some(next) {
                sigma[w] += sigma[v];
                predecessors[w].push(v);
            }
        }
    }
    ShortestPaths {
        sigma,
        predecessors,
        order,
    }
}
