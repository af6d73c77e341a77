//! Breadth-first shortest paths over unweighted graphs.

use std::collections::BTreeMap;

use retia_core::{NodeId, Topology};
use tracing::instrument;

use crate::{MetricsError, Result, dense::Dense};

/// Returns the hop distance from `source` to every node reachable from it,
/// including `source` itself at distance zero.
///
/// # Errors
/// Returns [`MetricsError::UnknownNode`] when `source` is not in the graph.
///
/// # Examples
/// ```
/// use retia_core::Graph;
/// use retia_metrics::shortest_path_lengths;
///
/// let mut graph = Graph::with_nodes(4);
/// graph.add_edge(0, 1)?;
/// graph.add_edge(1, 2)?;
/// let lengths = shortest_path_lengths(&graph, 0)?;
/// assert_eq!(lengths.get(&2), Some(&2));
/// assert_eq!(lengths.get(&3), None);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn shortest_path_lengths<T: Topology>(
    graph: &T,
    source: NodeId,
) -> Result<BTreeMap<NodeId, usize>> {
    let dense = Dense::new(graph);
    let origin = dense
        .position(source)
        .ok_or(MetricsError::UnknownNode { node: source })?;
    Ok(dense
        .distances_from(origin)
        .into_iter()
        .enumerate()
        .filter_map(|(index, hops)| hops.map(|hops| (dense.node(index), hops)))
        .collect())
}

/// Returns the mean hop distance over all ordered pairs of distinct nodes.
///
/// A single-node graph has an average of `0.0`.
///
/// # Errors
/// Returns [`MetricsError::EmptyGraph`] when the graph has no nodes and
/// [`MetricsError::Disconnected`] when some pair is unreachable.
#[instrument(name = "metrics.average_shortest_path", skip(graph), fields(nodes = graph.node_count()), err)]
pub fn average_shortest_path_length<T: Topology>(graph: &T) -> Result<f64> {
    let dense = Dense::new(graph);
    let node_count = dense.len();
    if node_count == 0 {
        return Err(MetricsError::EmptyGraph);
    }
    if node_count == 1 {
        return Ok(0.0);
    }

    let mut total = 0_usize;
    for source in 0..node_count {
        let distances = dense.distances_from(source);
        let reachable = distances.iter().flatten().count();
        if reachable < node_count {
            return Err(MetricsError::Disconnected {
                reachable,
                nodes: node_count,
            });
        }
        total += distances.iter().flatten().sum::<usize>();
    }
    Ok(total as f64 / (node_count * (node_count - 1)) as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    use retia_core::Graph;
    use rstest::rstest;

    use crate::test_graphs::{complete, cycle, path};

    #[rstest]
    #[case(complete(6), 1.0)]
    #[case(path(4), 20.0 / 12.0)]
    #[case(cycle(6), 1.8)]
    fn average_path_length_of_reference_shapes(#[case] graph: Graph, #[case] expected: f64) {
        let average = average_shortest_path_length(&graph).expect("connected graph");
        assert!((average - expected).abs() < 1e-12, "{average} != {expected}");
    }

    #[rstest]
    fn single_node_has_zero_average() {
        assert_eq!(average_shortest_path_length(&Graph::with_nodes(1)), Ok(0.0));
    }

    #[rstest]
    fn disconnected_graphs_are_rejected() {
        let mut graph = path(3);
        graph.add_node(7).expect("fresh id");
        assert_eq!(
            average_shortest_path_length(&graph),
            Err(MetricsError::Disconnected {
                reachable: 3,
                nodes: 4
            })
        );
    }

    #[rstest]
    fn empty_graphs_are_rejected() {
        assert_eq!(
            average_shortest_path_length(&Graph::new()),
            Err(MetricsError::EmptyGraph)
        );
    }

    #[rstest]
    fn lengths_follow_sparse_ids() {
        let mut graph = Graph::new();
        for node in [3, 10, 40] {
            graph.add_node(node).expect("fresh id");
        }
        graph.add_edge(3, 10).expect("nodes exist");
        graph.add_edge(10, 40).expect("nodes exist");
        let lengths = shortest_path_lengths(&graph, 40).expect("known source");
        assert_eq!(lengths, BTreeMap::from([(3, 2), (10, 1), (40, 0)]));
    }

    #[rstest]
    fn unknown_source_is_rejected() {
        assert_eq!(
            shortest_path_lengths(&path(2), 5),
            Err(MetricsError::UnknownNode { node: 5 })
        );
    }
}
