//! Local and average clustering coefficients.

use std::collections::BTreeMap;

use retia_core::{NodeId, Topology};

use crate::{MetricsError, Result};

/// Returns the local clustering coefficient of every node.
///
/// The coefficient is the fraction of neighbour pairs that are themselves
/// adjacent; nodes with fewer than two neighbours score `0.0`.
///
/// # Examples
/// ```
/// use retia_core::Graph;
/// use retia_metrics::clustering;
///
/// let mut triangle = Graph::with_nodes(3);
/// triangle.add_edge(0, 1)?;
/// triangle.add_edge(1, 2)?;
/// triangle.add_edge(0, 2)?;
/// assert!(clustering(&triangle).values().all(|&value| value == 1.0));
/// # Ok::<(), retia_core::GraphError>(())
/// ```
#[must_use]
pub fn clustering<T: Topology>(graph: &T) -> BTreeMap<NodeId, f64> {
    graph
        .nodes()
        .map(|node| (node, local_clustering(graph, node)))
        .collect()
}

fn local_clustering<T: Topology>(graph: &T, node: NodeId) -> f64 {
    let neighbours: Vec<NodeId> = graph.neighbors(node).collect();
    let degree = neighbours.len();
    if degree < 2 {
        return 0.0;
    }
    let mut links = 0_usize;
    for (index, &u) in neighbours.iter().enumerate() {
        links += neighbours[index + 1..]
            .iter()
            .filter(|&&v| graph.has_edge(u, v))
            .count();
    }
    let pairs = degree * (degree - 1) / 2;
    links as f64 / pairs as f64
}

/// Returns the mean local clustering coefficient, counting every node.
///
/// # Errors
/// Returns [`MetricsError::EmptyGraph`] when the graph has no nodes.
pub fn average_clustering<T: Topology>(graph: &T) -> Result<f64> {
    let node_count = graph.node_count();
    if node_count == 0 {
        return Err(MetricsError::EmptyGraph);
    }
    let total: f64 = graph
        .nodes()
        .map(|node| local_clustering(graph, node))
        .sum();
    Ok(total / node_count as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    use retia_core::Graph;
    use rstest::rstest;

    use crate::test_graphs::{complete, path, star};

    #[rstest]
    #[case(complete(5), 1.0)]
    #[case(path(6), 0.0)]
    #[case(star(5), 0.0)]
    fn average_clustering_of_reference_shapes(#[case] graph: Graph, #[case] expected: f64) {
        let average = average_clustering(&graph).expect("non-empty graph");
        assert!((average - expected).abs() < 1e-12);
    }

    #[rstest]
    fn triangle_with_pendant_scores_partially() {
        // Triangle 0-1-2 plus pendant 3 on node 0.
        let mut graph = complete(3);
        graph.add_node(3).expect("fresh id");
        graph.add_edge(0, 3).expect("nodes exist");

        let scores = clustering(&graph);
        assert!((scores[&0] - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(scores[&1], 1.0);
        assert_eq!(scores[&3], 0.0);

        let average = average_clustering(&graph).expect("non-empty graph");
        assert!((average - (1.0 / 3.0 + 2.0) / 4.0).abs() < 1e-12);
    }

    #[rstest]
    fn average_clustering_rejects_empty_graphs() {
        assert_eq!(average_clustering(&Graph::new()), Err(MetricsError::EmptyGraph));
    }
}
