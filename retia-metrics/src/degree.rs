//! Degree statistics and average degree connectivity.

use std::collections::BTreeMap;

use retia_core::{NodeId, Topology};

use crate::{MetricsError, Result};

/// Returns the degree of every node.
#[must_use]
pub fn degrees<T: Topology>(graph: &T) -> BTreeMap<NodeId, usize> {
    graph.nodes().map(|node| (node, graph.degree(node))).collect()
}

/// Returns node counts indexed by degree, from zero up to the maximum degree.
///
/// An empty graph yields an empty histogram.
///
/// # Examples
/// ```
/// use retia_core::Graph;
/// use retia_metrics::degree_histogram;
///
/// let mut star = Graph::with_nodes(4);
/// for leaf in 1..4 {
///     star.add_edge(0, leaf)?;
/// }
/// assert_eq!(degree_histogram(&star), [0, 3, 0, 1]);
/// # Ok::<(), retia_core::GraphError>(())
/// ```
#[must_use]
pub fn degree_histogram<T: Topology>(graph: &T) -> Vec<usize> {
    let mut histogram = Vec::new();
    for node in graph.nodes() {
        let degree = graph.degree(node);
        if histogram.len() <= degree {
            histogram.resize(degree + 1, 0);
        }
        histogram[degree] += 1;
    }
    histogram
}

/// Returns the average neighbour degree for each degree class.
///
/// For degree `k` the value is the sum of neighbour degrees over every node
/// of degree `k`, divided by the total number of such neighbour slots. The
/// degree-zero class, when present, maps to `0.0`.
#[must_use]
pub fn average_degree_connectivity<T: Topology>(graph: &T) -> BTreeMap<usize, f64> {
    let mut totals: BTreeMap<usize, (usize, usize)> = BTreeMap::new();
    for node in graph.nodes() {
        let degree = graph.degree(node);
        let neighbour_degrees: usize = graph
            .neighbors(node)
            .map(|neighbour| graph.degree(neighbour))
            .sum();
        let entry = totals.entry(degree).or_default();
        entry.0 += neighbour_degrees;
        entry.1 += degree;
    }
    totals
        .into_iter()
        .map(|(degree, (sum, slots))| {
            let value = if slots == 0 {
                0.0
            } else {
                sum as f64 / slots as f64
            };
            (degree, value)
        })
        .collect()
}

/// Returns the mean of [`average_degree_connectivity`] over its degree
/// classes.
///
/// # Errors
/// Returns [`MetricsError::EmptyGraph`] when the graph has no nodes.
pub fn mean_degree_connectivity<T: Topology>(graph: &T) -> Result<f64> {
    let connectivity = average_degree_connectivity(graph);
    if connectivity.is_empty() {
        return Err(MetricsError::EmptyGraph);
    }
    Ok(connectivity.values().sum::<f64>() / connectivity.len() as f64)
}
