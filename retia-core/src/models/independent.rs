//! Independent-edge (Erdős–Rényi `G(n, p)`) model.

use tracing::{debug, instrument};

use crate::{Graph, RandomSource, Result, Topology, error::Parameter};

use super::validate_probability;

/// Builds a graph on `node_count` nodes where each of the `n(n-1)/2` possible
/// edges is present independently with probability `edge_probability`.
///
/// Pairs are visited as `(i, j)` with `i < j` in ascending order and each
/// pair consumes exactly one [`RandomSource::unit`] draw; the edge is added
/// when the draw is below `edge_probability`.
///
/// # Errors
/// Returns [`GraphError::InvalidParameter`](crate::GraphError::InvalidParameter)
/// when `edge_probability` is not a finite value in `[0, 1]`.
///
/// # Examples
/// ```
/// use retia_core::{Topology, independent_edge_graph, seeded_source};
///
/// let mut rng = seeded_source(42);
/// let complete = independent_edge_graph(5, 1.0, &mut rng)?;
/// assert_eq!(complete.edge_count(), 10);
///
/// let empty = independent_edge_graph(5, 0.0, &mut rng)?;
/// assert_eq!(empty.edge_count(), 0);
/// # Ok::<(), retia_core::GraphError>(())
/// ```
#[instrument(name = "models.independent_edge", skip(rng), err)]
pub fn independent_edge_graph<R>(
    node_count: usize,
    edge_probability: f64,
    rng: &mut R,
) -> Result<Graph>
where
    R: RandomSource + ?Sized,
{
    let edge_probability = validate_probability(Parameter::EdgeProbability, edge_probability)?;
    let mut graph = Graph::with_nodes(node_count);

    for i in 0..node_count {
        for j in (i + 1)..node_count {
            if rng.unit() < edge_probability {
                graph.add_edge(i, j)?;
            }
        }
    }

    debug!(edges = graph.edge_count(), "independent-edge graph generated");
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    use crate::{GraphError, seeded_source, test_utils::ScriptedSource};

    #[rstest]
    #[case(0)]
    #[case(1)]
    fn tiny_graphs_have_no_edges(#[case] node_count: usize) {
        let mut rng = seeded_source(1);
        let graph = independent_edge_graph(node_count, 1.0, &mut rng).expect("valid parameters");
        assert_eq!(graph.node_count(), node_count);
        assert_eq!(graph.edge_count(), 0);
    }

    #[rstest]
    fn draws_are_compared_against_probability_in_pair_order() {
        // Pairs in order: (0,1), (0,2), (1,2).
        let mut rng = ScriptedSource::with_units([0.1, 0.6, 0.49]);
        let graph = independent_edge_graph(3, 0.5, &mut rng).expect("valid parameters");
        assert_eq!(graph.edges().collect::<Vec<_>>(), [(0, 1), (1, 2)]);
        assert_eq!(rng.units_consumed(), 3);
    }

    #[rstest]
    fn draw_equal_to_probability_does_not_connect() {
        let mut rng = ScriptedSource::with_units([0.5]);
        let graph = independent_edge_graph(2, 0.5, &mut rng).expect("valid parameters");
        assert_eq!(graph.edge_count(), 0);
    }

    #[rstest]
    fn rejects_invalid_probability() {
        let mut rng = seeded_source(1);
        let err = independent_edge_graph(4, 1.01, &mut rng).expect_err("p > 1 must fail");
        assert!(matches!(
            err,
            GraphError::InvalidParameter {
                parameter: Parameter::EdgeProbability,
                ..
            }
        ));
    }

    #[rstest]
    fn same_seed_reproduces_graph() {
        let first = independent_edge_graph(30, 0.3, &mut seeded_source(42)).expect("valid");
        let second = independent_edge_graph(30, 0.3, &mut seeded_source(42)).expect("valid");
        assert_eq!(first, second);
    }
}
