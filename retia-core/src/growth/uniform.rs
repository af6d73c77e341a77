//! Uniform attachment.

use tracing::instrument;

use crate::{Graph, RandomSource, Result};

use super::{GrowthOutcome, LinkPlan, attach_nodes};

/// Appends `new_node_count` nodes, linking each to `links_per_node` distinct
/// existing nodes drawn uniformly without replacement.
///
/// Every new node therefore contributes exactly `links_per_node` new edges.
///
/// # Errors
/// Returns [`GraphError::InvalidParameter`](crate::GraphError::InvalidParameter)
/// when `links_per_node` exceeds the current node count. The graph is left
/// untouched in that case.
///
/// # Examples
/// ```
/// use retia_core::{Graph, Topology, seeded_source, uniform_attachment};
///
/// let mut graph = Graph::with_nodes(3);
/// let outcome = uniform_attachment(&mut graph, 2, 3, &mut seeded_source(8))?;
/// assert_eq!(outcome.edges_added, 6);
/// assert!(uniform_attachment(&mut graph, 1, 9, &mut seeded_source(8)).is_err());
/// # Ok::<(), retia_core::GraphError>(())
/// ```
#[instrument(name = "growth.uniform", skip(graph, rng), err)]
pub fn uniform_attachment<R>(
    graph: &mut Graph,
    new_node_count: usize,
    links_per_node: usize,
    rng: &mut R,
) -> Result<GrowthOutcome>
where
    R: RandomSource + ?Sized,
{
    let plan = LinkPlan {
        preferential: 0,
        uniform: links_per_node,
    };
    attach_nodes(graph, new_node_count, plan, rng)
}
