//! Small-world (Watts–Strogatz) ring lattice with random rewiring.

use tracing::{debug, instrument};

use crate::{
    Graph, NodeId, RandomSource, Result, Topology,
    error::{GraphError, Parameter},
};

use super::validate_probability;

/// Builds a ring lattice on `node_count` nodes and rewires its edges.
///
/// Every node is joined to the `ring_neighbors / 2` nearest nodes on each
/// side of the ring (odd values round down). Each lattice edge `(u, v)`,
/// snapshotted as `(low, high)` pairs in ascending order before rewiring
/// starts, is then rewired with probability `rewire_probability`: the edge
/// is removed and `u` is joined to a node drawn uniformly from every node
/// that is neither `u` nor currently adjacent to `u`. Rewiring keeps the
/// edge count unchanged.
///
/// On rings too small to host `ring_neighbors / 2` distinct nodes per side,
/// offsets that wrap back onto the node itself are skipped and wrapped
/// duplicates collapse into a single edge.
///
/// # Errors
/// Returns [`GraphError::InvalidParameter`] when `rewire_probability` is not
/// a finite value in `[0, 1]`, and [`GraphError::SamplingExhausted`] if a
/// rewiring step finds no admissible target.
///
/// # Examples
/// ```
/// use retia_core::{Topology, seeded_source, small_world_graph};
///
/// let mut rng = seeded_source(7);
/// let lattice = small_world_graph(10, 4, 0.0, &mut rng)?;
/// assert!(lattice.nodes().all(|node| lattice.degree(node) == 4));
///
/// let rewired = small_world_graph(10, 4, 0.5, &mut rng)?;
/// assert_eq!(rewired.edge_count(), lattice.edge_count());
/// # Ok::<(), retia_core::GraphError>(())
/// ```
#[instrument(name = "models.small_world", skip(rng), err)]
pub fn small_world_graph<R>(
    node_count: usize,
    ring_neighbors: usize,
    rewire_probability: f64,
    rng: &mut R,
) -> Result<Graph>
where
    R: RandomSource + ?Sized,
{
    let rewire_probability = validate_probability(Parameter::RewireProbability, rewire_probability)?;
    let mut graph = ring_lattice(node_count, ring_neighbors)?;

    let lattice_edges: Vec<(NodeId, NodeId)> = graph.edges().collect();
    let mut rewired = 0_usize;
    for (anchor, detached) in lattice_edges {
        if rng.unit() < rewire_probability {
            rewire(&mut graph, anchor, detached, rng)?;
            rewired += 1;
        }
    }

    debug!(
        edges = graph.edge_count(),
        rewired, "small-world graph generated"
    );
    Ok(graph)
}

fn ring_lattice(node_count: usize, ring_neighbors: usize) -> Result<Graph> {
    let mut graph = Graph::with_nodes(node_count);
    let half_width = ring_neighbors / 2;

    for node in 0..node_count {
        for offset in 1..=half_width {
            let step = offset % node_count;
            if step == 0 {
                continue;
            }
            graph.add_edge(node, (node + step) % node_count)?;
            graph.add_edge(node, (node + node_count - step) % node_count)?;
        }
    }
    Ok(graph)
}

fn rewire<R>(graph: &mut Graph, anchor: NodeId, detached: NodeId, rng: &mut R) -> Result<()>
where
    R: RandomSource + ?Sized,
{
    graph.remove_edge(anchor, detached)?;

    let candidates: Vec<NodeId> = graph
        .nodes()
        .filter(|&node| node != anchor && !graph.has_edge(anchor, node))
        .collect();
    if candidates.is_empty() {
        return Err(GraphError::SamplingExhausted {
            context: "small-world rewiring target",
        });
    }

    let index = rng.pick(candidates.len())?;
    let Some(&target) = candidates.get(index) else {
        return Err(GraphError::SamplingExhausted {
            context: "small-world rewiring target",
        });
    };
    graph.add_edge(anchor, target)?;
    Ok(())
}
