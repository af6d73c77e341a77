//! Degree-proportional (Barabási–Albert style) attachment.

use tracing::instrument;

use crate::{Graph, RandomSource, Result};

use super::{GrowthOutcome, LinkPlan, attach_nodes};

/// Appends `new_node_count` nodes, linking each to `links_per_node` targets
/// drawn with replacement proportionally to their current degree.
///
/// Degrees are re-read before every new node, so edges created earlier in
/// the same call raise later selection odds. Nodes of degree zero are never
/// drawn. Repeated picks of the same target collapse into one edge, so a new
/// node may end up with fewer than `links_per_node` edges.
///
/// # Errors
/// Returns [`GraphError::SamplingExhausted`](crate::GraphError::SamplingExhausted)
/// when `links_per_node > 0` and every existing node has degree zero (for
/// example an empty or edgeless graph). The graph is left untouched in that
/// case.
///
/// # Examples
/// ```
/// use retia_core::{Graph, Topology, preferential_attachment, seeded_source};
///
/// let mut graph = Graph::with_nodes(3);
/// graph.add_edge(0, 1)?;
/// let outcome = preferential_attachment(&mut graph, 4, 2, &mut seeded_source(3))?;
/// assert_eq!(outcome.nodes.len(), 4);
/// assert_eq!(graph.degree(2), 0, "isolated nodes are never chosen");
///
/// assert!(preferential_attachment(&mut Graph::with_nodes(3), 1, 1, &mut seeded_source(3)).is_err());
/// # Ok::<(), retia_core::GraphError>(())
/// ```
#[instrument(name = "growth.preferential", skip(graph, rng), err)]
pub fn preferential_attachment<R>(
    graph: &mut Graph,
    new_node_count: usize,
    links_per_node: usize,
    rng: &mut R,
) -> Result<GrowthOutcome>
where
    R: RandomSource + ?Sized,
{
    let plan = LinkPlan {
        preferential: links_per_node,
        uniform: 0,
    };
    attach_nodes(graph, new_node_count, plan, rng)
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    use crate::{GraphError, NodeId, Topology, seeded_source, test_utils::ScriptedSource};

    fn star(leaves: usize) -> Graph {
        let mut graph = Graph::with_nodes(leaves + 1);
        for leaf in 1..=leaves {
            graph.add_edge(0, leaf).expect("star endpoints exist");
        }
        graph
    }

    #[rstest]
    fn weights_reflect_degrees_including_earlier_new_nodes() {
        let mut rng = ScriptedSource::default()
            .and_weighted([0])
            .and_weighted([3]);
        let mut graph = star(2);
        preferential_attachment(&mut graph, 2, 1, &mut rng).expect("valid");

        let requests = rng.weighted_requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0], (vec![2, 1, 1], 1));
        // Node 3 joined the hub, so the hub's weight rose and node 3 is a candidate.
        assert_eq!(requests[1], (vec![3, 1, 1, 1], 1));
        assert!(graph.has_edge(4, 3));
    }

    #[rstest]
    fn duplicate_picks_collapse_into_one_edge() {
        let mut rng = ScriptedSource::default().and_weighted([0, 0, 1]);
        let mut graph = star(2);
        let outcome = preferential_attachment(&mut graph, 1, 3, &mut rng).expect("valid");
        assert_eq!(outcome.edges_added, 2);
        assert_eq!(graph.degree(3), 2);
    }

    #[rstest]
    #[case(Graph::new())]
    #[case(Graph::with_nodes(5))]
    fn fails_when_no_node_has_positive_degree(#[case] mut graph: Graph) {
        let before = graph.clone();
        let err = preferential_attachment(&mut graph, 2, 1, &mut seeded_source(1))
            .expect_err("all-zero weights must fail");
        assert!(matches!(err, GraphError::SamplingExhausted { .. }));
        assert_eq!(graph, before);
    }

    #[rstest]
    fn never_selects_zero_degree_nodes_and_favours_hubs() {
        // Hub 0 has degree 20; leaves have degree 1; nodes 21..=30 are isolated.
        let mut graph = star(20);
        for node in 21..=30 {
            graph.add_node(node).expect("fresh id");
        }
        let isolated: Vec<NodeId> = (21..=30).collect();

        let mut hub_hits = 0_usize;
        let mut leaf_hits = 0_usize;
        let mut rng = seeded_source(2024);
        for _ in 0..200 {
            let mut trial = graph.clone();
            let outcome = preferential_attachment(&mut trial, 1, 1, &mut rng).expect("valid");
            let new_node = outcome.nodes[0];
            let target = trial
                .neighbors(new_node)
                .next()
                .expect("new node has one link");
            assert!(!isolated.contains(&target));
            if target == 0 {
                hub_hits += 1;
            } else {
                leaf_hits += 1;
            }
        }
        // The hub carries half the total weight; each leaf carries 1/40.
        assert!(hub_hits > 60, "hub chosen {hub_hits} times");
        assert!(hub_hits > leaf_hits / 20);
    }
}
