//! Price's model: a mix of preferential and uniform attachment.

use tracing::instrument;

use crate::{
    Graph, RandomSource, Result,
    error::Parameter,
    models::validate_probability,
};

use super::{GrowthOutcome, LinkPlan, attach_nodes};

/// Appends `new_node_count` nodes, splitting each node's `links_per_node`
/// links into `floor(links_per_node * preferential_fraction)` preferential
/// draws and uniform draws for the remainder.
///
/// Preferential targets are drawn first (with replacement, by degree), then
/// the uniform ones (distinct); the new node links to the union. With a
/// fraction of `1.0` this consumes randomness exactly like
/// [`preferential_attachment`](crate::preferential_attachment), and with
/// `0.0` exactly like [`uniform_attachment`](crate::uniform_attachment).
///
/// # Errors
/// Returns [`GraphError::InvalidParameter`](crate::GraphError::InvalidParameter)
/// when `preferential_fraction` is not a finite value in `[0, 1]` or the
/// uniform share exceeds the current node count, and
/// [`GraphError::SamplingExhausted`](crate::GraphError::SamplingExhausted)
/// when a preferential share is requested but no node has positive degree.
///
/// # Examples
/// ```
/// use retia_core::{Graph, Topology, price_attachment, seeded_source};
///
/// let mut graph = Graph::with_nodes(10);
/// graph.add_edge(0, 1)?;
/// let outcome = price_attachment(&mut graph, 3, 2, 0.7, &mut seeded_source(12))?;
/// assert_eq!(outcome.nodes, [10, 11, 12]);
/// # Ok::<(), retia_core::GraphError>(())
/// ```
#[instrument(name = "growth.price", skip(graph, rng), err)]
pub fn price_attachment<R>(
    graph: &mut Graph,
    new_node_count: usize,
    links_per_node: usize,
    preferential_fraction: f64,
    rng: &mut R,
) -> Result<GrowthOutcome>
where
    R: RandomSource + ?Sized,
{
    let preferential_fraction =
        validate_probability(Parameter::PreferentialFraction, preferential_fraction)?;
    attach_nodes(
        graph,
        new_node_count,
        split_links(links_per_node, preferential_fraction),
        rng,
    )
}

fn split_links(links_per_node: usize, preferential_fraction: f64) -> LinkPlan {
    let preferential = ((links_per_node as f64) * preferential_fraction).floor() as usize;
    let preferential = preferential.min(links_per_node);
    LinkPlan {
        preferential,
        uniform: links_per_node - preferential,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    use crate::{
        GraphError, independent_edge_graph, preferential_attachment, seeded_source,
        uniform_attachment,
    };

    fn seed_graph() -> Graph {
        let mut graph =
            independent_edge_graph(10, 0.25, &mut seeded_source(77)).expect("valid parameters");
        graph.add_edge(0, 1).expect("endpoints exist");
        graph
    }

    #[rstest]
    #[case(2, 0.7, 1, 1)]
    #[case(3, 0.7, 2, 1)]
    #[case(10, 0.35, 3, 7)]
    #[case(4, 1.0, 4, 0)]
    #[case(4, 0.0, 0, 4)]
    #[case(0, 0.5, 0, 0)]
    fn splits_links_with_floor(
        #[case] links: usize,
        #[case] fraction: f64,
        #[case] preferential: usize,
        #[case] uniform: usize,
    ) {
        assert_eq!(
            split_links(links, fraction),
            LinkPlan {
                preferential,
                uniform
            }
        );
    }

    #[rstest]
    #[case(1)]
    #[case(99)]
    fn full_fraction_matches_preferential_attachment(#[case] seed: u64) {
        let mut mixed = seed_graph();
        let mut pure = seed_graph();
        price_attachment(&mut mixed, 5, 3, 1.0, &mut seeded_source(seed)).expect("valid");
        preferential_attachment(&mut pure, 5, 3, &mut seeded_source(seed)).expect("valid");
        assert_eq!(mixed, pure);
    }

    #[rstest]
    #[case(1)]
    #[case(99)]
    fn zero_fraction_matches_uniform_attachment(#[case] seed: u64) {
        let mut mixed = seed_graph();
        let mut pure = seed_graph();
        price_attachment(&mut mixed, 5, 3, 0.0, &mut seeded_source(seed)).expect("valid");
        uniform_attachment(&mut pure, 5, 3, &mut seeded_source(seed)).expect("valid");
        assert_eq!(mixed, pure);
    }

    #[rstest]
    fn zero_fraction_tolerates_edgeless_graphs() {
        let mut graph = Graph::with_nodes(4);
        let outcome =
            price_attachment(&mut graph, 2, 2, 0.0, &mut seeded_source(5)).expect("uniform only");
        assert_eq!(outcome.edges_added, 4);
    }

    #[rstest]
    #[case(-0.1)]
    #[case(1.1)]
    #[case(f64::NAN)]
    fn rejects_invalid_fraction(#[case] fraction: f64) {
        let mut graph = seed_graph();
        let err = price_attachment(&mut graph, 1, 2, fraction, &mut seeded_source(5))
            .expect_err("fraction outside [0, 1] must fail");
        assert!(matches!(
            err,
            GraphError::InvalidParameter {
                parameter: Parameter::PreferentialFraction,
                ..
            }
        ));
    }

    #[rstest]
    fn uniform_share_is_checked_against_node_count() {
        let mut graph = Graph::with_nodes(2);
        graph.add_edge(0, 1).expect("endpoints exist");
        let err = price_attachment(&mut graph, 1, 6, 0.5, &mut seeded_source(5))
            .expect_err("three uniform links cannot fit two nodes");
        assert!(matches!(
            err,
            GraphError::InvalidParameter {
                parameter: Parameter::LinksPerNode,
                ..
            }
        ));
    }
}
