use proptest::prelude::*;
use retia_core::{
    Graph, GraphError, ProbabilityMatrix, Topology, community_block_graph,
    independent_edge_graph, seeded_source, small_world_graph, uniform_attachment,
};
use retia_test_support::property_test_profile::ProptestRunProfile;
use rstest::rstest;

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: ProptestRunProfile::load(48).cases(),
        ..ProptestConfig::default()
    }
}

fn fail(err: GraphError) -> TestCaseError {
    TestCaseError::fail(err.to_string())
}

proptest! {
    #![proptest_config(config())]

    #[test]
    fn independent_edge_graph_is_simple_and_bounded(
        node_count in 0_usize..=40,
        probability in 0.0_f64..=1.0,
        seed in any::<u64>(),
    ) {
        let graph = independent_edge_graph(node_count, probability, &mut seeded_source(seed))
            .map_err(fail)?;
        prop_assert_eq!(graph.node_count(), node_count);
        prop_assert!(graph.edge_count() <= node_count * node_count.saturating_sub(1) / 2);
        prop_assert!(graph.edges().all(|(u, v)| u < v));
    }

    #[test]
    fn small_world_rewiring_preserves_edge_count(
        node_count in 8_usize..=40,
        half_width in 1_usize..=3,
        probability in 0.0_f64..=1.0,
        seed in any::<u64>(),
    ) {
        let ring_neighbors = 2 * half_width;
        let lattice = small_world_graph(node_count, ring_neighbors, 0.0, &mut seeded_source(seed))
            .map_err(fail)?;
        let rewired =
            small_world_graph(node_count, ring_neighbors, probability, &mut seeded_source(seed))
                .map_err(fail)?;
        prop_assert_eq!(lattice.edge_count(), node_count * half_width);
        prop_assert_eq!(rewired.edge_count(), lattice.edge_count());
        prop_assert!(rewired.edges().all(|(u, v)| u != v));
    }

    #[test]
    fn uniform_attachment_adds_m_times_l_edges(
        initial in 1_usize..=20,
        new_nodes in 0_usize..=10,
        links in 0_usize..=5,
        seed in any::<u64>(),
    ) {
        prop_assume!(links <= initial);
        let mut graph = Graph::with_nodes(initial);
        let outcome = uniform_attachment(&mut graph, new_nodes, links, &mut seeded_source(seed))
            .map_err(fail)?;
        prop_assert_eq!(outcome.nodes.len(), new_nodes);
        prop_assert_eq!(graph.edge_count(), new_nodes * links);
    }
}

#[rstest]
#[case(12)]
#[case(25)]
fn independent_edge_extremes(#[case] node_count: usize) {
    let mut rng = seeded_source(5);
    let empty = independent_edge_graph(node_count, 0.0, &mut rng).expect("valid");
    let complete = independent_edge_graph(node_count, 1.0, &mut rng).expect("valid");
    assert_eq!(empty.edge_count(), 0);
    for u in 0..node_count {
        for v in (u + 1)..node_count {
            assert!(complete.has_edge(u, v));
        }
    }
}

#[rstest]
fn community_graph_with_mixed_densities_stays_within_blocks_when_inter_is_zero() {
    let matrix = ProbabilityMatrix::new(vec![
        vec![0.3, 0.0, 0.0],
        vec![0.0, 0.25, 0.0],
        vec![0.0, 0.0, 0.2],
    ])
    .expect("valid matrix");
    let generated =
        community_block_graph(&[5, 10, 15], &matrix, &mut seeded_source(3)).expect("valid input");
    assert_eq!(generated.graph.node_count(), 30);
    assert_eq!(generated.communities.sizes(), [5, 10, 15]);
    for (u, v) in generated.graph.edges() {
        assert_eq!(
            generated.communities.community_of(u),
            generated.communities.community_of(v)
        );
    }
}

#[rstest]
fn same_seed_reproduces_every_model() {
    let matrix = ProbabilityMatrix::planted(2, 0.6, 0.1).expect("valid matrix");
    let build = |seed| {
        let mut rng = seeded_source(seed);
        (
            independent_edge_graph(20, 0.3, &mut rng).expect("valid"),
            small_world_graph(20, 4, 0.3, &mut rng).expect("valid"),
            community_block_graph(&[10, 10], &matrix, &mut rng).expect("valid"),
        )
    };
    assert_eq!(build(17), build(17));
}
