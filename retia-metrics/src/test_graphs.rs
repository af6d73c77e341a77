//! Reference shapes shared by unit tests.

use retia_core::Graph;

fn linked(node_count: usize, edges: impl IntoIterator<Item = (usize, usize)>) -> Graph {
    let mut graph = Graph::with_nodes(node_count);
    for (u, v) in edges {
        graph.add_edge(u, v).expect("fixture endpoints exist");
    }
    graph
}

pub(crate) fn path(node_count: usize) -> Graph {
    linked(node_count, (1..node_count).map(|node| (node - 1, node)))
}

pub(crate) fn cycle(node_count: usize) -> Graph {
    linked(node_count, (0..node_count).map(|node| (node, (node + 1) % node_count)))
}

/// Hub `0` joined to leaves `1..=leaves`.
pub(crate) fn star(leaves: usize) -> Graph {
    linked(leaves + 1, (1..=leaves).map(|leaf| (0, leaf)))
}

pub(crate) fn complete(node_count: usize) -> Graph {
    linked(
        node_count,
        (0..node_count).flat_map(|u| ((u + 1)..node_count).map(move |v| (u, v))),
    )
}
