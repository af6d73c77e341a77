//! Position-indexed adjacency snapshot shared by the traversal metrics.

use std::collections::{BTreeMap, VecDeque};

use retia_core::{NodeId, Topology};

/// Adjacency lists keyed by the position of each node in ascending id order.
pub(crate) struct Dense {
    nodes: Vec<NodeId>,
    adjacency: Vec<Vec<usize>>,
}

impl Dense {
    pub(crate) fn new<T: Topology>(graph: &T) -> Self {
        let nodes: Vec<NodeId> = graph.nodes().collect();
        let position: BTreeMap<NodeId, usize> = nodes
            .iter()
            .enumerate()
            .map(|(index, &node)| (node, index))
            .collect();
        let adjacency = nodes
            .iter()
            .map(|&node| {
                graph
                    .neighbors(node)
                    .filter_map(|neighbour| position.get(&neighbour).copied())
                    .collect()
            })
            .collect();
        Self { nodes, adjacency }
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn node(&self, index: usize) -> NodeId {
        self.nodes[index]
    }

    pub(crate) fn position(&self, node: NodeId) -> Option<usize> {
        self.nodes.binary_search(&node).ok()
    }

    pub(crate) fn neighbours(&self, index: usize) -> &[usize] {
        &self.adjacency[index]
    }

    pub(crate) fn degree(&self, index: usize) -> usize {
        self.adjacency[index].len()
    }

    /// Hop distances from `source`; `None` marks unreachable positions.
    pub(crate) fn distances_from(&self, source: usize) -> Vec<Option<usize>> {
        let mut distance = vec![None; self.len()];
        let mut queue = VecDeque::from([source]);
        distance[source] = Some(0);
        while let Some(current) = queue.pop_front() {
            let next = distance[current].map_or(0, |hops| hops + 1);
            for &neighbour in self.neighbours(current) {
                if distance[neighbour].is_none() {
                    distance[neighbour] = Some(next);
                    queue.push_back(neighbour);
                }
            }
        }
        distance
    }

    pub(crate) fn scores_by_node(&self, scores: Vec<f64>) -> BTreeMap<NodeId, f64> {
        self.nodes.iter().copied().zip(scores).collect()
    }
}
