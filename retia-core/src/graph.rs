//! Undirected, unweighted graph storage and the read-only [`Topology`] view.
//!
//! Adjacency is kept in ordered maps so iteration over nodes and neighbours
//! is deterministic, which keeps seeded generation reproducible.

use std::{
    collections::{BTreeMap, BTreeSet},
    ops::Bound,
};

use crate::{Result, error::GraphError};

/// Identifier of a node within a [`Graph`].
pub type NodeId = usize;

/// Read-only structural view over an undirected graph.
///
/// This is the surface consumed by metric computations. [`Graph`] is the
/// canonical implementation.
///
/// # Examples
/// ```
/// use retia_core::{Graph, Topology};
///
/// fn leaves<T: Topology>(graph: &T) -> usize {
///     graph.nodes().filter(|&node| graph.degree(node) == 1).count()
/// }
///
/// let mut graph = Graph::with_nodes(3);
/// graph.add_edge(0, 1)?;
/// graph.add_edge(1, 2)?;
/// assert_eq!(leaves(&graph), 2);
/// # Ok::<(), retia_core::GraphError>(())
/// ```
pub trait Topology {
    /// Returns the number of nodes.
    fn node_count(&self) -> usize;

    /// Returns the number of undirected edges.
    fn edge_count(&self) -> usize;

    /// Iterates node ids in ascending order.
    fn nodes(&self) -> impl Iterator<Item = NodeId> + '_;

    /// Iterates the neighbours of `node` in ascending order.
    ///
    /// Unknown nodes yield an empty iterator.
    fn neighbors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_;

    /// Returns the number of edges incident to `node` (zero when unknown).
    fn degree(&self, node: NodeId) -> usize;

    /// Returns whether `u` and `v` are adjacent.
    fn has_edge(&self, u: NodeId, v: NodeId) -> bool;

    /// Returns whether `node` is part of the graph.
    fn contains_node(&self, node: NodeId) -> bool;

    /// Returns whether the graph has no nodes.
    #[must_use]
    fn is_empty(&self) -> bool {
        self.node_count() == 0
    }
}

/// Mutable undirected graph without self-loops or parallel edges.
///
/// New ids handed out by [`Graph::add_next_node`] come from a monotonic
/// counter that always stays above every inserted id, so growth never reuses
/// an id even when the existing ids are sparse.
///
/// # Examples
/// ```
/// use retia_core::{Graph, Topology};
///
/// let mut graph = Graph::new();
/// graph.add_node(4)?;
/// let next = graph.add_next_node()?;
/// assert_eq!(next, 5);
/// assert!(graph.add_edge(4, next)?);
/// assert!(!graph.add_edge(next, 4)?, "edges are idempotent");
/// assert_eq!(graph.edge_count(), 1);
/// # Ok::<(), retia_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: BTreeMap<NodeId, BTreeSet<NodeId>>,
    edge_count: usize,
    next_node_id: NodeId,
}

impl Graph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph holding the isolated nodes `0..node_count`.
    ///
    /// # Examples
    /// ```
    /// use retia_core::{Graph, Topology};
    ///
    /// let graph = Graph::with_nodes(4);
    /// assert_eq!(graph.nodes().collect::<Vec<_>>(), [0, 1, 2, 3]);
    /// assert_eq!(graph.next_node_id(), 4);
    /// ```
    #[must_use]
    pub fn with_nodes(node_count: usize) -> Self {
        Self {
            adjacency: (0..node_count).map(|node| (node, BTreeSet::new())).collect(),
            edge_count: 0,
            next_node_id: node_count,
        }
    }

    /// Returns the id [`Graph::add_next_node`] will assign.
    #[must_use]
    pub fn next_node_id(&self) -> NodeId {
        self.next_node_id
    }

    /// Inserts an isolated node with an explicit id.
    ///
    /// # Errors
    /// Returns [`GraphError::DuplicateNodeId`] when `node` already exists.
    pub fn add_node(&mut self, node: NodeId) -> Result<()> {
        if self.adjacency.contains_key(&node) {
            return Err(GraphError::DuplicateNodeId { node });
        }
        self.adjacency.insert(node, BTreeSet::new());
        self.next_node_id = self.next_node_id.max(node.saturating_add(1));
        Ok(())
    }

    /// Inserts an isolated node using the internal id counter and returns it.
    ///
    /// # Errors
    /// Returns [`GraphError::DuplicateNodeId`] if the counter collides with an
    /// existing id, which indicates a corrupted counter.
    pub fn add_next_node(&mut self) -> Result<NodeId> {
        let node = self.next_node_id;
        self.add_node(node)?;
        Ok(node)
    }

    /// Connects `u` and `v`.
    ///
    /// Returns `true` when the edge is new and `false` when it was already
    /// present; repeated insertion is a no-op.
    ///
    /// # Errors
    /// Returns [`GraphError::SelfLoop`] when `u == v` and
    /// [`GraphError::UnknownNode`] when either endpoint is missing.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId) -> Result<bool> {
        self.check_endpoints(u, v)?;
        let inserted = self.adjacency.get_mut(&u).is_some_and(|set| set.insert(v));
        if !inserted {
            return Ok(false);
        }
        if let Some(set) = self.adjacency.get_mut(&v) {
            set.insert(u);
        }
        self.edge_count += 1;
        Ok(true)
    }

    /// Disconnects `u` and `v`, returning whether an edge was removed.
    ///
    /// # Errors
    /// Returns [`GraphError::SelfLoop`] when `u == v` and
    /// [`GraphError::UnknownNode`] when either endpoint is missing.
    pub fn remove_edge(&mut self, u: NodeId, v: NodeId) -> Result<bool> {
        self.check_endpoints(u, v)?;
        let removed = self.adjacency.get_mut(&u).is_some_and(|set| set.remove(&v));
        if !removed {
            return Ok(false);
        }
        if let Some(set) = self.adjacency.get_mut(&v) {
            set.remove(&u);
        }
        self.edge_count -= 1;
        Ok(true)
    }

    /// Iterates every edge once as `(low, high)` in ascending order.
    ///
    /// # Examples
    /// ```
    /// use retia_core::Graph;
    ///
    /// let mut graph = Graph::with_nodes(3);
    /// graph.add_edge(2, 0)?;
    /// graph.add_edge(1, 2)?;
    /// assert_eq!(graph.edges().collect::<Vec<_>>(), [(0, 2), (1, 2)]);
    /// # Ok::<(), retia_core::GraphError>(())
    /// ```
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.adjacency.iter().flat_map(|(&u, neighbours)| {
            neighbours
                .range((Bound::Excluded(u), Bound::Unbounded))
                .map(move |&v| (u, v))
        })
    }

    /// Returns the neighbour set of `node`, if the node exists.
    #[must_use]
    pub fn neighbor_set(&self, node: NodeId) -> Option<&BTreeSet<NodeId>> {
        self.adjacency.get(&node)
    }

    fn check_endpoints(&self, u: NodeId, v: NodeId) -> Result<()> {
        if u == v {
            return Err(GraphError::SelfLoop { node: u });
        }
        for node in [u, v] {
            if !self.adjacency.contains_key(&node) {
                return Err(GraphError::UnknownNode { node });
            }
        }
        Ok(())
    }
}

impl Topology for Graph {
    fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency.keys().copied()
    }

    fn neighbors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency
            .get(&node)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    fn degree(&self, node: NodeId) -> usize {
        self.adjacency.get(&node).map_or(0, BTreeSet::len)
    }

    fn has_edge(&self, u: NodeId, v: NodeId) -> bool {
        self.adjacency.get(&u).is_some_and(|set| set.contains(&v))
    }

    fn contains_node(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(&node)
    }
}
