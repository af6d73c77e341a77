//! Community-structured stochastic block model.

use tracing::{debug, instrument, warn};

use crate::{
    Graph, NodeId, RandomSource, Result, Topology,
    error::{GraphError, Parameter},
};

use super::validate_probability;

/// Square matrix of edge probabilities between communities.
///
/// Entry `(i, j)` is the probability that a node of community `i` links to a
/// node of community `j`.
///
/// # Examples
/// ```
/// use retia_core::ProbabilityMatrix;
///
/// let matrix = ProbabilityMatrix::new(vec![vec![0.9, 0.1], vec![0.1, 0.8]])?;
/// assert_eq!(matrix.order(), 2);
/// assert_eq!(matrix.get(1, 0), Some(0.1));
/// assert!(matrix.is_symmetric());
/// # Ok::<(), retia_core::GraphError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ProbabilityMatrix {
    order: usize,
    entries: Vec<f64>,
}

impl ProbabilityMatrix {
    /// Validates `rows` and builds the matrix.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidParameter`] when the rows do not form a
    /// square matrix or an entry is not a finite probability.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self> {
        let order = rows.len();
        let mut entries = Vec::with_capacity(order * order);
        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != order {
                return Err(GraphError::invalid(
                    Parameter::ProbabilityMatrix,
                    format!(
                        "row {index} has {} entries but the matrix has {order} rows",
                        row.len()
                    ),
                ));
            }
            for value in row {
                entries.push(validate_probability(Parameter::ProbabilityMatrix, value)?);
            }
        }
        Ok(Self { order, entries })
    }

    /// Builds a matrix with `intra` on the diagonal and `inter` elsewhere.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidParameter`] when either value is not a
    /// finite probability.
    pub fn planted(order: usize, intra: f64, inter: f64) -> Result<Self> {
        let rows = (0..order)
            .map(|i| {
                (0..order)
                    .map(|j| if i == j { intra } else { inter })
                    .collect()
            })
            .collect();
        Self::new(rows)
    }

    /// Returns the number of communities the matrix describes.
    #[must_use]
    pub fn order(&self) -> usize {
        self.order
    }

    /// Returns entry `(row, col)`, or `None` when out of range.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.order || col >= self.order {
            return None;
        }
        self.entries.get(row * self.order + col).copied()
    }

    /// Returns whether `(i, j)` equals `(j, i)` for every pair.
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        (0..self.order).all(|i| ((i + 1)..self.order).all(|j| self.get(i, j) == self.get(j, i)))
    }
}

/// Assignment of every node to exactly one community.
///
/// Communities occupy consecutive id ranges in increasing order, so community
/// `0` holds the first `sizes()[0]` ids, and so on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Communities {
    assignment: Vec<usize>,
    sizes: Vec<usize>,
}

impl Communities {
    fn from_sizes(sizes: &[usize]) -> Self {
        let assignment = sizes
            .iter()
            .enumerate()
            .flat_map(|(community, &size)| std::iter::repeat_n(community, size))
            .collect();
        Self {
            assignment,
            sizes: sizes.to_vec(),
        }
    }

    /// Returns the community index of `node`, if the node was generated.
    #[must_use]
    pub fn community_of(&self, node: NodeId) -> Option<usize> {
        self.assignment.get(node).copied()
    }

    /// Returns the ids belonging to `community` (empty when unknown).
    pub fn members(&self, community: usize) -> impl Iterator<Item = NodeId> + '_ {
        self.assignment
            .iter()
            .enumerate()
            .filter(move |&(_, &assigned)| assigned == community)
            .map(|(node, _)| node)
    }

    /// Returns the size of each community.
    #[must_use]
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Returns the number of communities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// Returns whether no community was defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Iterates `(node, community)` pairs in ascending node order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, usize)> + '_ {
        self.assignment.iter().copied().enumerate()
    }
}

/// Graph generated by [`community_block_graph`] together with its partition.
#[derive(Clone, Debug, PartialEq)]
pub struct CommunityGraph {
    /// Generated graph.
    pub graph: Graph,
    /// Community of every node in `graph`.
    pub communities: Communities,
}

/// Builds a stochastic block model graph.
///
/// Node ids `0..sum(community_sizes)` are assigned to communities in order.
/// Each pair `(u, v)` with `u < v` is then visited in ascending order and
/// linked when a [`RandomSource::unit`] draw falls below
/// `P[community(u)][community(v)]`. An asymmetric matrix is accepted, but
/// only the upper-triangle orientation is consulted for each pair.
///
/// # Errors
/// Returns [`GraphError::InvalidParameter`] when the matrix order differs
/// from the number of communities.
///
/// # Examples
/// ```
/// use retia_core::{ProbabilityMatrix, Topology, community_block_graph, seeded_source};
///
/// let matrix = ProbabilityMatrix::new(vec![vec![1.0, 0.0], vec![0.0, 1.0]])?;
/// let generated = community_block_graph(&[3, 4], &matrix, &mut seeded_source(1))?;
/// assert_eq!(generated.graph.edge_count(), 3 + 6);
/// assert_eq!(generated.communities.community_of(5), Some(1));
/// # Ok::<(), retia_core::GraphError>(())
/// ```
#[instrument(
    name = "models.community_block",
    skip(probability_matrix, rng),
    fields(communities = community_sizes.len()),
    err,
)]
pub fn community_block_graph<R>(
    community_sizes: &[usize],
    probability_matrix: &ProbabilityMatrix,
    rng: &mut R,
) -> Result<CommunityGraph>
where
    R: RandomSource + ?Sized,
{
    if probability_matrix.order() != community_sizes.len() {
        return Err(GraphError::invalid(
            Parameter::CommunitySizes,
            format!(
                "{} communities given for a {order}x{order} probability matrix",
                community_sizes.len(),
                order = probability_matrix.order()
            ),
        ));
    }
    if !probability_matrix.is_symmetric() {
        warn!("probability matrix is asymmetric; using the upper-triangle orientation");
    }

    let communities = Communities::from_sizes(community_sizes);
    let node_count = communities.assignment.len();
    let mut graph = Graph::with_nodes(node_count);

    for (u, &cu) in communities.assignment.iter().enumerate() {
        for (v, &cv) in communities.assignment.iter().enumerate().skip(u + 1) {
            let probability = probability_matrix.get(cu, cv).unwrap_or(0.0);
            if rng.unit() < probability {
                graph.add_edge(u, v)?;
            }
        }
    }

    debug!(
        nodes = node_count,
        edges = graph.edge_count(),
        "community block graph generated"
    );
    Ok(CommunityGraph { graph, communities })
}
