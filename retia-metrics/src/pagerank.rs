//! Rank centrality by power iteration.

use std::collections::BTreeMap;

use retia_core::{NodeId, Topology};
use tracing::{debug, instrument};

use crate::{MetricsError, Result, dense::Dense};

/// Damping, tolerance and iteration budget for [`pagerank`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageRankConfig {
    damping: f64,
    tolerance: f64,
    max_iterations: usize,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            damping: 0.85,
            tolerance: 1e-6,
            max_iterations: 100,
        }
    }
}

impl PageRankConfig {
    /// Validates and builds a configuration.
    ///
    /// # Errors
    /// Returns [`MetricsError::InvalidConfig`] when `damping` is outside
    /// `[0, 1]`, `tolerance` is not a positive finite value, or
    /// `max_iterations` is zero.
    pub fn new(damping: f64, tolerance: f64, max_iterations: usize) -> Result<Self> {
        if !(0.0..=1.0).contains(&damping) {
            return Err(MetricsError::InvalidConfig {
                field: "damping",
                reason: format!("{damping} is not in [0, 1]"),
            });
        }
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(MetricsError::InvalidConfig {
                field: "tolerance",
                reason: format!("{tolerance} is not a positive finite value"),
            });
        }
        if max_iterations == 0 {
            return Err(MetricsError::InvalidConfig {
                field: "max_iterations",
                reason: "at least one iteration is required".to_owned(),
            });
        }
        Ok(Self {
            damping,
            tolerance,
            max_iterations,
        })
    }

    #[must_use]
    pub fn damping(&self) -> f64 {
        self.damping
    }

    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    #[must_use]
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }
}

/// Returns the stationary rank of every node under a damped random walk.
///
/// Each step follows a uniformly chosen incident edge with probability
/// `damping` and teleports to a uniform node otherwise; nodes without edges
/// spread their mass uniformly. Iteration stops once the L1 change drops
/// below `n * tolerance`. Scores sum to one.
///
/// # Errors
/// Returns [`MetricsError::NotConverged`] when the iteration budget runs out.
///
/// # Examples
/// ```
/// use retia_core::Graph;
/// use retia_metrics::{PageRankConfig, pagerank};
///
/// let mut graph = Graph::with_nodes(3);
/// graph.add_edge(0, 1)?;
/// graph.add_edge(1, 2)?;
/// let ranks = pagerank(&graph, PageRankConfig::default())?;
/// assert!(ranks[&1] > ranks[&0]);
/// assert!((ranks.values().sum::<f64>() - 1.0).abs() < 1e-9);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[instrument(name = "metrics.pagerank", skip(graph), fields(nodes = graph.node_count()), err)]
pub fn pagerank<T: Topology>(graph: &T, config: PageRankConfig) -> Result<BTreeMap<NodeId, f64>> {
    let dense = Dense::new(graph);
    let node_count = dense.len();
    if node_count == 0 {
        return Ok(BTreeMap::new());
    }

    let n = node_count as f64;
    let mut ranks = vec![1.0 / n; node_count];
    for iteration in 1..=config.max_iterations {
        let previous = ranks;
        let dangling: f64 = (0..node_count)
            .filter(|&index| dense.degree(index) == 0)
            .map(|index| previous[index])
            .sum();
        let base = (config.damping * dangling + (1.0 - config.damping)) / n;

        ranks = vec![base; node_count];
        for (index, &rank) in previous.iter().enumerate() {
            let degree = dense.degree(index);
            if degree == 0 {
                continue;
            }
            let share = config.damping * rank / degree as f64;
            for &neighbour in dense.neighbours(index) {
                ranks[neighbour] += share;
            }
        }

        let change: f64 = ranks
            .iter()
            .zip(&previous)
            .map(|(current, last)| (current - last).abs())
            .sum();
        if change < n * config.tolerance {
            debug!(iterations = iteration, "rank iteration converged");
            return Ok(dense.scores_by_node(ranks));
        }
    }
    Err(MetricsError::NotConverged {
        iterations: config.max_iterations,
    })
}
