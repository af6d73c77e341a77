//! Errors reported by metric computations.

use retia_core::{NodeId, define_error_codes};
use thiserror::Error;

/// Errors surfaced when a metric is undefined for the given graph or
/// configuration.
#[derive(Clone, Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum MetricsError {
    /// The metric averages over nodes but the graph has none.
    #[error("metric is undefined for an empty graph")]
    EmptyGraph,
    /// Some node pair has no connecting path.
    #[error("graph is not connected: {reachable} of {nodes} nodes reachable")]
    Disconnected {
        /// Nodes reachable from the first node, including itself.
        reachable: usize,
        /// Total number of nodes.
        nodes: usize,
    },
    /// The source of a path query is not part of the graph.
    #[error("node {node} does not exist")]
    UnknownNode {
        /// The missing node.
        node: NodeId,
    },
    /// Power iteration did not reach the tolerance within its budget.
    #[error("rank iteration did not converge within {iterations} iterations")]
    NotConverged {
        /// Iterations performed.
        iterations: usize,
    },
    /// A configuration value was outside its valid domain.
    #[error("invalid {field}: {reason}")]
    InvalidConfig {
        /// The offending configuration field.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

define_error_codes! {
    /// Stable codes describing [`MetricsError`] variants.
    enum MetricsErrorCode for MetricsError {
        /// The graph has no nodes.
        EmptyGraph => EmptyGraph => "METRICS_EMPTY_GRAPH",
        /// The graph is not connected.
        Disconnected => Disconnected { .. } => "METRICS_DISCONNECTED",
        /// The queried node is missing.
        UnknownNode => UnknownNode { .. } => "METRICS_UNKNOWN_NODE",
        /// Iteration budget exhausted.
        NotConverged => NotConverged { .. } => "METRICS_NOT_CONVERGED",
        /// Rejected configuration value.
        InvalidConfig => InvalidConfig { .. } => "METRICS_INVALID_CONFIG",
    }
}

/// Convenient alias for results returned by the metrics API.
pub type Result<T> = core::result::Result<T, MetricsError>;
