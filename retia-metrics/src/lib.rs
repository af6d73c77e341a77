//! Structural and centrality metrics for retia graphs.
//!
//! Every metric is generic over [`retia_core::Topology`] and reports
//! per-node results in ascending id order.
//!
//! # Examples
//! ```
//! use retia_core::{independent_edge_graph, seeded_source};
//! use retia_metrics::{average_clustering, degrees};
//!
//! let graph = independent_edge_graph(30, 0.5, &mut seeded_source(3))?;
//! assert_eq!(degrees(&graph).len(), 30);
//! let clustering = average_clustering(&graph)?;
//! assert!((0.0..=1.0).contains(&clustering));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod centrality;
mod clustering;
mod degree;
mod dense;
mod error;
mod pagerank;
mod paths;
#[cfg(test)]
mod test_graphs;

pub use crate::{
    centrality::{betweenness_centrality, closeness_centrality},
    clustering::{average_clustering, clustering},
    degree::{average_degree_connectivity, degree_histogram, degrees, mean_degree_connectivity},
    error::{MetricsError, MetricsErrorCode, Result},
    pagerank::{PageRankConfig, pagerank},
    paths::{average_shortest_path_length, shortest_path_lengths},
};
