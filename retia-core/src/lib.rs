//! Retia core library.
//!
//! Builds synthetic networks under random graph models (independent edges,
//! small-world rewiring, community blocks) and grows existing graphs under
//! attachment rules (uniform, preferential, Price's mixture). Every
//! stochastic decision is drawn from an explicit [`RandomSource`], so a
//! seeded generator reproduces a run exactly.
//!
//! # Examples
//! ```
//! use retia_core::{AttachmentRule, Topology, grow, seeded_source, small_world_graph};
//!
//! let mut rng = seeded_source(2024);
//! let mut graph = small_world_graph(30, 4, 0.1, &mut rng)?;
//! grow(&mut graph, AttachmentRule::Preferential, 10, 2, &mut rng)?;
//! assert_eq!(graph.node_count(), 40);
//! # Ok::<(), retia_core::GraphError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod graph;
mod growth;
mod models;
mod rng;
#[cfg(test)]
mod test_utils;

pub use crate::{
    error::{GraphError, GraphErrorCode, Parameter, Result},
    graph::{Graph, NodeId, Topology},
    growth::{
        AttachmentRule, GrowthOutcome, grow, preferential_attachment, price_attachment,
        uniform_attachment,
    },
    models::{
        Communities, CommunityGraph, ProbabilityMatrix, community_block_graph,
        independent_edge_graph, small_world_graph,
    },
    rng::{DEFAULT_SEED, RandomSource, seeded_source},
};
