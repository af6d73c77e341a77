//! Errors raised while importing an edge list.

use retia_core::{GraphError, NodeId, define_error_codes};
use thiserror::Error;

/// Errors surfaced while reading a delimited edge list into a graph.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EdgeListError {
    /// The header row lacks a configured column.
    #[error("header has no `{column}` column")]
    MissingColumn {
        /// Name of the configured column.
        column: String,
    },
    /// An endpoint is not a non-negative integer.
    #[error("line {line}: `{value}` is not a node id")]
    InvalidNodeId {
        /// One-based line of the offending record.
        line: u64,
        /// Raw field contents.
        value: String,
    },
    /// A record joins a node to itself.
    #[error("line {line}: self-loop on node {node}")]
    SelfLoop {
        /// One-based line of the offending record.
        line: u64,
        /// Node used for both endpoints.
        node: NodeId,
    },
    /// The input is not well-formed delimited text.
    #[error("malformed edge list: {source}")]
    Csv {
        /// Underlying reader failure.
        #[from]
        source: csv::Error,
    },
    /// The graph rejected an edge.
    #[error(transparent)]
    Graph {
        /// Underlying graph failure.
        #[from]
        source: GraphError,
    },
    /// The input holds a header but no edges.
    #[error("edge list contains no edges")]
    EmptyInput,
}

define_error_codes! {
    /// Stable codes describing [`EdgeListError`] variants.
    enum EdgeListErrorCode for EdgeListError {
        /// A configured column is absent.
        MissingColumn => MissingColumn { .. } => "EDGELIST_MISSING_COLUMN",
        /// An endpoint failed to parse.
        InvalidNodeId => InvalidNodeId { .. } => "EDGELIST_INVALID_NODE_ID",
        /// A record is a self-loop.
        SelfLoop => SelfLoop { .. } => "EDGELIST_SELF_LOOP",
        /// The delimited text is malformed.
        Csv => Csv { .. } => "EDGELIST_MALFORMED",
        /// The graph rejected an edge.
        Graph => Graph { .. } => "EDGELIST_GRAPH",
        /// No edges were read.
        EmptyInput => EmptyInput => "EDGELIST_EMPTY_INPUT",
    }
}
