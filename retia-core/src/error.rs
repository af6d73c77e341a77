//! Error types for the retia core library.
//!
//! Defines the error enum shared by graph mutation, random generation and
//! growth, together with stable machine-readable codes and a result alias.

use std::fmt;

use thiserror::Error;

use crate::graph::NodeId;

/// Generates a `Copy` code enum mirroring the variants of an error type, plus
/// a `code()` accessor on the error.
#[macro_export]
macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl ::std::fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Names the caller-supplied argument rejected by [`GraphError::InvalidParameter`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum Parameter {
    /// Edge probability of the independent-edge model.
    EdgeProbability,
    /// Rewiring probability of the small-world model.
    RewireProbability,
    /// Entry or shape of a community probability matrix.
    ProbabilityMatrix,
    /// Community size list of the block model.
    CommunitySizes,
    /// Links attached by each new node during growth.
    LinksPerNode,
    /// Share of preferential links in Price's model.
    PreferentialFraction,
    /// Weights handed to a weighted draw.
    Weights,
}

impl Parameter {
    /// Returns the argument name as it appears in the public API.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EdgeProbability => "edge_probability",
            Self::RewireProbability => "rewire_probability",
            Self::ProbabilityMatrix => "probability_matrix",
            Self::CommunitySizes => "community_sizes",
            Self::LinksPerNode => "links_per_node",
            Self::PreferentialFraction => "preferential_fraction",
            Self::Weights => "weights",
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type produced by graph mutation, generation and growth.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GraphError {
    /// A caller-supplied argument was outside its valid domain.
    #[error("invalid {parameter}: {reason}")]
    InvalidParameter {
        /// Argument that failed validation.
        parameter: Parameter,
        /// Human-readable description of the violated constraint.
        reason: String,
    },
    /// A random draw had no admissible outcome.
    #[error("cannot sample {context}: no admissible candidate")]
    SamplingExhausted {
        /// Operation whose candidate pool was empty or weightless.
        context: &'static str,
    },
    /// The node id is already present in the graph.
    #[error("node {node} already exists")]
    DuplicateNodeId {
        /// The colliding id.
        node: NodeId,
    },
    /// The node id is not present in the graph.
    #[error("node {node} does not exist")]
    UnknownNode {
        /// The missing id.
        node: NodeId,
    },
    /// Both endpoints of an edge were the same node.
    #[error("self-loop on node {node} is not allowed")]
    SelfLoop {
        /// The node used for both endpoints.
        node: NodeId,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// A caller-supplied argument was outside its valid domain.
        InvalidParameter => InvalidParameter { .. } => "GRAPH_INVALID_PARAMETER",
        /// A random draw had no admissible outcome.
        SamplingExhausted => SamplingExhausted { .. } => "GRAPH_SAMPLING_EXHAUSTED",
        /// The node id is already present in the graph.
        DuplicateNodeId => DuplicateNodeId { .. } => "GRAPH_DUPLICATE_NODE_ID",
        /// The node id is not present in the graph.
        UnknownNode => UnknownNode { .. } => "GRAPH_UNKNOWN_NODE",
        /// Both endpoints of an edge were the same node.
        SelfLoop => SelfLoop { .. } => "GRAPH_SELF_LOOP",
    }
}

impl GraphError {
    pub(crate) fn invalid(parameter: Parameter, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            parameter,
            reason: reason.into(),
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GraphError>;
