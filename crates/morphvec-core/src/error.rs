//! Error types for vectorization.

use morphvec_graph::{Attribute, NodeId};
use thiserror::Error;

/// Broad failure category of a [`VectorizeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An attribute value is outside its domain.
    Validation,
    /// The graph shape does not allow vectorization.
    Structural,
    /// A referenced node does not exist.
    Lookup,
    /// A required node attribute is absent.
    MissingAttribute,
}

/// Errors from vectorizing a region graph.
///
/// No partial vector is ever returned alongside one of these.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VectorizeError {
    #[error("invalid mean color {value}: expected 0, 1 or 255")]
    InvalidColor {
        value: u8,
        /// Node carrying the color, when known.
        node: Option<NodeId>,
    },

    #[error("invalid weight {value} on node {node}: weight must be finite")]
    InvalidWeight { value: f64, node: NodeId },

    #[error("cannot select a root in an empty graph")]
    EmptyGraph,

    #[error("traversal reached {reached} of {total} nodes; graph is disconnected")]
    Disconnected { reached: usize, total: usize },

    #[error("node {0} is not in the graph")]
    NodeNotFound(NodeId),

    #[error("node {node} has no {attribute}")]
    MissingAttribute { node: NodeId, attribute: Attribute },
}

impl VectorizeError {
    /// Stable error code for reporting.
    pub fn code(&self) -> &'static str {
        match self {
            VectorizeError::InvalidColor { .. } => "VEC_001",
            VectorizeError::InvalidWeight { .. } => "VEC_002",
            VectorizeError::EmptyGraph => "VEC_003",
            VectorizeError::Disconnected { .. } => "VEC_004",
            VectorizeError::NodeNotFound(_) => "VEC_005",
            VectorizeError::MissingAttribute { .. } => "VEC_006",
        }
    }

    /// Failure category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            VectorizeError::InvalidColor { .. } | VectorizeError::InvalidWeight { .. } => {
                ErrorKind::Validation
            }
            VectorizeError::EmptyGraph | VectorizeError::Disconnected { .. } => {
                ErrorKind::Structural
            }
            VectorizeError::NodeNotFound(_) => ErrorKind::Lookup,
            VectorizeError::MissingAttribute { .. } => ErrorKind::MissingAttribute,
        }
    }
}

/// Errors from loading a [`VectorizeConfig`](crate::VectorizeConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("round_decimals must be at most {max}, got {value}")]
    RoundDecimalsOutOfRange { value: u8, max: u8 },
}
