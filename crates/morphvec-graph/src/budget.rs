//! Size limits enforced when a graph is built.
//!
//! Region graphs from a single segmented image are small (tens to a few
//! hundred regions). The default budget leaves plenty of headroom while still
//! catching a runaway segmentation before it reaches the vectorizer.

use serde::{Deserialize, Serialize};

/// Graph size budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GraphBudget {
    /// Maximum number of nodes.
    pub max_nodes: usize,
    /// Maximum number of distinct undirected edges.
    pub max_edges: usize,
}

impl Default for GraphBudget {
    fn default() -> Self {
        Self {
            max_nodes: Self::DEFAULT_MAX_NODES,
            max_edges: Self::DEFAULT_MAX_EDGES,
        }
    }
}

impl GraphBudget {
    /// Default maximum number of nodes.
    pub const DEFAULT_MAX_NODES: usize = 4096;

    /// Default maximum number of edges.
    pub const DEFAULT_MAX_EDGES: usize = 65_536;

    /// A budget that never rejects a graph.
    pub fn unbounded() -> Self {
        Self {
            max_nodes: usize::MAX,
            max_edges: usize::MAX,
        }
    }
}
