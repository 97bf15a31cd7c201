//! Graph-to-vector entry point.

use morphvec_graph::{NodeId, RegionGraph};

use crate::config::{DisconnectedPolicy, VectorizeConfig};
use crate::error::VectorizeError;
use crate::fingerprint::vector_fingerprint;
use crate::root::select_root;
use crate::traversal::{traverse_with, Traversal};

/// A vectorized graph together with how it was produced.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphEmbedding {
    /// Root the traversal started from.
    pub root: NodeId,
    /// Signed signatures in visiting order.
    pub values: Vec<f64>,
    /// Visited node ids in visiting order.
    pub order: Vec<NodeId>,
    /// Number of nodes in the input graph.
    pub total_nodes: usize,
}

impl GraphEmbedding {
    /// Vector length.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the vector is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns true if every node of the input graph was visited.
    pub fn is_complete(&self) -> bool {
        self.order.len() == self.total_nodes
    }

    /// Fraction of the input graph's nodes that were visited.
    pub fn coverage(&self) -> f64 {
        if self.total_nodes == 0 {
            return 0.0;
        }
        self.order.len() as f64 / self.total_nodes as f64
    }

    /// BLAKE3 fingerprint of the vector.
    pub fn fingerprint(&self) -> String {
        vector_fingerprint(&self.values)
    }
}

/// Turns region graphs into comparable vectors.
///
/// The root is always chosen over the whole graph before the traversal
/// starts.
///
/// # Example
///
/// ```
/// use morphvec_core::GraphVectorizer;
/// use morphvec_graph::{NodeId, RegionGraph, RegionNode};
///
/// let graph = RegionGraph::builder()
///     .node(RegionNode::region(1, 2.0, 0, 10))
///     .node(RegionNode::region(2, 1.0, 0, 10))
///     .node(RegionNode::region(3, 3.0, 0, 10))
///     .edge(1, 2)
///     .edge(2, 3)
///     .build()
///     .unwrap();
///
/// let (vector, order) = GraphVectorizer::default().vectorize_with_order(&graph).unwrap();
/// assert_eq!(vector, vec![-1.0, -2.0, -3.0]);
/// assert_eq!(order, vec![NodeId(2), NodeId(1), NodeId(3)]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GraphVectorizer {
    config: VectorizeConfig,
}

impl GraphVectorizer {
    /// Creates a vectorizer with the given config.
    pub fn new(config: VectorizeConfig) -> Self {
        Self { config }
    }

    /// The active config.
    pub fn config(&self) -> &VectorizeConfig {
        &self.config
    }

    /// Vectorizes a graph, keeping root and visiting order.
    pub fn embed(&self, graph: &RegionGraph) -> Result<GraphEmbedding, VectorizeError> {
        let root = select_root(graph)?;
        let Traversal { vector, order } =
            traverse_with(graph, root, self.config.neighbor_ordering)?;

        if order.len() < graph.len() {
            match self.config.disconnected {
                DisconnectedPolicy::Reject => {
                    return Err(VectorizeError::Disconnected {
                        reached: order.len(),
                        total: graph.len(),
                    });
                }
                DisconnectedPolicy::Truncate => {
                    tracing::warn!(
                        root = %root,
                        reached = order.len(),
                        total = graph.len(),
                        "graph is disconnected; unreachable nodes left out of the vector"
                    );
                }
            }
        }

        let values = match self.config.round_decimals {
            Some(decimals) => vector.into_iter().map(|v| round_f64(v, decimals)).collect(),
            None => vector,
        };

        Ok(GraphEmbedding {
            root,
            values,
            order,
            total_nodes: graph.len(),
        })
    }

    /// Vectorizes a graph.
    pub fn vectorize(&self, graph: &RegionGraph) -> Result<Vec<f64>, VectorizeError> {
        self.embed(graph).map(|e| e.values)
    }

    /// Vectorizes a graph and returns the visiting order alongside.
    pub fn vectorize_with_order(
        &self,
        graph: &RegionGraph,
    ) -> Result<(Vec<f64>, Vec<NodeId>), VectorizeError> {
        self.embed(graph).map(|e| (e.values, e.order))
    }
}

/// Vectorizes a graph with the default config.
pub fn vectorize(graph: &RegionGraph) -> Result<Vec<f64>, VectorizeError> {
    GraphVectorizer::default().vectorize(graph)
}

/// Vectorizes a graph with the default config, returning the visiting order.
pub fn vectorize_with_order(
    graph: &RegionGraph,
) -> Result<(Vec<f64>, Vec<NodeId>), VectorizeError> {
    GraphVectorizer::default().vectorize_with_order(graph)
}

const MAX_EXACT_FRACTION: f64 = 4_503_599_627_370_496.0;

/// Round a float to the specified number of decimal places.
fn round_f64(value: f64, decimals: u8) -> f64 {
    let decimals = decimals.min(VectorizeConfig::MAX_ROUND_DECIMALS);
    let multiplier = 10_f64.powi(decimals as i32);
    let scaled = value * multiplier;
    // From 2^52 up an f64 has no fractional digits left to round away.
    if !scaled.is_finite() || scaled.abs() >= MAX_EXACT_FRACTION {
        return value;
    }
    scaled.round() / multiplier
}
