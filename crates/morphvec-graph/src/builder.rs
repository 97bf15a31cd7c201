//! Builder for region adjacency graphs.

use std::collections::{HashMap, HashSet};

use crate::budget::GraphBudget;
use crate::error::GraphError;
use crate::graph::RegionGraph;
use crate::node::{NodeId, RegionNode};

/// Builder for [`RegionGraph`].
///
/// Node insertion order becomes the graph's canonical enumeration order and
/// edge insertion order becomes each node's neighbor order. Both feed the
/// vectorizer's tie-breaks, so callers should add nodes in label order.
///
/// # Example
///
/// ```
/// use morphvec_graph::{NodeId, RegionGraph};
///
/// let graph = RegionGraph::builder()
///     .region(1, 0, 120)
///     .region(2, 255, 40)
///     .signature(1, 0.8)
///     .signature(2, 1.6)
///     .edge(1, 2)
///     .build()
///     .unwrap();
///
/// assert_eq!(graph.len(), 2);
/// assert_eq!(graph.degree(NodeId(1)), Some(1));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RegionGraphBuilder {
    nodes: Vec<RegionNode>,
    signatures: Vec<(NodeId, f64)>,
    edges: Vec<(NodeId, NodeId)>,
    budget: GraphBudget,
}

impl RegionGraphBuilder {
    /// Creates a new builder with the default budget.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node.
    pub fn node(mut self, node: RegionNode) -> Self {
        self.nodes.push(node);
        self
    }

    /// Adds a region with color and area but no signature yet.
    pub fn region(self, id: impl Into<NodeId>, mean_color: u8, pixel_count: u64) -> Self {
        self.node(
            RegionNode::new(id)
                .with_mean_color(mean_color)
                .with_pixel_count(pixel_count),
        )
    }

    /// Attaches a signature weight to a node added earlier.
    ///
    /// Applied in order at build time, so a later call overrides an earlier
    /// one (and overrides a weight set on the node itself).
    pub fn signature(mut self, id: impl Into<NodeId>, weight: f64) -> Self {
        self.signatures.push((id.into(), weight));
        self
    }

    /// Adds an undirected edge. Repeated edges are collapsed.
    pub fn edge(mut self, a: impl Into<NodeId>, b: impl Into<NodeId>) -> Self {
        self.edges.push((a.into(), b.into()));
        self
    }

    /// Sets the size budget.
    pub fn budget(mut self, budget: GraphBudget) -> Self {
        self.budget = budget;
        self
    }

    /// Builds the graph.
    pub fn build(self) -> Result<RegionGraph, GraphError> {
        if self.nodes.len() > self.budget.max_nodes {
            return Err(GraphError::BudgetExceeded {
                what: "node",
                limit: self.budget.max_nodes,
                actual: self.nodes.len(),
            });
        }

        let mut nodes = self.nodes;
        let mut index = HashMap::with_capacity(nodes.len());
        for (ix, node) in nodes.iter().enumerate() {
            if index.insert(node.id, ix).is_some() {
                return Err(GraphError::DuplicateNode(node.id));
            }
        }

        for (id, weight) in self.signatures {
            let ix = *index.get(&id).ok_or(GraphError::UnknownNode(id))?;
            nodes[ix].weight = Some(weight);
        }

        let mut adjacency = vec![Vec::new(); nodes.len()];
        let mut seen: HashSet<(usize, usize)> = HashSet::with_capacity(self.edges.len());
        for (a, b) in self.edges {
            let ia = *index.get(&a).ok_or(GraphError::UnknownNode(a))?;
            let ib = *index.get(&b).ok_or(GraphError::UnknownNode(b))?;
            if ia == ib {
                return Err(GraphError::SelfLoop(a));
            }
            if !seen.insert((ia.min(ib), ia.max(ib))) {
                continue;
            }
            adjacency[ia].push(ib);
            adjacency[ib].push(ia);
        }

        if seen.len() > self.budget.max_edges {
            return Err(GraphError::BudgetExceeded {
                what: "edge",
                limit: self.budget.max_edges,
                actual: seen.len(),
            });
        }

        Ok(RegionGraph {
            nodes,
            index,
            adjacency,
            edge_count: seen.len(),
        })
    }
}
