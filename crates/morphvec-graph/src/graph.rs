//! Index-addressed region adjacency graph.

use std::collections::HashMap;

use crate::builder::RegionGraphBuilder;
use crate::node::{NodeId, RegionNode};

/// An immutable region adjacency graph.
///
/// Nodes live in an arena in insertion order, which is the canonical
/// enumeration order used for root tie-breaks. Adjacency is an index→index
/// table; each neighbor list keeps edge insertion order, which is the
/// canonical order for equal-weight neighbors.
#[derive(Debug, Clone, Default)]
pub struct RegionGraph {
    pub(crate) nodes: Vec<RegionNode>,
    pub(crate) index: HashMap<NodeId, usize>,
    pub(crate) adjacency: Vec<Vec<usize>>,
    pub(crate) edge_count: usize,
}

impl RegionGraph {
    /// Creates a new graph builder.
    pub fn builder() -> RegionGraphBuilder {
        RegionGraphBuilder::new()
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of distinct undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// All nodes in canonical enumeration order.
    pub fn nodes(&self) -> &[RegionNode] {
        &self.nodes
    }

    /// Node ids in canonical enumeration order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().map(|n| n.id)
    }

    /// Looks up a node by id.
    pub fn node(&self, id: NodeId) -> Option<&RegionNode> {
        self.index_of(id).map(|ix| &self.nodes[ix])
    }

    /// Returns true if the graph contains `id`.
    pub fn contains(&self, id: NodeId) -> bool {
        self.index.contains_key(&id)
    }

    /// Arena index of a node.
    pub fn index_of(&self, id: NodeId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// Number of incident edges of a node.
    pub fn degree(&self, id: NodeId) -> Option<usize> {
        self.index_of(id).map(|ix| self.adjacency[ix].len())
    }

    /// Neighbors of a node in canonical order.
    pub fn neighbors(&self, id: NodeId) -> Option<impl Iterator<Item = NodeId> + '_> {
        self.index_of(id)
            .map(|ix| self.adjacency[ix].iter().map(move |&n| self.nodes[n].id))
    }

    /// Node at an arena index.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    pub fn node_at(&self, index: usize) -> &RegionNode {
        &self.nodes[index]
    }

    /// Degree of the node at an arena index.
    pub fn degree_at(&self, index: usize) -> usize {
        self.adjacency[index].len()
    }

    /// Neighbor indices of the node at an arena index.
    pub fn neighbor_indices(&self, index: usize) -> &[usize] {
        &self.adjacency[index]
    }

    /// Connected components.
    ///
    /// Components are ordered by their first node in canonical order, and
    /// node ids inside a component keep canonical order.
    pub fn components(&self) -> Vec<Vec<NodeId>> {
        let mut label = vec![usize::MAX; self.nodes.len()];
        let mut count = 0;
        let mut stack = Vec::new();

        for start in 0..self.nodes.len() {
            if label[start] != usize::MAX {
                continue;
            }
            label[start] = count;
            stack.push(start);
            while let Some(ix) = stack.pop() {
                for &n in &self.adjacency[ix] {
                    if label[n] == usize::MAX {
                        label[n] = count;
                        stack.push(n);
                    }
                }
            }
            count += 1;
        }

        let mut components = vec![Vec::new(); count];
        for (ix, &c) in label.iter().enumerate() {
            components[c].push(self.nodes[ix].id);
        }
        components
    }

    /// Returns true if every node is reachable from every other node.
    ///
    /// The empty graph counts as connected.
    pub fn is_connected(&self) -> bool {
        self.components().len() <= 1
    }
}
