//! Priority breadth-first traversal.
//!
//! A plain BFS whose expansion step enqueues a node's unvisited neighbors in
//! ascending signature order. Equal signatures keep the graph's neighbor
//! enumeration order, so the visiting order is a pure function of topology,
//! signatures and the builder's insertion order.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use morphvec_graph::{Attribute, NodeId, RegionGraph};

use crate::color::color_sign;
use crate::config::NeighborOrdering;
use crate::error::VectorizeError;

/// Output of a traversal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Traversal {
    /// Signed signature of each visited node, in visiting order.
    pub vector: Vec<f64>,
    /// Visited node ids, in visiting order.
    pub order: Vec<NodeId>,
}

/// Traverses `graph` from `root` with the default neighbor ordering.
pub fn traverse(graph: &RegionGraph, root: NodeId) -> Result<Traversal, VectorizeError> {
    traverse_with(graph, root, NeighborOrdering::default())
}

/// Traverses `graph` from `root`.
///
/// Every visited node contributes `sign(mean_color) * weight` to the vector.
/// Nodes not reachable from `root` are not visited.
pub fn traverse_with(
    graph: &RegionGraph,
    root: NodeId,
    ordering: NeighborOrdering,
) -> Result<Traversal, VectorizeError> {
    let root_ix = graph
        .index_of(root)
        .ok_or(VectorizeError::NodeNotFound(root))?;

    // `visited` means "scheduled"; `order` is only written on dequeue, so the
    // root appears in it exactly once.
    let mut visited = vec![false; graph.len()];
    let mut queue: VecDeque<(usize, f64)> = VecDeque::new();
    let mut traversal = Traversal::default();
    let mut frontier: Vec<(usize, f64)> = Vec::new();
    let mut heap: BinaryHeap<HeapEntry> = BinaryHeap::new();
    let mut discovered = 0usize;

    visited[root_ix] = true;
    queue.push_back((root_ix, weight_at(graph, root_ix)?));

    while let Some((ix, _)) = queue.pop_front() {
        let node = graph.node_at(ix);
        let weight = weight_at(graph, ix)?;
        let raw = node.mean_color.ok_or(VectorizeError::MissingAttribute {
            node: node.id,
            attribute: Attribute::MeanColor,
        })?;
        let sign = color_sign(raw).map_err(|_| VectorizeError::InvalidColor {
            value: raw,
            node: Some(node.id),
        })?;

        traversal.order.push(node.id);
        traversal.vector.push(sign * weight);
        tracing::trace!(node = %node.id, weight, sign, "dequeued");

        // Every neighbor's weight is read, visited or not.
        frontier.clear();
        for &n in graph.neighbor_indices(ix) {
            frontier.push((n, weight_at(graph, n)?));
        }

        match ordering {
            NeighborOrdering::Sort => {
                frontier.sort_by(|a, b| cmp_weight(a.1, b.1));
                for &(n, w) in &frontier {
                    if !visited[n] {
                        visited[n] = true;
                        queue.push_back((n, w));
                    }
                }
            }
            NeighborOrdering::Heap => {
                for &(n, w) in &frontier {
                    if !visited[n] {
                        heap.push(HeapEntry {
                            weight: w,
                            seq: discovered,
                            index: n,
                        });
                        discovered += 1;
                    }
                }
                while let Some(entry) = heap.pop() {
                    visited[entry.index] = true;
                    queue.push_back((entry.index, entry.weight));
                }
            }
        }
    }

    tracing::debug!(
        root = %root,
        visited = traversal.order.len(),
        nodes = graph.len(),
        ?ordering,
        "traversal complete"
    );
    Ok(traversal)
}

/// Reads a node's weight, rejecting absent or non-finite values.
fn weight_at(graph: &RegionGraph, ix: usize) -> Result<f64, VectorizeError> {
    let node = graph.node_at(ix);
    let weight = node.weight.ok_or(VectorizeError::MissingAttribute {
        node: node.id,
        attribute: Attribute::Weight,
    })?;
    if !weight.is_finite() {
        return Err(VectorizeError::InvalidWeight {
            value: weight,
            node: node.id,
        });
    }
    Ok(weight)
}

/// Ascending weight order. Weights are finite here, and `-0.0 == 0.0`.
fn cmp_weight(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Min-heap entry: lowest weight first, then earliest discovery.
#[derive(Debug, Clone, Copy)]
struct HeapEntry {
    weight: f64,
    seq: usize,
    index: usize,
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_weight(other.weight, self.weight).then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

#[cfg(test)]
mod tests {
    use super::*;
    use morphvec_graph::RegionNode;
    use pretty_assertions::assert_eq;

    fn ids(raw: &[u32]) -> Vec<NodeId> {
        raw.iter().copied().map(NodeId).collect()
    }

    fn path_graph() -> RegionGraph {
        RegionGraph::builder()
            .node(RegionNode::region(1, 2.0, 0, 10))
            .node(RegionNode::region(2, 1.0, 0, 10))
            .node(RegionNode::region(3, 3.0, 0, 10))
            .edge(1, 2)
            .edge(2, 3)
            .build()
            .unwrap()
    }

    /// 1 is the root with children 4 (w=2), 2 (w=5), 3 (w=2) in that
    /// enumeration order; 2 and 3 each have a child.
    fn tree_with_ties() -> RegionGraph {
        RegionGraph::builder()
            .node(RegionNode::region(1, 0.5, 255, 1))
            .node(RegionNode::region(2, 5.0, 255, 1))
            .node(RegionNode::region(3, 2.0, 0, 1))
            .node(RegionNode::region(4, 2.0, 255, 1))
            .node(RegionNode::region(5, 9.0, 0, 1))
            .node(RegionNode::region(6, 1.0, 1, 1))
            .edge(1, 4)
            .edge(1, 2)
            .edge(1, 3)
            .edge(2, 5)
            .edge(3, 6)
            .build()
            .unwrap()
    }

    #[test]
    fn path_from_middle() {
        let t = traverse(&path_graph(), NodeId(2)).unwrap();
        assert_eq!(t.order, ids(&[2, 1, 3]));
        assert_eq!(t.vector, vec![-1.0, -2.0, -3.0]);
    }

    #[test]
    fn path_from_end_is_plain_bfs() {
        let t = traverse(&path_graph(), NodeId(3)).unwrap();
        assert_eq!(t.order, ids(&[3, 2, 1]));
    }

    #[test]
    fn equal_weights_keep_enumeration_order() {
        let t = traverse(&tree_with_ties(), NodeId(1)).unwrap();
        assert_eq!(t.order, ids(&[1, 4, 3, 2, 6, 5]));
        assert_eq!(t.vector, vec![0.5, 2.0, -2.0, 5.0, 1.0, -9.0]);
    }

    #[test]
    fn heap_matches_sort() {
        let graph = tree_with_ties();
        for root in graph.node_ids() {
            let sorted = traverse_with(&graph, root, NeighborOrdering::Sort).unwrap();
            let heaped = traverse_with(&graph, root, NeighborOrdering::Heap).unwrap();
            assert_eq!(sorted, heaped, "root {}", root);
        }
    }

    #[test]
    fn negative_and_positive_zero_tie() {
        let graph = RegionGraph::builder()
            .node(RegionNode::region(1, 1.0, 0, 1))
            .node(RegionNode::region(2, 0.0, 0, 1))
            .node(RegionNode::region(3, -0.0, 0, 1))
            .edge(1, 2)
            .edge(1, 3)
            .build()
            .unwrap();
        for ordering in [NeighborOrdering::Sort, NeighborOrdering::Heap] {
            let t = traverse_with(&graph, NodeId(1), ordering).unwrap();
            assert_eq!(t.order, ids(&[1, 2, 3]));
        }
    }

    #[test]
    fn cycle_visits_each_node_once() {
        let graph = RegionGraph::builder()
            .node(RegionNode::region(1, 1.0, 0, 1))
            .node(RegionNode::region(2, 3.0, 0, 1))
            .node(RegionNode::region(3, 2.0, 0, 1))
            .node(RegionNode::region(4, 0.5, 0, 1))
            .edge(1, 2)
            .edge(2, 3)
            .edge(3, 4)
            .edge(4, 1)
            .edge(1, 3)
            .build()
            .unwrap();
        let t = traverse(&graph, NodeId(1)).unwrap();
        assert_eq!(t.order, ids(&[1, 4, 3, 2]));
    }

    #[test]
    fn unreachable_nodes_are_skipped() {
        let graph = RegionGraph::builder()
            .node(RegionNode::region(1, 1.0, 0, 1))
            .node(RegionNode::region(2, 2.0, 0, 1))
            .node(RegionNode::region(3, 3.0, 0, 1))
            .edge(1, 2)
            .build()
            .unwrap();
        let t = traverse(&graph, NodeId(1)).unwrap();
        assert_eq!(t.order, ids(&[1, 2]));
    }

    #[test]
    fn unknown_root_is_lookup_error() {
        let err = traverse(&path_graph(), NodeId(99)).unwrap_err();
        assert_eq!(err, VectorizeError::NodeNotFound(NodeId(99)));
    }

    #[test]
    fn invalid_color_names_the_node() {
        let graph = RegionGraph::builder()
            .node(RegionNode::region(1, 1.0, 0, 1))
            .node(RegionNode::region(2, 1.0, 128, 1))
            .edge(1, 2)
            .build()
            .unwrap();
        let err = traverse(&graph, NodeId(1)).unwrap_err();
        assert_eq!(
            err,
            VectorizeError::InvalidColor {
                value: 128,
                node: Some(NodeId(2))
            }
        );
    }

    #[test]
    fn missing_neighbor_weight_is_error() {
        let graph = RegionGraph::builder()
            .node(RegionNode::region(1, 1.0, 0, 1))
            .node(RegionNode::new(2).with_mean_color(0))
            .edge(1, 2)
            .build()
            .unwrap();
        let err = traverse(&graph, NodeId(1)).unwrap_err();
        assert_eq!(
            err,
            VectorizeError::MissingAttribute {
                node: NodeId(2),
                attribute: Attribute::Weight
            }
        );
    }

    #[test]
    fn missing_color_is_error() {
        let graph = RegionGraph::builder()
            .node(RegionNode::new(1).with_weight(1.0))
            .build()
            .unwrap();
        let err = traverse(&graph, NodeId(1)).unwrap_err();
        assert_eq!(
            err,
            VectorizeError::MissingAttribute {
                node: NodeId(1),
                attribute: Attribute::MeanColor
            }
        );
    }

    #[test]
    fn non_finite_weight_is_validation_error() {
        let graph = RegionGraph::builder()
            .node(RegionNode::region(1, f64::INFINITY, 0, 1))
            .build()
            .unwrap();
        let err = traverse(&graph, NodeId(1)).unwrap_err();
        assert_eq!(err.code(), "VEC_002");
    }

    #[test]
    fn heap_entries_pop_lowest_weight_then_earliest() {
        let mut heap = BinaryHeap::new();
        for (seq, (weight, index)) in [(3.0, 0), (1.0, 1), (3.0, 2), (1.0, 3)].into_iter().enumerate() {
            heap.push(HeapEntry { weight, seq, index });
        }
        let popped: Vec<usize> = std::iter::from_fn(|| heap.pop().map(|e| e.index)).collect();
        assert_eq!(popped, vec![1, 3, 0, 2]);
    }
}
