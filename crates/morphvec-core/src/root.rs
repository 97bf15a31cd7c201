//! Canonical root selection.

use morphvec_graph::{Attribute, NodeId, RegionGraph};

use crate::error::VectorizeError;

/// Selects the traversal root of a graph.
///
/// The root is the node with the highest degree. Equal degrees go to the
/// larger region (`pixel_count`), and a full tie keeps the node enumerated
/// first. Pixel counts are only read on a degree tie.
///
/// The scan always covers the whole graph, so the result only depends on the
/// graph and its enumeration order.
pub fn select_root(graph: &RegionGraph) -> Result<NodeId, VectorizeError> {
    if graph.is_empty() {
        return Err(VectorizeError::EmptyGraph);
    }

    let mut best = 0;
    for ix in 1..graph.len() {
        let degree = graph.degree_at(ix);
        let best_degree = graph.degree_at(best);

        if degree > best_degree
            || (degree == best_degree && pixel_count(graph, ix)? > pixel_count(graph, best)?)
        {
            best = ix;
        }
    }

    let root = graph.node_at(best).id;
    tracing::debug!(
        root = %root,
        degree = graph.degree_at(best),
        nodes = graph.len(),
        "selected root"
    );
    Ok(root)
}

fn pixel_count(graph: &RegionGraph, ix: usize) -> Result<u64, VectorizeError> {
    let node = graph.node_at(ix);
    node.pixel_count
        .ok_or(VectorizeError::MissingAttribute {
            node: node.id,
            attribute: Attribute::PixelCount,
        })
}
